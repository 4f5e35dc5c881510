//! Two-party dialogue inside a setting.
//!
//! # Turn protocol
//!
//! ```text
//! pick initiator I, responder R (distinct, uniform)
//! I.memory += "Setting: Start an interaction with R."
//! repeat N times:
//!     line = "<speaker> (<role>): " + speaker.respond(setting)
//!     interactions += line
//!     every member of the setting: memory += line
//!     swap(speaker, listener)
//! ```
//!
//! The turn count is unconditional: no early stop, no retry. An empty reply
//! is recorded as an empty utterance. Every line reaches every member of the
//! setting, not just the two speakers, so bystanders carry the conversation
//! into later events.

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use super::Setting;
use crate::agent::{Agent, AgentId};
use crate::error::{Result, SimError};
use crate::oracle::Oracle;

/// Turns per event unless configured otherwise
pub const DEFAULT_TURNS: usize = 10;

/// One bounded dialogue over a setting
#[derive(Debug)]
pub struct Event<'s> {
    id: Uuid,
    setting: &'s Setting,
    interactions: Vec<String>,
    speakers: Vec<AgentId>,
    pair: Option<(AgentId, AgentId)>,
}

impl<'s> Event<'s> {
    /// New event with an empty transcript
    pub fn new(setting: &'s Setting) -> Self {
        Self {
            id: Uuid::new_v4(),
            setting,
            interactions: Vec::new(),
            speakers: Vec::new(),
            pair: None,
        }
    }

    /// Event identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Setting the event takes place in
    pub fn setting(&self) -> &'s Setting {
        self.setting
    }

    /// Formatted turn lines so far
    pub fn interactions(&self) -> &[String] {
        &self.interactions
    }

    /// Who spoke each turn
    pub fn speakers(&self) -> &[AgentId] {
        &self.speakers
    }

    /// (initiator, responder) once the dialogue has started
    pub fn pair(&self) -> Option<(AgentId, AgentId)> {
        self.pair
    }

    /// Consume the event, keeping only its transcript
    pub fn into_transcript(self) -> Vec<String> {
        self.interactions
    }

    /// Pick two distinct members uniformly at random: (initiator, responder)
    pub fn pick_pair(&self, rng: &mut impl Rng) -> Result<(AgentId, AgentId)> {
        let members = self.setting.members();
        let not_enough = || SimError::NotEnoughAgents {
            setting: self.setting.name().to_string(),
            available: members.len(),
        };

        let initiator = *members.choose(rng).ok_or_else(not_enough)?;
        let others: Vec<AgentId> = members
            .iter()
            .copied()
            .filter(|id| *id != initiator)
            .collect();
        let responder = *others.choose(rng).ok_or_else(not_enough)?;

        Ok((initiator, responder))
    }

    /// Pick a random pair and run `turns` turns of dialogue
    pub async fn simulate_interaction(
        &mut self,
        roster: &mut [Agent],
        oracle: &dyn Oracle,
        turns: usize,
        rng: &mut impl Rng,
    ) -> Result<()> {
        let (initiator, responder) = self.pick_pair(rng)?;
        self.run_dialogue(roster, oracle, initiator, responder, turns)
            .await
    }

    /// Run `turns` alternating turns starting with `initiator`
    pub async fn run_dialogue(
        &mut self,
        roster: &mut [Agent],
        oracle: &dyn Oracle,
        initiator: AgentId,
        responder: AgentId,
        turns: usize,
    ) -> Result<()> {
        let setting = self.setting;
        self.pair = Some((initiator, responder));

        let responder_name = lookup(roster, responder)?.name().to_string();
        lookup_mut(roster, initiator)?
            .add_memory(format!("Setting: Start an interaction with {responder_name}."));

        tracing::debug!(
            event = %self.id,
            setting = %setting.name(),
            initiator = %initiator,
            responder = %responder,
            turns,
            "dialogue started"
        );

        let (mut current, mut other) = (initiator, responder);
        for turn in 0..turns {
            let line = {
                let view: &[Agent] = roster;
                let speaker = lookup(view, current)?;
                let reply = speaker.respond(oracle, setting, view).await?;
                format!("{} ({}): {}", speaker.name(), speaker.role(), reply)
            };

            tracing::debug!(event = %self.id, turn, "{line}");

            for member in setting.members() {
                lookup_mut(roster, *member)?.add_memory(line.clone());
            }
            self.interactions.push(line);
            self.speakers.push(current);

            std::mem::swap(&mut current, &mut other);
        }

        Ok(())
    }
}

fn lookup(roster: &[Agent], id: AgentId) -> Result<&Agent> {
    roster.get(id.0).ok_or(SimError::UnknownAgent(id.0))
}

fn lookup_mut(roster: &mut [Agent], id: AgentId) -> Result<&mut Agent> {
    roster.get_mut(id.0).ok_or(SimError::UnknownAgent(id.0))
}
