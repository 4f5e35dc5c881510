//! Simulation orchestrator.
//!
//! Owns the agent roster, the four fixed settings and the accumulated
//! results. Events run strictly one after another:
//!
//! ```text
//! for each event:
//!     setting  = uniform pick from settings
//!     event    = Event::new(setting).simulate_interaction(turns)
//!     scores   = Judge::evaluate(event transcript)
//!     results += EventResult { setting, scores, transcript }
//! ```
//!
//! An oracle failure anywhere in an event propagates out of
//! [`Simulation::run_simulation`] before that event's result is stored, so
//! the result list never holds a truncated transcript.

mod export;
mod summary;

pub use summary::Summary;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::{Agent, AgentId, Role};
use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::judge::{Judge, ScoreRecord};
use crate::oracle::Oracle;
use crate::scene::{Event, Setting, DEFAULT_TURNS};

/// Default number of prisoners
pub const DEFAULT_PRISONERS: usize = 6;

/// Default number of guards
pub const DEFAULT_GUARDS: usize = 3;

/// Outcome of one event, immutable once recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResult {
    /// Event identifier
    pub event_id: Uuid,
    /// Name of the setting the event ran in
    pub event: String,
    /// Setting description
    pub description: String,
    /// Judge scores
    pub scores: ScoreRecord,
    /// Formatted turn lines, in order
    pub transcript: Vec<String>,
    /// When judging finished
    pub completed_at: DateTime<Utc>,
}

/// The full simulation state
pub struct Simulation {
    agents: Vec<Agent>,
    settings: Vec<Setting>,
    results: Vec<EventResult>,
    oracle: Arc<dyn Oracle>,
    turns: usize,
}

impl Simulation {
    /// Default population (6 prisoners, 3 guards), 10 turns per event
    pub fn new(oracle: Arc<dyn Oracle>, rng: &mut impl Rng) -> Self {
        let agents = Self::create_agents(DEFAULT_PRISONERS, DEFAULT_GUARDS, rng);
        let settings = Self::create_settings(&agents);

        Self {
            agents,
            settings,
            results: Vec::new(),
            oracle,
            turns: DEFAULT_TURNS,
        }
    }

    /// Population and turn count from config.
    ///
    /// Fails with [`SimError::NotEnoughAgents`] if the population leaves any
    /// setting with fewer than two members.
    pub fn from_config(
        config: &SimulationConfig,
        oracle: Arc<dyn Oracle>,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let agents = Self::create_agents(config.prisoners, config.guards, rng);
        let settings = Self::create_settings(&agents);
        Self::check_settings(&settings)?;

        Ok(Self {
            agents,
            settings,
            results: Vec::new(),
            oracle,
            turns: config.turns,
        })
    }

    /// Every setting must be able to host a two-party dialogue
    pub fn check_settings(settings: &[Setting]) -> Result<()> {
        if settings.is_empty() {
            return Err(SimError::Config("simulation has no settings".to_string()));
        }
        match settings.iter().find(|s| s.len() < 2) {
            Some(setting) => Err(SimError::NotEnoughAgents {
                setting: setting.name().to_string(),
                available: setting.len(),
            }),
            None => Ok(()),
        }
    }

    /// Override the per-event turn count
    pub fn with_turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    /// Prisoners first, then guards, named "Prisoner 1", "Guard 1", ...
    pub fn create_agents(prisoners: usize, guards: usize, rng: &mut impl Rng) -> Vec<Agent> {
        let mut agents = Vec::with_capacity(prisoners + guards);

        for (role, count) in [(Role::Prisoner, prisoners), (Role::Guard, guards)] {
            for i in 0..count {
                let id = AgentId(agents.len());
                agents.push(Agent::new(id, format!("{} {}", role.title(), i + 1), role, rng));
            }
        }

        agents
    }

    /// The four fixed scenes, membership computed by role over `agents`
    pub fn create_settings(agents: &[Agent]) -> Vec<Setting> {
        let with_role = |role: Role| -> Vec<AgentId> {
            agents
                .iter()
                .filter(|a| a.role() == role)
                .map(Agent::id)
                .collect()
        };
        let everyone: Vec<AgentId> = agents.iter().map(Agent::id).collect();

        vec![
            Setting::new(
                "Guard Rest Area",
                "A break room for guards",
                with_role(Role::Guard),
            ),
            Setting::new("Cafeteria", "A common eating area", everyone.clone()),
            Setting::new(
                "Cell Block",
                "A row of cells shared by prisoners",
                with_role(Role::Prisoner),
            ),
            Setting::new("Recreation Yard", "An open space for exercise", everyone),
        ]
    }

    /// Roster
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Settings
    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    /// Accumulated results, in run order
    pub fn results(&self) -> &[EventResult] {
        &self.results
    }

    /// Turns per event
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Aggregate statistics over the results so far
    pub fn summary(&self) -> Summary {
        Summary::from_results(&self.results)
    }

    /// Run one event in a random setting, judge it and record the result
    pub async fn run_event(&mut self, rng: &mut impl Rng) -> Result<&EventResult> {
        if self.settings.is_empty() {
            return Err(SimError::Config("simulation has no settings".to_string()));
        }
        let setting = &self.settings[rng.gen_range(0..self.settings.len())];
        let oracle = self.oracle.as_ref();

        tracing::info!(
            setting = %setting.name(),
            members = setting.len(),
            turns = self.turns,
            "event starting"
        );

        let mut event = Event::new(setting);
        event
            .simulate_interaction(&mut self.agents, oracle, self.turns, rng)
            .await?;

        let scores = Judge::new(oracle).evaluate(event.interactions()).await?;
        tracing::info!(setting = %setting.name(), %scores, "event judged");

        let event_id = event.id();
        let index = self.results.len();
        self.results.push(EventResult {
            event_id,
            event: setting.name().to_string(),
            description: setting.description().to_string(),
            scores,
            transcript: event.into_transcript(),
            completed_at: Utc::now(),
        });

        Ok(&self.results[index])
    }

    /// Run `num_events` events back to back; the first failure aborts
    pub async fn run_simulation(&mut self, num_events: usize, rng: &mut impl Rng) -> Result<()> {
        for n in 0..num_events {
            tracing::debug!(event = n + 1, total = num_events, "running event");
            self.run_event(rng).await?;
        }
        Ok(())
    }
}
