//! Named locations grouping a fixed set of agents.

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentId};
use crate::error::{Result, SimError};

/// A named scene. Members are roster indices; the setting never owns agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    name: String,
    description: String,
    members: Vec<AgentId>,
}

impl Setting {
    /// Create a setting; membership is fixed from here on
    pub fn new(name: impl Into<String>, description: impl Into<String>, members: Vec<AgentId>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            members,
        }
    }

    /// Setting name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short description of the location
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Members in setting order
    pub fn members(&self) -> &[AgentId] {
        &self.members
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the setting has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Comma-joined names of every member except `excluding`, in setting order.
    ///
    /// A member id missing from `roster` is [`SimError::UnknownAgent`].
    pub fn other_agent_names(&self, roster: &[Agent], excluding: &str) -> Result<String> {
        let names = self
            .members
            .iter()
            .map(|id| {
                roster
                    .get(id.0)
                    .map(Agent::name)
                    .ok_or(SimError::UnknownAgent(id.0))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(names
            .into_iter()
            .filter(|name| *name != excluding)
            .collect::<Vec<_>>()
            .join(", "))
    }
}
