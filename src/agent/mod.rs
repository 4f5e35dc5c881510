//! Simulated participants.
//!
//! An agent owns its persona, a biography derived from it, and an
//! append-only memory log. The biography is always the first memory entry;
//! every later entry is a line the agent witnessed, in the order it was
//! witnessed. [`Agent::add_memory`] is the only mutation path.

mod role;

pub use role::Role;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::oracle::{ChatMessage, Oracle};
use crate::persona::{biography, Persona};
use crate::scene::Setting;

/// Index of an agent in the simulation roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub usize);

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent#{}", self.0)
    }
}

/// A participant in the simulation
#[derive(Debug, Clone)]
pub struct Agent {
    id: AgentId,
    name: String,
    role: Role,
    persona: Persona,
    biography: String,
    memory: Vec<String>,
}

impl Agent {
    /// Create an agent with a freshly sampled persona and biography
    pub fn new(id: AgentId, name: impl Into<String>, role: Role, rng: &mut impl Rng) -> Self {
        let name = name.into();
        let persona = Persona::generate(rng);
        let biography = biography(&name, role, &persona, rng);

        Self {
            id,
            name,
            role,
            persona,
            memory: vec![biography.clone()],
            biography,
        }
    }

    /// Create an agent from a role name; fails on anything but prisoner/guard
    pub fn create(
        id: AgentId,
        name: impl Into<String>,
        role: &str,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let role: Role = role.parse()?;
        Ok(Self::new(id, name, role, rng))
    }

    /// Roster index
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Unique name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Persona
    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Biography text
    pub fn biography(&self) -> &str {
        &self.biography
    }

    /// Everything this agent remembers, oldest first
    pub fn memory(&self) -> &[String] {
        &self.memory
    }

    /// Append one entry to memory
    pub fn add_memory(&mut self, text: impl Into<String>) {
        self.memory.push(text.into());
    }

    /// Memory entries joined by newlines, in order
    pub fn format_memory(&self) -> String {
        self.memory.join("\n")
    }

    /// Role-setting instruction for a turn in `setting`
    pub fn system_prompt(&self, setting: &Setting, roster: &[Agent]) -> Result<String> {
        Ok(format!(
            "You are {}, a {} in a simulated prison experiment. You are in {} with {}. \
             Respond realistically to the scenario.",
            self.name,
            self.role,
            setting.name(),
            setting.other_agent_names(roster, &self.name)?,
        ))
    }

    /// Ask the oracle for this agent's next line in `setting`.
    ///
    /// The full memory is sent as context. The reply is trimmed; an empty
    /// reply is returned as-is.
    pub async fn respond(
        &self,
        oracle: &dyn Oracle,
        setting: &Setting,
        roster: &[Agent],
    ) -> Result<String> {
        let messages = vec![
            ChatMessage::system(self.system_prompt(setting, roster)?),
            ChatMessage::user(format!("{}\n", self.format_memory())),
        ];

        tracing::debug!(
            agent = %self.name,
            setting = %setting.name(),
            memory = self.memory.len(),
            "requesting utterance"
        );

        let reply = oracle.complete(messages).await?;
        Ok(reply.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    #[test]
    fn test_memory_seeded_with_biography() {
        let agent = Agent::new(AgentId(0), "Prisoner 1", Role::Prisoner, &mut rng());
        assert_eq!(agent.memory().len(), 1);
        assert_eq!(agent.memory()[0], agent.biography());
        assert!(agent.biography().starts_with("Prisoner 1 is a prisoner"));
    }

    #[test]
    fn test_add_memory_preserves_order() {
        let mut agent = Agent::new(AgentId(0), "Guard 1", Role::Guard, &mut rng());
        agent.add_memory("first");
        agent.add_memory(String::from("second"));
        agent.add_memory("third");

        assert_eq!(agent.memory().len(), 4);
        assert_eq!(&agent.memory()[1..], ["first", "second", "third"]);
        assert!(agent.format_memory().ends_with("\nfirst\nsecond\nthird"));
    }

    #[test]
    fn test_create_rejects_unknown_role() {
        let err = Agent::create(AgentId(0), "Warden 1", "warden", &mut rng()).unwrap_err();
        assert!(matches!(err, SimError::UnknownRole(_)));

        let agent = Agent::create(AgentId(3), "Guard 1", "guard", &mut rng()).unwrap();
        assert_eq!(agent.role(), Role::Guard);
        assert_eq!(agent.id(), AgentId(3));
    }

    #[test]
    fn test_system_prompt_names_others() {
        let mut r = rng();
        let roster = vec![
            Agent::new(AgentId(0), "Guard 1", Role::Guard, &mut r),
            Agent::new(AgentId(1), "Guard 2", Role::Guard, &mut r),
            Agent::new(AgentId(2), "Guard 3", Role::Guard, &mut r),
        ];
        let setting = Setting::new(
            "Guard Rest Area",
            "A break room for guards",
            vec![AgentId(0), AgentId(1), AgentId(2)],
        );

        let prompt = roster[1].system_prompt(&setting, &roster).unwrap();
        assert!(prompt.starts_with("You are Guard 2, a guard in a simulated prison experiment."));
        assert!(prompt.contains("You are in Guard Rest Area with Guard 1, Guard 3."));
    }
}
