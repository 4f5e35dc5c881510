//! Static biography text.
//!
//! Background stories per role and descriptions per trait value. The
//! entries are plain data; only [`biography`] composes them.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Level, Persona, Temperament};
use crate::agent::Role;

/// Prisoner backgrounds
pub static PRISONER_BACKGROUNDS: &[&str] = &[
    "grew up in a tough neighborhood",
    "came from a broken family",
    "struggled with addiction",
    "had limited educational opportunities",
    "experienced financial hardship",
];

/// Guard backgrounds
pub static GUARD_BACKGROUNDS: &[&str] = &[
    "comes from a law enforcement family",
    "served in the military",
    "is seeking stability in their career",
    "is passionate about maintaining order",
    "is supporting a family through this job",
];

/// Background stories available to a role
pub fn backgrounds(role: Role) -> &'static [&'static str] {
    match role {
        Role::Prisoner => PRISONER_BACKGROUNDS,
        Role::Guard => GUARD_BACKGROUNDS,
    }
}

/// Temperament description
pub fn temperament_description(temperament: Temperament) -> &'static str {
    match temperament {
        Temperament::Calm => "known for staying level-headed in stressful situations",
        Temperament::Aggressive => "quick to react and prone to confrontations",
        Temperament::Nervous => "easily stressed and anxious",
        Temperament::Confident => "self-assured and decisive",
    }
}

/// Assertiveness description
pub fn assertiveness_description(level: Level) -> &'static str {
    match level {
        Level::Low => "tends to avoid conflicts and goes with the flow",
        Level::Medium => "speaks up when necessary but isn't confrontational",
        Level::High => "direct and unafraid to express opinions strongly",
    }
}

/// Empathy description
pub fn empathy_description(level: Level) -> &'static str {
    match level {
        Level::Low => "struggles to understand others' emotional states",
        Level::Medium => "tries to understand different perspectives",
        Level::High => "deeply sensitive to others' feelings",
    }
}

/// Compliance description
pub fn compliance_description(level: Level) -> &'static str {
    match level {
        Level::Low => "frequently questions rules and authority",
        Level::Medium => "follows most rules with occasional resistance",
        Level::High => "strictly adheres to protocols and expectations",
    }
}

/// Compose a biography for `name` from a random background and the persona
pub fn biography(name: &str, role: Role, persona: &Persona, rng: &mut impl Rng) -> String {
    let background = backgrounds(role)
        .choose(rng)
        .copied()
        .unwrap_or_default();

    format!(
        "{name} is a {role} who {background}. They are {temperament}, \
         with a {assertiveness} level of assertiveness ({assertiveness_desc}). \
         Their empathy is {empathy} ({empathy_desc}), and they tend to be {compliance} \
         when it comes to following rules.",
        temperament = temperament_description(persona.temperament),
        assertiveness = persona.assertiveness,
        assertiveness_desc = assertiveness_description(persona.assertiveness),
        empathy = persona.empathy,
        empathy_desc = empathy_description(persona.empathy),
        compliance = compliance_description(persona.compliance),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn persona() -> Persona {
        Persona {
            temperament: Temperament::Calm,
            assertiveness: Level::Medium,
            empathy: Level::High,
            compliance: Level::Low,
        }
    }

    #[test]
    fn test_biography_mentions_traits() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let bio = biography("Guard 2", Role::Guard, &persona(), &mut rng);

        assert!(bio.starts_with("Guard 2 is a guard who "));
        assert!(bio.contains("level-headed"));
        assert!(bio.contains("medium level of assertiveness"));
        assert!(bio.contains("Their empathy is high"));
        assert!(bio.contains("frequently questions rules and authority"));
    }

    #[test]
    fn test_biography_background_matches_role() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..50 {
            let bio = biography("Prisoner 1", Role::Prisoner, &persona(), &mut rng);
            assert!(PRISONER_BACKGROUNDS.iter().any(|b| bio.contains(b)));
            assert!(!GUARD_BACKGROUNDS.iter().any(|b| bio.contains(b)));
        }
    }
}
