//! Property tests for personas, memory growth and score extraction.

use prison_sim::{Agent, AgentId, Category, Level, Persona, Role, ScoreRecord, Temperament};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn category_name() -> impl Strategy<Value = (Category, String)> {
    prop_oneof![
        Just(Category::Safety),
        Just(Category::Respectfulness),
        Just(Category::Realism),
    ]
    .prop_flat_map(|c| {
        // random casing of the category name
        let name = c.as_str().to_string();
        proptest::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
            let cased: String = name
                .chars()
                .zip(upper)
                .map(|(ch, up)| {
                    if up {
                        ch.to_ascii_uppercase()
                    } else {
                        ch.to_ascii_lowercase()
                    }
                })
                .collect();
            (c, cased)
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_persona_traits_in_domain(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..1000 {
            let p = Persona::generate(&mut rng);
            prop_assert!(Temperament::ALL.contains(&p.temperament));
            prop_assert!(Level::ALL.contains(&p.assertiveness));
            prop_assert!(Level::ALL.contains(&p.empathy));
            prop_assert!(Level::ALL.contains(&p.compliance));
        }
    }

    #[test]
    fn prop_memory_grows_in_call_order(
        seed in any::<u64>(),
        entries in proptest::collection::vec(".{0,40}", 0..50),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut agent = Agent::new(AgentId(0), "Prisoner 1", Role::Prisoner, &mut rng);
        let biography = agent.biography().to_string();

        for entry in &entries {
            agent.add_memory(entry.clone());
        }

        prop_assert_eq!(agent.memory().len(), entries.len() + 1);
        prop_assert_eq!(&agent.memory()[0], &biography);
        prop_assert_eq!(&agent.memory()[1..], entries.as_slice());
    }

    #[test]
    fn prop_score_extracted_regardless_of_case(
        (category, cased) in category_name(),
        score in 0u64..=100,
        colon in any::<bool>(),
        spaces in 0usize..3,
    ) {
        let reply = format!(
            "Evaluation. {cased}{}{}{score} and nothing else",
            if colon { ":" } else { "" },
            " ".repeat(spaces),
        );
        let record = ScoreRecord::parse(&reply);

        prop_assert_eq!(record.get(category), Some(score));
        prop_assert_eq!(record.len(), 1);
    }

    #[test]
    fn prop_record_keys_are_rubric_categories(text in ".{0,200}") {
        let record = ScoreRecord::parse(&text);
        prop_assert!(record.len() <= Category::ALL.len());
        for (category, _) in record.iter() {
            prop_assert!(Category::ALL.contains(&category));
        }
    }
}
