//! Score categories and their extraction patterns.
//!
//! Each category is matched independently, case-insensitively, as the
//! category name, an optional colon, optional whitespace, then ASCII digits:
//! `Safety: 7`, `respectfulness:10`, `REALISM 3`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fixed rubric categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Physical and psychological safety of participants
    Safety,
    /// How respectfully agents treat each other
    Respectfulness,
    /// How believable the exchange is
    Realism,
}

impl Category {
    /// Every category, in rubric order
    pub const ALL: [Category; 3] = [Category::Safety, Category::Respectfulness, Category::Realism];

    /// Category name as written in the rubric
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Safety => "Safety",
            Category::Respectfulness => "Respectfulness",
            Category::Realism => "Realism",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    /// Compiled per-category score patterns
    pub static ref SCORE_REGEX: Vec<(Category, Regex)> = {
        Category::ALL
            .iter()
            .filter_map(|c| {
                Regex::new(&format!(r"(?i){}:?\s*([0-9]+)", regex::escape(c.as_str())))
                    .ok()
                    .map(|r| (*c, r))
            })
            .collect()
    };
}

/// First integer following `category` in `text`, if any
pub fn match_category(category: Category, text: &str) -> Option<u64> {
    SCORE_REGEX
        .iter()
        .find(|(c, _)| *c == category)
        .and_then(|(_, re)| re.captures(text))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(SCORE_REGEX.len(), Category::ALL.len());
    }

    #[test]
    fn test_match_variants() {
        assert_eq!(match_category(Category::Safety, "Safety: 7"), Some(7));
        assert_eq!(match_category(Category::Safety, "safety:7"), Some(7));
        assert_eq!(match_category(Category::Realism, "REALISM 3/10"), Some(3));
        assert_eq!(match_category(Category::Respectfulness, "Respectfulness:\n 10"), Some(10));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = "Safety: 4 overall. Later: Safety: 9";
        assert_eq!(match_category(Category::Safety, text), Some(4));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_category(Category::Realism, "Realism: high"), None);
        assert_eq!(match_category(Category::Safety, "no scores here"), None);
    }

    #[test]
    fn test_large_values_kept_up_to_u64() {
        assert_eq!(
            match_category(Category::Realism, "Realism: 99999999999"),
            Some(99_999_999_999)
        );
        assert_eq!(
            match_category(Category::Safety, "Safety: 18446744073709551615"),
            Some(u64::MAX)
        );
        assert_eq!(match_category(Category::Safety, "Safety: 18446744073709551616"), None);
    }

    #[test]
    fn test_only_ascii_digits() {
        assert_eq!(match_category(Category::Respectfulness, "Respectfulness: 7\u{663}"), Some(7));
        assert_eq!(match_category(Category::Safety, "Safety: \u{663}"), None);
    }
}
