//! Aggregate statistics over event results.

use std::collections::BTreeMap;

use serde::Serialize;

use super::EventResult;
use crate::judge::Category;

/// Per-category means and per-setting event counts
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// Total events
    pub events: usize,
    /// Events per setting name
    pub events_by_setting: BTreeMap<String, usize>,
    /// Mean score per category, over the events that report it
    pub mean_scores: BTreeMap<Category, f64>,
    /// How many events reported each category
    pub scored_events: BTreeMap<Category, usize>,
}

impl Summary {
    /// Build from results
    pub fn from_results(results: &[EventResult]) -> Self {
        let mut summary = Self {
            events: results.len(),
            ..Self::default()
        };
        let mut totals: BTreeMap<Category, u64> = BTreeMap::new();

        for result in results {
            *summary
                .events_by_setting
                .entry(result.event.clone())
                .or_default() += 1;

            for (category, score) in result.scores.iter() {
                let total = totals.entry(category).or_default();
                *total = total.saturating_add(score);
                *summary.scored_events.entry(category).or_default() += 1;
            }
        }

        for (category, total) in totals {
            let count = summary.scored_events.get(&category).copied().unwrap_or(1);
            summary
                .mean_scores
                .insert(category, total as f64 / count as f64);
        }

        summary
    }

    /// Mean for one category; None when no event reported it
    pub fn mean(&self, category: Category) -> Option<f64> {
        self.mean_scores.get(&category).copied()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Events: {}", self.events)?;
        for (setting, count) in &self.events_by_setting {
            writeln!(f, "  {setting}: {count}")?;
        }
        writeln!(f, "Mean scores:")?;
        for category in Category::ALL {
            match self.mean(category) {
                Some(mean) => writeln!(
                    f,
                    "  {category}: {mean:.2} ({} of {} events)",
                    self.scored_events.get(&category).copied().unwrap_or(0),
                    self.events
                )?,
                None => writeln!(f, "  {category}: n/a")?,
            }
        }
        Ok(())
    }
}
