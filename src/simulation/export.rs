//! Result export.
//!
//! The text artifact has two sections, written in one pass:
//!
//! ```text
//! Agent Personas:
//!
//! Prisoner 1 (prisoner):
//! Biography: ...
//! Persona Details:
//!   Temperament: calm
//!   ...
//!
//!
//! --- Simulation Results ---
//! Event: Cafeteria
//! Scores: {Safety: 7, Respectfulness: 9, Realism: 6}
//! Interactions:
//! Guard 1 (guard): ...
//! ```
//!
//! The file is written once, after all events finish. An interrupted write
//! leaves a truncated file behind.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::json;

use super::Simulation;
use crate::error::Result;

impl Simulation {
    /// Write the persona section
    pub fn write_personas<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Agent Personas:")?;
        for agent in &self.agents {
            writeln!(out, "\n{} ({}):", agent.name(), agent.role())?;
            writeln!(out, "Biography: {}", agent.biography())?;
            writeln!(out, "Persona Details:")?;
            for (name, value) in agent.persona().traits() {
                writeln!(out, "  {name}: {value}")?;
            }
        }
        Ok(())
    }

    /// Write personas followed by every result, in accumulation order
    pub fn write_results<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        self.write_personas(out)?;

        write!(out, "\n\n--- Simulation Results ---\n")?;
        for result in &self.results {
            writeln!(out, "Event: {}", result.event)?;
            writeln!(out, "Scores: {}", result.scores)?;
            writeln!(out, "Interactions:")?;
            write!(out, "{}", result.transcript.join("\n"))?;
            write!(out, "\n\n")?;
        }
        Ok(())
    }

    /// Write the text export to `path`
    pub fn export_results(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write_results(&mut out)?;
        out.flush()?;

        tracing::info!(path = %path.display(), results = self.results.len(), "results exported");
        Ok(())
    }

    /// JSON document with agents, results and summary
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "simulation": {
                "agents": self.agents.len(),
                "settings": self.settings.iter().map(|s| s.name()).collect::<Vec<_>>(),
                "turns": self.turns,
                "events": self.results.len(),
                "model": self.oracle.model(),
            },
            "agents": self.agents.iter().map(|a| {
                json!({
                    "name": a.name(),
                    "role": a.role(),
                    "biography": a.biography(),
                    "persona": a.persona(),
                })
            }).collect::<Vec<_>>(),
            "results": self.results,
            "summary": self.summary(),
        })
    }

    /// Write the JSON export to `path`
    pub fn export_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let out = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(out, &self.to_json())?;

        tracing::info!(path = %path.display(), "JSON results exported");
        Ok(())
    }
}
