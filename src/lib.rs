//! # Prison Sim - Multi-Agent Role-Play Simulation
//!
//! Simulates a small prison experiment: prisoners and guards with randomly
//! generated personas talk to each other in shared settings, an LLM voices
//! every line, and a judge scores each conversation for safety,
//! respectfulness and realism.
//!
//! ## Architecture
//!
//! ```text
//! Simulation ──picks──> Setting ──hosts──> Event ──turns──> Agent::respond ──> Oracle
//!     │                                      │
//!     │<──────────── transcript ─────────────┘
//!     │
//!     └──> Judge::evaluate ──> Oracle ──> ScoreRecord ──> EventResult
//! ```
//!
//! ### Memory model
//!
//! Each agent's memory starts with its biography and only ever grows. Every
//! line spoken in an event is appended to the memory of every agent in that
//! event's setting, so all of them hold the same lines in the same order.
//!
//! ### Turn protocol
//!
//! ```text
//! initiator I, responder R
//! turn 1: I speaks    turn 2: R speaks    turn 3: I speaks    ...
//! ```
//!
//! Exactly `turns` lines are produced per event, formatted
//! `"<name> (<role>): <utterance>"`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use prison_sim::{DryRunOracle, Simulation};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut sim = Simulation::new(Arc::new(DryRunOracle::new()), &mut rng);
//!
//! sim.run_simulation(3, &mut rng).await?;
//! sim.export_results("simulation_results.txt")?;
//! println!("{}", sim.summary());
//! ```
//!
//! ## Modules
//!
//! - [`persona`]: trait sampling and biography text
//! - [`agent`]: agents, roles and memory
//! - [`scene`]: settings and the event turn protocol
//! - [`judge`]: rubric prompt and score extraction
//! - [`oracle`]: text-generation backends
//! - [`simulation`]: orchestration, summary and export
//! - [`config`]: configuration management
//! - [`error`]: error types and result aliases

pub mod agent;
pub mod config;
pub mod error;
pub mod judge;
pub mod oracle;
pub mod persona;
pub mod scene;
pub mod simulation;

// Re-exports for convenience
pub use agent::{Agent, AgentId, Role};
pub use config::{Config, OracleConfig, SimulationConfig};
pub use error::{Result, SimError};
pub use judge::{Category, Judge, ScoreRecord};
pub use oracle::{ChatMessage, DryRunOracle, HttpOracle, Oracle};
pub use persona::{Level, Persona, Temperament};
pub use scene::{Event, Setting};
pub use simulation::{EventResult, Simulation, Summary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
