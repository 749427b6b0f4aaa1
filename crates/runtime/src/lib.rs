//! Game-loop driver for the Monopoly rules engine.
//!
//! This crate wires the standard content into a [`monopoly_core::Board`],
//! pays the starting cash, plays rounds until the game ends, and narrates the
//! core's event stream through `tracing`.
//!
//! Modules are organized by responsibility:
//! - [`simulation`] hosts the game loop and its builder
//! - [`narration`] maps core events onto log lines
//! - [`report`] summarizes a finished game
pub mod config;
pub mod error;
pub mod narration;
pub mod report;
pub mod simulation;

pub use config::SimulationConfig;
pub use error::{Result, RuntimeError};
pub use narration::narrate;
pub use report::{Outcome, SimulationReport, Standing};
pub use simulation::{Simulation, SimulationBuilder};
