//! Toroidal Game of Life Simulator
//!
//! This library simulates Conway's Game of Life on a finite toroidal grid
//! using a sparse live-cell-set representation, so stepping costs time
//! proportional to the population rather than the grid area.

pub mod config;
pub mod engine;
pub mod simulation;
pub mod source;
pub mod utils;

pub use config::Settings;
pub use engine::{
    neighbor_offsets, par_step, step, step_generations, Board, Coordinate, EngineError,
};
pub use simulation::{RunReport, SimulationRunner};

use anyhow::Result;

/// Main entry point for running a simulation against stdout
pub fn run_simulation(settings: Settings) -> Result<RunReport> {
    let mut runner = SimulationRunner::new(settings)?;
    let mut stdout = std::io::stdout();
    runner.run(&mut stdout)
}
