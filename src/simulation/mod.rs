//! Simulation driver and behavior analysis

pub mod analysis;
pub mod runner;

pub use analysis::{evolution_window, BehaviorAnalysis};
pub use runner::{RunReport, SimulationRunner};
