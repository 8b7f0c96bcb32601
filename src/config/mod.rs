//! Configuration management for the simulator

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, OutputConfig, OutputFormat, Settings, SimulationConfig, SourceConfig,
    SourceMode,
};
