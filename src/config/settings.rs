//! Configuration settings for the toroidal Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub source: SourceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Generations to advance past the initial board
    pub steps: usize,
    /// Pause between rendered generations; zero disables pacing
    pub delay_ms: u64,
    /// Population at which stepping switches to the rayon path
    pub parallel_threshold: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMode {
    Random,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub mode: SourceMode,
    /// Per-cell live probability for random boards
    pub probability: f64,
    /// Fixed RNG seed for reproducible random boards
    pub seed: Option<u64>,
    /// Pattern file for `mode: file`
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub live_marker: char,
    pub dead_marker: char,
    pub directory: PathBuf,
    /// Write the final board snapshot into the output directory after a run
    pub save_final_state: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 40,
                height: 20,
            },
            simulation: SimulationConfig {
                steps: 100,
                delay_ms: 100,
                parallel_threshold: 10_000,
            },
            source: SourceConfig {
                mode: SourceMode::Random,
                probability: 0.3,
                seed: None,
                pattern_file: None,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                live_marker: '#',
                dead_marker: '.',
                directory: PathBuf::from("output/runs"),
                save_final_state: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.width < 1 || self.grid.height < 1 {
            anyhow::bail!(
                "Grid dimensions must be at least 1x1, got {}x{}",
                self.grid.width,
                self.grid.height
            );
        }

        if !(0.0..=1.0).contains(&self.source.probability) {
            anyhow::bail!(
                "Live-cell probability must be within [0, 1], got {}",
                self.source.probability
            );
        }

        if self.source.mode == SourceMode::File && self.source.pattern_file.is_none() {
            anyhow::bail!("Source mode is 'file' but no pattern file is configured");
        }

        if let (SourceMode::File, Some(path)) = (self.source.mode, &self.source.pattern_file) {
            if !path.exists() {
                anyhow::bail!("Pattern file does not exist: {}", path.display());
            }
        }

        if self.output.live_marker == self.output.dead_marker {
            anyhow::bail!(
                "Live and dead markers must differ, both are {:?}",
                self.output.live_marker
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(steps) = cli_overrides.steps {
            self.simulation.steps = steps;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.delay_ms = delay_ms;
        }
        if let Some(probability) = cli_overrides.probability {
            self.source.probability = probability;
        }
        if let Some(seed) = cli_overrides.seed {
            self.source.seed = Some(seed);
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            // A pattern file on the command line implies file sourcing.
            self.source.mode = SourceMode::File;
            self.source.pattern_file = Some(pattern_file.clone());
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub steps: Option<usize>,
    pub delay_ms: Option<u64>,
    pub probability: Option<f64>,
    pub seed: Option<u64>,
    pub pattern_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}
