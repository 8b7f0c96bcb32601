//! Timed simulation driver

use super::BehaviorAnalysis;
use crate::config::Settings;
use crate::engine::{par_step, step, Board};
use crate::source::initial_board;
use crate::utils::{BoardFormatter, ProgressIndicator};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::time::{Duration, Instant};

/// Board states retained for behavior analysis after a run
const ANALYSIS_WINDOW: usize = 32;

/// Drives the engine through a timed run
///
/// Owns the settings, the current board, and the grid dimensions. Each run
/// renders the initial frame, then alternates advance / pace / render for the
/// configured number of steps, stopping early once the board is empty.
pub struct SimulationRunner {
    settings: Settings,
    board: Board,
    width: i64,
    height: i64,
}

/// Outcome of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub width: i64,
    pub height: i64,
    /// Generations actually advanced (may be fewer than requested on extinction)
    pub generations_run: usize,
    pub initial_population: usize,
    pub final_population: usize,
    /// Population after each generation, starting with the initial board
    pub populations: Vec<usize>,
    /// Generation at which the board became empty, if it did
    pub extinct_at: Option<usize>,
    pub behavior: BehaviorAnalysis,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SimulationRunner {
    /// Create a runner, building the initial board from the settings
    pub fn new(settings: Settings) -> Result<Self> {
        let (board, width, height) =
            initial_board(&settings).context("Failed to build initial board")?;
        Ok(Self {
            settings,
            board,
            width,
            height,
        })
    }

    /// Create a runner with an explicit board (useful for testing)
    pub fn with_board(settings: Settings, board: Board, width: i64, height: i64) -> Self {
        Self {
            settings,
            board,
            width,
            height,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn dimensions(&self) -> (i64, i64) {
        (self.width, self.height)
    }

    /// Run the simulation, rendering every generation to `sink`
    pub fn run(&mut self, sink: &mut dyn Write) -> Result<RunReport> {
        let live = self.settings.output.live_marker;
        let dead = self.settings.output.dead_marker;
        let (width, height) = (self.width, self.height);

        self.run_loop(|board, generation| {
            writeln!(sink, "Generation {} (population {}):", generation, board.population())?;
            sink.write_all(
                BoardFormatter::format_board_with_markers(board, width, height, live, dead)
                    .as_bytes(),
            )?;
            writeln!(sink)?;
            Ok(())
        })
    }

    /// Run without rendering frames, showing a progress line instead
    pub fn run_quiet(&mut self) -> Result<RunReport> {
        let mut progress = ProgressIndicator::new(self.settings.simulation.steps);
        let report = self.run_loop(|_, generation| {
            progress.update(generation);
            Ok(())
        })?;
        progress.finish();
        Ok(report)
    }

    fn run_loop(
        &mut self,
        mut on_frame: impl FnMut(&Board, usize) -> Result<()>,
    ) -> Result<RunReport> {
        let start = Instant::now();
        let delay = Duration::from_millis(self.settings.simulation.delay_ms);
        let steps = self.settings.simulation.steps;

        let initial_population = self.board.population();
        let mut populations = vec![initial_population];
        let mut frames = vec![self.board.clone()];
        let mut generations_run = 0;
        let mut extinct_at = None;

        on_frame(&self.board, 0)?;

        for generation in 1..=steps {
            self.board = self.advance()?;
            generations_run = generation;
            populations.push(self.board.population());
            if frames.len() <= ANALYSIS_WINDOW {
                frames.push(self.board.clone());
            }

            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            on_frame(&self.board, generation)?;

            if self.board.is_empty() {
                extinct_at = Some(generation);
                break;
            }
        }

        Ok(RunReport {
            width: self.width,
            height: self.height,
            generations_run,
            initial_population,
            final_population: self.board.population(),
            populations,
            extinct_at,
            behavior: BehaviorAnalysis::analyze(&frames),
            elapsed: start.elapsed(),
        })
    }

    /// Advance one generation, switching to the rayon path on large populations
    fn advance(&self) -> Result<Board> {
        let board = if self.board.population() >= self.settings.simulation.parallel_threshold {
            par_step(&self.board, self.width, self.height)?
        } else {
            step(&self.board, self.width, self.height)?
        };
        Ok(board)
    }
}

impl RunReport {
    /// One-paragraph summary for console output
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Ran {} generation(s) on a {}x{} grid in {:.3}s\n",
            self.generations_run,
            self.width,
            self.height,
            self.elapsed.as_secs_f64()
        );
        summary.push_str(&format!(
            "Population: {} -> {}\n",
            self.initial_population, self.final_population
        ));
        match self.extinct_at {
            Some(generation) => {
                summary.push_str(&format!("Board died out at generation {}\n", generation))
            }
            None => summary.push_str(&format!("Behavior: {}\n", self.behavior.classification())),
        }
        summary
    }

    /// Convert to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
