//! Display and output formatting utilities

use crate::config::{OutputFormat, Settings};
use crate::engine::{Board, Coordinate};
use crate::simulation::RunReport;
use crate::source::save_board_to_file;
use anyhow::{Context, Result};
use itertools::Itertools;

/// Text rendering for boards
pub struct BoardFormatter;

impl BoardFormatter {
    /// Format a board with the default `#`/`.` markers
    pub fn format_board(board: &Board, width: i64, height: i64) -> String {
        Self::format_board_with_markers(board, width, height, '#', '.')
    }

    /// Format a board as a rectangular text block, row-major, top to bottom
    pub fn format_board_with_markers(
        board: &Board,
        width: i64,
        height: i64,
        live: char,
        dead: char,
    ) -> String {
        let mut output = String::with_capacity((height * (width + 1)) as usize);
        for y in 0..height {
            for x in 0..width {
                output.push(if board.contains(Coordinate::new(x, y)) {
                    live
                } else {
                    dead
                });
            }
            output.push('\n');
        }
        output
    }

    /// Format a board with row and column numbers
    pub fn format_board_with_coords(board: &Board, width: i64, height: i64) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..width {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..height {
            output.push_str(&format!("{:2} ", y));
            for x in 0..width {
                output.push_str(if board.contains(Coordinate::new(x, y)) {
                    "██"
                } else {
                    "··"
                });
            }
            output.push('\n');
        }

        output
    }

    /// List live cells as sorted coordinate pairs
    pub fn format_live_cells(board: &Board) -> String {
        board
            .iter()
            .sorted()
            .map(|cell| cell.to_string())
            .join(", ")
    }

    /// Save the outputs of a finished run into the configured directory
    pub fn save_run_outputs(
        report: &RunReport,
        final_board: &Board,
        settings: &Settings,
    ) -> Result<()> {
        let dir = &settings.output.directory;
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

        match settings.output.format {
            OutputFormat::Text => {
                std::fs::write(dir.join("report.txt"), report.summary())
                    .context("Failed to write report.txt")?;
            }
            OutputFormat::Json => {
                let json = report.to_json().context("Failed to serialize run report")?;
                std::fs::write(dir.join("report.json"), json)
                    .context("Failed to write report.json")?;
            }
        }

        if settings.output.save_final_state {
            save_board_to_file(
                final_board,
                report.width,
                report.height,
                dir.join("final_state.txt"),
            )?;
        }

        Ok(())
    }
}

/// Progress indicator for quiet runs
pub struct ProgressIndicator {
    total: usize,
    current: usize,
    last_update: std::time::Instant,
    start_time: std::time::Instant,
}

impl ProgressIndicator {
    pub fn new(total: usize) -> Self {
        let now = std::time::Instant::now();
        Self {
            total,
            current: 0,
            last_update: now,
            start_time: now,
        }
    }

    /// Record the current generation, refreshing the display at most every 100ms
    pub fn update(&mut self, current: usize) {
        self.current = current;
        let now = std::time::Instant::now();
        if now.duration_since(self.last_update).as_millis() > 100 {
            self.display();
            self.last_update = now;
        }
    }

    fn display(&self) {
        let percentage = if self.total > 0 {
            (self.current as f64 / self.total as f64) * 100.0
        } else {
            0.0
        };

        let elapsed = self.start_time.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.current as f64 / elapsed
        } else {
            0.0
        };

        print!(
            "\rGeneration {}/{} ({:.1}%) - {:.0} gen/s",
            self.current, self.total, percentage, rate
        );
        std::io::Write::flush(&mut std::io::stdout()).ok();
    }

    /// Clear the progress line with a final tally
    pub fn finish(&self) {
        println!(
            "\rCompleted {}/{} generation(s) in {:.1}s",
            self.current,
            self.total,
            self.start_time.elapsed().as_secs_f64()
        );
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn cross() -> Board {
        Board::from_cells([
            Coordinate::new(1, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 1),
            Coordinate::new(2, 1),
            Coordinate::new(1, 2),
        ])
    }

    #[test]
    fn test_board_formatting() {
        let formatted = BoardFormatter::format_board(&cross(), 3, 3);
        assert_eq!(formatted, ".#.\n###\n.#.\n");

        let custom = BoardFormatter::format_board_with_markers(&cross(), 3, 3, 'O', ' ');
        assert_eq!(custom, " O \nOOO\n O \n");
    }

    #[test]
    fn test_format_with_coords() {
        let with_coords = BoardFormatter::format_board_with_coords(&cross(), 3, 3);
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains("██"));
        assert!(with_coords.contains("··"));
    }

    #[test]
    fn test_format_live_cells_is_sorted() {
        let board = Board::from_cells([Coordinate::new(2, 0), Coordinate::new(0, 1)]);
        assert_eq!(BoardFormatter::format_live_cells(&board), "(0, 1), (2, 0)");
    }

    #[test]
    fn test_save_run_outputs() {
        use crate::simulation::SimulationRunner;

        let temp_dir = tempdir().unwrap();
        let mut settings = Settings::default();
        settings.simulation.steps = 2;
        settings.simulation.delay_ms = 0;
        settings.output.directory = temp_dir.path().join("runs");
        settings.output.format = OutputFormat::Json;
        settings.output.save_final_state = true;

        let mut runner =
            SimulationRunner::with_board(settings.clone(), cross(), 5, 5);
        let report = runner.run_quiet().unwrap();

        BoardFormatter::save_run_outputs(&report, runner.board(), &settings).unwrap();
        assert!(settings.output.directory.join("report.json").exists());
        assert!(settings.output.directory.join("final_state.txt").exists());
    }

    #[test]
    fn test_progress_indicator() {
        let mut progress = ProgressIndicator::new(100);
        progress.update(50);
        assert_eq!(progress.current, 50);
        assert_eq!(progress.total, 100);
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
