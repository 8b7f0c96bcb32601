//! Initial board construction

pub mod io;
pub mod random;

pub use io::{
    board_to_string, create_example_patterns, load_board_from_file, parse_board_from_string,
    save_board_to_file,
};
pub use random::random_board;

use crate::config::{Settings, SourceMode};
use crate::engine::Board;
use anyhow::{Context, Result};

/// Build the initial board for a run, returning it with its grid dimensions.
///
/// Random boards take their dimensions from the configured grid; file-sourced
/// boards take theirs from the pattern file.
pub fn initial_board(settings: &Settings) -> Result<(Board, i64, i64)> {
    match settings.source.mode {
        SourceMode::Random => {
            let (width, height) = (settings.grid.width, settings.grid.height);
            let board = random_board(
                width,
                height,
                settings.source.probability,
                settings.source.seed,
            )
            .context("Failed to sample random board")?;
            Ok((board, width, height))
        }
        SourceMode::File => {
            let path = settings
                .source
                .pattern_file
                .as_ref()
                .context("Source mode is 'file' but no pattern file is configured")?;
            load_board_from_file(path)
        }
    }
}
