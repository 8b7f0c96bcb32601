//! Text-grid pattern files

use crate::engine::{Board, Coordinate};
use anyhow::{Context, Result};
use std::path::Path;

/// Marker for a live cell in pattern files
pub const LIVE_MARKER: char = '#';
/// Marker for a dead cell in pattern files
pub const DEAD_MARKER: char = '.';

/// Load a board from a pattern file, returning the board plus the grid
/// dimensions inferred from the file.
pub fn load_board_from_file<P: AsRef<Path>>(path: P) -> Result<(Board, i64, i64)> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_board_from_string(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Parse a board from a rectangular text block
///
/// `#` is live; `.` and space are dead. Width is the length of the longest
/// line and height the number of lines; shorter lines are dead-padded on the
/// right.
pub fn parse_board_from_string(content: &str) -> Result<(Board, i64, i64)> {
    let lines: Vec<&str> = content.lines().collect();

    if lines.iter().all(|line| line.trim().is_empty()) {
        anyhow::bail!("Pattern contains no rows");
    }

    let height = lines.len() as i64;
    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as i64;

    let mut board = Board::new();
    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            match ch {
                LIVE_MARKER => {
                    board.insert(Coordinate::new(x as i64, y as i64));
                }
                DEAD_MARKER | ' ' => {}
                _ => anyhow::bail!(
                    "Invalid character {:?} at row {}, column {}. Only {:?} and {:?} are allowed",
                    ch,
                    y,
                    x,
                    LIVE_MARKER,
                    DEAD_MARKER
                ),
            }
        }
    }

    Ok((board, width, height))
}

/// Render a board as the canonical `#`/`.` text block, row-major,
/// top-to-bottom, one newline per row.
pub fn board_to_string(board: &Board, width: i64, height: i64) -> String {
    let mut result = String::with_capacity((height * (width + 1)) as usize);

    for y in 0..height {
        for x in 0..width {
            result.push(if board.contains(Coordinate::new(x, y)) {
                LIVE_MARKER
            } else {
                DEAD_MARKER
            });
        }
        result.push('\n');
    }

    result
}

/// Save a board snapshot to a pattern file
pub fn save_board_to_file<P: AsRef<Path>>(
    board: &Board,
    width: i64,
    height: i64,
    path: P,
) -> Result<()> {
    let content = board_to_string(board, width, height);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example pattern files for experimenting
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let glider_content = "..#..\n#.#..\n.##..\n.....\n.....\n";
    std::fs::write(dir.join("glider.txt"), glider_content)
        .context("Failed to write glider.txt")?;

    let blinker_content = ".....\n..#..\n..#..\n..#..\n.....\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    let block_content = "....\n.##.\n.##.\n....\n";
    std::fs::write(dir.join("block.txt"), block_content)
        .context("Failed to write block.txt")?;

    let beacon_content = "##....\n##....\n..##..\n..##..\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content)
        .context("Failed to write beacon.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_board_from_string() {
        let content = ".#.\n#.#\n.#.\n";
        let (board, width, height) = parse_board_from_string(content).unwrap();

        assert_eq!(width, 3);
        assert_eq!(height, 3);
        assert_eq!(board.population(), 4);
        assert!(board.contains(Coordinate::new(1, 0)));
        assert!(board.contains(Coordinate::new(0, 1)));
        assert!(board.contains(Coordinate::new(2, 1)));
        assert!(board.contains(Coordinate::new(1, 2)));
    }

    #[test]
    fn test_ragged_lines_are_dead_padded() {
        let content = "#\n..#\n#";
        let (board, width, height) = parse_board_from_string(content).unwrap();

        assert_eq!(width, 3);
        assert_eq!(height, 3);
        assert_eq!(board.population(), 3);
        assert!(board.contains(Coordinate::new(0, 0)));
        assert!(board.contains(Coordinate::new(2, 1)));
        assert!(board.contains(Coordinate::new(0, 2)));
    }

    #[test]
    fn test_spaces_count_as_dead() {
        let content = "# #\n # \n";
        let (board, width, height) = parse_board_from_string(content).unwrap();

        assert_eq!(width, 3);
        assert_eq!(height, 2);
        assert_eq!(board.population(), 3);
    }

    #[test]
    fn test_board_to_string() {
        let board = Board::from_cells([
            Coordinate::new(1, 0),
            Coordinate::new(0, 1),
            Coordinate::new(2, 1),
            Coordinate::new(1, 2),
        ]);
        assert_eq!(board_to_string(&board, 3, 3), ".#.\n#.#\n.#.\n");
    }

    #[test]
    fn test_round_trip() {
        let original = ".#.\n#.#\n.#.\n";
        let (board, width, height) = parse_board_from_string(original).unwrap();
        assert_eq!(board_to_string(&board, width, height), original);
    }

    #[test]
    fn test_invalid_input() {
        assert!(parse_board_from_string(".#.\n#X#\n.#.\n").is_err());
        assert!(parse_board_from_string("").is_err());
        assert!(parse_board_from_string("   \n   \n").is_err());
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("pattern.txt");

        let board = Board::from_cells([Coordinate::new(0, 0), Coordinate::new(2, 1)]);
        save_board_to_file(&board, 3, 2, &file_path).unwrap();

        let (loaded, width, height) = load_board_from_file(&file_path).unwrap();
        assert_eq!(loaded, board);
        assert_eq!((width, height), (3, 2));
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt"] {
            assert!(temp_dir.path().join(name).exists());
        }

        let (glider, width, height) =
            load_board_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!((width, height), (5, 5));
        assert_eq!(glider.population(), 5);
    }
}
