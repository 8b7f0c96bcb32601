//! Random initial boards

use crate::engine::{Board, Coordinate};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sample a random board: each cell of the grid is live with independent
/// probability `probability`. A fixed seed makes the board reproducible.
pub fn random_board(
    width: i64,
    height: i64,
    probability: f64,
    seed: Option<u64>,
) -> Result<Board> {
    if width < 1 || height < 1 {
        anyhow::bail!(
            "Grid dimensions must be at least 1x1, got {}x{}",
            width,
            height
        );
    }
    if !(0.0..=1.0).contains(&probability) {
        anyhow::bail!(
            "Live-cell probability must be within [0, 1], got {}",
            probability
        );
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut board = Board::new();
    for y in 0..height {
        for x in 0..width {
            if rng.gen_bool(probability) {
                board.insert(Coordinate::new(x, y));
            }
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_extremes() {
        let empty = random_board(6, 4, 0.0, None).unwrap();
        assert!(empty.is_empty());

        let full = random_board(6, 4, 1.0, None).unwrap();
        assert_eq!(full.population(), 24);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let first = random_board(20, 20, 0.5, Some(42)).unwrap();
        let second = random_board(20, 20, 0.5, Some(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cells_stay_in_range() {
        let board = random_board(7, 3, 0.8, Some(1)).unwrap();
        for cell in board.iter() {
            assert!(cell.x >= 0 && cell.x < 7);
            assert!(cell.y >= 0 && cell.y < 3);
        }
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(random_board(0, 4, 0.5, None).is_err());
        assert!(random_board(4, -2, 0.5, None).is_err());
        assert!(random_board(4, 4, -0.1, None).is_err());
        assert!(random_board(4, 4, 1.1, None).is_err());
    }
}
