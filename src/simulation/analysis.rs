//! Behavior classification over a window of generations

use crate::engine::{step, Board, EngineError};
use serde::{Deserialize, Serialize};

/// Longest oscillation period the analysis looks for
const MAX_OSCILLATION_PERIOD: usize = 8;

/// Classification of a pattern's behavior over successive generations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorAnalysis {
    /// The pattern reproduces itself every generation
    pub is_still_life: bool,
    /// The pattern repeats with a period greater than 1
    pub is_oscillator: bool,
    /// Period of oscillation (if oscillator)
    pub oscillation_period: Option<usize>,
    /// The pattern died out inside the window
    pub went_extinct: bool,
    /// Population change from the first to the last frame of the window
    pub population_drift: i64,
}

impl BehaviorAnalysis {
    /// Analyze a window of successive board states
    pub fn analyze(frames: &[Board]) -> Self {
        if frames.len() < 2 {
            return Self::default();
        }

        let is_still_life = frames[0] == frames[1];
        let (is_oscillator, oscillation_period) = if is_still_life {
            (false, None)
        } else {
            Self::check_oscillator(frames)
        };
        let last = &frames[frames.len() - 1];
        let went_extinct = last.is_empty();
        let population_drift = last.population() as i64 - frames[0].population() as i64;

        Self {
            is_still_life,
            is_oscillator,
            oscillation_period,
            went_extinct,
            population_drift,
        }
    }

    /// Check whether the window repeats with some period, and find it
    fn check_oscillator(frames: &[Board]) -> (bool, Option<usize>) {
        if frames.len() < 3 {
            return (false, None);
        }

        for period in 2..=MAX_OSCILLATION_PERIOD.min(frames.len() - 1) {
            if frames[0] != frames[period] {
                continue;
            }
            // Confirm the candidate period across the rest of the window.
            let is_periodic = (1..frames.len() - period)
                .all(|i| frames[i] == frames[i + period]);
            if is_periodic {
                return (true, Some(period));
            }
        }

        (false, None)
    }

    /// Human-readable classification label
    pub fn classification(&self) -> &'static str {
        if self.went_extinct {
            "extinct"
        } else if self.is_still_life {
            "still life"
        } else if self.is_oscillator {
            "oscillator"
        } else {
            "unclassified"
        }
    }
}

/// Collect a window of successive generations, starting from (and including)
/// the given board.
pub fn evolution_window(
    board: &Board,
    width: i64,
    height: i64,
    generations: usize,
) -> Result<Vec<Board>, EngineError> {
    let mut frames = Vec::with_capacity(generations + 1);
    let mut current = board.clone();
    for _ in 0..generations {
        let next = step(&current, width, height)?;
        frames.push(current);
        current = next;
    }
    frames.push(current);
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Coordinate;

    fn board_of(cells: &[(i64, i64)]) -> Board {
        cells.iter().map(|&(x, y)| Coordinate::new(x, y)).collect()
    }

    #[test]
    fn test_block_is_still_life() {
        let block = board_of(&[(1, 1), (2, 1), (1, 2), (2, 2)]);
        let frames = evolution_window(&block, 4, 4, 6).unwrap();
        let analysis = BehaviorAnalysis::analyze(&frames);

        assert!(analysis.is_still_life);
        assert!(!analysis.is_oscillator);
        assert_eq!(analysis.classification(), "still life");
        assert_eq!(analysis.population_drift, 0);
    }

    #[test]
    fn test_blinker_is_period_two_oscillator() {
        let blinker = board_of(&[(2, 1), (2, 2), (2, 3)]);
        let frames = evolution_window(&blinker, 5, 5, 8).unwrap();
        let analysis = BehaviorAnalysis::analyze(&frames);

        assert!(!analysis.is_still_life);
        assert!(analysis.is_oscillator);
        assert_eq!(analysis.oscillation_period, Some(2));
        assert_eq!(analysis.classification(), "oscillator");
    }

    #[test]
    fn test_beacon_is_period_two_oscillator() {
        let beacon = board_of(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)]);
        let frames = evolution_window(&beacon, 6, 6, 8).unwrap();
        let analysis = BehaviorAnalysis::analyze(&frames);

        assert!(analysis.is_oscillator);
        assert_eq!(analysis.oscillation_period, Some(2));
    }

    #[test]
    fn test_lone_cell_goes_extinct() {
        let lone = board_of(&[(2, 2)]);
        let frames = evolution_window(&lone, 5, 5, 3).unwrap();
        let analysis = BehaviorAnalysis::analyze(&frames);

        assert!(analysis.went_extinct);
        assert_eq!(analysis.classification(), "extinct");
        assert_eq!(analysis.population_drift, -1);
    }

    #[test]
    fn test_short_window_is_unclassified() {
        let blinker = board_of(&[(2, 1), (2, 2), (2, 3)]);
        let analysis = BehaviorAnalysis::analyze(&[blinker]);
        assert_eq!(analysis, BehaviorAnalysis::default());
    }
}
