//! Generation-advance rules for the toroidal grid

use super::board::{Board, Coordinate};
use rayon::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

/// Errors produced by the engine
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid grid dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimension { width: i64, height: i64 },
}

/// Live cells per rayon chunk when stepping in parallel
const PARALLEL_CHUNK: usize = 1024;

const NEIGHBOR_DELTAS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn check_dimensions(width: i64, height: i64) -> Result<(), EngineError> {
    if width < 1 || height < 1 {
        return Err(EngineError::InvalidDimension { width, height });
    }
    Ok(())
}

/// Fill `buf` with the distinct wrapped neighbors of `cell`, returning how
/// many were written. On grids narrower or shorter than 3 the wrapped
/// positions collide, so duplicates are dropped; a duplicate coordinate must
/// count once, not once per delta that lands on it.
fn wrapped_neighbors(
    cell: Coordinate,
    width: i64,
    height: i64,
    buf: &mut [Coordinate; 8],
) -> usize {
    let mut len = 0;
    for (dx, dy) in NEIGHBOR_DELTAS {
        let neighbor = Coordinate::new(
            (cell.x + dx).rem_euclid(width),
            (cell.y + dy).rem_euclid(height),
        );
        if !buf[..len].contains(&neighbor) {
            buf[len] = neighbor;
            len += 1;
        }
    }
    len
}

/// Neighbor coordinates of a cell with toroidal wraparound
///
/// Both components are reduced with Euclidean remainder, so coordinates off
/// the left or top edge land on the opposite side. Exactly 8 coordinates on
/// any grid at least 3x3; degenerate 1- or 2-wide grids yield fewer because
/// wrapped positions coincide.
pub fn neighbor_offsets(
    cell: Coordinate,
    width: i64,
    height: i64,
) -> Result<Vec<Coordinate>, EngineError> {
    check_dimensions(width, height)?;
    let mut buf = [Coordinate::new(0, 0); 8];
    let len = wrapped_neighbors(cell, width, height, &mut buf);
    Ok(buf[..len].to_vec())
}

fn apply_rule(counts: HashMap<Coordinate, u8>, board: &Board) -> Board {
    counts
        .into_iter()
        .filter(|&(cell, count)| count == 3 || (count == 2 && board.contains(cell)))
        .map(|(cell, _)| cell)
        .collect()
}

/// Advance the board one generation
///
/// Only cells adjacent to a live cell can be live next generation, so the
/// neighbor counts are accumulated by walking the live set instead of
/// scanning the grid: cost is proportional to the population, not to
/// width * height. A counted cell survives into the next board when its
/// count is exactly 3, or exactly 2 while it is currently live.
pub fn step(board: &Board, width: i64, height: i64) -> Result<Board, EngineError> {
    check_dimensions(width, height)?;

    let mut counts: HashMap<Coordinate, u8> =
        HashMap::with_capacity(board.population().saturating_mul(4));
    let mut buf = [Coordinate::new(0, 0); 8];
    for cell in board.iter() {
        let len = wrapped_neighbors(cell, width, height, &mut buf);
        for &neighbor in &buf[..len] {
            *counts.entry(neighbor).or_insert(0) += 1;
        }
    }

    Ok(apply_rule(counts, board))
}

/// Advance the board one generation using rayon
///
/// Partitions the live set into chunks, accumulates a partial count map per
/// chunk, and merges the partials by summation. Produces exactly the same
/// board as [`step`]; worthwhile only when the population is large enough to
/// amortize the merge.
pub fn par_step(board: &Board, width: i64, height: i64) -> Result<Board, EngineError> {
    check_dimensions(width, height)?;

    let cells: Vec<Coordinate> = board.iter().collect();
    let counts = cells
        .par_chunks(PARALLEL_CHUNK)
        .map(|chunk| {
            let mut local: HashMap<Coordinate, u8> =
                HashMap::with_capacity(chunk.len().saturating_mul(4));
            let mut buf = [Coordinate::new(0, 0); 8];
            for &cell in chunk {
                let len = wrapped_neighbors(cell, width, height, &mut buf);
                for &neighbor in &buf[..len] {
                    *local.entry(neighbor).or_insert(0) += 1;
                }
            }
            local
        })
        .reduce(HashMap::new, |mut merged, partial| {
            for (cell, count) in partial {
                *merged.entry(cell).or_insert(0) += count;
            }
            merged
        });

    Ok(apply_rule(counts, board))
}

/// Advance the board a fixed number of generations
pub fn step_generations(
    mut board: Board,
    width: i64,
    height: i64,
    generations: usize,
) -> Result<Board, EngineError> {
    for _ in 0..generations {
        board = step(&board, width, height)?;
    }
    Ok(board)
}
