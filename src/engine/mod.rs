//! Sparse Game of Life engine

pub mod board;
pub mod rules;

pub use board::{Board, Coordinate};
pub use rules::{neighbor_offsets, par_step, step, step_generations, EngineError};
