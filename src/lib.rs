//! Solver for the 4x4 rotating-tile puzzle: a move cyclically rotates one
//! whole row (left/right) or column (up/down) by a single position, and the
//! task is to return a short move sequence restoring 1..16 row-major order.

pub mod board;
pub mod heuristic;
pub mod search;

pub use board::{Board, Dir, Move, ParseBoardError};
pub use heuristic::Heuristic;
pub use search::{solve, SearchError, SearchLimits, SearchStats, Solution};
