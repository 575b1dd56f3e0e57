//! Distance-to-goal estimates.
//!
//! The two quarter estimates are admissible and consistent for the rotation
//! move set: one rotation touches exactly 4 tiles, so dividing a per-tile
//! sum by 4 never overestimates. `AxisMax` is much sharper and prunes far
//! more of the state space, which is what makes deep scrambles tractable;
//! it can overestimate when displaced lines intersect (see the pinned value
//! test below), so routes found under it are short but not guaranteed
//! minimal. It is the default because the weaker estimates exhaust memory on
//! hard boards long before they return.

use crate::board::{Board, SIDE};

/// Wrapped displacement along one axis: a distance of 3 is really 1 step the
/// other way around, so values are always in {0, 1, 2}.
#[inline(always)]
fn wrap(d: u32) -> u32 {
    if d == 3 {
        1
    } else {
        d
    }
}

#[inline(always)]
fn displacements(board: &Board, pos: usize) -> (usize, usize, u32, u32) {
    let tile = board.tiles()[pos] as usize - 1;
    let (goal_row, goal_col) = (tile / SIDE, tile % SIDE);
    let (row, col) = (pos / SIDE, pos % SIDE);
    let x = wrap(goal_row.abs_diff(row) as u32);
    let y = wrap(goal_col.abs_diff(col) as u32);
    (goal_row, goal_col, x, y)
}

/// Out-of-place tiles divided by 4. One rotation touches exactly 4 tiles, so
/// at most 4 misplacements go away per move.
pub fn misplaced_quarter(board: &Board) -> u32 {
    let out = board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(i, &t)| t as usize != i + 1)
        .count() as u32;
    out / 4
}

/// Sum of wrapped row+column displacements over all tiles, divided by 4.
pub fn manhattan_quarter(board: &Board) -> u32 {
    let total: u32 = (0..board.tiles().len())
        .map(|pos| {
            let (_, _, x, y) = displacements(board, pos);
            x + y
        })
        .sum();
    total / 4
}

/// Per-axis maximum wrapped displacement, grouped by *goal* row and column.
///
/// A goal row is finished only once every tile that belongs to it sits in
/// place, and only row shifts move a tile sideways, so each goal row charges
/// at least the worst column displacement among its own tiles; goal columns
/// symmetrically charge their worst row displacement. The grouping must be
/// by the tile's goal line, not its current line, or whole lines of
/// displacement go uncharged and the estimate collapses toward zero.
pub fn axis_max(board: &Board) -> u32 {
    let mut row_max = [0u32; SIDE];
    let mut col_max = [0u32; SIDE];
    for pos in 0..board.tiles().len() {
        let (goal_row, goal_col, x, y) = displacements(board, pos);
        row_max[goal_row] = row_max[goal_row].max(y);
        col_max[goal_col] = col_max[goal_col].max(x);
    }
    row_max.iter().sum::<u32>() + col_max.iter().sum::<u32>()
}

/// Which evaluator the search driver scores successors with.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Heuristic {
    MisplacedQuarter,
    ManhattanQuarter,
    #[default]
    AxisMax,
}

impl Heuristic {
    #[inline(always)]
    pub fn score(self, board: &Board) -> u32 {
        match self {
            Heuristic::MisplacedQuarter => misplaced_quarter(board),
            Heuristic::ManhattanQuarter => manhattan_quarter(board),
            Heuristic::AxisMax => axis_max(board),
        }
    }
}
