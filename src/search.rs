use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use thiserror::Error;

use crate::board::{Board, Move};
use crate::heuristic::Heuristic;

type MovePath = SmallVec<[Move; 32]>;

/// One frontier entry: a board plus the route that discovered it.
struct Node {
    // f = g + h, where g is the path length
    f: u32,
    // Monotonic insertion number; breaks f ties deterministically so reruns
    // return the same route among equal-cost alternatives.
    seq: u64,
    board: Board,
    path: MovePath,
}

impl Eq for Node {}
impl PartialEq for Node {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Ord for Node {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior: lowest f first, oldest entry first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Node {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Budget for one search invocation. The frontier and visited set grow
/// without bound on hard boards, so callers can cap the number of expanded
/// nodes and get a clean error instead of an OOM kill.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchLimits {
    pub max_expanded: Option<u64>,
}

impl SearchLimits {
    pub fn unbounded() -> Self {
        Self { max_expanded: None }
    }

    pub fn max_expanded(limit: u64) -> Self {
        Self {
            max_expanded: Some(limit),
        }
    }
}

/// Counters kept across the whole search, returned with every outcome.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Nodes dequeued and expanded.
    pub expanded: u64,
    /// Nodes pushed onto the frontier (excluding the start).
    pub generated: u64,
    /// Largest f-value dequeued so far; a progress indicator on failures.
    pub max_f_popped: u32,
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error(
        "no solution: search space exhausted after {} expansions",
        .stats.expanded
    )]
    Exhausted { stats: SearchStats },
    #[error(
        "node budget of {limit} expansions exceeded (generated {}, deepest f {})",
        .stats.generated,
        .stats.max_f_popped
    )]
    LimitExceeded { limit: u64, stats: SearchStats },
}

impl SearchError {
    pub fn stats(&self) -> SearchStats {
        match self {
            SearchError::Exhausted { stats } => *stats,
            SearchError::LimitExceeded { stats, .. } => *stats,
        }
    }
}

/// A route from the scramble to the sorted board.
#[derive(Clone, Debug)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

impl Solution {
    /// Space-joined move labels, e.g. `R1 U3 L2 D4`.
    pub fn route(&self) -> String {
        let labels: Vec<String> = self.moves.iter().map(Move::to_string).collect();
        labels.join(" ")
    }
}

/// Best-first search over the rotation move graph.
///
/// Entries are ordered by f = g + h. A board enters the visited set the
/// moment it is first generated, so no board is ever enqueued twice. The
/// goal test runs on each generated successor, matching the reference
/// behavior of returning as soon as the sorted board appears.
pub fn solve(
    start: Board,
    heuristic: Heuristic,
    limits: SearchLimits,
) -> Result<Solution, SearchError> {
    let mut stats = SearchStats::default();

    if start.is_goal() {
        return Ok(Solution {
            moves: Vec::new(),
            stats,
        });
    }

    let mut frontier = BinaryHeap::with_capacity(10_000);
    let mut visited: FxHashSet<Board> =
        FxHashSet::with_capacity_and_hasher(200_000, Default::default());

    visited.insert(start);
    let mut seq: u64 = 0;
    frontier.push(Node {
        f: heuristic.score(&start),
        seq,
        board: start,
        path: MovePath::new(),
    });

    while let Some(node) = frontier.pop() {
        stats.expanded += 1;
        stats.max_f_popped = stats.max_f_popped.max(node.f);
        if let Some(limit) = limits.max_expanded {
            if stats.expanded > limit {
                return Err(SearchError::LimitExceeded { limit, stats });
            }
        }

        let g = node.path.len() as u32 + 1;
        for (mv, succ) in node.board.successors() {
            if succ.is_goal() {
                let mut moves = node.path.to_vec();
                moves.push(mv);
                return Ok(Solution { moves, stats });
            }
            if visited.insert(succ) {
                stats.generated += 1;
                seq += 1;
                let mut path = node.path.clone();
                path.push(mv);
                frontier.push(Node {
                    f: g + heuristic.score(&succ),
                    seq,
                    board: succ,
                    path,
                });
            }
        }
    }

    Err(SearchError::Exhausted { stats })
}
