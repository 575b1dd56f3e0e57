use arrayvec::ArrayVec;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const SIDE: usize = 4;
pub const CELLS: usize = SIDE * SIDE;

/// Rotation direction of a single row or column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

impl Dir {
    #[inline(always)]
    pub fn letter(self) -> char {
        match self {
            Dir::Left => 'L',
            Dir::Right => 'R',
            Dir::Up => 'U',
            Dir::Down => 'D',
        }
    }

    #[inline(always)]
    pub fn opposite(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
        }
    }
}

/// One elementary move: rotate row `index` (Left/Right) or column `index`
/// (Up/Down) by a single position, with wraparound.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub dir: Dir,
    pub index: u8,
}

impl Move {
    /// Every legal move, in generation order: rows first (R before L per
    /// row), then columns (D before U per column). The order fixes which of
    /// several equal-cost paths the solver prefers.
    pub const ALL: [Move; 16] = [
        Move { dir: Dir::Right, index: 0 },
        Move { dir: Dir::Left, index: 0 },
        Move { dir: Dir::Right, index: 1 },
        Move { dir: Dir::Left, index: 1 },
        Move { dir: Dir::Right, index: 2 },
        Move { dir: Dir::Left, index: 2 },
        Move { dir: Dir::Right, index: 3 },
        Move { dir: Dir::Left, index: 3 },
        Move { dir: Dir::Down, index: 0 },
        Move { dir: Dir::Up, index: 0 },
        Move { dir: Dir::Down, index: 1 },
        Move { dir: Dir::Up, index: 1 },
        Move { dir: Dir::Down, index: 2 },
        Move { dir: Dir::Up, index: 2 },
        Move { dir: Dir::Down, index: 3 },
        Move { dir: Dir::Up, index: 3 },
    ];

    /// The move that undoes this one on any board.
    #[inline(always)]
    pub fn inverse(self) -> Self {
        Move {
            dir: self.dir.opposite(),
            index: self.index,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.dir.letter(), self.index + 1)
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected {CELLS} tiles, found {0}")]
    WrongCount(usize),
    #[error("unreadable tile {0:?}")]
    NotANumber(String),
    #[error("tile value {0} outside 1..={CELLS}")]
    OutOfRange(i64),
    #[error("duplicate tile {0}")]
    Duplicate(u8),
}

/// A 4x4 tile placement, row-major. Always a permutation of 1..=16:
/// validated at parse time and preserved by every rotation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Board([u8; CELLS]);

impl Board {
    #[inline(always)]
    pub fn solved() -> Self {
        let mut tiles = [0u8; CELLS];
        for (i, t) in tiles.iter_mut().enumerate() {
            *t = i as u8 + 1;
        }
        Board(tiles)
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }

    #[inline(always)]
    pub fn is_goal(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &t)| t as usize == i + 1)
    }

    /// Applies one move, producing a new board. Pure; the receiver is
    /// untouched.
    pub fn apply(&self, mv: Move) -> Board {
        let mut t = self.0;
        let i = mv.index as usize;
        match mv.dir {
            Dir::Left => t[i * SIDE..(i + 1) * SIDE].rotate_left(1),
            Dir::Right => t[i * SIDE..(i + 1) * SIDE].rotate_right(1),
            Dir::Up => {
                let top = t[i];
                t[i] = t[i + 4];
                t[i + 4] = t[i + 8];
                t[i + 8] = t[i + 12];
                t[i + 12] = top;
            }
            Dir::Down => {
                let bottom = t[i + 12];
                t[i + 12] = t[i + 8];
                t[i + 8] = t[i + 4];
                t[i + 4] = t[i];
                t[i] = bottom;
            }
        }
        Board(t)
    }

    /// All 16 (move, board) pairs reachable in one move.
    pub fn successors(&self) -> ArrayVec<(Move, Board), 16> {
        Move::ALL.iter().map(|&mv| (mv, self.apply(mv))).collect()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != CELLS {
            return Err(ParseBoardError::WrongCount(tokens.len()));
        }

        let mut tiles = [0u8; CELLS];
        let mut seen = [false; CELLS];
        for (i, tok) in tokens.iter().enumerate() {
            let value: i64 = tok
                .parse()
                .map_err(|_| ParseBoardError::NotANumber(tok.to_string()))?;
            if !(1..=CELLS as i64).contains(&value) {
                return Err(ParseBoardError::OutOfRange(value));
            }
            let tile = value as u8;
            if seen[tile as usize - 1] {
                return Err(ParseBoardError::Duplicate(tile));
            }
            seen[tile as usize - 1] = true;
            tiles[i] = tile;
        }
        Ok(Board(tiles))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks_exact(SIDE) {
            writeln!(f, "{:3} {:3} {:3} {:3}", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
