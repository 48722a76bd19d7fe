#![no_std]

extern crate alloc;

use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod types;

/// The nine slots of a match, row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; SLOT_COUNT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; SLOT_COUNT],
        }
    }

    pub fn get(&self, slot: SlotIndex) -> Option<Cell> {
        self.cells.get(usize::from(slot)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, Cell)> + '_ {
        iter_slots().zip(self.cells.iter().copied())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// First combination held entirely by `mark`, if any.
    pub fn completes_line(&self, mark: Mark) -> Option<[SlotIndex; 3]> {
        WINNING_COMBINATIONS
            .into_iter()
            .find(|line| self.holds_line(line, mark))
    }

    /// Like [`Board::completes_line`] but restricted to lines through `slot`.
    pub fn completes_line_through(&self, slot: SlotIndex, mark: Mark) -> Option<[SlotIndex; 3]> {
        lines_through(slot).find(|line| self.holds_line(line, mark))
    }

    pub(crate) fn place(&mut self, slot: SlotIndex, mark: Mark) {
        debug_assert!(self[slot].is_empty(), "slot {slot} overwritten");
        self.cells[usize::from(slot)] = Cell::Marked(mark);
    }

    fn holds_line(&self, line: &[SlotIndex; 3], mark: Mark) -> bool {
        line.iter().all(|&slot| self[slot].mark() == Some(mark))
    }
}

impl Index<SlotIndex> for Board {
    type Output = Cell;

    fn index(&self, slot: SlotIndex) -> &Self::Output {
        &self.cells[usize::from(slot)]
    }
}

/// Row-major notation, `X`, `O` and `.` for empty; whitespace, `|` and `/` are ignored.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; SLOT_COUNT];
        let mut len = 0;

        for ch in s.chars() {
            let cell = match ch {
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                other => return Err(GameError::InvalidNotation(other)),
            };
            if let Some(slot) = cells.get_mut(len) {
                *slot = cell;
            }
            len += 1;
        }

        if len != SLOT_COUNT {
            return Err(GameError::InvalidBoardShape(len));
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for (slot, cell) in self.iter() {
            if slot > 0 && slot % BOARD_SIDE == 0 {
                f.write_char('/')?;
            }
            f.write_char(cell.mark().map_or('.', Mark::symbol))?;
        }
        Ok(())
    }
}

/// Result of a single activation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won(Mark),
    Drawn,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won(_) => true,
            Drawn => true,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won(_) | Self::Drawn)
    }
}
