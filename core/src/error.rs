use thiserror::Error;

use crate::SlotIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid slot index {0}")]
    InvalidSlot(SlotIndex),
    #[error("Board notation must describe 9 slots, got {0}")]
    InvalidBoardShape(usize),
    #[error("Unknown board notation character {0:?}")]
    InvalidNotation(char),
}

pub type Result<T> = core::result::Result<T, GameError>;
