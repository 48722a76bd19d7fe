use alloc::format;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Ready,
    InProgress,
    Won(Mark),
    Drawn,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Drawn)
    }

    pub const fn result(self) -> GameResult {
        match self {
            Self::Ready | Self::InProgress => GameResult::Ongoing,
            Self::Won(mark) => GameResult::Win(mark),
            Self::Drawn => GameResult::Draw,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Outcome of the match as seen from the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Win(Mark),
    Draw,
}

impl GameResult {
    /// Derives the result from a board after `last` was just played.
    pub fn evaluate(board: &Board, last: Mark) -> Self {
        if board.completes_line(last).is_some() {
            Self::Win(last)
        } else if board.is_full() {
            Self::Draw
        } else {
            Self::Ongoing
        }
    }

    /// End-of-game message, `None` while the match is running.
    pub fn message(self) -> Option<String> {
        match self {
            Self::Ongoing => None,
            Self::Win(mark) => Some(format!("{mark} Wins!")),
            Self::Draw => Some("Draw!".to_string()),
        }
    }
}

/// Owns one match: board, turn and the one-shot input gate per slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameController {
    board: Board,
    turn: Mark,
    armed: [bool; SLOT_COUNT],
    state: GameState,
    winning_line: Option<[SlotIndex; 3]>,
    move_count: u8,
}

impl GameController {
    pub fn new() -> Self {
        let mut controller = Self {
            board: Board::new(),
            turn: Mark::X,
            armed: [false; SLOT_COUNT],
            state: GameState::Ready,
            winning_line: None,
            move_count: 0,
        };
        controller.start();
        controller
    }

    /// Clears the board, gives the move to X and re-arms every slot.
    pub fn start(&mut self) {
        self.board = Board::new();
        self.turn = Mark::X;
        self.armed = [true; SLOT_COUNT];
        self.state = GameState::Ready;
        self.winning_line = None;
        self.move_count = 0;
        log::debug!("game started");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, slot: SlotIndex) -> Cell {
        self.board[slot]
    }

    /// Mark placed by the next accepted activation.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn result(&self) -> GameResult {
        self.state.result()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    pub fn winning_line(&self) -> Option<[SlotIndex; 3]> {
        self.winning_line
    }

    /// Whether `slot` still accepts its one activation.
    pub fn is_armed(&self, slot: SlotIndex) -> bool {
        self.armed.get(usize::from(slot)).copied().unwrap_or(false)
    }

    /// Board-level hint for whose turn is next; gone once the match ends.
    pub fn hover_mark(&self) -> Option<Mark> {
        (!self.is_finished()).then_some(self.turn)
    }

    /// Places the current mark into `slot` if its gate is still armed.
    ///
    /// Consumed slots and finished matches are inert and report
    /// [`MoveOutcome::NoChange`]; only an index outside the board is an error.
    pub fn handle_cell_activation(&mut self, slot: SlotIndex) -> Result<MoveOutcome> {
        let slot = validate_slot(slot)?;

        if !self.disarm(slot) {
            log::trace!("slot {slot} is inert");
            return Ok(MoveOutcome::NoChange);
        }

        let mark = self.turn;
        self.board.place(slot, mark);
        self.move_count += 1;
        log::debug!("{mark} placed at {slot}: {}", self.board);

        if let Some(line) = self.board.completes_line_through(slot, mark) {
            self.winning_line = Some(line);
            self.end_game(GameState::Won(mark));
            return Ok(MoveOutcome::Won(mark));
        }

        if self.board.is_full() {
            self.end_game(GameState::Drawn);
            return Ok(MoveOutcome::Drawn);
        }

        self.state = GameState::InProgress;
        self.turn = mark.other();
        Ok(MoveOutcome::Placed)
    }

    /// Consumes the gate of `slot`, returning whether it was still armed.
    fn disarm(&mut self, slot: SlotIndex) -> bool {
        core::mem::replace(&mut self.armed[usize::from(slot)], false)
    }

    fn end_game(&mut self, state: GameState) {
        if self.state.is_finished() {
            return;
        }

        self.state = state;
        self.armed = [false; SLOT_COUNT];
        if let Some(message) = state.result().message() {
            log::info!("{message}");
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_slot(slot: SlotIndex) -> Result<SlotIndex> {
    if is_valid_slot(slot) {
        Ok(slot)
    } else {
        Err(GameError::InvalidSlot(slot))
    }
}
