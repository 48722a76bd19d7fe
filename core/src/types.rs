/// Index of one of the nine board slots, row-major.
pub type SlotIndex = u8;

/// Number of slots on the board.
pub const SLOT_COUNT: usize = 9;

/// Width and height of the board.
pub const BOARD_SIDE: SlotIndex = 3;

/// Every row, column and diagonal, in that order.
pub const WINNING_COMBINATIONS: [[SlotIndex; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// `(row, col)` position of a slot on the grid.
pub type Coords = (SlotIndex, SlotIndex);

pub const fn slot_to_coords(slot: SlotIndex) -> Coords {
    (slot / BOARD_SIDE, slot % BOARD_SIDE)
}

pub const fn coords_to_slot((row, col): Coords) -> SlotIndex {
    row * BOARD_SIDE + col
}

pub const fn is_valid_slot(slot: SlotIndex) -> bool {
    (slot as usize) < SLOT_COUNT
}

/// Iterates over all slots in row-major order.
pub fn iter_slots() -> impl Iterator<Item = SlotIndex> {
    0..SLOT_COUNT as SlotIndex
}

/// Combinations passing through `slot`; a placement can only complete these.
pub fn lines_through(slot: SlotIndex) -> LinesThrough {
    LinesThrough { slot, index: 0 }
}

#[derive(Debug)]
pub struct LinesThrough {
    slot: SlotIndex,
    index: u8,
}

impl Iterator for LinesThrough {
    type Item = [SlotIndex; 3];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = *WINNING_COMBINATIONS.get(usize::from(self.index))?;
            self.index += 1;

            if line.contains(&self.slot) {
                return Some(line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_are_row_major() {
        assert_eq!(slot_to_coords(0), (0, 0));
        assert_eq!(slot_to_coords(5), (1, 2));
        assert_eq!(slot_to_coords(7), (2, 1));
        for slot in iter_slots() {
            assert_eq!(coords_to_slot(slot_to_coords(slot)), slot);
        }
    }

    #[test]
    fn center_lies_on_four_lines_and_edges_on_two() {
        assert_eq!(lines_through(4).count(), 4);
        assert_eq!(lines_through(0).count(), 3);
        assert_eq!(lines_through(1).count(), 2);
        assert!(lines_through(1).all(|line| line.contains(&1)));
    }

    #[test]
    fn every_slot_is_covered_by_some_line() {
        for slot in iter_slots() {
            assert!(lines_through(slot).next().is_some(), "slot {slot} uncovered");
        }
        assert!(!is_valid_slot(9));
    }
}
