//! Win detection.
//!
//! Re-scanned from scratch after every accepted move. A player wins when
//! they are the only seated color left on the board, provided the board
//! holds more atoms than there are players. The atom guard keeps the
//! opening round (before everyone has placed) from ending the game.

use smallvec::SmallVec;

use crate::core::{Board, PlayerColor, PlayerMap};

/// Per-player totals from one full board scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardTally {
    /// Atoms on the whole board, unseated colors included.
    pub total_atoms: u64,

    /// Atoms held by each seated color.
    pub atoms: PlayerMap<u64>,

    /// Non-empty cells held by each seated color.
    pub cells: PlayerMap<usize>,
}

impl BoardTally {
    /// Scan every cell of `board` for a game seating `player_count` colors.
    ///
    /// Panics if `player_count` exceeds [`MAX_PLAYERS`](crate::core::MAX_PLAYERS).
    #[must_use]
    pub fn scan(board: &Board, player_count: usize) -> Self {
        let mut tally = Self {
            total_atoms: 0,
            atoms: PlayerMap::new(player_count, |_| 0),
            cells: PlayerMap::new(player_count, |_| 0),
        };

        for (_, cell) in board.iter() {
            tally.total_atoms += u64::from(cell.count);
            let Some(owner) = cell.owner.filter(|_| cell.count > 0) else {
                continue;
            };
            if let Some(atoms) = tally.atoms.get_mut(owner) {
                *atoms += u64::from(cell.count);
            }
            if let Some(cells) = tally.cells.get_mut(owner) {
                *cells += 1;
            }
        }
        tally
    }

    /// Atoms held by `color`; zero when not seated.
    #[must_use]
    pub fn atoms_of(&self, color: PlayerColor) -> u64 {
        self.atoms.get(color).copied().unwrap_or(0)
    }

    /// Non-empty cells held by `color`; zero when not seated.
    #[must_use]
    pub fn cells_of(&self, color: PlayerColor) -> usize {
        self.cells.get(color).copied().unwrap_or(0)
    }

    /// Seated colors still holding atoms, in seat order.
    #[must_use]
    pub fn remaining(&self) -> SmallVec<[PlayerColor; 6]> {
        self.cells
            .iter()
            .filter(|(_, &cells)| cells > 0)
            .map(|(color, _)| color)
            .collect()
    }

    /// The winner under this tally, if the game is decided.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        let enough_atoms = self.total_atoms > self.cells.player_count() as u64;
        match self.remaining().as_slice() {
            [sole] if enough_atoms => Some(*sole),
            _ => None,
        }
    }
}

/// Winner on `board` for a game seating `player_count` colors, if any.
#[must_use]
pub fn detect_winner(board: &Board, player_count: usize) -> Option<PlayerColor> {
    BoardTally::scan(board, player_count).winner()
}
