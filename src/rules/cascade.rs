//! Explosion propagation.
//!
//! Placing an atom adds one to the target cell and hands it to the mover.
//! A cell that reaches its capacity detonates: it empties, loses its owner,
//! and sends one atom to each orthogonal neighbor, which may detonate in
//! turn. There is no visited set; a cell can be hit and detonate several
//! times during one move.
//!
//! ## Visit order
//!
//! Neighbors are visited up, down, left, right, and each neighbor's whole
//! sub-cascade runs before the next neighbor is touched (depth-first).
//! Feedback cascades can settle differently under another order, so this
//! order is part of the rules.
//!
//! The walk uses an explicit stack instead of recursion, so long cascades
//! on large grids cannot exhaust the call stack. Neighbors are pushed in
//! reverse so they pop in visit order.

use serde::{Deserialize, Serialize};

use crate::core::{Board, PlayerColor, Position};

/// What happened while a move settled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeReport {
    /// Atoms delivered to in-bounds cells, the placed atom included.
    pub increments: usize,

    /// Cells that reached capacity and detonated.
    pub detonations: usize,
}

/// A cascade that kept detonating past its limit.
///
/// The board it was running on is left mid-cascade and must be discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("cascade from {origin} exceeded {limit} detonations")]
pub struct CascadeOverflow {
    pub origin: Position,
    pub limit: usize,
}

/// Drop one `color` atom on `origin` and run the cascade to completion.
///
/// Out-of-bounds origins change nothing. Fails once more than `limit`
/// cells have detonated.
pub fn explode(
    board: &mut Board,
    origin: Position,
    color: PlayerColor,
    limit: usize,
) -> Result<CascadeReport, CascadeOverflow> {
    let mut report = CascadeReport::default();
    let mut pending = vec![origin];

    while let Some(pos) = pending.pop() {
        let capacity = board.capacity_at(pos);
        let Some(cell) = board.get_mut(pos) else {
            continue;
        };

        cell.count += 1;
        cell.owner = Some(color);
        report.increments += 1;

        if cell.count < capacity {
            continue;
        }

        cell.count = 0;
        cell.owner = None;
        report.detonations += 1;
        if report.detonations > limit {
            return Err(CascadeOverflow { origin, limit });
        }

        pending.extend(board.neighbors(pos).into_iter().rev());
    }

    Ok(report)
}
