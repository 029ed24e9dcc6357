//! Property tests for board geometry, cascades and engine invariants.

use proptest::prelude::*;

use chain_reaction::core::{capacity, Board, Cell, PlayerColor, Position};
use chain_reaction::rules::{explode, BoardTally, GameEngine, MoveOutcome};

/// Plain recursive form of the detonation rule, used as a reference.
fn explode_recursive(board: &mut Board, row: isize, col: isize, color: PlayerColor) {
    if row < 0 || col < 0 {
        return;
    }
    let pos = Position::new(row as usize, col as usize);
    let cap = board.capacity_at(pos);
    let Some(cell) = board.get_mut(pos) else {
        return;
    };
    cell.count += 1;
    cell.owner = Some(color);
    if cell.count >= cap {
        cell.count = 0;
        cell.owner = None;
        explode_recursive(board, row - 1, col, color);
        explode_recursive(board, row + 1, col, color);
        explode_recursive(board, row, col - 1, color);
        explode_recursive(board, row, col + 1, color);
    }
}

/// A settled board of the given size filled from `seeds`.
fn settled_board(rows: usize, cols: usize, seeds: &[(u32, usize)]) -> Board {
    let mut board = Board::new(rows, cols);
    let positions: Vec<_> = board.iter().map(|(pos, _)| pos).collect();
    for (pos, &(count, owner)) in positions.into_iter().zip(seeds.iter().cycle()) {
        let count = count % board.capacity_at(pos);
        if count > 0 {
            let owner = PlayerColor::from_index(owner % 3).unwrap_or(PlayerColor::Red);
            board.set(pos, Cell::owned(owner, count));
        }
    }
    board
}

/// A board with most cells one short of capacity. The last row, last
/// column and top-left corner start empty so any cascade can settle.
fn dense_board() -> Board {
    let mut board = Board::new(4, 5);
    let positions: Vec<_> = board.iter().map(|(pos, _)| pos).collect();
    for pos in positions {
        if pos.row == 3 || pos.col == 4 || pos == Position::new(0, 0) {
            continue;
        }
        let owner = if (pos.row + pos.col) % 2 == 0 {
            PlayerColor::Red
        } else {
            PlayerColor::Green
        };
        board.set(pos, Cell::owned(owner, board.capacity_at(pos) - 1));
    }
    board
}

/// A long cascade that re-enters cells which already fired settles
/// exactly like the recursive rule.
#[test]
fn test_dense_cascade_matches_recursive_rule() {
    let mut board = dense_board();
    let mut reference = board.clone();

    let report = explode(&mut board, Position::new(1, 2), PlayerColor::Green, 100_000).unwrap();
    explode_recursive(&mut reference, 1, 2, PlayerColor::Green);

    assert!(report.detonations > 1);
    assert_eq!(board, reference);
}

proptest! {
    /// Corners hold 2, other border cells 3, interior cells 4, and the
    /// total capacity equals the total neighbor count.
    #[test]
    fn prop_capacity_geometry(rows in 2usize..14, cols in 2usize..14) {
        let board = Board::new(rows, cols);
        let mut cap_sum = 0usize;
        let mut neighbor_sum = 0usize;

        for (pos, _) in board.iter() {
            let cap = capacity(pos.row, pos.col, rows, cols);
            let on_row_edge = pos.row == 0 || pos.row == rows - 1;
            let on_col_edge = pos.col == 0 || pos.col == cols - 1;
            let expected = match (on_row_edge, on_col_edge) {
                (true, true) => 2,
                (false, false) => 4,
                _ => 3,
            };
            prop_assert_eq!(cap, expected);
            cap_sum += cap as usize;
            neighbor_sum += board.neighbors(pos).len();
        }

        prop_assert_eq!(cap_sum, neighbor_sum);
    }

    /// The explicit-stack cascade settles exactly like the recursive rule.
    #[test]
    fn prop_cascade_matches_recursive_rule(
        rows in 1usize..6,
        cols in 1usize..6,
        seeds in prop::collection::vec((0u32..4, 0usize..3), 1..30),
        origin in (0usize..6, 0usize..6),
    ) {
        let board = settled_board(rows, cols, &seeds);
        let origin = Position::new(origin.0 % rows, origin.1 % cols);

        let mut iterative = board.clone();
        if explode(&mut iterative, origin, PlayerColor::Blue, 2_000).is_ok() {
            let mut reference = board;
            explode_recursive(&mut reference, origin.row as isize, origin.col as isize, PlayerColor::Blue);
            prop_assert_eq!(&iterative, &reference);
            prop_assert!(iterative.is_settled());
        }
    }

    /// Engine invariants over arbitrary click sequences.
    #[test]
    fn prop_engine_invariants(
        rows in 2usize..6,
        cols in 2usize..6,
        players in 2usize..5,
        clicks in prop::collection::vec((0usize..7, 0usize..7), 0..60),
    ) {
        let mut engine = GameEngine::new();
        engine.init_game(rows, cols, players).unwrap();
        let mut applied = 0u64;

        for (r, c) in clicks {
            let before = engine.snapshot();
            let outcome = engine.handle_cell_click(r, c);

            match outcome {
                MoveOutcome::Ignored(_) => {
                    prop_assert_eq!(engine.snapshot(), before);
                }
                MoveOutcome::Applied { record, winner } => {
                    applied += 1;
                    let board = engine.board();

                    prop_assert!(before.winner().is_none());
                    prop_assert_eq!(record.player, before.turn());
                    prop_assert!(board.is_settled());
                    prop_assert_eq!(engine.turn_index(), (before.turn_index() + 1) % players);

                    // Every cell has as many neighbors as its capacity, so
                    // detonations move atoms without losing any.
                    prop_assert_eq!(board.total_atoms(), applied);

                    let tally = BoardTally::scan(board, players);
                    let remaining = tally.remaining();
                    let decided = tally.total_atoms > players as u64 && remaining.len() == 1;
                    prop_assert_eq!(winner.is_some(), decided);
                    prop_assert_eq!(engine.winner(), winner);
                    if let Some(w) = winner {
                        prop_assert_eq!(remaining[0], w);
                    }
                }
            }
        }
    }

    /// Moves that set nothing off add exactly one atom each and never win.
    #[test]
    fn prop_quiet_moves_add_one_atom(rows in 3usize..8, cols in 3usize..8, players in 2usize..7) {
        let mut engine = GameEngine::new();
        engine.init_game(rows, cols, players).unwrap();

        // Each player in turn drops into its own interior cell once.
        for i in 0..players.min((rows - 2) * (cols - 2)) {
            let row = 1 + i / (cols - 2);
            let col = 1 + i % (cols - 2);
            let outcome = engine.handle_cell_click(row, col);
            prop_assert!(outcome.is_applied());
            prop_assert_eq!(outcome.record().map(|r| r.detonations), Some(0));
            prop_assert_eq!(engine.board().total_atoms(), i as u64 + 1);
            prop_assert_eq!(engine.winner(), None);
        }
    }
}
