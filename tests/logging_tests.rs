//! Engine log output.
//!
//! A capturing logger records what the engine writes through the `log`
//! facade. Records are kept per thread so tests can run in parallel.

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

use chain_reaction::core::GameSettings;
use chain_reaction::rules::{GameEngine, IgnoreReason, MoveOutcome};

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// Run `f` and return every record it logged on this thread.
fn captured(f: impl FnOnce()) -> Vec<(Level, String)> {
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in this test binary");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| records.borrow_mut().drain(..).collect())
}

fn levels(records: &[(Level, String)]) -> Vec<Level> {
    records.iter().map(|(level, _)| *level).collect()
}

// =============================================================================
// Ignored clicks
// =============================================================================

/// Rejected clicks stay below debug level.
#[test]
fn test_ignored_clicks_only_trace() {
    let mut engine = GameEngine::new();
    engine.init_game(3, 3, 2).unwrap();
    engine.handle_cell_click(1, 1);

    let records = captured(|| {
        assert_eq!(
            engine.handle_cell_click(1, 1),
            MoveOutcome::Ignored(IgnoreReason::OpponentCell)
        );
        assert_eq!(
            engine.handle_cell_click(7, 7),
            MoveOutcome::Ignored(IgnoreReason::OutOfBounds)
        );
    });

    assert_eq!(levels(&records), [Level::Trace, Level::Trace]);
}

/// Clicks after a win are not logged above trace either.
#[test]
fn test_clicks_after_win_only_trace() {
    let mut engine = GameEngine::new();
    engine.init_game(2, 3, 2).unwrap();
    for (r, c) in [(0, 0), (0, 1), (0, 0)] {
        engine.handle_cell_click(r, c);
    }
    assert!(engine.winner().is_some());

    let records = captured(|| {
        engine.handle_cell_click(1, 2);
    });

    assert!(records.iter().all(|(level, _)| *level == Level::Trace));
}

// =============================================================================
// Accepted moves
// =============================================================================

/// An accepted move logs one debug line naming the mover.
#[test]
fn test_accepted_move_logs_debug() {
    let mut engine = GameEngine::new();

    let records = captured(|| {
        engine.handle_cell_click(4, 3);
    });

    assert_eq!(levels(&records), [Level::Debug]);
    assert!(records[0].1.contains("RED at (4, 3)"));
}

/// Game start and win are logged at info.
#[test]
fn test_start_and_win_log_info() {
    let mut engine = GameEngine::new();

    let records = captured(|| {
        engine.init_game(2, 3, 2).unwrap();
        for (r, c) in [(0, 0), (0, 1), (0, 0)] {
            engine.handle_cell_click(r, c);
        }
    });

    let info: Vec<_> = records
        .iter()
        .filter(|(level, _)| *level == Level::Info)
        .map(|(_, message)| message.as_str())
        .collect();
    assert_eq!(info.len(), 2);
    assert!(info[1].contains("RED wins on move 3"));
}

/// An abandoned cascade is logged as a warning.
#[test]
fn test_cascade_overflow_logs_warning() {
    let mut engine = GameEngine::with_settings(GameSettings::new(2, 2, 2)).unwrap();
    for (r, c) in [(0, 0), (1, 1), (0, 0)] {
        engine.handle_cell_click(r, c);
    }

    let records = captured(|| {
        engine.handle_cell_click(1, 1);
    });

    assert_eq!(levels(&records), [Level::Warn, Level::Trace]);
}
