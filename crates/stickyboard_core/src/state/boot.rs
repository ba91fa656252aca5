//! Startup state resolution and legacy single-board migration.
//!
//! # Responsibility
//! - Try an ordered list of load strategies against the store.
//! - Fall back to one empty default board on any failure.
//!
//! # Invariants
//! - Once a non-empty `boards` value exists the legacy `tasks` key is
//!   never read. An empty string counts as absent.
//! - A loaded board list has unique ids.
//! - The legacy key is never written or deleted.
//! - Boot never panics and never returns an error; the result always holds
//!   at least one board.

use super::BoardsState;
use crate::model::board::{Board, BoardId, DEFAULT_BOARD_NAME, LEGACY_BOARD_ID, LEGACY_BOARD_NAME};
use crate::model::task::Task;
use crate::store::{KeyValueStore, BOARDS_KEY, LEGACY_TASKS_KEY};
use log::{info, warn};
use std::collections::HashSet;

/// One way of producing startup state from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStrategy {
    /// Multi-board snapshot under `boards`.
    StoredBoards,
    /// Legacy single-board task array under `tasks`.
    LegacyTasks,
}

/// Strategies in precedence order.
pub const LOAD_ORDER: [LoadStrategy; 2] = [LoadStrategy::StoredBoards, LoadStrategy::LegacyTasks];

impl LoadStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StoredBoards => "stored_boards",
            Self::LegacyTasks => "legacy_tasks",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::StoredBoards => BOARDS_KEY,
            Self::LegacyTasks => LEGACY_TASKS_KEY,
        }
    }

    /// Runs this strategy against `store`.
    pub fn attempt(self, store: &impl KeyValueStore) -> StrategyResult {
        let raw = match store.get(self.key()) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return StrategyResult::Absent,
            Err(err) => return StrategyResult::Failed(format!("store read failed: {err}")),
        };

        match self {
            Self::StoredBoards => match serde_json::from_str::<Vec<Board>>(&raw) {
                Ok(boards) if boards.is_empty() => {
                    StrategyResult::Failed("stored board list is empty".to_string())
                }
                Ok(boards) => match duplicate_board_id(&boards) {
                    Some(id) => StrategyResult::Failed(format!("duplicate board id `{id}`")),
                    None => StrategyResult::Loaded(BoardsState::new(boards)),
                },
                Err(err) => StrategyResult::Failed(format!("invalid boards json: {err}")),
            },
            Self::LegacyTasks => match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => StrategyResult::Loaded(BoardsState::new(vec![Board::with_id(
                    LEGACY_BOARD_ID,
                    LEGACY_BOARD_NAME,
                    tasks,
                )])),
                Err(err) => StrategyResult::Failed(format!("invalid legacy tasks json: {err}")),
            },
        }
    }
}

/// Result of one load strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyResult {
    Loaded(BoardsState),
    /// Key not present; the next strategy may run.
    Absent,
    /// Key present but unusable; boot falls through to the default board.
    Failed(String),
}

/// Resolved startup state plus how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct BootOutcome {
    pub state: BoardsState,
    /// Strategy that produced `state`; `None` means the default board.
    pub strategy: Option<LoadStrategy>,
    /// Why the default board was used after a present-but-bad key.
    pub failure: Option<String>,
}

/// Resolves startup state, reporting which strategy won.
pub fn boot(store: &impl KeyValueStore) -> BootOutcome {
    for strategy in LOAD_ORDER {
        match strategy.attempt(store) {
            StrategyResult::Loaded(state) => {
                info!(
                    "event=state_boot module=state status=ok strategy={} boards={}",
                    strategy.as_str(),
                    state.len()
                );
                return BootOutcome {
                    state,
                    strategy: Some(strategy),
                    failure: None,
                };
            }
            StrategyResult::Absent => continue,
            StrategyResult::Failed(reason) => {
                warn!(
                    "event=state_boot module=state status=fallback strategy={} error={}",
                    strategy.as_str(),
                    reason
                );
                return default_outcome(Some(reason));
            }
        }
    }

    info!("event=state_boot module=state status=ok strategy=default boards=1");
    default_outcome(None)
}

/// Resolves startup state. See [`boot`] for diagnostics.
pub fn initialize(store: &impl KeyValueStore) -> BoardsState {
    boot(store).state
}

/// Returns `last_active` when it names an existing board, else the first
/// board's id. `None` only for an empty state.
pub fn resolve_active_board(state: &BoardsState, last_active: Option<&str>) -> Option<BoardId> {
    match last_active {
        Some(id) if state.contains(id) => Some(id.to_string()),
        _ => state.first_id().cloned(),
    }
}

fn duplicate_board_id(boards: &[Board]) -> Option<&str> {
    let mut seen = HashSet::with_capacity(boards.len());
    boards
        .iter()
        .map(|board| board.id.as_str())
        .find(|id| !seen.insert(*id))
}

fn default_outcome(failure: Option<String>) -> BootOutcome {
    BootOutcome {
        state: BoardsState::single(DEFAULT_BOARD_NAME),
        strategy: None,
        failure,
    }
}
