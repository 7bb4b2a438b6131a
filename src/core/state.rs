//! Authoritative game state.
//!
//! `GameState` is the caller-owned snapshot the engine's pure functions
//! transform: the shared bank, round progression, the doubles streak, and
//! the append-only roll history. The roll history uses an `im::Vector` so
//! snapshots clone in O(1) - viewers and checkpoints copy freely while the
//! single writer keeps mutating its own copy.
//!
//! `version` is an optimistic-concurrency counter: the owner bumps it on
//! every applied mutation, and an external store can reject stale writes by
//! comparing versions.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::roll::Roll;

/// Lifecycle of a game.
///
/// `Setup -> Active` on the first roll; `Active -> Completed` when the
/// round count is exhausted or the banker ends the game. `Completed` is
/// terminal except for an explicit restart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Setup,
    Active,
    Completed,
}

/// Caller-owned round and bank state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Lifecycle status.
    pub status: GameStatus,

    /// Current round (1..=round_count).
    pub current_round: u32,

    /// Shared pot. Never negative.
    pub bank_total: i64,

    /// Rolls taken this round.
    pub roll_count: u32,

    /// Current consecutive-doubles streak. Reset on any non-double roll
    /// and at round boundaries.
    pub consecutive_doubles: u32,

    /// Optimistic-concurrency counter, bumped on every applied mutation.
    pub version: u64,

    /// Full roll history, across rounds.
    rolls: Vector<Roll>,
}

impl GameState {
    /// Create a fresh state at round 1.
    ///
    /// `starting_bank` comes from `engine::starting_bank` (0 unless the
    /// escalating-bank option is on).
    #[must_use]
    pub fn new(starting_bank: i64) -> Self {
        Self {
            status: GameStatus::Setup,
            current_round: 1,
            bank_total: starting_bank,
            roll_count: 0,
            consecutive_doubles: 0,
            version: 0,
            rolls: Vector::new(),
        }
    }

    /// All recorded rolls, oldest first.
    #[must_use]
    pub fn rolls(&self) -> &Vector<Roll> {
        &self.rolls
    }

    /// Rolls belonging to one round, in roll order.
    pub fn rolls_for_round(&self, round: u32) -> impl Iterator<Item = &Roll> {
        self.rolls.iter().filter(move |r| r.round_number == round)
    }

    /// Append a roll to the history.
    pub fn push_roll(&mut self, roll: Roll) {
        self.rolls.push_back(roll);
    }

    /// Replace the current round's rolls after a banker edit.
    ///
    /// Rolls from other rounds are untouched; the replacement list must
    /// already carry recomputed `result_type`/`bank_after` values.
    pub fn replace_round_rolls(&mut self, round: u32, replacement: Vec<Roll>) {
        let mut kept: Vector<Roll> = self
            .rolls
            .iter()
            .filter(|r| r.round_number != round)
            .cloned()
            .collect();
        // History stays ordered because edits only target the current
        // (latest) round.
        kept.extend(replacement);
        self.rolls = kept;
    }

    /// Drop the entire roll history (restart).
    pub fn clear_rolls(&mut self) {
        self.rolls.clear();
    }

    /// Bump the optimistic-concurrency counter.
    pub fn bump_version(&mut self) {
        self.version += 1;
    }

    /// Cheap snapshot for viewers or checkpointing.
    ///
    /// The roll history is a persistent vector, so this is O(1) in the
    /// number of recorded rolls.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}
