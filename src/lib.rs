//! # bank-dice
//!
//! Scoring and table engine for "Bank", a press-your-luck dice game: a
//! banker enters dice sums, a shared pot grows under escalating risk, and
//! players choose when to lock in their share.
//!
//! ## Design Principles
//!
//! 1. **Pure scoring core**: every rule in `engine` is a total function
//!    over plain values. No internal state, no I/O, no suspension points.
//!
//! 2. **Explicit state passing**: all game state (bank total, round,
//!    streak, per-player flags) is owned by the caller and passed in on
//!    every invocation. [`Table`] is the single serialized writer that
//!    applies engine outputs; its snapshots carry a version counter for
//!    optimistic concurrency at the persistence boundary.
//!
//! 3. **Configuration over convention**: every rule variant is an
//!    explicit field of [`GameOptions`], validated at table creation.
//!
//! Persistence, realtime fan-out and rendering are external
//! collaborators: they persist the records defined in `core`, push
//! row-level changes to viewers, and call back into the table with state
//! they successfully stored.
//!
//! ## Modules
//!
//! - `core`: players, options, roll records, game state
//! - `engine`: pure scoring and resolution rules
//! - `table`: single-writer game orchestration
//! - `code`: join-code codec
//! - `session`: banker session tokens

pub mod code;
pub mod core;
pub mod engine;
pub mod session;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    GameOptions, GameState, GameStatus, OptionsError, Player, PlayerId, ResultType, Roll,
    RollResult, Roster, Theme, MAX_PLAYERS,
};

pub use crate::engine::{
    bank_after_round, bank_points, can_bank, classify_roll, in_safe_zone, resolve_roll,
    starting_bank, turn_position, BankEligibility, Zone,
};

pub use crate::code::{is_valid_code, JoinCode, CODE_ALPHABET, CODE_LENGTH};

pub use crate::session::{role_for, Role, SessionStore, SessionToken};

pub use crate::table::{Table, TableError};
