//! Core types: players, configuration, roll records, game state.
//!
//! These are plain data records. All scoring logic lives in `engine`;
//! all mutation lives with the state owner (`table`).

pub mod options;
pub mod player;
pub mod roll;
pub mod state;

pub use options::{GameOptions, OptionsError, Theme};
pub use player::{Player, PlayerId, Roster, MAX_PLAYERS};
pub use roll::{ResultType, Roll, RollResult};
pub use state::{GameState, GameStatus};
