//! Players and the per-game roster.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier, 0-based. Bank games are small tables; the
//! roster supports 1-8 seats.
//!
//! ## Player
//!
//! Per-player state. `total_score` and `has_used_double_down` persist for
//! the whole game; the remaining fields reset at every round boundary.
//!
//! ## Roster
//!
//! Seat-indexed storage backed by a `SmallVec` (no heap allocation for
//! typical table sizes).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Maximum number of seats at a table.
pub const MAX_PLAYERS: usize = 8;

/// Seat identifier, 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One player's state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,

    /// Cumulative banked points across rounds.
    pub total_score: i64,

    /// Amount banked this round, if any.
    pub current_round_banked: Option<i64>,

    /// Has this player banked this round?
    pub has_banked: bool,

    /// Roll number this player banked against (for single-bank-per-roll
    /// arbitration and round history).
    pub banked_at_roll: Option<u32>,

    /// Bank not yet secured (bank-delay option; currently always false).
    pub bank_pending: bool,

    /// One-time double down already spent this game.
    pub has_used_double_down: bool,

    /// Double down armed for the next bank this round.
    pub double_down_active: bool,
}

impl Player {
    /// Create a fresh player with zero score.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
            current_round_banked: None,
            has_banked: false,
            banked_at_roll: None,
            bank_pending: false,
            has_used_double_down: false,
            double_down_active: false,
        }
    }

    /// Clear the round-scoped fields at a round boundary.
    ///
    /// An armed but unused double down is lost with the round; the
    /// `has_used_double_down` flag stays spent.
    pub fn reset_for_round(&mut self) {
        self.current_round_banked = None;
        self.has_banked = false;
        self.banked_at_roll = None;
        self.bank_pending = false;
        self.double_down_active = false;
    }

    /// Clear everything back to a fresh game (restart).
    pub fn reset_for_game(&mut self) {
        self.reset_for_round();
        self.total_score = 0;
        self.has_used_double_down = false;
    }
}

/// Seat-indexed player storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    seats: SmallVec<[Player; MAX_PLAYERS]>,
}

impl Roster {
    /// Create a roster from player names.
    ///
    /// Seat order follows the order of `names`. The caller (`Table::new`)
    /// enforces the 1..=8 size bound.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            seats: names.into_iter().map(Player::new).collect(),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// True if the roster has no seats.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Get a player by seat, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&Player> {
        self.seats.get(player.index())
    }

    /// Get a mutable player by seat, if the seat exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut Player> {
        self.seats.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &Player) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.seats
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u8), p))
    }

    /// Iterate over all seat IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.seats.len() as u8).map(PlayerId)
    }

    /// Have all players banked this round?
    #[must_use]
    pub fn all_banked(&self) -> bool {
        self.seats.iter().all(|p| p.has_banked)
    }

    /// The seat that banked against `roll_number` this round, if any.
    #[must_use]
    pub fn banked_at(&self, roll_number: u32) -> Option<PlayerId> {
        self.iter()
            .find(|(_, p)| p.banked_at_roll == Some(roll_number))
            .map(|(id, _)| id)
    }

    /// Reset every player's round-scoped state.
    pub fn reset_for_round(&mut self) {
        for player in &mut self.seats {
            player.reset_for_round();
        }
    }

    /// Reset every player back to a fresh game.
    pub fn reset_for_game(&mut self) {
        for player in &mut self.seats {
            player.reset_for_game();
        }
    }

    /// Seats ordered by total score, highest first. Ties keep seat order.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, &Player)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_score.cmp(&a.1.total_score));
        ranked
    }
}

impl Index<PlayerId> for Roster {
    type Output = Player;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.seats[player.index()]
    }
}

impl IndexMut<PlayerId> for Roster {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.seats[player.index()]
    }
}
