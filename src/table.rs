//! The table: single-writer owner of a running game.
//!
//! The engine's functions are pure and safe to call from anywhere, but
//! their results must be applied serially or concurrent rolls would race
//! on the bank total. `Table` is that serialization point: it owns the
//! authoritative `GameState` and `Roster`, performs the whole
//! read-modify-write cycle for each banker action, and bumps the state's
//! version counter so an external store can reject stale writes.
//!
//! Only the banker client drives a `Table`; viewers read snapshots.
//! Failed validation returns an error and leaves state untouched - a
//! rejected action never corrupts the bank, roll count or streak.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::options::{GameOptions, OptionsError};
use crate::core::player::{Player, PlayerId, Roster, MAX_PLAYERS};
use crate::core::roll::{ResultType, Roll, RollResult};
use crate::core::state::{GameState, GameStatus};
use crate::engine;

/// Errors from table operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("table seats 1..={MAX_PLAYERS} players, got {0}")]
    RosterSize(usize),

    #[error("game is completed")]
    GameCompleted,

    #[error("die face {0} outside 1..=6")]
    InvalidDie(u8),

    #[error("doubles cannot be declared in the safe zone (roll {roll_number})")]
    DoublesInSafeZone { roll_number: u32 },

    #[error("no such player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("{0} already banked this round")]
    AlreadyBanked(PlayerId),

    #[error("bank must be over {minimum} to bank (currently {bank_total})")]
    BankBelowMinimum { minimum: i64, bank_total: i64 },

    #[error("roll {roll_number} already banked by {taken_by}")]
    BankTakenForRoll {
        roll_number: u32,
        taken_by: PlayerId,
    },

    #[error("double down is not enabled for this game")]
    DoubleDownDisabled,

    #[error("{0} already spent their double down")]
    DoubleDownSpent(PlayerId),

    #[error("no roll {roll_number} in the current round")]
    RollNotFound { roll_number: u32 },
}

/// A running game: options, state and roster under one writer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Table {
    options: GameOptions,
    state: GameState,
    roster: Roster,
}

impl Table {
    /// Create a table for the given players.
    ///
    /// Validates the options and the roster size; round 1's bank is
    /// seeded by `engine::starting_bank`.
    pub fn new<I, S>(names: I, options: GameOptions) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        options.validate()?;

        let roster = Roster::new(names);
        if roster.is_empty() || roster.len() > MAX_PLAYERS {
            return Err(TableError::RosterSize(roster.len()));
        }

        let state = GameState::new(engine::starting_bank(1, &options));
        Ok(Self {
            options,
            state,
            roster,
        })
    }

    /// The game configuration.
    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The players.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// 1-based seat position whose turn the next roll belongs to.
    #[must_use]
    pub fn turn_position(&self) -> u32 {
        engine::turn_position(self.state.roll_count + 1, self.roster.len() as u32)
    }

    /// Record a roll entered by the banker.
    ///
    /// Resolves the roll, appends it to history, updates the bank, roll
    /// count and doubles streak, and on a bust ends the round. The first
    /// roll moves the game from `Setup` to `Active`.
    pub fn record_roll(
        &mut self,
        die1: u8,
        die2: u8,
        is_doubles: bool,
    ) -> Result<RollResult, TableError> {
        self.ensure_running()?;
        for die in [die1, die2] {
            if !(1..=6).contains(&die) {
                return Err(TableError::InvalidDie(die));
            }
        }

        let roll_number = self.state.roll_count + 1;
        if is_doubles && engine::in_safe_zone(roll_number, self.options.safe_zone_rolls) {
            return Err(TableError::DoublesInSafeZone { roll_number });
        }

        let result = engine::resolve_roll(
            die1,
            die2,
            roll_number,
            self.state.bank_total,
            self.state.consecutive_doubles,
            &self.options,
            is_doubles,
        );

        self.state.consecutive_doubles = if result.result_type == ResultType::Double {
            self.state.consecutive_doubles + 1
        } else {
            0
        };
        self.state.bank_total = result.new_bank_total;
        self.state.roll_count = roll_number;
        if self.state.status == GameStatus::Setup {
            self.state.status = GameStatus::Active;
        }
        self.state.push_roll(Roll {
            round_number: self.state.current_round,
            roll_number,
            die1,
            die2,
            is_doubles,
            result_type: result.result_type,
            bank_after: result.new_bank_total,
        });
        self.state.bump_version();

        debug!(
            round = self.state.current_round,
            roll = roll_number,
            die1,
            die2,
            result = %result.result_type,
            bank = result.new_bank_total,
            "roll recorded"
        );

        if result.is_bust {
            info!(round = self.state.current_round, "bust, round over");
            self.advance_round();
        }

        Ok(result)
    }

    /// Bank the current total for one player.
    ///
    /// Applies the engine's eligibility check, arbitrates
    /// single-bank-per-roll first-come-first-served (this table is the
    /// serialized writer, so "first" is well defined), pays out with any
    /// armed double down, and ends the round once everyone has banked.
    /// Returns the points credited.
    pub fn bank(&mut self, player: PlayerId) -> Result<i64, TableError> {
        self.ensure_running()?;

        let seat = self
            .roster
            .get(player)
            .ok_or(TableError::UnknownPlayer(player))?;

        let eligibility = engine::can_bank(
            self.state.bank_total,
            self.options.minimum_bank,
            seat.has_banked,
        );
        if !eligibility.can_bank {
            return Err(if seat.has_banked {
                TableError::AlreadyBanked(player)
            } else {
                TableError::BankBelowMinimum {
                    minimum: self.options.minimum_bank,
                    bank_total: self.state.bank_total,
                }
            });
        }

        if self.options.single_bank_per_roll {
            if let Some(taken_by) = self.roster.banked_at(self.state.roll_count) {
                return Err(TableError::BankTakenForRoll {
                    roll_number: self.state.roll_count,
                    taken_by,
                });
            }
        }

        let amount = engine::bank_points(self.state.bank_total, seat.double_down_active);
        let roll_number = self.state.roll_count;

        let seat = self
            .roster
            .get_mut(player)
            .ok_or(TableError::UnknownPlayer(player))?;
        seat.total_score += amount;
        seat.current_round_banked = Some(amount);
        seat.has_banked = true;
        seat.banked_at_roll = Some(roll_number);
        seat.double_down_active = false;
        self.state.bump_version();

        info!(%player, amount, roll = roll_number, "banked");

        if self.roster.all_banked() {
            info!(round = self.state.current_round, "all players banked");
            self.advance_round();
        }

        Ok(amount)
    }

    /// Arm a player's once-per-game double down for this round.
    pub fn activate_double_down(&mut self, player: PlayerId) -> Result<(), TableError> {
        self.ensure_running()?;
        if !self.options.double_down {
            return Err(TableError::DoubleDownDisabled);
        }

        let seat = self
            .roster
            .get_mut(player)
            .ok_or(TableError::UnknownPlayer(player))?;
        if seat.has_banked {
            return Err(TableError::AlreadyBanked(player));
        }
        if seat.has_used_double_down {
            return Err(TableError::DoubleDownSpent(player));
        }

        // Spent on arming: a bust before banking loses it.
        seat.has_used_double_down = true;
        seat.double_down_active = true;
        self.state.bump_version();

        debug!(%player, "double down armed");
        Ok(())
    }

    /// Correct a previously entered roll in the current round.
    ///
    /// Replaces the roll's dice and doubles flag, then recomputes every
    /// roll of the round from scratch: the replay is seeded with
    /// `engine::starting_bank` (so escalating-bank rounds recompute from
    /// their true baseline) and each untouched roll keeps its stored
    /// doubles declaration. A bust surfaced mid-replay zeroes the bank at
    /// that point but does not retroactively end the round; the banker
    /// decides what to do with the corrected totals.
    pub fn edit_roll(
        &mut self,
        roll_number: u32,
        die1: u8,
        die2: u8,
        is_doubles: bool,
    ) -> Result<(), TableError> {
        self.ensure_running()?;
        for die in [die1, die2] {
            if !(1..=6).contains(&die) {
                return Err(TableError::InvalidDie(die));
            }
        }
        if is_doubles && engine::in_safe_zone(roll_number, self.options.safe_zone_rolls) {
            return Err(TableError::DoublesInSafeZone { roll_number });
        }

        let round = self.state.current_round;
        let round_rolls: Vec<Roll> = self.state.rolls_for_round(round).cloned().collect();
        if !round_rolls.iter().any(|r| r.roll_number == roll_number) {
            return Err(TableError::RollNotFound { roll_number });
        }

        let mut bank = engine::starting_bank(round, &self.options);
        let mut streak = 0u32;
        let mut replayed = Vec::with_capacity(round_rolls.len());

        for roll in &round_rolls {
            let (d1, d2, declared) = if roll.roll_number == roll_number {
                (die1, die2, is_doubles)
            } else {
                (roll.die1, roll.die2, roll.is_doubles)
            };

            let result = engine::resolve_roll(
                d1,
                d2,
                roll.roll_number,
                bank,
                streak,
                &self.options,
                declared,
            );
            streak = if result.result_type == ResultType::Double {
                streak + 1
            } else {
                0
            };
            bank = result.new_bank_total;

            replayed.push(Roll {
                round_number: round,
                roll_number: roll.roll_number,
                die1: d1,
                die2: d2,
                is_doubles: declared,
                result_type: result.result_type,
                bank_after: bank,
            });
        }

        self.state.replace_round_rolls(round, replayed);
        self.state.bank_total = bank;
        self.state.consecutive_doubles = streak;
        self.state.bump_version();

        info!(round, roll = roll_number, bank, "roll edited, round recomputed");
        Ok(())
    }

    /// End the current round without a bust (banker decision).
    ///
    /// Unbanked players score nothing for the round.
    pub fn end_round(&mut self) -> Result<(), TableError> {
        self.ensure_running()?;
        self.advance_round();
        Ok(())
    }

    /// End the game immediately.
    pub fn end_game(&mut self) {
        if self.state.status != GameStatus::Completed {
            self.state.status = GameStatus::Completed;
            self.state.bump_version();
            info!("game ended by banker");
        }
    }

    /// Reset everything back to round 1: scores zeroed, history cleared,
    /// double downs restored. The only way out of `Completed`.
    pub fn restart(&mut self) {
        self.roster.reset_for_game();
        self.state.clear_rolls();
        self.state.current_round = 1;
        self.state.bank_total = engine::starting_bank(1, &self.options);
        self.state.roll_count = 0;
        self.state.consecutive_doubles = 0;
        self.state.status = GameStatus::Active;
        self.state.bump_version();
        info!("game restarted");
    }

    /// The winning seat once the game is completed.
    #[must_use]
    pub fn winner(&self) -> Option<(PlayerId, &Player)> {
        if self.state.status != GameStatus::Completed {
            return None;
        }
        self.roster.standings().into_iter().next()
    }

    /// Serialize the whole table for checkpointing.
    pub fn checkpoint(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Restore a table from checkpoint bytes.
    pub fn restore(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }

    fn ensure_running(&self) -> Result<(), TableError> {
        if self.state.status == GameStatus::Completed {
            return Err(TableError::GameCompleted);
        }
        Ok(())
    }

    /// Move to the next round, or complete the game after the last one.
    ///
    /// Players' round flags reset either way; on completion the bank is
    /// cleared and the round number stays at the final round.
    fn advance_round(&mut self) {
        let next = self.state.current_round + 1;

        if next > self.options.round_count {
            self.state.status = GameStatus::Completed;
            self.state.bank_total = 0;
            info!(final_round = self.state.current_round, "game completed");
        } else {
            self.state.current_round = next;
            self.state.bank_total = engine::starting_bank(next, &self.options);
            info!(round = next, bank = self.state.bank_total, "round started");
        }

        self.state.roll_count = 0;
        self.state.consecutive_doubles = 0;
        self.roster.reset_for_round();
        self.state.bump_version();
    }
}
