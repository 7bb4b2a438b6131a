//! Pure scoring and resolution rules for Bank.
//!
//! Core rules:
//! - Normal rolls: add the face sum to the bank (3+5 = +8).
//! - Safe zone (rolls 1..=safe_zone_rolls):
//!   - Sum of 7 = +70 to the bank.
//!   - Doubles cannot be declared (input layer disables the control).
//! - Danger zone (later rolls):
//!   - Sum of 7 = bust: bank to 0, round over.
//!   - Declared doubles multiply the bank (x2, or x4 snake eyes, or the
//!     escalating streak multiplier).
//!
//! Every function here is total, synchronous and side-effect free. All
//! state lives with the caller, which applies returned values serially
//! (see `table`).
//!
//! ## Preconditions
//!
//! Die faces are 1..=6 and `roll_number >= 1`. The input layer clamps
//! user entries before calling in; these functions only `debug_assert!`
//! the contract rather than re-validating.
//!
//! `is_doubles` is an operator-declared flag, not derived from
//! `die1 == die2`: doubles entries may carry placeholder faces. The one
//! exception is snake eyes, which checks the real faces (1,1) - the input
//! layer must pass true values for a declared snake-eyes double.

use crate::core::options::{GameOptions, SAFE_SEVEN_BONUS};
use crate::core::roll::{ResultType, RollResult};

/// Is `roll_number` inside the safe zone?
#[must_use]
pub fn in_safe_zone(roll_number: u32, safe_zone_rolls: u32) -> bool {
    roll_number <= safe_zone_rolls
}

/// The two phases of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Safe,
    Danger,
}

impl Zone {
    /// Zone for a given roll number.
    #[must_use]
    pub fn of(roll_number: u32, safe_zone_rolls: u32) -> Self {
        if in_safe_zone(roll_number, safe_zone_rolls) {
            Zone::Safe
        } else {
            Zone::Danger
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Safe => write!(f, "Safe Zone"),
            Zone::Danger => write!(f, "Danger Zone"),
        }
    }
}

/// Classify a roll.
///
/// A 7 is never neutral: a bonus in the safe zone, fatal after it.
/// A declared double only registers in the danger zone; the safe zone
/// forbids declaring doubles, so the flag is ignored there.
#[must_use]
pub fn classify_roll(
    die1: u8,
    die2: u8,
    roll_number: u32,
    safe_zone_rolls: u32,
    is_doubles: bool,
) -> ResultType {
    debug_assert!((1..=6).contains(&die1) && (1..=6).contains(&die2));
    debug_assert!(roll_number >= 1);

    let sum = die1 + die2;
    let safe = in_safe_zone(roll_number, safe_zone_rolls);

    if sum == 7 {
        return if safe { ResultType::Seven } else { ResultType::Bust };
    }

    if is_doubles && !safe {
        return ResultType::Double;
    }

    ResultType::Normal
}

/// Resolve a roll against the current bank.
///
/// Dispatches on [`classify_roll`] and computes the new bank total:
///
/// - bust: bank to 0 (terminal for the round - the caller transitions);
/// - seven: bank + 70, regardless of configuration;
/// - double: bank multiplied - x4 snake eyes (when enabled, and always
///   winning over the escalation formula), else `streak + 2` when
///   escalating doubles is on and a streak exists, else x2;
/// - normal: bank + sum, then x4 on the whole total for a lucky 11.
///
/// Does not update `consecutive_doubles` or the roll count; the caller
/// sets `consecutive_doubles = streak + 1` after a `Double` result and 0
/// otherwise.
#[must_use]
pub fn resolve_roll(
    die1: u8,
    die2: u8,
    roll_number: u32,
    current_bank: i64,
    consecutive_doubles: u32,
    options: &GameOptions,
    is_doubles: bool,
) -> RollResult {
    let sum = die1 + die2;
    let snake_eyes = die1 == 1 && die2 == 1;
    let result_type = classify_roll(die1, die2, roll_number, options.safe_zone_rolls, is_doubles);

    let mut new_bank = current_bank;
    let mut is_bust = false;
    let message;

    match result_type {
        ResultType::Bust => {
            new_bank = 0;
            is_bust = true;
            message = "BUST!".to_string();
        }
        ResultType::Seven => {
            new_bank += SAFE_SEVEN_BONUS;
            message = format!("+{SAFE_SEVEN_BONUS} Points");
        }
        ResultType::Double => {
            if snake_eyes && options.snake_eyes_bonus {
                // Snake eyes wins over the escalation formula: always x4,
                // never compounded with the streak.
                new_bank *= 4;
                message = "SNAKE EYES! Bank x4".to_string();
            } else if options.escalating_doubles && consecutive_doubles > 0 {
                let multiplier = i64::from(consecutive_doubles) + 2;
                new_bank *= multiplier;
                message = format!("DOUBLES! Bank x{multiplier}");
            } else {
                new_bank *= 2;
                message = "DOUBLES! Bank x2".to_string();
            }
        }
        ResultType::Normal | ResultType::RoundDoubled => {
            new_bank += i64::from(sum);
            if sum == 11 && options.lucky11 {
                // The whole resulting total quadruples, not just the +11.
                new_bank *= 4;
                message = "Lucky 11! Bank x4".to_string();
            } else {
                message = format!("+{sum} Points");
            }
        }
    }

    RollResult {
        result_type,
        new_bank_total: new_bank,
        is_bust,
        message,
    }
}

/// Starting bank for a round.
///
/// `round * 100` with the escalating-bank option, else 0. Total for all
/// `round_number >= 1`.
#[must_use]
pub fn starting_bank(round_number: u32, options: &GameOptions) -> i64 {
    if options.escalating_bank {
        i64::from(round_number) * 100
    } else {
        0
    }
}

/// End-of-round bank adjustment for the double-each-lap option.
///
/// The option's rule text is ambiguous (doubles "after every player has
/// rolled" vs "at the end of each round") and no caller currently applies
/// this; it is kept for schema parity and returns x2 only when the option
/// is set.
#[must_use]
pub fn bank_after_round(current_bank: i64, options: &GameOptions) -> i64 {
    if options.double_each_lap {
        current_bank * 2
    } else {
        current_bank
    }
}

/// Outcome of a banking eligibility check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BankEligibility {
    pub can_bank: bool,
    pub reason: Option<String>,
}

impl BankEligibility {
    fn ok() -> Self {
        Self {
            can_bank: true,
            reason: None,
        }
    }

    fn denied(reason: impl Into<String>) -> Self {
        Self {
            can_bank: false,
            reason: Some(reason.into()),
        }
    }
}

/// May one player bank the current total?
///
/// The bank must be strictly greater than `minimum_bank` when a minimum is
/// set: exactly equal is not bankable. This predicate only answers for the
/// one player; arbitrating simultaneous attempts (single-bank-per-roll) is
/// the state owner's job.
#[must_use]
pub fn can_bank(bank_total: i64, minimum_bank: i64, has_banked: bool) -> BankEligibility {
    if has_banked {
        return BankEligibility::denied("Already banked this round");
    }

    if minimum_bank > 0 && bank_total <= minimum_bank {
        return BankEligibility::denied(format!(
            "Bank must be over {minimum_bank} to bank (currently {bank_total})"
        ));
    }

    BankEligibility::ok()
}

/// Points paid out when banking (x2 with an armed double down).
#[must_use]
pub fn bank_points(bank_total: i64, double_down_active: bool) -> i64 {
    if double_down_active {
        bank_total * 2
    } else {
        bank_total
    }
}

/// Whose turn a roll number belongs to, as a 1-based seat position.
///
/// Roll 1 is position 1, roll 2 position 2, cycling after all players
/// have rolled. UI highlighting only - no effect on scoring.
#[must_use]
pub fn turn_position(roll_number: u32, total_players: u32) -> u32 {
    debug_assert!(total_players >= 1);
    ((roll_number - 1) % total_players) + 1
}
