//! Roll records and engine output.
//!
//! A [`Roll`] is the history row the external store persists, append-only
//! per round except for banker-initiated edits (which recompute downstream
//! rows, see `Table::edit_roll`). A [`RollResult`] is what the engine hands
//! back for one resolved roll; it is derived data, never a hidden source of
//! truth.

use serde::{Deserialize, Serialize};

/// Classification of a resolved roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    /// Sum added to the bank.
    Normal,
    /// Declared doubles in the danger zone; bank multiplied.
    Double,
    /// 7 inside the safe zone; fixed +70 bonus.
    Seven,
    /// 7 in the danger zone; bank wiped, round over.
    Bust,
    /// End-of-round doubling record (double-each-lap). Reserved in the
    /// history schema; no rule currently emits it.
    RoundDoubled,
}

impl std::fmt::Display for ResultType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResultType::Normal => "normal",
            ResultType::Double => "double",
            ResultType::Seven => "seven",
            ResultType::Bust => "bust",
            ResultType::RoundDoubled => "round_doubled",
        };
        write!(f, "{name}")
    }
}

/// One recorded roll.
///
/// `is_doubles` is the operator-declared flag, stored verbatim so that
/// edit-recomputation can replay the round faithfully. Die faces for a
/// declared double may be display placeholders; only the snake-eyes check
/// reads real faces (1,1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// Round this roll belongs to (1-based).
    pub round_number: u32,

    /// Roll number within the round (1-based, monotonic).
    pub roll_number: u32,

    /// First die face (1-6).
    pub die1: u8,

    /// Second die face (1-6).
    pub die2: u8,

    /// Operator declared this roll as doubles.
    pub is_doubles: bool,

    /// Classification assigned at resolution time.
    pub result_type: ResultType,

    /// Bank total after this roll resolved.
    pub bank_after: i64,
}

impl Roll {
    /// Sum of the two die faces.
    #[must_use]
    pub fn sum(&self) -> u8 {
        self.die1 + self.die2
    }
}

/// Engine output for one resolved roll.
///
/// `message` is display text consistent with the branch taken (which bonus
/// fired); correctness lives in the numeric fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Classification of the roll.
    pub result_type: ResultType,

    /// Bank total after applying the roll.
    pub new_bank_total: i64,

    /// True only for a danger-zone 7.
    pub is_bust: bool,

    /// Human-readable summary for the UI.
    pub message: String,
}
