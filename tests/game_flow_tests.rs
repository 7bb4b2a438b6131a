//! Full-game flow tests.
//!
//! These drive the table through complete rounds and games the way the
//! banker console does: roll, bank, transition, restart.

use bank_dice::{
    GameOptions, GameStatus, PlayerId, ResultType, Table, TableError, Theme,
};

const ALICE: PlayerId = PlayerId::new(0);
const BOB: PlayerId = PlayerId::new(1);
const CAROL: PlayerId = PlayerId::new(2);

fn three_seat_table(options: GameOptions) -> Table {
    Table::new(["Alice", "Bob", "Carol"], options).unwrap()
}

/// A complete round: safe-zone accumulation, danger-zone banking, and a
/// bust ending the round for whoever held out.
#[test]
fn test_round_with_partial_banking_and_bust() {
    let mut table = three_seat_table(GameOptions::default());

    // Safe zone: a 7 pays +70, normals add their sum.
    table.record_roll(3, 4, false).unwrap(); // 70
    table.record_roll(5, 4, false).unwrap(); // 79
    table.record_roll(6, 6, false).unwrap(); // 91, matching faces but undeclared

    // Danger zone: declared doubles multiply.
    let doubled = table.record_roll(3, 3, true).unwrap();
    assert_eq!(doubled.result_type, ResultType::Double);
    assert_eq!(table.state().bank_total, 182);

    // Two players lock in, one presses their luck.
    assert_eq!(table.bank(ALICE).unwrap(), 182);
    assert_eq!(table.bank(BOB).unwrap(), 182);

    let bust = table.record_roll(5, 2, false).unwrap();
    assert!(bust.is_bust);

    // Carol gets nothing; the round rolled over.
    assert_eq!(table.state().current_round, 2);
    assert_eq!(table.roster()[ALICE].total_score, 182);
    assert_eq!(table.roster()[BOB].total_score, 182);
    assert_eq!(table.roster()[CAROL].total_score, 0);
    assert!(!table.roster()[ALICE].has_banked);
}

/// Escalating doubles compound the live bank across a streak.
#[test]
fn test_escalating_doubles_compound_on_live_bank() {
    let mut table = three_seat_table(GameOptions::new().with_escalating_doubles());

    table.record_roll(2, 3, false).unwrap(); // 5
    table.record_roll(2, 3, false).unwrap(); // 10
    table.record_roll(2, 3, false).unwrap(); // 15

    table.record_roll(3, 3, true).unwrap(); // x2 -> 30
    table.record_roll(3, 3, true).unwrap(); // x3 -> 90
    table.record_roll(3, 3, true).unwrap(); // x4 -> 360

    assert_eq!(table.state().bank_total, 360);
    assert_eq!(table.state().consecutive_doubles, 3);

    // A normal roll breaks the streak.
    table.record_roll(2, 4, false).unwrap();
    assert_eq!(table.state().consecutive_doubles, 0);
    assert_eq!(table.state().bank_total, 366);
}

/// Snake eyes stays x4 even deep into an escalating streak.
#[test]
fn test_snake_eyes_overrides_streak_multiplier() {
    let options = GameOptions::new()
        .with_escalating_doubles()
        .with_snake_eyes_bonus();
    let mut table = three_seat_table(options);

    table.record_roll(2, 3, false).unwrap(); // 5
    table.record_roll(2, 3, false).unwrap(); // 10
    table.record_roll(5, 5, false).unwrap(); // 20

    table.record_roll(3, 3, true).unwrap(); // x2 -> 40
    table.record_roll(3, 3, true).unwrap(); // x3 -> 120

    // Streak is 2; escalation would say x4 here too, so push further.
    table.record_roll(3, 3, true).unwrap(); // x4 -> 480
    assert_eq!(table.state().consecutive_doubles, 3);

    // Streak 3 would mean x5. Snake eyes pays x4 regardless.
    table.record_roll(1, 1, true).unwrap();
    assert_eq!(table.state().bank_total, 1920);
}

/// Escalating bank seeds each round with round * 100.
#[test]
fn test_escalating_bank_seeds_rounds() {
    let mut table = three_seat_table(GameOptions::new().with_escalating_bank());
    assert_eq!(table.state().bank_total, 100);

    table.record_roll(2, 3, false).unwrap();
    table.end_round().unwrap();
    assert_eq!(table.state().bank_total, 200);

    table.end_round().unwrap();
    assert_eq!(table.state().bank_total, 300);
}

/// A full short game, completion, winner, and restart.
#[test]
fn test_two_round_game_to_completion_and_restart() {
    let options = GameOptions::new()
        .with_round_count(2)
        .with_theme(Theme::Classic);
    let mut table = three_seat_table(options);

    // Round 1: everyone banks 8.
    table.record_roll(4, 4, false).unwrap();
    table.bank(ALICE).unwrap();
    table.bank(BOB).unwrap();
    table.bank(CAROL).unwrap();
    assert_eq!(table.state().current_round, 2);

    // Round 2: only Alice banks before the bust.
    table.record_roll(6, 6, false).unwrap(); // 12
    table.bank(ALICE).unwrap();
    table.record_roll(2, 3, false).unwrap(); // 17
    table.record_roll(2, 3, false).unwrap(); // 22
    table.record_roll(3, 4, false).unwrap(); // bust, last round -> completed

    assert_eq!(table.state().status, GameStatus::Completed);
    let (winner, player) = table.winner().unwrap();
    assert_eq!(winner, ALICE);
    assert_eq!(player.total_score, 20);

    // Completed is terminal for every operation except restart.
    assert_eq!(table.bank(BOB), Err(TableError::GameCompleted));
    assert_eq!(table.end_round(), Err(TableError::GameCompleted));

    table.restart();
    assert_eq!(table.state().status, GameStatus::Active);
    assert_eq!(table.state().current_round, 1);
    assert_eq!(table.roster()[ALICE].total_score, 0);
    table.record_roll(2, 3, false).unwrap();
}

/// Banker edits a mis-entered roll; downstream rolls recompute and the
/// live bank follows.
#[test]
fn test_edit_ripples_through_round() {
    let mut table = three_seat_table(GameOptions::new().with_lucky11());

    table.record_roll(2, 3, false).unwrap(); // 5
    table.record_roll(4, 4, false).unwrap(); // 13
    table.record_roll(2, 2, false).unwrap(); // 17

    // The second roll was actually 5+6: lucky 11 quadruples the total.
    table.edit_roll(2, 5, 6, false).unwrap();

    // Replay: 5, (5 + 11) * 4 = 64, 68.
    assert_eq!(table.state().bank_total, 68);
    let rolls: Vec<_> = table.state().rolls_for_round(1).collect();
    assert_eq!(rolls[1].bank_after, 64);
    assert_eq!(rolls[2].bank_after, 68);
}

/// The checkpoint bytes round-trip mid-game, preserving history, roster
/// and version.
#[test]
fn test_checkpoint_mid_game() {
    let mut table = three_seat_table(GameOptions::new().with_double_down());
    table.record_roll(3, 4, false).unwrap();
    table.activate_double_down(BOB).unwrap();
    table.bank(BOB).unwrap();

    let bytes = table.checkpoint().unwrap();
    let restored = Table::restore(&bytes).unwrap();

    assert_eq!(restored.state(), table.state());
    assert_eq!(restored.roster()[BOB].total_score, 140);
    assert_eq!(restored.state().version, table.state().version);
}

/// Turn rotation tracks the roll count across round boundaries.
#[test]
fn test_turn_rotation_resets_with_round() {
    let mut table = three_seat_table(GameOptions::default());

    assert_eq!(table.turn_position(), 1);
    table.record_roll(2, 3, false).unwrap();
    assert_eq!(table.turn_position(), 2);
    table.record_roll(2, 3, false).unwrap();
    assert_eq!(table.turn_position(), 3);
    table.record_roll(2, 3, false).unwrap();
    assert_eq!(table.turn_position(), 1);

    // Round boundary resets the roll count and with it the rotation.
    table.end_round().unwrap();
    assert_eq!(table.turn_position(), 1);
}
