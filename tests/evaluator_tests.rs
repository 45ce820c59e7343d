//! Opponent evaluator integration tests.

use qubit_duel::ai::{best_move, enumerate_target_sets, opponent_seat, take_action, take_turn};
use qubit_duel::cards::{CardId, CardInstance, InstanceId};
use qubit_duel::core::{GameSettings, LogEvent, PLAYER_ONE, PLAYER_TWO};
use qubit_duel::game::{GameState, Intent, Phase, TargetRef};
use qubit_duel::quantum::PAULI_X;

/// A 2-qubit game at the start of player 2's battle turn (turn 2, 2 mana),
/// with player 1's register excited on qubit 0 and player 2's on qubit 1.
fn opponent_turn(seed: u64) -> GameState {
    let mut state = GameState::new(GameSettings::new(2), seed);
    state.players[PLAYER_ONE].register.apply_gate(&PAULI_X, 0);
    state.players[PLAYER_TWO].register.apply_gate(&PAULI_X, 1);
    let state = state
        .apply(&Intent::EndTurn)
        .apply(&Intent::EndTurn)
        .apply(&Intent::EndTurn);
    assert_eq!(state.phase, Phase::TurnPlayerTwo);
    state
}

fn set_hand(state: &mut GameState, cards: &[CardId]) {
    state.players[PLAYER_TWO].hand = cards
        .iter()
        .enumerate()
        .map(|(i, &card)| CardInstance::new(InstanceId::new(800 + i as u32), card))
        .collect();
}

// =============================================================================
// Target Enumeration
// =============================================================================

/// The recursive enumerator must agree with a plain nested-loop reference
/// for pairs.
#[test]
fn test_enumeration_matches_nested_loop_reference() {
    let pool: Vec<TargetRef> = (0..3)
        .map(|q| TargetRef::new(PLAYER_TWO, q))
        .chain((0..3).map(|q| TargetRef::new(PLAYER_ONE, q)))
        .collect();

    let mut reference = Vec::new();
    for (i, &a) in pool.iter().enumerate() {
        for (j, &b) in pool.iter().enumerate() {
            if i != j {
                reference.push(vec![a, b]);
            }
        }
    }

    let enumerated: Vec<Vec<TargetRef>> = enumerate_target_sets(&pool, 2)
        .into_iter()
        .map(|s| s.to_vec())
        .collect();

    assert_eq!(enumerated, reference);
}

/// Same agreement at Toffoli arity: every ordered triple of distinct
/// targets, exactly once, in enumeration order.
#[test]
fn test_triple_enumeration_matches_nested_loop_reference() {
    let pool: Vec<TargetRef> = (0..2)
        .map(|q| TargetRef::new(PLAYER_TWO, q))
        .chain((0..2).map(|q| TargetRef::new(PLAYER_ONE, q)))
        .collect();

    let mut reference = Vec::new();
    for (i, &a) in pool.iter().enumerate() {
        for (j, &b) in pool.iter().enumerate() {
            for (k, &c) in pool.iter().enumerate() {
                if i != j && i != k && j != k {
                    reference.push(vec![a, b, c]);
                }
            }
        }
    }

    let enumerated: Vec<Vec<TargetRef>> = enumerate_target_sets(&pool, 3)
        .into_iter()
        .map(|s| s.to_vec())
        .collect();

    // 4 * 3 * 2 ordered triples from a pool of 4.
    assert_eq!(enumerated.len(), 24);
    assert_eq!(enumerated, reference);
}

// =============================================================================
// Move Selection
// =============================================================================

/// With an X in hand and a single enemy excitation, the winning flip
/// dominates every alternative.
#[test]
fn test_best_move_finds_winning_flip() {
    let mut state = opponent_turn(42);
    set_hand(&mut state, &[CardId::new(1), CardId::new(2), CardId::new(3)]);

    let chosen = best_move(&state).expect("hand is playable");

    assert_eq!(chosen.card.card, CardId::new(2));
    assert_eq!(chosen.targets.as_slice(), &[TargetRef::new(PLAYER_ONE, 0)]);
    assert!(chosen.score >= 999.0, "win should dominate: {}", chosen.score);
}

/// Unaffordable cards never surface as candidates.
#[test]
fn test_best_move_respects_mana() {
    let mut state = opponent_turn(42);
    set_hand(&mut state, &[CardId::new(7)]); // Toffoli costs 4, mana is 2

    assert!(best_move(&state).is_none());
}

/// The search itself is reproducible: identical states yield identical
/// choices.
#[test]
fn test_best_move_is_deterministic() {
    let mut a = opponent_turn(9);
    set_hand(&mut a, &[CardId::new(1), CardId::new(6), CardId::new(2)]);
    let mut b = opponent_turn(9);
    set_hand(&mut b, &[CardId::new(1), CardId::new(6), CardId::new(2)]);

    assert_eq!(best_move(&a), best_move(&b));
}

/// Scoring rollouts must not touch the live game's RNG stream: the state
/// passed in is unchanged by the search.
#[test]
fn test_search_does_not_disturb_state() {
    let mut state = opponent_turn(11);
    set_hand(&mut state, &[CardId::new(6), CardId::new(4)]);

    let _ = best_move(&state);

    let replay = take_action(&state);
    let replay_again = take_action(&state);
    assert_eq!(replay.log, replay_again.log);
    assert_eq!(
        replay.players[PLAYER_ONE].register,
        replay_again.players[PLAYER_ONE].register
    );
}

// =============================================================================
// Turn Driver
// =============================================================================

/// An empty hand passes both slots (logged) and then ends the turn.
#[test]
fn test_empty_hand_passes_and_ends_turn() {
    let mut state = opponent_turn(42);
    set_hand(&mut state, &[]);

    let after = take_turn(&state);

    assert_eq!(after.phase, Phase::TurnPlayerOne);
    assert_eq!(after.turn, 3);
    let passes = after
        .log
        .iter()
        .filter(|e| matches!(e, LogEvent::OpponentPassed { turn: 2 }))
        .count();
    assert_eq!(passes, 2);
}

/// A single pass still consumes the action slot.
#[test]
fn test_pass_consumes_slot() {
    let mut state = opponent_turn(42);
    set_hand(&mut state, &[]);

    let after = take_action(&state);

    assert_eq!(after.actions_taken, 1);
    assert_eq!(after.phase, Phase::TurnPlayerTwo);
}

/// The battle driver stops the moment it wins; no end-of-turn follows.
#[test]
fn test_take_turn_stops_on_win() {
    let mut state = opponent_turn(42);
    set_hand(&mut state, &[CardId::new(2)]);

    let after = take_turn(&state);

    assert_eq!(after.winner, Some(opponent_seat()));
    assert_eq!(after.phase, Phase::GameOver);
    assert!(!after
        .log
        .iter()
        .any(|e| matches!(e, LogEvent::TurnEnded { player } if *player == PLAYER_TWO)));
}

/// During its setup the opponent makes free preparation moves and hands the
/// turn back with the battle phase open.
#[test]
fn test_setup_turn_prepares_and_ends() {
    let mut state = GameState::new(GameSettings::new(2), 42);
    // Keep player 1 out of the ground state so the battle opener does not
    // decide the game by itself.
    state.players[PLAYER_ONE].register.apply_gate(&PAULI_X, 0);
    let state = state.apply(&Intent::EndTurn);
    assert_eq!(state.phase, Phase::SetupPlayerTwo);

    let after = take_turn(&state);

    assert_eq!(after.phase, Phase::TurnPlayerOne);
    assert_eq!(after.turn, 2);
    assert!(after.log.iter().any(|e| matches!(
        e,
        LogEvent::CardPlayed { turn: 1, player, .. } if *player == PLAYER_TWO
    )));
}

/// With nothing worth playing, the setup turn is skipped and logged as such.
#[test]
fn test_setup_turn_with_empty_hand_logs_no_setup() {
    let mut state = GameState::new(GameSettings::new(2), 42);
    state.players[PLAYER_ONE].register.apply_gate(&PAULI_X, 0);
    let mut state = state.apply(&Intent::EndTurn);
    set_hand(&mut state, &[]);

    let after = take_turn(&state);

    assert!(after.log.iter().any(|e| matches!(e, LogEvent::OpponentNoSetup)));
    assert_eq!(after.phase, Phase::TurnPlayerOne);
}

/// States that are not the opponent's to act on come back unchanged.
#[test]
fn test_take_turn_ignores_other_phases() {
    let state = GameState::new(GameSettings::new(2), 42);
    let after = take_turn(&state);
    assert_eq!(after.phase, Phase::SetupPlayerOne);
    assert_eq!(after.log.len(), state.log.len());
}
