//! Opponent move search.
//!
//! For every card the opponent can afford, every ordered combination of
//! legal targets is enumerated explicitly, each candidate is rolled out on a
//! cloned state (one sampled rollout per candidate, not an average over
//! measurement outcomes), and the highest-scoring move is played through the
//! same effect dispatch as a human play.
//!
//! The search is synchronous and bounded: at most N qubits on each side and
//! target arities up to 3. Any "thinking" delay is a presentation concern
//! the host schedules around `take_action`/`take_turn`.

use smallvec::SmallVec;

use crate::cards::{CardInstance, GateKind};
use crate::core::{LogEvent, PlayerId, PLAYER_TWO};
use crate::game::{apply_card_effect, GameState, Intent, Phase, TargetRef, TargetSession};
use crate::quantum::QubitClass;

/// Immediate win; dominates every other component.
const WIN_SCORE: f64 = 1000.0;

/// Per-qubit weight for pushing opponent qubits out of definite |1>.
const PROGRESS_WEIGHT: f64 = 25.0;

/// Collapsing an opponent superposition with a measurement.
const MEASURE_BONUS: f64 = 50.0;

/// Disruptive single-qubit gates aimed at the opponent.
const HADAMARD_BONUS: f64 = 20.0;
const PAULI_X_BONUS: f64 = 5.0;

/// Any target on the opponent's side at all.
const AGGRESSION_BONUS: f64 = 5.0;

/// Cost efficiency: cheaper cards keep mana for the second action.
const COST_BASELINE: f64 = 10.0;

/// Minimum score for a setup-phase move to be worth making.
pub const SETUP_MOVE_THRESHOLD: f64 = 5.0;

/// A scored candidate move.
#[derive(Clone, Debug, PartialEq)]
pub struct Move {
    pub card: CardInstance,
    pub targets: SmallVec<[TargetRef; 3]>,
    pub score: f64,
}

/// Enumerate every ordered selection of `arity` distinct targets from
/// `pool`, in a stable order (pool order, depth first).
///
/// This is the full legal target space; scoring sees every combination, not
/// a heuristic shortcut.
#[must_use]
pub fn enumerate_target_sets(
    pool: &[TargetRef],
    arity: usize,
) -> Vec<SmallVec<[TargetRef; 3]>> {
    fn recurse(
        pool: &[TargetRef],
        arity: usize,
        used: &mut Vec<bool>,
        prefix: &mut SmallVec<[TargetRef; 3]>,
        out: &mut Vec<SmallVec<[TargetRef; 3]>>,
    ) {
        if prefix.len() == arity {
            out.push(prefix.clone());
            return;
        }
        for (i, &target) in pool.iter().enumerate() {
            if !used[i] {
                used[i] = true;
                prefix.push(target);
                recurse(pool, arity, used, prefix, out);
                prefix.pop();
                used[i] = false;
            }
        }
    }

    if arity > pool.len() {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut used = vec![false; pool.len()];
    recurse(pool, arity, &mut used, &mut SmallVec::new(), &mut out);
    out
}

/// Qubits the opponent may aim at for the given action slot.
///
/// Own side only during setup and during action slot 2; both sides (own
/// first) in an ordinary battle slot.
fn target_pool(state: &GameState, action_number: u32) -> Vec<TargetRef> {
    let qubits = state.settings.qubit_count as u8;
    let own = (0..qubits).map(|q| TargetRef::new(PLAYER_TWO, q));

    if state.turn == 1 || action_number == 2 {
        own.collect()
    } else {
        own.chain((0..qubits).map(|q| TargetRef::new(PLAYER_TWO.opponent(), q)))
            .collect()
    }
}

/// Score one candidate by rolling it out on a cloned state.
fn score_candidate(
    base: &mut GameState,
    card: CardInstance,
    targets: &SmallVec<[TargetRef; 3]>,
    action_number: u32,
) -> f64 {
    let me = PLAYER_TWO;
    let opponent = me.opponent();

    let Some(definition) = base.definition(card.card).cloned() else {
        return f64::NEG_INFINITY;
    };

    let ones_before = base.players[opponent].register.count_definite_ones();
    let first_target_was_superposed = targets.first().is_some_and(|t| {
        t.player == opponent
            && base.players[t.player]
                .register
                .classify(usize::from(t.qubit))
                == QubitClass::Superposition
    });

    let mut rollout = base.clone_for_rollout();
    let session = TargetSession::resolved(card, &definition, me, targets.clone(), action_number);
    apply_card_effect(&mut rollout, &session, true);

    // Win checks are skipped during the setup turn, so "reaches ground"
    // only counts as a win from turn 2 on.
    if base.turn > 1 && rollout.players[opponent].register.is_ground() {
        return WIN_SCORE;
    }

    let ones_after = rollout.players[opponent].register.count_definite_ones();
    let mut score = (ones_before as f64 - ones_after as f64) * PROGRESS_WEIGHT;

    let first_hits_opponent = targets.first().is_some_and(|t| t.player == opponent);
    match definition.gate {
        GateKind::Measure if first_target_was_superposed => score += MEASURE_BONUS,
        GateKind::Hadamard if first_hits_opponent => score += HADAMARD_BONUS,
        GateKind::PauliX if first_hits_opponent => score += PAULI_X_BONUS,
        _ => {}
    }
    if targets.iter().any(|t| t.player == opponent) {
        score += AGGRESSION_BONUS;
    }
    score += COST_BASELINE - f64::from(definition.cost);

    score
}

/// Exhaustively search the opponent's affordable plays and return the best.
///
/// Ties keep the first candidate in enumeration order (hand order, then pool
/// order), so the search is deterministic given the state's RNG.
#[must_use]
pub fn best_move(state: &GameState) -> Option<Move> {
    let me = PLAYER_TWO;
    let action_number = state.actions_taken + 1;
    let pool = target_pool(state, action_number);

    let mut base = state.clone();
    let mut best: Option<Move> = None;

    let hand = state.players[me].hand.clone();
    for card in hand {
        let Some(definition) = state.definition(card.card) else {
            continue;
        };
        // Setup-turn plays are free.
        if state.turn > 1 && definition.cost > state.players[me].mana {
            continue;
        }

        for targets in enumerate_target_sets(&pool, definition.target_count()) {
            let score = score_candidate(&mut base, card, &targets, action_number);
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(Move {
                    card,
                    targets,
                    score,
                });
            }
        }
    }

    best
}

/// Play a move through the shared card-effect dispatch.
fn apply_move(state: &GameState, chosen: &Move) -> GameState {
    let Some(definition) = state.definition(chosen.card.card).cloned() else {
        return state.clone();
    };
    let mut next = state.clone();
    let session = TargetSession::resolved(
        chosen.card,
        &definition,
        PLAYER_TWO,
        chosen.targets.clone(),
        state.actions_taken + 1,
    );
    apply_card_effect(&mut next, &session, false);
    next
}

/// Take one battle action slot: play the best nonnegative-scoring move, or
/// pass (logged, and the slot is still consumed).
#[must_use]
pub fn take_action(state: &GameState) -> GameState {
    match best_move(state) {
        Some(chosen) if chosen.score >= 0.0 => apply_move(state, &chosen),
        _ => {
            let mut next = state.clone();
            next.log.push_back(LogEvent::OpponentPassed { turn: next.turn });
            next.actions_taken += 1;
            next
        }
    }
}

/// Run the opponent's whole turn synchronously and end it.
///
/// Setup: keep playing while the best move clears `SETUP_MOVE_THRESHOLD`
/// (plays are free and unlimited), then end the turn. Battle: fill both
/// action slots via `take_action`, then end the turn. States where it is
/// not the opponent's turn are returned unchanged.
#[must_use]
pub fn take_turn(state: &GameState) -> GameState {
    match state.phase {
        Phase::SetupPlayerTwo => {
            let mut current = state.clone();
            let mut played_any = false;
            while let Some(chosen) = best_move(&current) {
                if chosen.score <= SETUP_MOVE_THRESHOLD {
                    break;
                }
                current = apply_move(&current, &chosen);
                played_any = true;
            }
            if !played_any {
                current.log.push_back(LogEvent::OpponentNoSetup);
            }
            current.apply(&Intent::EndTurn)
        }

        Phase::TurnPlayerTwo => {
            let mut current = state.clone();
            while current.winner.is_none() && current.has_actions_left() {
                current = take_action(&current);
            }
            if current.winner.is_some() {
                current
            } else {
                current.apply(&Intent::EndTurn)
            }
        }

        _ => state.clone(),
    }
}

/// Which seat the evaluator plays for.
#[must_use]
pub const fn opponent_seat() -> PlayerId {
    PLAYER_TWO
}
