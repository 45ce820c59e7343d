//! Card-effect dispatch and win-condition evaluation.
//!
//! The shared terminal step of both the human `SelectQubit` path and the
//! scripted opponent's move application. Dispatch is an exhaustive match on
//! `GateKind`.
//!
//! ## Cross-player composites
//!
//! Each player owns an independent register; there is no joint state vector,
//! so a genuinely entangling gate across players cannot be applied directly.
//! Controls are measured first and a classical Pauli-X is applied to the
//! target register when the sampled outcomes satisfy the control condition.
//! SWAP across players degrades to a classical exchange (no-op when either
//! side is in superposition). These approximations are intentional; see the
//! rules text shipped with the UI.

use crate::cards::GateKind;
use crate::core::{CardRecycling, LogEvent, PLAYER_ONE};
use crate::quantum::{Register, HADAMARD, PAULI_X, PAULI_Z};

use super::state::GameState;
use super::targeting::TargetSession;

/// Apply a full target session to the state.
///
/// With `simulate` set, only the register effects run: no hand/mana/log
/// bookkeeping and no win check. The evaluator uses that mode to score
/// hypothetical moves on a cloned state.
///
/// Invariant violations (unknown card, instance missing from hand) leave the
/// state untouched; they mean a caller bypassed validation, and the
/// turn-based UI must never observe a crash mid-game.
pub(crate) fn apply_card_effect(state: &mut GameState, session: &TargetSession, simulate: bool) {
    let Some(definition) = state.definition(session.card.card).cloned() else {
        return;
    };
    let targets = &session.acquired;
    if targets.len() != definition.target_count() {
        return;
    }

    if !simulate {
        let source = &mut state.players[session.source];
        let Some(position) = source.hand_position(session.card.instance) else {
            return;
        };
        let played = source.hand.remove(position);

        match state.settings.card_recycling {
            CardRecycling::ShuffleIntoDeck => {
                source.deck.push(played);
                state.rng.shuffle(&mut state.players[session.source].deck);
            }
            CardRecycling::Discard => source.discard.push(played),
        }

        // Setup-turn plays are free.
        if state.turn > 1 {
            state.players[session.source].spend_mana(definition.cost);
        }

        state.log.push_back(LogEvent::CardPlayed {
            turn: state.turn,
            player: session.source,
            card: definition.id,
            targets: targets.to_vec(),
        });
        state.actions_taken += 1;
    }

    match definition.gate {
        GateKind::Hadamard | GateKind::PauliX | GateKind::PauliZ => {
            let gate = match definition.gate {
                GateKind::Hadamard => &HADAMARD,
                GateKind::PauliX => &PAULI_X,
                _ => &PAULI_Z,
            };
            let t = targets[0];
            state.players[t.player]
                .register
                .apply_gate(gate, usize::from(t.qubit));
        }

        GateKind::Measure => {
            let t = targets[0];
            let outcome = state.players[t.player]
                .register
                .measure(usize::from(t.qubit), &mut state.rng);
            if !simulate {
                state.log.push_back(LogEvent::MeasurementCollapsed {
                    player: t.player,
                    qubit: t.qubit,
                    outcome,
                });
            }
        }

        GateKind::Cnot => {
            let control = targets[0];
            let target = targets[1];

            if control.player == target.player {
                state.players[control.player]
                    .register
                    .apply_cnot(usize::from(control.qubit), usize::from(target.qubit));
            } else {
                let outcome = state.players[control.player]
                    .register
                    .measure(usize::from(control.qubit), &mut state.rng);
                if !simulate {
                    state
                        .log
                        .push_back(LogEvent::ControlMeasured { outcome });
                }
                if outcome == 1 {
                    state.players[target.player]
                        .register
                        .apply_gate(&PAULI_X, usize::from(target.qubit));
                }
            }
        }

        GateKind::Swap => {
            let a = targets[0];
            let b = targets[1];

            if a.player == b.player {
                state.players[a.player]
                    .register
                    .apply_swap(usize::from(a.qubit), usize::from(b.qubit));
            } else {
                let (one, two) = state.players.pair_mut();
                let (first, second) = if a.player == PLAYER_ONE {
                    (one, two)
                } else {
                    (two, one)
                };
                Register::classical_swap(
                    &mut first.register,
                    usize::from(a.qubit),
                    &mut second.register,
                    usize::from(b.qubit),
                );
            }
        }

        GateKind::Toffoli => {
            let c1 = targets[0];
            let c2 = targets[1];
            let target = targets[2];

            if c1.player == c2.player && c1.player == target.player {
                state.players[c1.player].register.apply_toffoli(
                    usize::from(c1.qubit),
                    usize::from(c2.qubit),
                    usize::from(target.qubit),
                );
            } else {
                let first = state.players[c1.player]
                    .register
                    .measure(usize::from(c1.qubit), &mut state.rng);
                let second = state.players[c2.player]
                    .register
                    .measure(usize::from(c2.qubit), &mut state.rng);
                if !simulate {
                    state
                        .log
                        .push_back(LogEvent::ToffoliControlsMeasured { first, second });
                }
                if first == 1 && second == 1 {
                    state.players[target.player]
                        .register
                        .apply_gate(&PAULI_X, usize::from(target.qubit));
                }
            }
        }
    }

    if !simulate {
        check_win(state, session.source);
    }
}

/// Transition to `GameOver` if `player`'s opponent has reached the ground
/// state. No winning during the setup turn.
pub(crate) fn check_win(state: &mut GameState, player: crate::core::PlayerId) {
    if state.turn == 1 || state.winner.is_some() {
        return;
    }
    if state.players[player.opponent()].register.is_ground() {
        state.winner = Some(player);
        state.phase = super::state::Phase::GameOver;
        state.log.push_back(LogEvent::GameOver { winner: player });
    }
}
