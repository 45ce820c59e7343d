//! Game state and the turn/phase state machine.
//!
//! The state machine is an explicit value owned by the caller: `apply` takes
//! an intent and returns the next state, never mutating in place and never
//! touching ambient globals. Rejected intents return the prior state
//! unchanged (cheap: registers are plain value arrays and the log is a
//! persistent vector).

use im::Vector;
use serde::Serialize;

use crate::cards::{CardDefinition, CardId, CardInstance, CardRegistry, InstanceId};
use crate::core::{
    GameRng, GameSettings, LogEvent, PlayerId, PlayerMap, PLAYER_ONE, PLAYER_TWO,
};

use super::effect;
use super::intent::Intent;
use super::player_state::{PlayerState, MANA_CAP};
use super::targeting::{TargetRef, TargetSession};

/// Actions allowed per player per battle turn.
pub const BATTLE_ACTION_LIMIT: u32 = 2;

/// Mana both players receive when the battle phase opens on turn 2.
const OPENING_MANA: i32 = 2;

/// Phases of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Player 1's preparation (turn 1, free unlimited actions, own side only).
    SetupPlayerOne,
    /// Player 2's preparation.
    SetupPlayerTwo,
    /// Player 1's battle turn.
    TurnPlayerOne,
    /// Player 2's battle turn.
    TurnPlayerTwo,
    /// Terminal; only `StartGame` is accepted.
    GameOver,
}

impl Phase {
    /// True for the two preparation phases.
    #[must_use]
    pub fn is_setup(self) -> bool {
        matches!(self, Phase::SetupPlayerOne | Phase::SetupPlayerTwo)
    }

    /// True for the two battle phases.
    #[must_use]
    pub fn is_battle(self) -> bool {
        matches!(self, Phase::TurnPlayerOne | Phase::TurnPlayerTwo)
    }

    fn battle_turn_of(player: PlayerId) -> Phase {
        if player == PLAYER_ONE {
            Phase::TurnPlayerOne
        } else {
            Phase::TurnPlayerTwo
        }
    }
}

/// Complete game state.
///
/// Handed to the rendering layer as a read-only snapshot; a new value is
/// produced by every accepted intent.
#[derive(Clone, Debug, Serialize)]
pub struct GameState {
    pub settings: GameSettings,
    pub players: PlayerMap<PlayerState>,
    pub phase: Phase,
    pub current_player: PlayerId,
    /// Shared turn counter; 1 is the preparation turn.
    pub turn: u32,
    /// Actions taken by the current player this turn.
    pub actions_taken: u32,
    pub winner: Option<PlayerId>,
    /// Append-only structured log.
    pub log: Vector<LogEvent>,
    /// Open target session, if a card is being aimed.
    pub pending: Option<TargetSession>,
    /// Cosmetic "opponent is thinking" flag; gates nothing in the core.
    pub opponent_thinking: bool,
    #[serde(skip)]
    registry: CardRegistry,
    #[serde(skip)]
    pub(crate) rng: GameRng,
}

impl GameState {
    /// Create a fresh game: shuffled starter decks, full opening hands,
    /// ground-state registers, player 1 to prepare first.
    #[must_use]
    pub fn new(settings: GameSettings, seed: u64) -> Self {
        Self::with_rng(settings, GameRng::new(seed))
    }

    fn with_rng(settings: GameSettings, mut rng: GameRng) -> Self {
        let registry = CardRegistry::standard();
        let mut next_instance = 0u32;

        let players = PlayerMap::new(|id| {
            let mut deck: Vec<CardInstance> = registry
                .starter_deck()
                .into_iter()
                .map(|card| {
                    let instance = InstanceId::new(next_instance_id(&mut next_instance));
                    CardInstance::new(instance, card)
                })
                .collect();
            rng.shuffle(&mut deck);

            let mut player = PlayerState::new(id, settings.qubit_count, deck);
            player.draw(settings.hand_cap());
            player
        });

        let mut log = Vector::new();
        log.push_back(LogEvent::GameStarted);

        Self {
            settings,
            players,
            phase: Phase::SetupPlayerOne,
            current_player: PLAYER_ONE,
            turn: 1,
            actions_taken: 0,
            winner: None,
            log,
            pending: None,
            opponent_thinking: false,
            registry,
            rng,
        }
    }

    /// Look up a card definition.
    #[must_use]
    pub fn definition(&self, card: CardId) -> Option<&CardDefinition> {
        self.registry.get(card)
    }

    /// The card registry in play.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Action limit for the current turn; `None` means unlimited (setup).
    #[must_use]
    pub fn action_limit(&self) -> Option<u32> {
        if self.turn == 1 {
            None
        } else {
            Some(BATTLE_ACTION_LIMIT)
        }
    }

    /// Whether the current player may start another card play.
    #[must_use]
    pub fn has_actions_left(&self) -> bool {
        self.action_limit()
            .map_or(true, |limit| self.actions_taken < limit)
    }

    /// Clone this state with a forked RNG.
    ///
    /// Used by the evaluator so hypothetical rollouts never consume the live
    /// game's random stream.
    #[must_use]
    pub fn clone_for_rollout(&mut self) -> GameState {
        let mut clone = self.clone();
        clone.rng = self.rng.fork();
        clone
    }

    /// Toggle the cosmetic thinking flag.
    #[must_use]
    pub fn with_thinking(&self, thinking: bool) -> GameState {
        let mut next = self.clone();
        next.opponent_thinking = thinking;
        next
    }

    /// Process one intent, returning the next state.
    ///
    /// Invalid intents return the state unchanged. Only `StartGame` is
    /// accepted once the phase is `GameOver`.
    #[must_use]
    pub fn apply(&self, intent: &Intent) -> GameState {
        if let Intent::StartGame(settings) = intent {
            let mut rng = self.rng.clone();
            return GameState::with_rng(*settings, rng.fork());
        }
        if self.phase == Phase::GameOver {
            return self.clone();
        }

        let mut next = self.clone();
        match *intent {
            Intent::StartGame(_) => unreachable!("handled above"),
            Intent::SelectCard { player, instance } => next.select_card(player, instance),
            Intent::SelectQubit { player, qubit } => {
                next.select_qubit(TargetRef::new(player, qubit))
            }
            Intent::CancelTarget => next.pending = None,
            Intent::EndTurn => next.end_turn(),
        }
        next
    }

    fn select_card(&mut self, player: PlayerId, instance: InstanceId) {
        if player != self.current_player || self.pending.is_some() || !self.has_actions_left() {
            return;
        }
        let Some(position) = self.players[player].hand_position(instance) else {
            return;
        };
        let card = self.players[player].hand[position];
        let Some(definition) = self.definition(card.card).cloned() else {
            return;
        };

        if self.turn > 1 && self.players[player].mana < definition.cost {
            self.log.push_back(LogEvent::NotEnoughMana {
                player,
                card: definition.id,
            });
            return;
        }

        let action_number = self.actions_taken + 1;
        self.pending = Some(TargetSession::open(card, &definition, player, action_number));
    }

    fn select_qubit(&mut self, target: TargetRef) {
        let Some(mut session) = self.pending.take() else {
            return;
        };
        if !session.accepts(target, self.turn, self.settings.qubit_count) {
            self.pending = Some(session);
            return;
        }
        let Some(definition) = self.definition(session.card.card).cloned() else {
            self.pending = Some(session);
            return;
        };

        session.acquire(target, &definition);

        if session.is_full() {
            effect::apply_card_effect(self, &session, false);
        } else {
            self.pending = Some(session);
        }
    }

    fn end_turn(&mut self) {
        if self.pending.is_some() {
            return;
        }

        match self.phase {
            Phase::SetupPlayerOne => {
                self.phase = Phase::SetupPlayerTwo;
                self.current_player = PLAYER_TWO;
                self.actions_taken = 0;
                self.log.push_back(LogEvent::SetupEnded { player: PLAYER_ONE });
            }

            Phase::SetupPlayerTwo => {
                self.turn = 2;
                self.phase = Phase::TurnPlayerOne;
                self.current_player = PLAYER_ONE;
                self.actions_taken = 0;
                for player in [PLAYER_ONE, PLAYER_TWO] {
                    self.players[player].mana = OPENING_MANA;
                    self.players[player].max_mana = OPENING_MANA;
                }
                self.log.push_back(LogEvent::SetupEnded { player: PLAYER_TWO });
                self.log.push_back(LogEvent::BattleStarted);
                effect::check_win(self, PLAYER_TWO);
            }

            Phase::TurnPlayerOne | Phase::TurnPlayerTwo => {
                let ending = self.current_player;
                let hand_cap = self.settings.hand_cap();
                self.players[ending].draw_up_to(hand_cap);

                let next_player = ending.opponent();
                if next_player == PLAYER_ONE {
                    self.turn += 1;
                }
                let refill = MANA_CAP.min(self.turn as i32);
                self.players[next_player].max_mana = refill;
                self.players[next_player].mana = refill;

                self.current_player = next_player;
                self.phase = Phase::battle_turn_of(next_player);
                self.actions_taken = 0;

                self.log.push_back(LogEvent::TurnEnded { player: ending });
                self.log.push_back(LogEvent::TurnStarted {
                    turn: self.turn,
                    player: next_player,
                });
                effect::check_win(self, ending);
            }

            Phase::GameOver => {}
        }
    }
}

fn next_instance_id(counter: &mut u32) -> u32 {
    let id = *counter;
    *counter += 1;
    id
}
