//! # qubit-duel
//!
//! Core engine for a two-player, turn-based card game in which cards apply
//! quantum-gate operations to small per-player qubit registers. The crate
//! covers the register simulation, the turn/phase state machine, and the
//! scripted opponent's move search; rendering, i18n, and input are external
//! collaborators that read immutable state snapshots and submit intents.
//!
//! ## Design Principles
//!
//! 1. **Explicit state machine**: `GameState::apply(intent)` returns the
//!    next state. No globals, no in-place mutation visible to callers.
//!
//! 2. **Deterministic**: every random draw (shuffles, measurement collapse)
//!    comes from a seeded, forkable [`core::GameRng`], so a seed reproduces
//!    a full game and the move search never disturbs the live stream.
//!
//! 3. **Closed dispatch**: card behavior is an exhaustive match on
//!    [`cards::GateKind`], never a branch on display names.
//!
//! ## Modules
//!
//! - `core`: player identity, RNG, settings, structured log
//! - `quantum`: amplitude-vector registers, gates, measurement
//! - `cards`: card templates, instances, the standard set
//! - `game`: phases, intents, targeting, effect dispatch
//! - `ai`: opponent move enumeration, scoring, turn driver
//!
//! ## Example
//!
//! ```
//! use qubit_duel::core::{GameSettings, PLAYER_ONE};
//! use qubit_duel::game::{GameState, Intent};
//!
//! let state = GameState::new(GameSettings::new(3), 42);
//! let instance = state.players[PLAYER_ONE].hand[0].instance;
//!
//! // Pick a card, aim it at our own qubit 0 during setup.
//! let state = state.apply(&Intent::SelectCard { player: PLAYER_ONE, instance });
//! let state = state.apply(&Intent::SelectQubit { player: PLAYER_ONE, qubit: 0 });
//! assert_eq!(state.turn, 1);
//! ```

pub mod ai;
pub mod cards;
pub mod core;
pub mod game;
pub mod quantum;

// Re-export commonly used types
pub use crate::core::{
    CardRecycling, GameRng, GameSettings, LogEvent, PlayerId, PlayerMap,
    PLAYER_ONE, PLAYER_TWO,
};

pub use crate::quantum::{Gate, QubitClass, Register, HADAMARD, PAULI_X, PAULI_Z};

pub use crate::cards::{
    CardDefinition, CardId, CardInstance, CardKind, CardRegistry, GateKind,
    InstanceId, TargetRole,
};

pub use crate::game::{GameState, Intent, Phase, PlayerState, Prompt, TargetRef};

pub use crate::ai::{best_move, take_action, take_turn, Move};
