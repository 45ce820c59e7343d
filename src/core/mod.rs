//! Core primitives: player identity, deterministic RNG, settings, log.

mod log;
mod player;
mod rng;
mod settings;

pub use log::LogEvent;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT, PLAYER_ONE, PLAYER_TWO};
pub use rng::GameRng;
pub use settings::{
    CardRecycling, CardViewMode, GameSettings, MAX_QUBITS, MIN_QUBITS,
};
