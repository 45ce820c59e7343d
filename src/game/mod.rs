//! Game state machine: phases, intents, targeting, card-effect dispatch.

mod effect;
mod intent;
mod player_state;
mod state;
mod targeting;

pub use intent::Intent;
pub use player_state::{PlayerState, MANA_CAP};
pub use state::{GameState, Phase, BATTLE_ACTION_LIMIT};
pub use targeting::{Prompt, TargetRef, TargetSession};

pub(crate) use effect::apply_card_effect;
