//! Player intents - the discrete inputs the UI submits to the core.
//!
//! Every intent is validated by `GameState::apply`; an intent that fails
//! validation is a no-op (the prior state is returned unchanged), never an
//! error the host has to handle.

use serde::{Deserialize, Serialize};

use crate::cards::InstanceId;
use crate::core::{GameSettings, PlayerId};

/// A discrete player (or host) input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Intent {
    /// Start a fresh game, replacing the current state wholesale.
    StartGame(GameSettings),
    /// Pick a card from hand, opening a target session.
    SelectCard {
        player: PlayerId,
        instance: InstanceId,
    },
    /// Feed one qubit to the open target session.
    SelectQubit { player: PlayerId, qubit: u8 },
    /// Discard the open target session; no cost is charged.
    CancelTarget,
    /// End the current player's turn.
    EndTurn,
}
