//! Structured game log.
//!
//! The core never formats user-facing text. Each entry is a tagged record
//! with named parameters; the rendering/i18n layer maps the tag to a message
//! key and localizes it. Serialized form is `{"event": ..., params...}`.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::PlayerId;
use crate::game::TargetRef;

/// One append-only log entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    /// Game created; turn 1 is the preparation phase.
    GameStarted,
    /// A card play was refused for lack of mana.
    NotEnoughMana { player: PlayerId, card: CardId },
    /// A card was played on the listed targets.
    CardPlayed {
        turn: u32,
        player: PlayerId,
        card: CardId,
        targets: Vec<TargetRef>,
    },
    /// A measurement collapsed a qubit to a definite value.
    MeasurementCollapsed {
        player: PlayerId,
        qubit: u8,
        outcome: u8,
    },
    /// Cross-player CNOT measured its control qubit.
    ControlMeasured { outcome: u8 },
    /// Cross-player Toffoli measured both control qubits.
    ToffoliControlsMeasured { first: u8, second: u8 },
    /// A player finished their preparation phase.
    SetupEnded { player: PlayerId },
    /// Both preparations done; battle begins on turn 2.
    BattleStarted,
    /// A battle turn ended.
    TurnEnded { player: PlayerId },
    /// A battle turn started.
    TurnStarted { turn: u32, player: PlayerId },
    /// The scripted opponent passed an action slot.
    OpponentPassed { turn: u32 },
    /// The scripted opponent made no setup moves at all.
    OpponentNoSetup,
    /// Win condition fired.
    GameOver { winner: PlayerId },
}
