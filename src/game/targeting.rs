//! Target acquisition for card plays.
//!
//! Selecting a card opens a `TargetSession`; qubits are appended one at a
//! time until the card's arity is reached, then the session is consumed by
//! effect dispatch. The session also carries a structured `Prompt` telling
//! the UI which role to ask for next.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardDefinition, CardId, CardInstance, TargetRole};
use crate::core::PlayerId;

/// A (player, qubit) pair identifying one qubit on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetRef {
    pub player: PlayerId,
    pub qubit: u8,
}

impl TargetRef {
    /// Create a new target reference.
    #[must_use]
    pub const fn new(player: PlayerId, qubit: u8) -> Self {
        Self { player, qubit }
    }
}

/// Structured targeting prompt for the UI/i18n layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// The card being targeted.
    pub card: CardId,
    /// Which action slot this play occupies (1 or 2).
    pub action_number: u32,
    /// Zero-based target slot being asked for.
    pub slot: u8,
    /// Role label for that slot.
    pub role: TargetRole,
}

/// An open target-acquisition session.
///
/// Lives from `SelectCard` until the required target count is reached (then
/// consumed into effect application) or `CancelTarget` discards it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetSession {
    /// The card being played.
    pub card: CardInstance,
    /// The acting player.
    pub source: PlayerId,
    /// Targets acquired so far, in role order.
    pub acquired: SmallVec<[TargetRef; 3]>,
    /// Which action slot (1 or 2) this play occupies.
    pub action_number: u32,
    /// Prompt for the next target.
    pub prompt: Prompt,
    /// Total targets the card requires.
    required: usize,
}

impl TargetSession {
    /// Open a session for a card play.
    #[must_use]
    pub fn open(
        card: CardInstance,
        definition: &CardDefinition,
        source: PlayerId,
        action_number: u32,
    ) -> Self {
        Self {
            card,
            source,
            acquired: SmallVec::new(),
            action_number,
            prompt: Prompt {
                card: definition.id,
                action_number,
                slot: 0,
                role: definition.role(0),
            },
            required: definition.target_count(),
        }
    }

    /// Build an already-full session, bypassing the prompt protocol.
    ///
    /// Used by the opponent evaluator, which selects all targets at once and
    /// feeds them through the same effect dispatch as the human path.
    #[must_use]
    pub fn resolved(
        card: CardInstance,
        definition: &CardDefinition,
        source: PlayerId,
        targets: SmallVec<[TargetRef; 3]>,
        action_number: u32,
    ) -> Self {
        let mut session = Self::open(card, definition, source, action_number);
        session.acquired = targets;
        session
    }

    /// Targets still needed before the card resolves.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.acquired.len() >= self.required
    }

    /// Whether `target` may be appended to this session.
    ///
    /// Shared by the human and scripted paths:
    /// - during turn 1 (setup) only the acting player's own qubits;
    /// - during action slot 2, back to the acting player's own side;
    /// - no (player, qubit) pair repeats within one session;
    /// - the qubit index must exist on the board.
    #[must_use]
    pub fn accepts(&self, target: TargetRef, turn: u32, qubit_count: usize) -> bool {
        if usize::from(target.qubit) >= qubit_count {
            return false;
        }
        if turn == 1 && target.player != self.source {
            return false;
        }
        if self.action_number == 2 && target.player != self.source {
            return false;
        }
        !self.acquired.contains(&target)
    }

    /// Append an accepted target and advance the prompt.
    pub fn acquire(&mut self, target: TargetRef, definition: &CardDefinition) {
        self.acquired.push(target);
        let slot = self.acquired.len();
        self.prompt = Prompt {
            card: definition.id,
            action_number: self.action_number,
            slot: slot as u8,
            role: definition.role(slot),
        };
    }
}
