//! Per-player state: register, deck, hand, discard, mana.

use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, InstanceId};
use crate::core::PlayerId;
use crate::quantum::Register;

/// Mana cap; max mana never rises above this.
pub const MANA_CAP: i32 = 10;

/// One player's complete state.
///
/// The register is owned exclusively here; nothing outside the game module
/// mutates it directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub register: Register,
    /// Draw pile; the front (index 0) is drawn first.
    pub deck: Vec<CardInstance>,
    /// Unordered, bounded by the hand cap (2N + 1).
    pub hand: Vec<CardInstance>,
    /// Only populated under `CardRecycling::Discard`.
    pub discard: Vec<CardInstance>,
    pub mana: i32,
    pub max_mana: i32,
}

impl PlayerState {
    /// Create a player with a ground-state register and the given deck.
    #[must_use]
    pub fn new(id: PlayerId, qubit_count: usize, deck: Vec<CardInstance>) -> Self {
        Self {
            id,
            register: Register::ground(qubit_count),
            deck,
            hand: Vec::new(),
            discard: Vec::new(),
            mana: 0,
            max_mana: 0,
        }
    }

    /// Move up to `count` cards from the deck front to the hand, stopping
    /// silently if the deck empties.
    pub fn draw(&mut self, count: usize) {
        let take = count.min(self.deck.len());
        self.hand.extend(self.deck.drain(..take));
    }

    /// Draw until the hand holds `cap` cards (or the deck runs out).
    pub fn draw_up_to(&mut self, cap: usize) {
        if self.hand.len() < cap {
            self.draw(cap - self.hand.len());
        }
    }

    /// Deduct a card's cost, clamping at zero.
    pub fn spend_mana(&mut self, cost: i32) {
        self.mana = (self.mana - cost).max(0);
    }

    /// Position of an instance in the hand, if present.
    #[must_use]
    pub fn hand_position(&self, instance: InstanceId) -> Option<usize> {
        self.hand.iter().position(|c| c.instance == instance)
    }
}
