//! Card instances - per-copy data.
//!
//! A deck holds several copies of the same template; each copy gets a unique
//! `InstanceId` at deck build time and keeps it while moving between deck,
//! hand, and discard.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Unique identifier for one physical copy of a card in one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// One copy of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// This copy's unique ID.
    pub instance: InstanceId,
    /// The template this copy was made from.
    pub card: CardId,
}

impl CardInstance {
    /// Create a new card instance.
    #[must_use]
    pub const fn new(instance: InstanceId, card: CardId) -> Self {
        Self { instance, card }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_identity() {
        let a = CardInstance::new(InstanceId::new(1), CardId::new(4));
        let b = CardInstance::new(InstanceId::new(2), CardId::new(4));

        // Same template, distinct copies.
        assert_eq!(a.card, b.card);
        assert_ne!(a.instance, b.instance);
        assert_ne!(a, b);
    }
}
