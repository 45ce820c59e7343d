//! Game settings supplied by the host at `StartGame`.
//!
//! Only `qubit_count` and `card_recycling` affect core behavior. The view
//! mode and debug flags travel with the snapshot so the rendering layer can
//! read them back, but the core ignores them.

use serde::{Deserialize, Serialize};

/// Smallest supported register size.
pub const MIN_QUBITS: usize = 2;

/// Largest supported register size.
pub const MAX_QUBITS: usize = 5;

/// What happens to a card after it is played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardRecycling {
    /// The played card returns to the deck and the deck is reshuffled.
    #[default]
    ShuffleIntoDeck,
    /// The played card goes to the discard pile and stays there.
    Discard,
}

/// How the host renders cards. Cosmetic only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardViewMode {
    #[default]
    Basic,
    Advanced,
}

/// Settings for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Qubits per player register, in `MIN_QUBITS..=MAX_QUBITS`.
    pub qubit_count: usize,
    /// Where played cards go.
    pub card_recycling: CardRecycling,
    /// Cosmetic; ignored by the core.
    pub card_view_mode: CardViewMode,
    /// Cosmetic; ignored by the core.
    pub debug_mode: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            qubit_count: 3,
            card_recycling: CardRecycling::default(),
            card_view_mode: CardViewMode::default(),
            debug_mode: false,
        }
    }
}

impl GameSettings {
    /// Create settings with the given qubit count.
    ///
    /// Panics if `qubit_count` is outside `MIN_QUBITS..=MAX_QUBITS`; that is
    /// a host programming error, not a rejectable intent.
    #[must_use]
    pub fn new(qubit_count: usize) -> Self {
        assert!(
            (MIN_QUBITS..=MAX_QUBITS).contains(&qubit_count),
            "qubit count must be {MIN_QUBITS}-{MAX_QUBITS}"
        );
        Self {
            qubit_count,
            ..Self::default()
        }
    }

    /// Set the card recycling mode (builder pattern).
    #[must_use]
    pub fn with_recycling(mut self, mode: CardRecycling) -> Self {
        self.card_recycling = mode;
        self
    }

    /// Hand size cap for this register size (2N + 1).
    #[must_use]
    pub fn hand_cap(&self) -> usize {
        self.qubit_count * 2 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.qubit_count, 3);
        assert_eq!(settings.card_recycling, CardRecycling::ShuffleIntoDeck);
        assert!(!settings.debug_mode);
    }

    #[test]
    fn test_hand_cap() {
        assert_eq!(GameSettings::new(2).hand_cap(), 5);
        assert_eq!(GameSettings::new(5).hand_cap(), 11);
    }

    #[test]
    #[should_panic(expected = "qubit count")]
    fn test_qubit_count_too_small() {
        let _ = GameSettings::new(1);
    }

    #[test]
    #[should_panic(expected = "qubit count")]
    fn test_qubit_count_too_large() {
        let _ = GameSettings::new(6);
    }
}
