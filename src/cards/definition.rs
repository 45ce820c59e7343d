//! Card definitions - static card data.
//!
//! A `CardDefinition` is the immutable template for a card: cost, gate kind,
//! target arity, and the ordered role labels driving the targeting prompts.
//! Per-copy data lives in `CardInstance`.
//!
//! Gate behavior is dispatched on the closed `GateKind` enum, never on
//! display names; name keys and symbols exist only for the rendering layer.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for a card definition.
///
/// Identifies the card template (e.g. "the Hadamard card"), not a copy in a
/// deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// The closed set of gate operations a card can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    Hadamard,
    PauliX,
    PauliZ,
    Cnot,
    Swap,
    Toffoli,
    Measure,
}

/// Semantic card type, derived from target arity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Single,
    Two,
    Three,
}

/// Role a target slot plays for a multi-qubit gate, in prompt order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRole {
    Control,
    Target,
}

/// Static card definition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CardDefinition {
    /// Unique identifier for this card template.
    pub id: CardId,
    /// i18n message key for the display name.
    pub name_key: &'static str,
    /// Short symbol shown on the card face.
    pub symbol: &'static str,
    /// Mana cost (charged outside the setup turn).
    pub cost: i32,
    /// The gate this card applies.
    pub gate: GateKind,
    /// Ordered role labels, one per required target.
    pub roles: &'static [TargetRole],
}

impl CardDefinition {
    /// Number of targets this card acquires before resolving.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.roles.len()
    }

    /// Semantic card type for display grouping.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self.roles.len() {
            1 => CardKind::Single,
            2 => CardKind::Two,
            _ => CardKind::Three,
        }
    }

    /// Role label for a given target slot.
    #[must_use]
    pub fn role(&self, slot: usize) -> TargetRole {
        self.roles.get(slot).copied().unwrap_or(TargetRole::Target)
    }
}

const TARGET: &[TargetRole] = &[TargetRole::Target];
const CONTROL_TARGET: &[TargetRole] = &[TargetRole::Control, TargetRole::Target];
const TARGET_TARGET: &[TargetRole] = &[TargetRole::Target, TargetRole::Target];
const CONTROL_CONTROL_TARGET: &[TargetRole] = &[
    TargetRole::Control,
    TargetRole::Control,
    TargetRole::Target,
];

/// The standard card set.
const STANDARD_SET: &[CardDefinition] = &[
    CardDefinition {
        id: CardId::new(1),
        name_key: "cards.h_name",
        symbol: "H",
        cost: 1,
        gate: GateKind::Hadamard,
        roles: TARGET,
    },
    CardDefinition {
        id: CardId::new(2),
        name_key: "cards.x_name",
        symbol: "X",
        cost: 1,
        gate: GateKind::PauliX,
        roles: TARGET,
    },
    CardDefinition {
        id: CardId::new(3),
        name_key: "cards.z_name",
        symbol: "Z",
        cost: 1,
        gate: GateKind::PauliZ,
        roles: TARGET,
    },
    CardDefinition {
        id: CardId::new(4),
        name_key: "cards.cnot_name",
        symbol: "CX",
        cost: 2,
        gate: GateKind::Cnot,
        roles: CONTROL_TARGET,
    },
    CardDefinition {
        id: CardId::new(5),
        name_key: "cards.swap_name",
        symbol: "SW",
        cost: 3,
        gate: GateKind::Swap,
        roles: TARGET_TARGET,
    },
    CardDefinition {
        id: CardId::new(6),
        name_key: "cards.measure_name",
        symbol: "M",
        cost: 2,
        gate: GateKind::Measure,
        roles: TARGET,
    },
    CardDefinition {
        id: CardId::new(7),
        name_key: "cards.toffoli_name",
        symbol: "CCX",
        cost: 4,
        gate: GateKind::Toffoli,
        roles: CONTROL_CONTROL_TARGET,
    },
];

/// Starter deck composition: (card, copies). 21 cards total.
const STARTER_DECK: &[(CardId, usize)] = &[
    (CardId::new(1), 4), // Hadamard
    (CardId::new(2), 4), // Pauli-X
    (CardId::new(3), 3), // Pauli-Z
    (CardId::new(4), 3), // CNOT
    (CardId::new(5), 2), // SWAP
    (CardId::new(6), 3), // Measurement
    (CardId::new(7), 2), // Toffoli
];

/// Lookup table of card definitions.
#[derive(Clone, Debug)]
pub struct CardRegistry {
    definitions: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Registry containing the standard card set.
    #[must_use]
    pub fn standard() -> Self {
        let mut definitions = FxHashMap::default();
        for def in STANDARD_SET {
            definitions.insert(def.id, def.clone());
        }
        Self { definitions }
    }

    /// Get a card definition.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.definitions.get(&id)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if no definitions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// The starter deck as a flat list of card IDs (unshuffled).
    #[must_use]
    pub fn starter_deck(&self) -> Vec<CardId> {
        STARTER_DECK
            .iter()
            .flat_map(|&(id, copies)| std::iter::repeat(id).take(copies))
            .collect()
    }
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
