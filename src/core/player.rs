//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. The duel is two-player: `PLAYER_ONE` is the
//! human seat, `PLAYER_TWO` the scripted opponent.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed-size array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

/// The human seat.
pub const PLAYER_ONE: PlayerId = PlayerId(0);

/// The scripted-opponent seat.
pub const PLAYER_TWO: PlayerId = PlayerId(1);

/// Number of players in a duel.
pub const PLAYER_COUNT: usize = 2;

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat in a duel.
    #[must_use]
    pub const fn opponent(self) -> PlayerId {
        PlayerId(1 - self.0)
    }

    /// Iterate over both player IDs.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-player data storage with O(1) access.
///
/// One entry per seat. Use `PlayerMap::new()` with a factory function, or
/// `PlayerMap::with_default()` when `T: Default`.
///
/// ## Example
///
/// ```
/// use qubit_duel::core::{PlayerMap, PLAYER_ONE, PLAYER_TWO};
///
/// let mut mana: PlayerMap<i32> = PlayerMap::new(|_| 2);
/// assert_eq!(mana[PLAYER_ONE], 2);
///
/// mana[PLAYER_TWO] = 5;
/// assert_eq!(mana[PLAYER_TWO], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each seat.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PLAYER_ONE), factory(PLAYER_TWO)],
        }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Mutable references to both entries at once.
    ///
    /// Needed when an operation spans both players, e.g. a cross-player
    /// SWAP touching two registers.
    pub fn pair_mut(&mut self) -> (&mut T, &mut T) {
        let [one, two] = &mut self.data;
        (one, two)
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
