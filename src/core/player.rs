//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Exactly two players take part in a duel. Player 0 pushes the token
//! toward the high end of the track, player 1 toward position 0.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two duelling players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Player 0, advances toward `length - 1`.
    First,
    /// Player 1, advances toward `0`.
    Second,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Look a player up by index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::First),
            1 => Some(Player::Second),
            _ => None,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Direction this player moves the token along the track (+1 or -1).
    #[must_use]
    pub const fn direction(self) -> i64 {
        match self {
            Player::First => 1,
            Player::Second => -1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// Per-player data with O(1) access.
///
/// ## Example
///
/// ```
/// use pacmath::core::{Player, PlayerPair};
///
/// let mut streak: PlayerPair<u32> = PlayerPair::with_value(0);
/// streak[Player::Second] += 1;
///
/// assert_eq!(streak[Player::First], 0);
/// assert_eq!(streak[Player::Second], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from explicit values for player 0 and player 1.
    pub fn new(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Borrow as a plain array in player order.
    #[must_use]
    pub fn as_array(&self) -> &[T; 2] {
        &self.data
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::First.index(), 0);
        assert_eq!(Player::Second.index(), 1);
        assert_eq!(Player::from_index(1), Some(Player::Second));
        assert_eq!(Player::from_index(2), None);
        assert_eq!(format!("{}", Player::Second), "Player 1");
    }

    #[test]
    fn test_opponent_and_direction() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
        assert_eq!(Player::First.direction(), 1);
        assert_eq!(Player::Second.direction(), -1);
    }

    #[test]
    fn test_pair_mutation() {
        let mut pair: PlayerPair<u32> = PlayerPair::with_value(0);
        pair[Player::First] = 3;
        *pair.get_mut(Player::Second) += 2;

        assert_eq!(pair.as_array(), &[3, 2]);
    }

    #[test]
    fn test_pair_iter() {
        let pair = PlayerPair::new("a", "b");
        let items: Vec<_> = pair.iter().collect();
        assert_eq!(items, vec![(Player::First, &"a"), (Player::Second, &"b")]);
    }

    #[test]
    fn test_pair_serialization() {
        let pair = PlayerPair::new(1u32, 4u32);
        let json = serde_json::to_string(&pair).unwrap();
        let back: PlayerPair<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, back);
    }
}
