//! The track the shared token moves along.
//!
//! Positions run `0..length`. The token starts at `center = length / 2`.
//! Every inner cell (`1..=length - 2`) carries a pellet that is consumed
//! the first time the token passes over it. Consumed pellets are kept in
//! an `im::OrdSet` so cloning a track for a snapshot is O(1).

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::error::{DuelError, Result};
use super::player::Player;

/// A single token move produced by a first-try correct answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Player whose answer moved the token.
    pub player: Player,
    /// Position before the move.
    pub from: usize,
    /// Position after the move.
    pub to: usize,
}

impl Movement {
    /// Number of cells travelled.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.from.abs_diff(self.to)
    }

    /// Cells entered during the move, in travel order (excludes `from`).
    pub fn path(&self) -> impl Iterator<Item = usize> {
        let (from, to) = (self.from, self.to);
        let forward = to >= from;
        (1..=self.distance()).map(move |i| if forward { from + i } else { from - i })
    }
}

/// Odd-length discrete track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    length: usize,
    steps: usize,
    consumed: OrdSet<usize>,
}

impl Track {
    /// Create a track with the given length and per-answer step size.
    ///
    /// Fails with `InvalidConfig` for even lengths or zero steps.
    pub fn new(length: usize, steps: usize) -> Result<Self> {
        if length % 2 == 0 {
            return Err(DuelError::InvalidConfig(format!(
                "track length must be odd, got {length}"
            )));
        }
        if steps == 0 {
            return Err(DuelError::InvalidConfig("track steps must be at least 1".into()));
        }
        Ok(Self {
            length,
            steps,
            consumed: OrdSet::new(),
        })
    }

    /// Number of cells.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Starting cell of the token.
    #[must_use]
    pub fn center(&self) -> usize {
        self.length / 2
    }

    /// Cells moved per first-try correct answer.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Last cell index.
    #[must_use]
    pub fn last(&self) -> usize {
        self.length - 1
    }

    /// End of the track a player is pushing toward.
    #[must_use]
    pub fn goal(&self, player: Player) -> usize {
        match player {
            Player::First => self.last(),
            Player::Second => 0,
        }
    }

    /// Check whether a position is either end of the track.
    #[must_use]
    pub fn is_boundary(&self, position: usize) -> bool {
        position == 0 || position >= self.last()
    }

    /// Move `steps` cells toward `player`'s goal, clamped to the track.
    #[must_use]
    pub fn advance(&self, position: usize, player: Player) -> Movement {
        let to = match player {
            Player::First => (position + self.steps).min(self.last()),
            Player::Second => position.saturating_sub(self.steps),
        };
        Movement {
            player,
            from: position,
            to,
        }
    }

    /// Check whether a cell holds a pellet (inner cells only).
    #[must_use]
    pub fn has_pellet_slot(&self, position: usize) -> bool {
        position >= 1 && position + 1 < self.length
    }

    /// Check whether the pellet at `position` has been eaten.
    #[must_use]
    pub fn is_consumed(&self, position: usize) -> bool {
        self.consumed.contains(&position)
    }

    /// Pellets still on the board, in ascending position order.
    pub fn remaining_pellets(&self) -> impl Iterator<Item = usize> + '_ {
        (1..self.last()).filter(move |p| !self.consumed.contains(p))
    }

    /// Number of pellets eaten so far.
    #[must_use]
    pub fn consumed_count(&self) -> usize {
        self.consumed.len()
    }

    /// Mark every pellet along a movement's path as consumed.
    pub fn consume_path(&mut self, movement: &Movement) {
        for cell in movement.path() {
            if self.has_pellet_slot(cell) {
                self.consumed.insert(cell);
            }
        }
    }

    /// Put every pellet back.
    pub fn reset(&mut self) {
        self.consumed = OrdSet::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Track {
        Track::new(61, 7).unwrap()
    }

    #[test]
    fn test_geometry() {
        let track = classic();
        assert_eq!(track.center(), 30);
        assert_eq!(track.last(), 60);
        assert_eq!(track.goal(Player::First), 60);
        assert_eq!(track.goal(Player::Second), 0);
        assert!(track.is_boundary(0));
        assert!(track.is_boundary(60));
        assert!(!track.is_boundary(30));
    }

    #[test]
    fn test_rejects_even_length() {
        assert!(Track::new(60, 7).is_err());
        assert!(Track::new(61, 0).is_err());
    }

    #[test]
    fn test_advance_clamps() {
        let track = classic();
        assert_eq!(track.advance(30, Player::First).to, 37);
        assert_eq!(track.advance(30, Player::Second).to, 23);
        assert_eq!(track.advance(57, Player::First).to, 60);
        assert_eq!(track.advance(3, Player::Second).to, 0);
    }

    #[test]
    fn test_movement_path() {
        let forward = Movement { player: Player::First, from: 30, to: 33 };
        assert_eq!(forward.distance(), 3);
        assert_eq!(forward.path().collect::<Vec<_>>(), vec![31, 32, 33]);

        let backward = Movement { player: Player::Second, from: 3, to: 0 };
        assert_eq!(backward.path().collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn test_consume_and_reset() {
        let mut track = classic();
        let total = track.remaining_pellets().count();
        assert_eq!(total, 59);

        let mv = track.advance(3, Player::Second);
        track.consume_path(&mv);
        // Cell 0 is an end, not a pellet.
        assert_eq!(track.consumed_count(), 2);
        assert!(track.is_consumed(1));
        assert!(!track.is_consumed(0));

        let snapshot = track.clone();
        track.reset();
        assert_eq!(track.consumed_count(), 0);
        assert_eq!(snapshot.consumed_count(), 2);
    }
}
