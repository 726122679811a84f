use crate::chain::Chain;
use crate::geometry::Direction;
use serde::{Deserialize, Serialize};

/// Session-scoped participant id, one per remote connection.
pub type PlayerId = u32;

/// Appearance of a creature. Only clients care about it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Breed {
    #[default]
    HolsteinFriesian,
    Hereford,
    Angus,
    Highland,
}

/// A participant still on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlivePlayer {
    pub id: PlayerId,
    pub username: String,
    /// Apples eaten so far. Always `chain.len() - 3`.
    pub score: u32,
    pub chain: Chain,
    pub breed: Breed,
}

/// A participant that hit a wall, a body, or left. Keeps its final score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadPlayer {
    pub id: PlayerId,
    pub username: String,
    pub score: u32,
    pub breed: Breed,
}

/// A participant. Death is one-way: there is no path from `Dead` back to
/// `Alive` within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    Alive(AlivePlayer),
    Dead(DeadPlayer),
}

impl AlivePlayer {
    /// Creates a player with a zero score on the given chain
    pub fn new(id: PlayerId, username: String, breed: Breed, chain: Chain) -> Self {
        Self {
            id,
            username,
            score: 0,
            chain,
            breed,
        }
    }

    /// Direction the head will move on the next tick
    pub fn heading(&self) -> Direction {
        self.chain.head().dir
    }

    /// Drops the chain and freezes the score.
    pub fn kill(self) -> DeadPlayer {
        DeadPlayer {
            id: self.id,
            username: self.username,
            score: self.score,
            breed: self.breed,
        }
    }
}

impl Player {
    /// Gets the player id, alive or dead
    pub fn id(&self) -> PlayerId {
        match self {
            Player::Alive(p) => p.id,
            Player::Dead(p) => p.id,
        }
    }

    /// Gets the name chosen at join
    pub fn username(&self) -> &str {
        match self {
            Player::Alive(p) => &p.username,
            Player::Dead(p) => &p.username,
        }
    }

    /// Gets the current score, frozen once dead
    pub fn score(&self) -> u32 {
        match self {
            Player::Alive(p) => p.score,
            Player::Dead(p) => p.score,
        }
    }

    pub fn breed(&self) -> Breed {
        match self {
            Player::Alive(p) => p.breed,
            Player::Dead(p) => p.breed,
        }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self, Player::Alive(_))
    }

    /// Borrows the living player, or `None` once dead
    pub fn as_alive(&self) -> Option<&AlivePlayer> {
        match self {
            Player::Alive(p) => Some(p),
            Player::Dead(_) => None,
        }
    }

    /// Mutable counterpart of [`Player::as_alive`]
    pub fn as_alive_mut(&mut self) -> Option<&mut AlivePlayer> {
        match self {
            Player::Alive(p) => Some(p),
            Player::Dead(_) => None,
        }
    }

    /// Returns the player as `Dead`. Already-dead players are unchanged.
    pub fn kill(self) -> Player {
        match self {
            Player::Alive(p) => Player::Dead(p.kill()),
            dead @ Player::Dead(_) => dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    fn alive(id: PlayerId) -> Player {
        Player::Alive(AlivePlayer::new(
            id,
            format!("cow{}", id),
            Breed::Angus,
            Chain::spawn(Position::new(5, 5), Direction::Right),
        ))
    }

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = alive(1);

        assert!(player.is_alive());
        assert_eq!(player.score(), 0);
        assert_eq!(player.username(), "cow1");
        assert_eq!(player.as_alive().unwrap().heading(), Direction::Right);
    }

    #[test]
    fn test_kill_keeps_identity_and_score() {
        let mut player = alive(7);
        player.as_alive_mut().unwrap().score = 4;

        let dead = player.kill();

        assert!(!dead.is_alive());
        assert_eq!(dead.id(), 7);
        assert_eq!(dead.score(), 4);
        assert_eq!(dead.breed(), Breed::Angus);
        assert!(dead.as_alive().is_none());
    }

    #[test]
    fn test_kill_is_idempotent() {
        let dead = alive(2).kill();
        assert_eq!(dead.clone().kill(), dead);
    }
}
