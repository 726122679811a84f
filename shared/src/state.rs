use crate::geometry::Position;
use crate::pause::PauseState;
use crate::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// Food on the board. Eating one grows a chain by one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apple {
    pub pos: Position,
}

/// The authoritative session state.
///
/// Players stay in join order and are never removed; dead players keep
/// their slot. Connections are not part of the state: the reducer returns
/// intents and whoever owns the transport delivers them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub players: Vec<Player>,
    pub apples: Vec<Apple>,
    /// Spawn ticks since the last apple was placed.
    pub ticks_since_apple: u32,
    pub pause: PauseState,
}

impl GameState {
    /// Creates an empty, running session state
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a player by id
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Finds a player by id for in-place updates
    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    /// True while paused or counting down to resume
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn countdown(&self) -> u32 {
        self.pause.countdown()
    }

    /// Number of players still on the board
    pub fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive()).count()
    }
}
