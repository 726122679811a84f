//! Wire format shared by the server and its clients: one bincode-encoded
//! `Packet` per UDP datagram.

use crate::geometry::Direction;
use crate::player::{Breed, Player};
use crate::reducer::Notification;
use crate::state::{Apple, GameState};
use serde::{Deserialize, Serialize};

pub const PROTOCOL_VERSION: u32 = 1;

/// Largest UDP payload over IPv4. Snapshots carry whole chains, so the
/// receive buffer is sized for the worst case.
pub const MAX_DATAGRAM_SIZE: usize = 65_507;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Packet {
    // Client to server
    Connect {
        client_version: u32,
    },
    Join {
        username: String,
        breed: Breed,
    },
    Move {
        direction: Direction,
    },
    Pause,
    /// Keeps an idle connection from timing out.
    Heartbeat {
        timestamp: u64,
    },
    Disconnect,

    // Server to client
    Connected {
        client_id: u32,
    },
    Disconnected {
        reason: String,
    },
    Paused,
    Resumed,
    ChangedDirection {
        direction: Direction,
    },
    GameState {
        tick: u32,
        players: Vec<Player>,
        apples: Vec<Apple>,
        is_paused: bool,
        countdown: u32,
    },
}

impl Packet {
    pub fn encode(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }

    /// Everything a client needs to redraw the board.
    pub fn snapshot(tick: u32, state: &GameState) -> Self {
        Packet::GameState {
            tick,
            players: state.players.clone(),
            apples: state.apples.clone(),
            is_paused: state.is_paused(),
            countdown: state.countdown(),
        }
    }
}

impl From<Notification> for Packet {
    fn from(notification: Notification) -> Self {
        match notification {
            Notification::Paused => Packet::Paused,
            Notification::Resumed => Packet::Resumed,
            Notification::ChangedDirection(direction) => Packet::ChangedDirection { direction },
        }
    }
}
