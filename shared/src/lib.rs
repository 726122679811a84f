//! # Shared game engine
//!
//! Everything both ends of the wire agree on: the grid, the creatures, the
//! rules that move them, and the packets that describe them.
//!
//! The engine is deterministic given a random source. All state changes go
//! through [`reducer::reduce`]; every other module is a pure function of its
//! inputs. A movement tick is computed by [`tick::compute_tick`] and then
//! committed through the reducer as one `UpdatePlayers` action.
//!
//! ## Modules
//! - `geometry`: cells and headings
//! - `chain`: segment chains, movement and growth
//! - `player`: alive/dead participants
//! - `collision`: wall, apple and creature overlap rules
//! - `spawner`: start cells and the apple throttle
//! - `pause`: pause/resume countdown state machine
//! - `state`: the aggregate session state
//! - `tick`: move, grow, collide
//! - `reducer`: actions, notifications and the state transition function
//! - `config`: session configuration
//! - `protocol`: wire packets

pub mod chain;
pub mod collision;
pub mod config;
pub mod geometry;
pub mod pause;
pub mod player;
pub mod protocol;
pub mod reducer;
pub mod spawner;
pub mod state;
pub mod tick;

pub use chain::{Chain, ChainError, Segment, SegmentKind};
pub use config::{ConfigError, GameConfig};
pub use geometry::{Direction, Position};
pub use pause::PauseState;
pub use player::{AlivePlayer, Breed, DeadPlayer, Player, PlayerId};
pub use protocol::{Packet, MAX_DATAGRAM_SIZE, PROTOCOL_VERSION};
pub use reducer::{reduce, Action, Intent, Notification, Recipient};
pub use state::{Apple, GameState};
pub use tick::{compute_tick, TickOutcome};
