//! # Game Server Library
//!
//! The authoritative server for the grid game. It owns the only copy of the
//! game state, turns client packets into game actions, advances the
//! simulation on a fixed tick and tells every client what happened.
//!
//! ## Architecture Design
//!
//! ### Single Writer
//! All state changes happen on one task, the session loop, one action at a
//! time. Network tasks never touch the game; they forward decoded packets
//! into an ordered channel that the session loop drains. No lock guards the
//! game state.
//!
//! ### Two Timers
//! A movement timer fires every configured tick while the game is running.
//! A one-second countdown timer fires only while a resume is pending. The
//! two never run at the same time.
//!
//! ### Atomic Ticks
//! A movement tick (move, eat and grow, collide) is computed in one go and
//! committed as a single action, so a direction change received during a
//! tick only affects the next one.
//!
//! ## Module Organization
//!
//! ### Client Manager Module (`client_manager`)
//! Connection roster: id assignment, capacity, address lookup, timeouts.
//!
//! ### Game Module (`game`)
//! The session: state, configuration, random source, tick counter.
//!
//! ### Network Module (`network`)
//! UDP sockets, packet routing and the session loop.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use server::network::Server;
//! use shared::GameConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut server = Server::new("127.0.0.1:8080", GameConfig::default(), 16, None).await?;
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

pub mod client_manager;
pub mod game;
pub mod network;
