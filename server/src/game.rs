//! The authoritative game session.
//!
//! `Session` owns the only copy of the game state and is driven from a
//! single task. Every change goes through the shared reducer; the session
//! adds logging, the tick counter and the random source.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{
    compute_tick, reduce, Action, ConfigError, GameConfig, GameState, Intent, Packet, PlayerId,
};

pub struct Session {
    state: GameState,
    config: GameConfig,
    rng: StdRng,
    /// Committed movement ticks.
    tick: u32,
}

/// Translates a client packet into a game action.
///
/// Connection management packets have no game meaning and yield `None`.
pub fn action_for(client_id: u32, packet: Packet) -> Option<Action> {
    match packet {
        Packet::Join { username, breed } => Some(Action::AddPlayer {
            id: client_id,
            username,
            breed,
        }),
        Packet::Move { direction } => Some(Action::ChangeDirection {
            id: client_id,
            direction,
        }),
        Packet::Pause => Some(Action::RequestTogglePause),
        _ => None,
    }
}

impl Session {
    /// Starts an empty session. Rejects a config the engine cannot play on.
    pub fn new(config: GameConfig, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(),
            config,
            rng,
            tick: 0,
        })
    }

    /// A session seeded from `seed`, or from OS entropy when absent.
    pub fn with_seed(config: GameConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, rng)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Intent> {
        let state = std::mem::take(&mut self.state);
        let (state, intents) = reduce(state, action, &self.config, &mut self.rng);
        self.state = state;
        intents
    }

    /// Applies a packet received from `client_id`.
    pub fn handle_input(&mut self, client_id: PlayerId, packet: Packet) -> Vec<Intent> {
        let Some(action) = action_for(client_id, packet) else {
            return Vec::new();
        };

        if let Action::AddPlayer { id, username, .. } = &action {
            if self.state.player(*id).is_none() {
                info!("Player {} joined as {:?}", id, username);
            }
        }

        self.dispatch(action)
    }

    /// Runs one movement tick and commits it. Does nothing while paused.
    pub fn step(&mut self) -> Vec<Intent> {
        if self.state.is_paused() {
            return Vec::new();
        }

        let outcome = compute_tick(&self.state, &self.config);
        for id in &outcome.deaths {
            if let Some(player) = outcome.players.iter().find(|p| p.id() == *id) {
                info!(
                    "Player {} ({}) died with score {}",
                    id,
                    player.username(),
                    player.score()
                );
            }
        }

        let mut intents = Vec::new();
        for pos in outcome.eaten {
            intents.extend(self.dispatch(Action::RemoveApple(pos)));
        }
        intents.extend(self.dispatch(Action::UpdatePlayers(outcome.players)));

        let apples_before = self.state.apples.len();
        intents.extend(self.dispatch(Action::SpawnApple));
        if let Some(apple) = self.state.apples.get(apples_before) {
            info!("Apple spawned at ({}, {})", apple.pos.x, apple.pos.y);
        }

        self.tick += 1;
        debug!(
            "Tick {}: {} alive, {} apples",
            self.tick,
            self.state.alive_count(),
            self.state.apples.len()
        );

        intents
    }

    pub fn request_toggle_pause(&mut self) -> Vec<Intent> {
        self.dispatch(Action::RequestTogglePause)
    }

    /// One second of the resume countdown.
    pub fn countdown(&mut self) -> Vec<Intent> {
        let intents = self.dispatch(Action::TickResumeCountdown);
        if self.state.is_paused() {
            debug!("Resuming in {}s", self.state.countdown());
        }
        intents
    }

    /// Retires the player owned by a vanished connection.
    pub fn disconnect(&mut self, client_id: u32) -> Vec<Intent> {
        if self.state.player(client_id).is_some_and(|p| p.is_alive()) {
            info!("Player {} left, marking dead", client_id);
        }
        self.dispatch(Action::Disconnect { id: client_id })
    }

    pub fn snapshot(&self) -> Packet {
        Packet::snapshot(self.tick, &self.state)
    }
}
