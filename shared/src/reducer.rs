//! The single mutation point for a session.
//!
//! `reduce` folds one `Action` into the state and returns the notifications
//! the caller must deliver. It never fails: an action whose preconditions do
//! not hold leaves the state untouched.

use crate::chain::Chain;
use crate::config::GameConfig;
use crate::geometry::{Direction, Position};
use crate::pause::PauseEvent;
use crate::player::{AlivePlayer, Breed, Player, PlayerId};
use crate::spawner::{choose_start_pos, spawn_tick};
use crate::state::GameState;
use rand::Rng;

/// Heading of every freshly spawned creature.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddPlayer {
        id: PlayerId,
        username: String,
        breed: Breed,
    },
    ChangeDirection {
        id: PlayerId,
        direction: Direction,
    },
    SpawnApple,
    RemoveApple(Position),
    /// Commits a fully computed tick.
    UpdatePlayers(Vec<Player>),
    RequestTogglePause,
    TickResumeCountdown,
    /// The player's connection went away.
    Disconnect {
        id: PlayerId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Paused,
    Resumed,
    ChangedDirection(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    All,
    Player(PlayerId),
}

/// A notification the session loop should send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    pub recipient: Recipient,
    pub notification: Notification,
}

impl Intent {
    pub fn broadcast(notification: Notification) -> Self {
        Self {
            recipient: Recipient::All,
            notification,
        }
    }

    pub fn to_player(id: PlayerId, notification: Notification) -> Self {
        Self {
            recipient: Recipient::Player(id),
            notification,
        }
    }
}

impl From<PauseEvent> for Notification {
    fn from(event: PauseEvent) -> Self {
        match event {
            PauseEvent::Paused => Notification::Paused,
            PauseEvent::Resumed => Notification::Resumed,
        }
    }
}

pub fn reduce<R: Rng + ?Sized>(
    mut state: GameState,
    action: Action,
    config: &GameConfig,
    rng: &mut R,
) -> (GameState, Vec<Intent>) {
    let mut intents = Vec::new();

    match action {
        Action::AddPlayer {
            id,
            username,
            breed,
        } => {
            if state.player(id).is_some() {
                return (state, intents);
            }

            let start = choose_start_pos(config, rng);
            let chain = Chain::spawn(start, INITIAL_DIRECTION);
            state
                .players
                .push(Player::Alive(AlivePlayer::new(id, username, breed, chain)));

            let status = if state.is_paused() {
                Notification::Paused
            } else {
                Notification::Resumed
            };
            intents.push(Intent::to_player(id, status));
            intents.push(Intent::to_player(
                id,
                Notification::ChangedDirection(INITIAL_DIRECTION),
            ));
        }

        Action::ChangeDirection { id, direction } => {
            if let Some(player) = state.player_mut(id).and_then(Player::as_alive_mut) {
                player.chain.set_heading(direction);
                intents.push(Intent::to_player(
                    id,
                    Notification::ChangedDirection(direction),
                ));
            }
        }

        Action::SpawnApple => {
            let (ticks, apple) = spawn_tick(state.ticks_since_apple, config, rng);
            state.ticks_since_apple = ticks;
            state.apples.extend(apple);
        }

        Action::RemoveApple(pos) => {
            if let Some(index) = state.apples.iter().position(|apple| apple.pos == pos) {
                state.apples.remove(index);
            }
        }

        Action::UpdatePlayers(players) => {
            let dead: Vec<PlayerId> = state
                .players
                .iter()
                .filter(|p| !p.is_alive())
                .map(Player::id)
                .collect();

            // Death is permanent.
            state.players = players
                .into_iter()
                .map(|p| if dead.contains(&p.id()) { p.kill() } else { p })
                .collect();
        }

        Action::RequestTogglePause => {
            let (pause, event) = state.pause.toggle(config.resume_grace_period);
            state.pause = pause;
            intents.extend(event.map(|e| Intent::broadcast(e.into())));
        }

        Action::TickResumeCountdown => {
            let (pause, event) = state.pause.tick_countdown();
            state.pause = pause;
            intents.extend(event.map(|e| Intent::broadcast(e.into())));
        }

        Action::Disconnect { id } => {
            if let Some(player) = state.player_mut(id) {
                *player = player.clone().kill();
            }
        }
    }

    (state, intents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Segment;
    use crate::pause::PauseState;
    use crate::state::Apple;
    use crate::tick::compute_tick;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn join(id: PlayerId) -> Action {
        Action::AddPlayer {
            id,
            username: format!("player{}", id),
            breed: Breed::Highland,
        }
    }

    fn apply(state: GameState, actions: Vec<Action>, config: &GameConfig) -> GameState {
        let mut rng = rng();
        actions
            .into_iter()
            .fold(state, |state, action| reduce(state, action, config, &mut rng).0)
    }

    /// A single right-facing creature with its head at (5, 5).
    fn state_at_five_five() -> GameState {
        GameState {
            players: vec![Player::Alive(AlivePlayer::new(
                1,
                "p1".to_string(),
                Breed::default(),
                Chain::spawn(Position::new(5, 5), Direction::Right),
            ))],
            ..GameState::default()
        }
    }

    #[test]
    fn test_add_player_spawns_three_segments_facing_right() {
        let config = GameConfig::default();
        let (state, intents) = reduce(GameState::new(), join(1), &config, &mut rng());

        let player = state.player(1).and_then(Player::as_alive).unwrap();
        let head = player.chain.head().pos;
        assert_eq!(player.chain.len(), 3);
        assert_eq!(player.chain.tail().pos, Position::new(head.x - 2, head.y));
        assert!(player.chain.segments().iter().all(|s| s.dir == Direction::Right));
        assert_eq!(player.breed, Breed::Highland);

        assert_eq!(
            intents,
            vec![
                Intent::to_player(1, Notification::Resumed),
                Intent::to_player(1, Notification::ChangedDirection(Direction::Right)),
            ]
        );
    }

    #[test]
    fn test_add_player_while_paused_reports_paused() {
        let config = GameConfig::default();
        let state = GameState {
            pause: PauseState::Paused,
            ..GameState::default()
        };

        let (_, intents) = reduce(state, join(3), &config, &mut rng());

        assert_eq!(intents[0], Intent::to_player(3, Notification::Paused));
    }

    #[test]
    fn test_duplicate_join_is_ignored() {
        let config = GameConfig::default();
        let state = apply(GameState::new(), vec![join(1)], &config);

        let (after, intents) = reduce(state.clone(), join(1), &config, &mut rng());

        assert_eq!(after, state);
        assert!(intents.is_empty());
    }

    #[test]
    fn test_players_keep_join_order() {
        let config = GameConfig::default();
        let state = apply(GameState::new(), vec![join(3), join(1), join(2)], &config);

        let ids: Vec<PlayerId> = state.players.iter().map(Player::id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_change_direction_unknown_player_is_noop() {
        let config = GameConfig::default();
        let state = apply(GameState::new(), vec![join(1)], &config);

        let (after, intents) = reduce(
            state.clone(),
            Action::ChangeDirection {
                id: 2,
                direction: Direction::Up,
            },
            &config,
            &mut rng(),
        );

        assert_eq!(after, state);
        assert!(intents.is_empty());
    }

    #[test]
    fn test_change_direction_dead_player_is_noop() {
        let config = GameConfig::default();
        let state = apply(GameState::new(), vec![join(1), Action::Disconnect { id: 1 }], &config);

        let (after, intents) = reduce(
            state.clone(),
            Action::ChangeDirection {
                id: 1,
                direction: Direction::Up,
            },
            &config,
            &mut rng(),
        );

        assert_eq!(after, state);
        assert!(intents.is_empty());
    }

    #[test]
    fn test_change_direction_overwrites_queue_and_echoes() {
        let config = GameConfig::default();
        let state = state_at_five_five();
        let mut rng = rng();

        let (state, _) = reduce(
            state,
            Action::ChangeDirection {
                id: 1,
                direction: Direction::Down,
            },
            &config,
            &mut rng,
        );
        let (state, intents) = reduce(
            state,
            Action::ChangeDirection {
                id: 1,
                direction: Direction::Up,
            },
            &config,
            &mut rng,
        );

        let player = state.player(1).and_then(Player::as_alive).unwrap();
        assert_eq!(player.heading(), Direction::Up);
        assert_eq!(
            intents,
            vec![Intent::to_player(1, Notification::ChangedDirection(Direction::Up))]
        );
    }

    #[test]
    fn test_turn_then_tick() {
        let config = GameConfig::default();
        let state = apply(
            state_at_five_five(),
            vec![Action::ChangeDirection {
                id: 1,
                direction: Direction::Up,
            }],
            &config,
        );

        let outcome = compute_tick(&state, &config);
        let state = apply(state, vec![Action::UpdatePlayers(outcome.players)], &config);

        let segments = state.player(1).and_then(Player::as_alive).unwrap().chain.segments().to_vec();
        assert_eq!(segments[0], Segment::new(Position::new(5, 4), Direction::Up));
        assert_eq!(segments[1].pos, Position::new(5, 5));
        assert_eq!(segments[2], Segment::new(Position::new(4, 5), Direction::Right));
    }

    #[test]
    fn test_tenth_spawn_places_one_apple() {
        let config = GameConfig {
            rows: 20,
            cols: 30,
            apple_rate: 10,
            ..GameConfig::default()
        };
        let mut rng = rng();
        let mut state = GameState::new();

        for call in 1..=9 {
            state = reduce(state, Action::SpawnApple, &config, &mut rng).0;
            assert!(state.apples.is_empty());
            assert_eq!(state.ticks_since_apple, call);
        }

        state = reduce(state, Action::SpawnApple, &config, &mut rng).0;
        assert_eq!(state.apples.len(), 1);
        assert_eq!(state.ticks_since_apple, 0);
    }

    #[test]
    fn test_undersized_grid_does_not_panic() {
        let config = GameConfig {
            rows: 2,
            cols: 3,
            apple_rate: 1,
            ..GameConfig::default()
        };

        let state = apply(
            GameState::new(),
            vec![join(1), Action::SpawnApple],
            &config,
        );

        assert_eq!(state.players.len(), 1);
        assert_eq!(state.apples.len(), 1);
    }

    #[test]
    fn test_remove_apple_removes_first_match_only() {
        let config = GameConfig::default();
        let pos = Position::new(3, 3);
        let state = GameState {
            apples: vec![Apple { pos }, Apple { pos: Position::new(1, 1) }, Apple { pos }],
            ..GameState::default()
        };

        let state = apply(state, vec![Action::RemoveApple(pos)], &config);

        assert_eq!(
            state.apples,
            vec![Apple { pos: Position::new(1, 1) }, Apple { pos }]
        );
    }

    #[test]
    fn test_remove_missing_apple_is_noop() {
        let config = GameConfig::default();
        let state = GameState {
            apples: vec![Apple { pos: Position::new(1, 1) }],
            ..GameState::default()
        };

        let after = apply(state.clone(), vec![Action::RemoveApple(Position::new(9, 9))], &config);

        assert_eq!(after, state);
    }

    #[test]
    fn test_eating_commit_removes_apple() {
        let config = GameConfig::default();
        let apple = Apple { pos: Position::new(6, 5) };
        let state = GameState {
            apples: vec![apple],
            ..state_at_five_five()
        };

        let outcome = compute_tick(&state, &config);
        let mut actions: Vec<Action> = outcome.eaten.into_iter().map(Action::RemoveApple).collect();
        actions.push(Action::UpdatePlayers(outcome.players));
        let state = apply(state, actions, &config);

        let player = state.player(1).and_then(Player::as_alive).unwrap();
        assert_eq!(player.chain.len(), 4);
        assert_eq!(player.score, 1);
        assert!(state.apples.is_empty());
    }

    #[test]
    fn test_wall_death_is_permanent() {
        let config = GameConfig::default();
        let mut state = GameState {
            players: vec![Player::Alive(AlivePlayer::new(
                1,
                "p1".to_string(),
                Breed::default(),
                Chain::spawn(Position::new(config.cols - 1, 5), Direction::Right),
            ))],
            ..GameState::default()
        };

        for _ in 0..3 {
            let outcome = compute_tick(&state, &config);
            state = apply(state, vec![Action::UpdatePlayers(outcome.players)], &config);
            assert!(!state.players[0].is_alive());
        }
    }

    #[test]
    fn test_update_players_cannot_revive() {
        let config = GameConfig::default();
        let living = state_at_five_five();
        let dead = apply(living.clone(), vec![Action::Disconnect { id: 1 }], &config);

        let state = apply(dead, vec![Action::UpdatePlayers(living.players)], &config);

        assert!(!state.players[0].is_alive());
    }

    #[test]
    fn test_pause_cycle_notifies_everyone() {
        let config = GameConfig {
            resume_grace_period: 2,
            ..GameConfig::default()
        };
        let mut rng = rng();

        let (state, intents) = reduce(GameState::new(), Action::RequestTogglePause, &config, &mut rng);
        assert_eq!(state.pause, PauseState::Paused);
        assert_eq!(intents, vec![Intent::broadcast(Notification::Paused)]);

        let (state, intents) = reduce(state, Action::RequestTogglePause, &config, &mut rng);
        assert_eq!(state.countdown(), 2);
        assert!(intents.is_empty());

        let (state, intents) = reduce(state, Action::TickResumeCountdown, &config, &mut rng);
        assert_eq!(state.countdown(), 1);
        assert!(state.is_paused());
        assert!(intents.is_empty());

        let (state, intents) = reduce(state, Action::TickResumeCountdown, &config, &mut rng);
        assert!(!state.is_paused());
        assert_eq!(intents, vec![Intent::broadcast(Notification::Resumed)]);
    }

    #[test]
    fn test_repeated_toggle_while_resuming_has_no_effect() {
        let config = GameConfig::default();
        let resuming = apply(
            GameState::new(),
            vec![Action::RequestTogglePause, Action::RequestTogglePause],
            &config,
        );

        let after = apply(resuming.clone(), vec![Action::RequestTogglePause; 5], &config);

        assert_eq!(after, resuming);
    }

    #[test]
    fn test_countdown_tick_while_running_is_noop() {
        let config = GameConfig::default();
        let (state, intents) = reduce(
            GameState::new(),
            Action::TickResumeCountdown,
            &config,
            &mut rng(),
        );

        assert_eq!(state, GameState::new());
        assert!(intents.is_empty());
    }

    #[test]
    fn test_disconnect_marks_dead_in_place() {
        let config = GameConfig::default();
        let state = apply(
            GameState::new(),
            vec![join(1), join(2), join(3), Action::Disconnect { id: 2 }],
            &config,
        );

        let alive: Vec<bool> = state.players.iter().map(Player::is_alive).collect();
        assert_eq!(alive, vec![true, false, true]);
        assert_eq!(state.players[1].id(), 2);
    }
}
