//! One movement tick: move every creature, let them eat, then kill the
//! ones that crashed.
//!
//! The result is not applied here. The caller commits it through the
//! reducer (`RemoveApple` per eaten apple, then `UpdatePlayers`), so a
//! direction change can never land between the phases of a tick.

use crate::collision::{eaten_apple, hits_player, hits_wall};
use crate::config::GameConfig;
use crate::geometry::Position;
use crate::player::{Player, PlayerId};
use crate::state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    /// The full roster after the tick, in join order.
    pub players: Vec<Player>,
    /// Cells of the apples eaten this tick, one entry per eater.
    pub eaten: Vec<Position>,
    /// Players who died this tick.
    pub deaths: Vec<PlayerId>,
}

pub fn compute_tick(state: &GameState, config: &GameConfig) -> TickOutcome {
    let mut players: Vec<Player> = state
        .players
        .iter()
        .map(|player| match player {
            Player::Alive(alive) => {
                let mut moved = alive.clone();
                moved.chain = alive.chain.advance();
                Player::Alive(moved)
            }
            dead => dead.clone(),
        })
        .collect();

    let mut eaten = Vec::new();
    for (player, before) in players.iter_mut().zip(&state.players) {
        if let (Player::Alive(now), Player::Alive(then)) = (player, before) {
            if let Some(apple) = eaten_apple(now.chain.head().pos, &state.apples) {
                eaten.push(apple.pos);
                now.chain = now.chain.grow(&then.chain);
                now.score += 1;
            }
        }
    }

    // Everyone has moved and grown before anyone is judged.
    let mut deaths = Vec::new();
    let players: Vec<Player> = players
        .iter()
        .map(|player| match player {
            Player::Alive(alive)
                if hits_wall(alive.chain.head().pos, config) || hits_player(alive, &players) =>
            {
                deaths.push(alive.id);
                Player::Dead(alive.clone().kill())
            }
            other => other.clone(),
        })
        .collect();

    TickOutcome {
        players,
        eaten,
        deaths,
    }
}
