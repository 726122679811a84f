//! Collision rules, evaluated after every creature has moved.

use crate::config::GameConfig;
use crate::geometry::Position;
use crate::player::{AlivePlayer, Player};
use crate::state::Apple;

/// True when `pos` is off the grid.
///
/// The bottom edge is inclusive: `y == rows` is still survivable, unlike
/// `x == cols`. See DESIGN.md.
pub fn hits_wall(pos: Position, config: &GameConfig) -> bool {
    pos.x < 0 || pos.x >= config.cols || pos.y < 0 || pos.y > config.rows
}

/// The first apple under `head`, if any.
pub fn eaten_apple(head: Position, apples: &[Apple]) -> Option<&Apple> {
    apples.iter().find(|apple| apple.pos == head)
}

/// True when the head of `player` sits on any segment of any living
/// creature, its own body included. A creature's own head does not count.
pub fn hits_player(player: &AlivePlayer, players: &[Player]) -> bool {
    let head = player.chain.head().pos;

    players
        .iter()
        .filter_map(Player::as_alive)
        .any(|other| {
            if other.id == player.id {
                other.chain.body_contains(head)
            } else {
                other.chain.contains(head)
            }
        })
}
