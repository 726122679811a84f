//! Start-cell selection and the apple throttle.

use crate::config::GameConfig;
use crate::geometry::Position;
use crate::state::Apple;
use rand::Rng;

/// Picks an interior cell. Columns 0 and 1 are excluded so a chain spawned
/// facing right keeps its tail on the grid; the outer ring is excluded on
/// the other sides.
///
/// On a grid below the validated minimum the range collapses to its lower
/// bound instead of being empty.
pub fn choose_start_pos<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Position {
    Position {
        x: rng.gen_range(2..=(config.cols - 2).max(2)),
        y: rng.gen_range(1..=(config.rows - 2).max(1)),
    }
}

/// Advances the spawn counter by one tick.
///
/// Returns the new counter and, on every `apple_rate`-th call, a freshly
/// placed apple with the counter reset to 0. Placement does not avoid other
/// apples or creatures.
pub fn spawn_tick<R: Rng + ?Sized>(
    ticks_since_apple: u32,
    config: &GameConfig,
    rng: &mut R,
) -> (u32, Option<Apple>) {
    let ticks = ticks_since_apple.saturating_add(1);
    if ticks < config.apple_rate {
        return (ticks, None);
    }

    let apple = Apple {
        pos: choose_start_pos(config, rng),
    };
    (0, Some(apple))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_start_pos_leaves_room_for_tail() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let pos = choose_start_pos(&config, &mut rng);
            assert!(pos.x >= 2 && pos.x <= config.cols - 2, "x out of range: {:?}", pos);
            assert!(pos.y >= 1 && pos.y <= config.rows - 2, "y out of range: {:?}", pos);
        }
    }

    #[test]
    fn test_start_pos_on_smallest_grid() {
        let config = GameConfig {
            rows: 3,
            cols: 4,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(choose_start_pos(&config, &mut rng), Position::new(2, 1));
    }

    #[test]
    fn test_start_pos_on_undersized_grid() {
        let config = GameConfig {
            rows: 2,
            cols: 3,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(choose_start_pos(&config, &mut rng), Position::new(2, 1));
    }

    #[test]
    fn test_spawns_on_every_rate_th_tick() {
        let config = GameConfig {
            apple_rate: 4,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let mut ticks = 0;
        let mut spawned = Vec::new();

        for call in 1..=12 {
            let (next, apple) = spawn_tick(ticks, &config, &mut rng);
            ticks = next;
            if apple.is_some() {
                spawned.push(call);
                assert_eq!(ticks, 0);
            }
        }

        assert_eq!(spawned, vec![4, 8, 12]);
    }

    #[test]
    fn test_rate_zero_spawns_every_tick() {
        let config = GameConfig {
            apple_rate: 0,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);

        let (ticks, apple) = spawn_tick(0, &config, &mut rng);
        assert_eq!(ticks, 0);
        assert!(apple.is_some());
    }
}
