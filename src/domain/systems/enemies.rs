use super::movement::seek;
use crate::domain::state::{CombatEvent, Enemy, MapBounds, Player};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct ContactConfig {
    /// Enemy-to-player distance below which contact applies.
    pub radius: f32,
    /// Distance the player is pushed away from each touching enemy.
    pub knockback: f32,
}

/// A touching enemy's effect on the player, resolved before it is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub damage: f32,
    /// Push direction in radians, pointing from the enemy to the player.
    pub direction: f32,
}

/// Moves enemies toward the player, applies contact damage, and prunes the dead.
///
/// Seek and contact are both evaluated against the player's position at the
/// start of this phase. Contacts are then applied in enemy order, clamping
/// the player back into the map after each push. There is no contact
/// cooldown: a touching enemy deals damage every tick.
pub fn tick_enemies(
    enemies: &mut Vec<Enemy>,
    player: &mut Player,
    map: MapBounds,
    cfg: ContactConfig,
    events: &mut Vec<CombatEvent>,
) {
    let target = player.position;

    for e in enemies.iter_mut() {
        e.position = seek(e.position, target, e.speed);
    }

    let contacts: Vec<Contact> = enemies
        .iter()
        .filter(|e| e.position.distance_to(target) < cfg.radius)
        .map(|e| Contact {
            damage: e.kind.traits().contact_damage,
            direction: (target.y - e.position.y).atan2(target.x - e.position.x),
        })
        .collect();

    for c in contacts {
        player.hp = (player.hp - c.damage).max(0.0);
        player.position.advance(c.direction, cfg.knockback);
        player.position = map.clamp(player.position);

        debug!(damage = c.damage, remaining_hp = player.hp, "player hit");
        events.push(CombatEvent::PlayerHit {
            damage: c.damage,
            remaining_hp: player.hp,
        });
    }

    enemies.retain(|e| {
        if e.hp > 0.0 {
            return true;
        }
        debug!(x = e.position.x, y = e.position.y, kind = e.kind.name(), "enemy killed");
        events.push(CombatEvent::EnemyKilled {
            position: e.position,
            kind: e.kind,
        });
        false
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enemy_kind::EnemyKind;
    use crate::domain::state::{Position, World};
    use crate::domain::tuning::Tuning;
    use approx::assert_abs_diff_eq;

    const CONTACT: ContactConfig = ContactConfig {
        radius: 20.0,
        knockback: 15.0,
    };

    fn setup(player_at: Position, enemies_at: &[Position]) -> (Player, Vec<Enemy>, MapBounds) {
        let tuning = Tuning::default();
        let enemies = enemies_at
            .iter()
            .map(|p| Enemy::spawn(&tuning, EnemyKind::Basic, *p))
            .collect();
        let mut world = World::new(&tuning, enemies);
        world.player.position = player_at;
        (world.player, world.enemies, world.map)
    }

    #[test]
    fn when_enemy_is_far_then_it_steps_toward_player_without_contact() {
        let (mut player, mut enemies, map) =
            setup(Position::new(100.0, 100.0), &[Position::new(100.0, 200.0)]);
        let mut events = Vec::new();

        tick_enemies(&mut enemies, &mut player, map, CONTACT, &mut events);

        assert_abs_diff_eq!(enemies[0].position.y, 199.5, epsilon = 1e-4);
        assert_eq!(player.hp, 100.0);
        assert!(events.is_empty());
    }

    #[test]
    fn when_enemy_touches_player_then_player_is_damaged_and_pushed_away() {
        let (mut player, mut enemies, map) =
            setup(Position::new(100.0, 100.0), &[Position::new(110.0, 100.0)]);

        tick_enemies(&mut enemies, &mut player, map, CONTACT, &mut Vec::new());

        assert_eq!(player.hp, 90.0);
        assert_abs_diff_eq!(player.position.x, 85.0, epsilon = 1e-4);
        assert_abs_diff_eq!(player.position.y, 100.0, epsilon = 1e-4);
    }

    #[test]
    fn when_enemy_sits_exactly_on_player_then_push_goes_along_positive_x() {
        let (mut player, mut enemies, map) =
            setup(Position::new(100.0, 100.0), &[Position::new(100.0, 100.0)]);

        tick_enemies(&mut enemies, &mut player, map, CONTACT, &mut Vec::new());

        assert_eq!(enemies[0].position, Position::new(100.0, 100.0));
        assert_eq!(player.hp, 90.0);
        assert_abs_diff_eq!(player.position.x, 115.0, epsilon = 1e-4);
        assert_abs_diff_eq!(player.position.y, 100.0, epsilon = 1e-4);
    }

    #[test]
    fn when_knockback_leaves_the_map_then_player_is_clamped() {
        let (mut player, mut enemies, map) =
            setup(Position::new(5.0, 5.0), &[Position::new(10.0, 10.0)]);

        tick_enemies(&mut enemies, &mut player, map, CONTACT, &mut Vec::new());

        assert_eq!(player.position, Position::new(0.0, 0.0));
    }

    #[test]
    fn when_damage_exceeds_hp_then_hp_floors_at_zero() {
        let (mut player, mut enemies, map) =
            setup(Position::new(100.0, 100.0), &[Position::new(105.0, 100.0)]);
        player.hp = 4.0;

        tick_enemies(&mut enemies, &mut player, map, CONTACT, &mut Vec::new());

        assert_eq!(player.hp, 0.0);
    }

    #[test]
    fn when_enemy_has_no_hp_then_it_is_pruned_with_a_kill_event() {
        let (mut player, mut enemies, map) = setup(
            Position::new(100.0, 100.0),
            &[Position::new(900.0, 900.0), Position::new(800.0, 800.0)],
        );
        enemies[0].hp = 0.0;
        let mut events = Vec::new();

        tick_enemies(&mut enemies, &mut player, map, CONTACT, &mut events);

        assert_eq!(enemies.len(), 1);
        assert!(matches!(
            events.as_slice(),
            [CombatEvent::EnemyKilled {
                kind: EnemyKind::Basic,
                ..
            }]
        ));
    }
}
