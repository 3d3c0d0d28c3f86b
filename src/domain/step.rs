// Fixed-order tick orchestration over an owned world.

use super::input::ActionSet;
use super::state::World;
use super::systems::{enemies, firing, melee, movement, projectiles};
use super::tuning::Tuning;
use std::time::Duration;

/// Advances the world by one tick.
///
/// Phases run in this order, once each:
/// 1. player movement
/// 2. weapon fire for both slots
/// 3. bullet advance, collision and pruning
/// 4. sword countdown, collision and pruning
/// 5. enemy seek, player contact and pruning
/// 6. remaining-enemy count
///
/// Attacks therefore resolve against enemies before they move and before the
/// tick's dead are removed. `dt` only drives the weapon clock; all speeds are
/// per tick.
pub fn step(mut world: World, input: ActionSet, dt: Duration, tuning: &Tuning) -> World {
    let now = world.elapsed;
    world.events.clear();

    movement::move_player(&mut world.player, input, world.map);

    firing::fire_weapons(
        &mut world.player,
        input,
        now,
        &tuning.projectile,
        &mut world.bullets,
        &mut world.swords,
        &mut world.events,
    );

    projectiles::tick_bullets(
        &mut world.bullets,
        &mut world.enemies,
        &tuning.projectile,
        &mut world.events,
    );

    melee::tick_swords(
        &mut world.swords,
        &mut world.enemies,
        &tuning.projectile,
        &mut world.events,
    );

    enemies::tick_enemies(
        &mut world.enemies,
        &mut world.player,
        world.map,
        enemies::ContactConfig {
            radius: tuning.enemy.contact_radius,
            knockback: tuning.player.contact_knockback,
        },
        &mut world.events,
    );

    world.remaining_enemies = world.enemies.len();
    world.tick += 1;
    world.elapsed += dt;
    world
}
