// Shared world builders for integration tests.
#![allow(dead_code)]

use arena_sim::domain::{
    ActionSet, Bullet, Enemy, EnemyKind, Position, Tuning, World, step,
};
use std::time::Duration;

// Tick length used by every scenario; the weapon clock advances by this much per step.
pub const DT: Duration = Duration::from_millis(10);

// Default tuning: 3000x3000 map, pistol 20/200/1s, dagger 0.75/50/1s.
pub fn tuning() -> Tuning {
    Tuning::default()
}

pub fn enemy_at(x: f32, y: f32) -> Enemy {
    Enemy::spawn(&tuning(), EnemyKind::Basic, Position::new(x, y))
}

// World with the player at map centre and enemies in the given order.
pub fn world_with(enemies: Vec<Enemy>) -> World {
    World::new(&tuning(), enemies)
}

// A pistol round one step short of `target`, travelling along +x.
pub fn bullet_before(target: Position) -> Bullet {
    Bullet {
        position: Position::new(target.x - 5.0, target.y),
        direction: 0.0,
        speed: 5.0,
        range: 200.0,
        damage: 20.0,
    }
}

// Steps `ticks` times with the same held input.
pub fn run(mut world: World, input: ActionSet, ticks: usize) -> World {
    let tuning = tuning();
    for _ in 0..ticks {
        world = step(world, input, DT, &tuning);
    }
    world
}
