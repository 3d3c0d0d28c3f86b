// Domain-level simulation entities and snapshot types.
//
// The world is a flat set of independent records. Nothing holds a reference
// into another entity; collisions are re-evaluated from positions every tick.

use super::enemy_kind::EnemyKind;
use super::tuning::Tuning;
use rand::Rng;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Moves the point `distance` units along `direction` (radians, 0 = +x).
    pub fn advance(&mut self, direction: f32, distance: f32) {
        self.x += direction.cos() * distance;
        self.y += direction.sin() * distance;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub width: f32,
    pub height: f32,
}

impl MapBounds {
    pub fn clamp(self, p: Position) -> Position {
        Position {
            x: p.x.clamp(0.0, self.width),
            y: p.y.clamp(0.0, self.height),
        }
    }

    pub fn contains(self, p: Position) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    pub fn centre(self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Immutable weapon stats. `fire_rate` is the minimum time between shots.
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub name: String,
    pub damage: f32,
    pub range: f32,
    pub fire_rate: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponSlot {
    /// Ranged slot, spawns bullets.
    Long,
    /// Melee slot, spawns sword swings.
    Short,
}

/// Last trigger time per slot on the simulation clock. `None` means never fired.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FireTimes {
    pub long: Option<Duration>,
    pub short: Option<Duration>,
}

impl FireTimes {
    pub fn get(&self, slot: WeaponSlot) -> Option<Duration> {
        match slot {
            WeaponSlot::Long => self.long,
            WeaponSlot::Short => self.short,
        }
    }

    pub fn set(&mut self, slot: WeaponSlot, at: Duration) {
        match slot {
            WeaponSlot::Long => self.long = Some(at),
            WeaponSlot::Short => self.short = Some(at),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Position,
    pub hp: f32,
    pub max_hp: f32,
    pub speed: f32,
    /// Facing in radians; keeps its last value while no movement is held.
    pub direction: f32,
    pub long_weapon: Weapon,
    pub short_weapon: Weapon,
    pub last_fire: FireTimes,
}

impl Player {
    pub fn weapon(&self, slot: WeaponSlot) -> &Weapon {
        match slot {
            WeaponSlot::Long => &self.long_weapon,
            WeaponSlot::Short => &self.short_weapon,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub position: Position,
    pub hp: f32,
    pub max_hp: f32,
    pub speed: f32,
    pub kind: EnemyKind,
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub position: Position,
    pub direction: f32,
    pub speed: f32,
    /// Remaining travel distance. Zero or below means the bullet is spent.
    pub range: f32,
    pub damage: f32,
}

#[derive(Debug, Clone)]
pub struct Sword {
    /// Fixed at the point the swing was cast.
    pub position: Position,
    pub direction: f32,
    /// Remaining lifetime in ticks.
    pub duration: u32,
    /// Lifetime the swing started with, used for fade effects.
    pub max_duration: u32,
    pub damage: f32,
    /// Hit radius around `position`.
    pub range: f32,
}

impl Sword {
    pub fn remaining_fraction(&self) -> f32 {
        if self.max_duration == 0 {
            return 0.0;
        }
        self.duration as f32 / self.max_duration as f32
    }
}

/// Things that happened during the last tick, in phase order.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    ShotFired { position: Position, direction: f32 },
    SwordSwung { position: Position, direction: f32 },
    EnemyHit {
        /// Index into the enemy list before this tick's dead are pruned. It
        /// does not line up with the published enemy list once an earlier
        /// enemy dies in the same tick; use `position` to locate the hit.
        enemy: usize,
        /// Enemy position after knockback.
        position: Position,
        damage: f32,
        remaining_hp: f32,
    },
    EnemyKilled { position: Position, kind: EnemyKind },
    PlayerHit { damage: f32, remaining_hp: f32 },
}

/// Derived game condition; the caller decides what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Defeated,
    StageCleared,
}

#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    /// Insertion order is the collision tie-break order.
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub swords: Vec<Sword>,
    pub map: MapBounds,
    pub stage: u32,
    pub remaining_enemies: usize,
    pub tick: u64,
    /// Simulation clock, advanced by `dt` at the end of every step.
    pub elapsed: Duration,
    pub events: Vec<CombatEvent>,
}

impl World {
    /// Builds a stage-one world with the player at map centre and the given enemies.
    pub fn new(tuning: &Tuning, enemies: Vec<Enemy>) -> Self {
        let map = MapBounds {
            width: tuning.arena.map_width,
            height: tuning.arena.map_height,
        };
        let player = Player {
            position: map.centre(),
            hp: tuning.player.max_hp,
            max_hp: tuning.player.max_hp,
            speed: tuning.player.speed,
            direction: 0.0,
            long_weapon: tuning.weapons.long.clone(),
            short_weapon: tuning.weapons.short.clone(),
            last_fire: FireTimes::default(),
        };

        Self {
            player,
            remaining_enemies: enemies.len(),
            enemies,
            bullets: Vec::new(),
            swords: Vec::new(),
            map,
            stage: 1,
            tick: 0,
            elapsed: Duration::ZERO,
            events: Vec::new(),
        }
    }

    /// Builds a world with `arena.enemy_count` basic enemies scattered uniformly over the map.
    pub fn spawn<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Self {
        let enemies = (0..tuning.arena.enemy_count)
            .map(|_| {
                let position = Position::new(
                    rng.random_range(0.0..=tuning.arena.map_width),
                    rng.random_range(0.0..=tuning.arena.map_height),
                );
                Enemy::spawn(tuning, EnemyKind::Basic, position)
            })
            .collect();
        Self::new(tuning, enemies)
    }

    pub fn outcome(&self) -> Outcome {
        if self.player.is_dead() {
            Outcome::Defeated
        } else if self.enemies.is_empty() {
            Outcome::StageCleared
        } else {
            Outcome::InProgress
        }
    }
}

impl Enemy {
    pub fn spawn(tuning: &Tuning, kind: EnemyKind, position: Position) -> Self {
        Self {
            position,
            hp: tuning.enemy.max_hp,
            max_hp: tuning.enemy.max_hp,
            speed: tuning.enemy.speed * kind.traits().speed_multiplier,
            kind,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerSnapshot {
    pub x: f32,
    pub y: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub direction: f32,
    pub long_weapon: String,
    pub short_weapon: String,
}

#[derive(Debug, Clone)]
pub struct EnemySnapshot {
    pub x: f32,
    pub y: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub kind: EnemyKind,
}

#[derive(Debug, Clone)]
pub struct BulletSnapshot {
    pub x: f32,
    pub y: f32,
    pub direction: f32,
}

#[derive(Debug, Clone)]
pub struct SwordSnapshot {
    pub x: f32,
    pub y: f32,
    pub direction: f32,
    /// Remaining duration as a fraction of the starting duration.
    pub fade: f32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(p: &Player) -> Self {
        Self {
            x: p.position.x,
            y: p.position.y,
            hp: p.hp,
            max_hp: p.max_hp,
            direction: p.direction,
            long_weapon: p.long_weapon.name.clone(),
            short_weapon: p.short_weapon.name.clone(),
        }
    }
}

impl From<&Enemy> for EnemySnapshot {
    fn from(e: &Enemy) -> Self {
        Self {
            x: e.position.x,
            y: e.position.y,
            hp: e.hp,
            max_hp: e.max_hp,
            kind: e.kind,
        }
    }
}

impl From<&Bullet> for BulletSnapshot {
    fn from(b: &Bullet) -> Self {
        Self {
            x: b.position.x,
            y: b.position.y,
            direction: b.direction,
        }
    }
}

impl From<&Sword> for SwordSnapshot {
    fn from(s: &Sword) -> Self {
        Self {
            x: s.position.x,
            y: s.position.y,
            direction: s.direction,
            fade: s.remaining_fraction(),
        }
    }
}
