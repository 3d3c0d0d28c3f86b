// Domain layer: core simulation types and rules.

pub mod enemy_kind;
pub mod input;
pub mod state;
pub mod step;
pub mod systems;
pub mod tuning;

pub use enemy_kind::{EnemyKind, EnemyTraits};
pub use input::{Action, ActionSet};
pub use state::{
    Bullet, BulletSnapshot, CombatEvent, Enemy, EnemySnapshot, MapBounds, Outcome, Player,
    PlayerSnapshot, Position, Sword, SwordSnapshot, Weapon, WeaponSlot, World,
};
pub use step::step;
pub use tuning::Tuning;
