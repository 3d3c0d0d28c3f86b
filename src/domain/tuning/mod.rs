// Gameplay tuning tables. Runtime settings (tick rate, channel sizes) live in frameworks::config.

pub mod arena;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod weapon;

pub use arena::ArenaTuning;
pub use enemy::EnemyTuning;
pub use player::PlayerTuning;
pub use projectile::ProjectileTuning;
pub use weapon::WeaponTuning;

/// Every tuning table needed to build and step a world.
#[derive(Debug, Clone, Default)]
pub struct Tuning {
    pub arena: ArenaTuning,
    pub player: PlayerTuning,
    pub weapons: WeaponTuning,
    pub projectile: ProjectileTuning,
    pub enemy: EnemyTuning,
}
