// Per-phase simulation systems. `domain::step` runs them in a fixed order.

pub mod enemies;
pub mod firing;
pub mod melee;
pub mod movement;
pub mod projectiles;
