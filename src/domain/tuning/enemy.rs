/// Base stats for spawned enemies, before per-kind modifiers.

#[derive(Debug, Clone, Copy)]
pub struct EnemyTuning {
    pub max_hp: f32,

    /// Seek speed in map units per tick.
    pub speed: f32,

    /// Enemy-to-player distance below which contact damage applies.
    pub contact_radius: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            max_hp: 50.0,
            speed: 0.5,
            contact_radius: 20.0,
        }
    }
}
