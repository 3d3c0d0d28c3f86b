/// Gameplay tuning for the player character.
///
/// Keep this separate from runtime configuration (tick rates, buffer sizes, etc.).

#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Starting and maximum hit points.
    pub max_hp: f32,

    /// Movement speed in map units per tick.
    pub speed: f32,

    /// Distance the player is pushed away from an enemy on contact.
    pub contact_knockback: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_hp: 100.0,
            speed: 2.0,
            contact_knockback: 15.0,
        }
    }
}
