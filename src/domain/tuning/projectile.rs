/// Gameplay tuning for transient attacks (bullets and sword swings).

#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Bullet travel per tick in map units.
    pub bullet_speed: f32,

    /// Centre-to-centre distance below which a bullet hits an enemy.
    pub bullet_hit_radius: f32,

    /// Sword swing lifetime in ticks.
    pub sword_duration: u32,

    /// Knockback distance per point of damage dealt.
    pub knockback_per_damage: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            bullet_speed: 5.0,
            bullet_hit_radius: 10.0,
            sword_duration: 10,
            knockback_per_damage: 0.5,
        }
    }
}
