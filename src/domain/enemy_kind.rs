// Closed set of enemy variants and their behaviour table.

/// Per-kind modifiers applied on top of the base enemy tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTraits {
    /// Multiplies the base seek speed.
    pub speed_multiplier: f32,
    /// Multiplies incoming weapon damage (1.0 = no resistance).
    pub damage_taken_multiplier: f32,
    /// Damage dealt to the player per tick of contact.
    pub contact_damage: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnemyKind {
    #[default]
    Basic,
}

impl EnemyKind {
    pub const fn traits(self) -> EnemyTraits {
        match self {
            EnemyKind::Basic => EnemyTraits {
                speed_multiplier: 1.0,
                damage_taken_multiplier: 1.0,
                contact_damage: 10.0,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            EnemyKind::Basic => "basic",
        }
    }
}
