use crate::domain::state::Weapon;
use std::time::Duration;

/// Starting loadout for the two weapon slots.
#[derive(Debug, Clone)]
pub struct WeaponTuning {
    pub long: Weapon,
    pub short: Weapon,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        Self {
            long: Weapon {
                name: "Pistol".to_string(),
                damage: 20.0,
                range: 200.0,
                fire_rate: Duration::from_millis(1000),
            },
            short: Weapon {
                name: "Dagger".to_string(),
                damage: 0.75,
                range: 50.0,
                fire_rate: Duration::from_millis(1000),
            },
        }
    }
}
