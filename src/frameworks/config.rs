use crate::domain::Tuning;
use crate::interface_adapters::protocol::ViewportDto;
use crate::use_cases::{LoopSettings, SessionSettings};
use std::{env, fmt, str::FromStr, time::Duration};

// Runtime constants (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 64;
pub const DEFAULT_TICK_HZ: u32 = 60;
/// Highest rate that still yields a nonzero nanosecond interval.
pub const MAX_TICK_HZ: u32 = 1_000_000_000;

/// Configuration that could not be turned into valid settings.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The variable is set but does not parse as the expected type.
    Unparsable { key: &'static str, value: String },
    /// The value parses but violates a precondition.
    OutOfRange { key: &'static str, reason: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Unparsable { key, value } => write!(f, "{key}: cannot parse {value:?}"),
            ConfigError::OutOfRange { key, reason } => write!(f, "{key}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validated runtime settings for one headless run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub tick_interval: Duration,
    pub start_delay: Duration,
    pub run_limit: Duration,
    pub seed: u64,
    pub input_channel_capacity: usize,
    pub tuning: Tuning,
}

impl Settings {
    /// Reads `ARENA_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let tick_hz: u32 = read(&lookup, "ARENA_TICK_HZ")?.unwrap_or(DEFAULT_TICK_HZ);
        if tick_hz == 0 {
            return Err(ConfigError::OutOfRange {
                key: "ARENA_TICK_HZ",
                reason: "must be greater than zero",
            });
        }
        if tick_hz > MAX_TICK_HZ {
            return Err(ConfigError::OutOfRange {
                key: "ARENA_TICK_HZ",
                reason: "must be at most 1000000000",
            });
        }

        let mut tuning = Tuning::default();
        if let Some(count) = read(&lookup, "ARENA_ENEMY_COUNT")? {
            tuning.arena.enemy_count = count;
        }
        if let Some(width) = read(&lookup, "ARENA_MAP_WIDTH")? {
            tuning.arena.map_width = width;
        }
        if let Some(height) = read(&lookup, "ARENA_MAP_HEIGHT")? {
            tuning.arena.map_height = height;
        }
        validate_tuning(&tuning)?;

        let run_seconds: u64 = read(&lookup, "ARENA_RUN_SECONDS")?.unwrap_or(0);
        let start_delay_ms: u64 = read(&lookup, "ARENA_START_DELAY_MS")?.unwrap_or(0);
        // Unset seed means a fresh layout every run.
        let seed: u64 = read(&lookup, "ARENA_SEED")?.unwrap_or_else(rand::random);

        Ok(Self {
            tick_interval: Duration::from_nanos(1_000_000_000 / u64::from(tick_hz)),
            start_delay: Duration::from_millis(start_delay_ms),
            run_limit: Duration::from_secs(run_seconds),
            seed,
            input_channel_capacity: INPUT_CHANNEL_CAPACITY,
            tuning,
        })
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            input_channel_capacity: self.input_channel_capacity,
            seed: self.seed,
            loop_settings: LoopSettings {
                tick_interval: self.tick_interval,
                start_delay: self.start_delay,
                run_limit: self.run_limit,
                tuning: self.tuning.clone(),
            },
        }
    }

    pub fn vision(&self) -> ViewportDto {
        ViewportDto {
            width: self.tuning.arena.vision_width,
            height: self.tuning.arena.vision_height,
        }
    }
}

fn read<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Unparsable { key, value }),
    }
}

/// Rejects tuning the simulation assumes never happens.
pub fn validate_tuning(tuning: &Tuning) -> Result<(), ConfigError> {
    let checks: [(&'static str, bool, &'static str); 7] = [
        (
            "ARENA_MAP_WIDTH",
            tuning.arena.map_width.is_finite() && tuning.arena.map_width > 0.0,
            "must be positive and finite",
        ),
        (
            "ARENA_MAP_HEIGHT",
            tuning.arena.map_height.is_finite() && tuning.arena.map_height > 0.0,
            "must be positive and finite",
        ),
        ("player.speed", tuning.player.speed >= 0.0, "must not be negative"),
        ("enemy.speed", tuning.enemy.speed >= 0.0, "must not be negative"),
        ("weapons.long.damage", tuning.weapons.long.damage >= 0.0, "must not be negative"),
        ("weapons.short.damage", tuning.weapons.short.damage >= 0.0, "must not be negative"),
        ("projectile.bullet_speed", tuning.projectile.bullet_speed > 0.0, "must be positive"),
    ];

    match checks.into_iter().find(|(_, ok, _)| !ok) {
        Some((key, _, reason)) => Err(ConfigError::OutOfRange { key, reason }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn when_nothing_is_set_then_defaults_apply() {
        let settings = Settings::from_lookup(lookup(&[])).expect("defaults are valid");

        assert_eq!(settings.tick_interval, Duration::from_nanos(16_666_666));
        assert_eq!(settings.run_limit, Duration::ZERO);
        assert_eq!(settings.tuning.arena.enemy_count, 30);
        assert_eq!(settings.tuning.arena.map_width, 3000.0);
        assert_eq!(settings.vision().width, 500.0);
    }

    #[test]
    fn when_values_are_set_then_they_override_defaults() {
        let settings = Settings::from_lookup(lookup(&[
            ("ARENA_TICK_HZ", "30"),
            ("ARENA_ENEMY_COUNT", "5"),
            ("ARENA_SEED", " 99 "),
            ("ARENA_MAP_WIDTH", "800"),
            ("ARENA_RUN_SECONDS", "12"),
        ]))
        .expect("valid overrides");

        assert_eq!(settings.tick_interval, Duration::from_nanos(33_333_333));
        assert_eq!(settings.tuning.arena.enemy_count, 5);
        assert_eq!(settings.seed, 99);
        assert_eq!(settings.tuning.arena.map_width, 800.0);
        assert_eq!(settings.run_limit, Duration::from_secs(12));
        assert_eq!(settings.session_settings().seed, 99);
    }

    #[test]
    fn when_value_does_not_parse_then_key_is_reported() {
        let err = Settings::from_lookup(lookup(&[("ARENA_ENEMY_COUNT", "lots")]))
            .expect_err("unparsable count");

        assert_eq!(
            err,
            ConfigError::Unparsable {
                key: "ARENA_ENEMY_COUNT",
                value: "lots".to_string(),
            }
        );
    }

    #[test]
    fn when_tick_rate_is_zero_then_settings_are_rejected() {
        let err = Settings::from_lookup(lookup(&[("ARENA_TICK_HZ", "0")])).expect_err("zero hz");

        assert!(matches!(err, ConfigError::OutOfRange { key: "ARENA_TICK_HZ", .. }));
    }

    #[test]
    fn when_map_is_not_positive_then_settings_are_rejected() {
        let err =
            Settings::from_lookup(lookup(&[("ARENA_MAP_HEIGHT", "-1")])).expect_err("bad map");

        assert_eq!(err.to_string(), "ARENA_MAP_HEIGHT: must be positive and finite");
    }

    #[test]
    fn when_tick_rate_would_round_to_a_zero_interval_then_settings_are_rejected() {
        let err = Settings::from_lookup(lookup(&[("ARENA_TICK_HZ", "2000000000")]))
            .expect_err("interval below one nanosecond");

        assert!(matches!(err, ConfigError::OutOfRange { key: "ARENA_TICK_HZ", .. }));
    }

    #[test]
    fn when_tick_rate_is_at_the_ceiling_then_interval_is_one_nanosecond() {
        let settings = Settings::from_lookup(lookup(&[("ARENA_TICK_HZ", "1000000000")]))
            .expect("ceiling is accepted");

        assert_eq!(settings.tick_interval, Duration::from_nanos(1));
    }

    #[test]
    fn when_map_width_is_infinite_then_settings_are_rejected() {
        let err =
            Settings::from_lookup(lookup(&[("ARENA_MAP_WIDTH", "inf")])).expect_err("infinite map");

        assert_eq!(
            err,
            ConfigError::OutOfRange {
                key: "ARENA_MAP_WIDTH",
                reason: "must be positive and finite",
            }
        );
    }

    #[test]
    fn when_map_height_is_nan_then_settings_are_rejected() {
        let err = Settings::from_lookup(lookup(&[("ARENA_MAP_HEIGHT", "NaN")])).expect_err("nan map");

        assert!(matches!(err, ConfigError::OutOfRange { key: "ARENA_MAP_HEIGHT", .. }));
    }
}
