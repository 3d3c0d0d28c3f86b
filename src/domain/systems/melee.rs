use super::projectiles::{Hit, apply_hits};
use crate::domain::state::{CombatEvent, Enemy, Sword};
use crate::domain::tuning::ProjectileTuning;

/// Counts down, collides and prunes sword swings for one tick.
///
/// A swing is not consumed by hitting: every enemy inside its radius takes
/// damage on every tick the swing is alive, including the tick it expires.
pub fn tick_swords(
    swords: &mut Vec<Sword>,
    enemies: &mut [Enemy],
    cfg: &ProjectileTuning,
    events: &mut Vec<CombatEvent>,
) {
    for s in swords.iter_mut() {
        s.duration = s.duration.saturating_sub(1);
    }

    let hits = resolve_sword_hits(swords, enemies);
    apply_hits(enemies, hits, cfg.knockback_per_damage, events);

    swords.retain(|s| s.duration > 0);
}

/// Every (swing, enemy) pair within the swing's radius, swing-major.
pub fn resolve_sword_hits(swords: &[Sword], enemies: &[Enemy]) -> Vec<Hit> {
    let mut hits = Vec::new();
    for s in swords {
        for (enemy, e) in enemies.iter().enumerate() {
            if s.position.distance_to(e.position) < s.range {
                hits.push(Hit {
                    enemy,
                    damage: s.damage,
                    direction: s.direction,
                });
            }
        }
    }
    hits
}
