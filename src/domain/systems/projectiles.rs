use crate::domain::state::{Bullet, CombatEvent, Enemy};
use crate::domain::tuning::ProjectileTuning;
use tracing::debug;

/// One resolved attack against one enemy, computed before anything is mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into the enemy list at the time the hit was resolved.
    pub enemy: usize,
    pub damage: f32,
    /// Knockback direction in radians.
    pub direction: f32,
}

/// Advances, collides and prunes bullets for one tick.
pub fn tick_bullets(
    bullets: &mut Vec<Bullet>,
    enemies: &mut [Enemy],
    cfg: &ProjectileTuning,
    events: &mut Vec<CombatEvent>,
) {
    // Range is a distance budget, spent by the same amount the bullet travels.
    for b in bullets.iter_mut() {
        b.position.advance(b.direction, b.speed);
        b.range -= b.speed;
    }

    let hits = resolve_bullet_hits(bullets, enemies, cfg.bullet_hit_radius);
    for &(bullet, _) in &hits {
        if let Some(b) = bullets.get_mut(bullet) {
            b.range = 0.0;
        }
    }
    apply_hits(
        enemies,
        hits.iter().map(|&(_, hit)| hit),
        cfg.knockback_per_damage,
        events,
    );

    bullets.retain(|b| b.range > 0.0);
}

/// Pairs each bullet with at most one enemy it overlaps.
///
/// Enemies are scanned in list order and the first one inside `radius` takes
/// the hit, so overlapping enemies resolve deterministically.
pub fn resolve_bullet_hits(bullets: &[Bullet], enemies: &[Enemy], radius: f32) -> Vec<(usize, Hit)> {
    bullets
        .iter()
        .enumerate()
        .filter_map(|(bi, b)| {
            enemies
                .iter()
                .position(|e| b.position.distance_to(e.position) < radius)
                .map(|enemy| {
                    (
                        bi,
                        Hit {
                            enemy,
                            damage: b.damage,
                            direction: b.direction,
                        },
                    )
                })
        })
        .collect()
}

/// Applies damage and knockback for every hit, in order.
///
/// Knockback distance is the raw weapon damage times `knockback_per_damage`;
/// the enemy kind's resistance only scales hit points lost.
pub fn apply_hits(
    enemies: &mut [Enemy],
    hits: impl IntoIterator<Item = Hit>,
    knockback_per_damage: f32,
    events: &mut Vec<CombatEvent>,
) {
    for hit in hits {
        let Some(e) = enemies.get_mut(hit.enemy) else {
            continue;
        };

        let damage = hit.damage * e.kind.traits().damage_taken_multiplier;
        e.hp -= damage;
        e.position
            .advance(hit.direction, hit.damage * knockback_per_damage);

        debug!(enemy = hit.enemy, damage, remaining_hp = e.hp, "enemy hit");
        events.push(CombatEvent::EnemyHit {
            enemy: hit.enemy,
            position: e.position,
            damage,
            remaining_hp: e.hp,
        });
    }
}
