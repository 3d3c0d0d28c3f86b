use crate::domain::input::{Action, ActionSet};
use crate::domain::state::{Bullet, CombatEvent, Player, Sword, WeaponSlot};
use crate::domain::tuning::ProjectileTuning;
use std::time::Duration;

/// True when `slot` may fire at `now` given its weapon's fire rate.
pub fn slot_ready(player: &Player, slot: WeaponSlot, now: Duration) -> bool {
    match player.last_fire.get(slot) {
        None => true,
        Some(last) => now.saturating_sub(last) >= player.weapon(slot).fire_rate,
    }
}

/// Resolves both weapon slots for one tick.
///
/// Each slot has its own cooldown; new attacks start at the player's current
/// position and facing.
pub fn fire_weapons(
    player: &mut Player,
    actions: ActionSet,
    now: Duration,
    cfg: &ProjectileTuning,
    bullets: &mut Vec<Bullet>,
    swords: &mut Vec<Sword>,
    events: &mut Vec<CombatEvent>,
) {
    if actions.contains(Action::FireRanged) && slot_ready(player, WeaponSlot::Long, now) {
        bullets.push(Bullet {
            position: player.position,
            direction: player.direction,
            speed: cfg.bullet_speed,
            range: player.long_weapon.range,
            damage: player.long_weapon.damage,
        });
        player.last_fire.set(WeaponSlot::Long, now);
        events.push(CombatEvent::ShotFired {
            position: player.position,
            direction: player.direction,
        });
    }

    if actions.contains(Action::FireMelee) && slot_ready(player, WeaponSlot::Short, now) {
        swords.push(Sword {
            position: player.position,
            direction: player.direction,
            duration: cfg.sword_duration,
            max_duration: cfg.sword_duration,
            damage: player.short_weapon.damage,
            range: player.short_weapon.range,
        });
        player.last_fire.set(WeaponSlot::Short, now);
        events.push(CombatEvent::SwordSwung {
            position: player.position,
            direction: player.direction,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::World;
    use crate::domain::tuning::Tuning;

    struct Fixture {
        player: Player,
        bullets: Vec<Bullet>,
        swords: Vec<Sword>,
        events: Vec<CombatEvent>,
        cfg: ProjectileTuning,
    }

    impl Fixture {
        fn new() -> Self {
            let tuning = Tuning::default();
            Self {
                player: World::new(&tuning, Vec::new()).player,
                bullets: Vec::new(),
                swords: Vec::new(),
                events: Vec::new(),
                cfg: tuning.projectile,
            }
        }

        fn fire(&mut self, actions: ActionSet, now_ms: u64) {
            fire_weapons(
                &mut self.player,
                actions,
                Duration::from_millis(now_ms),
                &self.cfg,
                &mut self.bullets,
                &mut self.swords,
                &mut self.events,
            );
        }
    }

    #[test]
    fn when_slot_never_fired_then_first_press_fires_immediately() {
        let mut f = Fixture::new();

        f.fire(ActionSet::empty().with(Action::FireRanged), 0);

        assert_eq!(f.bullets.len(), 1);
        let bullet = &f.bullets[0];
        assert_eq!(bullet.speed, 5.0);
        assert_eq!(bullet.range, 200.0);
        assert_eq!(bullet.damage, 20.0);
        assert_eq!(bullet.position, f.player.position);
        assert_eq!(f.player.last_fire.long, Some(Duration::ZERO));
    }

    #[test]
    fn when_held_inside_cooldown_then_no_second_shot() {
        let mut f = Fixture::new();
        let fire = ActionSet::empty().with(Action::FireRanged);

        f.fire(fire, 0);
        f.fire(fire, 999);
        assert_eq!(f.bullets.len(), 1);

        f.fire(fire, 1000);
        assert_eq!(f.bullets.len(), 2);
    }

    #[test]
    fn when_both_slots_fire_then_cooldowns_are_independent() {
        let mut f = Fixture::new();

        f.fire(ActionSet::empty().with(Action::FireRanged), 0);
        f.fire(ActionSet::empty().with(Action::FireMelee), 500);
        f.fire(
            ActionSet::empty()
                .with(Action::FireRanged)
                .with(Action::FireMelee),
            1000,
        );

        assert_eq!(f.bullets.len(), 2);
        assert_eq!(f.swords.len(), 1);
        assert_eq!(f.player.last_fire.short, Some(Duration::from_millis(500)));
    }

    #[test]
    fn when_melee_fires_then_sword_uses_dagger_stats() {
        let mut f = Fixture::new();
        f.player.direction = 1.25;

        f.fire(ActionSet::empty().with(Action::FireMelee), 0);

        let sword = &f.swords[0];
        assert_eq!(sword.duration, 10);
        assert_eq!(sword.range, 50.0);
        assert_eq!(sword.damage, 0.75);
        assert_eq!(sword.direction, 1.25);
        assert!(matches!(f.events[0], CombatEvent::SwordSwung { .. }));
    }
}
