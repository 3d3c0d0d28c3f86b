use super::types::{GameEvent, GameStatus, WorldUpdate};
use crate::domain::{ActionSet, CombatEvent, Outcome, Tuning, World, step};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Loop parameters for one world task.
#[derive(Debug, Clone)]
pub struct LoopSettings {
    /// Fixed tick interval; also the `dt` handed to every step.
    pub tick_interval: Duration,
    /// Countdown before the first tick.
    pub start_delay: Duration,
    /// Stop after this much simulated time (zero runs until the game ends).
    pub run_limit: Duration,
    pub tuning: Tuning,
}

/// Drives the fixed-step simulation until the game ends or the task is told to stop.
///
/// The task exclusively owns the world. Input is drained once per tick before
/// stepping; the latest action set wins and stays held until replaced. Each
/// finished tick is published whole on `world_tx`, so readers never see a
/// world mid-step. Returns the final world.
pub async fn world_task(
    mut world: World,
    mut input_rx: mpsc::Receiver<GameEvent>,
    world_tx: watch::Sender<Arc<WorldUpdate>>,
    status_tx: watch::Sender<GameStatus>,
    settings: LoopSettings,
    shutdown: Arc<Notify>,
) -> World {
    let mut actions = ActionSet::empty();

    if !settings.start_delay.is_zero() {
        let _ = status_tx.send(GameStatus::Starting);
        tokio::time::sleep(settings.start_delay).await;
    }
    let _ = status_tx.send(GameStatus::Running);
    info!(
        enemies = world.enemies.len(),
        tick_ms = settings.tick_interval.as_millis(),
        "simulation started"
    );

    let mut interval = tokio::time::interval(settings.tick_interval);
    // Late ticks are delayed rather than replayed in a burst.
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!(tick = world.tick, "simulation shut down");
                let _ = status_tx.send(GameStatus::Stopped);
                break;
            }
            _ = interval.tick() => {}
        }

        while let Ok(ev) = input_rx.try_recv() {
            match ev {
                GameEvent::Input { actions: next } => actions = next,
            }
        }

        world = step(world, actions, settings.tick_interval, &settings.tuning);
        log_kills(&world);

        let _ = world_tx.send(Arc::new(WorldUpdate::from(&world)));

        let outcome = world.outcome();
        if outcome != Outcome::InProgress {
            info!(
                tick = world.tick,
                player_hp = world.player.hp,
                remaining_enemies = world.remaining_enemies,
                ?outcome,
                "simulation finished"
            );
            let _ = status_tx.send(GameStatus::from(outcome));
            break;
        }

        if !settings.run_limit.is_zero() && world.elapsed >= settings.run_limit {
            info!(tick = world.tick, "run limit reached");
            let _ = status_tx.send(GameStatus::Stopped);
            break;
        }
    }

    world
}

fn log_kills(world: &World) {
    for ev in &world.events {
        if let CombatEvent::EnemyKilled { kind, .. } = ev {
            info!(
                tick = world.tick,
                kind = kind.name(),
                remaining_enemies = world.remaining_enemies,
                "enemy killed"
            );
        }
    }
    debug!(
        tick = world.tick,
        bullets = world.bullets.len(),
        swords = world.swords.len(),
        "tick complete"
    );
}
