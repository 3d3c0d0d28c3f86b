// Framework bootstrap for a headless arena run.

use crate::frameworks::config::Settings;
use crate::interface_adapters::presenter::{spawn_snapshot_serializer, spawn_status_serializer};
use crate::use_cases::{GameStatus, spawn_session};

use std::io::Result;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs one session until the game ends, the run limit passes, or Ctrl-C arrives.
pub async fn run(settings: Settings) -> Result<GameStatus> {
    let vision = settings.vision();
    tracing::info!(
        seed = settings.seed,
        enemies = settings.tuning.arena.enemy_count,
        tick_ms = settings.tick_interval.as_millis(),
        "starting arena"
    );

    let session = spawn_session(settings.session_settings());
    // Keep serialized world and status frames current for any presentation layer that attaches.
    let frames = spawn_snapshot_serializer(&session, vision);
    let mut status_frames = spawn_status_serializer(&session);
    let mut status_rx = session.subscribe_status();

    tokio::select! {
        finished = status_rx.wait_for(|s| s.is_finished()) => {
            if finished.is_err() {
                tracing::warn!("status channel closed before the game finished");
            }
        }
        signal = tokio::signal::ctrl_c() => {
            signal.inspect_err(|e| tracing::error!(error = %e, "failed to listen for ctrl-c"))?;
            tracing::info!("interrupt received; stopping session");
            if let Err(e) = session.shutdown() {
                tracing::warn!(error = %e, "session already stopping");
            }
        }
    }

    let last_frame_bytes = frames.borrow().len();
    let final_world = session.join().await;
    let status = *status_rx.borrow();
    // The serializer exits once the world task drops its status sender.
    while status_frames.changed().await.is_ok() {}
    let status_frame = status_frames.borrow().clone();
    match final_world {
        Some(world) => tracing::info!(
            ?status,
            tick = world.tick,
            player_hp = world.player.hp,
            remaining_enemies = world.remaining_enemies,
            last_frame_bytes,
            %status_frame,
            "arena finished"
        ),
        None => {
            return Err(std::io::Error::other("world task did not finish cleanly"));
        }
    }

    Ok(status)
}

pub async fn run_with_config() -> Result<GameStatus> {
    init_runtime();

    let settings = Settings::from_env().map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;

    run(settings).await
}
