// Session orchestration: spawns one world task and hands out its channels.

use crate::domain::{ActionSet, World};
use crate::use_cases::game::{LoopSettings, world_task};
use crate::use_cases::{GameEvent, GameStatus, SessionError, WorldUpdate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Notify, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Configuration for spawning a session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Capacity for inbound input events.
    pub input_channel_capacity: usize,
    /// Seed for enemy placement.
    pub seed: u64,
    /// Loop timing and gameplay tuning.
    pub loop_settings: LoopSettings,
}

/// Channels into and out of a running world task.
pub struct SessionHandle {
    /// Sender for input events into the world task.
    input_tx: mpsc::Sender<GameEvent>,
    /// Latest completed tick; cloned for every subscriber.
    world_rx: watch::Receiver<Arc<WorldUpdate>>,
    /// High-level status (running, defeated, cleared).
    status_rx: watch::Receiver<GameStatus>,
    /// Wakes the world task so it exits at the next tick boundary.
    shutdown: Arc<Notify>,
    stopped: AtomicBool,
    task: JoinHandle<World>,
}

/// Builds a seeded world and spawns its world task. Must be called inside a Tokio runtime.
pub fn spawn_session(settings: SessionSettings) -> SessionHandle {
    let mut rng = ChaCha8Rng::seed_from_u64(settings.seed);
    let world = World::spawn(&settings.loop_settings.tuning, &mut rng);
    info!(seed = settings.seed, "session world spawned");
    spawn_session_with_world(world, settings)
}

/// Spawns a world task around an already-built world.
pub fn spawn_session_with_world(world: World, settings: SessionSettings) -> SessionHandle {
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(settings.input_channel_capacity);
    let (world_tx, world_rx) = watch::channel(Arc::new(WorldUpdate::from(&world)));
    let (status_tx, status_rx) = watch::channel(GameStatus::Starting);
    let shutdown = Arc::new(Notify::new());

    let task = tokio::spawn(world_task(
        world,
        input_rx,
        world_tx,
        status_tx,
        settings.loop_settings,
        shutdown.clone(),
    ));

    SessionHandle {
        input_tx,
        world_rx,
        status_rx,
        shutdown,
        stopped: AtomicBool::new(false),
        task,
    }
}

impl SessionHandle {
    /// Replaces the held action set. A full channel drops the input; the next one supersedes it anyway.
    pub fn send_input(&self, actions: ActionSet) -> Result<(), SessionError> {
        match self.input_tx.try_send(GameEvent::Input { actions }) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!("input channel full; dropping input");
                Ok(())
            }
            Err(mpsc::error::TrySendError::Closed(_)) => Err(SessionError::InputClosed),
        }
    }

    pub fn subscribe_world(&self) -> watch::Receiver<Arc<WorldUpdate>> {
        self.world_rx.clone()
    }

    pub fn subscribe_status(&self) -> watch::Receiver<GameStatus> {
        self.status_rx.clone()
    }

    /// Most recently completed tick.
    pub fn latest(&self) -> Arc<WorldUpdate> {
        self.world_rx.borrow().clone()
    }

    pub fn status(&self) -> GameStatus {
        *self.status_rx.borrow()
    }

    /// Asks the world task to stop at the next tick boundary.
    pub fn shutdown(&self) -> Result<(), SessionError> {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return Err(SessionError::AlreadyStopped);
        }
        self.shutdown.notify_one();
        Ok(())
    }

    /// Waits for the world task to finish and returns its final world.
    pub async fn join(self) -> Option<World> {
        match self.task.await {
            Ok(world) => Some(world),
            Err(e) => {
                error!(error = %e, "world task failed");
                None
            }
        }
    }
}
