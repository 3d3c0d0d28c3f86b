// Use cases layer: application workflows around the simulation core.

pub mod game;
pub mod session;
pub mod types;

pub use game::{LoopSettings, world_task};
pub use session::{SessionHandle, SessionSettings, spawn_session, spawn_session_with_world};
pub use types::{GameEvent, GameStatus, SessionError, WorldUpdate};
