// Use-case level inputs/outputs for the game loop.

use crate::domain::{
    ActionSet, BulletSnapshot, CombatEvent, EnemySnapshot, Outcome, PlayerSnapshot, SwordSnapshot,
    World,
};
use std::fmt;

#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Replaces the held action set; the world task samples the latest one per tick.
    Input { actions: ActionSet },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Starting,
    Running,
    Defeated,
    StageCleared,
    /// Stopped by shutdown or the run limit while still in progress.
    Stopped,
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => GameStatus::Running,
            Outcome::Defeated => GameStatus::Defeated,
            Outcome::StageCleared => GameStatus::StageCleared,
        }
    }
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            GameStatus::Defeated | GameStatus::StageCleared | GameStatus::Stopped
        )
    }
}

/// Read-only view of a completed tick, published for presentation.
#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    pub player: PlayerSnapshot,
    pub enemies: Vec<EnemySnapshot>,
    pub bullets: Vec<BulletSnapshot>,
    pub swords: Vec<SwordSnapshot>,
    pub map_width: f32,
    pub map_height: f32,
    pub stage: u32,
    pub remaining_enemies: usize,
    pub events: Vec<CombatEvent>,
}

impl From<&World> for WorldUpdate {
    fn from(w: &World) -> Self {
        Self {
            tick: w.tick,
            player: PlayerSnapshot::from(&w.player),
            enemies: w.enemies.iter().map(EnemySnapshot::from).collect(),
            bullets: w.bullets.iter().map(BulletSnapshot::from).collect(),
            swords: w.swords.iter().map(SwordSnapshot::from).collect(),
            map_width: w.map.width,
            map_height: w.map.height,
            stage: w.stage,
            remaining_enemies: w.remaining_enemies,
            events: w.events.clone(),
        }
    }
}

/// Errors returned by session handle operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The world task has exited and no longer accepts input.
    InputClosed,
    /// Shutdown was already requested for this session.
    AlreadyStopped,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InputClosed => f.write_str("world task is no longer accepting input"),
            SessionError::AlreadyStopped => f.write_str("session shutdown already requested"),
        }
    }
}

impl std::error::Error for SessionError {}
