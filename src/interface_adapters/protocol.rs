// Presentation DTOs. Everything here is a read-only, serializable copy of a finished tick.

use crate::domain::{BulletSnapshot, EnemySnapshot, PlayerSnapshot, SwordSnapshot};
use crate::use_cases::{GameStatus, WorldUpdate};
use serde::Serialize;

/// Messages a presentation layer receives.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum PresentationMessage {
    // Snapshot of the world for a given tick.
    WorldUpdate(WorldUpdateDto),
    // High-level status transitions (running, defeated, cleared).
    GameState(GameStatusDto),
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewportDto {
    pub width: f32,
    pub height: f32,
}

/// Snapshot of the world sent to the presentation layer on each tick.
#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    pub player: PlayerStateDto,
    pub enemies: Vec<EnemyStateDto>,
    pub bullets: Vec<BulletStateDto>,
    pub swords: Vec<SwordStateDto>,
    pub map_width: f32,
    pub map_height: f32,
    pub vision: ViewportDto,
    pub stage: u32,
    pub remaining_enemies: usize,
}

impl WorldUpdateDto {
    pub fn from_update(update: &WorldUpdate, vision: ViewportDto) -> Self {
        Self {
            tick: update.tick,
            player: PlayerStateDto::from(&update.player),
            enemies: update.enemies.iter().map(EnemyStateDto::from).collect(),
            bullets: update.bullets.iter().map(BulletStateDto::from).collect(),
            swords: update.swords.iter().map(SwordStateDto::from).collect(),
            map_width: update.map_width,
            map_height: update.map_height,
            vision,
            stage: update.stage,
            remaining_enemies: update.remaining_enemies,
        }
    }
}

fn fraction(hp: f32, max_hp: f32) -> f32 {
    if max_hp <= 0.0 {
        return 0.0;
    }
    (hp / max_hp).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerStateDto {
    pub x: f32,
    pub y: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub hp_fraction: f32,
    pub direction: f32,
    pub long_weapon: String,
    pub short_weapon: String,
}

impl From<&PlayerSnapshot> for PlayerStateDto {
    fn from(p: &PlayerSnapshot) -> Self {
        Self {
            x: p.x,
            y: p.y,
            hp: p.hp,
            max_hp: p.max_hp,
            hp_fraction: fraction(p.hp, p.max_hp),
            direction: p.direction,
            long_weapon: p.long_weapon.clone(),
            short_weapon: p.short_weapon.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyStateDto {
    pub x: f32,
    pub y: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub hp_fraction: f32,
    pub kind: &'static str,
}

impl From<&EnemySnapshot> for EnemyStateDto {
    fn from(e: &EnemySnapshot) -> Self {
        Self {
            x: e.x,
            y: e.y,
            hp: e.hp,
            max_hp: e.max_hp,
            hp_fraction: fraction(e.hp, e.max_hp),
            kind: e.kind.name(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletStateDto {
    pub x: f32,
    pub y: f32,
    pub direction: f32,
}

impl From<&BulletSnapshot> for BulletStateDto {
    fn from(b: &BulletSnapshot) -> Self {
        Self {
            x: b.x,
            y: b.y,
            direction: b.direction,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SwordStateDto {
    pub x: f32,
    pub y: f32,
    pub direction: f32,
    /// 1.0 when the swing starts, falling to 0.0 as it expires.
    pub fade: f32,
}

impl From<&SwordSnapshot> for SwordStateDto {
    fn from(s: &SwordSnapshot) -> Self {
        Self {
            x: s.x,
            y: s.y,
            direction: s.direction,
            fade: s.fade,
        }
    }
}

/// Game status sent to the presentation layer for UI flow.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum GameStatusDto {
    Starting,
    Running,
    Defeated,
    StageCleared,
    Stopped,
}

impl From<GameStatus> for GameStatusDto {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Starting => GameStatusDto::Starting,
            GameStatus::Running => GameStatusDto::Running,
            GameStatus::Defeated => GameStatusDto::Defeated,
            GameStatus::StageCleared => GameStatusDto::StageCleared,
            GameStatus::Stopped => GameStatusDto::Stopped,
        }
    }
}
