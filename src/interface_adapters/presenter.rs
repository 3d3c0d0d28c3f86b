use crate::interface_adapters::protocol::{
    GameStatusDto, PresentationMessage, ViewportDto, WorldUpdateDto,
};
use crate::use_cases::{GameStatus, SessionHandle, WorldUpdate};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, warn};

/// Serializes a finished tick for the presentation layer.
pub fn encode_update(update: &WorldUpdate, vision: &ViewportDto) -> Result<String, serde_json::Error> {
    let msg = PresentationMessage::WorldUpdate(WorldUpdateDto::from_update(update, vision.clone()));
    serde_json::to_string(&msg)
}

pub fn encode_status(status: GameStatus) -> Result<String, serde_json::Error> {
    serde_json::to_string(&PresentationMessage::GameState(GameStatusDto::from(status)))
}

/// Serializes each published tick once and stores the latest JSON for readers.
///
/// Readers that fall behind simply see the newest frame; intermediate ticks are skipped.
pub async fn snapshot_serializer(
    mut world_rx: watch::Receiver<Arc<WorldUpdate>>,
    latest_tx: watch::Sender<Arc<str>>,
    vision: ViewportDto,
) {
    loop {
        let update = world_rx.borrow_and_update().clone();
        match encode_update(&update, &vision) {
            Ok(txt) => {
                let _ = latest_tx.send(Arc::from(txt));
            }
            Err(e) => {
                error!(error = ?e, tick = update.tick, "failed to serialize world update");
            }
        }

        if world_rx.changed().await.is_err() {
            warn!("world updates channel closed; serializer exiting");
            break;
        }
    }
}

/// Encodes every observed status transition as a `GameState` message.
///
/// Status changes are rare; a reader that wakes late sees the newest status.
pub async fn status_serializer(
    mut status_rx: watch::Receiver<GameStatus>,
    latest_tx: watch::Sender<Arc<str>>,
) {
    loop {
        let status = *status_rx.borrow_and_update();
        match encode_status(status) {
            Ok(txt) => {
                debug!(?status, "status frame published");
                let _ = latest_tx.send(Arc::from(txt));
            }
            Err(e) => {
                error!(error = ?e, ?status, "failed to serialize game status");
            }
        }

        if status_rx.changed().await.is_err() {
            debug!("status channel closed; serializer exiting");
            break;
        }
    }
}

/// Spawns the status serializer for a session and returns the receiver of `GameState` frames.
pub fn spawn_status_serializer(session: &SessionHandle) -> watch::Receiver<Arc<str>> {
    let (latest_tx, latest_rx) = watch::channel::<Arc<str>>(Arc::from(""));
    tokio::spawn(status_serializer(session.subscribe_status(), latest_tx));
    latest_rx
}

/// Spawns the serializer for a session and returns the receiver of serialized frames.
pub fn spawn_snapshot_serializer(
    session: &SessionHandle,
    vision: ViewportDto,
) -> watch::Receiver<Arc<str>> {
    let (latest_tx, latest_rx) = watch::channel::<Arc<str>>(Arc::from(""));
    tokio::spawn(snapshot_serializer(
        session.subscribe_world(),
        latest_tx,
        vision,
    ));
    latest_rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Tuning, World};

    fn vision() -> ViewportDto {
        ViewportDto {
            width: 500.0,
            height: 500.0,
        }
    }

    #[test]
    fn when_status_is_encoded_then_json_is_tagged() {
        let txt = encode_status(GameStatus::StageCleared).expect("encodes");

        assert_eq!(txt, r#"{"type":"GameState","data":"StageCleared"}"#);
    }

    #[tokio::test]
    async fn when_world_is_published_then_serializer_stores_latest_frame() {
        let world = World::new(&Tuning::default(), Vec::new());
        let (world_tx, world_rx) = watch::channel(Arc::new(WorldUpdate::from(&world)));
        let (latest_tx, mut latest_rx) = watch::channel::<Arc<str>>(Arc::from(""));
        let task = tokio::spawn(snapshot_serializer(world_rx, latest_tx, vision()));

        latest_rx.changed().await.expect("first frame");
        assert!(latest_rx.borrow().contains(r#""tick":0"#));

        let mut next = WorldUpdate::from(&world);
        next.tick = 7;
        world_tx.send(Arc::new(next)).expect("serializer subscribed");
        latest_rx
            .wait_for(|txt| txt.contains(r#""tick":7"#))
            .await
            .expect("second frame");

        drop(world_tx);
        task.await.expect("serializer exits cleanly");
    }

    #[tokio::test]
    async fn when_status_changes_then_latest_game_state_frame_follows() {
        let (status_tx, status_rx) = watch::channel(GameStatus::Starting);
        let (latest_tx, mut latest_rx) = watch::channel::<Arc<str>>(Arc::from(""));
        let task = tokio::spawn(status_serializer(status_rx, latest_tx));

        latest_rx
            .wait_for(|txt| txt.contains("Starting"))
            .await
            .expect("initial status frame");

        status_tx.send(GameStatus::Defeated).expect("serializer subscribed");
        latest_rx
            .wait_for(|txt| &**txt == r#"{"type":"GameState","data":"Defeated"}"#)
            .await
            .expect("defeat frame");

        drop(status_tx);
        task.await.expect("serializer exits cleanly");
    }
}
