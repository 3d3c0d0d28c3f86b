use crate::domain::input::ActionSet;
use crate::domain::state::{MapBounds, Player, Position};

/// Moves the player one tick according to held movement actions.
///
/// Diagonals are normalized so every direction travels exactly `speed`. The
/// facing only changes when the resulting vector is nonzero.
pub fn move_player(player: &mut Player, actions: ActionSet, map: MapBounds) {
    let (dx, dy) = actions.movement_axes();
    if dx == 0.0 && dy == 0.0 {
        return;
    }

    let length = (dx * dx + dy * dy).sqrt();
    let step_x = dx / length * player.speed;
    let step_y = dy / length * player.speed;

    player.position = map.clamp(Position::new(
        player.position.x + step_x,
        player.position.y + step_y,
    ));
    player.direction = step_y.atan2(step_x);
}

/// Returns `from` stepped `speed` units straight toward `target`.
///
/// Coincident points stay put instead of dividing by zero.
pub fn seek(from: Position, target: Position, speed: f32) -> Position {
    let dx = target.x - from.x;
    let dy = target.y - from.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance <= 0.0 {
        return from;
    }

    Position::new(
        from.x + dx / distance * speed,
        from.y + dy / distance * speed,
    )
}
