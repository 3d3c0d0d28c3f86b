// Keyboard adapter: raw key names in, semantic action set out.

use crate::domain::{Action, ActionSet};
use std::collections::HashSet;

/// Maps a normalized (lowercase) key name to the action it controls.
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "w" | "arrowup" => Some(Action::MoveUp),
        "s" | "arrowdown" => Some(Action::MoveDown),
        "a" | "arrowleft" => Some(Action::MoveLeft),
        "d" | "arrowright" => Some(Action::MoveRight),
        "z" => Some(Action::FireRanged),
        "x" => Some(Action::FireMelee),
        _ => None,
    }
}

/// Held-key tracker. Key names are case-insensitive and repeats are idempotent.
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    held: HashSet<String>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press. Returns false when the key was already held (OS repeat).
    pub fn press(&mut self, key: &str) -> bool {
        self.held.insert(key.to_lowercase())
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(&key.to_lowercase());
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Actions implied by the currently held keys; unknown keys are ignored.
    pub fn actions(&self) -> ActionSet {
        self.held
            .iter()
            .filter_map(|k| action_for_key(k))
            .collect()
    }
}
