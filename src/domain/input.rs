// Semantic per-tick input. Raw key handling lives in interface_adapters::input.

/// A control the player can hold during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    FireRanged,
    FireMelee,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::FireRanged,
        Action::FireMelee,
    ];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of actions active for one tick, sampled once at tick start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet(u8);

impl ActionSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn remove(&mut self, action: Action) {
        self.0 &= !action.bit();
    }

    pub const fn contains(self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Builder-style insert, handy for literals in tests and scripted input.
    pub fn with(mut self, action: Action) -> Self {
        self.insert(action);
        self
    }

    pub fn iter(self) -> impl Iterator<Item = Action> {
        Action::ALL.into_iter().filter(move |a| self.contains(*a))
    }

    /// Raw movement axes in screen space (+y points down). Not normalized.
    pub fn movement_axes(self) -> (f32, f32) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.contains(Action::MoveUp) {
            dy -= 1.0;
        }
        if self.contains(Action::MoveDown) {
            dy += 1.0;
        }
        if self.contains(Action::MoveLeft) {
            dx -= 1.0;
        }
        if self.contains(Action::MoveRight) {
            dx += 1.0;
        }
        (dx, dy)
    }
}

impl FromIterator<Action> for ActionSet {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut set = ActionSet::empty();
        for action in iter {
            set.insert(action);
        }
        set
    }
}
