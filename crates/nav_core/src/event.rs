use glam::Vec3;

/// One of the six direction keys a host can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
}

impl MoveKey {
    pub const ALL: [MoveKey; 6] = [
        MoveKey::Forward,
        MoveKey::Back,
        MoveKey::Left,
        MoveKey::Right,
        MoveKey::Up,
        MoveKey::Down,
    ];
}

/// The set of direction keys currently held, sampled fresh on every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn set(&mut self, key: MoveKey, held: bool) {
        match key {
            MoveKey::Forward => self.forward = held,
            MoveKey::Back => self.back = held,
            MoveKey::Left => self.left = held,
            MoveKey::Right => self.right = held,
            MoveKey::Up => self.up = held,
            MoveKey::Down => self.down = held,
        }
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        match key {
            MoveKey::Forward => self.forward,
            MoveKey::Back => self.back,
            MoveKey::Left => self.left,
            MoveKey::Right => self.right,
            MoveKey::Up => self.up,
            MoveKey::Down => self.down,
        }
    }

    pub fn any(&self) -> bool {
        MoveKey::ALL.iter().any(|key| self.is_held(*key))
    }

    /// Sum of unit contributions along the given camera axes. Not
    /// normalized; the caller decides what to do with a zero vector.
    pub fn direction(&self, forward: Vec3, right: Vec3, up: Vec3) -> Vec3 {
        let mut direction = Vec3::ZERO;
        if self.forward {
            direction += forward;
        }
        if self.back {
            direction -= forward;
        }
        if self.right {
            direction += right;
        }
        if self.left {
            direction -= right;
        }
        if self.up {
            direction += up;
        }
        if self.down {
            direction -= up;
        }
        direction
    }
}

/// Modifier flags, sampled fresh on every event rather than diffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub sprint: bool,
    pub slow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// What kind of input triggered this event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    /// Relative pointer motion since the previous sample. `dx` is positive
    /// when the pointer moved right, `dy` when it moved up.
    PointerMove { dx: f32, dy: f32 },
    Scroll(ScrollDirection),
    /// A direction key changed state (or repeated); the new key set is in
    /// the event's `held` facet.
    Key,
    Cancel,
}

/// One input event. A single real host event may carry several facets at
/// once (a key repeat also reports modifier flags), so the held-key and
/// modifier state always rides along with the triggering kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    pub kind: EventKind,
    pub held: HeldKeys,
    pub modifiers: Modifiers,
}

impl InputEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            held: HeldKeys::default(),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_held(mut self, held: HeldKeys) -> Self {
        self.held = held;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_roundtrip() {
        let mut held = HeldKeys::default();
        assert!(!held.any());
        for key in MoveKey::ALL {
            held.set(key, true);
            assert!(held.is_held(key));
        }
        held.set(MoveKey::Forward, false);
        assert!(!held.is_held(MoveKey::Forward));
        assert!(held.any());
    }

    #[test]
    fn test_direction_opposite_keys_cancel() {
        let held = HeldKeys {
            forward: true,
            back: true,
            ..HeldKeys::default()
        };
        let direction = held.direction(Vec3::NEG_Z, Vec3::X, Vec3::Z);
        assert_eq!(direction, Vec3::ZERO);
    }

    #[test]
    fn test_direction_diagonal_sums_axes() {
        let held = HeldKeys {
            forward: true,
            right: true,
            ..HeldKeys::default()
        };
        let direction = held.direction(Vec3::NEG_Z, Vec3::X, Vec3::Z);
        assert_eq!(direction, Vec3::new(1.0, 0.0, -1.0));
    }
}
