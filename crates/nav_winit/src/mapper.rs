use nav_core::{EventKind, HeldKeys, InputEvent, Modifiers, MoveKey, ScrollDirection};
use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

/// Which physical keys drive the session. Defaults are the classic WASD
/// layout with E/Q for vertical movement and Escape to leave fly mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub cancel: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            back: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            up: KeyCode::KeyE,
            down: KeyCode::KeyQ,
            cancel: KeyCode::Escape,
        }
    }
}

impl KeyBindings {
    pub fn move_key(&self, code: KeyCode) -> Option<MoveKey> {
        if code == self.forward {
            Some(MoveKey::Forward)
        } else if code == self.back {
            Some(MoveKey::Back)
        } else if code == self.left {
            Some(MoveKey::Left)
        } else if code == self.right {
            Some(MoveKey::Right)
        } else if code == self.up {
            Some(MoveKey::Up)
        } else if code == self.down {
            Some(MoveKey::Down)
        } else {
            None
        }
    }
}

/// Maps winit events to controller input events, carrying the sampled
/// held-key and modifier state onto every event it emits.
#[derive(Debug, Default)]
pub struct InputMapper {
    bindings: KeyBindings,
    held: HeldKeys,
    modifiers: Modifiers,
}

impl InputMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HeldKeys::default(),
            modifiers: Modifiers::default(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }

    pub fn window_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.key_input(event.physical_key, event.state)
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers_changed(modifiers.state());
                None
            }
            WindowEvent::MouseWheel { delta, .. } => self.scroll(delta),
            _ => None,
        }
    }

    pub fn device_event(&mut self, event: &DeviceEvent) -> Option<InputEvent> {
        match event {
            DeviceEvent::MouseMotion { delta } => Some(self.pointer_delta(delta.0, delta.1)),
            _ => None,
        }
    }

    /// Key presses and releases. Public so hosts with their own event
    /// plumbing can feed key state directly.
    pub fn key_input(&mut self, key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
        let PhysicalKey::Code(code) = key else {
            return None;
        };
        let pressed = matches!(state, ElementState::Pressed);
        if code == self.bindings.cancel {
            return pressed.then(|| self.event(EventKind::Cancel));
        }
        let move_key = self.bindings.move_key(code)?;
        self.held.set(move_key, pressed);
        Some(self.event(EventKind::Key))
    }

    pub fn modifiers_changed(&mut self, state: ModifiersState) {
        // Shift sprints, Alt slow-walks.
        self.modifiers = Modifiers {
            sprint: state.shift_key(),
            slow: state.alt_key(),
        };
    }

    /// Relative pointer motion. winit reports `dy` growing downward; the
    /// controller wants upward-positive.
    pub fn pointer_delta(&mut self, dx: f64, dy: f64) -> InputEvent {
        self.event(EventKind::PointerMove {
            dx: dx as f32,
            dy: -dy as f32,
        })
    }

    pub fn scroll(&mut self, delta: &MouseScrollDelta) -> Option<InputEvent> {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 120.0,
        };
        if amount > 0.0 {
            Some(self.event(EventKind::Scroll(ScrollDirection::Up)))
        } else if amount < 0.0 {
            Some(self.event(EventKind::Scroll(ScrollDirection::Down)))
        } else {
            None
        }
    }

    fn event(&self, kind: EventKind) -> InputEvent {
        InputEvent {
            kind,
            held: self.held,
            modifiers: self.modifiers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    fn pressed(mapper: &mut InputMapper, code: KeyCode) -> Option<InputEvent> {
        mapper.key_input(PhysicalKey::Code(code), ElementState::Pressed)
    }

    fn released(mapper: &mut InputMapper, code: KeyCode) -> Option<InputEvent> {
        mapper.key_input(PhysicalKey::Code(code), ElementState::Released)
    }

    #[test]
    fn test_wasd_press_and_release_track_held_set() {
        let mut mapper = InputMapper::default();

        let event = pressed(&mut mapper, KeyCode::KeyW).expect("bound key emits an event");
        assert_eq!(event.kind, EventKind::Key);
        assert!(event.held.forward);

        let event = pressed(&mut mapper, KeyCode::KeyD).unwrap();
        assert!(event.held.forward && event.held.right);

        let event = released(&mut mapper, KeyCode::KeyW).unwrap();
        assert!(!event.held.forward);
        assert!(event.held.right);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut mapper = InputMapper::default();
        assert!(pressed(&mut mapper, KeyCode::KeyZ).is_none());
        assert!(mapper
            .key_input(PhysicalKey::Unidentified(winit::keyboard::NativeKeyCode::Unidentified), ElementState::Pressed)
            .is_none());
    }

    #[test]
    fn test_cancel_on_press_only() {
        let mut mapper = InputMapper::default();
        let event = pressed(&mut mapper, KeyCode::Escape).unwrap();
        assert_eq!(event.kind, EventKind::Cancel);
        assert!(released(&mut mapper, KeyCode::Escape).is_none());
    }

    #[test]
    fn test_modifiers_ride_along_with_key_events() {
        let mut mapper = InputMapper::default();
        mapper.modifiers_changed(ModifiersState::SHIFT | ModifiersState::ALT);
        let event = pressed(&mut mapper, KeyCode::KeyW).unwrap();
        assert!(event.modifiers.sprint);
        assert!(event.modifiers.slow);

        mapper.modifiers_changed(ModifiersState::empty());
        let event = released(&mut mapper, KeyCode::KeyW).unwrap();
        assert!(!event.modifiers.sprint);
        assert!(!event.modifiers.slow);
    }

    #[test]
    fn test_pointer_delta_flips_vertical_axis() {
        let mut mapper = InputMapper::default();
        let event = mapper.pointer_delta(12.0, -5.0);
        // Upward mouse motion (negative winit dy) becomes positive dy.
        assert_eq!(
            event.kind,
            EventKind::PointerMove { dx: 12.0, dy: 5.0 }
        );
    }

    #[test]
    fn test_pointer_event_samples_current_keys() {
        let mut mapper = InputMapper::default();
        pressed(&mut mapper, KeyCode::KeyW);
        let event = mapper.pointer_delta(1.0, 0.0);
        assert!(event.held.forward);
    }

    #[test]
    fn test_scroll_direction_from_line_and_pixel_deltas() {
        let mut mapper = InputMapper::default();
        let up = mapper.scroll(&MouseScrollDelta::LineDelta(0.0, 1.0)).unwrap();
        assert_eq!(up.kind, EventKind::Scroll(ScrollDirection::Up));

        let down = mapper
            .scroll(&MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -240.0)))
            .unwrap();
        assert_eq!(down.kind, EventKind::Scroll(ScrollDirection::Down));

        assert!(mapper.scroll(&MouseScrollDelta::LineDelta(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_rebound_keys() {
        let bindings = KeyBindings {
            forward: KeyCode::ArrowUp,
            back: KeyCode::ArrowDown,
            ..KeyBindings::default()
        };
        let mut mapper = InputMapper::new(bindings);
        assert!(pressed(&mut mapper, KeyCode::KeyW).is_none());
        let event = pressed(&mut mapper, KeyCode::ArrowUp).unwrap();
        assert!(event.held.forward);
    }
}
