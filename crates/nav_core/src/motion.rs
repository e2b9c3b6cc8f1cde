use glam::{Quat, Vec3};
use tracing::trace;

use crate::camera::CameraState;
use crate::controller::{FlyController, WORLD_UP};
use crate::event::{HeldKeys, Modifiers, ScrollDirection};

/// Per-step displacement is normalized to this reference step rate, so the
/// configured speed means the same thing regardless of event frequency.
const REFERENCE_STEP_HZ: f32 = 60.0;

const SCROLL_UP_FACTOR: f32 = 1.1;
const SCROLL_DOWN_FACTOR: f32 = 0.9;

impl FlyController {
    /// Scale the runtime speed by one scroll tick. Deliberately unbounded:
    /// an up/down pair nets x0.99 and a long session may drift far from the
    /// configured base speed.
    pub(crate) fn adjust_speed(&mut self, direction: ScrollDirection) {
        let factor = match direction {
            ScrollDirection::Up => SCROLL_UP_FACTOR,
            ScrollDirection::Down => SCROLL_DOWN_FACTOR,
        };
        self.runtime_speed *= factor;
        trace!(speed = self.runtime_speed, "runtime speed adjusted");
    }

    /// Compose the pointer delta into the orientation.
    ///
    /// Yaw is a world-space pre-rotation about world up, pitch a local
    /// post-rotation about the camera right axis. In that order repeated
    /// yawing can never introduce roll.
    pub(crate) fn rotate(&self, camera: &mut CameraState, dx: f32, dy: f32) {
        let yaw = Quat::from_axis_angle(WORLD_UP, -dx * self.config.sensitivity);
        let pitch = Quat::from_axis_angle(Vec3::X, dy * self.config.sensitivity);
        camera.orientation = (yaw * camera.orientation * pitch).normalize();
    }

    /// Blend the smoothed velocity toward the target implied by the held
    /// keys and apply it to the camera position.
    pub(crate) fn translate(
        &mut self,
        camera: &mut CameraState,
        held: &HeldKeys,
        modifiers: &Modifiers,
        dt: f32,
    ) {
        let mut speed = self.runtime_speed;
        if modifiers.sprint {
            speed *= self.config.boost_factor;
        }
        if modifiers.slow {
            speed *= self.config.slow_factor;
        }

        // Vertical movement follows world up even while pitched.
        let direction = held.direction(camera.forward(), camera.right(), WORLD_UP);
        let target_velocity = if direction.length_squared() > 0.0 {
            direction.normalize() * speed
        } else {
            Vec3::ZERO
        };

        // Fixed per-step blend, not dt-normalized: event frequency shapes
        // the apparent acceleration time.
        self.velocity = self.velocity.lerp(target_velocity, self.config.smoothing);
        camera.position += self.velocity * dt * REFERENCE_STEP_HZ;
    }
}
