use glam::{Quat, Vec3};

/// The camera fields the controller reads and writes. Owned by the host;
/// the controller only ever borrows it for the duration of one step.
///
/// `orientation` maps camera space to world space: the view looks along
/// `orientation * -Z`, with world up being `+Z`. It is kept a unit
/// quaternion by the controller after every rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub orientation: Quat,
    pub position: Vec3,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            orientation: Quat::IDENTITY,
            position: Vec3::ZERO,
        }
    }
}

impl CameraState {
    pub fn new(orientation: Quat, position: Vec3) -> Self {
        Self {
            orientation: orientation.normalize(),
            position,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }
}

/// Host-side pointer presentation toggled at session boundaries.
///
/// Both calls are fire-and-forget: the controller does not depend on their
/// outcome, and a host that cannot grab the cursor simply leaves it free.
pub trait PointerPresentation {
    fn lock_pointer(&mut self);
    fn release_pointer(&mut self);
}

/// No-op presentation for headless hosts and tests.
#[derive(Debug, Default)]
pub struct NullPresentation;

impl PointerPresentation for NullPresentation {
    fn lock_pointer(&mut self) {}

    fn release_pointer(&mut self) {}
}
