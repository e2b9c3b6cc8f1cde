//! First-person "fly mode" navigation for 3D viewport hosts.
//!
//! The host feeds pointer deltas, key state, modifier flags, scroll ticks
//! and a cancel signal into a [`FlyController`]; each step mutates a
//! host-owned [`CameraState`] in place and reports whether the session
//! continues. The controller owns nothing but its own smoothed-motion
//! state, so a session is created with [`FlyController::start`] and lives
//! until a cancel event terminates it.

mod camera;
mod config;
mod controller;
mod event;
mod motion;

pub use camera::{CameraState, NullPresentation, PointerPresentation};
pub use config::{ConfigError, SessionConfig};
pub use controller::{FlyController, StepOutcome};
pub use event::{EventKind, HeldKeys, InputEvent, Modifiers, MoveKey, ScrollDirection};
