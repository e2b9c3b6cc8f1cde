use std::time::Instant;

use glam::Vec3;
use tracing::debug;

use crate::camera::{CameraState, PointerPresentation};
use crate::config::{ConfigError, SessionConfig};
use crate::event::{EventKind, InputEvent};

/// Vertical movement and yaw both reference world up, never camera up.
pub(crate) const WORLD_UP: Vec3 = Vec3::Z;

/// Steps with a larger gap are treated as a stall: integrating them would
/// teleport the camera by one huge displacement.
const MAX_STEP_SECS: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionPhase {
    Active,
    Terminated,
}

/// One fly-mode navigation session.
///
/// Created by [`FlyController::start`], driven by [`FlyController::step`]
/// once per input event, terminated by the cancel event. The controller
/// never stores the camera; the host passes it in per step and must not
/// mutate it elsewhere while the session is active.
#[derive(Debug)]
pub struct FlyController {
    pub(crate) config: SessionConfig,
    pub(crate) velocity: Vec3,
    /// Scroll-adjustable copy of `config.base_speed`.
    pub(crate) runtime_speed: f32,
    last_timestamp: Instant,
    phase: SessionPhase,
}

impl FlyController {
    /// Begin a session. Validates the config, then signals the host to
    /// enter cursor-lock presentation. The camera is not touched until the
    /// first step.
    pub fn start(
        config: SessionConfig,
        now: Instant,
        presentation: &mut dyn PointerPresentation,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        presentation.lock_pointer();
        debug!(
            base_speed = config.base_speed,
            sensitivity = config.sensitivity,
            "fly session started"
        );
        Ok(Self {
            runtime_speed: config.base_speed,
            config,
            velocity: Vec3::ZERO,
            last_timestamp: now,
            phase: SessionPhase::Active,
        })
    }

    /// Process one input event, mutating `camera` in place.
    ///
    /// Every non-cancel event advances the motion integration with the
    /// event's sampled key and modifier state, so movement keeps flowing
    /// through key repeats, scroll ticks and pointer motion alike.
    pub fn step(
        &mut self,
        event: &InputEvent,
        now: Instant,
        camera: &mut CameraState,
        presentation: &mut dyn PointerPresentation,
    ) -> StepOutcome {
        if self.phase == SessionPhase::Terminated {
            return StepOutcome::Terminate;
        }
        let dt = self.advance_clock(now);

        match event.kind {
            EventKind::Cancel => {
                presentation.release_pointer();
                self.phase = SessionPhase::Terminated;
                debug!("fly session ended");
                return StepOutcome::Terminate;
            }
            EventKind::Scroll(direction) => self.adjust_speed(direction),
            EventKind::PointerMove { dx, dy } => self.rotate(camera, dx, dy),
            EventKind::Key => {}
        }

        self.translate(camera, &event.held, &event.modifiers, dt);
        StepOutcome::Continue
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn runtime_speed(&self) -> f32 {
        self.runtime_speed
    }

    /// Elapsed seconds since the previous step, clamped so that clock
    /// jumps in either direction integrate as zero displacement.
    fn advance_clock(&mut self, now: Instant) -> f32 {
        let dt = now
            .saturating_duration_since(self.last_timestamp)
            .as_secs_f32();
        self.last_timestamp = now;
        if dt > MAX_STEP_SECS {
            0.0
        } else {
            dt
        }
    }
}
