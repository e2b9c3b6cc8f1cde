//! Minimal fly-mode host: opens a window, starts a navigation session and
//! drives the controller from winit events. Run with RUST_LOG=trace to see
//! the camera move.

use std::time::Instant;

use anyhow::{Context, Result};
use nav_core::{CameraState, FlyController, SessionConfig, StepOutcome};
use nav_winit::{InputMapper, WindowPresentation};
use tracing::{error, trace};
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = FlyApp::default();
    event_loop.run_app(&mut app).context("event loop error")?;
    Ok(())
}

#[derive(Default)]
struct FlyApp {
    window: Option<Window>,
    mapper: InputMapper,
    camera: CameraState,
    session: Option<FlyController>,
}

impl FlyApp {
    fn feed(&mut self, event: nav_core::InputEvent, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(session)) = (&self.window, &mut self.session) else {
            return;
        };
        let mut presentation = WindowPresentation::new(window);
        let outcome = session.step(&event, Instant::now(), &mut self.camera, &mut presentation);
        trace!(position = ?self.camera.position, "stepped");
        if outcome == StepOutcome::Terminate {
            event_loop.exit();
        }
    }
}

impl ApplicationHandler for FlyApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attributes = WindowAttributes::default().with_title("freefly");
        let window = match event_loop.create_window(attributes) {
            Ok(window) => window,
            Err(err) => {
                error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let mut presentation = WindowPresentation::new(&window);
        match FlyController::start(SessionConfig::default(), Instant::now(), &mut presentation) {
            Ok(session) => self.session = Some(session),
            Err(err) => {
                error!("invalid session config: {err}");
                event_loop.exit();
                return;
            }
        }
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }
        if let Some(input) = self.mapper.window_event(&event) {
            self.feed(input, event_loop);
        }
    }

    fn device_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some(input) = self.mapper.device_event(&event) {
            self.feed(input, event_loop);
        }
    }
}
