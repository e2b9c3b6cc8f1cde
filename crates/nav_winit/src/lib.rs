//! winit host adapter for the fly-mode navigation controller.
//!
//! [`InputMapper`] turns winit window and device events into `nav_core`
//! input events, sampling held keys and modifier flags onto every event;
//! [`WindowPresentation`] implements the pointer-lock presentation contract
//! on a winit window.

mod mapper;
mod presentation;

pub use mapper::{InputMapper, KeyBindings};
pub use presentation::WindowPresentation;
