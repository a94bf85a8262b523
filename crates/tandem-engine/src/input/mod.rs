//! Input subsystem.
//!
//! Public API is platform-agnostic. The runtime translates winit events through
//! `platform::winit` and feeds them to the handlers in [`handlers`].

pub mod handlers;
pub(crate) mod platform;
mod types;

pub use handlers::{EventHandlers, HandlerControl};
pub use types::{Key, KeyEvent, KeyState};
