//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window on the event thread, starts the
//! render thread and runs the shutdown sequence when the window closes.

mod config;
mod placement;
mod runtime;
mod session;
mod shutdown;

pub use config::RuntimeConfig;
pub use runtime::{Runtime, RuntimeEvent};
pub use shutdown::{shutdown, Teardown};
