//! Tandem engine crate.
//!
//! Splits a windowed wgpu application across two threads: the event thread
//! owns the window and blocks on events, the render thread owns the GPU
//! context and draws continuously until shutdown.

pub mod device;
pub mod window;
pub mod input;
pub mod time;

pub mod logging;
pub mod coords;
pub mod render;
pub mod sync;
