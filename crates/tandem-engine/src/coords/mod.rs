//! Drawable-size types shared by the event thread and the render thread.
//!
//! Sizes are physical pixels as reported by the window system.

mod viewport;

pub use viewport::{SharedViewport, Viewport};
