//! Frame timing for the render loop.
//!
//! The render thread owns one `FrameClock` and ticks it once per iteration; the
//! resulting delta drives animation.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
