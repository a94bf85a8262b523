use anyhow::Result;

use crate::coords::Viewport;
use crate::time::FrameTime;

/// Per-iteration inputs handed to a [`FrameTarget`].
#[derive(Debug, Copy, Clone)]
pub struct FrameInput {
    /// Latest viewport published by the event thread.
    pub viewport: Viewport,
    pub time: FrameTime,
}

/// A graphics context driven by the render thread.
///
/// The value is moved onto the render thread at spawn and never touched by any
/// other thread afterwards; dropping it releases the context.
pub trait FrameTarget: Send + 'static {
    /// A recorded frame waiting to be presented.
    type Frame;

    /// Binds the context to the calling thread. Runs once before the first frame.
    fn make_current(&mut self) -> Result<()> {
        Ok(())
    }

    /// Clears, sets up the transforms and records one frame.
    ///
    /// `Ok(None)` skips presentation for this iteration (transient surface error).
    fn draw(&mut self, input: &FrameInput) -> Result<Option<Self::Frame>>;

    /// Presents a recorded frame. Called only while the window is alive and
    /// with the swap lock held.
    fn swap(&mut self, frame: Self::Frame);

    /// Releases a frame that will never be presented.
    fn discard(&mut self, frame: Self::Frame) {
        drop(frame);
    }
}
