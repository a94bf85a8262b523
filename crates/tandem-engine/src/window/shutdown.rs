//! Event-thread shutdown sequence.
//!
//! Order:
//! 1. set the shutdown flag under the swap lock
//! 2. wait (bounded) for the render thread to confirm it stopped
//! 3. destroy the window under the swap lock
//! 4. release event handlers
//! 5. terminate the graphics subsystem
//! 6. release the global error reporter
//!
//! Steps 1 and 3 both hold the lock, and no swap can run between them: after
//! step 1 every locked re-check on the render thread sees the flag.
//!
//! When the wait in step 2 times out, the render thread is detached and its
//! surface still holds a window handle. Step 3 then only hides the window and
//! drops the event thread's handle; the native window is released when the
//! detached thread drops its surface, off the event thread. No present can
//! reach it after step 3, since the flag is already set.

use std::time::Duration;

use anyhow::Result;

use crate::render::{RenderExit, RenderThread};
use crate::sync::SwapGate;

/// Event-thread resources torn down by [`shutdown`], called in declaration order.
pub trait Teardown {
    /// Runs with the swap lock held and the shutdown flag already set.
    fn destroy_window(&mut self);
    fn release_handlers(&mut self);
    fn terminate(&mut self);
    fn release_error_reporter(&mut self);
}

/// Runs the shutdown sequence and returns the render thread's outcome.
///
/// Every teardown step runs regardless of how the render thread ended.
pub fn shutdown<T: Teardown>(
    gate: &SwapGate,
    render: Option<RenderThread>,
    render_exit_timeout: Duration,
    teardown: &mut T,
) -> Result<()> {
    if gate.close() {
        log::info!("shutdown: render loop signalled");
    }

    let outcome = match render {
        Some(thread) => match thread.wait(render_exit_timeout) {
            RenderExit::Stopped(result) => {
                log::debug!("shutdown: render thread confirmed exit");
                result
            }
            RenderExit::TimedOut => {
                log::warn!(
                    "shutdown: render thread did not stop within {render_exit_timeout:?}; destroying window anyway"
                );
                Ok(())
            }
        },
        None => Ok(()),
    };

    gate.destroy_with(|| teardown.destroy_window());
    teardown.release_handlers();
    teardown.terminate();
    teardown.release_error_reporter();

    log::info!("shutdown complete");
    outcome
}
