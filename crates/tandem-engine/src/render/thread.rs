use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::coords::SharedViewport;
use crate::logging::panic_message;
use crate::sync::SwapGate;
use crate::time::FrameClock;

use super::{FrameInput, FrameTarget};

/// How a render thread ended, as observed by the event thread.
#[derive(Debug)]
pub enum RenderExit {
    /// The thread confirmed its exit; carries the loop's outcome.
    Stopped(Result<()>),
    /// No confirmation within the wait budget. The thread is detached.
    TimedOut,
}

/// Handle to the spawned render thread.
pub struct RenderThread {
    handle: JoinHandle<Result<()>>,
    done: Receiver<()>,
}

impl RenderThread {
    /// Spawns the render thread and moves `target` onto it.
    ///
    /// `on_exit` runs on the render thread after the target has been dropped,
    /// with the loop's outcome (a panic is reported as an error).
    pub fn spawn<T, F>(
        target: T,
        gate: Arc<SwapGate>,
        viewport: Arc<SharedViewport>,
        on_exit: F,
    ) -> Result<Self>
    where
        T: FrameTarget,
        F: FnOnce(&Result<()>) + Send + 'static,
    {
        let (done_tx, done) = mpsc::sync_channel(1);

        let handle = thread::Builder::new()
            .name("render".to_string())
            .spawn(move || {
                let result = panic::catch_unwind(AssertUnwindSafe(|| {
                    render_loop(target, &gate, &viewport)
                }))
                .unwrap_or_else(|payload| {
                    Err(anyhow!("render loop panicked: {}", panic_message(payload.as_ref())))
                });

                match &result {
                    Ok(()) => log::info!("render thread stopped"),
                    Err(e) => log::error!("render thread failed: {e:#}"),
                }

                on_exit(&result);
                // The receiver may already be gone if shutdown timed out.
                let _ = done_tx.send(());
                result
            })
            .context("failed to spawn render thread")?;

        Ok(Self { handle, done })
    }

    /// Waits up to `timeout` for the thread to confirm its exit.
    pub fn wait(self, timeout: Duration) -> RenderExit {
        match self.done.recv_timeout(timeout) {
            // Disconnected: the thread ended without reaching the send.
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                let result = self.handle.join().unwrap_or_else(|payload| {
                    Err(anyhow!("render thread panicked: {}", panic_message(payload.as_ref())))
                });
                RenderExit::Stopped(result)
            }
            Err(RecvTimeoutError::Timeout) => RenderExit::TimedOut,
        }
    }
}

/// The render loop proper: `Starting → ContextCurrent → Rendering* → Stopped`.
///
/// Consumes `target`, so the graphics context is released when the loop returns.
fn render_loop<T: FrameTarget>(mut target: T, gate: &SwapGate, viewport: &SharedViewport) -> Result<()> {
    target
        .make_current()
        .context("failed to make graphics context current")?;
    log::debug!("render thread: context current");

    let mut clock = FrameClock::new();
    let mut presented: u64 = 0;

    while !gate.is_destroyed() {
        let input = FrameInput {
            viewport: viewport.get(),
            time: clock.tick(),
        };

        let Some(frame) = target.draw(&input)? else {
            continue;
        };

        // Re-check under the lock: shutdown may have begun since the loop test.
        if let Some(_guard) = gate.lock_alive() {
            target.swap(frame);
            presented += 1;
            if presented == 1 {
                log::debug!("render thread: first frame presented");
            }
        } else {
            target.discard(frame);
        }
    }

    log::debug!("render thread: shutdown observed after {presented} frames");
    Ok(())
}

/// Tracks the one render thread a run is allowed to start.
#[derive(Default)]
pub enum RenderSlot {
    #[default]
    Idle,
    Running(RenderThread),
    Taken,
}

impl RenderSlot {
    /// Starts the render thread with `spawn` unless one was already started.
    ///
    /// Returns whether `spawn` ran.
    pub fn start_with(&mut self, spawn: impl FnOnce() -> Result<RenderThread>) -> Result<bool> {
        if !matches!(self, RenderSlot::Idle) {
            return Ok(false);
        }
        *self = RenderSlot::Running(spawn()?);
        Ok(true)
    }

    pub fn is_started(&self) -> bool {
        !matches!(self, RenderSlot::Idle)
    }

    /// Takes the running thread out for shutdown. Later starts are refused.
    pub fn take(&mut self) -> Option<RenderThread> {
        match std::mem::replace(self, RenderSlot::Taken) {
            RenderSlot::Running(thread) => Some(thread),
            RenderSlot::Idle | RenderSlot::Taken => None,
        }
    }
}
