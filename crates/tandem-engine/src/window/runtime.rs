use std::sync::Arc;

use anyhow::{anyhow, Context, Result};

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy};
use winit::window::{Window, WindowId};

use crate::coords::{SharedViewport, Viewport};
use crate::device::{create_instance, Gpu, GpuInit};
use crate::input::platform::winit::translate_key_event;
use crate::input::{EventHandlers, HandlerControl};
use crate::logging::ErrorReporter;
use crate::render::{RenderSlot, RenderThread, SpinningQuad};
use crate::sync::SwapGate;

use super::config::RuntimeConfig;
use super::placement;
use super::session::Session;
use super::shutdown::shutdown;

/// Events sent to the event thread from elsewhere.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    /// The render thread ended with an error.
    RenderFailed(String),
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the event thread until the window is closed.
    ///
    /// Teardown runs on every exit path once the event loop exists. A render
    /// thread failure is returned as the error.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        let reporter = ErrorReporter::install();

        let event_loop = EventLoop::<RuntimeEvent>::with_user_event()
            .build()
            .context("failed to create winit EventLoop")?;

        let proxy = event_loop.create_proxy();
        let mut state = AppState::new(config, gpu_init, proxy, reporter);

        let loop_result = event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error");

        // No-op when `exiting` already ran it.
        state.shutdown_once();
        let shutdown_result = state.outcome.take().unwrap_or(Ok(()));

        if let Some(err) = state.failure.take() {
            return Err(err);
        }
        loop_result?;
        shutdown_result
    }
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    proxy: EventLoopProxy<RuntimeEvent>,

    gate: Arc<SwapGate>,
    viewport: Arc<SharedViewport>,
    session: Session,
    render: RenderSlot,

    /// First fatal error seen by the event thread.
    failure: Option<anyhow::Error>,
    close_requested: bool,
    outcome: Option<Result<()>>,
}

impl AppState {
    fn new(
        config: RuntimeConfig,
        gpu_init: GpuInit,
        proxy: EventLoopProxy<RuntimeEvent>,
        reporter: ErrorReporter,
    ) -> Self {
        Self {
            config,
            gpu_init,
            proxy,
            gate: Arc::new(SwapGate::new()),
            viewport: Arc::new(SharedViewport::new(Viewport::default())),
            session: Session::with_reporter(reporter),
            render: RenderSlot::default(),
            failure: None,
            close_requested: false,
            outcome: None,
        }
    }

    fn request_close(&mut self, event_loop: &ActiveEventLoop) {
        if !self.close_requested {
            log::info!("close requested");
        }
        self.close_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        self.request_close(event_loop);
    }

    /// Creates the window and GPU context, installs handlers, shows the window
    /// and starts the render thread.
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let size = self.config.initial_size;
        let mut attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(size)
            .with_resizable(self.config.resizable)
            .with_visible(false);

        match placement::primary_display(event_loop) {
            Some(monitor) => attrs = attrs.with_position(placement::centered_on(&monitor, size)),
            None => log::debug!("no monitor reported; using platform window placement"),
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        self.session.window = Some(window.clone());

        let initial = window.inner_size();
        self.viewport.update(initial.width, initial.height);

        let instance = create_instance(&self.gpu_init);
        let gpu = pollster::block_on(Gpu::new(&instance, window.clone(), &self.gpu_init))
            .context("GPU initialization failed for window")?;
        self.session.instance = Some(instance);

        let target = SpinningQuad::new(gpu, self.config.clear_color)
            .with_adapter_log(self.config.log_adapter)
            .with_debug_hook(self.gpu_init.debug);

        self.session.handlers = Some(EventHandlers::new(self.viewport.clone()));
        window.set_visible(true);

        let gate = self.gate.clone();
        let viewport = self.viewport.clone();
        let proxy = self.proxy.clone();
        self.render.start_with(move || {
            RenderThread::spawn(target, gate, viewport, move |result| {
                if let Err(e) = result {
                    // The event loop may already be gone during shutdown.
                    let _ = proxy.send_event(RuntimeEvent::RenderFailed(format!("{e:#}")));
                }
            })
        })?;

        log::info!(
            "window ready: {}x{} physical",
            initial.width,
            initial.height
        );
        Ok(())
    }

    fn handle_window_event(&mut self, event_loop: &ActiveEventLoop, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.request_close(event_loop),

            WindowEvent::KeyboardInput { .. } => {
                let Some(key) = translate_key_event(event) else {
                    return;
                };
                let control = match self.session.handlers.as_mut() {
                    Some(handlers) => handlers.on_key(key),
                    None => HandlerControl::Continue,
                };
                if control == HandlerControl::RequestClose {
                    self.request_close(event_loop);
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(handlers) = self.session.handlers.as_mut() {
                    if handlers.on_resize(size.width, size.height) {
                        log::debug!("viewport resized to {}x{}", size.width, size.height);
                    }
                }
            }

            _ => {}
        }
    }

    /// Runs the shutdown sequence the first time it is called.
    fn shutdown_once(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        let result = shutdown(
            &self.gate,
            self.render.take(),
            self.config.render_exit_timeout,
            &mut self.session,
        );
        self.outcome = Some(result);
    }
}

impl ApplicationHandler<RuntimeEvent> for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.render.is_started() || self.close_requested {
            return;
        }

        if let Err(e) = self.initialize(event_loop) {
            self.fail(event_loop, e.context("failed to initialize window"));
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let ours = self
            .session
            .window
            .as_ref()
            .is_some_and(|w| w.id() == window_id);
        if !ours {
            return;
        }

        self.handle_window_event(event_loop, &event);
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: RuntimeEvent) {
        match event {
            RuntimeEvent::RenderFailed(message) => {
                self.fail(event_loop, anyhow!("render thread failed: {message}"));
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.close_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown_once();
    }
}
