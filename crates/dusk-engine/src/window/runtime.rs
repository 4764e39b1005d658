use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::translate_window_event;
use crate::input::InputState;
use crate::time::{FrameClock, FrameTime, TickClock};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
    /// Fixed simulation tick interval.
    pub tick_interval: Duration,
    /// Maximum ticks delivered back-to-back before the schedule re-anchors.
    pub max_catch_up_ticks: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "dusk".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            resizable: false,
            tick_interval: Duration::from_millis(16),
            max_catch_up_ticks: TickClock::DEFAULT_MAX_CATCH_UP,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and runs `app` until it exits or the window closes.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    input: InputState,
    ticks: TickClock,
    frames: FrameClock,

    exit_requested: bool,
    /// Setup error surfaced from `Runtime::run` once the loop stops.
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        let ticks = TickClock::new(config.tick_interval).with_catch_up(config.max_catch_up_ticks);
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            input: InputState::default(),
            ticks,
            frames: FrameClock::default(),
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")
    }

    fn request_redraw(&self) {
        if let Some(entry) = &self.entry {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn resize_to_window(&mut self) {
        if let Some(entry) = self.entry.as_mut() {
            let new_size = entry.with_window(|w| w.inner_size());
            log::debug!("resize: {}x{}", new_size.width, new_size.height);
            entry.with_gpu_mut(|gpu| gpu.resize(new_size));
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, input, frames) = (&mut self.app, &self.input, &mut self.frames);
        let Some(entry) = self.entry.as_mut() else { return };

        let control = entry.with_mut(|fields| {
            let ft: FrameTime = frames.tick();
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    window: fields.window,
                },
                gpu: fields.gpu,
                input,
                time: ft,
            };
            app.on_frame(&mut ctx)
        });

        if control == AppControl::Exit {
            self.request_exit(event_loop);
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                let size = entry.with_window(|w| w.inner_size());
                log::info!(
                    "window \"{}\" created ({}x{} physical)",
                    self.config.title,
                    size.width,
                    size.height
                );
                self.entry = Some(entry);
            }
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.failure = Some(e);
                self.request_exit(event_loop);
                return;
            }
        }

        let now = Instant::now();
        self.ticks.reset(now);
        self.frames.reset(now);
        self.request_redraw();
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.ticks.deadline()));
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        if self.entry.is_none() {
            return;
        }

        let now = Instant::now();
        let mut ticked = false;
        while let Some(tick) = self.ticks.poll(now) {
            ticked = true;
            if self.app.on_tick(tick) == AppControl::Exit {
                self.request_exit(event_loop);
                return;
            }
        }

        if ticked {
            self.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.ticks.deadline()));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if let Some(ev) = translate_window_event(&self.input, &event) {
            self.input.apply_event(&ev);
            if self.app.on_input(&ev, &self.input) == AppControl::Exit {
                self.request_exit(event_loop);
                return;
            }
        }

        match &event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.entry = None;
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.resize_to_window();
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}
