//! Platform layer: window environment for viewport sizing and the event loop.
//!
//! - [`WindowViewport`] answers [`ViewportEnv`] queries from a winit window.
//! - [`run_viewport`] keeps camera sizes in sync with the window on resize.
//! - `web::BrowserViewport` (feature `web`) does the same from the DOM.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use corelib::camera::Camera;
use corelib::sizes::{AdaptiveSizes, FixedSizes, Sizes, ViewportEnv, ViewportSizes};
use corelib::time::FrameClock;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

#[cfg(feature = "web")]
pub mod web;

/// Named chrome bars (menu, header, toolbar) laid over the top of the window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChromeLayout {
    bars: HashMap<String, f32>,
}

impl ChromeLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a bar. Returns the previous height, if any.
    pub fn register(&mut self, selector: impl Into<String>, height: f32) -> Option<f32> {
        self.bars.insert(selector.into(), height)
    }

    pub fn remove(&mut self, selector: &str) -> Option<f32> {
        self.bars.remove(selector)
    }

    #[inline]
    pub fn height_of(&self, selector: &str) -> Option<f32> {
        self.bars.get(selector).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// [`ViewportEnv`] over a winit window: physical inner size plus chrome bars.
#[derive(Clone, Debug)]
pub struct WindowViewport {
    window: Arc<Window>,
    chrome: ChromeLayout,
}

impl WindowViewport {
    pub fn new(window: Arc<Window>, chrome: ChromeLayout) -> Self {
        Self { window, chrome }
    }

    #[inline]
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    #[inline]
    pub fn chrome_mut(&mut self) -> &mut ChromeLayout {
        &mut self.chrome
    }
}

impl ViewportEnv for WindowViewport {
    fn inner_size(&self) -> (f32, f32) {
        let PhysicalSize { width, height } = self.window.inner_size();
        (width as f32, height as f32)
    }

    fn element_height(&self, selector: &str) -> Option<f32> {
        self.chrome.height_of(selector)
    }
}

/// How camera sizes are derived.
#[derive(Clone, Debug, PartialEq)]
pub enum SizingMode {
    /// Follow the window, minus the chrome bar named by `chrome_selector`.
    Window { chrome_selector: Option<String> },
    Fixed(FixedSizes),
}

impl Default for SizingMode {
    fn default() -> Self {
        Self::Window {
            chrome_selector: None,
        }
    }
}

/// Settings for [`run_viewport`].
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportConfig {
    pub title: String,
    pub window_size: (u32, u32),
    pub sizing: SizingMode,
    pub chrome: ChromeLayout,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            title: "sizekit".to_string(),
            window_size: (1280, 720),
            sizing: SizingMode::default(),
            chrome: ChromeLayout::new(),
        }
    }
}

impl ViewportConfig {
    /// Sizes provider for `env` according to [`ViewportConfig::sizing`].
    pub fn build_sizes<E: ViewportEnv>(&self, env: E) -> ViewportSizes<E> {
        match &self.sizing {
            SizingMode::Window { chrome_selector } => {
                ViewportSizes::Adaptive(AdaptiveSizes::new(env, chrome_selector.as_deref()))
            }
            SizingMode::Fixed(fixed) => ViewportSizes::Fixed(*fixed),
        }
    }
}

/// Open a window and keep a camera fitted to the configured sizes until it closes.
pub fn run_viewport(config: ViewportConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = ViewportApp::new(config);
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated with an error")?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct ViewportState {
    window: Arc<Window>,
    sizes: ViewportSizes<WindowViewport>,
    camera: Camera,
    clock: FrameClock,
}

struct ViewportApp {
    config: ViewportConfig,
    state: Option<ViewportState>,
    error: Option<anyhow::Error>,
}

impl ViewportApp {
    fn new(config: ViewportConfig) -> Self {
        Self {
            config,
            state: None,
            error: None,
        }
    }

    fn create_state(&self, event_loop: &ActiveEventLoop) -> Result<ViewportState> {
        let (w, h) = self.config.window_size;
        let attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(w, h));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );

        let env = WindowViewport::new(Arc::clone(&window), self.config.chrome.clone());
        let sizes = self.config.build_sizes(env);
        let camera = Camera::looking_at_origin(&sizes, 4.0);

        let inner = window.inner_size();
        log::info!("Window created: {}x{}", inner.width, inner.height);
        log_sizes(&sizes);

        Ok(ViewportState {
            window,
            sizes,
            camera,
            clock: FrameClock::new(),
        })
    }
}

impl ApplicationHandler for ViewportApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match self.create_state(event_loop) {
            Ok(state) => self.state = Some(state),
            Err(err) => {
                log::error!("{err:#}");
                self.error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = self.state.as_mut() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested. Exiting event loop.");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                log::info!("Resized: {}x{}", new_size.width, new_size.height);
                state.refit();
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                log::info!("Scale factor changed: {:.3}", scale_factor);
                state.refit();
            }
            WindowEvent::RedrawRequested => {
                let dt = state.clock.tick();
                log::trace!(
                    "Frame dt={:.3}ms aspect={:.4}",
                    dt.as_secs_f64() * 1000.0,
                    state.camera.aspect
                );
            }
            _ => {}
        }
    }
}

impl ViewportState {
    /// Re-read the environment and fit the camera; invalid sizes keep the old aspect.
    fn refit(&mut self) {
        self.sizes.on_environment_changed();
        log_sizes(&self.sizes);
        if !self.camera.fit_to(&self.sizes) {
            let (w, h) = self.sizes.sizes();
            log::warn!(
                "Ignoring invalid viewport {}x{}; keeping aspect {:.4}",
                w,
                h,
                self.camera.aspect
            );
        }
        self.window.request_redraw();
    }
}

fn log_sizes(sizes: &ViewportSizes<WindowViewport>) {
    let (w, h) = sizes.sizes();
    let kind = if sizes.is_adaptive() { "adaptive" } else { "fixed" };
    log::info!("Camera sizes ({kind}): {w}x{h}, aspect {:.4}", sizes.aspect());
}
