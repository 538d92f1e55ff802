//! Standalone interactive window backed by winit.
//!
//! The window has no renderer; the rig's rendered pose is shown in the
//! title bar. A strip along the top edge stands in for a UI panel: while
//! the pointer is over it, drags and scrolling are ignored.
//!
//! Keys: `Escape` resets to the default pose, `Tab` toggles the camera
//! mode.
//!
//! ```no_run
//! # use camrig::Viewer;
//! Viewer::builder()
//!     .with_title("camrig")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use web_time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    camera::{CameraMode, CameraRig, ZoomOutcome},
    command::RigCommand,
    error::RigError,
    input::{InputCollector, InputEvent, MouseButton},
    options::RigOptions,
    util::frame_timing::FrameTiming,
};

/// Scroll units per wheel notch.
const LINE_SCROLL: f32 = 0.1;
/// Scroll units per pixel of touchpad scrolling.
const PIXEL_SCROLL: f32 = 0.001;
/// How often the title bar is refreshed.
const TITLE_INTERVAL: Duration = Duration::from_millis(250);

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<RigOptions>,
    title: String,
    ui_strip: f32,
    target_fps: u32,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: None,
            title: "camrig".into(),
            ui_strip: 32.0,
            target_fps: 60,
        }
    }

    /// Override the default rig options.
    #[must_use]
    pub fn with_options(mut self, options: RigOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title prefix.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Height in logical pixels of the simulated UI strip (0 disables it).
    #[must_use]
    pub fn with_ui_strip(mut self, height: f32) -> Self {
        self.ui_strip = height.max(0.0);
        self
    }

    /// Frame limit (0 = unlimited).
    #[must_use]
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
            ui_strip: self.ui_strip,
            target_fps: self.target_fps,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window that drives a [`CameraRig`] from live mouse input.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: RigOptions,
    title: String,
    ui_strip: f32,
    target_fps: u32,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), RigError> {
        let rig = CameraRig::new(&self.options)?;
        let event_loop =
            EventLoop::new().map_err(|e| RigError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            rig,
            collector: InputCollector::new(),
            timing: FrameTiming::new(self.target_fps),
            last_title: Instant::now(),
            title: self.title,
            ui_strip: self.ui_strip,
            scale_factor: 1.0,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| RigError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

struct ViewerApp {
    window: Option<Arc<Window>>,
    rig: CameraRig,
    collector: InputCollector,
    timing: FrameTiming,
    last_title: Instant,
    title: String,
    ui_strip: f32,
    scale_factor: f64,
}

impl ViewerApp {
    fn frame(&mut self) {
        if !self.timing.should_render() {
            return;
        }
        let dt = self.timing.tick();
        let input = self.collector.frame(dt);
        let report = self.rig.tick(&input);
        if report.zoom != ZoomOutcome::Ignored {
            log::debug!("zoom: {:?}", report.zoom);
        }

        let now = Instant::now();
        if now.duration_since(self.last_title) >= TITLE_INTERVAL {
            self.last_title = now;
            self.refresh_title();
        }
    }

    fn refresh_title(&self) {
        let Some(window) = &self.window else {
            return;
        };
        let pose = self.rig.rendered();
        let p = pose.position;
        let f = pose.forward();
        window.set_title(&format!(
            "{} | {:?} | pos ({:.2}, {:.2}, {:.2}) fwd ({:.2}, {:.2}, \
             {:.2}) | {:.0} fps",
            self.title,
            self.rig.mode(),
            p.x,
            p.y,
            p.z,
            f.x,
            f.y,
            f.z,
            self.timing.fps(),
        ));
    }

    fn handle_key(&mut self, code: KeyCode) {
        let command = match code {
            KeyCode::Escape => RigCommand::ResetToDefault,
            KeyCode::Tab => RigCommand::SetMode {
                mode: match self.rig.mode() {
                    CameraMode::FreeExploration => CameraMode::Constrained,
                    CameraMode::Constrained => CameraMode::FreeExploration,
                },
            },
            _ => return,
        };
        self.rig.execute(command);
        self.refresh_title();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            #[allow(clippy::cast_possible_truncation)]
            let logical_w = (f64::from(mon_size.width) / scale * 0.5) as u32;
            #[allow(clippy::cast_possible_truncation)]
            let logical_h = (f64::from(mon_size.height) / scale * 0.5) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                self.rig.shutdown();
                event_loop.exit();
                return;
            }
        };

        self.scale_factor = window.scale_factor();
        window.request_redraw();
        self.window = Some(window);
        self.refresh_title();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            self.rig.shutdown();
            event_loop.exit();
            return;
        }

        if self.window.is_none() {
            return;
        }

        match event {
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = scale_factor;
            }

            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                self.collector.handle_event(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(self.scale_factor);
                #[allow(clippy::cast_possible_truncation)]
                let (x, y) = (logical.x as f32, logical.y as f32);
                self.collector.handle_event(InputEvent::PointerOverUi {
                    over: y < self.ui_strip,
                });
                // Window coordinates grow downward; the rig expects y up.
                self.collector.handle_event(InputEvent::CursorMoved {
                    x,
                    y: -y,
                });
            }

            WindowEvent::CursorLeft { .. } => {
                self.collector
                    .handle_event(InputEvent::PointerOverUi { over: false });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                #[allow(clippy::cast_possible_truncation)]
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * LINE_SCROLL,
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y as f32 * PIXEL_SCROLL
                    }
                };
                self.collector
                    .handle_event(InputEvent::Scroll { delta: scroll });
            }

            WindowEvent::Focused(focused) => {
                self.collector
                    .handle_event(InputEvent::FocusChanged { focused });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_key(code);
                }
            }

            _ => (),
        }
    }
}
