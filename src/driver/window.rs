//! Desktop overlay host: a borderless, always-on-top, full-screen window presented with
//! softbuffer.
//!
//! Redraw requests stand in for frame callbacks. A requested frame is released as a redraw
//! once its timestep has elapsed, so the pet animates at the configured rate instead of as
//! fast as the event loop spins.

use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info, warn};
use winit::application::ApplicationHandler;
use winit::event::{TouchPhase, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId, WindowLevel};

use super::host::{EventKind, FrameRequest, Host, InputEvent, ListenerId};
use super::Stage;
use crate::canvas::Canvas;
use crate::config::PetConfig;
use crate::error::MountError;
use crate::Color;

type SoftbufferContext = softbuffer::Context<Arc<Window>>;
type SoftbufferSurface = softbuffer::Surface<Arc<Window>, Arc<Window>>;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

/// How the overlay window behaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayOptions {
    /// Let clicks pass through to the windows below. Most platforms then stop reporting the
    /// cursor to the overlay, so the pet only wanders.
    pub click_through: bool,
    /// Color behind the pet; softbuffer surfaces are opaque.
    pub backdrop: Color,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            click_through: false,
            backdrop: Color::hex(0x101010),
        }
    }
}

pub struct WindowHost {
    window: Arc<Window>,
    /// `None` when softbuffer could not attach to the window
    surface: Option<(SoftbufferContext, SoftbufferSurface)>,
    backdrop: Color,
    frame_interval: Duration,

    next_frame: u64,
    pending_frame: Option<FrameRequest>,
    frame_due_at: Instant,
    next_listener: u64,
    listeners: BTreeMap<ListenerId, EventKind>,
}

impl WindowHost {
    pub fn new(window: Arc<Window>, frame_interval: Duration, backdrop: Color) -> Self {
        let surface = softbuffer::Context::new(window.clone()).and_then(|context| {
            let surface = softbuffer::Surface::new(&context, window.clone())?;
            Ok((context, surface))
        });
        let surface = match surface {
            Ok(surface) => Some(surface),
            Err(error) => {
                warn!(%error, "softbuffer surface unavailable");
                None
            }
        };
        Self {
            window,
            surface,
            backdrop,
            frame_interval,
            next_frame: 1,
            pending_frame: None,
            frame_due_at: Instant::now(),
            next_listener: 1,
            listeners: BTreeMap::new(),
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.listeners.values().any(|listening| *listening == kind)
    }

    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.pending_frame
    }

    /// Releases the pending frame as a redraw if it is due, otherwise returns when it will be.
    fn poll_frame(&self, now: Instant) -> Option<Instant> {
        self.pending_frame?;
        if now >= self.frame_due_at {
            self.window.request_redraw();
            None
        } else {
            Some(self.frame_due_at)
        }
    }
}

impl Host for WindowHost {
    fn viewport(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn create_overlay(&mut self, width: u32, height: u32) -> Result<Canvas, MountError> {
        if self.surface.is_none() {
            return Err(MountError::SurfaceUnavailable(
                "softbuffer could not attach to the overlay window".to_string(),
            ));
        }
        self.window.set_visible(true);
        Ok(Canvas::new(width, height))
    }

    fn present(&mut self, canvas: &mut Canvas) {
        let Some((_, surface)) = self.surface.as_mut() else {
            return;
        };
        let (width, height) = canvas.size();
        let (Some(buffer_width), Some(buffer_height)) =
            (NonZeroU32::new(width), NonZeroU32::new(height))
        else {
            return;
        };
        if let Err(error) = surface.resize(buffer_width, buffer_height) {
            warn!(%error, "failed to resize softbuffer surface");
            return;
        }
        let mut buffer = match surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(error) => {
                warn!(%error, "failed to acquire softbuffer buffer");
                return;
            }
        };
        canvas.render_to_xrgb32(&mut buffer, self.backdrop);
        if let Err(error) = buffer.present() {
            warn!(%error, "failed to present frame");
        }
    }

    fn remove_overlay(&mut self, _canvas: Canvas) {
        self.window.set_visible(false);
    }

    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_frame);
        self.next_frame += 1;
        self.pending_frame = Some(request);
        self.frame_due_at = Instant::now() + self.frame_interval;
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending_frame == Some(request) {
            self.pending_frame = None;
        }
    }

    fn subscribe(&mut self, kind: EventKind) -> ListenerId {
        let listener = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(listener, kind);
        listener
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        self.listeners.remove(&listener);
    }
}

struct OverlayApp {
    config: PetConfig,
    options: OverlayOptions,
    stage: Option<Stage<WindowHost>>,
}

fn deliver(stage: &mut Stage<WindowHost>, event: InputEvent) {
    if stage.host().is_listening(event.kind()) {
        stage.handle_event(event);
    }
}

impl ApplicationHandler for OverlayApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.stage.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("mascot")
            .with_decorations(false)
            .with_transparent(true)
            .with_visible(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_fullscreen(Some(Fullscreen::Borderless(None)));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(error) => {
                warn!(%error, "failed to create overlay window");
                event_loop.exit();
                return;
            }
        };
        if self.options.click_through {
            if let Err(error) = window.set_cursor_hittest(false) {
                warn!(%error, "click-through not supported");
            }
        }

        let frame_interval = Duration::from_secs_f64(self.config.timestep_s);
        let host = WindowHost::new(window, frame_interval, self.options.backdrop);
        let mut stage = Stage::new(host);
        if let Err(error) = stage.mount(self.config.clone()) {
            warn!(%error, "running without a pet");
        }
        self.stage = Some(stage);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(stage) = self.stage.as_mut() else {
            return;
        };
        if window_id != stage.host().window().id() {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                if let Some(handle) = stage.active() {
                    stage.dispose(handle);
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => deliver(
                stage,
                InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                },
            ),
            WindowEvent::CursorMoved { position, .. } => deliver(
                stage,
                InputEvent::PointerMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                },
            ),
            WindowEvent::Touch(touch) => {
                let (x, y) = (touch.location.x as f32, touch.location.y as f32);
                match touch.phase {
                    TouchPhase::Started => deliver(stage, InputEvent::TouchStarted { x, y }),
                    TouchPhase::Moved => deliver(stage, InputEvent::TouchMoved { x, y }),
                    TouchPhase::Ended | TouchPhase::Cancelled => {}
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(request) = stage.host().pending_frame() {
                    stage.on_frame(request);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(stage) = self.stage.as_ref() else {
            return;
        };
        match stage.host().poll_frame(Instant::now()) {
            Some(due) => event_loop.set_control_flow(ControlFlow::WaitUntil(due)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.stage.take().is_some() {
            debug!("overlay closed");
        }
    }
}

/// Opens the overlay window, mounts a pet configured by `config` and runs until the window is
/// closed.
pub fn run_overlay(config: PetConfig, options: OverlayOptions) -> Result<(), OverlayError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = OverlayApp {
        config,
        options,
        stage: None,
    };
    info!(strategy = ?app.config.strategy, "starting overlay");
    event_loop.run_app(&mut app)?;
    Ok(())
}
