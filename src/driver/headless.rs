use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use super::host::{EventKind, FrameRequest, Host, InputEvent, ListenerId};
use super::Stage;
use crate::canvas::Canvas;
use crate::error::MountError;

/// An in-memory host. Frames run only when asked to, which makes runs deterministic; every
/// frame request, listener and overlay stays observable.
#[derive(Debug)]
pub struct HeadlessHost {
    viewport: (u32, u32),
    surface_available: bool,
    rasterize: bool,

    next_frame: u64,
    pending_frames: BTreeSet<FrameRequest>,
    next_listener: u64,
    listeners: BTreeMap<ListenerId, EventKind>,

    overlays: usize,
    presented: u64,
    last_painted_pixels: Option<usize>,
}

impl HeadlessHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: (width, height),
            surface_available: true,
            rasterize: false,
            next_frame: 1,
            pending_frames: BTreeSet::new(),
            next_listener: 1,
            listeners: BTreeMap::new(),
            overlays: 0,
            presented: 0,
            last_painted_pixels: None,
        }
    }

    /// Every overlay creation fails, as if no drawing surface could be acquired.
    pub fn without_surface(mut self) -> Self {
        self.surface_available = false;
        self
    }

    /// Rasterize the canvas on every present instead of only recording the draw queue.
    pub fn with_rasterization(mut self) -> Self {
        self.rasterize = true;
        self
    }

    pub fn set_surface_available(&mut self, available: bool) {
        self.surface_available = available;
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    pub fn pending_frames(&self) -> usize {
        self.pending_frames.len()
    }

    /// Removes and returns the oldest scheduled frame.
    pub fn take_pending_frame(&mut self) -> Option<FrameRequest> {
        self.pending_frames.pop_first()
    }

    pub fn listeners(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.listeners.values().any(|listening| *listening == kind)
    }

    pub fn overlays(&self) -> usize {
        self.overlays
    }

    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    /// Pixels covered by the figure in the last presented frame, when rasterizing.
    pub fn last_painted_pixels(&self) -> Option<usize> {
        self.last_painted_pixels
    }
}

impl Host for HeadlessHost {
    fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    fn create_overlay(&mut self, width: u32, height: u32) -> Result<Canvas, MountError> {
        if !self.surface_available {
            return Err(MountError::SurfaceUnavailable(
                "headless host has no drawing surface".to_string(),
            ));
        }
        self.overlays += 1;
        Ok(Canvas::new(width, height))
    }

    fn present(&mut self, canvas: &mut Canvas) {
        if self.rasterize {
            canvas.render();
            self.last_painted_pixels = Some(canvas.painted_pixels());
        }
        self.presented += 1;
    }

    fn remove_overlay(&mut self, _canvas: Canvas) {
        self.overlays = self.overlays.saturating_sub(1);
    }

    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_frame);
        self.next_frame += 1;
        self.pending_frames.insert(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.pending_frames.remove(&request);
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

impl Stage<HeadlessHost> {
    /// Delivers `event` the way a host would: only if someone listens to its kind.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        if !self.host().is_listening(event.kind()) {
            trace!(?event, "no listener");
            return false;
        }
        self.handle_event(event);
        true
    }

    /// Changes the viewport and notifies listeners.
    pub fn resize_viewport(&mut self, width: u32, height: u32) {
        self.host_mut().set_viewport(width, height);
        self.dispatch(InputEvent::Resized { width, height });
    }

    /// Fires up to `frames` scheduled frame callbacks, one at a time. Returns how many frames
    /// actually ran.
    pub fn run_frames(&mut self, frames: usize) -> usize {
        let mut ran = 0;
        for _ in 0..frames {
            let Some(request) = self.host_mut().take_pending_frame() else {
                break;
            };
            if self.on_frame(request) {
                ran += 1;
            }
        }
        ran
    }
}
