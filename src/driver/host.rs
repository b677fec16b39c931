use crate::canvas::Canvas;
use crate::error::MountError;

/// A scheduled frame callback. The host hands it back to [`Stage::on_frame`](super::Stage::on_frame)
/// when the frame is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(pub u64);

/// An input listener registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Resize,
    PointerMove,
    TouchStart,
    TouchMove,
}

/// The event kinds a mounted pet listens to.
pub const SUBSCRIBED_EVENTS: [EventKind; 4] = [
    EventKind::Resize,
    EventKind::PointerMove,
    EventKind::TouchStart,
    EventKind::TouchMove,
];

/// Input delivered by the host, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Resized { width: u32, height: u32 },
    PointerMoved { x: f32, y: f32 },
    TouchStarted { x: f32, y: f32 },
    TouchMoved { x: f32, y: f32 },
}

impl InputEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            InputEvent::Resized { .. } => EventKind::Resize,
            InputEvent::PointerMoved { .. } => EventKind::PointerMove,
            InputEvent::TouchStarted { .. } => EventKind::TouchStart,
            InputEvent::TouchMoved { .. } => EventKind::TouchMove,
        }
    }
}

/// The environment a pet is mounted into: it owns the visible overlay, schedules frames and
/// delivers input.
pub trait Host {
    /// Current viewport size in pixels.
    fn viewport(&self) -> (u32, u32);

    /// Creates the full-viewport overlay the pet draws on.
    fn create_overlay(&mut self, width: u32, height: u32) -> Result<Canvas, MountError>;

    /// Shows the overlay's current contents.
    fn present(&mut self, canvas: &mut Canvas);

    fn remove_overlay(&mut self, canvas: Canvas);

    /// Schedules one frame callback.
    fn request_frame(&mut self) -> FrameRequest;

    /// Cancels a scheduled frame. Unknown or already delivered requests are ignored.
    fn cancel_frame(&mut self, request: FrameRequest);

    fn subscribe(&mut self, kind: EventKind) -> ListenerId;

    /// Unknown listeners are ignored.
    fn unsubscribe(&mut self, listener: ListenerId);
}
