//! Mounting, frame scheduling and teardown of the pet.
//!
//! A [`Stage`] owns a [`Host`] and at most one mounted pet. Mounting again tears the previous
//! pet down first. Every frame callback is matched against the pending request of the active
//! pet, so a callback that arrives after teardown, or after a newer pet was mounted, does
//! nothing. The next frame is requested only after the current one was presented.

use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use crate::canvas::Canvas;
use crate::config::PetConfig;
use crate::error::MountError;
use crate::pet::Pet;

mod headless;
mod host;
#[cfg(feature = "window")]
mod window;

pub use headless::HeadlessHost;
pub use host::{EventKind, FrameRequest, Host, InputEvent, ListenerId, SUBSCRIBED_EVENTS};
#[cfg(feature = "window")]
pub use window::{run_overlay, OverlayError, OverlayOptions, WindowHost};

/// Identifies one mounted pet. Stale handles are harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PetHandle(u64);

struct Instance {
    id: u64,
    pet: Pet,
    canvas: Canvas,
    listeners: SmallVec<[ListenerId; 4]>,
    pending_frame: Option<FrameRequest>,
}

pub struct Stage<H: Host> {
    host: H,
    instance: Option<Instance>,
    next_instance_id: u64,
}

impl<H: Host> Stage<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            instance: None,
            next_instance_id: 1,
        }
    }

    /// Mounts a pet with `config`, replacing the active one.
    ///
    /// An invalid configuration is rejected before anything changes. If the host cannot
    /// provide an overlay the error is logged and returned, and no pet is left mounted: the one
    /// being replaced is disposed before the overlay is requested.
    pub fn mount(&mut self, config: PetConfig) -> Result<PetHandle, MountError> {
        config.validate()?;

        if let Some(previous) = self.instance.take() {
            debug!(instance = previous.id, "replacing mounted pet");
            self.teardown(previous);
        }

        let (width, height) = self.host.viewport();
        let canvas = match self.host.create_overlay(width, height) {
            Ok(canvas) => canvas,
            Err(error) => {
                warn!(%error, "pet not mounted");
                return Err(error);
            }
        };

        let pet = Pet::new(width as f32, height as f32, &config);
        let listeners = SUBSCRIBED_EVENTS
            .iter()
            .map(|kind| self.host.subscribe(*kind))
            .collect();
        let pending_frame = Some(self.host.request_frame());

        let id = self.next_instance_id;
        self.next_instance_id += 1;
        info!(
            instance = id,
            width,
            height,
            strategy = ?config.strategy,
            "pet mounted"
        );
        self.instance = Some(Instance {
            id,
            pet,
            canvas,
            listeners,
            pending_frame,
        });
        Ok(PetHandle(id))
    }

    /// Routes host input to the active pet.
    pub fn handle_event(&mut self, event: InputEvent) {
        let Some(instance) = self.instance.as_mut() else {
            return;
        };
        match event {
            InputEvent::Resized { width, height } => {
                debug!(width, height, "viewport resized");
                instance.canvas.resize(width, height);
                instance.pet.resize(width as f32, height as f32);
            }
            InputEvent::PointerMoved { x, y }
            | InputEvent::TouchStarted { x, y }
            | InputEvent::TouchMoved { x, y } => instance.pet.set_target(x, y),
        }
    }

    /// Runs one frame if `request` is the active pet's pending frame. Returns whether a frame
    /// was run.
    pub fn on_frame(&mut self, request: FrameRequest) -> bool {
        let Some(instance) = self.instance.as_mut() else {
            trace!(?request, "frame callback without a mounted pet");
            return false;
        };
        if instance.pending_frame != Some(request) {
            trace!(?request, "stale frame callback");
            return false;
        }

        instance.pending_frame = None;
        instance.pet.update();
        instance.pet.draw(&mut instance.canvas);
        self.host.present(&mut instance.canvas);
        instance.pending_frame = Some(self.host.request_frame());
        true
    }

    /// Tears down the pet `handle` refers to. Disposing a stale handle, or disposing twice, is a
    /// no-op. Returns whether a pet was torn down.
    pub fn dispose(&mut self, handle: PetHandle) -> bool {
        match self.instance.take() {
            Some(instance) if instance.id == handle.0 => {
                self.teardown(instance);
                true
            }
            other => {
                self.instance = other;
                false
            }
        }
    }

    pub fn active(&self) -> Option<PetHandle> {
        self.instance.as_ref().map(|instance| PetHandle(instance.id))
    }

    pub fn is_mounted(&self, handle: PetHandle) -> bool {
        self.active() == Some(handle)
    }

    pub fn pet(&self) -> Option<&Pet> {
        self.instance.as_ref().map(|instance| &instance.pet)
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.instance.as_ref().map(|instance| &instance.canvas)
    }

    /// The active pet's scheduled frame, if any.
    pub fn pending_frame(&self) -> Option<FrameRequest> {
        self.instance
            .as_ref()
            .and_then(|instance| instance.pending_frame)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn teardown(&mut self, instance: Instance) {
        let Instance {
            id,
            pet,
            canvas,
            listeners,
            pending_frame,
        } = instance;
        if let Some(request) = pending_frame {
            self.host.cancel_frame(request);
        }
        for listener in listeners {
            self.host.unsubscribe(listener);
        }
        self.host.remove_overlay(canvas);
        info!(
            instance = id,
            frames = pet.clock().frame(),
            elapsed_s = pet.clock().elapsed(),
            "pet disposed"
        );
    }
}

impl<H: Host> Drop for Stage<H> {
    fn drop(&mut self) {
        if let Some(instance) = self.instance.take() {
            self.teardown(instance);
        }
    }
}
