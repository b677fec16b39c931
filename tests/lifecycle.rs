//! Mount, frame and teardown behaviour of the stage.
//!
//! Run with:   cargo test --test lifecycle
use std::cell::RefCell;
use std::rc::Rc;

use mascot::{
    Canvas, ConfigError, EventKind, FrameRequest, HeadlessHost, Host, InputEvent, ListenerId,
    MountError, PetConfig, RenderStrategy, Stage,
};

fn mounted_stage() -> Stage<HeadlessHost> {
    let mut stage = Stage::new(HeadlessHost::new(800, 600));
    stage.mount(PetConfig::default()).expect("mounted");
    stage
}

fn assert_host_released(host: &HeadlessHost) {
    assert_eq!(host.pending_frames(), 0, "pending frames");
    assert_eq!(host.listeners(), 0, "listeners");
    assert_eq!(host.overlays(), 0, "overlays");
}

#[test]
fn dispose_releases_everything_and_is_idempotent() {
    let mut stage = mounted_stage();
    let handle = stage.active().expect("active pet");
    stage.run_frames(30);

    assert!(stage.dispose(handle));
    assert_host_released(stage.host());
    assert!(stage.active().is_none());

    assert!(!stage.dispose(handle));
    assert_host_released(stage.host());
}

#[test]
fn frames_keep_exactly_one_request_outstanding() {
    let mut stage = mounted_stage();
    for _ in 0..20 {
        assert_eq!(stage.host().pending_frames(), 1);
        assert_eq!(stage.run_frames(1), 1);
    }
    assert_eq!(stage.host().presented_frames(), 20);
}

#[test]
fn frame_delivered_after_dispose_does_nothing() {
    let mut stage = mounted_stage();
    let handle = stage.active().expect("active pet");
    let request = stage.pending_frame().expect("scheduled frame");

    stage.dispose(handle);
    assert!(!stage.on_frame(request));
    assert_eq!(stage.host().presented_frames(), 0);
    assert_host_released(stage.host());
}

#[test]
fn frame_of_a_replaced_pet_is_ignored() {
    let mut stage = mounted_stage();
    let stale = stage.pending_frame().expect("scheduled frame");

    stage
        .mount(PetConfig::default().with_strategy(RenderStrategy::Blocks))
        .expect("remounted");
    assert!(!stage.on_frame(stale));
    assert_eq!(stage.pet().map(|pet| pet.clock().frame()), Some(0));

    let current = stage.pending_frame().expect("scheduled frame");
    assert_ne!(current, stale);
    assert!(stage.on_frame(current));
}

#[test]
fn remount_replaces_the_previous_pet() {
    let mut stage = mounted_stage();
    let first = stage.active().expect("active pet");

    let second = stage.mount(PetConfig::default()).expect("remounted");
    assert_ne!(first, second);
    assert!(!stage.is_mounted(first));
    assert!(stage.is_mounted(second));
    assert_eq!(stage.host().overlays(), 1);
    assert_eq!(stage.host().listeners(), 4);
    assert_eq!(stage.host().pending_frames(), 1);

    assert!(!stage.dispose(first), "stale handle must not dispose the new pet");
    assert!(stage.is_mounted(second));
}

#[test]
fn missing_surface_fails_without_leaking() {
    let mut stage = Stage::new(HeadlessHost::new(800, 600).without_surface());
    let result = stage.mount(PetConfig::default());

    assert!(matches!(result, Err(MountError::SurfaceUnavailable(_))));
    assert!(stage.active().is_none());
    assert_host_released(stage.host());
}

#[test]
fn failed_remount_leaves_nothing_mounted() {
    let mut stage = mounted_stage();
    stage.host_mut().set_surface_available(false);

    assert!(stage.mount(PetConfig::default()).is_err());
    assert!(stage.active().is_none());
    assert_host_released(stage.host());
}

#[test]
fn invalid_config_keeps_the_current_pet() {
    let mut stage = mounted_stage();
    let handle = stage.active().expect("active pet");

    let result = stage.mount(PetConfig::default().with_scale(0.0));
    assert_eq!(result, Err(MountError::Config(ConfigError::Scale(0.0))));
    assert!(stage.is_mounted(handle));
    assert_eq!(stage.host().listeners(), 4);
}

#[test]
fn pointer_and_touch_events_steer_the_pet() {
    let mut stage = mounted_stage();

    assert!(stage.dispatch(InputEvent::PointerMoved { x: 120.0, y: 80.0 }));
    let state = *stage.pet().expect("pet").state();
    assert_eq!((state.target_x, state.target_y), (120.0, 80.0));

    assert!(stage.dispatch(InputEvent::TouchStarted { x: 600.0, y: 500.0 }));
    assert!(stage.dispatch(InputEvent::TouchMoved { x: 610.0, y: 505.0 }));
    let state = *stage.pet().expect("pet").state();
    assert_eq!((state.target_x, state.target_y), (610.0, 505.0));
}

#[test]
fn events_after_dispose_reach_nobody() {
    let mut stage = mounted_stage();
    let handle = stage.active().expect("active pet");
    stage.dispose(handle);

    assert!(!stage.dispatch(InputEvent::PointerMoved { x: 1.0, y: 1.0 }));
    assert!(!stage.dispatch(InputEvent::Resized {
        width: 10,
        height: 10
    }));
}

#[test]
fn resize_refits_canvas_and_bounds() {
    let mut stage = mounted_stage();
    stage.resize_viewport(300, 200);

    assert_eq!(stage.canvas().map(Canvas::size), Some((300, 200)));
    let pet = stage.pet().expect("pet");
    let bounds = *pet.motion().bounds();
    assert_eq!((bounds.max_x, bounds.max_y), (250.0, 150.0));
    assert!(bounds.contains(pet.state().x, pet.state().y));
}

#[test]
fn rasterized_frames_paint_the_figure() {
    let mut stage = Stage::new(HeadlessHost::new(640, 480).with_rasterization());
    stage
        .mount(PetConfig::default().with_strategy(RenderStrategy::Blocks))
        .expect("mounted");
    stage.run_frames(3);
    assert!(stage.host().last_painted_pixels().is_some_and(|pixels| pixels > 100));
}

#[derive(Debug, Default)]
struct Ledger {
    frames: Vec<FrameRequest>,
    listeners: Vec<ListenerId>,
    overlays: usize,
}

/// A host whose bookkeeping outlives the stage that owns it.
struct SharedHost(Rc<RefCell<Ledger>>);

impl Host for SharedHost {
    fn viewport(&self) -> (u32, u32) {
        (320, 240)
    }

    fn create_overlay(&mut self, width: u32, height: u32) -> Result<Canvas, MountError> {
        self.0.borrow_mut().overlays += 1;
        Ok(Canvas::new(width, height))
    }

    fn present(&mut self, _canvas: &mut Canvas) {}

    fn remove_overlay(&mut self, _canvas: Canvas) {
        self.0.borrow_mut().overlays -= 1;
    }

    fn request_frame(&mut self) -> FrameRequest {
        let mut ledger = self.0.borrow_mut();
        let request = FrameRequest(ledger.frames.len() as u64 + 100);
        ledger.frames.push(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.0.borrow_mut().frames.retain(|pending| *pending != request);
    }

    fn subscribe(&mut self, _kind: EventKind) -> ListenerId {
        let mut ledger = self.0.borrow_mut();
        let listener = ListenerId(ledger.listeners.len() as u64 + 1);
        ledger.listeners.push(listener);
        listener
    }

    fn unsubscribe(&mut self, listener: ListenerId) {
        self.0.borrow_mut().listeners.retain(|active| *active != listener);
    }
}

#[test]
fn dropping_the_stage_disposes_the_pet() {
    let ledger = Rc::new(RefCell::new(Ledger::default()));
    {
        let mut stage = Stage::new(SharedHost(ledger.clone()));
        stage.mount(PetConfig::default()).expect("mounted");
        assert_eq!(ledger.borrow().overlays, 1);
        assert_eq!(ledger.borrow().listeners.len(), 4);
    }
    let ledger = ledger.borrow();
    assert_eq!(ledger.overlays, 0);
    assert!(ledger.listeners.is_empty());
    assert!(ledger.frames.is_empty());
}
