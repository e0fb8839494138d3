// Host-side tests for the attach/tick/detach lifecycle.
// A recording host stands in for the DOM: frames only fire when the test
// drains the requested tokens.

use rand::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tilt_core::*;

#[derive(Default)]
struct MockHost {
    rect: Option<Rect>,
    requested: Vec<TickToken>,
    cancelled: Vec<TickToken>,
    writes: Vec<(String, String)>,
    bound: bool,
    bind_calls: usize,
    unbind_calls: usize,
    refuse_frames: bool,
}

impl Geometry for MockHost {
    fn bounding_rect(&self) -> Option<Rect> {
        self.rect
    }
}

impl FrameScheduler for MockHost {
    fn request_tick(&mut self, token: TickToken) -> bool {
        if self.refuse_frames {
            return false;
        }
        self.requested.push(token);
        true
    }
    fn cancel_tick(&mut self, token: TickToken) {
        self.cancelled.push(token);
    }
}

impl Publisher for MockHost {
    fn write_var(&mut self, name: &str, value: &str) {
        self.writes.push((name.to_string(), value.to_string()));
    }
}

impl InputBinding for MockHost {
    fn bind(&mut self) {
        self.bound = true;
        self.bind_calls += 1;
    }
    fn unbind(&mut self) {
        self.bound = false;
        self.unbind_calls += 1;
    }
}

struct StubDevice {
    touch_primary: bool,
}

impl DeviceClass for StubDevice {
    fn is_touch_primary(&self) -> bool {
        self.touch_primary
    }
}

/// Counts how often the touch-primary query runs.
struct CountingDevice(Rc<Cell<usize>>);

impl DeviceClass for CountingDevice {
    fn is_touch_primary(&self) -> bool {
        self.0.set(self.0.get() + 1);
        false
    }
}

fn card_rect() -> Rect {
    Rect::new(100.0, 200.0, 400.0, 600.0)
}

fn controller() -> TiltController<MockHost> {
    let host = MockHost {
        rect: Some(card_rect()),
        ..MockHost::default()
    };
    TiltController::new(host, Box::new(FinePointer))
}

/// Fire every frame that is currently requested, like one vsync.
fn fire_frame(c: &mut TiltController<MockHost>) -> Vec<TickOutcome> {
    let tokens: Vec<TickToken> = c.host_mut().requested.drain(..).collect();
    tokens.into_iter().map(|t| c.tick(t)).collect()
}

fn run_until_idle(c: &mut TiltController<MockHost>) -> usize {
    let mut frames = 0;
    while !c.host().requested.is_empty() {
        fire_frame(c);
        frames += 1;
        assert!(frames < 1000, "frame loop did not stop");
    }
    frames
}

#[test]
fn attach_centers_binds_and_publishes_initial_pose() {
    let mut c = controller();
    assert_eq!(c.attach(&TiltConfig::default()), AttachOutcome::Attached);
    assert_eq!(c.phase(), Phase::Active);
    assert!(c.host().bound);
    assert_eq!(c.host().requested.len(), 1);
    assert_eq!(c.target(), Some(NormalizedPoint::CENTER));

    assert_eq!(fire_frame(&mut c), vec![TickOutcome::Settled]);
    let p = c.last_published().copied().unwrap();
    assert_eq!(p.rotate_x, 0.0);
    assert_eq!(p.background_y, 50.0);
    assert_eq!(c.host().writes.len(), 6);
}

#[test]
fn disabled_config_is_a_no_op_attach() {
    let mut c = controller();
    assert_eq!(c.attach(&TiltConfig::disabled()), AttachOutcome::Disabled);
    assert_eq!(c.phase(), Phase::Detached);
    assert!(!c.host().bound);
    assert!(c.host().requested.is_empty());
    c.on_pointer_move(PointerSample::mouse(150.0, 250.0));
    assert!(c.host().requested.is_empty());
}

#[test]
fn touch_primary_device_never_attaches() {
    let host = MockHost {
        rect: Some(card_rect()),
        ..MockHost::default()
    };
    let mut c = TiltController::new(
        host,
        Box::new(StubDevice {
            touch_primary: true,
        }),
    );
    assert_eq!(c.attach(&TiltConfig::default()), AttachOutcome::TouchPrimary);
    assert!(c.host().writes.is_empty());
}

#[test]
fn missing_geometry_degrades_to_static() {
    let mut c = TiltController::new(MockHost::default(), Box::new(FinePointer));
    assert_eq!(c.attach(&TiltConfig::default()), AttachOutcome::NoGeometry);
    assert_eq!(c.phase(), Phase::Detached);
    assert!(c.host().writes.is_empty());
}

#[test]
fn device_class_is_queried_once_per_attach() {
    let calls = Rc::new(Cell::new(0));
    let host = MockHost {
        rect: Some(card_rect()),
        ..MockHost::default()
    };
    let mut c = TiltController::new(host, Box::new(CountingDevice(calls.clone())));
    c.attach(&TiltConfig::default());
    for i in 0..20 {
        c.on_pointer_move(PointerSample::mouse(100.0 + i as f32, 300.0));
    }
    run_until_idle(&mut c);
    assert_eq!(calls.get(), 1);
}

#[test]
fn double_attach_is_ignored() {
    let mut c = controller();
    c.attach(&TiltConfig::default());
    assert_eq!(c.attach(&TiltConfig::default()), AttachOutcome::AlreadyActive);
    assert_eq!(c.host().bind_calls, 1);
    assert_eq!(c.host().requested.len(), 1);
}

#[test]
fn touch_samples_never_move_the_target() {
    let mut c = controller();
    c.attach(&TiltConfig::default());
    run_until_idle(&mut c);
    let before = c.target();
    c.on_pointer_move(PointerSample::touch(110.0, 210.0));
    assert_eq!(c.target(), before);
    assert!(c.host().requested.is_empty());
}

#[test]
fn mouse_sample_sets_normalized_target_from_live_bounds() {
    let mut c = controller();
    c.attach(&TiltConfig::default());
    // x: (400-100)/400 = 75%, y: (350-200)/600 = 25%
    c.on_pointer_move(PointerSample::mouse(400.0, 350.0));
    assert_eq!(c.target(), Some(NormalizedPoint::new(75.0, 25.0)));

    // container moved between samples; bounds must be re-read
    c.host_mut().rect = Some(Rect::new(0.0, 0.0, 400.0, 600.0));
    c.on_pointer_move(PointerSample::mouse(400.0, 350.0));
    let t = c.target().unwrap();
    assert_eq!(t.x(), 100.0);
    assert!((t.y() - 58.333_33).abs() < 1e-3);
}

#[test]
fn converges_on_pointer_and_stops_scheduling() {
    let mut c = controller();
    c.attach(&TiltConfig::default());
    c.on_pointer_move(PointerSample::mouse(400.0, 350.0));
    let frames = run_until_idle(&mut c);
    assert!(frames < 60, "took {frames} frames");
    assert!(c.pending_tick().is_none());
    let p = c.last_published().unwrap();
    assert!((p.rotate_x - -5.0).abs() < 0.05);
    assert!((p.rotate_y - -6.25).abs() < 0.05);
}

#[test]
fn pointer_leave_eases_back_to_center() {
    let mut c = controller();
    c.attach(&TiltConfig::default());
    c.on_pointer_move(PointerSample::mouse(500.0, 800.0));
    run_until_idle(&mut c);
    c.on_pointer_leave();
    assert_eq!(c.target(), Some(NormalizedPoint::CENTER));
    run_until_idle(&mut c);
    let cur = c.current().unwrap();
    assert!((cur.x() - 50.0).abs() <= 0.1);
    assert!((cur.y() - 50.0).abs() <= 0.1);
}

#[test]
fn centering_at_center_changes_nothing() {
    let mut c = controller();
    c.attach(&TiltConfig::default());
    run_until_idle(&mut c);
    let before = c.last_published().copied();
    let writes_before: Vec<(String, String)> = c.host().writes.clone();

    c.center();
    run_until_idle(&mut c);
    assert_eq!(c.last_published().copied(), before);
    let new_writes = &c.host().writes[writes_before.len()..];
    assert_eq!(new_writes, &writes_before[writes_before.len() - 6..]);
}

#[test]
fn rapid_targets_keep_a_single_frame_in_flight() {
    let mut c = controller();
    c.attach(&TiltConfig::default());
    c.host_mut().requested.clear();
    let token = c.pending_tick().unwrap();
    for i in 0..5 {
        c.on_pointer_move(PointerSample::mouse(120.0 + 50.0 * i as f32, 300.0));
    }
    assert!(c.host().requested.is_empty());
    assert_eq!(c.pending_tick(), Some(token));
}

#[test]
fn detach_before_frame_fires_publishes_nothing() {
    let mut c = controller();
    c.attach(&TiltConfig::default());
    c.on_pointer_move(PointerSample::mouse(460.0, 740.0));
    let queued: Vec<TickToken> = c.host().requested.clone();
    let writes = c.host().writes.len();

    c.detach();
    assert_eq!(c.phase(), Phase::Detached);
    assert!(!c.host().bound);
    assert_eq!(c.host().cancelled, queued);

    // the frame clock fires anyway
    for t in queued {
        assert_eq!(c.tick(t), TickOutcome::Stale);
    }
    assert_eq!(c.host().writes.len(), writes);
}

#[test]
fn tokens_from_a_previous_attachment_stay_dead() {
    let mut c = controller();
    c.attach(&TiltConfig::default());
    let old = c.pending_tick().unwrap();
    c.detach();
    c.attach(&TiltConfig::default());
    let writes = c.host().writes.len();
    assert_eq!(c.tick(old), TickOutcome::Stale);
    assert_eq!(c.host().writes.len(), writes);
    assert_ne!(c.pending_tick(), Some(old));
}

#[test]
fn detach_is_idempotent() {
    let mut c = controller();
    c.detach();
    c.attach(&TiltConfig::default());
    c.detach();
    c.detach();
    assert_eq!(c.host().unbind_calls, 1);
    assert_eq!(c.phase(), Phase::Detached);
}

#[test]
fn rapid_mount_unmount_cycles_leave_nothing_pending() {
    let mut c = controller();
    for _ in 0..50 {
        c.attach(&TiltConfig::default());
        c.on_pointer_move(PointerSample::mouse(130.0, 230.0));
        c.detach();
    }
    assert!(c.pending_tick().is_none());
    assert_eq!(c.host().requested.len(), c.host().cancelled.len());
    let writes = c.host().writes.len();
    fire_frame(&mut c);
    assert_eq!(c.host().writes.len(), writes);
}

#[test]
fn out_of_range_smoothing_is_clamped_not_fatal() {
    let mut c = controller();
    let cfg = TiltConfig {
        smoothing: 4.0,
        ..TiltConfig::default()
    };
    assert_eq!(c.attach(&cfg), AttachOutcome::Attached);
    assert_eq!(c.engine().unwrap().tuning().smoothing(), MAX_SMOOTHING);
    c.on_pointer_move(PointerSample::mouse(500.0, 800.0));
    assert!(run_until_idle(&mut c) < 10);
}

#[test]
fn tiny_epsilon_still_settles() {
    let mut c = controller();
    let cfg = TiltConfig {
        epsilon: 1.0e-9,
        ..TiltConfig::default()
    };
    assert_eq!(c.attach(&cfg), AttachOutcome::Attached);
    assert_eq!(c.engine().unwrap().tuning().epsilon(), MIN_EPSILON);
    // (399, 5) inside the 400x600 card
    c.on_pointer_move(PointerSample::mouse(499.0, 205.0));
    run_until_idle(&mut c);
    assert!(c.pending_tick().is_none());
    let cur = c.current().unwrap();
    let tgt = c.target().unwrap();
    assert!((cur.x() - tgt.x()).abs() <= MIN_EPSILON);
    assert!((cur.y() - tgt.y()).abs() <= MIN_EPSILON);
}

#[test]
fn refused_frame_does_not_freeze_the_card() {
    let mut c = controller();
    c.host_mut().refuse_frames = true;
    assert_eq!(c.attach(&TiltConfig::default()), AttachOutcome::Attached);
    c.on_pointer_move(PointerSample::mouse(400.0, 350.0));
    assert!(c.pending_tick().is_none());

    c.host_mut().refuse_frames = false;
    c.on_pointer_move(PointerSample::mouse(400.0, 350.0));
    assert!(c.pending_tick().is_some());
    run_until_idle(&mut c);
    let p = c.last_published().unwrap();
    assert!((p.rotate_x - -5.0).abs() < 0.05);
}

#[test]
fn random_pointer_positions_always_normalize_into_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut c = controller();
    c.attach(&TiltConfig::default());
    for _ in 0..500 {
        let x = rng.gen_range(-1.0e6f32..1.0e6);
        let y = rng.gen_range(-1.0e6f32..1.0e6);
        c.on_pointer_move(PointerSample::mouse(x, y));
        let t = c.target().unwrap();
        assert!((0.0..=100.0).contains(&t.x()));
        assert!((0.0..=100.0).contains(&t.y()));
        fire_frame(&mut c);
    }
    run_until_idle(&mut c);
    let cur = c.current().unwrap();
    assert!((0.0..=100.0).contains(&cur.x()));
    assert!((0.0..=100.0).contains(&cur.y()));
}

/// Host whose cancel log outlives the controller.
struct DropHost {
    cancelled: Rc<RefCell<Vec<TickToken>>>,
}

impl Geometry for DropHost {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(card_rect())
    }
}

impl FrameScheduler for DropHost {
    fn request_tick(&mut self, _token: TickToken) -> bool {
        true
    }
    fn cancel_tick(&mut self, token: TickToken) {
        self.cancelled.borrow_mut().push(token);
    }
}

impl Publisher for DropHost {
    fn write_var(&mut self, _name: &str, _value: &str) {}
}

impl InputBinding for DropHost {
    fn bind(&mut self) {}
    fn unbind(&mut self) {}
}

#[test]
fn dropping_an_active_controller_cancels_its_frame() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let token = {
        let mut c = TiltController::new(
            DropHost {
                cancelled: log.clone(),
            },
            Box::new(FinePointer),
        );
        c.attach(&TiltConfig::default());
        c.pending_tick().unwrap()
    };
    assert_eq!(*log.borrow(), vec![token]);
}
