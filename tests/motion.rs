//! Behavioural tests for the motion controller: convergence, confinement, facing direction
//! and the idle wander cycle.
//!
//! Run with:   cargo test --test motion
use approx::assert_abs_diff_eq;
use mascot::{Direction, Mode, MotionController, MotionTuning, Pet, PetConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

/// Ticks until the pet counts as idle at the default 60 Hz timestep (3 s).
const IDLE_TICKS: u64 = 180;
/// Ticks between wander targets at the default 60 Hz timestep (4 s).
const WANDER_TICKS: u64 = 240;

fn controller(width: f32, height: f32) -> MotionController {
    MotionController::new(width, height, &PetConfig::default())
}

fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

#[test]
fn pet_reaches_the_pointer_and_faces_it() {
    let mut pet = Pet::new(800.0, 600.0, &PetConfig::default());
    pet.set_target(700.0, 500.0);
    for _ in 0..200 {
        pet.update();
    }

    let state = pet.state();
    assert!(
        distance((state.x, state.y), (700.0, 500.0)) < 2.0,
        "ended at ({}, {})",
        state.x,
        state.y
    );
    assert_eq!(state.direction, Direction::Right);
}

#[rstest]
#[case(100.0, 100.0)]
#[case(700.0, 80.0)]
#[case(400.0, 300.0)]
#[case(60.0, 540.0)]
fn held_pointer_inside_bounds_is_reached(#[case] x: f32, #[case] y: f32) {
    let mut motion = controller(800.0, 600.0);
    for _ in 0..400 {
        motion.set_target(x, y);
        motion.tick();
    }
    let state = motion.state();
    assert_abs_diff_eq!(state.x, x, epsilon = 0.5);
    assert_abs_diff_eq!(state.y, y, epsilon = 0.5);
    assert_eq!(motion.mode(), Mode::Active);
}

#[test]
fn pointer_outside_bounds_parks_on_the_nearest_edge() {
    let mut motion = controller(800.0, 600.0);
    for _ in 0..400 {
        motion.set_target(2000.0, -500.0);
        motion.tick();
    }
    let state = motion.state();
    assert_abs_diff_eq!(state.x, 750.0);
    assert_abs_diff_eq!(state.y, 50.0);
    assert_eq!(state.vx.max(0.0), 0.0, "no outward velocity at the edge");
}

#[test]
fn position_never_leaves_bounds_for_arbitrary_pointers() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut motion = controller(1024.0, 768.0);
    let bounds = *motion.bounds();

    for tick in 0..5_000 {
        if tick % 17 == 0 {
            motion.set_target(rng.gen_range(-3000.0..3000.0), rng.gen_range(-3000.0..3000.0));
        }
        motion.tick();
        let state = motion.state();
        assert!(
            bounds.contains(state.x, state.y),
            "tick {tick}: ({}, {}) outside {bounds:?}",
            state.x,
            state.y
        );
    }
}

#[test]
fn direction_follows_horizontal_motion() {
    let mut motion = controller(800.0, 600.0);
    assert_eq!(motion.state().direction, Direction::Right);

    for _ in 0..50 {
        motion.set_target(100.0, 300.0);
        motion.tick();
    }
    assert_eq!(motion.state().direction, Direction::Left);

    for _ in 0..50 {
        motion.set_target(700.0, 300.0);
        motion.tick();
    }
    assert_eq!(motion.state().direction, Direction::Right);
}

#[test]
fn direction_flips_once_per_deadband_crossing() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut motion = controller(800.0, 600.0);
    let deadband = MotionTuning::default().deadband;

    let mut side = Direction::Right;
    let mut crossings = 0;
    let mut flips = 0;
    let mut hovering_ticks = 0;

    for tick in 0..900 {
        let x = if tick < 600 {
            // Alternate sides every 40 ticks, jittered.
            let base = if (tick / 40) % 2 == 0 { 460.0 } else { 340.0 };
            base + rng.gen_range(-6.0..6.0)
        } else {
            // Hover around the pet so vx stays near the deadband.
            motion.state().x + rng.gen_range(-60.0..60.0)
        };
        let before = motion.state().direction;
        motion.set_target(x, 300.0);
        motion.tick();

        let state = motion.state();
        if state.vx > deadband && side != Direction::Right {
            side = Direction::Right;
            crossings += 1;
        } else if state.vx < -deadband && side != Direction::Left {
            side = Direction::Left;
            crossings += 1;
        }
        if state.vx.abs() <= deadband {
            hovering_ticks += 1;
        }
        if state.direction != before {
            flips += 1;
        }
        assert_eq!(state.direction, side, "tick {tick}: vx {}", state.vx);
    }

    assert_eq!(flips, crossings);
    assert!(crossings >= 4, "only {crossings} crossings");
    assert!(hovering_ticks > 100, "only {hovering_ticks} ticks inside the deadband");
}

#[test]
fn vertical_motion_keeps_the_facing_direction() {
    let mut motion = controller(800.0, 600.0);
    for _ in 0..120 {
        motion.set_target(400.0, 550.0);
        motion.tick();
    }
    assert_eq!(motion.state().direction, Direction::Right);
}

#[test]
fn idle_starts_after_the_threshold_and_wanders_each_period() {
    let mut motion = controller(800.0, 600.0);
    motion.set_target(600.0, 400.0);

    for _ in 0..IDLE_TICKS - 1 {
        motion.tick();
    }
    assert_eq!(motion.mode(), Mode::Active);

    motion.tick();
    assert_eq!(motion.mode(), Mode::Idle);
    assert_eq!(motion.wander().generation, 0);

    for _ in 0..WANDER_TICKS - 1 {
        motion.tick();
    }
    assert_eq!(motion.wander().generation, 0);
    motion.tick();
    assert_eq!(motion.wander().generation, 1);
}

#[test]
fn wander_targets_change_exactly_once_per_period_inside_bounds() {
    let mut motion = controller(800.0, 600.0);
    for _ in 0..IDLE_TICKS {
        motion.tick();
    }

    let mut last = *motion.wander();
    let mut changes = 0;
    for tick in 1..=WANDER_TICKS * 5 {
        motion.tick();
        let wander = *motion.wander();
        if wander != last {
            changes += 1;
            assert_eq!(tick % WANDER_TICKS, 0, "target changed mid-period at {tick}");
            assert!((50.0..=750.0).contains(&wander.x), "x {}", wander.x);
            assert!((50.0..=550.0).contains(&wander.y), "y {}", wander.y);
        }
        last = wander;
    }
    assert_eq!(changes, 5);
    assert_eq!(motion.wander().generation, 5);
}

#[test]
fn pointer_input_ends_idle_mode() {
    let mut motion = controller(800.0, 600.0);
    for _ in 0..IDLE_TICKS + 10 {
        motion.tick();
    }
    assert_eq!(motion.mode(), Mode::Idle);

    motion.set_target(120.0, 90.0);
    assert_eq!(motion.mode(), Mode::Active);
    assert_eq!(motion.effective_target(), (120.0, 90.0));
}

#[test]
fn same_seed_wanders_the_same_way() {
    let run = |seed| {
        let mut motion =
            MotionController::new(800.0, 600.0, &PetConfig::default().with_seed(seed));
        for _ in 0..IDLE_TICKS + WANDER_TICKS * 3 {
            motion.tick();
        }
        (*motion.wander(), *motion.state())
    };
    assert_eq!(run(11), run(11));
    assert_ne!(run(11).0, run(12).0);
}

#[test]
fn surface_smaller_than_the_margins_pins_the_pet_to_its_center() {
    let mut motion = controller(80.0, 60.0);
    for _ in 0..50 {
        motion.set_target(0.0, 60.0);
        motion.tick();
    }
    let state = motion.state();
    assert_eq!((state.x, state.y), (40.0, 30.0));
}

#[test]
fn shrinking_the_surface_pulls_the_pet_inside() {
    let mut motion = controller(1600.0, 1200.0);
    for _ in 0..300 {
        motion.set_target(1500.0, 1100.0);
        motion.tick();
    }
    motion.resize(400.0, 300.0);
    let state = motion.state();
    assert_eq!((state.x, state.y), (350.0, 250.0));
    assert!(motion.bounds().contains(motion.wander().x, motion.wander().y));
}

#[test]
fn faster_timestep_scales_idle_timing() {
    let config = PetConfig::default().with_timestep(1.0 / 120.0).with_motion(MotionTuning {
        idle_threshold_ms: 500.0,
        ..MotionTuning::default()
    });
    let mut motion = MotionController::new(800.0, 600.0, &config);
    for _ in 0..59 {
        motion.tick();
    }
    assert_eq!(motion.mode(), Mode::Active);
    motion.tick();
    assert_eq!(motion.mode(), Mode::Idle);
}
