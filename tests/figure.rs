//! Part ordering of both figure strategies over a full fire cycle and beyond.
//!
//! Run with:   cargo test --test figure
use mascot::iso::{draw_order, Block};
use mascot::{
    build_parts, Color, Direction, FigureRenderer, MotionState, Pose, PoseConfig,
    RecordingSurface, RenderStrategy,
};
use rstest::rstest;

fn state() -> MotionState {
    MotionState {
        x: 400.0,
        y: 300.0,
        vx: 0.0,
        vy: 0.0,
        target_x: 400.0,
        target_y: 300.0,
        direction: Direction::Right,
        scale: 0.8,
    }
}

fn record(strategy: RenderStrategy, frame: u64) -> RecordingSurface {
    let mut surface = RecordingSurface::new(800, 600);
    let pose = Pose::at(frame, &PoseConfig::default());
    FigureRenderer::new(strategy).render(&mut surface, &pose, &state());
    surface
}

#[test]
fn depth_order_is_a_stable_back_to_front_permutation() {
    for frame in 0..240 {
        let parts = build_parts(&Pose::at(frame, &PoseConfig::default()));
        let order = draw_order(&parts);

        let mut seen = order.to_vec();
        seen.sort_unstable();
        assert_eq!(seen, (0..parts.len()).collect::<Vec<_>>(), "frame {frame}");

        for pair in order.windows(2) {
            let (a, b) = (&parts[pair[0]], &parts[pair[1]]);
            assert!(a.depth_key() <= b.depth_key(), "frame {frame}: {} after {}", b.label, a.label);
            if a.depth_key() == b.depth_key() {
                assert!(pair[0] < pair[1], "frame {frame}: tie broken out of insertion order");
            }
        }

        assert_eq!(order, draw_order(&parts), "frame {frame}: order not deterministic");
    }
}

/// Rank of every part (by insertion index) in the draw order.
fn ranks(frame: u64) -> Vec<usize> {
    let parts = build_parts(&Pose::at(frame, &PoseConfig::default()));
    let mut ranks = vec![0; parts.len()];
    for (rank, index) in draw_order(&parts).into_iter().enumerate() {
        ranks[index] = rank;
    }
    ranks
}

#[test]
fn animated_parts_never_swap_places_with_their_neighbours() {
    let parts = build_parts(&Pose::at(0, &PoseConfig::default()));
    let reference = ranks(0);
    for frame in 1..120 {
        let current = ranks(frame);
        assert_eq!(current.len(), reference.len(), "frame {frame}");
        for a in 0..current.len() {
            for b in a + 1..current.len() {
                assert_eq!(
                    reference[a] < reference[b],
                    current[a] < current[b],
                    "frame {frame}: {} #{a} and {} #{b} swapped",
                    parts[a].label,
                    parts[b].label
                );
            }
        }
    }
}

#[test]
fn equal_depth_keeps_insertion_order() {
    let parts = [
        Block::new("first", (10.0, 0.0, 0.0), (1.0, 1.0, 1.0), Color::WHITE),
        Block::new("second", (0.0, 10.0, 0.0), (1.0, 1.0, 1.0), Color::WHITE),
        Block::new("behind", (0.0, 0.0, 0.0), (1.0, 1.0, 1.0), Color::WHITE),
        Block::new("third", (5.0, 5.0, 0.0), (1.0, 1.0, 1.0), Color::WHITE),
    ];
    let labels: Vec<_> = draw_order(&parts)
        .into_iter()
        .map(|index| parts[index].label)
        .collect();
    assert_eq!(labels, ["behind", "first", "second", "third"]);
}

#[rstest]
#[case(0)]
#[case(17)]
#[case(59)]
#[case(133)]
fn blocks_are_drawn_in_depth_order(#[case] frame: u64) {
    let parts = build_parts(&Pose::at(frame, &PoseConfig::default()));
    let expected: Vec<&str> = draw_order(&parts)
        .into_iter()
        .flat_map(|index| [parts[index].label; 3])
        .collect();
    assert_eq!(record(RenderStrategy::Blocks, frame).labels(), expected);
}

#[test]
fn vector_layers_stay_fixed_across_frames() {
    let layers = [
        "mount.back_leg_far",
        "mount.tail",
        "mount.torso",
        "mount.front_leg_near",
        "rider.torso",
        "rider.head",
        "flag.pole",
        "flag.red",
        "fire.particle",
    ];
    let first = record(RenderStrategy::Vector, 0).labels();
    for frame in 0..180 {
        let surface = record(RenderStrategy::Vector, frame);
        let positions: Vec<usize> = layers
            .iter()
            .map(|label| {
                surface
                    .position_of(label)
                    .unwrap_or_else(|| panic!("frame {frame}: {label} missing"))
            })
            .collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "frame {frame}: {positions:?}"
        );
        assert_eq!(surface.labels(), first, "frame {frame}: part list changed");
    }
}

#[rstest]
#[case(RenderStrategy::Vector)]
#[case(RenderStrategy::Blocks)]
fn one_particle_per_slot(#[case] strategy: RenderStrategy) {
    let config = PoseConfig { particles: 7 };
    let mut surface = RecordingSurface::new(800, 600);
    FigureRenderer::new(strategy).render(&mut surface, &Pose::at(42, &config), &state());

    let particles = surface
        .labels()
        .into_iter()
        .filter(|label| *label == "fire.particle")
        .count();
    let per_part = match strategy {
        RenderStrategy::Vector => 1,
        RenderStrategy::Blocks => 3,
    };
    assert_eq!(particles, 7 * per_part);
}

#[test]
fn fire_cycle_repeats_every_sixty_frames() {
    let config = PoseConfig::default();
    for frame in 0..60 {
        let now = Pose::at(frame, &config);
        let later = Pose::at(frame + 60, &config);
        assert_eq!(now.particles, later.particles, "frame {frame}");
    }
}
