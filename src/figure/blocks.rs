//! Depth-sorted block strategy: every part becomes an isometric voxel, rebuilt from the pose
//! each frame, sorted back to front and drawn as three shaded faces.

use super::iso::{draw_order, Block, PartList};
use super::painter::Painter;
use super::palette::*;
use crate::pose::Pose;
use crate::{BlockShades, Color, Shape};

/// Screen offset of the world origin (the ground under the mount) from the figure anchor.
const GROUND_OFFSET: f32 = 70.0;
/// The mount's mouth in world space.
const MOUTH: (f32, f32, f32) = (54.0, 16.0, 104.0);
/// The hand holding the flag pole.
const HAND: (f32, f32, f32) = (4.0, 23.0, 80.0);

pub(super) fn draw(painter: &mut Painter<'_>, pose: &Pose) {
    let parts = build_parts(pose);
    painter.save();
    painter.translate(0.0, GROUND_OFFSET);
    for index in draw_order(&parts) {
        draw_block(painter, &parts[index]);
    }
    painter.restore();
}

fn draw_block(painter: &mut Painter<'_>, block: &Block) {
    let shades = BlockShades::from_base(block.color);
    let faces = block.faces();
    for (corners, color) in [
        (faces.left, shades.left),
        (faces.right, shades.right),
        (faces.top, shades.top),
    ] {
        let points = corners.map(|p| (p.x, p.y));
        painter.draw(block.label, Shape::polygon(&points, color));
    }
}

/// All parts of the figure for one frame, in insertion order.
pub fn build_parts(pose: &Pose) -> PartList {
    let mut parts = PartList::new();
    push_mount(&mut parts, pose);
    push_rider(&mut parts, pose);
    push_flag(&mut parts, pose);
    push_fire(&mut parts, pose);
    parts
}

fn push_mount(parts: &mut PartList, pose: &Pose) {
    let swing = pose.leg_swing;
    let tail = pose.tail_wave;

    parts.push(Block::new("mount.back_leg_far", (-40.0, 0.0, 0.0), (10.0, 8.0, 40.0), COAT_SHADE));
    parts.push(Block::new("mount.back_leg_near", (-40.0, 22.0, 0.0), (10.0, 8.0, 40.0), COAT));
    parts.push(
        Block::new("mount.tail", (-72.0, 11.0, 48.0 + tail * 0.4), (22.0, 8.0, 8.0), GOLD_DARK)
            .resting_at((-72.0, 11.0, 48.0)),
    );
    parts.push(
        Block::new(
            "mount.tail_tip",
            (-86.0, 12.0, 36.0 + tail * 0.8),
            (14.0, 6.0, 14.0),
            GOLD_LIGHT,
        )
        .resting_at((-86.0, 12.0, 36.0)),
    );
    parts.push(Block::new("mount.torso", (-50.0, 2.0, 40.0), (70.0, 28.0, 32.0), COAT_MID));
    parts.push(
        Block::new(
            "mount.front_leg_far",
            (8.0 + swing * 0.4, 0.0, 50.0 + swing * 0.3),
            (10.0, 8.0, 26.0),
            COAT_SHADE,
        )
        .resting_at((8.0, 0.0, 50.0)),
    );
    parts.push(
        Block::new(
            "mount.front_leg_near",
            (14.0 - swing * 0.4, 22.0, 56.0 - swing * 0.3),
            (10.0, 8.0, 26.0),
            COAT,
        )
        .resting_at((14.0, 22.0, 56.0)),
    );
    parts.push(Block::new("mount.neck", (6.0, 6.0, 68.0), (20.0, 20.0, 38.0), COAT));
    parts.push(Block::new("mount.head", (16.0, 5.0, 100.0), (38.0, 22.0, 20.0), COAT));
    parts.push(Block::new("mount.ear", (18.0, 8.0, 120.0), (6.0, 6.0, 10.0), COAT));
    parts.push(Block::new("mount.eye", (40.0, 27.0, 110.0), (5.0, 1.0, 4.0), EYE));
    parts.push(Block::new("mount.horn", (30.0, 14.0, 120.0), (5.0, 5.0, 26.0), HORN_BASE));

    for spike in 0..5 {
        let i = spike as f32;
        let color = if spike % 2 == 0 { GOLD_DARK } else { GOLD_LIGHT };
        let (x, y, z) = (2.0 - i * 4.0, 9.0, 108.0 - i * 10.0);
        parts.push(
            Block::new(
                "mount.mane",
                (x + pose.mane_offset(spike) * 0.6, y, z),
                (8.0, 8.0, 10.0),
                color,
            )
            .resting_at((x, y, z)),
        );
    }
}

fn push_rider(parts: &mut PartList, pose: &Pose) {
    let wind = pose.bandana_wind;

    parts.push(Block::new("rider.torso", (-22.0, 8.0, 72.0), (16.0, 14.0, 26.0), CAT_FUR));
    parts.push(Block::new("rider.chest", (-6.0, 11.0, 76.0), (1.0, 8.0, 16.0), CAT_CHEST));
    parts.push(Block::new("rider.head", (-24.0, 7.0, 98.0), (18.0, 16.0, 16.0), CAT_FUR));
    parts.push(Block::new("rider.ear_far", (-22.0, 8.0, 114.0), (5.0, 4.0, 7.0), CAT_FUR));
    parts.push(Block::new("rider.ear_near", (-22.0, 19.0, 114.0), (5.0, 4.0, 7.0), CAT_FUR));
    parts.push(Block::new("rider.bandana", (-25.0, 6.0, 106.0), (20.0, 18.0, 4.0), BANDANA));
    parts.push(
        Block::new(
            "rider.bandana_tails",
            (-37.0, 12.0, 106.0 + wind * 0.6),
            (12.0, 4.0, 3.0),
            BANDANA,
        )
        .resting_at((-37.0, 12.0, 106.0)),
    );
    parts.push(Block::new("rider.arm_left", (-10.0, 8.0, 84.0), (12.0, 4.0, 4.0), CAT_FUR));
    parts.push(
        Block::new(
            "rider.arm_right",
            (-10.0, 22.0, 86.0 + pose.arm_wave),
            (14.0, 4.0, 4.0),
            CAT_FUR,
        )
        .resting_at((-10.0, 22.0, 86.0)),
    );
}

fn push_flag(parts: &mut PartList, pose: &Pose) {
    const CLOTH_WIDTH: f32 = 15.0;
    const CLOTH_HEIGHT: f32 = 18.0;
    const POLE_HEIGHT: f32 = 90.0;

    let (hand_x, hand_y, rest_z) = HAND;
    let hand_z = rest_z + pose.arm_wave;
    parts.push(
        Block::new("flag.pole", (hand_x, hand_y, hand_z), (3.0, 3.0, POLE_HEIGHT), POLE)
            .resting_at(HAND),
    );

    let top = hand_z + POLE_HEIGHT;
    let rest_top = rest_z + POLE_HEIGHT;
    let quadrants = [
        ("flag.red", FLAG_RED, 0, 0),
        ("flag.green", FLAG_GREEN, 1, 0),
        ("flag.blue", FLAG_BLUE, 0, 1),
        ("flag.yellow", FLAG_YELLOW, 1, 1),
    ];
    for (label, color, column, row) in quadrants {
        let (column, row) = (column as f32, row as f32);
        let x = hand_x - CLOTH_WIDTH * (column + 1.0);
        let y = hand_y + 1.0;
        let drop = CLOTH_HEIGHT * (row + 1.0);
        parts.push(
            Block::new(
                label,
                (x, y, top - drop + pose.flag_wave(column * 1.5)),
                (CLOTH_WIDTH, 1.0, CLOTH_HEIGHT),
                color,
            )
            .resting_at((x, y, rest_top - drop)),
        );
    }
}

/// Particles all rest at the mouth, so they keep slot order among themselves and stay in front
/// of the head.
fn push_fire(parts: &mut PartList, pose: &Pose) {
    let (mouth_x, mouth_y, mouth_z) = MOUTH;
    for particle in &pose.particles {
        let side = particle.size * 0.6;
        let alpha = (particle.alpha * 255.0).round() as u8;
        let color: Color = FIRE_CORE.mix(FIRE_EDGE.with_alpha(255), particle.progress);
        parts.push(
            Block::new(
                "fire.particle",
                (
                    mouth_x + particle.distance * 0.7,
                    mouth_y + particle.spread * 0.4 - side / 2.0,
                    mouth_z - particle.distance * 0.25 - side / 2.0,
                ),
                (side, side, side),
                color.with_alpha(alpha),
            )
            .resting_at(MOUTH),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::PoseConfig;

    #[test]
    fn part_list_is_rebuilt_identically_for_the_same_frame() {
        let pose = Pose::at(321, &PoseConfig::default());
        let first = build_parts(&pose);
        let second = build_parts(&pose);
        assert_eq!(first, second);
        assert_eq!(draw_order(&first), draw_order(&second));
    }

    #[test]
    fn every_part_group_is_present() {
        let parts = build_parts(&Pose::at(0, &PoseConfig { particles: 4 }));
        for prefix in ["mount.", "rider.", "flag.", "fire."] {
            assert!(parts.iter().any(|block| block.label.starts_with(prefix)), "{prefix}");
        }
        assert_eq!(
            parts.iter().filter(|block| block.label == "fire.particle").count(),
            4
        );
    }

    #[test]
    fn default_figure_fits_the_inline_part_list() {
        let parts = build_parts(&Pose::at(0, &PoseConfig::default()));
        assert_eq!(parts.len(), 46);
        assert!(!parts.spilled());
        assert!(!draw_order(&parts).spilled());
    }

    #[test]
    fn rider_has_an_arm_on_each_side() {
        let parts = build_parts(&Pose::at(0, &PoseConfig::default()));
        let arm = |label: &str| {
            parts
                .iter()
                .find(|block| block.label == label)
                .unwrap_or_else(|| panic!("{label} missing"))
        };
        assert!(arm("rider.arm_left").y < arm("rider.arm_right").y);
    }
}
