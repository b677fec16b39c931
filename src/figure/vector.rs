//! Fixed-order vector strategy: hand-placed paths, gradients and round-capped strokes drawn back
//! to front. The origin is the center of the mount's torso.

use std::f32::consts::PI;

use super::painter::Painter;
use super::palette::*;
use crate::pose::Pose;
use crate::{Color, Paint, Shape, ShapeBuilder, Stroke};

struct Leg {
    label: &'static str,
    hoof_label: &'static str,
    width: f32,
    length: f32,
    color: Color,
    /// Front legs are drawn folded at the knee.
    bent: bool,
}

const BACK_LEG_FAR: Leg = Leg {
    label: "mount.back_leg_far",
    hoof_label: "mount.back_leg_far.hoof",
    width: 15.0,
    length: 60.0,
    color: COAT_SHADE,
    bent: false,
};

const BACK_LEG_NEAR: Leg = Leg {
    label: "mount.back_leg_near",
    hoof_label: "mount.back_leg_near.hoof",
    width: 16.0,
    length: 65.0,
    color: COAT,
    bent: false,
};

const FRONT_LEG_FAR: Leg = Leg {
    label: "mount.front_leg_far",
    hoof_label: "mount.front_leg_far.hoof",
    width: 12.0,
    length: 50.0,
    color: COAT_SHADE,
    bent: true,
};

const FRONT_LEG_NEAR: Leg = Leg {
    label: "mount.front_leg_near",
    hoof_label: "mount.front_leg_near.hoof",
    width: 13.0,
    length: 50.0,
    color: COAT,
    bent: true,
};

/// Where the rider sits, relative to the torso center.
const SADDLE: (f32, f32) = (10.0, -35.0);
/// The mount's mouth, where the fire breath starts.
const MOUTH: (f32, f32) = (85.0, -80.0);

pub(super) fn draw(painter: &mut Painter<'_>, pose: &Pose) {
    draw_mount(painter, pose);
    draw_rider(painter, pose);
    draw_fire(painter, pose);
}

fn draw_leg(painter: &mut Painter<'_>, leg: &Leg) {
    let (w, h) = (leg.width, leg.length);
    let (points, hoof) = if leg.bent {
        ([(0.0, 0.0), (w, -h / 2.0), (w * 2.0, 0.0)], (w * 2.0, 0.0))
    } else {
        ([(0.0, 0.0), (-5.0, h / 2.0), (5.0, h)], (5.0, h))
    };
    painter.draw_static(
        leg.label,
        Shape::polyline(&points, Stroke::new(w, leg.color).rounded()),
    );
    painter.draw_static(
        leg.hoof_label,
        Shape::ellipse((hoof.0, hoof.1 + 2.0), (w / 2.0 + 2.0, w / 3.0), 0.0, HOOF),
    );
}

fn golden_gradient() -> Paint {
    Paint::linear(
        (-100.0, 20.0),
        (-140.0, 100.0),
        &[(0.0, GOLD_LIGHT), (1.0, GOLD_DARK)],
    )
}

fn draw_mount(painter: &mut Painter<'_>, pose: &Pose) {
    painter.save();
    painter.translate(-40.0, 60.0);
    painter.rotate(0.2);
    draw_leg(painter, &BACK_LEG_FAR);
    painter.restore();

    let tw = pose.tail_wave;
    painter.draw(
        "mount.tail",
        ShapeBuilder::new()
            .fill(golden_gradient())
            .stroke(Stroke::new(1.0, TAIL_OUTLINE))
            .begin((-70.0, 20.0))
            .cubic_bezier_to((-100.0, 30.0), (-120.0 + tw, 80.0), (-140.0 + tw, 100.0))
            .cubic_bezier_to((-110.0 + tw, 90.0), (-90.0, 40.0), (-60.0, 25.0))
            .close(),
    );

    painter.save();
    painter.rotate(-PI / 4.5);
    painter.draw_static(
        "mount.torso",
        Shape::ellipse(
            (0.0, 0.0),
            (45.0, 80.0),
            0.0,
            Paint::radial(
                (-10.0, -10.0),
                10.0,
                80.0,
                &[(0.0, COAT), (0.5, COAT_MID), (1.0, COAT_SHADE)],
            ),
        ),
    );
    painter.restore();

    painter.save();
    painter.translate(-50.0, 75.0);
    painter.rotate(0.1);
    painter.scale(1.1, 1.1);
    draw_leg(painter, &BACK_LEG_NEAR);
    painter.restore();

    painter.save();
    painter.translate(20.0, -40.0);
    painter.rotate(-0.2);
    draw_neck_and_head(painter, pose);
    painter.restore();

    let swing = pose.leg_swing * 0.01;

    painter.save();
    painter.translate(20.0, -10.0);
    painter.rotate(-0.5 + swing);
    draw_leg(painter, &FRONT_LEG_FAR);
    painter.restore();

    painter.save();
    painter.translate(30.0, -20.0);
    painter.rotate(-0.8 - swing);
    draw_leg(painter, &FRONT_LEG_NEAR);
    painter.restore();
}

fn draw_neck_and_head(painter: &mut Painter<'_>, pose: &Pose) {
    painter.draw_static(
        "mount.neck",
        ShapeBuilder::new()
            .fill(COAT)
            .begin((0.0, 20.0))
            .quadratic_bezier_to((10.0, -20.0), (25.0, -40.0))
            .line_to((55.0, -40.0))
            .quadratic_bezier_to((50.0, -10.0), (30.0, 30.0))
            .close(),
    );

    painter.translate(40.0, -45.0);

    painter.draw_static(
        "mount.head",
        ShapeBuilder::new()
            .fill(COAT)
            .begin((0.0, 0.0))
            .line_to((25.0, 5.0))
            .line_to((24.0, 15.0))
            .line_to((0.0, 20.0))
            .cubic_bezier_to((-10.0, 25.0), (-20.0, 15.0), (-20.0, 0.0))
            .close(),
    );

    painter.draw_static(
        "mount.ear",
        ShapeBuilder::new()
            .fill(COAT)
            .stroke(Stroke::new(1.0, COAT_SHADE))
            .begin((-15.0, 0.0))
            .line_to((-20.0, -15.0))
            .line_to((-10.0, -5.0))
            .close(),
    );

    painter.draw_static("mount.eye", Shape::ellipse((-5.0, 5.0), (4.0, 3.0), 0.0, EYE));

    painter.draw_static(
        "mount.horn",
        ShapeBuilder::new()
            .fill(Paint::linear(
                (0.0, 0.0),
                (35.0, -35.0),
                &[(0.0, HORN_BASE), (0.5, HORN_MID), (1.0, HORN_TIP)],
            ))
            .stroke(Stroke::new(1.0, HORN_OUTLINE))
            .begin((-5.0, -5.0))
            .line_to((35.0, -35.0))
            .line_to((0.0, 0.0))
            .close(),
    );

    let mut mane = ShapeBuilder::new()
        .fill(golden_gradient())
        .stroke(Stroke::new(1.0, HORN_OUTLINE))
        .begin((-20.0, -10.0));
    for spike in 0..5 {
        let i = spike as f32;
        mane = mane
            .line_to((-35.0 - i * 5.0 + pose.mane_offset(spike), 10.0 + i * 15.0))
            .line_to((-20.0 - i * 2.0, 20.0 + i * 15.0));
    }
    painter.draw("mount.mane", mane.line_to((-5.0, 0.0)).close());
}

fn draw_rider(painter: &mut Painter<'_>, pose: &Pose) {
    painter.save();
    painter.translate(SADDLE.0, SADDLE.1);

    painter.draw_static(
        "rider.torso",
        Shape::ellipse((0.0, 0.0), (15.0, 25.0), -0.2, CAT_FUR),
    );
    painter.draw_static(
        "rider.chest",
        Shape::ellipse((5.0, -5.0), (8.0, 12.0), -0.2, CAT_CHEST),
    );

    painter.save();
    painter.translate(5.0, -25.0);
    painter.draw_static("rider.head", Shape::circle((0.0, 0.0), 14.0, CAT_FUR));
    painter.draw_static(
        "rider.ears",
        ShapeBuilder::new()
            .fill(CAT_FUR)
            .begin((-10.0, -5.0))
            .line_to((-12.0, -22.0))
            .line_to((-2.0, -10.0))
            .close()
            .begin((2.0, -10.0))
            .line_to((12.0, -22.0))
            .line_to((10.0, -5.0))
            .close(),
    );
    painter.draw_static(
        "rider.bandana",
        Shape::rect([(-14.0, -8.0), (14.0, -2.0)], BANDANA),
    );
    let wind = pose.bandana_wind;
    painter.draw(
        "rider.bandana_tails",
        ShapeBuilder::new()
            .fill(BANDANA)
            .begin((-14.0, -5.0))
            .quadratic_bezier_to((-30.0, -5.0 + wind), (-40.0, -10.0 + wind))
            .line_to((-40.0, wind))
            .quadratic_bezier_to((-30.0, 5.0 + wind), (-14.0, 0.0))
            .close(),
    );
    painter.restore();

    let arm = Stroke::new(6.0, CAT_FUR);
    painter.draw_static(
        "rider.arm_left",
        ShapeBuilder::new()
            .stroke(arm)
            .begin((-5.0, 15.0))
            .quadratic_bezier_to((-15.0, 20.0), (-10.0, 30.0)),
    );
    let hand = (20.0, 10.0 + pose.arm_wave);
    painter.draw("rider.arm_right", Shape::polyline(&[(5.0, 15.0), hand], arm));

    painter.save();
    painter.translate(hand.0, hand.1);
    draw_flag(painter, pose);
    painter.restore();

    painter.restore();
}

/// Flag flying backwards from a pole held at the local origin.
fn draw_flag(painter: &mut Painter<'_>, pose: &Pose) {
    const TOP: f32 = -80.0;
    const WIDTH: f32 = 60.0;
    const HEIGHT: f32 = 40.0;

    painter.draw_static(
        "flag.pole",
        Shape::polyline(&[(0.0, 10.0), (0.0, TOP)], Stroke::new(3.0, POLE)),
    );

    let (qw, qh) = (WIDTH / 2.0, HEIGHT / 2.0);
    let quadrants = [
        ("flag.red", FLAG_RED, 0.0, 0.0),
        ("flag.green", FLAG_GREEN, qw, 0.0),
        ("flag.blue", FLAG_BLUE, 0.0, qh),
        ("flag.yellow", FLAG_YELLOW, qw, qh),
    ];
    for (label, color, dx, dy) in quadrants {
        let near = pose.flag_wave(dx / 20.0);
        let far = pose.flag_wave((dx + qw) / 20.0);
        painter.draw(
            label,
            Shape::polygon(
                &[
                    (-dx, TOP + dy + near),
                    (-dx - qw, TOP + dy + far),
                    (-dx - qw, TOP + dy + qh + far),
                    (-dx, TOP + dy + qh + near),
                ],
                color,
            ),
        );
    }
}

fn draw_fire(painter: &mut Painter<'_>, pose: &Pose) {
    painter.save();
    painter.translate(MOUTH.0, MOUTH.1);
    painter.rotate(0.3);
    for particle in &pose.particles {
        let center = (particle.distance, particle.spread);
        let alpha = (particle.alpha * 255.0).round() as u8;
        painter.draw(
            "fire.particle",
            Shape::circle(
                center,
                particle.size,
                Paint::radial(
                    center,
                    0.0,
                    particle.size,
                    &[
                        (0.0, FIRE_CORE.with_alpha(alpha)),
                        (0.5, FIRE_MID.with_alpha(alpha)),
                        (1.0, FIRE_EDGE),
                    ],
                ),
            ),
        );
    }
    painter.restore();
}
