use std::f32::consts::FRAC_PI_2;

use mascot::lyon::math::{vector, Transform};
use mascot::{
    Canvas, Color, Direction, FigureRenderer, MotionState, Paint, Pose, PoseConfig,
    RenderStrategy, Shape, Stroke,
};

use crate::expectations::PixelExpectation;

// ── Grid layout ──────────────────────────────────────────────────────────────

const TILE_SIZE: u32 = 80;
const COLUMNS: u32 = 6;
const ROWS: u32 = 3;

pub const CANVAS_WIDTH: u32 = TILE_SIZE * COLUMNS;
pub const CANVAS_HEIGHT: u32 = TILE_SIZE * ROWS;

pub const FIGURE_WIDTH: u32 = 400;
pub const FIGURE_HEIGHT: u32 = 300;

const RED: Color = Color::hex(0xD50000);
const GREEN: Color = Color::hex(0x2E7D32);
const BLUE: Color = Color::hex(0x1565C0);
const GOLD: Color = Color::hex(0xFFB300);
const PURPLE: Color = Color::hex(0x6A1B9A);
const TEAL: Color = Color::hex(0x00897B);
const BROWN: Color = Color::hex(0x5D4037);

/// Pixel origin (top-left corner) of tile number `n` (1-based).
fn tile_origin(tile_number: u32) -> (f32, f32) {
    let index = tile_number - 1;
    let column = index % COLUMNS;
    let row = index / COLUMNS;
    ((column * TILE_SIZE) as f32, (row * TILE_SIZE) as f32)
}

/// Pixel coordinates at an offset inside tile `n`.
fn at(tile_number: u32, dx: u32, dy: u32) -> (u32, u32) {
    let (ox, oy) = tile_origin(tile_number);
    (ox as u32 + dx, oy as u32 + dy)
}

fn color_at(tile: u32, dx: u32, dy: u32, color: Color, label: &'static str) -> PixelExpectation {
    let (x, y) = at(tile, dx, dy);
    PixelExpectation::color(x, y, color, label)
}

fn painted_at(tile: u32, dx: u32, dy: u32, label: &'static str) -> PixelExpectation {
    let (x, y) = at(tile, dx, dy);
    PixelExpectation::painted(x, y, label)
}

fn empty_at(tile: u32, dx: u32, dy: u32, label: &'static str) -> PixelExpectation {
    let (x, y) = at(tile, dx, dy);
    PixelExpectation::transparent(x, y, label)
}

/// Queues the primitive test scene on `canvas` and returns the pixel expectations for it.
pub fn build_main_scene(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let mut expectations = Vec::new();

    expectations.extend(tile_01_rect_solid(canvas));
    expectations.extend(tile_02_polygon_triangle(canvas));
    expectations.extend(tile_03_circle(canvas));
    expectations.extend(tile_04_path_bezier(canvas));
    expectations.extend(tile_05_translated_rect(canvas));
    expectations.extend(tile_06_rect_at_canvas_edge(canvas));
    expectations.extend(tile_07_scaled_rect(canvas));
    expectations.extend(tile_08_mirrored_rect(canvas));
    expectations.extend(tile_09_linear_gradient(canvas));
    expectations.extend(tile_10_radial_gradient(canvas));
    expectations.extend(tile_11_stroked_polyline(canvas));
    expectations.extend(tile_12_round_cap(canvas));
    expectations.extend(tile_13_alpha_overlap(canvas));
    expectations.extend(tile_14_fully_transparent(canvas));
    expectations.extend(tile_15_tiny_1px_shape(canvas));
    expectations.extend(tile_16_cached_shape(canvas));
    expectations.extend(tile_17_stroke_over_fill(canvas));
    expectations.extend(tile_18_rotated_ellipse(canvas));

    expectations
}

fn tile_01_rect_solid(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(1);
    canvas.add_shape(
        Shape::rect([(ox + 10.0, oy + 10.0), (ox + 70.0, oy + 70.0)], RED),
        Transform::identity(),
        None,
    );
    vec![
        color_at(1, 40, 40, RED, "t01_center"),
        color_at(1, 10, 10, RED, "t01_top_left_inside"),
        empty_at(1, 5, 5, "t01_outside"),
        empty_at(1, 70, 40, "t01_right_edge_exclusive"),
    ]
}

fn tile_02_polygon_triangle(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(2);
    canvas.add_shape(
        Shape::polygon(
            &[
                (ox + 10.0, oy + 70.0),
                (ox + 70.0, oy + 70.0),
                (ox + 40.0, oy + 10.0),
            ],
            GREEN,
        ),
        Transform::identity(),
        None,
    );
    vec![
        color_at(2, 40, 55, GREEN, "t02_inside"),
        empty_at(2, 12, 15, "t02_outside_slope"),
    ]
}

fn tile_03_circle(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(3);
    canvas.add_shape(
        Shape::circle((ox + 40.0, oy + 40.0), 30.0, BLUE),
        Transform::identity(),
        None,
    );
    vec![
        color_at(3, 40, 40, BLUE, "t03_center"),
        color_at(3, 40, 67, BLUE, "t03_near_bottom"),
        empty_at(3, 13, 13, "t03_corner"),
    ]
}

fn tile_04_path_bezier(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(4);
    // Apex of the curve sits at y = oy + 30
    let arch = Shape::builder()
        .fill(GOLD)
        .begin((ox + 10.0, oy + 70.0))
        .quadratic_bezier_to((ox + 40.0, oy - 10.0), (ox + 70.0, oy + 70.0))
        .close()
        .build();
    canvas.add_shape(arch, Transform::identity(), None);
    vec![
        color_at(4, 40, 50, GOLD, "t04_under_arch"),
        empty_at(4, 40, 20, "t04_above_apex"),
    ]
}

fn tile_05_translated_rect(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(5);
    canvas.add_shape(
        Shape::rect([(0.0, 0.0), (20.0, 20.0)], PURPLE),
        Transform::translation(ox + 30.0, oy + 30.0),
        None,
    );
    vec![
        color_at(5, 40, 40, PURPLE, "t05_translated"),
        empty_at(5, 25, 25, "t05_before_origin"),
        empty_at(5, 0, 0, "t05_local_origin_untouched"),
    ]
}

fn tile_06_rect_at_canvas_edge(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(6);
    canvas.add_shape(
        Shape::rect([(ox + 60.0, oy + 10.0), (ox + 140.0, oy + 30.0)], TEAL),
        Transform::identity(),
        None,
    );
    vec![
        color_at(6, 79, 20, TEAL, "t06_last_column"),
        color_at(6, 60, 20, TEAL, "t06_inside"),
    ]
}

fn tile_07_scaled_rect(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(7);
    canvas.add_shape(
        Shape::rect([(0.0, 0.0), (10.0, 10.0)], BROWN),
        Transform::scale(4.0, 4.0).then_translate(vector(ox + 20.0, oy + 20.0)),
        None,
    );
    vec![
        color_at(7, 55, 55, BROWN, "t07_scaled_far_corner"),
        empty_at(7, 65, 65, "t07_beyond_scale"),
    ]
}

fn tile_08_mirrored_rect(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(8);
    canvas.add_shape(
        Shape::rect([(0.0, 0.0), (30.0, 20.0)], TEAL),
        Transform::scale(-1.0, 1.0).then_translate(vector(ox + 60.0, oy + 30.0)),
        None,
    );
    vec![
        color_at(8, 45, 40, TEAL, "t08_mirrored_inside"),
        empty_at(8, 65, 40, "t08_unmirrored_side"),
    ]
}

fn tile_09_linear_gradient(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(9);
    let gradient = Paint::linear(
        (ox + 10.0, oy),
        (ox + 70.0, oy),
        &[(0.0, Color::BLACK), (1.0, Color::WHITE)],
    );
    canvas.add_shape(
        Shape::rect([(ox + 10.0, oy + 10.0), (ox + 70.0, oy + 70.0)], gradient),
        Transform::identity(),
        None,
    );
    vec![
        color_at(9, 40, 40, Color::rgb(130, 130, 130), "t09_midpoint"),
        color_at(9, 10, 40, Color::BLACK, "t09_start").with_tolerance(8),
        color_at(9, 69, 40, Color::WHITE, "t09_end").with_tolerance(8),
    ]
}

fn tile_10_radial_gradient(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(10);
    let center = (ox + 40.0, oy + 40.0);
    let gradient = Paint::radial(center, 0.0, 30.0, &[(0.0, Color::WHITE), (1.0, RED)]);
    canvas.add_shape(Shape::circle(center, 30.0, gradient), Transform::identity(), None);
    // 20.5 px from the center: t ≈ 0.68
    let red_ratio = 20.5 / 30.0;
    let mixed = Color::WHITE.mix(RED, red_ratio);
    vec![
        color_at(10, 40, 40, Color::WHITE, "t10_center").with_tolerance(10),
        color_at(10, 60, 40, mixed, "t10_two_thirds"),
    ]
}

fn tile_11_stroked_polyline(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(11);
    canvas.add_shape(
        Shape::polyline(
            &[(ox + 10.0, oy + 40.0), (ox + 70.0, oy + 40.0)],
            Stroke::new(10.0, BROWN),
        ),
        Transform::identity(),
        None,
    );
    vec![
        color_at(11, 40, 42, BROWN, "t11_on_line"),
        empty_at(11, 40, 50, "t11_beyond_half_width"),
        empty_at(11, 6, 40, "t11_butt_cap"),
    ]
}

fn tile_12_round_cap(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(12);
    canvas.add_shape(
        Shape::polyline(
            &[(ox + 20.0, oy + 40.0), (ox + 60.0, oy + 40.0)],
            Stroke::new(16.0, PURPLE).rounded(),
        ),
        Transform::identity(),
        None,
    );
    vec![
        color_at(12, 14, 40, PURPLE, "t12_round_cap_start"),
        color_at(12, 65, 40, PURPLE, "t12_round_cap_end"),
        empty_at(12, 20, 55, "t12_beyond_width"),
    ]
}

fn tile_13_alpha_overlap(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(13);
    canvas.add_shape(
        Shape::rect([(ox + 10.0, oy + 10.0), (ox + 50.0, oy + 70.0)], Color::rgb(255, 0, 0)),
        Transform::identity(),
        None,
    );
    canvas.add_shape(
        Shape::rect(
            [(ox + 30.0, oy + 10.0), (ox + 70.0, oy + 70.0)],
            Color::rgba(0, 0, 255, 128),
        ),
        Transform::identity(),
        None,
    );
    vec![
        color_at(13, 20, 40, Color::rgb(255, 0, 0), "t13_under_only"),
        color_at(13, 40, 40, Color::rgb(127, 0, 128), "t13_overlap"),
        color_at(13, 60, 40, Color::rgba(0, 0, 255, 128), "t13_translucent_only"),
    ]
}

fn tile_14_fully_transparent(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(14);
    canvas.add_shape(
        Shape::rect([(ox + 10.0, oy + 10.0), (ox + 70.0, oy + 70.0)], Color::TRANSPARENT),
        Transform::identity(),
        None,
    );
    vec![empty_at(14, 40, 40, "t14_invisible_fill")]
}

fn tile_15_tiny_1px_shape(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(15);
    canvas.add_shape(
        Shape::rect([(ox + 40.0, oy + 40.0), (ox + 41.0, oy + 41.0)], Color::WHITE),
        Transform::identity(),
        None,
    );
    vec![
        color_at(15, 40, 40, Color::WHITE, "t15_single_pixel"),
        empty_at(15, 41, 40, "t15_right_neighbour"),
        empty_at(15, 40, 41, "t15_bottom_neighbour"),
    ]
}

fn tile_16_cached_shape(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(16);
    let square = Shape::rect([(0.0, 0.0), (20.0, 20.0)], GREEN);
    let key = Some(0x7E57);
    canvas.add_shape(square.clone(), Transform::translation(ox + 10.0, oy + 10.0), key);
    canvas.add_shape(square, Transform::translation(ox + 50.0, oy + 50.0), key);
    vec![
        color_at(16, 20, 20, GREEN, "t16_first_instance"),
        color_at(16, 60, 60, GREEN, "t16_cached_instance"),
        empty_at(16, 40, 40, "t16_between"),
    ]
}

fn tile_17_stroke_over_fill(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(17);
    let outlined = Shape::rect([(ox + 20.0, oy + 20.0), (ox + 60.0, oy + 60.0)], GOLD)
        .with_stroke(Stroke::new(6.0, Color::BLACK));
    canvas.add_shape(outlined, Transform::identity(), None);
    vec![
        color_at(17, 40, 40, GOLD, "t17_fill"),
        color_at(17, 20, 40, Color::BLACK, "t17_outline_left"),
        color_at(17, 40, 59, Color::BLACK, "t17_outline_bottom"),
    ]
}

fn tile_18_rotated_ellipse(canvas: &mut Canvas) -> Vec<PixelExpectation> {
    let (ox, oy) = tile_origin(18);
    canvas.add_shape(
        Shape::ellipse((ox + 40.0, oy + 40.0), (30.0, 8.0), FRAC_PI_2, BLUE),
        Transform::identity(),
        None,
    );
    vec![
        color_at(18, 40, 65, BLUE, "t18_along_major_axis"),
        empty_at(18, 60, 40, "t18_across_minor_axis"),
    ]
}

/// Queues one frame of the figure, facing `direction` at the center of a
/// [`FIGURE_WIDTH`] x [`FIGURE_HEIGHT`] canvas, and returns expectations that hold for every
/// frame.
pub fn build_figure_scene(
    canvas: &mut Canvas,
    strategy: RenderStrategy,
    direction: Direction,
    frame: u64,
) -> Vec<PixelExpectation> {
    let anchor = (FIGURE_WIDTH as f32 / 2.0, FIGURE_HEIGHT as f32 / 2.0);
    let state = MotionState {
        x: anchor.0,
        y: anchor.1,
        vx: 0.0,
        vy: 0.0,
        target_x: anchor.0,
        target_y: anchor.1,
        direction,
        scale: 1.0,
    };
    let pose = Pose::at(frame, &PoseConfig::default());
    FigureRenderer::new(strategy).render(canvas, &pose, &state);

    let (ax, ay) = (anchor.0 as u32, (anchor.1 + pose.bob) as u32);
    let mut expectations = vec![
        PixelExpectation::transparent(2, 2, "figure_top_left_corner"),
        PixelExpectation::transparent(FIGURE_WIDTH - 3, FIGURE_HEIGHT - 3, "figure_bottom_right"),
    ];
    match strategy {
        RenderStrategy::Vector => {
            expectations.push(PixelExpectation::painted(ax, ay, "vector_torso_center"));
        }
        RenderStrategy::Blocks => {
            // Top face of the torso block, 27 px behind the anchor
            let behind = match direction {
                Direction::Right => ax - 27,
                Direction::Left => ax + 27,
            };
            expectations.push(PixelExpectation::painted(behind, ay - 2, "blocks_torso_top"));
        }
    }
    expectations
}
