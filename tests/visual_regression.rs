/// Visual regression tests for the software canvas and the figure.
///
/// Scenes are rasterized into a straight RGBA8 buffer, then specific pixel locations are
/// validated against expected colors.
///
/// Run with:   cargo test --test visual_regression
use mascot::{Canvas, Color, Direction, RenderStrategy, Shape};
use mascot_test_scenes::{
    build_figure_scene, build_main_scene, check_pixels, PixelExpectation, CANVAS_HEIGHT,
    CANVAS_WIDTH, FIGURE_HEIGHT, FIGURE_WIDTH,
};
use mascot::lyon::math::Transform;
use rstest::rstest;

fn assert_pixels(buffer: &[u8], width: u32, height: u32, expectations: &[PixelExpectation]) {
    let failures = check_pixels(buffer, width, height, expectations);
    if !failures.is_empty() {
        panic!(
            "{} pixel expectation(s) failed:\n{}",
            failures.len(),
            failures.join("\n"),
        );
    }
}

/// Renders all primitive tiles and validates their pixel expectations.
#[test]
fn main_scene_pixel_expectations() {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let expectations = build_main_scene(&mut canvas);

    let mut pixel_buffer = Vec::new();
    canvas.render_to_buffer(&mut pixel_buffer);

    assert_pixels(&pixel_buffer, CANVAS_WIDTH, CANVAS_HEIGHT, &expectations);
}

#[test]
fn main_scene_reuses_cached_tessellation() {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    build_main_scene(&mut canvas);
    canvas.render();

    let stats = canvas.last_frame_stats();
    assert_eq!(stats.cache_misses, 1);
    assert_eq!(stats.cache_hits, 1);
    assert_eq!(canvas.cached_tessellations(), 1);
}

/// An empty draw queue renders a fully transparent buffer.
#[test]
fn empty_draw_queue() {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    let mut pixel_buffer = Vec::new();
    canvas.render_to_buffer(&mut pixel_buffer);

    assert_eq!(
        pixel_buffer.len(),
        (CANVAS_WIDTH * CANVAS_HEIGHT * 4) as usize
    );
    assert!(pixel_buffer.iter().all(|byte| *byte == 0));
}

#[test]
fn clear_color_fills_uncovered_pixels() {
    let mut canvas = Canvas::new(20, 20).with_clear_color(Color::WHITE);
    canvas.add_shape(
        Shape::rect([(5.0, 5.0), (15.0, 15.0)], Color::rgb(200, 50, 50)),
        Transform::identity(),
        None,
    );

    let mut pixel_buffer = Vec::new();
    canvas.render_to_buffer(&mut pixel_buffer);

    assert_pixels(
        &pixel_buffer,
        20,
        20,
        &[
            PixelExpectation::color(10, 10, Color::rgb(200, 50, 50), "center_red"),
            PixelExpectation::color(1, 1, Color::WHITE, "background"),
        ],
    );
}

#[rstest]
#[case(RenderStrategy::Vector, Direction::Right, 0)]
#[case(RenderStrategy::Vector, Direction::Left, 37)]
#[case(RenderStrategy::Blocks, Direction::Right, 0)]
#[case(RenderStrategy::Blocks, Direction::Left, 45)]
fn figure_scene_pixel_expectations(
    #[case] strategy: RenderStrategy,
    #[case] direction: Direction,
    #[case] frame: u64,
) {
    let mut canvas = Canvas::new(FIGURE_WIDTH, FIGURE_HEIGHT);
    let expectations = build_figure_scene(&mut canvas, strategy, direction, frame);

    let mut pixel_buffer = Vec::new();
    canvas.render_to_buffer(&mut pixel_buffer);

    assert_pixels(&pixel_buffer, FIGURE_WIDTH, FIGURE_HEIGHT, &expectations);
    assert_eq!(canvas.last_frame_stats().shapes_skipped, 0);
}

#[rstest]
#[case(RenderStrategy::Vector)]
#[case(RenderStrategy::Blocks)]
fn facing_left_mirrors_the_painted_area(#[case] strategy: RenderStrategy) {
    let painted = |direction| {
        let mut canvas = Canvas::new(FIGURE_WIDTH, FIGURE_HEIGHT);
        build_figure_scene(&mut canvas, strategy, direction, 12);
        canvas.render();
        canvas.painted_pixels()
    };
    let right = painted(Direction::Right) as f64;
    let left = painted(Direction::Left) as f64;
    assert!(right > 0.0);
    assert!((right - left).abs() / right < 0.02, "right {right} vs left {left}");
}
