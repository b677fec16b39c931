pub mod expectations;
pub mod scene;

pub use expectations::{check_pixels, Expected, PixelExpectation};
pub use scene::{
    build_figure_scene, build_main_scene, CANVAS_HEIGHT, CANVAS_WIDTH, FIGURE_HEIGHT,
    FIGURE_WIDTH,
};
