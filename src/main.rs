use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use mascot::{run_overlay, Color, OverlayOptions, PetConfig, RenderStrategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Curved vector figure
    Vector,
    /// Isometric blocks
    Blocks,
}

impl From<Strategy> for RenderStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Vector => RenderStrategy::Vector,
            Strategy::Blocks => RenderStrategy::Blocks,
        }
    }
}

/// An animated pet that follows the cursor across the screen
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How the figure is drawn
    #[arg(short, long, value_enum, default_value_t = Strategy::Vector)]
    strategy: Strategy,

    /// Figure scale relative to its design size
    #[arg(long, default_value_t = 0.8)]
    scale: f32,

    /// Seed for the wander targets
    #[arg(long)]
    seed: Option<u64>,

    /// Number of fire particles
    #[arg(long, default_value_t = 15)]
    particles: usize,

    /// Let clicks pass through the overlay
    #[arg(long)]
    click_through: bool,

    /// Backdrop color as hex RGB, e.g. 101010
    #[arg(long, value_parser = parse_hex_color)]
    backdrop: Option<Color>,
}

fn parse_hex_color(value: &str) -> Result<Color, String> {
    let digits = value.trim_start_matches('#');
    if digits.len() != 6 {
        return Err(format!("expected six hex digits, got `{value}`"));
    }
    u32::from_str_radix(digits, 16)
        .map(Color::hex)
        .map_err(|error| error.to_string())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut config = PetConfig::default()
        .with_strategy(args.strategy.into())
        .with_scale(args.scale)
        .with_particles(args.particles);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Err(error) = config.validate() {
        eprintln!("invalid configuration: {error}");
        return ExitCode::FAILURE;
    }

    let mut options = OverlayOptions {
        click_through: args.click_through,
        ..OverlayOptions::default()
    };
    if let Some(backdrop) = args.backdrop {
        options.backdrop = backdrop;
    }

    match run_overlay(config, options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
