//! Follow/idle motion of the pet.
//!
//! The controller pulls the pet towards a target with a damped spring: every tick the
//! displacement scaled by the attraction is added to the velocity, which is then multiplied by
//! the damping factor. While the pointer is active the target is the last pointer position.
//! After a period without input the pet wanders: the wander target starts where the pet stands
//! and then jumps to a random in-bounds point once per wander period.
//!
//! Time is logical. A tick lasts one animation timestep, so the idle threshold and the wander
//! period are counted in ticks and the controller behaves identically at any frame rate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::clock::frames_for;
use crate::config::{MotionTuning, PetConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// `1.0` facing right, `-1.0` facing left.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Following the pointer.
    Active,
    /// No recent input; following the wander target.
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Last pointer-supplied target.
    pub target_x: f32,
    pub target_y: f32,
    pub direction: Direction,
    pub scale: f32,
}

/// The rectangle the pet's position is confined to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// The surface minus `margin` on every side. An axis shorter than twice the margin
    /// collapses to its center.
    pub fn inset(width: f32, height: f32, margin: f32) -> Self {
        let (min_x, max_x) = inset_axis(width, margin);
        let (min_y, max_y) = inset_axis(height, margin);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (x.clamp(self.min_x, self.max_x), y.clamp(self.min_y, self.max_y))
    }
}

fn inset_axis(length: f32, margin: f32) -> (f32, f32) {
    let length = length.max(0.0);
    if length < margin * 2.0 {
        let center = length / 2.0;
        (center, center)
    } else {
        (margin, length - margin)
    }
}

/// The idle-mode target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wander {
    pub x: f32,
    pub y: f32,
    /// Number of times the target was re-randomized.
    pub generation: u64,
}

pub struct MotionController {
    state: MotionState,
    tuning: MotionTuning,
    bounds: Bounds,

    ticks: u64,
    last_input_tick: u64,
    idle_threshold_ticks: u64,
    wander_period_ticks: u64,

    wander: Wander,
    /// Ticks spent idle since the wander target was anchored, `None` while active
    idle_ticks: Option<u64>,
    rng: StdRng,
}

impl MotionController {
    /// Places the pet at the center of a `width` x `height` surface, at rest.
    pub fn new(width: f32, height: f32, config: &PetConfig) -> Self {
        let tuning = config.motion;
        let bounds = Bounds::inset(width, height, tuning.margin);
        let (x, y) = bounds.clamp(width / 2.0, height / 2.0);
        Self {
            state: MotionState {
                x,
                y,
                vx: 0.0,
                vy: 0.0,
                target_x: x,
                target_y: y,
                direction: Direction::Right,
                scale: config.scale,
            },
            tuning,
            bounds,
            ticks: 0,
            last_input_tick: 0,
            idle_threshold_ticks: frames_for(tuning.idle_threshold_ms / 1000.0, config.timestep_s),
            wander_period_ticks: frames_for(tuning.wander_period_s, config.timestep_s),
            wander: Wander {
                x,
                y,
                generation: 0,
            },
            idle_ticks: None,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// Records a pointer position. The last call before a tick wins.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.state.target_x = x;
        self.state.target_y = y;
        self.last_input_tick = self.ticks;
    }

    pub fn mode(&self) -> Mode {
        if self.ticks.saturating_sub(self.last_input_tick) >= self.idle_threshold_ticks {
            Mode::Idle
        } else {
            Mode::Active
        }
    }

    /// The point the spring currently pulls towards.
    pub fn effective_target(&self) -> (f32, f32) {
        match self.mode() {
            Mode::Active => (self.state.target_x, self.state.target_y),
            Mode::Idle => (self.wander.x, self.wander.y),
        }
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn wander(&self) -> &Wander {
        &self.wander
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances the simulation by one timestep.
    pub fn tick(&mut self) {
        self.ticks += 1;
        self.advance_wander();

        let (target_x, target_y) = self.effective_target();
        let tuning = self.tuning;
        let state = &mut self.state;

        state.vx = (state.vx + (target_x - state.x) * tuning.attraction) * tuning.damping;
        state.vy = (state.vy + (target_y - state.y) * tuning.attraction) * tuning.damping;
        state.x += state.vx;
        state.y += state.vy;

        self.confine();

        let state = &mut self.state;
        if state.vx.abs() > tuning.deadband {
            let direction = if state.vx > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            };
            if direction != state.direction {
                trace!(?direction, vx = state.vx, "facing direction changed");
                state.direction = direction;
            }
        }
    }

    /// Re-fits the bounds to a new surface size and pulls the position and the wander target
    /// back inside.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::inset(width, height, self.tuning.margin);
        self.confine();
        let (x, y) = self.bounds.clamp(self.wander.x, self.wander.y);
        self.wander.x = x;
        self.wander.y = y;
    }

    fn advance_wander(&mut self) {
        if self.mode() == Mode::Active {
            self.idle_ticks = None;
            return;
        }

        match self.idle_ticks {
            None => {
                debug!(x = self.state.x, y = self.state.y, "pet became idle");
                self.wander.x = self.state.x;
                self.wander.y = self.state.y;
                self.idle_ticks = Some(0);
            }
            Some(ticks) => {
                let ticks = ticks + 1;
                self.idle_ticks = Some(ticks);
                if ticks % self.wander_period_ticks == 0 {
                    self.reroll_wander();
                }
            }
        }
    }

    fn reroll_wander(&mut self) {
        let bounds = self.bounds;
        self.wander.x = self.rng.gen_range(bounds.min_x..=bounds.max_x);
        self.wander.y = self.rng.gen_range(bounds.min_y..=bounds.max_y);
        self.wander.generation += 1;
        debug!(
            x = self.wander.x,
            y = self.wander.y,
            generation = self.wander.generation,
            "new wander target"
        );
    }

    /// Clamps the position; an axis that hit a bound loses its outward velocity.
    fn confine(&mut self) {
        let bounds = self.bounds;
        let state = &mut self.state;
        if state.x < bounds.min_x {
            state.x = bounds.min_x;
            state.vx = state.vx.max(0.0);
        } else if state.x > bounds.max_x {
            state.x = bounds.max_x;
            state.vx = state.vx.min(0.0);
        }
        if state.y < bounds.min_y {
            state.y = bounds.min_y;
            state.vy = state.vy.max(0.0);
        } else if state.y > bounds.max_y {
            state.y = bounds.max_y;
            state.vy = state.vy.min(0.0);
        }
    }
}
