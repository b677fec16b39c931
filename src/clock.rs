/// Monotonic frame counter with a fixed logical timestep.
///
/// Every animated value is derived from [`AnimationClock::frame`], so two frames with the same
/// counter always look the same regardless of how long rendering took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    frame: u64,
    step_s: f64,
}

impl AnimationClock {
    /// `step_s` is validated upstream to be positive.
    pub fn new(step_s: f64) -> Self {
        Self { frame: 0, step_s }
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.saturating_add(1);
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Logical seconds since the clock started.
    pub fn elapsed(&self) -> f64 {
        self.frame as f64 * self.step_s
    }
}

/// Number of whole `step_s` frames covering at least `duration_s`, never less than one.
pub(crate) fn frames_for(duration_s: f64, step_s: f64) -> u64 {
    // Absorbs the representation error of steps like 1/60.
    let frames = (duration_s / step_s - 1e-9).ceil();
    if frames.is_finite() && frames >= 1.0 {
        frames as u64
    } else {
        1
    }
}
