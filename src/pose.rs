//! Per-frame animation parameters.
//!
//! A [`Pose`] is a pure function of the frame counter: waves are sines of the frame at distinct
//! frequencies, and fire particles are recomputed from their slot index and the frame instead of
//! being simulated. Phases are evaluated in `f64` so they stay smooth however long the pet runs.

use smallvec::SmallVec;

/// Frames a fire particle lives before its slot restarts at the mouth.
pub const FIRE_CYCLE_FRAMES: u64 = 60;
/// Frame offset between two consecutive particle slots.
const FIRE_SLOT_OFFSET: u64 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoseConfig {
    /// Number of fire particle slots.
    pub particles: usize,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self { particles: 15 }
    }
}

/// One fire-breath particle, in the fire's local frame (x along the breath).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireParticle {
    pub slot: usize,
    /// Frames since the particle left the mouth, in `[0, 60)`.
    pub age: u64,
    /// `age / 60`.
    pub progress: f32,
    pub distance: f32,
    pub spread: f32,
    pub size: f32,
    pub alpha: f32,
}

impl FireParticle {
    fn at(frame: u64, slot: usize) -> Self {
        let offset = (slot as u64 % FIRE_CYCLE_FRAMES) * FIRE_SLOT_OFFSET;
        let age = (frame % FIRE_CYCLE_FRAMES + offset) % FIRE_CYCLE_FRAMES;
        let age_f = age as f64;
        let progress = age_f / FIRE_CYCLE_FRAMES as f64;
        Self {
            slot,
            age,
            progress: progress as f32,
            distance: (age_f * 3.0) as f32,
            spread: ((age_f * 0.2 + slot as f64).sin() * age_f * 0.3) as f32,
            size: (2.0 + progress * 10.0) as f32,
            alpha: (1.0 - progress) as f32,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    pub frame: u64,
    /// Vertical offset of the whole figure.
    pub bob: f32,
    pub tail_wave: f32,
    pub mane_phase: f64,
    pub flag_phase: f64,
    pub leg_swing: f32,
    pub bandana_wind: f32,
    pub arm_wave: f32,
    pub particles: SmallVec<[FireParticle; 16]>,
}

impl Pose {
    pub fn at(frame: u64, config: &PoseConfig) -> Self {
        let f = frame as f64;
        Self {
            frame,
            bob: ((f * 0.1).sin() * 5.0) as f32,
            tail_wave: ((f * 0.15).sin() * 10.0) as f32,
            mane_phase: f * 0.2,
            flag_phase: f * 0.17,
            leg_swing: ((f * 0.2).sin() * 10.0) as f32,
            bandana_wind: ((f * 0.2).sin() * 5.0) as f32,
            arm_wave: ((f * 0.1).sin() * 2.0) as f32,
            particles: (0..config.particles)
                .map(|slot| FireParticle::at(frame, slot))
                .collect(),
        }
    }

    /// Sideways offset of mane spike `spike`.
    pub fn mane_offset(&self, spike: usize) -> f32 {
        ((self.mane_phase + spike as f64).sin() * 5.0) as f32
    }

    /// Vertical displacement of the flag cloth at parameter `u` along its length.
    pub fn flag_wave(&self, u: f32) -> f32 {
        ((self.flag_phase + u as f64).sin() * 5.0) as f32
    }
}
