//! Flow state and transitions
//!
//! All state for the welcome -> countdown -> explosion sequence lives here.
//! One `FlowState` exists per session; the view reads it, only the flow tick
//! mutates it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::particles::{self, Particle};
use super::timer::CountdownTimer;
use crate::consts::*;

/// Current phase of the reveal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FlowPhase {
    /// Idle landing screen, waiting for the start trigger
    #[default]
    Welcome,
    /// Ten-second countdown is running
    Countdown,
    /// Post-countdown screen; stays up until reset
    Explosion,
}

/// Input triggers for a single tick
#[derive(Debug, Clone, Default)]
pub struct FlowInput {
    /// Begin the countdown (start button)
    pub start: bool,
    /// Return to the welcome screen (reset button)
    pub reset: bool,
    /// Jump to the final countdown second (debug/testing)
    pub skip_countdown: bool,
}

/// Complete flow state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowState {
    /// Session seed for particle randomness
    pub seed: u64,
    /// Current phase
    pub phase: FlowPhase,
    /// Seconds-granularity countdown
    pub countdown: CountdownTimer,
    /// Ticks until the particle layer is cleared (None = nothing scheduled)
    pub cleanup_ticks: Option<u32>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Screen-center anchor for particle bursts
    pub center: Vec2,
    /// Live particle batch (non-empty only during the explosion phase)
    pub particles: Vec<Particle>,
}

impl FlowState {
    /// Create a fresh flow on the welcome screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: FlowPhase::Welcome,
            countdown: CountdownTimer::default(),
            cleanup_ticks: None,
            time_ticks: 0,
            center: Vec2::ZERO,
            particles: Vec::new(),
        }
    }

    /// Point the burst anchor at the middle of a w x h viewport
    pub fn set_center(&mut self, w: f32, h: f32) {
        self.center = Vec2::new(w / 2.0, h / 2.0);
    }

    /// welcome -> countdown
    pub(crate) fn begin_countdown(&mut self) {
        self.phase = FlowPhase::Countdown;
        self.countdown.start();
    }

    /// countdown -> explosion: spawn the batch and schedule its cleanup
    pub(crate) fn trigger_explosion(&mut self) {
        self.phase = FlowPhase::Explosion;
        // Fold the tick counter into the seed so each burst in a session
        // draws a different batch while staying reproducible
        let mut rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.time_ticks));
        self.particles = particles::burst(&mut rng, self.center, PARTICLE_BURST);
        self.cleanup_ticks = Some(PARTICLE_LINGER_TICKS);
    }

    /// any -> welcome: cancel pending timers and empty the particle layer
    pub fn reset(&mut self) {
        self.phase = FlowPhase::Welcome;
        self.countdown.reset();
        self.cleanup_ticks = None;
        self.particles.clear();
    }
}
