//! Countdown Blast - a cosmic countdown-and-explosion reveal screen
//!
//! Core modules:
//! - `flow`: Deterministic sequence logic (state machine, countdown, particles)
//! - `view`: DOM view layer (browser only)

pub mod flow;
#[cfg(target_arch = "wasm32")]
pub mod view;

pub use flow::{FlowPhase, FlowState};

use glam::Vec2;

/// Flow configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz is plenty for a once-a-second UI)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Simulation ticks per wall-clock second
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Countdown start value in seconds
    pub const COUNTDOWN_START: u8 = 10;

    /// Particles spawned per explosion
    pub const PARTICLE_BURST: usize = 30;
    /// Maximum radial spawn distance from the center anchor (pixels)
    pub const BURST_RADIUS: f32 = 100.0;
    /// How long the particle layer stays up after the explosion (3 seconds)
    pub const PARTICLE_LINGER_TICKS: u32 = 3 * TICKS_PER_SECOND;
    /// Stagger before a particle's animation starts (seconds, exclusive)
    pub const PARTICLE_MAX_DELAY: f32 = 0.5;
    /// Particle animation lifetime bounds (seconds)
    pub const PARTICLE_MIN_DURATION: f32 = 1.0;
    pub const PARTICLE_MAX_DURATION: f32 = 3.0;
    /// Chance a particle renders as a color dot instead of an emoji glyph
    pub const DOT_CHANCE: f32 = 0.6;

    /// Twinkling backdrop stars
    pub const STARFIELD_COUNT: u32 = 6;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
