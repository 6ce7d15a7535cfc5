//! Deterministic flow module
//!
//! The whole welcome -> countdown -> explosion sequence lives here. This
//! module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod particles;
pub mod state;
pub mod tick;
pub mod timer;

pub use particles::{Particle, ParticleKind, burst};
pub use state::{FlowInput, FlowPhase, FlowState};
pub use tick::tick;
pub use timer::{CountdownTimer, TimerEvent};
