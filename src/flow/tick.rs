//! Fixed timestep flow tick
//!
//! Advances the welcome -> countdown -> explosion sequence deterministically.
//! The host loop calls this once per `SIM_DT`; everything else (DOM, buttons,
//! keyboard) only fills in a `FlowInput`.

use super::state::{FlowInput, FlowPhase, FlowState};
use super::timer::TimerEvent;

/// Advance the flow by one fixed timestep
pub fn tick(state: &mut FlowState, input: &FlowInput) {
    // Reset wins over everything else and is valid from any phase but welcome
    if input.reset && state.phase != FlowPhase::Welcome {
        state.reset();
        return;
    }

    // Start is only honored on the welcome screen. A second press while the
    // countdown is already running must not stack another cadence.
    if input.start && state.phase == FlowPhase::Welcome {
        state.begin_countdown();
    }

    if input.skip_countdown && state.phase == FlowPhase::Countdown {
        state.countdown.skip_to_last_second();
    }

    state.time_ticks += 1;

    if let TimerEvent::Exhausted = state.countdown.tick() {
        state.trigger_explosion();
    }

    // One-shot particle cleanup; leaves the phase alone
    if let Some(ticks) = state.cleanup_ticks {
        let ticks = ticks.saturating_sub(1);
        if ticks == 0 {
            state.particles.clear();
            state.cleanup_ticks = None;
        } else {
            state.cleanup_ticks = Some(ticks);
        }
    }
}
