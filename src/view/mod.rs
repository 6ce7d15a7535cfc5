//! DOM view layer
//!
//! Maps the current flow state onto the static markup in `index.html`:
//! shows/hides the phase panels, updates the countdown numeral, and fills or
//! empties the particle layer. All state lives in `flow::FlowState`; this
//! module only writes the DOM, and only when something actually changed.

use rand::Rng;
use web_sys::Document;

use crate::consts::STARFIELD_COUNT;
use crate::flow::particles::{GLYPHS, PALETTE};
use crate::flow::{FlowPhase, FlowState, ParticleKind};

/// What the DOM currently shows, so frames that change nothing write nothing
#[derive(Debug, Default)]
pub struct ViewCache {
    phase: Option<FlowPhase>,
    countdown: Option<u8>,
    particle_count: usize,
}

/// Bring the page in line with `state`
pub fn sync(document: &Document, state: &FlowState, cache: &mut ViewCache) {
    if cache.phase != Some(state.phase) {
        show_phase(document, state.phase);
        cache.phase = Some(state.phase);
    }

    if cache.countdown != Some(state.countdown.remaining) {
        set_countdown_number(document, state.countdown.remaining);
        cache.countdown = Some(state.countdown.remaining);
    }

    if cache.particle_count != state.particles.len() {
        rebuild_particle_layer(document, state);
        cache.particle_count = state.particles.len();
    }
}

fn show_phase(document: &Document, phase: FlowPhase) {
    let panels = [
        ("welcome-state", FlowPhase::Welcome),
        ("countdown-state", FlowPhase::Countdown),
        ("explosion-state", FlowPhase::Explosion),
    ];
    for (id, visible_in) in panels {
        set_hidden(document, id, phase != visible_in);
    }

    // Start button only on the welcome screen, reset button everywhere else
    set_hidden(document, "start-btn", phase != FlowPhase::Welcome);
    set_hidden(document, "reset-btn", phase == FlowPhase::Welcome);
}

fn set_hidden(document: &Document, id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
    }
}

/// Replace the numeral span so the pop animation replays on every change
fn set_countdown_number(document: &Document, remaining: u8) {
    if let Some(el) = document.get_element_by_id("countdown-number") {
        el.set_inner_html(&format!("<span class=\"pop\">{remaining}</span>"));
    }
}

fn rebuild_particle_layer(document: &Document, state: &FlowState) {
    let Some(layer) = document.get_element_by_id("particle-layer") else {
        return;
    };
    layer.set_inner_html("");

    for p in &state.particles {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        match p.kind {
            ParticleKind::ColorDot => {
                let _ = el.set_attribute("class", "particle");
                let _ = el.set_attribute(
                    "style",
                    &format!(
                        "left:{:.1}px;top:{:.1}px;background-color:{};animation-delay:{:.2}s;animation-duration:{:.2}s",
                        p.pos.x, p.pos.y, PALETTE[p.color], p.delay, p.duration
                    ),
                );
            }
            ParticleKind::EmojiGlyph => {
                el.set_text_content(Some(GLYPHS[p.glyph]));
                let _ = el.set_attribute("class", "particle glyph");
                let _ = el.set_attribute(
                    "style",
                    &format!(
                        "left:{:.1}px;top:{:.1}px;animation-delay:{:.2}s;animation-duration:{:.2}s",
                        p.pos.x, p.pos.y, p.delay, p.duration
                    ),
                );
            }
        }
        let _ = layer.append_child(&el);
    }
}

/// Scatter the twinkling backdrop stars. Runs once at boot.
pub fn spawn_starfield(document: &Document, rng: &mut impl Rng) {
    let Some(field) = document.get_element_by_id("starfield") else {
        return;
    };

    for i in 0..STARFIELD_COUNT {
        let Ok(star) = document.create_element("div") else {
            continue;
        };
        let tint = match i % 3 {
            0 => "star blue",
            1 => "star purple",
            _ => "star",
        };
        let size = if i % 2 == 0 { 3 } else { 2 };
        let _ = star.set_attribute("class", tint);
        let _ = star.set_attribute(
            "style",
            &format!(
                "top:{:.1}%;left:{:.1}%;width:{size}px;height:{size}px;animation-duration:{:.2}s;animation-delay:{:.2}s",
                rng.random_range(0.0..100.0f32),
                rng.random_range(0.0..100.0f32),
                rng.random_range(2.0..4.0f32),
                rng.random_range(0.0..2.0f32),
            ),
        );
        let _ = field.append_child(&star);
    }
}
