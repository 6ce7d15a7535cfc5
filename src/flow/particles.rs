//! Explosion particle batch generator
//!
//! Pure with respect to its inputs: all randomness comes through the injected
//! RNG, so a seeded generator reproduces a batch exactly. The batch is owned
//! by the flow state; nothing here schedules its cleanup.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::polar_to_cartesian;

/// Dot colors, picked uniformly
pub const PALETTE: [&str; 6] = [
    "#FF6B35", "#FFD23F", "#FF006E", "#8B5CF6", "#00D4FF", "#10B981",
];

/// Emoji glyphs, picked uniformly
pub const GLYPHS: [&str; 7] = ["💥", "⭐", "✨", "🎆", "🎊", "💫", "🌟"];

/// How a particle is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleKind {
    /// Small round swatch from `PALETTE`
    ColorDot,
    /// Text glyph from `GLYPHS`
    EmojiGlyph,
}

/// A short-lived animated visual element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Unique within a batch (not across batches)
    pub id: u32,
    /// Spawn position, fixed at creation
    pub pos: Vec2,
    pub kind: ParticleKind,
    /// Index into `PALETTE` (dots only)
    pub color: usize,
    /// Index into `GLYPHS` (glyphs only)
    pub glyph: usize,
    /// Seconds before the animation starts
    pub delay: f32,
    /// Animation lifetime in seconds
    pub duration: f32,
}

/// Generate a batch of `count` particles scattered around `center`.
///
/// Positions are polar: uniform angle, uniform distance under `BURST_RADIUS`.
/// Roughly 40% of the batch comes out as emoji glyphs, the rest as dots.
pub fn burst(rng: &mut impl Rng, center: Vec2, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|i| {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let distance = rng.random_range(0.0..BURST_RADIUS);
            let kind = if rng.random::<f32>() > DOT_CHANCE {
                ParticleKind::EmojiGlyph
            } else {
                ParticleKind::ColorDot
            };

            Particle {
                id: i as u32,
                pos: center + polar_to_cartesian(distance, angle),
                kind,
                color: rng.random_range(0..PALETTE.len()),
                glyph: rng.random_range(0..GLYPHS.len()),
                delay: rng.random_range(0.0..PARTICLE_MAX_DELAY),
                duration: rng.random_range(PARTICLE_MIN_DURATION..PARTICLE_MAX_DURATION),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_batch_size_and_unique_ids() {
        let mut rng = Pcg32::seed_from_u64(12345);
        let batch = burst(&mut rng, Vec2::new(640.0, 360.0), PARTICLE_BURST);

        assert_eq!(batch.len(), PARTICLE_BURST);
        for (i, p) in batch.iter().enumerate() {
            assert_eq!(p.id, i as u32);
        }
    }

    #[test]
    fn test_positions_stay_near_center() {
        let center = Vec2::new(640.0, 360.0);
        let mut rng = Pcg32::seed_from_u64(12345);

        for p in burst(&mut rng, center, 500) {
            assert!((p.pos - center).length() <= BURST_RADIUS + 1e-3);
        }
    }

    #[test]
    fn test_batch_mixes_dots_and_glyphs() {
        let mut rng = Pcg32::seed_from_u64(99999);
        let batch = burst(&mut rng, Vec2::ZERO, 1000);

        let dots = batch
            .iter()
            .filter(|p| p.kind == ParticleKind::ColorDot)
            .count();
        // 60% dot chance; a 1000-particle draw should land well inside this band
        assert!(dots > 500, "too few dots: {dots}");
        assert!(dots < 700, "too many dots: {dots}");
    }

    #[test]
    fn test_same_seed_same_batch() {
        let center = Vec2::new(100.0, 100.0);
        let mut a = Pcg32::seed_from_u64(777);
        let mut b = Pcg32::seed_from_u64(777);

        assert_eq!(
            burst(&mut a, center, PARTICLE_BURST),
            burst(&mut b, center, PARTICLE_BURST)
        );
    }

    proptest! {
        #[test]
        fn particle_fields_stay_in_range(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let batch = burst(&mut rng, Vec2::ZERO, PARTICLE_BURST);

            for p in &batch {
                prop_assert!(p.delay >= 0.0 && p.delay < PARTICLE_MAX_DELAY);
                prop_assert!(p.duration >= PARTICLE_MIN_DURATION);
                prop_assert!(p.duration < PARTICLE_MAX_DURATION);
                prop_assert!(p.color < PALETTE.len());
                prop_assert!(p.glyph < GLYPHS.len());
                prop_assert!(p.pos.length() <= BURST_RADIUS + 1e-3);
            }
        }
    }
}
