//! Decorative page effects.
//!
//! Particles and sparkles are generated once at page load from an
//! injected RNG, so a seeded generator reproduces the same decorations.
//! [`ScrollReveal`] tracks which observed elements have scrolled into view;
//! a revealed element stays revealed.

use std::collections::HashSet;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EffectsConfig;

pub const PARTICLE_COLORS: [&str; 5] = ["#e63946", "#f1faee", "#457b9d", "#1d3557", "#a8dadc"];

pub const SPARKLE_COLORS: [&str; 7] = [
    "#e63946", "#f1faee", "#457b9d", "#1d3557", "#a8dadc", "#ffd166", "#06d6a0",
];

/// A floating background particle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Width and height, 5..15 px
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    /// Float animation length, 5..15 s
    pub duration_s: f64,
    /// Animation start delay, 0..5 s
    pub delay_s: f64,
    pub color: String,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(5.0..15.0),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            duration_s: rng.gen_range(5.0..15.0),
            delay_s: rng.gen_range(0.0..5.0),
            color: PARTICLE_COLORS[rng.gen_range(0..PARTICLE_COLORS.len())].to_string(),
        }
    }

    /// CSS animation shorthand for this particle.
    pub fn animation(&self) -> String {
        format!("float {}s linear infinite {}s", self.duration_s, self.delay_s)
    }
}

/// A twinkling foreground sparkle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sparkle {
    pub left_pct: f64,
    pub top_pct: f64,
    /// 0..3 s
    pub delay_s: f64,
    pub color: String,
}

impl Sparkle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            delay_s: rng.gen_range(0.0..3.0),
            color: SPARKLE_COLORS[rng.gen_range(0..SPARKLE_COLORS.len())].to_string(),
        }
    }
}

/// Everything placed in the two decorative containers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decorations {
    pub particles: Vec<Particle>,
    pub sparkles: Vec<Sparkle>,
}

impl Decorations {
    pub fn generate<R: Rng + ?Sized>(config: &EffectsConfig, rng: &mut R) -> Self {
        let particles = (0..config.particle_count).map(|_| Particle::random(rng)).collect();
        let sparkles = (0..config.sparkle_count).map(|_| Sparkle::random(rng)).collect();
        debug!(
            particles = config.particle_count,
            sparkles = config.sparkle_count,
            "Generated decorations"
        );
        Self {
            particles,
            sparkles,
        }
    }
}

/// Element groups watched for scroll reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealGroup {
    MenuItem,
    PackageCard,
    ValueCard,
    GalleryItem,
    OrderStep,
}

impl RevealGroup {
    pub const ALL: [RevealGroup; 5] = [
        RevealGroup::MenuItem,
        RevealGroup::PackageCard,
        RevealGroup::ValueCard,
        RevealGroup::GalleryItem,
        RevealGroup::OrderStep,
    ];
}

/// One observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RevealTarget {
    pub group: RevealGroup,
    pub index: usize,
}

/// Where an element sits relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub target: RevealTarget,
    pub top: f64,
    pub height: f64,
}

/// Reveal applied to an element that entered the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub target: RevealTarget,
    pub animation_delay: Duration,
}

impl Reveal {
    pub const CLASS: &'static str = "scale-in";
}

/// Scroll-triggered reveal state.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
    /// Visible fraction needed to count as intersecting
    threshold: f64,
    /// Added to the bottom edge of the viewport; negative shrinks it
    bottom_margin_px: f64,
    revealed: HashSet<RevealTarget>,
}

impl Default for ScrollReveal {
    fn default() -> Self {
        Self::new(0.1, -50.0)
    }
}

impl ScrollReveal {
    pub const ANIMATION_DELAY: Duration = Duration::from_millis(100);

    pub fn new(threshold: f64, bottom_margin_px: f64) -> Self {
        Self {
            threshold,
            bottom_margin_px,
            revealed: HashSet::new(),
        }
    }

    pub fn is_revealed(&self, target: &RevealTarget) -> bool {
        self.revealed.contains(target)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Check element positions against a viewport of `viewport_height` px
    /// and return the elements revealed by this observation.
    pub fn observe(&mut self, viewport_height: f64, elements: &[ElementBox]) -> Vec<Reveal> {
        let root_bottom = viewport_height + self.bottom_margin_px;
        let mut reveals = Vec::new();

        for element in elements {
            if self.revealed.contains(&element.target) || element.height <= 0.0 {
                continue;
            }
            let overlap = (element.top + element.height).min(root_bottom) - element.top.max(0.0);
            let ratio = overlap.max(0.0) / element.height;
            if ratio > 0.0 && ratio >= self.threshold {
                self.revealed.insert(element.target);
                reveals.push(Reveal {
                    target: element.target,
                    animation_delay: Self::ANIMATION_DELAY,
                });
            }
        }

        if !reveals.is_empty() {
            debug!(count = reveals.len(), "Revealed elements on scroll");
        }
        reveals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_decorations_counts_and_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let decorations = Decorations::generate(&EffectsConfig::default(), &mut rng);
        assert_eq!(decorations.particles.len(), 30);
        assert_eq!(decorations.sparkles.len(), 20);

        for p in &decorations.particles {
            assert!((5.0..15.0).contains(&p.size_px));
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((5.0..15.0).contains(&p.duration_s));
            assert!((0.0..5.0).contains(&p.delay_s));
            assert!(PARTICLE_COLORS.contains(&p.color.as_str()));
            assert!(p.animation().starts_with("float "));
        }
        for s in &decorations.sparkles {
            assert!((0.0..3.0).contains(&s.delay_s));
            assert!(SPARKLE_COLORS.contains(&s.color.as_str()));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = EffectsConfig::default();
        let a = Decorations::generate(&config, &mut StdRng::seed_from_u64(7));
        let b = Decorations::generate(&config, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    fn card(index: usize, top: f64) -> ElementBox {
        ElementBox {
            target: RevealTarget {
                group: RevealGroup::ValueCard,
                index,
            },
            top,
            height: 200.0,
        }
    }

    #[test]
    fn test_reveal_respects_margin_and_threshold() {
        let mut reveal = ScrollReveal::default();
        // Viewport 800 px, effective bottom edge at 750 px.
        let elements = [card(0, 100.0), card(1, 740.0), card(2, 720.0), card(3, 1200.0)];
        let revealed = reveal.observe(800.0, &elements);

        let indices: Vec<usize> = revealed.iter().map(|r| r.target.index).collect();
        // card 1 shows 10 px (5 %), card 2 shows 30 px (15 %)
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(revealed[0].animation_delay, Duration::from_millis(100));
    }

    #[test]
    fn test_reveal_is_sticky() {
        let mut reveal = ScrollReveal::default();
        assert_eq!(reveal.observe(800.0, &[card(0, 100.0)]).len(), 1);
        // scrolled away and back
        assert!(reveal.observe(800.0, &[card(0, -1000.0)]).is_empty());
        assert!(reveal.observe(800.0, &[card(0, 100.0)]).is_empty());
        assert!(reveal.is_revealed(&card(0, 0.0).target));
        assert_eq!(reveal.revealed_count(), 1);
    }
}
