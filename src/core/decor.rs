//! Layout data for the decorative effects
//!
//! Particle positions and preview percentages look random but come from a
//! fixed seed: the page is rendered on the server and then hydrated, and both
//! sides must produce identical markup.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::motion::{Easing, Transition, format_secs};

/// Seed for the hero particle field
pub const PARTICLE_SEED: u64 = 0x6e6f_7661_636b;

/// Seed for the preview card percentages
pub const PREVIEW_SEED: u64 = 0x7072_6576;

/// Number of particles in the hero background
pub const PARTICLE_COUNT: usize = 40;

/// Final bar heights, in percent of the chart height
pub const BAR_HEIGHTS: [u8; 6] = [60, 30, 80, 45, 70, 55];

/// Number of pins on the live map
pub const PIN_COUNT: usize = 6;

/// One floating dot in the hero background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Horizontal position in percent
    pub x: f64,
    /// Vertical position in percent
    pub y: f64,
    /// Radius in pixels
    pub size: f64,
    /// Extra seconds added to the base bob period
    pub delay: f64,
}

impl Particle {
    /// Length of one bob cycle
    pub fn duration(&self) -> String {
        format!("{}s", format_secs(6.0 + self.delay))
    }

    /// `values` attribute of the SVG `<animate>` on `cy`
    pub fn cy_values(&self) -> String {
        let low = round2((self.y + 5.0) % 100.0);
        format!("{}%;{}%;{}%", self.y, low, self.y)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Generate `count` particles from `seed`
pub fn particle_field(count: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|id| Particle {
            id,
            x: round2(rng.gen_range(0.0..100.0)),
            y: round2(rng.gen_range(0.0..100.0)),
            size: round2(rng.gen_range(1.0..4.0)),
            delay: round2(rng.gen_range(0.0..5.0)),
        })
        .collect()
}

/// Growth transition for the bar at `index`
pub fn bar_transition(index: usize) -> Transition {
    Transition::new("height", 0.8)
        .delay(index as f64 * 0.1)
        .easing(Easing::EaseOut)
}

/// A pin on the live map, positioned in percent of the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPin {
    pub x: f64,
    pub y: f64,
    /// Seconds for one drift cycle
    pub period: f64,
}

impl MapPin {
    /// Horizontal drift away from the resting point, in percent
    pub const DRIFT_X: f64 = 6.0;
    /// Vertical drift away from the resting point, in percent
    pub const DRIFT_Y: f64 = -4.0;

    /// Inline style placing the pin and binding its drift animation.
    ///
    /// The `pin-drift` keyframes read the resting point and drift from the
    /// custom properties.
    pub fn style(&self) -> String {
        format!(
            "--pin-x: {}%; --pin-y: {}%; --drift-x: {}%; --drift-y: {}%; animation: pin-drift {}s {} infinite;",
            self.x,
            self.y,
            Self::DRIFT_X,
            Self::DRIFT_Y,
            format_secs(self.period),
            Easing::EaseInOut
        )
    }
}

/// Pins laid out in a zig-zag across the map
pub fn map_pins(count: usize) -> Vec<MapPin> {
    (0..count)
        .map(|i| MapPin {
            x: 10.0 + i as f64 * 14.0,
            y: 30.0 + (i % 3) as f64 * 12.0,
            period: 5.0 + (i % 3) as f64,
        })
        .collect()
}

/// `count` whole percentages between 70 and 95
pub fn preview_rates(count: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (70.0 + rng.gen_range(0.0..25.0_f64)).round() as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_field_is_deterministic() {
        let a = particle_field(PARTICLE_COUNT, PARTICLE_SEED);
        let b = particle_field(PARTICLE_COUNT, PARTICLE_SEED);
        assert_eq!(a, b);
        assert_eq!(a.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_particle_ranges() {
        for p in particle_field(PARTICLE_COUNT, PARTICLE_SEED) {
            assert!((0.0..=100.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..=100.0).contains(&p.y), "y out of range: {}", p.y);
            assert!((1.0..=4.0).contains(&p.size), "size out of range: {}", p.size);
            assert!((0.0..=5.0).contains(&p.delay), "delay out of range: {}", p.delay);
        }
    }

    #[test]
    fn test_particle_ids_are_sequential() {
        let ids: Vec<usize> = particle_field(5, 1).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_particle_animation_values_wrap() {
        let p = Particle {
            id: 0,
            x: 10.0,
            y: 97.5,
            size: 2.0,
            delay: 1.5,
        };
        assert_eq!(p.cy_values(), "97.5%;2.5%;97.5%");
        assert_eq!(p.duration(), "7.5s");
    }

    #[test]
    fn test_bar_transitions_are_staggered() {
        assert_eq!(bar_transition(0).to_css(), "height 0.8s ease-out 0s");
        assert_eq!(bar_transition(3).to_css(), "height 0.8s ease-out 0.3s");
    }

    #[test]
    fn test_map_pins_layout() {
        let pins = map_pins(PIN_COUNT);
        assert_eq!(pins.len(), 6);
        assert_eq!((pins[0].x, pins[0].y, pins[0].period), (10.0, 30.0, 5.0));
        assert_eq!((pins[1].x, pins[1].y, pins[1].period), (24.0, 42.0, 6.0));
        assert_eq!((pins[2].x, pins[2].y, pins[2].period), (38.0, 54.0, 7.0));
        assert_eq!((pins[3].x, pins[3].y, pins[3].period), (52.0, 30.0, 5.0));
        assert_eq!(pins[5].x, 80.0);
    }

    #[test]
    fn test_map_pin_style() {
        let style = map_pins(1)[0].style();
        assert!(style.starts_with("--pin-x: 10%; --pin-y: 30%; --drift-x: 6%; --drift-y: -4%;"));
        assert!(style.contains("pin-drift 5s ease-in-out infinite"));
    }

    #[test]
    fn test_preview_rates_in_range() {
        let rates = preview_rates(3, PREVIEW_SEED);
        assert_eq!(rates.len(), 3);
        assert!(rates.iter().all(|r| (70..=95).contains(r)));
        assert_eq!(rates, preview_rates(3, PREVIEW_SEED));
    }
}
