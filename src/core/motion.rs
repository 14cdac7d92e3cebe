//! Motion primitives shared by the animated widgets
//!
//! Pure helpers for easing curves, animation progress and CSS transition
//! declarations. Nothing in here touches the DOM, so the same values are
//! produced on the server render and in the hydrated client.

use derive_more::Display;

/// Normalized progress of an animation, clamped to `[0, 1]`.
///
/// A non-positive duration is treated as already finished.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Quartic ease-out: fast start, decelerating to zero velocity at `p = 1`.
pub fn ease_out_quart(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(4)
}

/// CSS timing functions used by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Easing {
    #[display("linear")]
    Linear,
    #[default]
    #[display("ease-out")]
    EaseOut,
    #[display("ease-in-out")]
    EaseInOut,
}

/// A single CSS transition on one property
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub property: &'static str,
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn new(property: &'static str, duration_secs: f64) -> Self {
        Self {
            property,
            duration_secs,
            delay_secs: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn delay(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Render as the value of a CSS `transition` declaration
    pub fn to_css(&self) -> String {
        format!(
            "{} {}s {} {}s",
            self.property,
            format_secs(self.duration_secs),
            self.easing,
            format_secs(self.delay_secs)
        )
    }
}

/// Seconds with at most two decimals and no trailing zeros
pub fn format_secs(secs: f64) -> String {
    let rounded = (secs * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Pointer position in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for CursorPosition {
    /// Parked off-screen until the first pointer move
    fn default() -> Self {
        Self::new(-100.0, -100.0)
    }
}
