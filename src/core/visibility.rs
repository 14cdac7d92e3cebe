//! One-shot viewport visibility
//!
//! `VisibilityLatch` remembers that an element has been seen at least once.
//! `ViewportMargin` describes how far the observed viewport is grown or shrunk
//! before an element counts as visible, rendered in the format the browser's
//! `IntersectionObserver` expects for `rootMargin`.

use std::fmt;

/// Latched "has been visible" flag. Once fired it never resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    fired: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visibility report.
    ///
    /// Returns `true` only for the first call.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// A CSS length accepted by `rootMargin`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginValue {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for MarginValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginValue::Px(v) => write!(f, "{}px", v),
            MarginValue::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Root margin applied around the viewport, in CSS order (top, right, bottom, left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMargin {
    pub top: MarginValue,
    pub right: MarginValue,
    pub bottom: MarginValue,
    pub left: MarginValue,
}

impl ViewportMargin {
    /// Shrink the viewport by `percent` at the top and bottom edges.
    ///
    /// `vertical_inset(20)` renders as `-20% 0px -20% 0px`.
    pub fn vertical_inset(percent: u8) -> Self {
        let inset = MarginValue::Percent(-f64::from(percent));
        Self {
            top: inset,
            right: MarginValue::Px(0.0),
            bottom: inset,
            left: MarginValue::Px(0.0),
        }
    }

    /// Shrink only the bottom edge by `px` pixels
    pub fn bottom_px(px: f64) -> Self {
        Self {
            bottom: MarginValue::Px(-px),
            ..Self::default()
        }
    }

    pub fn to_css(&self) -> String {
        format!("{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

impl Default for ViewportMargin {
    fn default() -> Self {
        Self {
            top: MarginValue::Px(0.0),
            right: MarginValue::Px(0.0),
            bottom: MarginValue::Px(0.0),
            left: MarginValue::Px(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once() {
        let mut latch = VisibilityLatch::new();
        assert!(!latch.has_fired());
        assert!(latch.fire());
        assert!(latch.has_fired());
        assert!(!latch.fire());
        assert!(!latch.fire());
        assert!(latch.has_fired());
    }

    #[test]
    fn test_vertical_inset_css() {
        assert_eq!(
            ViewportMargin::vertical_inset(20).to_css(),
            "-20% 0px -20% 0px"
        );
    }

    #[test]
    fn test_default_margin_css() {
        assert_eq!(ViewportMargin::default().to_css(), "0px 0px 0px 0px");
    }

    #[test]
    fn test_bottom_px_css() {
        assert_eq!(ViewportMargin::bottom_px(50.0).to_css(), "0px 0px -50px 0px");
    }
}
