//! Core models and animation logic for the landing page

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod count_up;
pub mod decor;
pub mod motion;
pub mod pricing;
#[cfg(test)]
mod tests;
pub mod validation;
pub mod visibility;

pub use count_up::{CountUp, CountUpOptions, CountUpParams, FrameHandle, FrameScheduler, Phase};
pub use visibility::{ViewportMargin, VisibilityLatch};
