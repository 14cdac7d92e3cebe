//! Common reusable UI components

pub mod badge;
pub mod button;

pub use badge::{Badge, BadgeGroup, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant, ToggleButton, ToggleGroup};
