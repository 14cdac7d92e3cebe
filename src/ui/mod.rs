pub mod common;
pub mod count_up;
pub mod cursor;
pub mod effects;
pub mod icon;
pub mod in_view;
pub mod pages;

pub use count_up::{CountUpSignal, use_count_up};
pub use cursor::NeonCursor;
pub use effects::{AnimatedBars, MovingPinsMap, ParticleField, Reveal};
pub use icon::{Icon, icons};
pub use in_view::use_in_view;
