//! Application pages module
//!
//! The site is a single landing page served at `/`.

mod landing;

pub use landing::LandingPage;
