//! Deterministic avatar generation.  A name (or an image URL) goes in, and a scalable vector
//! image comes out: the same request always gives byte-identical SVG.
//!
//! ```
//! use avatars::{Composer, Config};
//!
//! let composer = Composer::from_config(&Config::default()).unwrap();
//! let svg = composer.compose("avatar", "Alex Morgan", 128, None).unwrap().to_svg_string();
//! assert!(svg.contains("AM"));
//! ```

use vector2d::Vector2D;

pub mod catalog;
pub mod color;
pub mod compose;
pub mod config;
pub mod dither;
pub mod image;
pub mod patterns;
pub mod seed;
mod utils;

pub use catalog::Catalog;
pub use compose::{Composer, Error, Request};
pub use config::Config;
pub use patterns::Variant;
pub use seed::Seed;

/// Type alias for 2D floating point vectors (in the geometric sense, unlike [`Vec`])
pub type V2 = Vector2D<f32>;
