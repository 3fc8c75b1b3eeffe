#![doc = include_str!("../README.md")]

pub mod colors;
pub mod config;
pub mod diagnostics;
pub mod draw;
pub mod error;
pub mod image;
pub mod naming;
pub mod stats;
pub mod types;

// --- High-level re-exports -------------------------------------------------

pub use crate::colors::{extract_colors, is_mostly_white, WhitenessOptions};
pub use crate::draw::{draw_channel_graph, draw_image, draw_rgb_line, draw_scalar_graph};
pub use crate::error::RasterError;
pub use crate::naming::pad;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use sides_diagnostics::prelude::*;
///
/// let mut canvas = Image8u::new(8, 4, Channels::Rgb);
/// let colors = vec![Color8u::gray(200); 8];
/// draw_rgb_line(&mut canvas, &colors, Point2i::new(0, 0), 4).unwrap();
/// assert!(is_mostly_white(&colors, 5.0, 175));
/// ```
pub mod prelude {
    pub use crate::image::{Channels, Image8u, ImageView};
    pub use crate::types::{Color8u, Point2i};
    pub use crate::{draw_rgb_line, extract_colors, is_mostly_white, RasterError};
}
