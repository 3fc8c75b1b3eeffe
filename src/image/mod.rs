pub mod io;
pub mod traits;
pub mod u8;

pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::{Channels, Image8u, ImageU8};
