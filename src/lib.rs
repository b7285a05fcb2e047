#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod blur;
pub mod codec;
pub mod error;
pub mod image;
pub mod transform;

// Higher-level helpers built on the modules above.
pub mod config;
pub mod effects;

// --- High-level re-exports -------------------------------------------------

pub use crate::blur::{box_blur, box_blur_timed, BlurOptions, BlurReport};
pub use crate::error::Error;
pub use crate::image::{ImageArgb, ImageView, ImageViewMut};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pixelbox::prelude::*;
///
/// # fn main() {
/// let img = ImageArgb::filled(64, 48, 0xff336699);
/// let blurred = box_blur(&img, &BlurOptions::new(4.0)).expect("blur unavailable");
/// assert_eq!((blurred.w, blurred.h), (64, 48));
/// # }
/// ```
pub mod prelude {
    pub use crate::blur::{box_blur, BlurOptions};
    pub use crate::image::{ImageArgb, ImageView, ImageViewMut};
}
