pub mod argb;
pub mod io;
pub mod traits;

pub use self::argb::{alpha, argb, blue, green, red, ImageArgb};
pub use self::traits::{ImageView, ImageViewMut};
