pub mod crop;
pub mod rotate;
pub mod scale;

pub use self::crop::{center_crop, crop, Rect};
pub use self::rotate::{rotate, Rotation};
pub use self::scale::{scale_by, scale_to};
