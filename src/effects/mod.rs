pub mod backdrop;
pub mod compose;
pub mod corners;
pub mod fade;
pub mod grayscale;
pub mod soften;

pub use self::backdrop::{blurred_backdrop, detail_backdrop, BACKDROP_BLUR};
pub use self::compose::{mosaic, overlay_at, overlay_centered, watermark, Direction};
pub use self::corners::{round_corners, round_thumbnail, solid_round_rect};
pub use self::fade::{edge_fade, vignette};
pub use self::grayscale::grayscale;
pub use self::soften::{soften, SOFTEN_DELTA};
