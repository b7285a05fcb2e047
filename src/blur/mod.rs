pub mod filter;
pub mod options;

pub use self::filter::{blur_fractional, blur_pass, box_blur, box_blur_timed, BlurReport};
pub use self::options::BlurOptions;
