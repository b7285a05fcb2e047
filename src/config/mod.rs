pub mod backdrop_demo;
pub mod blur_demo;
