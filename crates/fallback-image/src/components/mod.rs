pub mod image;
pub mod skeleton;

pub use image::*;
pub use skeleton::*;
