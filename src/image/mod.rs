pub mod crop;
pub mod f32;
pub mod io;
pub mod u8;

pub use self::crop::{crop, CropRegion};
pub use self::f32::ImageF32;
pub use self::io::{load_grayscale_image, save_grayscale_u8, save_rgba_png};
pub use self::u8::{GrayImageU8, ImageU8};
