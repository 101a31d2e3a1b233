pub mod decoder;
pub mod encoder;
pub mod metadata;

pub use decoder::ImageDecoder;
pub use encoder::ImageEncoder;
pub use metadata::{ColorMode, ImageMetadata};
