use image::{ColorType, DynamicImage, ImageFormat};

/// Channel layout tag that drives the flattening decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// 8-bit RGB, passes through untouched
    Rgb,
    /// RGB with alpha at any bit depth
    Rgba,
    /// Grey, grey+alpha, 16/32-bit RGB, ...
    Other(ColorType),
}

impl ColorMode {
    pub fn of(color: ColorType) -> Self {
        match color {
            ColorType::Rgb8 => Self::Rgb,
            ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => Self::Rgba,
            other => Self::Other(other),
        }
    }

    pub fn of_image(img: &DynamicImage) -> Self {
        Self::of(img.color())
    }
}

/// Image metadata extracted during decoding
#[derive(Debug, Clone)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    /// Container detected from content (or extension as fallback)
    pub source_format: Option<ImageFormat>,
    pub color_type: ColorType,
    pub color_mode: ColorMode,
    pub has_alpha: bool,
}

impl ImageMetadata {
    pub fn new(
        width: u32,
        height: u32,
        source_format: Option<ImageFormat>,
        color_type: ColorType,
    ) -> Self {
        Self {
            width,
            height,
            source_format,
            color_type,
            color_mode: ColorMode::of(color_type),
            has_alpha: color_type.has_alpha(),
        }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn estimated_memory_mb(&self) -> f32 {
        let bytes = self.pixel_count() * self.color_type.bytes_per_pixel() as usize;
        bytes as f32 / (1024.0 * 1024.0)
    }
}
