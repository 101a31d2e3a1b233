use image::{imageops, DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
use imgconv_common::{Error, FormatTable, OutputFormat, Profile, Result};
use imgconv_formats::ColorMode;

/// Prepares decoded images for encoders that cannot store alpha
#[derive(Debug, Clone)]
pub struct FormatConverter {
    table: FormatTable,
    background: Rgb<u8>,
}

impl FormatConverter {
    pub fn new(table: FormatTable, background: Rgb<u8>) -> Self {
        Self { table, background }
    }

    pub fn from_profile(profile: &Profile) -> Self {
        Self::new(profile.formats.clone(), Rgb(profile.background))
    }

    /// Whether `target` needs transparency removed before encoding
    pub fn requires_opaque_background(&self, target: OutputFormat) -> Result<bool> {
        self.table
            .requires_opaque_background(target)
            .ok_or_else(|| Error::UnsupportedFormat(target.to_string()))
    }

    /// Turn a decoded image into something the `target` encoder accepts
    pub fn convert(&self, img: DynamicImage, target: OutputFormat) -> Result<DynamicImage> {
        if !self.requires_opaque_background(target)? {
            return Ok(img);
        }

        let converted = match ColorMode::of_image(&img) {
            ColorMode::Rgb => img,
            ColorMode::Rgba => {
                tracing::debug!("Flattening alpha onto {:?} for {}", self.background.0, target);
                DynamicImage::ImageRgb8(flatten_onto(&img, self.background))
            }
            ColorMode::Other(color) => {
                tracing::debug!("Converting {:?} to RGB for {}", color, target);
                DynamicImage::ImageRgb8(img.to_rgb8())
            }
        };

        Ok(converted)
    }
}

impl Default for FormatConverter {
    fn default() -> Self {
        Self::from_profile(&Profile::default())
    }
}

/// Composite `img` over a solid, fully opaque `background` and drop the
/// alpha channel.
pub fn flatten_onto(img: &DynamicImage, background: Rgb<u8>) -> RgbImage {
    let [r, g, b] = background.0;
    let mut canvas = RgbaImage::from_pixel(img.width(), img.height(), Rgba([r, g, b, 255]));
    imageops::overlay(&mut canvas, &img.to_rgba8(), 0, 0);

    DynamicImage::ImageRgba8(canvas).to_rgb8()
}
