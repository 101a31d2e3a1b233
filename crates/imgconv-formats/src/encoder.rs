use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ColorType, DynamicImage};
use imgconv_common::{OutputFormat, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const EIGHT_MB_IN_BYTES: usize = 8 * 1024 * 1024;

/// Default JPEG quality when no profile value is given
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Image encoder with format-specific settings
pub struct ImageEncoder;

impl ImageEncoder {
    /// Encode image to specified format at given path
    pub fn encode(img: &DynamicImage, output_path: &Path, format: OutputFormat) -> Result<()> {
        Self::encode_with_quality(img, output_path, format, DEFAULT_JPEG_QUALITY)
    }

    /// Encode with custom JPEG quality; ignored by the other formats
    pub fn encode_with_quality(
        img: &DynamicImage,
        output_path: &Path,
        format: OutputFormat,
        jpeg_quality: u8,
    ) -> Result<()> {
        tracing::debug!("Encoding {:?} to {} at {:?}", img.color(), format, output_path);

        let img = Self::encoder_layout(img, format);

        let file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(EIGHT_MB_IN_BYTES, file);

        match format {
            OutputFormat::Png => {
                img.write_with_encoder(PngEncoder::new(&mut writer))?;
            }
            OutputFormat::Jpeg => {
                img.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, jpeg_quality))?;
            }
            _ => {
                img.write_to(&mut writer, format.to_image_format())?;
            }
        }

        // Surface write errors instead of losing them in Drop
        writer.flush()?;

        tracing::info!("Successfully encoded to {:?}", output_path);
        Ok(())
    }

    /// GIF only takes 8-bit RGB(A) and TIFF has no grey+alpha layout;
    /// everything else goes to the codec as is
    fn encoder_layout(img: &DynamicImage, format: OutputFormat) -> Cow<'_, DynamicImage> {
        match (format, img.color()) {
            (OutputFormat::Tiff, ColorType::La8) => {
                Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8()))
            }
            (OutputFormat::Tiff, ColorType::La16) => {
                Cow::Owned(DynamicImage::ImageRgba16(img.to_rgba16()))
            }
            (OutputFormat::Gif, ColorType::Rgb8 | ColorType::Rgba8) => Cow::Borrowed(img),
            (OutputFormat::Gif, color) if color.has_alpha() => {
                Cow::Owned(DynamicImage::ImageRgba8(img.to_rgba8()))
            }
            (OutputFormat::Gif, _) => Cow::Owned(DynamicImage::ImageRgb8(img.to_rgb8())),
            _ => Cow::Borrowed(img),
        }
    }
}
