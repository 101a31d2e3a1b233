use crate::metadata::ImageMetadata;
use image::{DynamicImage, ImageDecoder as _, ImageFormat, ImageReader};
use imgconv_common::{Error, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufRead, Cursor, Seek};
use std::path::Path;

const TEN_MB_IN_BYTES: u64 = 10 * 1024 * 1024;

/// Image decoder with memory-mapped I/O for large inputs
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode image from path. The container is sniffed from content,
    /// the extension is only used when sniffing fails.
    pub fn decode(path: &Path) -> Result<(DynamicImage, ImageMetadata)> {
        tracing::debug!("Decoding {path:?}");

        let file = File::open(path)?;
        let file_len = file.metadata()?.len();

        let (img, source_format) = if file_len > TEN_MB_IN_BYTES {
            tracing::debug!("Using memory-mapped I/O for large file");
            // Pages are only read when the decoder touches them
            let mmap = unsafe { Mmap::map(&file)? };
            Self::decode_reader(path, Cursor::new(&mmap[..]))?
        } else {
            Self::decode_reader(path, std::io::BufReader::new(file))?
        };

        let metadata = ImageMetadata::new(img.width(), img.height(), source_format, img.color());

        tracing::info!(
            "Decoded {}x{} {:?} image ({:?}, {:.2}MB in memory)",
            metadata.width,
            metadata.height,
            metadata.source_format,
            metadata.color_mode,
            metadata.estimated_memory_mb()
        );

        Ok((img, metadata))
    }

    /// Quick metadata extraction without decoding pixels
    pub fn probe(path: &Path) -> Result<ImageMetadata> {
        let reader = Self::reader(path, std::io::BufReader::new(File::open(path)?))?;
        let source_format = reader.format();

        let decoder = reader.into_decoder()?;
        let (width, height) = decoder.dimensions();

        Ok(ImageMetadata::new(width, height, source_format, decoder.color_type()))
    }

    fn decode_reader<R: BufRead + Seek>(
        path: &Path,
        inner: R,
    ) -> Result<(DynamicImage, Option<ImageFormat>)> {
        let reader = Self::reader(path, inner)?;
        let source_format = reader.format();
        Ok((reader.decode()?, source_format))
    }

    fn reader<R: BufRead + Seek>(path: &Path, inner: R) -> Result<ImageReader<R>> {
        let mut reader = ImageReader::new(inner).with_guessed_format()?;

        if reader.format().is_none() {
            let hint = ImageFormat::from_path(path).map_err(|_| {
                Error::UnsupportedFormat(
                    path.extension()
                        .and_then(|s| s.to_str())
                        .unwrap_or("unknown")
                        .to_string(),
                )
            })?;
            reader.set_format(hint);
        }

        Ok(reader)
    }
}
