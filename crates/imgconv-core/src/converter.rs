use crate::flatten::FormatConverter;
use imgconv_common::{Error, OutputFormat, PathResolver, Profile, Result};
use imgconv_formats::{ImageDecoder, ImageEncoder};
use std::path::{Path, PathBuf};

/// Single conversion request, consumed synchronously
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub target: OutputFormat,
}

impl ConversionRequest {
    pub fn new(input: impl Into<PathBuf>, target: OutputFormat) -> Self {
        Self {
            input: input.into(),
            target,
        }
    }
}

/// Main conversion engine: decode, flatten if needed, encode
pub struct Converter {
    path_resolver: PathResolver,
    format_converter: FormatConverter,
    jpeg_quality: u8,
}

impl Converter {
    pub fn new(profile: &Profile) -> Self {
        Self {
            path_resolver: PathResolver::new(),
            format_converter: FormatConverter::from_profile(profile),
            jpeg_quality: profile.jpeg_quality,
        }
    }

    pub fn path_resolver(&self) -> &PathResolver {
        &self.path_resolver
    }

    /// Default output path next to the input
    pub fn suggest_output(&self, request: &ConversionRequest) -> Result<PathBuf> {
        self.path_resolver.resolve(&request.input, request.target)
    }

    /// Convert `request.input` and write it to `output`.
    ///
    /// Every failure after the request is accepted comes back as
    /// [`Error::ConversionError`] with the underlying message.
    pub fn convert_file(&self, request: &ConversionRequest, output: &Path) -> Result<PathBuf> {
        self.run(request, output).map_err(Error::into_conversion)
    }

    fn run(&self, request: &ConversionRequest, output: &Path) -> Result<PathBuf> {
        self.path_resolver.validate_input(&request.input)?;

        let (img, metadata) = ImageDecoder::decode(&request.input)?;

        tracing::info!(
            "Converting {}x{} {:?} → {}",
            metadata.width,
            metadata.height,
            metadata.color_mode,
            request.target
        );

        let img = self.format_converter.convert(img, request.target)?;
        ImageEncoder::encode_with_quality(&img, output, request.target, self.jpeg_quality)?;

        Ok(output.to_path_buf())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(&Profile::default())
    }
}
