use image::{DynamicImage, GrayAlphaImage, ImageFormat, LumaA, Rgb, RgbImage, Rgba, RgbaImage};
use imgconv_common::{Error, OutputFormat, Profile};
use imgconv_core::{
    ConversionRequest, ConversionSession, Converter, Dialogs, FileFilter, NoticeKind, Outcome,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Accepts whatever name the resolver suggests, inside `dir`
struct AcceptSuggestion {
    dir: PathBuf,
    input: Option<PathBuf>,
    notices: Vec<(NoticeKind, String)>,
}

impl AcceptSuggestion {
    fn new(dir: &Path, input: PathBuf) -> Self {
        Self {
            dir: dir.to_path_buf(),
            input: Some(input),
            notices: Vec::new(),
        }
    }
}

impl Dialogs for AcceptSuggestion {
    fn pick_open_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
        self.input.take()
    }

    fn pick_save_path(&mut self, suggested_name: &str, _filters: &[FileFilter]) -> Option<PathBuf> {
        Some(self.dir.join(suggested_name))
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) {
        self.notices.push((kind, message.to_owned()));
    }
}

/// Dismisses every save prompt
struct CancelSave {
    input: Option<PathBuf>,
}

impl Dialogs for CancelSave {
    fn pick_open_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
        self.input.take()
    }

    fn pick_save_path(
        &mut self,
        _suggested_name: &str,
        _filters: &[FileFilter],
    ) -> Option<PathBuf> {
        None
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) {
        panic!("unexpected notice {kind:?}: {message}");
    }
}

fn gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 13 % 256) as u8, (y * 29 % 256) as u8, ((x * y) % 256) as u8])
    })
}

fn dir_listing(dir: &Path) -> Vec<(String, Vec<u8>)> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            (
                entry.file_name().to_string_lossy().into_owned(),
                fs::read(entry.path()).unwrap(),
            )
        })
        .collect();
    entries.sort();
    entries
}

#[test]
fn test_transparent_png_to_jpeg_scenario() {
    let temp_dir = TempDir::new().unwrap();

    let input = temp_dir.path().join("photo.png");
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0])))
        .save(&input)
        .unwrap();
    fs::write(temp_dir.path().join("photo.jpg"), b"existing").unwrap();

    let mut session = ConversionSession::default();
    session.set_target(OutputFormat::Jpeg).unwrap();
    let mut dialogs = AcceptSuggestion::new(temp_dir.path(), input);
    session.select_input(&mut dialogs);

    let outcome = session.convert_and_notify(&mut dialogs).unwrap();
    let expected = temp_dir.path().join("photo (1).jpg");
    assert_eq!(outcome, Outcome::Converted(expected.clone()));

    // Existing file untouched
    assert_eq!(fs::read(temp_dir.path().join("photo.jpg")).unwrap(), b"existing");

    let written = image::open(&expected).unwrap();
    assert_eq!((written.width(), written.height()), (10, 10));
    assert!(!written.color().has_alpha());
    // JPEG is lossy, but a flat white field decodes back to white
    assert!(written
        .to_rgb8()
        .pixels()
        .all(|p| p.0.iter().all(|&c| c >= 254)));

    assert_eq!(
        dialogs.notices,
        [(NoticeKind::Info, "Image converted to JPEG successfully!".to_string())]
    );
}

#[test]
fn test_opaque_rgba_keeps_pixels_when_flattened() {
    let temp_dir = TempDir::new().unwrap();
    let src = gradient_rgb(12, 9);
    let input = temp_dir.path().join("opaque.png");
    DynamicImage::ImageRgba8(DynamicImage::ImageRgb8(src.clone()).to_rgba8())
        .save(&input)
        .unwrap();

    // BMP is flattened like JPEG but lossless, so pixels can be compared exactly
    let converter = Converter::default();
    let request = ConversionRequest::new(&input, OutputFormat::Bmp);
    let output = converter.suggest_output(&request).unwrap();
    converter.convert_file(&request, &output).unwrap();

    assert_eq!(image::open(&output).unwrap().to_rgb8(), src);
}

#[test]
fn test_png_preserves_all_four_channels() {
    let temp_dir = TempDir::new().unwrap();
    let src = RgbaImage::from_fn(6, 6, |x, y| {
        Rgba([x as u8 * 40, y as u8 * 40, 99, (x * y * 7) as u8])
    });
    let input = temp_dir.path().join("alpha.tiff");
    DynamicImage::ImageRgba8(src.clone())
        .save_with_format(&input, ImageFormat::Tiff)
        .unwrap();

    let converter = Converter::default();
    let request = ConversionRequest::new(&input, OutputFormat::Png);
    let output = temp_dir.path().join("alpha.png");
    converter.convert_file(&request, &output).unwrap();

    let written = image::open(&output).unwrap();
    assert_eq!(written.as_rgba8(), Some(&src));
}

#[test]
fn test_lossless_round_trip_bmp_and_tiff() {
    let temp_dir = TempDir::new().unwrap();
    let src = gradient_rgb(17, 11);
    let input = temp_dir.path().join("source.png");
    DynamicImage::ImageRgb8(src.clone()).save(&input).unwrap();

    let converter = Converter::default();
    for format in [OutputFormat::Bmp, OutputFormat::Tiff] {
        let request = ConversionRequest::new(&input, format);
        let output = converter.suggest_output(&request).unwrap();
        converter.convert_file(&request, &output).unwrap();

        assert_eq!(image::open(&output).unwrap().to_rgb8(), src, "{format}");
    }
}

#[test]
fn test_cancelled_save_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("keep.png");
    DynamicImage::new_rgba8(4, 4).save(&input).unwrap();
    let before = dir_listing(temp_dir.path());

    let mut session = ConversionSession::default();
    let mut dialogs = CancelSave { input: Some(input) };
    session.select_input(&mut dialogs);

    for format in session.formats() {
        session.set_target(format).unwrap();
        let outcome = session.convert_and_notify(&mut dialogs).unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
    }

    assert_eq!(dir_listing(temp_dir.path()), before);
}

#[test]
fn test_every_profile_format_converts_rgba() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("sample.png");
    DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([200, 10, 60, 128])))
        .save(&input)
        .unwrap();

    let profile = Profile::extended();
    let converter = Converter::new(&profile);
    for format in profile.formats.formats() {
        let request = ConversionRequest::new(&input, format);
        let output = converter.suggest_output(&request).unwrap();
        let written = converter.convert_file(&request, &output).unwrap();

        let reopened = image::open(&written).unwrap();
        assert_eq!(reopened.width(), 8, "{format}");
        let opaque = profile.formats.requires_opaque_background(format).unwrap();
        if opaque {
            assert!(
                reopened.to_rgba8().pixels().all(|p| p.0[3] == 255),
                "{format} kept transparency"
            );
        }
    }
}

#[test]
fn test_grayscale_to_jpeg_is_rgb() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("grey.png");
    DynamicImage::new_luma_a8(5, 5).save(&input).unwrap();

    let converter = Converter::new(&Profile::classic());
    let request = ConversionRequest::new(&input, OutputFormat::Jpeg);
    let output = temp_dir.path().join("grey.jpg");
    converter.convert_file(&request, &output).unwrap();

    assert!(output.exists());
}

#[test]
fn test_grey_alpha_png_to_tiff_keeps_alpha() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("mask.png");
    let src = GrayAlphaImage::from_fn(6, 4, |x, y| LumaA([(x * 40) as u8, (y * 80) as u8]));
    DynamicImage::ImageLumaA8(src.clone()).save(&input).unwrap();

    let converter = Converter::default();
    let request = ConversionRequest::new(&input, OutputFormat::Tiff);
    let output = converter.suggest_output(&request).unwrap();
    converter.convert_file(&request, &output).unwrap();

    let written = image::open(&output).unwrap().to_rgba8();
    for (x, y, pixel) in written.enumerate_pixels() {
        assert_eq!(pixel.0[3], src.get_pixel(x, y).0[1]);
    }
}

#[test]
fn test_failed_decode_reports_cause() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("fake.gif");
    fs::write(&input, b"GIF89a truncated").unwrap();

    let mut session = ConversionSession::default();
    let mut dialogs = AcceptSuggestion::new(temp_dir.path(), input);
    session.select_input(&mut dialogs);

    let err = session.convert_and_notify(&mut dialogs).unwrap_err();
    assert!(matches!(err, Error::ConversionError(_)));

    let (kind, message) = &dialogs.notices[0];
    assert_eq!(*kind, NoticeKind::Error);
    assert_eq!(message, &format!("Failed to convert image: {err}"));
}
