use crate::converter::{ConversionRequest, Converter};
use crate::dialogs::{Dialogs, FileFilter, NoticeKind};
use imgconv_common::{Error, OutputFormat, Profile, Result};
use std::path::{Path, PathBuf};

/// How a convert action ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Converted(PathBuf),
    /// Save prompt dismissed; nothing was written
    Cancelled,
}

/// State kept between the "select" and "convert" actions
pub struct ConversionSession {
    profile: Profile,
    converter: Converter,
    input: Option<PathBuf>,
    target: OutputFormat,
}

impl ConversionSession {
    pub fn new(profile: Profile) -> Self {
        let converter = Converter::new(&profile);
        let target = profile.formats.default_format();

        Self {
            profile,
            converter,
            input: None,
            target,
        }
    }

    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    pub fn target(&self) -> OutputFormat {
        self.target
    }

    /// Formats offered by the profile, in menu order
    pub fn formats(&self) -> Vec<OutputFormat> {
        self.profile.formats.formats().collect()
    }

    pub fn set_target(&mut self, format: OutputFormat) -> Result<()> {
        if !self.profile.formats.contains(format) {
            return Err(Error::UnsupportedFormat(format.to_string()));
        }
        self.target = format;
        Ok(())
    }

    /// Text for the input label
    pub fn selected_label(&self) -> String {
        match self.input.as_deref().and_then(Path::file_name) {
            Some(name) => format!("Selected: {}", name.to_string_lossy()),
            None => "Input Image: ".to_string(),
        }
    }

    /// Ask for an input file; a cancelled dialog keeps the previous choice
    pub fn select_input(&mut self, dialogs: &mut dyn Dialogs) -> Option<&Path> {
        let filters = [FileFilter::images(&self.profile.formats)];

        if let Some(path) = dialogs.pick_open_path(&filters) {
            tracing::debug!("Selected input {:?}", path);
            self.input = Some(path);
        }

        self.input.as_deref()
    }

    /// Run the full convert action: suggest a name, confirm it, convert
    pub fn convert(&self, dialogs: &mut dyn Dialogs) -> Result<Outcome> {
        let input = self.input.as_ref().ok_or(Error::NoInputSelected)?;
        let request = ConversionRequest::new(input, self.target);

        let suggested = self
            .converter
            .path_resolver()
            .suggested_file_name(&request.input, request.target)?;

        let filters = [FileFilter::for_output(request.target)];
        let Some(chosen) = dialogs.pick_save_path(&suggested, &filters) else {
            tracing::warn!("Save location prompt cancelled, nothing written");
            return Ok(Outcome::Cancelled);
        };

        let output = self
            .converter
            .path_resolver()
            .ensure_extension(chosen, request.target);

        let written = self.converter.convert_file(&request, &output)?;
        tracing::info!("Converted {:?} → {:?}", request.input, written);

        Ok(Outcome::Converted(written))
    }

    /// [`convert`](Self::convert), then report the result to the user
    pub fn convert_and_notify(&self, dialogs: &mut dyn Dialogs) -> Result<Outcome> {
        let result = self.convert(dialogs);

        match &result {
            Ok(Outcome::Converted(_)) => dialogs.notify(
                NoticeKind::Info,
                &format!("Image converted to {} successfully!", self.target.name()),
            ),
            Ok(Outcome::Cancelled) => {}
            Err(Error::NoInputSelected) => {
                tracing::warn!("Convert requested before an input was selected");
                dialogs.notify(NoticeKind::Error, "Please select an input image.");
            }
            Err(e) => {
                tracing::error!("Conversion failed: {e}");
                dialogs.notify(NoticeKind::Error, &format!("Failed to convert image: {e}"));
            }
        }

        result
    }
}

impl Default for ConversionSession {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}
