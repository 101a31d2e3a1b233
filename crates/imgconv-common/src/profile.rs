use crate::{Error, OutputFormat, Result};
use serde::{Deserialize, Serialize};

const CLASSIC_PROFILE: &str = include_str!("profiles/classic.toml");
const EXTENDED_PROFILE: &str = include_str!("profiles/extended.toml");

/// One row of the format table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatEntry {
    pub format: OutputFormat,

    /// Encoder cannot store alpha, so transparency gets flattened first
    #[serde(default)]
    pub requires_opaque_background: bool,
}

/// Ordered `{format -> requires_opaque_background}` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FormatEntry>", into = "Vec<FormatEntry>")]
pub struct FormatTable(Vec<FormatEntry>);

impl TryFrom<Vec<FormatEntry>> for FormatTable {
    type Error = Error;

    fn try_from(entries: Vec<FormatEntry>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<FormatTable> for Vec<FormatEntry> {
    fn from(table: FormatTable) -> Self {
        table.0
    }
}

impl FormatTable {
    pub fn new(entries: Vec<FormatEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::InvalidProfile("format table is empty".into()));
        }

        for (idx, entry) in entries.iter().enumerate() {
            if entries[..idx].iter().any(|e| e.format == entry.format) {
                return Err(Error::InvalidProfile(format!(
                    "format {} listed twice",
                    entry.format
                )));
            }
        }

        Ok(Self(entries))
    }

    pub fn entries(&self) -> &[FormatEntry] {
        &self.0
    }

    /// Formats in menu order
    pub fn formats(&self) -> impl Iterator<Item = OutputFormat> + '_ {
        self.0.iter().map(|entry| entry.format)
    }

    pub fn contains(&self, format: OutputFormat) -> bool {
        self.0.iter().any(|entry| entry.format == format)
    }

    /// `None` when the format is not offered by this table
    pub fn requires_opaque_background(&self, format: OutputFormat) -> Option<bool> {
        self.0
            .iter()
            .find(|entry| entry.format == format)
            .map(|entry| entry.requires_opaque_background)
    }

    /// Extensions accepted by the input picker
    pub fn input_extensions(&self) -> Vec<&'static str> {
        // png/jpg/jpeg/bmp/tiff/gif are always readable, webp only when offered
        let mut exts = vec!["png", "jpg", "jpeg", "bmp", "tiff", "gif"];
        if self.contains(OutputFormat::Webp) {
            exts.push("webp");
        }
        exts
    }

    /// First entry, used as the initial menu selection
    pub fn default_format(&self) -> OutputFormat {
        self.0[0].format
    }
}

/// Main window geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,

    /// Multiplier applied to egui's points-per-pixel
    #[serde(default = "default_ui_scale")]
    pub ui_scale: f32,
}

fn default_ui_scale() -> f32 {
    1.0
}

/// Converter configuration: window, formats and flattening background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,

    /// RGB fill used when flattening transparency
    #[serde(default = "default_background")]
    pub background: [u8; 3],

    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    pub window: WindowSettings,

    pub formats: FormatTable,
}

fn default_background() -> [u8; 3] {
    [255, 255, 255]
}

fn default_jpeg_quality() -> u8 {
    95
}

impl Profile {
    /// Five formats, JPEG and BMP flattened
    pub fn classic() -> Self {
        Self::from_toml(CLASSIC_PROFILE).expect("Built-in classic profile is invalid")
    }

    /// Adds WEBP, flattened like JPEG and BMP
    pub fn extended() -> Self {
        Self::from_toml(EXTENDED_PROFILE).expect("Built-in extended profile is invalid")
    }

    /// Look up a built-in profile by name
    pub fn builtin(name: &str) -> Result<Self> {
        match name {
            "classic" => Ok(Self::classic()),
            "extended" => Ok(Self::extended()),
            other => Err(Error::InvalidProfile(format!("unknown profile '{other}'"))),
        }
    }

    /// Parse and validate a TOML profile document
    pub fn from_toml(content: &str) -> Result<Self> {
        let profile: Profile =
            toml::from_str(content).map_err(|e| Error::InvalidProfile(e.to_string()))?;
        profile.validate()?;

        tracing::debug!(
            "Loaded profile '{}' with {} formats",
            profile.name,
            profile.formats.entries().len()
        );
        Ok(profile)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::InvalidProfile(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::InvalidProfile(format!(
                "jpeg_quality must be 1-100, got {}",
                self.jpeg_quality
            )));
        }

        if self.window.width <= 0.0 || self.window.height <= 0.0 || self.window.ui_scale <= 0.0 {
            return Err(Error::InvalidProfile("window dimensions must be positive".into()));
        }

        Ok(())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::extended()
    }
}
