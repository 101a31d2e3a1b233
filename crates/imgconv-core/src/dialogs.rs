use imgconv_common::{FormatTable, OutputFormat};
use std::path::PathBuf;

/// Named extension filter for file dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new<S: AsRef<str>>(name: impl Into<String>, extensions: &[S]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| e.as_ref().to_owned()).collect(),
        }
    }

    /// "Image Files" filter for the open dialog
    pub fn images(table: &FormatTable) -> Self {
        Self::new("Image Files", &table.input_extensions())
    }

    /// "<NAME> files" filter for the save dialog
    pub fn for_output(format: OutputFormat) -> Self {
        Self::new(format!("{} files", format.name()), &[format.extension()])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Everything the conversion flow needs from a windowing toolkit
pub trait Dialogs {
    /// `None` when the user cancels
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    /// `None` when the user cancels
    fn pick_save_path(&mut self, suggested_name: &str, filters: &[FileFilter]) -> Option<PathBuf>;

    fn notify(&mut self, kind: NoticeKind, message: &str);
}
