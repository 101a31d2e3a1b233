use imgconv_core::{Dialogs, FileFilter, NoticeKind};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

/// Native dialogs backed by rfd
#[derive(Debug, Default)]
pub struct RfdDialogs {
    /// Directory the next dialog opens in
    start_dir: Option<PathBuf>,
}

impl RfdDialogs {
    pub fn new() -> Self {
        let start_dir = directories::UserDirs::new()
            .and_then(|dirs| dirs.picture_dir().map(Path::to_path_buf));

        Self { start_dir }
    }

    fn dialog(&self, filters: &[FileFilter]) -> FileDialog {
        let mut dialog = FileDialog::new();
        for filter in filters {
            dialog = dialog.add_filter(filter.name.as_str(), &filter.extensions);
        }
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }

    fn remember_dir(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.start_dir = Some(parent.to_path_buf());
        }
    }
}

impl Dialogs for RfdDialogs {
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        let path = self.dialog(filters).set_title("Select Image").pick_file()?;
        self.remember_dir(&path);
        Some(path)
    }

    fn pick_save_path(&mut self, suggested_name: &str, filters: &[FileFilter]) -> Option<PathBuf> {
        let path = self.dialog(filters).set_file_name(suggested_name).save_file()?;
        self.remember_dir(&path);
        Some(path)
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) {
        let (level, title) = match kind {
            NoticeKind::Info => (MessageLevel::Info, "Success"),
            NoticeKind::Error => (MessageLevel::Error, "Error"),
        };

        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
