pub mod converter;
pub mod dialogs;
pub mod flatten;
pub mod session;

pub use converter::{ConversionRequest, Converter};
pub use dialogs::{Dialogs, FileFilter, NoticeKind};
pub use flatten::{flatten_onto, FormatConverter};
pub use session::{ConversionSession, Outcome};
