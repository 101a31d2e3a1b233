pub mod error;
pub mod format;
pub mod path;
pub mod profile;

pub use error::{Error, Result};
pub use format::OutputFormat;
pub use path::PathResolver;
pub use profile::{FormatEntry, FormatTable, Profile, WindowSettings};
