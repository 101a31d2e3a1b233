pub mod app;
pub mod dialogs;
pub mod widgets;

pub use app::ImageConverterApp;
pub use dialogs::RfdDialogs;
