//! Dashboard views

pub mod dialogs;
pub mod files;
pub mod preview;

pub use dialogs::render_dialogs;
pub use files::render_files_view;
pub use preview::render_preview_view;
