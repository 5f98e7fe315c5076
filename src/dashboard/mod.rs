//! Dashboard UI Module
//!
//! The screenshot browser window: a file list, a preview pane, a toolbar
//! and the dialogs around them.

pub mod app;
pub mod components;
pub mod state;
pub mod theme;
pub mod views;

pub use app::run_dashboard;
