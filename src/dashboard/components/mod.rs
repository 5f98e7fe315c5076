//! Reusable UI components for the dashboard

pub mod status_bar;
pub mod toolbar;

pub use status_bar::render_status_bar;
pub use toolbar::{render_header, render_toolbar};
