//! Emoface Application
//!
//! Command-line shell that renders a face to SVG.

mod app;

pub use app::{App, AppConfig, AppError};
