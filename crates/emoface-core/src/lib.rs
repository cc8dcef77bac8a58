//! Emoface Core Library
//!
//! Platform-agnostic geometry, style and state for the Emoface face widget.

pub mod color;
pub mod error;
pub mod geometry;
pub mod style;
pub mod surface;
pub mod widget;

pub use color::FaceColor;
pub use error::{FaceError, FaceResult};
pub use geometry::{FaceGeometry, measure, measure_size};
pub use style::{DEFAULT_BORDER_WIDTH, StyleConfig};
pub use surface::{CommandRecorder, DrawCommand, DrawSurface, Paint, PaintStyle};
pub use widget::{FaceView, HappinessState, NoopRedraw, RedrawRequester, draw_face};
