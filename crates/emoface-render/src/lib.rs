//! Emoface Render Library
//!
//! Renderer abstraction and implementations for Emoface.
//! The default implementation uses Vello for GPU-accelerated rendering;
//! an SVG renderer is always available for headless output.

mod renderer;
mod svg_impl;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
pub use svg_impl::{SvgRenderer, SvgSurface};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::{VelloRenderer, VelloSurface};
