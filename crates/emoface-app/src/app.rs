//! Command-line application: parse options, build a face, render it.

use clap::Parser;
use emoface_core::{FaceError, FaceView, HappinessState, StyleConfig};
use emoface_render::{RenderContext, Renderer, RendererError, SvgRenderer};
use kurbo::Size;
use std::path::PathBuf;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Face(#[from] FaceError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Render an Emoface face to SVG on stdout
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "emoface")]
#[command(about = "Render an Emoface face to SVG")]
#[command(version)]
pub struct AppConfig {
    /// Requested side length in pixels
    #[arg(long, default_value_t = 320.0, value_parser = parse_size)]
    pub size: f64,

    /// Draw a frown instead of a smile
    #[arg(long)]
    pub sad: bool,

    /// JSON style file
    #[arg(long)]
    pub style: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size: 320.0,
            sad: false,
            style: None,
        }
    }
}

impl AppConfig {
    pub fn happiness(&self) -> HappinessState {
        if self.sad {
            HappinessState::Sad
        } else {
            HappinessState::Happy
        }
    }
}

fn parse_size(value: &str) -> Result<f64, String> {
    let size: f64 = value.parse().map_err(|e| format!("{}", e))?;
    if size.is_finite() && size >= 0.0 {
        Ok(size)
    } else {
        Err(format!("size must be a finite, non-negative number, got {}", value))
    }
}

/// Application: owns the face and the renderer.
pub struct App {
    config: AppConfig,
    face: FaceView,
    renderer: SvgRenderer,
}

impl App {
    /// Build the face from the config, loading the style file if one is given.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let style = match &config.style {
            Some(path) => StyleConfig::load(path)?,
            None => StyleConfig::default(),
        };
        let happiness = config.happiness();
        let mut face = FaceView::new(style).with_happiness(happiness);
        face.on_measure(Size::new(config.size, config.size));
        log::info!("Rendering {} face at {}px", happiness.name(), face.size());

        Ok(Self {
            config,
            face,
            renderer: SvgRenderer::new(),
        })
    }

    pub fn face(&self) -> &FaceView {
        &self.face
    }

    /// Render the face to an SVG document.
    pub fn render(&mut self) -> Result<String, AppError> {
        let side = self.face.size();
        let ctx = RenderContext::new(&self.face, Size::new(side, side));
        self.renderer.build_scene(&ctx);
        Ok(self.renderer.finish()?)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
