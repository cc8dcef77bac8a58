//! Style configuration for the face widget.

use crate::color::FaceColor;
use crate::error::FaceResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default stroke width of the border ring.
pub const DEFAULT_BORDER_WIDTH: f64 = 4.0;

/// Colors and border width of a face.
///
/// Every field has a default, so a partial JSON document such as
/// `{"faceColor": "#FF8800"}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    /// Fill color of the face disc.
    pub face_color: FaceColor,
    /// Fill color of both eyes.
    pub eyes_color: FaceColor,
    /// Fill color of the mouth.
    pub mouth_color: FaceColor,
    /// Stroke color of the border ring.
    pub border_color: FaceColor,
    /// Stroke width of the border ring.
    pub border_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            face_color: FaceColor::YELLOW,
            eyes_color: FaceColor::BLACK,
            mouth_color: FaceColor::BLACK,
            border_color: FaceColor::BLACK,
            border_width: DEFAULT_BORDER_WIDTH,
        }
    }
}

impl StyleConfig {
    /// Parse a style from JSON. Unset keys keep their defaults.
    pub fn from_json(json: &str) -> FaceResult<Self> {
        let style: StyleConfig = serde_json::from_str(json)?;
        Ok(style.sanitized())
    }

    /// Load a style from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> FaceResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading style from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> FaceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the face color.
    pub fn with_face_color(mut self, color: FaceColor) -> Self {
        self.face_color = color;
        self
    }

    /// Set the eyes color.
    pub fn with_eyes_color(mut self, color: FaceColor) -> Self {
        self.eyes_color = color;
        self
    }

    /// Set the mouth color.
    pub fn with_mouth_color(mut self, color: FaceColor) -> Self {
        self.mouth_color = color;
        self
    }

    /// Set the border color.
    pub fn with_border_color(mut self, color: FaceColor) -> Self {
        self.border_color = color;
        self
    }

    /// Set the border width (clamped, see [`clamp_border_width`]).
    pub fn with_border_width(mut self, width: f64) -> Self {
        self.border_width = clamp_border_width(width);
        self
    }

    /// Copy of this style with out-of-range values clamped.
    pub fn sanitized(mut self) -> Self {
        self.border_width = clamp_border_width(self.border_width);
        self
    }
}

/// Clamp a border width to a finite, non-negative value.
pub fn clamp_border_width(width: f64) -> f64 {
    if width.is_finite() && width >= 0.0 {
        width
    } else {
        log::warn!("Border width {} out of range, clamping to 0", width);
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let style = StyleConfig::default();
        assert_eq!(style.face_color, FaceColor::YELLOW);
        assert_eq!(style.eyes_color, FaceColor::BLACK);
        assert_eq!(style.mouth_color, FaceColor::BLACK);
        assert_eq!(style.border_color, FaceColor::BLACK);
        assert!((style.border_width - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let style = StyleConfig::from_json(r##"{"faceColor": "#FF8800", "borderWidth": 6}"##).unwrap();
        assert_eq!(style.face_color, FaceColor::rgb(255, 136, 0));
        assert_eq!(style.eyes_color, FaceColor::BLACK);
        assert!((style.border_width - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_json() {
        assert_eq!(StyleConfig::from_json("{}").unwrap(), StyleConfig::default());
    }

    #[test]
    fn test_invalid_color_rejected() {
        assert!(StyleConfig::from_json(r#"{"mouthColor": "red"}"#).is_err());
    }

    #[test]
    fn test_negative_border_width_clamped() {
        let style = StyleConfig::from_json(r#"{"borderWidth": -3.0}"#).unwrap();
        assert_eq!(style.border_width, 0.0);
        assert_eq!(StyleConfig::default().with_border_width(f64::NAN).border_width, 0.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let style = StyleConfig::default().with_mouth_color(FaceColor::rgb(200, 0, 0));
        let json = style.to_json().unwrap();
        assert!(json.contains("\"mouthColor\": \"#C80000\""));
        assert_eq!(StyleConfig::from_json(&json).unwrap(), style);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.json");
        std::fs::write(&path, r##"{"borderColor": "#0000FF"}"##).unwrap();

        let style = StyleConfig::load(&path).unwrap();
        assert_eq!(style.border_color, FaceColor::rgb(0, 0, 255));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = StyleConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(crate::FaceError::Io(_))));
    }
}
