//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::state::DEFAULT_STROKE_WIDTH;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen style in effect before any style event arrives.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default pen width in canvas units (valid range: 1.0 - 50.0)
    #[serde(default = "default_width")]
    pub default_width: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_width: default_width(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of undo steps kept for redo (0 = unlimited).
    /// When the limit is exceeded the oldest step is forgotten.
    #[serde(default)]
    pub max_undo_depth: usize,
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

pub(super) fn default_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}
