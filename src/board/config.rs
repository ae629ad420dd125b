//! Runtime configuration for board interaction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How dragging behaves while a search query narrows the visible tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilteredDragPolicy {
    /// Dragging stays enabled. Hover targets name tasks by identity, so
    /// placements are resolved against the full board rather than the
    /// filtered view.
    #[default]
    Translate,
    /// Pressing a task is ignored while a non-empty query is active.
    Disabled,
}

/// Board interaction settings.
///
/// # Examples
///
/// ```
/// use taskboard::board::config::{BoardConfig, FilteredDragPolicy};
///
/// let config = BoardConfig::from_json(r#"{ "filtered_drag": "disabled" }"#)
///     .expect("valid config");
/// assert_eq!(config.filtered_drag, FilteredDragPolicy::Disabled);
/// assert_eq!(config.activation_distance, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Pixels the pointer must travel after pressing a task before a drag
    /// starts.
    pub activation_distance: u32,
    /// Drag behaviour while a search query is active.
    pub filtered_drag: FilteredDragPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            activation_distance: 5,
            filtered_drag: FilteredDragPolicy::default(),
        }
    }
}

impl BoardConfig {
    /// Parses a configuration document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Parse`] when the document is not valid
    /// JSON or names an unknown field.
    pub fn from_json(document: &str) -> Result<Self, BoardConfigError> {
        serde_json::from_str(document).map_err(|err| BoardConfigError::Parse(err.to_string()))
    }

    /// Returns a copy with a different activation distance.
    #[must_use]
    pub const fn with_activation_distance(mut self, pixels: u32) -> Self {
        self.activation_distance = pixels;
        self
    }

    /// Returns a copy with a different filtered-drag policy.
    #[must_use]
    pub const fn with_filtered_drag(mut self, policy: FilteredDragPolicy) -> Self {
        self.filtered_drag = policy;
        self
    }
}

/// Errors raised while loading [`BoardConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid board configuration: {0}")]
    Parse(String),
}
