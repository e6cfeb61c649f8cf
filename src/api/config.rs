use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_TARGET_TICKS;
use crate::error::{ViewError, ViewResult};

/// Minimum number of points every series must keep for a zoom to apply.
pub const DEFAULT_MIN_POINTS_FOR_ZOOM: usize = 3;

/// Public view-engine configuration.
///
/// Serializable so host applications can persist and reload view setup
/// alongside their own preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewEngineConfig {
    #[serde(default = "default_target_ticks")]
    pub target_x_ticks: usize,
    #[serde(default = "default_target_ticks")]
    pub target_y_ticks: usize,
    #[serde(default = "default_min_points_for_zoom")]
    pub min_points_for_zoom: usize,
    #[serde(default = "default_zoom_enabled")]
    pub zoom_enabled: bool,
    #[serde(default)]
    pub reverse_plot: bool,
    #[serde(default)]
    pub overlay_increasing: Option<bool>,
}

impl Default for ViewEngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            target_x_ticks: default_target_ticks(),
            target_y_ticks: default_target_ticks(),
            min_points_for_zoom: default_min_points_for_zoom(),
            zoom_enabled: default_zoom_enabled(),
            reverse_plot: false,
            overlay_increasing: None,
        }
    }

    /// Sets the preferred number of divisions per axis.
    #[must_use]
    pub fn with_target_ticks(mut self, x_ticks: usize, y_ticks: usize) -> Self {
        self.target_x_ticks = x_ticks;
        self.target_y_ticks = y_ticks;
        self
    }

    /// Sets how many points each series must retain for a zoom to apply.
    #[must_use]
    pub fn with_min_points_for_zoom(mut self, min_points: usize) -> Self {
        self.min_points_for_zoom = min_points;
        self
    }

    #[must_use]
    pub fn with_zoom_enabled(mut self, enabled: bool) -> Self {
        self.zoom_enabled = enabled;
        self
    }

    /// Sets the initial reverse-plot toggle.
    #[must_use]
    pub fn with_reverse_plot(mut self, reverse: bool) -> Self {
        self.reverse_plot = reverse;
        self
    }

    /// Overrides the drawing direction used for overlays.
    #[must_use]
    pub fn with_overlay_increasing(mut self, increasing: Option<bool>) -> Self {
        self.overlay_increasing = increasing;
        self
    }

    pub fn validate(self) -> ViewResult<Self> {
        if self.target_x_ticks == 0 || self.target_y_ticks == 0 {
            return Err(ViewError::InvalidArgument(format!(
                "target tick counts must be > 0 (x={}, y={})",
                self.target_x_ticks, self.target_y_ticks
            )));
        }
        if self.min_points_for_zoom == 0 {
            return Err(ViewError::InvalidArgument(
                "min points for zoom must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Parses and validates a JSON config; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ViewResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|err| {
            ViewError::InvalidArgument(format!("failed to parse view config: {err}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> ViewResult<String> {
        serde_json::to_string_pretty(&self).map_err(|err| {
            ViewError::InvalidArgument(format!("failed to serialize view config: {err}"))
        })
    }
}

fn default_target_ticks() -> usize {
    DEFAULT_TARGET_TICKS
}

fn default_min_points_for_zoom() -> usize {
    DEFAULT_MIN_POINTS_FOR_ZOOM
}

fn default_zoom_enabled() -> bool {
    true
}
