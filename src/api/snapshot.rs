use serde::{Deserialize, Serialize};

use crate::core::{MultiScaleData, PlotDirection};
use crate::error::{ViewError, ViewResult};

use super::ViewState;

pub const VIEW_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Unit labels of one series in the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesUnits {
    pub x_units: String,
    pub y_units: String,
}

/// Serializable view state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshot {
    pub schema_version: u32,
    pub state: ViewState,
    pub direction: PlotDirection,
    pub current_index: usize,
    pub history_len: usize,
    pub current: MultiScaleData,
    pub series_units: Vec<SeriesUnits>,
}

impl ViewSnapshot {
    pub fn to_json_pretty(&self) -> ViewResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ViewError::InvalidArgument(format!("failed to serialize view snapshot: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ViewResult<Self> {
        let snapshot: Self = serde_json::from_str(input).map_err(|e| {
            ViewError::InvalidArgument(format!("failed to parse view snapshot json: {e}"))
        })?;
        if snapshot.schema_version != VIEW_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ViewError::InvalidArgument(format!(
                "unsupported view snapshot schema version: {}",
                snapshot.schema_version
            )));
        }
        Ok(snapshot)
    }
}
