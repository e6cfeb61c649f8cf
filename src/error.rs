use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ViewResult<T> = Result<T, ViewError>;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid plot area: left={left}, top={top}, width={width}, height={height}")]
    InvalidPlotArea {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },

    #[error(transparent)]
    IncompatibleUnits(#[from] IncompatibleUnitsError),
}

/// Axis whose unit labels disagree between overlaid series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitAxis {
    X,
    Y,
}

impl fmt::Display for UnitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Overlay rejection: series `series_index` does not share units with series 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "incompatible {axis} units: series 0 has `{expected}`, series {series_index} has `{found}`"
)]
pub struct IncompatibleUnitsError {
    pub axis: UnitAxis,
    pub series_index: usize,
    pub expected: String,
    pub found: String,
}
