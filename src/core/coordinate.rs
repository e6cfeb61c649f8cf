use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

/// Immutable `(x, y)` pair in data space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Plot-area geometry owned by the renderer, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotAreaRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotAreaRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn validate(self) -> ViewResult<Self> {
        if !self.is_valid() {
            return Err(ViewError::InvalidPlotArea {
                left: self.left,
                top: self.top,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}
