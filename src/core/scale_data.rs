use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ticks::{format_tick_label, tick_values};
use crate::error::{ViewError, ViewResult};

/// Per-series index storage; overlays rarely exceed a handful of spectra.
pub type IndexWindows = SmallVec<[usize; 4]>;

/// Raw extent, rounded display extent and tick spacing of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub min: f64,
    pub max: f64,
    pub min_on_scale: f64,
    pub max_on_scale: f64,
    pub step: f64,
    /// Decimal exponent of `step`; `<= 0` means `|hash_num|` fractional digits.
    pub hash_num: i32,
}

impl AxisScale {
    /// Checks `min_on_scale <= min <= max <= max_on_scale` with finite bounds,
    /// a positive step and a non-empty display range.
    pub fn validate(self) -> ViewResult<Self> {
        let finite = [
            self.min,
            self.max,
            self.min_on_scale,
            self.max_on_scale,
            self.step,
        ]
        .iter()
        .all(|value| value.is_finite());
        if !finite
            || self.step <= 0.0
            || self.min > self.max
            || self.min_on_scale > self.min
            || self.max > self.max_on_scale
            || self.max_on_scale <= self.min_on_scale
        {
            return Err(ViewError::InvalidArgument(format!(
                "axis scale [{}, {}] on [{}, {}] with step {} is inconsistent",
                self.min, self.max, self.min_on_scale, self.max_on_scale, self.step
            )));
        }
        Ok(self)
    }

    #[must_use]
    pub fn span_on_scale(self) -> f64 {
        self.max_on_scale - self.min_on_scale
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub fn tick_values(self) -> Vec<f64> {
        tick_values(self.min_on_scale, self.max_on_scale, self.step)
    }

    #[must_use]
    pub fn format_tick(self, value: f64) -> String {
        format_tick_label(value, self.hash_num)
    }
}

/// Display scale shared by every series in a view.
///
/// Built by [`crate::core::ScaleDataGenerator`]; one instance per zoom-stack
/// entry and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScaleDataFields")]
pub struct MultiScaleData {
    x: AxisScale,
    y: AxisScale,
    start_indices: IndexWindows,
    end_indices: IndexWindows,
}

/// Wire shape of [`MultiScaleData`]; checked before it becomes one.
#[derive(Deserialize)]
struct ScaleDataFields {
    x: AxisScale,
    y: AxisScale,
    start_indices: IndexWindows,
    end_indices: IndexWindows,
}

impl TryFrom<ScaleDataFields> for MultiScaleData {
    type Error = ViewError;

    fn try_from(fields: ScaleDataFields) -> ViewResult<Self> {
        let x = fields.x.validate()?;
        let y = fields.y.validate()?;
        if fields.start_indices.is_empty()
            || fields.start_indices.len() != fields.end_indices.len()
        {
            return Err(ViewError::InvalidArgument(format!(
                "scale data needs one index window per series, got {} starts and {} ends",
                fields.start_indices.len(),
                fields.end_indices.len()
            )));
        }
        if let Some(series_index) = fields
            .start_indices
            .iter()
            .zip(&fields.end_indices)
            .position(|(start, end)| start > end)
        {
            return Err(ViewError::InvalidArgument(format!(
                "index window of series {series_index} starts after it ends"
            )));
        }
        Ok(Self::from_parts(x, y, fields.start_indices, fields.end_indices))
    }
}

impl MultiScaleData {
    pub(crate) fn from_parts(
        x: AxisScale,
        y: AxisScale,
        start_indices: IndexWindows,
        end_indices: IndexWindows,
    ) -> Self {
        debug_assert_eq!(start_indices.len(), end_indices.len());
        Self {
            x,
            y,
            start_indices,
            end_indices,
        }
    }

    #[must_use]
    pub fn x_axis(&self) -> AxisScale {
        self.x
    }

    #[must_use]
    pub fn y_axis(&self) -> AxisScale {
        self.y
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.x.min
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x.max
    }

    #[must_use]
    pub fn min_x_on_scale(&self) -> f64 {
        self.x.min_on_scale
    }

    #[must_use]
    pub fn max_x_on_scale(&self) -> f64 {
        self.x.max_on_scale
    }

    #[must_use]
    pub fn x_step(&self) -> f64 {
        self.x.step
    }

    #[must_use]
    pub fn hash_num_x(&self) -> i32 {
        self.x.hash_num
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.y.min
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y.max
    }

    #[must_use]
    pub fn min_y_on_scale(&self) -> f64 {
        self.y.min_on_scale
    }

    #[must_use]
    pub fn max_y_on_scale(&self) -> f64 {
        self.y.max_on_scale
    }

    #[must_use]
    pub fn y_step(&self) -> f64 {
        self.y.step
    }

    #[must_use]
    pub fn hash_num_y(&self) -> i32 {
        self.y.hash_num
    }

    #[must_use]
    pub fn start_data_point_indices(&self) -> &[usize] {
        &self.start_indices
    }

    #[must_use]
    pub fn end_data_point_indices(&self) -> &[usize] {
        &self.end_indices
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.start_indices.len()
    }

    /// Inclusive index window of series `index`.
    #[must_use]
    pub fn window(&self, index: usize) -> Option<(usize, usize)> {
        Some((*self.start_indices.get(index)?, *self.end_indices.get(index)?))
    }

    /// Number of points inside each series window.
    #[must_use]
    pub fn point_counts(&self) -> Vec<usize> {
        self.start_indices
            .iter()
            .zip(&self.end_indices)
            .map(|(start, end)| end - start + 1)
            .collect()
    }

    #[must_use]
    pub fn x_tick_values(&self) -> Vec<f64> {
        self.x.tick_values()
    }

    #[must_use]
    pub fn y_tick_values(&self) -> Vec<f64> {
        self.y.tick_values()
    }

    /// `true` when the y display range straddles zero, so a baseline can be drawn.
    #[must_use]
    pub fn is_y_zero_on_scale(&self) -> bool {
        self.y.min_on_scale < 0.0 && self.y.max_on_scale > 0.0
    }

    #[must_use]
    pub fn is_x_within_range(&self, x: f64) -> bool {
        self.x.contains(x)
    }
}
