use tracing::trace;

use crate::core::scale_data::{AxisScale, IndexWindows, MultiScaleData};
use crate::core::series::SeriesWindow;
use crate::core::ticks::{NiceStep, ceil_to_step, floor_to_step, nice_step};
use crate::error::{ViewError, ViewResult};

/// Default number of axis divisions the generator aims for.
pub const DEFAULT_TARGET_TICKS: usize = 10;

/// Fraction of the value's magnitude used as span when an axis is flat.
const DEGENERATE_SPAN_RATIO: f64 = 0.1;

/// Span used when a flat axis sits exactly at zero.
const DEGENERATE_ZERO_SPAN: f64 = 1.0;

/// Builds [`MultiScaleData`] from one or more series windows.
///
/// All windows contribute to one shared x range and one shared y range so
/// overlaid spectra are drawn in a common coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleDataGenerator {
    target_x_ticks: usize,
    target_y_ticks: usize,
    continuous: bool,
}

impl Default for ScaleDataGenerator {
    fn default() -> Self {
        Self {
            target_x_ticks: DEFAULT_TARGET_TICKS,
            target_y_ticks: DEFAULT_TARGET_TICKS,
            continuous: true,
        }
    }
}

impl ScaleDataGenerator {
    pub fn new(target_x_ticks: usize, target_y_ticks: usize) -> ViewResult<Self> {
        if target_x_ticks == 0 || target_y_ticks == 0 {
            return Err(ViewError::InvalidArgument(format!(
                "target tick counts must be > 0 (x={target_x_ticks}, y={target_y_ticks})"
            )));
        }

        Ok(Self {
            target_x_ticks,
            target_y_ticks,
            continuous: true,
        })
    }

    /// Stick spectra get half a step of room past the last x value.
    #[must_use]
    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    #[must_use]
    pub fn target_x_ticks(self) -> usize {
        self.target_x_ticks
    }

    #[must_use]
    pub fn target_y_ticks(self) -> usize {
        self.target_y_ticks
    }

    #[must_use]
    pub fn is_continuous(self) -> bool {
        self.continuous
    }

    /// Computes the shared display scale over the given windows.
    pub fn generate(self, windows: &[SeriesWindow<'_>]) -> ViewResult<MultiScaleData> {
        self.generate_inner(windows, None)
    }

    /// Like [`Self::generate`] but displays `[y_min, y_max]` instead of the data's y extent.
    pub fn generate_with_y_extent(
        self,
        windows: &[SeriesWindow<'_>],
        y_min: f64,
        y_max: f64,
    ) -> ViewResult<MultiScaleData> {
        if !y_min.is_finite() || !y_max.is_finite() {
            return Err(ViewError::InvalidArgument(
                "y extent must be finite".to_owned(),
            ));
        }
        let extent = if y_min <= y_max {
            (y_min, y_max)
        } else {
            (y_max, y_min)
        };
        self.generate_inner(windows, Some(extent))
    }

    fn generate_inner(
        self,
        windows: &[SeriesWindow<'_>],
        y_extent: Option<(f64, f64)>,
    ) -> ViewResult<MultiScaleData> {
        if windows.is_empty() {
            return Err(ViewError::InvalidArgument(
                "scale generation needs at least one series".to_owned(),
            ));
        }
        if self.target_x_ticks == 0 || self.target_y_ticks == 0 {
            return Err(ViewError::InvalidArgument(
                "target tick counts must be > 0".to_owned(),
            ));
        }

        let mut extent = Extent::empty();
        let mut start_indices = IndexWindows::with_capacity(windows.len());
        let mut end_indices = IndexWindows::with_capacity(windows.len());

        for (series_index, window) in windows.iter().enumerate() {
            let (start, end) = window.clamped_bounds()?;
            for (offset, point) in window.coordinates[start..=end].iter().enumerate() {
                if !point.is_finite() {
                    return Err(ViewError::InvalidArgument(format!(
                        "series {series_index} has a non-finite coordinate at index {}",
                        start + offset
                    )));
                }
                extent.include(point.x, point.y);
            }
            start_indices.push(start);
            end_indices.push(end);
        }

        let (min_y, max_y) = y_extent.unwrap_or((extent.min_y, extent.max_y));
        let mut x = axis_scale(extent.min_x, extent.max_x, self.target_x_ticks)?;
        let y = axis_scale(min_y, max_y, self.target_y_ticks)?;
        if !self.continuous {
            x.max_on_scale += x.step / 2.0;
        }

        trace!(
            series = windows.len(),
            min_x = x.min,
            max_x = x.max,
            x_step = x.step,
            min_y = y.min,
            max_y = y.max,
            y_step = y.step,
            "generated scale data"
        );

        Ok(MultiScaleData::from_parts(x, y, start_indices, end_indices))
    }
}

/// Computes the shared display scale with explicit tick targets.
pub fn generate(
    windows: &[SeriesWindow<'_>],
    target_x_ticks: usize,
    target_y_ticks: usize,
) -> ViewResult<MultiScaleData> {
    ScaleDataGenerator::new(target_x_ticks, target_y_ticks)?.generate(windows)
}

#[derive(Debug, Clone, Copy)]
struct Extent {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Extent {
    fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, x: f64, y: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }
}

fn axis_scale(min: f64, max: f64, target_ticks: usize) -> ViewResult<AxisScale> {
    let span = max - min;
    if !span.is_finite() || span < 0.0 {
        return Err(ViewError::InvalidArgument(format!(
            "axis range [{min}, {max}] cannot be scaled"
        )));
    }

    let effective_span = if span > 0.0 {
        span
    } else if min == 0.0 {
        DEGENERATE_ZERO_SPAN
    } else {
        min.abs() * DEGENERATE_SPAN_RATIO
    };

    let NiceStep { step, exponent } = nice_step(effective_span / target_ticks as f64);
    let min_on_scale = floor_to_step(min, step);
    let mut max_on_scale = ceil_to_step(max, step);
    if span == 0.0 || max_on_scale <= min_on_scale {
        max_on_scale = (min_on_scale + step).max(max);
    }

    AxisScale {
        min,
        max,
        min_on_scale,
        max_on_scale,
        step,
        hash_num: exponent,
    }
    .validate()
}
