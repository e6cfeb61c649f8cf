use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    Coordinate, CoordinateTransform, DirectionToggles, MultiScaleData, PlotAreaRect,
    PlotDirection, ScaleDataGenerator, Series, SeriesData, SeriesWindow, YScaleType, ZoomStack,
    check_compatible, index_window_for_x_range,
};
use crate::error::{ViewError, ViewResult};

use super::{SeriesUnits, VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewEngineConfig, ViewSnapshot};

/// Zoom state of a view, derived from the zoom-stack position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewState {
    Unzoomed,
    Zoomed,
}

/// Why a zoom request left the view untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomRejection {
    /// Zooming is switched off in the view config.
    ZoomDisabled,
    /// The requested range does not intersect the base data range.
    OutOfRange,
    /// The first series does not allow its y range to be rescaled.
    YScaleLocked,
    /// A series would keep fewer points than `min_points_for_zoom`.
    InsufficientPoints {
        series_index: usize,
        point_count: usize,
        required: usize,
    },
}

/// Result of a zoom request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomOutcome {
    Applied,
    Rejected(ZoomRejection),
}

impl ZoomOutcome {
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Zoom, history and coordinate-mapping state of one open view.
///
/// Each view owns its engine. Series are shared read-only through `Arc`
/// so several views can overlay the same spectra.
#[derive(Debug, Clone)]
pub struct ViewEngine<S: Series = SeriesData> {
    series: Vec<Arc<S>>,
    config: ViewEngineConfig,
    generator: ScaleDataGenerator,
    zoom_stack: ZoomStack,
    direction: PlotDirection,
}

impl<S: Series> ViewEngine<S> {
    /// Opens a view over the full index range of every series.
    pub fn open_view(series: Vec<Arc<S>>, config: ViewEngineConfig) -> ViewResult<Self> {
        let starts = vec![0; series.len()];
        let ends: Vec<usize> = series
            .iter()
            .map(|series| series.len().saturating_sub(1))
            .collect();
        Self::open_view_with_indices(series, &starts, &ends, config)
    }

    /// Opens a view whose base entry covers the given inclusive index windows.
    ///
    /// Indices past the end of a series are clamped to its last point.
    pub fn open_view_with_indices(
        series: Vec<Arc<S>>,
        start_indices: &[usize],
        end_indices: &[usize],
        config: ViewEngineConfig,
    ) -> ViewResult<Self> {
        let config = config.validate()?;
        if series.is_empty() {
            return Err(ViewError::InvalidArgument(
                "a view needs at least one series".to_owned(),
            ));
        }
        ensure_window_count(series.len(), start_indices, end_indices)?;
        if series.len() > 1 {
            check_compatible(&series)?;
        }

        let generator = ScaleDataGenerator::new(config.target_x_ticks, config.target_y_ticks)?
            .with_continuous(series.iter().all(|series| series.is_continuous()));
        let windows: Vec<SeriesWindow<'_>> = series
            .iter()
            .zip(start_indices.iter().zip(end_indices))
            .map(|(series, (&start, &end))| SeriesWindow::new(series.coordinates(), start, end))
            .collect();
        let base = generator.generate(&windows)?;
        drop(windows);

        let direction = resolve_direction(&series, config.reverse_plot, config.overlay_increasing);
        debug!(
            series = series.len(),
            min_x = base.min_x(),
            max_x = base.max_x(),
            min_y = base.min_y(),
            max_y = base.max_y(),
            ?direction,
            "open view"
        );

        Ok(Self {
            series,
            config,
            generator,
            zoom_stack: ZoomStack::new(base),
            direction,
        })
    }

    /// Zooms to the data rectangle spanned by two corners.
    ///
    /// The x range is clamped to the base data range and each series keeps
    /// the points whose x lies inside it. When the corners differ in y, the
    /// clamped y range becomes the displayed y extent. A rejected request
    /// leaves the view unchanged.
    pub fn zoom_to_data_range(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> ZoomOutcome {
        if !self.config.zoom_enabled {
            return ZoomOutcome::Rejected(ZoomRejection::ZoomDisabled);
        }
        if !x1.is_finite() || !x2.is_finite() || !y1.is_finite() || !y2.is_finite() {
            return ZoomOutcome::Rejected(ZoomRejection::OutOfRange);
        }

        let (x1, x2) = ordered(x1, x2);
        let (y1, y2) = ordered(y1, y2);
        let base = self.zoom_stack.base();
        let x_min = x1.max(base.min_x());
        let x_max = x2.min(base.max_x());
        if x_min > x_max {
            trace!(x1, x2, "zoom range outside data");
            return ZoomOutcome::Rejected(ZoomRejection::OutOfRange);
        }
        let y_extent = (y1 != y2)
            .then(|| (y1.max(base.min_y()), y2.min(base.max_y())))
            .filter(|(low, high)| low < high);

        self.zoom_to_x_window(x_min, x_max, y_extent)
    }

    /// Rescales the displayed y range by `factor` over the current x range and
    /// records the result as a new zoom entry.
    ///
    /// `factor > 1` magnifies. The first series' [`YScaleType`] picks which
    /// bounds move. A non-finite or non-positive factor is out of range.
    pub fn scale_y_by(&mut self, factor: f64) -> ZoomOutcome {
        if !self.config.zoom_enabled {
            return ZoomOutcome::Rejected(ZoomRejection::ZoomDisabled);
        }
        if !factor.is_finite() || factor <= 0.0 {
            return ZoomOutcome::Rejected(ZoomRejection::OutOfRange);
        }
        let scale_type = self
            .series
            .first()
            .map_or(YScaleType::Both, |series| series.y_scale_type());
        let (bottom_factor, top_factor) = match scale_type {
            YScaleType::Both => (factor, factor),
            YScaleType::TopOnly => (1.0, factor),
            YScaleType::BottomOnly => (factor, 1.0),
            YScaleType::Locked => return ZoomOutcome::Rejected(ZoomRejection::YScaleLocked),
        };

        let current = self.zoom_stack.current();
        let (x_min, x_max) = (current.min_x(), current.max_x());
        let low = current.min_y() / bottom_factor;
        let high = current.max_y() / top_factor;
        trace!(factor, low, high, "scale y");
        self.zoom_to_x_window(x_min, x_max, (low < high).then_some((low, high)))
    }

    fn zoom_to_x_window(
        &mut self,
        x_min: f64,
        x_max: f64,
        y_extent: Option<(f64, f64)>,
    ) -> ZoomOutcome {
        let mut windows = Vec::with_capacity(self.series.len());
        for (series_index, series) in self.series.iter().enumerate() {
            let coordinates = series.coordinates();
            let window =
                index_window_for_x_range(coordinates, series.is_increasing(), x_min, x_max);
            let point_count = window.map_or(0, |(start, end)| end - start + 1);
            if point_count < self.config.min_points_for_zoom {
                trace!(series_index, point_count, "zoom rejected");
                return ZoomOutcome::Rejected(ZoomRejection::InsufficientPoints {
                    series_index,
                    point_count,
                    required: self.config.min_points_for_zoom,
                });
            }
            if let Some((start, end)) = window {
                windows.push(SeriesWindow::new(coordinates, start, end));
            }
        }

        let generated = match y_extent {
            Some((low, high)) => self.generator.generate_with_y_extent(&windows, low, high),
            None => self.generator.generate(&windows),
        };
        match generated {
            Ok(entry) => {
                drop(windows);
                self.push_zoom(entry);
                ZoomOutcome::Applied
            }
            Err(err) => {
                warn!(error = %err, "skipping zoom with unusable scale");
                ZoomOutcome::Rejected(ZoomRejection::OutOfRange)
            }
        }
    }

    /// Zooms to explicit inclusive index windows, one per series.
    ///
    /// Indices past the end of a series are clamped before the point-count check.
    pub fn zoom_to_indices(
        &mut self,
        start_indices: &[usize],
        end_indices: &[usize],
    ) -> ViewResult<ZoomOutcome> {
        ensure_window_count(self.series.len(), start_indices, end_indices)?;
        if !self.config.zoom_enabled {
            return Ok(ZoomOutcome::Rejected(ZoomRejection::ZoomDisabled));
        }

        let mut windows = Vec::with_capacity(self.series.len());
        for (series_index, (series, (&start, &end))) in self
            .series
            .iter()
            .zip(start_indices.iter().zip(end_indices))
            .enumerate()
        {
            let window = SeriesWindow::new(series.coordinates(), start, end);
            let (clamped_start, clamped_end) = window.clamped_bounds()?;
            if (clamped_start, clamped_end) != (start, end) {
                warn!(
                    series_index,
                    start, end, clamped_start, clamped_end, "clamped zoom index window"
                );
            }
            let point_count = clamped_end - clamped_start + 1;
            if point_count < self.config.min_points_for_zoom {
                return Ok(ZoomOutcome::Rejected(ZoomRejection::InsufficientPoints {
                    series_index,
                    point_count,
                    required: self.config.min_points_for_zoom,
                }));
            }
            windows.push(SeriesWindow::new(
                series.coordinates(),
                clamped_start,
                clamped_end,
            ));
        }

        let entry = self.generator.generate(&windows)?;
        drop(windows);
        self.push_zoom(entry);
        Ok(ZoomOutcome::Applied)
    }

    /// Scripted zoom: returns to the base view, then zooms to the rectangle.
    ///
    /// `x1 == x2 == 0` only resets. A NaN `x1` zooms y alone over the full x range.
    pub fn set_zoom(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> ZoomOutcome {
        self.reset_view();
        let (x1, x2) = if x1.is_nan() {
            let base = self.zoom_stack.base();
            (base.min_x(), base.max_x())
        } else {
            (x1, x2)
        };
        if x1 == 0.0 && x2 == 0.0 {
            return ZoomOutcome::Applied;
        }
        self.zoom_to_data_range(x1, y1, x2, y2)
    }

    pub fn step_back(&mut self) -> Option<&MultiScaleData> {
        self.zoom_stack.step_back()
    }

    pub fn step_forward(&mut self) -> Option<&MultiScaleData> {
        self.zoom_stack.step_forward()
    }

    /// Shows the base view; forward history is kept.
    pub fn reset_view(&mut self) -> &MultiScaleData {
        debug!(history_len = self.zoom_stack.len(), "reset view");
        self.zoom_stack.reset_to_base()
    }

    /// Shows the base view and discards all zoom history.
    pub fn clear_views(&mut self) {
        debug!(history_len = self.zoom_stack.len(), "clear views");
        self.zoom_stack.clear_to_base();
    }

    /// Maps a pointer position to data coordinates under the current scale.
    pub fn pick(&self, px: f64, py: f64, area: PlotAreaRect) -> ViewResult<Coordinate> {
        self.transform(area)?.pixel_to_data(px, py)
    }

    /// Like [`Self::pick`] but first pulls the pointer back inside the plot area.
    pub fn pick_clamped(&self, px: f64, py: f64, area: PlotAreaRect) -> ViewResult<Coordinate> {
        let transform = self.transform(area)?;
        let (px, py) = transform.clamp_pixel(px, py);
        transform.pixel_to_data(px, py)
    }

    pub fn data_to_pixel(
        &self,
        coord: Coordinate,
        area: PlotAreaRect,
    ) -> ViewResult<(f64, f64)> {
        self.transform(area)?.data_to_pixel(coord)
    }

    /// Transform for the current scale and resolved direction.
    pub fn transform(&self, area: PlotAreaRect) -> ViewResult<CoordinateTransform> {
        CoordinateTransform::new(self.zoom_stack.current(), area, self.direction)
    }

    pub fn set_reverse_plot(&mut self, reverse: bool) {
        self.config.reverse_plot = reverse;
        self.refresh_direction();
    }

    pub fn set_overlay_increasing(&mut self, increasing: Option<bool>) {
        self.config.overlay_increasing = increasing;
        self.refresh_direction();
    }

    #[must_use]
    pub fn current(&self) -> &MultiScaleData {
        self.zoom_stack.current()
    }

    #[must_use]
    pub fn base(&self) -> &MultiScaleData {
        self.zoom_stack.base()
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        if self.zoom_stack.is_zoomed() {
            ViewState::Zoomed
        } else {
            ViewState::Unzoomed
        }
    }

    #[must_use]
    pub fn zoom_stack(&self) -> &ZoomStack {
        &self.zoom_stack
    }

    #[must_use]
    pub fn direction(&self) -> PlotDirection {
        self.direction
    }

    #[must_use]
    pub fn config(&self) -> ViewEngineConfig {
        self.config
    }

    #[must_use]
    pub fn series(&self) -> &[Arc<S>] {
        &self.series
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Inclusive index window of series `index` under the current scale.
    #[must_use]
    pub fn window(&self, index: usize) -> Option<(usize, usize)> {
        self.zoom_stack.current().window(index)
    }

    /// Points of series `index` inside its current window.
    #[must_use]
    pub fn visible_points(&self, index: usize) -> Option<&[Coordinate]> {
        let (start, end) = self.window(index)?;
        self.series.get(index)?.coordinates().get(start..=end)
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            schema_version: VIEW_SNAPSHOT_JSON_SCHEMA_V1,
            state: self.state(),
            direction: self.direction,
            current_index: self.zoom_stack.current_index(),
            history_len: self.zoom_stack.len(),
            current: self.zoom_stack.current().clone(),
            series_units: self
                .series
                .iter()
                .map(|series| SeriesUnits {
                    x_units: series.x_units().to_owned(),
                    y_units: series.y_units().to_owned(),
                })
                .collect(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ViewResult<String> {
        self.snapshot().to_json_pretty()
    }

    fn push_zoom(&mut self, entry: MultiScaleData) {
        debug!(
            min_x = entry.min_x(),
            max_x = entry.max_x(),
            min_y = entry.min_y(),
            max_y = entry.max_y(),
            "zoom applied"
        );
        self.zoom_stack.push(entry);
    }

    fn refresh_direction(&mut self) {
        self.direction = resolve_direction(
            &self.series,
            self.config.reverse_plot,
            self.config.overlay_increasing,
        );
        trace!(direction = ?self.direction, "resolved plot direction");
    }
}

fn resolve_direction<S: Series>(
    series: &[Arc<S>],
    reverse_plot: bool,
    overlay_increasing: Option<bool>,
) -> PlotDirection {
    PlotDirection::resolve(DirectionToggles {
        series_count: series.len(),
        first_series_increasing: series.first().is_none_or(|series| series.is_increasing()),
        reverse_plot,
        overlay_increasing,
    })
}

fn ensure_window_count(
    series_count: usize,
    start_indices: &[usize],
    end_indices: &[usize],
) -> ViewResult<()> {
    if start_indices.len() != series_count || end_indices.len() != series_count {
        return Err(ViewError::InvalidArgument(format!(
            "expected {series_count} index windows, got {} starts and {} ends",
            start_indices.len(),
            end_indices.len()
        )));
    }
    Ok(())
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
