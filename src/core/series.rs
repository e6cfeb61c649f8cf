use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::Coordinate;
use crate::error::{ViewError, ViewResult};

/// Which y bounds follow a y rescale of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YScaleType {
    #[default]
    Both,
    /// Only the top moves; the baseline stays put (absorbance-like data).
    TopOnly,
    /// Only the bottom moves (transmittance-like data hanging from the top).
    BottomOnly,
    /// The y range is fixed.
    Locked,
}

/// Data contract the view engine needs from a loaded spectrum.
///
/// Implementors are owned by the data-loading layer; the engine only reads
/// them through shared handles.
pub trait Series {
    /// Ordered coordinates; never empty.
    fn coordinates(&self) -> &[Coordinate];

    /// `true` when coordinates are sorted by ascending x.
    fn is_increasing(&self) -> bool;

    fn x_units(&self) -> &str;

    fn y_units(&self) -> &str;

    /// Continuous traces are drawn as polylines, stick spectra as bars.
    fn is_continuous(&self) -> bool {
        true
    }

    fn y_scale_type(&self) -> YScaleType {
        YScaleType::Both
    }

    fn len(&self) -> usize {
        self.coordinates().len()
    }

    fn is_empty(&self) -> bool {
        self.coordinates().is_empty()
    }
}

/// Owned series used by hosts that do not bring their own `Series` type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    coordinates: Vec<Coordinate>,
    is_increasing: bool,
    x_units: String,
    y_units: String,
    #[serde(default = "default_continuous")]
    continuous: bool,
    #[serde(default)]
    y_scale_type: YScaleType,
}

fn default_continuous() -> bool {
    true
}

impl SeriesData {
    pub fn new(
        coordinates: Vec<Coordinate>,
        is_increasing: bool,
        x_units: impl Into<String>,
        y_units: impl Into<String>,
    ) -> ViewResult<Self> {
        if coordinates.is_empty() {
            return Err(ViewError::InvalidArgument(
                "series must contain at least one coordinate".to_owned(),
            ));
        }

        Ok(Self {
            coordinates,
            is_increasing,
            x_units: x_units.into(),
            y_units: y_units.into(),
            continuous: true,
            y_scale_type: YScaleType::Both,
        })
    }

    /// Builds a series and infers the direction flag from its end points.
    pub fn from_ordered(
        coordinates: Vec<Coordinate>,
        x_units: impl Into<String>,
        y_units: impl Into<String>,
    ) -> ViewResult<Self> {
        let is_increasing = match (coordinates.first(), coordinates.last()) {
            (Some(first), Some(last)) => first.x <= last.x,
            _ => true,
        };
        Self::new(coordinates, is_increasing, x_units, y_units)
    }

    #[must_use]
    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    #[must_use]
    pub fn with_y_scale_type(mut self, y_scale_type: YScaleType) -> Self {
        self.y_scale_type = y_scale_type;
        self
    }
}

impl Series for SeriesData {
    fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    fn is_increasing(&self) -> bool {
        self.is_increasing
    }

    fn x_units(&self) -> &str {
        &self.x_units
    }

    fn y_units(&self) -> &str {
        &self.y_units
    }

    fn is_continuous(&self) -> bool {
        self.continuous
    }

    fn y_scale_type(&self) -> YScaleType {
        self.y_scale_type
    }
}

impl<T: Series + ?Sized> Series for Arc<T> {
    fn coordinates(&self) -> &[Coordinate] {
        (**self).coordinates()
    }

    fn is_increasing(&self) -> bool {
        (**self).is_increasing()
    }

    fn x_units(&self) -> &str {
        (**self).x_units()
    }

    fn y_units(&self) -> &str {
        (**self).y_units()
    }

    fn is_continuous(&self) -> bool {
        (**self).is_continuous()
    }

    fn y_scale_type(&self) -> YScaleType {
        (**self).y_scale_type()
    }
}

impl<T: Series + ?Sized> Series for &T {
    fn coordinates(&self) -> &[Coordinate] {
        (**self).coordinates()
    }

    fn is_increasing(&self) -> bool {
        (**self).is_increasing()
    }

    fn x_units(&self) -> &str {
        (**self).x_units()
    }

    fn y_units(&self) -> &str {
        (**self).y_units()
    }

    fn is_continuous(&self) -> bool {
        (**self).is_continuous()
    }

    fn y_scale_type(&self) -> YScaleType {
        (**self).y_scale_type()
    }
}

/// Inclusive index window into one series' coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesWindow<'a> {
    pub coordinates: &'a [Coordinate],
    pub start_index: usize,
    pub end_index: usize,
}

impl<'a> SeriesWindow<'a> {
    #[must_use]
    pub fn new(coordinates: &'a [Coordinate], start_index: usize, end_index: usize) -> Self {
        Self {
            coordinates,
            start_index,
            end_index,
        }
    }

    /// Window spanning every coordinate.
    #[must_use]
    pub fn full(coordinates: &'a [Coordinate]) -> Self {
        Self::new(coordinates, 0, coordinates.len().saturating_sub(1))
    }

    /// Validates ordering and clamps both indices into `[0, len)`.
    pub fn clamped_bounds(self) -> ViewResult<(usize, usize)> {
        if self.coordinates.is_empty() {
            return Err(ViewError::InvalidArgument(
                "series window refers to an empty coordinate array".to_owned(),
            ));
        }
        if self.start_index > self.end_index {
            return Err(ViewError::InvalidArgument(format!(
                "start index {} is greater than end index {}",
                self.start_index, self.end_index
            )));
        }

        let last = self.coordinates.len() - 1;
        Ok((self.start_index.min(last), self.end_index.min(last)))
    }
}

/// Returns the inclusive index range of coordinates whose x lies in `[x_min, x_max]`.
///
/// Relies on the series being monotonic in the direction given by `is_increasing`.
#[must_use]
pub fn index_window_for_x_range(
    coordinates: &[Coordinate],
    is_increasing: bool,
    x_min: f64,
    x_max: f64,
) -> Option<(usize, usize)> {
    let (min_x, max_x) = if x_min <= x_max {
        (x_min, x_max)
    } else {
        (x_max, x_min)
    };

    let (start, end_exclusive) = if is_increasing {
        (
            coordinates.partition_point(|point| point.x < min_x),
            coordinates.partition_point(|point| point.x <= max_x),
        )
    } else {
        (
            coordinates.partition_point(|point| point.x > max_x),
            coordinates.partition_point(|point| point.x >= min_x),
        )
    };

    (start < end_exclusive).then(|| (start, end_exclusive - 1))
}

#[cfg(test)]
mod tests {
    use super::{Coordinate, index_window_for_x_range};

    fn ramp(values: impl Iterator<Item = f64>) -> Vec<Coordinate> {
        values.map(|x| Coordinate::new(x, x * 2.0)).collect()
    }

    #[test]
    fn ascending_window_is_inclusive_on_both_ends() {
        let coords = ramp((0..=10).map(f64::from));
        assert_eq!(index_window_for_x_range(&coords, true, 2.0, 8.0), Some((2, 8)));
        assert_eq!(index_window_for_x_range(&coords, true, 8.0, 2.0), Some((2, 8)));
    }

    #[test]
    fn descending_window_uses_reverse_search() {
        let coords = ramp((0..=10).rev().map(f64::from));
        assert_eq!(index_window_for_x_range(&coords, false, 2.0, 8.0), Some((2, 8)));
        assert_eq!(index_window_for_x_range(&coords, false, 9.5, 20.0), Some((0, 0)));
    }

    #[test]
    fn window_outside_data_is_none() {
        let coords = ramp((0..=10).map(f64::from));
        assert_eq!(index_window_for_x_range(&coords, true, 11.0, 20.0), None);
        assert_eq!(index_window_for_x_range(&coords, true, 3.2, 3.8), None);
    }
}
