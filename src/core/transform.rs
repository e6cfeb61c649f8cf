use crate::core::{AxisScale, Coordinate, MultiScaleData, PlotAreaRect, PlotDirection};
use crate::error::{ViewError, ViewResult};

/// Linear mapping between data space and a plot-area rectangle.
///
/// Data y grows upwards while pixel y grows downwards. `RightToLeft`
/// mirrors the x mapping about the area's horizontal centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    x: AxisScale,
    y: AxisScale,
    area: PlotAreaRect,
    direction: PlotDirection,
}

impl CoordinateTransform {
    pub fn new(
        scale: &MultiScaleData,
        area: PlotAreaRect,
        direction: PlotDirection,
    ) -> ViewResult<Self> {
        let area = area.validate()?;
        let (x, y) = (scale.x_axis(), scale.y_axis());
        if !has_extent(x) || !has_extent(y) {
            return Err(ViewError::InvalidArgument(
                "scale range must be non-empty on both axes".to_owned(),
            ));
        }

        Ok(Self {
            x,
            y,
            area,
            direction,
        })
    }

    #[must_use]
    pub fn area(self) -> PlotAreaRect {
        self.area
    }

    #[must_use]
    pub fn direction(self) -> PlotDirection {
        self.direction
    }

    pub fn data_to_pixel(self, coord: Coordinate) -> ViewResult<(f64, f64)> {
        Ok((self.x_to_pixel(coord.x)?, self.y_to_pixel(coord.y)?))
    }

    pub fn pixel_to_data(self, px: f64, py: f64) -> ViewResult<Coordinate> {
        Ok(Coordinate::new(self.pixel_to_x(px)?, self.pixel_to_y(py)?))
    }

    pub fn x_to_pixel(self, x: f64) -> ViewResult<f64> {
        ensure_finite(x, "x")?;
        let offset = (x - self.x.min_on_scale) / self.x.span_on_scale() * self.area.width;
        Ok(match self.direction {
            PlotDirection::LeftToRight => self.area.left + offset,
            PlotDirection::RightToLeft => self.area.right() - offset,
        })
    }

    pub fn pixel_to_x(self, px: f64) -> ViewResult<f64> {
        ensure_finite(px, "pixel x")?;
        let offset = match self.direction {
            PlotDirection::LeftToRight => px - self.area.left,
            PlotDirection::RightToLeft => self.area.right() - px,
        };
        Ok(self.x.min_on_scale + offset / self.area.width * self.x.span_on_scale())
    }

    pub fn y_to_pixel(self, y: f64) -> ViewResult<f64> {
        ensure_finite(y, "y")?;
        let offset = (y - self.y.min_on_scale) / self.y.span_on_scale() * self.area.height;
        Ok(self.area.bottom() - offset)
    }

    pub fn pixel_to_y(self, py: f64) -> ViewResult<f64> {
        ensure_finite(py, "pixel y")?;
        let offset = self.area.bottom() - py;
        Ok(self.y.min_on_scale + offset / self.area.height * self.y.span_on_scale())
    }

    #[must_use]
    pub fn contains_pixel(self, px: f64, py: f64) -> bool {
        px >= self.area.left
            && px <= self.area.right()
            && py >= self.area.top
            && py <= self.area.bottom()
    }

    /// Pulls a pointer position back inside the plot area.
    #[must_use]
    pub fn clamp_pixel(self, px: f64, py: f64) -> (f64, f64) {
        (
            px.clamp(self.area.left, self.area.right()),
            py.clamp(self.area.top, self.area.bottom()),
        )
    }
}

fn has_extent(axis: AxisScale) -> bool {
    let span = axis.span_on_scale();
    span.is_finite() && span > 0.0
}

fn ensure_finite(value: f64, name: &str) -> ViewResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ViewError::InvalidArgument(format!("{name} must be finite")))
    }
}
