pub mod compatibility;
pub mod coordinate;
pub mod direction;
pub mod scale_data;
pub mod scale_generator;
pub mod series;
pub mod ticks;
pub mod transform;
pub mod zoom_stack;

pub use compatibility::check_compatible;
pub use coordinate::{Coordinate, PlotAreaRect};
pub use direction::{DirectionToggles, PlotDirection};
pub use scale_data::{AxisScale, IndexWindows, MultiScaleData};
pub use scale_generator::{DEFAULT_TARGET_TICKS, ScaleDataGenerator, generate};
pub use series::{Series, SeriesData, SeriesWindow, YScaleType, index_window_for_x_range};
pub use ticks::{
    MAX_NICE_STEP, MIN_NICE_STEP, NiceStep, format_tick_label, nice_step, tick_values,
};
pub use transform::CoordinateTransform;
pub use zoom_stack::ZoomStack;
