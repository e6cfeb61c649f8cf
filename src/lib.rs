//! specview: the view engine behind a spectral data viewer.
//!
//! It turns one or more spectra into a rounded display scale, keeps a
//! back/forward zoom history, and maps between data and pixel coordinates
//! for overlaid series with independent plot directions. Parsing, rendering
//! and windowing live in the host application.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ViewEngine, ViewEngineConfig, ZoomOutcome};
pub use crate::core::{
    Coordinate, MultiScaleData, PlotAreaRect, PlotDirection, Series, SeriesData,
};
pub use error::{ViewError, ViewResult};
