mod config;
mod engine;
mod snapshot;

pub use config::{DEFAULT_MIN_POINTS_FOR_ZOOM, ViewEngineConfig};
pub use engine::{ViewEngine, ViewState, ZoomOutcome, ZoomRejection};
pub use snapshot::{SeriesUnits, VIEW_SNAPSHOT_JSON_SCHEMA_V1, ViewSnapshot};
