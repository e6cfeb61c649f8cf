use crate::core::Series;
use crate::error::{IncompatibleUnitsError, UnitAxis};

/// Verifies that every series shares the x and y unit labels of the first one.
///
/// Unit equality is transitive, so comparing against the first series is
/// enough to make the result independent of argument order.
pub fn check_compatible<S: Series>(series: &[S]) -> Result<(), IncompatibleUnitsError> {
    let Some((first, rest)) = series.split_first() else {
        return Ok(());
    };

    for (offset, other) in rest.iter().enumerate() {
        let series_index = offset + 1;
        if other.x_units() != first.x_units() {
            return Err(IncompatibleUnitsError {
                axis: UnitAxis::X,
                series_index,
                expected: first.x_units().to_owned(),
                found: other.x_units().to_owned(),
            });
        }
        if other.y_units() != first.y_units() {
            return Err(IncompatibleUnitsError {
                axis: UnitAxis::Y,
                series_index,
                expected: first.y_units().to_owned(),
                found: other.y_units().to_owned(),
            });
        }
    }

    Ok(())
}
