use specview::core::{Coordinate, SeriesData, check_compatible};
use specview::error::UnitAxis;

fn series(x_units: &str, y_units: &str) -> SeriesData {
    SeriesData::from_ordered(
        vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)],
        x_units,
        y_units,
    )
    .expect("series")
}

#[test]
fn matching_units_are_compatible() {
    let list = [
        series("1/CM", "ABSORBANCE"),
        series("1/CM", "ABSORBANCE"),
        series("1/CM", "ABSORBANCE"),
    ];
    assert!(check_compatible(&list).is_ok());
}

#[test]
fn single_and_empty_lists_are_trivially_compatible() {
    assert!(check_compatible(&[series("PPM", "ARBITRARY UNITS")]).is_ok());
    assert!(check_compatible::<SeriesData>(&[]).is_ok());
}

#[test]
fn x_unit_mismatch_names_axis_and_series() {
    let list = [series("PPM", "ARBITRARY UNITS"), series("HZ", "ARBITRARY UNITS")];
    let err = check_compatible(&list).expect_err("x mismatch");

    assert_eq!(err.axis, UnitAxis::X);
    assert_eq!(err.series_index, 1);
    assert_eq!(err.expected, "PPM");
    assert_eq!(err.found, "HZ");
}

#[test]
fn y_unit_mismatch_is_rejected() {
    let list = [
        series("1/CM", "ABSORBANCE"),
        series("1/CM", "ABSORBANCE"),
        series("1/CM", "TRANSMITTANCE"),
    ];
    let err = check_compatible(&list).expect_err("y mismatch");
    assert_eq!(err.axis, UnitAxis::Y);
    assert_eq!(err.series_index, 2);
}

#[test]
fn unit_comparison_is_exact() {
    let list = [series("ppm", "a.u."), series("PPM", "a.u.")];
    assert!(check_compatible(&list).is_err());
}

#[test]
fn argument_order_does_not_change_the_verdict() {
    let a = series("PPM", "ARBITRARY UNITS");
    let b = series("PPM", "COUNTS");
    assert_eq!(
        check_compatible(&[&a, &b]).is_ok(),
        check_compatible(&[&b, &a]).is_ok()
    );
}
