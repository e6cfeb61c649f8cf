use approx::assert_relative_eq;
use specview::core::{
    Coordinate, CoordinateTransform, MultiScaleData, PlotAreaRect, PlotDirection, SeriesWindow,
    generate,
};
use specview::error::ViewError;

fn unit_scale() -> MultiScaleData {
    let coords: Vec<Coordinate> = (0..=10)
        .map(|i| Coordinate::new(f64::from(i), f64::from(i)))
        .collect();
    generate(&[SeriesWindow::full(&coords)], 10, 10).expect("scale")
}

fn area() -> PlotAreaRect {
    PlotAreaRect::new(50.0, 20.0, 1000.0, 500.0)
}

#[test]
fn left_to_right_maps_scale_bounds_to_area_edges() {
    let transform = CoordinateTransform::new(&unit_scale(), area(), PlotDirection::LeftToRight)
        .expect("transform");

    let origin = transform.data_to_pixel(Coordinate::new(0.0, 0.0)).expect("origin");
    let corner = transform.data_to_pixel(Coordinate::new(10.0, 10.0)).expect("corner");
    assert_eq!(origin, (50.0, 520.0));
    assert_eq!(corner, (1050.0, 20.0));
    assert_eq!(transform.x_to_pixel(5.0).expect("mid"), 550.0);
}

#[test]
fn right_to_left_mirrors_x_about_area_centre() {
    let scale = unit_scale();
    let ltr = CoordinateTransform::new(&scale, area(), PlotDirection::LeftToRight).expect("ltr");
    let rtl = CoordinateTransform::new(&scale, area(), PlotDirection::RightToLeft).expect("rtl");

    for x in [0.0, 2.5, 7.0, 10.0] {
        let left = ltr.x_to_pixel(x).expect("ltr x");
        let right = rtl.x_to_pixel(x).expect("rtl x");
        let centre = area().left + area().width / 2.0;
        assert_relative_eq!(left - centre, centre - right, epsilon = 1e-9);
    }
    assert_eq!(rtl.y_to_pixel(3.0).expect("rtl y"), ltr.y_to_pixel(3.0).expect("ltr y"));
}

#[test]
fn pixel_to_data_inverts_data_to_pixel() {
    let scale = unit_scale();
    for direction in [PlotDirection::LeftToRight, PlotDirection::RightToLeft] {
        let transform = CoordinateTransform::new(&scale, area(), direction).expect("transform");
        let original = Coordinate::new(3.25, 8.5);
        let (px, py) = transform.data_to_pixel(original).expect("to pixel");
        let back = transform.pixel_to_data(px, py).expect("to data");
        assert_relative_eq!(back.x, original.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, original.y, epsilon = 1e-9);
    }
}

#[test]
fn invalid_area_is_rejected() {
    let result = CoordinateTransform::new(
        &unit_scale(),
        PlotAreaRect::new(0.0, 0.0, 0.0, 100.0),
        PlotDirection::LeftToRight,
    );
    assert!(matches!(result, Err(ViewError::InvalidPlotArea { .. })));
}

#[test]
fn non_finite_inputs_are_rejected() {
    let transform = CoordinateTransform::new(&unit_scale(), area(), PlotDirection::LeftToRight)
        .expect("transform");
    assert!(transform.x_to_pixel(f64::NAN).is_err());
    assert!(transform.pixel_to_data(f64::INFINITY, 10.0).is_err());
}

#[test]
fn clamp_pixel_keeps_pointer_inside_area() {
    let transform = CoordinateTransform::new(&unit_scale(), area(), PlotDirection::LeftToRight)
        .expect("transform");
    assert_eq!(transform.clamp_pixel(0.0, 1000.0), (50.0, 520.0));
    assert!(transform.contains_pixel(60.0, 30.0));
    assert!(!transform.contains_pixel(10.0, 30.0));
}
