use std::sync::Arc;

use proptest::prelude::*;
use specview::api::{ViewEngine, ViewEngineConfig};
use specview::core::{
    Coordinate, CoordinateTransform, PlotAreaRect, PlotDirection, SeriesData, SeriesWindow,
    check_compatible, generate,
};

fn series_from(x0: f64, steps: &[f64], ys: &[f64]) -> Vec<Coordinate> {
    let mut x = x0;
    steps
        .iter()
        .zip(ys)
        .map(|(dx, y)| {
            let point = Coordinate::new(x, *y);
            x += dx;
            point
        })
        .collect()
}

fn is_nice(step: f64) -> bool {
    let exponent = step.log10().floor();
    let mantissa = step / 10f64.powf(exponent);
    [1.0, 2.0, 5.0, 10.0]
        .iter()
        .any(|unit| (mantissa - unit).abs() <= 1e-6 * unit)
}

proptest! {
    #[test]
    fn generated_scale_contains_data_and_uses_nice_steps(
        x0 in -1_000.0f64..1_000.0,
        steps in prop::collection::vec(0.001f64..50.0, 1..64),
        ys in prop::collection::vec(-1_000.0f64..1_000.0, 64),
        x_ticks in 1usize..20,
        y_ticks in 1usize..20
    ) {
        let coords = series_from(x0, &steps, &ys);
        let scale = generate(&[SeriesWindow::full(&coords)], x_ticks, y_ticks).expect("scale");

        prop_assert!(scale.min_x_on_scale() <= scale.min_x());
        prop_assert!(scale.min_x() <= scale.max_x());
        prop_assert!(scale.max_x() <= scale.max_x_on_scale());
        prop_assert!(scale.min_y_on_scale() <= scale.min_y());
        prop_assert!(scale.min_y() <= scale.max_y());
        prop_assert!(scale.max_y() <= scale.max_y_on_scale());
        prop_assert!(is_nice(scale.x_step()), "x step {}", scale.x_step());
        prop_assert!(is_nice(scale.y_step()), "y step {}", scale.y_step());
        prop_assert_eq!(scale.window(0), Some((0, coords.len() - 1)));
    }

    #[test]
    fn pixel_round_trip_recovers_data(
        min in -10_000.0f64..10_000.0,
        span in 0.01f64..10_000.0,
        x_factor in 0.0f64..=1.0,
        y_factor in 0.0f64..=1.0,
        left in -500.0f64..500.0,
        top in -500.0f64..500.0,
        width in 1.0f64..4_000.0,
        height in 1.0f64..4_000.0,
        reversed in any::<bool>()
    ) {
        let coords = vec![Coordinate::new(min, min), Coordinate::new(min + span, min + span)];
        let scale = generate(&[SeriesWindow::full(&coords)], 10, 10).expect("scale");
        let direction = if reversed {
            PlotDirection::RightToLeft
        } else {
            PlotDirection::LeftToRight
        };
        let area = PlotAreaRect::new(left, top, width, height);
        let transform = CoordinateTransform::new(&scale, area, direction).expect("transform");

        let x_span = scale.max_x_on_scale() - scale.min_x_on_scale();
        let y_span = scale.max_y_on_scale() - scale.min_y_on_scale();
        let x = scale.min_x_on_scale() + x_factor * x_span;
        let y = scale.min_y_on_scale() + y_factor * y_span;
        let (px, py) = transform.data_to_pixel(Coordinate::new(x, y)).expect("to pixel");
        let back = transform.pixel_to_data(px, py).expect("to data");

        let magnitude = 1.0 + scale.min_x_on_scale().abs().max(scale.max_x_on_scale().abs());
        prop_assert!((back.x - x).abs() <= 1e-9 * magnitude);
        prop_assert!((back.y - y).abs() <= 1e-9 * magnitude);
    }

    #[test]
    fn compatibility_is_symmetric(
        first in prop::sample::select(vec!["PPM", "HZ", "1/CM"]),
        second in prop::sample::select(vec!["PPM", "HZ", "1/CM"]),
        first_y in prop::sample::select(vec!["ABSORBANCE", "TRANSMITTANCE"]),
        second_y in prop::sample::select(vec!["ABSORBANCE", "TRANSMITTANCE"])
    ) {
        let points = vec![Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)];
        let a = SeriesData::from_ordered(points.clone(), first, first_y).expect("a");
        let b = SeriesData::from_ordered(points, second, second_y).expect("b");

        prop_assert_eq!(
            check_compatible(&[&a, &b]).is_ok(),
            check_compatible(&[&b, &a]).is_ok()
        );
    }

    #[test]
    fn rejected_zoom_leaves_history_untouched(
        start in 0.0f64..18.0,
        width in 0.0f64..1.9,
        zoom_first in any::<bool>()
    ) {
        let coords = (0..20).map(|i| Coordinate::new(f64::from(i), f64::from(i % 7))).collect();
        let series = Arc::new(SeriesData::new(coords, true, "1/CM", "ABSORBANCE").expect("series"));
        let mut engine = ViewEngine::open_view(vec![series], ViewEngineConfig::default())
            .expect("open view");
        if zoom_first {
            prop_assert!(engine.zoom_to_data_range(1.0, 0.0, 15.0, 0.0).is_applied());
            engine.step_back();
        }
        let before = engine.zoom_stack().clone();

        let outcome = engine.zoom_to_data_range(start, 0.0, start + width, 0.0);

        prop_assert!(!outcome.is_applied());
        prop_assert_eq!(engine.zoom_stack(), &before);
    }
}
