//! Tick-step rounding and tick enumeration for numeric axes.

/// Mantissas a rounded step may take, in ascending order.
pub const NICE_STEP_UNITS: [f64; 3] = [1.0, 2.0, 5.0];

/// Relative slack absorbing float noise when comparing against grid values.
const GRID_TOLERANCE: f64 = 1e-9;

/// Bounds a rounded step is kept within; past them `10^k` loses its exponent range.
pub const MIN_NICE_STEP: f64 = 1e-300;
pub const MAX_NICE_STEP: f64 = 1e300;

/// Upper bound on enumerated ticks; keeps a corrupt scale from allocating unbounded memory.
const MAX_TICKS: usize = 10_000;

/// Step rounded to `{1, 2, 5} x 10^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NiceStep {
    pub step: f64,
    pub exponent: i32,
}

/// Rounds `raw_step` up to the smallest `{1, 2, 5} x 10^k` that is not below it.
///
/// `raw_step` is clamped to `[MIN_NICE_STEP, MAX_NICE_STEP]` first; zero, NaN
/// and values that underflowed to subnormals take the minimum.
#[must_use]
pub fn nice_step(raw_step: f64) -> NiceStep {
    let raw_step = if raw_step.is_nan() || raw_step < MIN_NICE_STEP {
        MIN_NICE_STEP
    } else {
        raw_step.min(MAX_NICE_STEP)
    };

    let exponent = raw_step.log10().floor() as i32;
    let mantissa = raw_step / pow10(exponent);
    for unit in NICE_STEP_UNITS {
        if mantissa <= unit * (1.0 + GRID_TOLERANCE) {
            return NiceStep {
                step: scaled(unit, exponent),
                exponent,
            };
        }
    }

    NiceStep {
        step: pow10(exponent + 1),
        exponent: exponent + 1,
    }
}

/// Largest multiple of `step` that is `<= value`.
#[must_use]
pub fn floor_to_step(value: f64, step: f64) -> f64 {
    let ratio = value / step;
    let nearest = ratio.round();
    let snapped = if (ratio - nearest).abs() <= GRID_TOLERANCE {
        nearest
    } else {
        ratio.floor()
    };
    (snapped * step).min(value)
}

/// Smallest multiple of `step` that is `>= value`.
#[must_use]
pub fn ceil_to_step(value: f64, step: f64) -> f64 {
    let ratio = value / step;
    let nearest = ratio.round();
    let snapped = if (ratio - nearest).abs() <= GRID_TOLERANCE {
        nearest
    } else {
        ratio.ceil()
    };
    (snapped * step).max(value)
}

/// Grid values `k * step` inside `[min, max]`.
#[must_use]
pub fn tick_values(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || !step.is_finite() || step <= 0.0 || min > max {
        return Vec::new();
    }

    let first = (min / step - GRID_TOLERANCE).ceil();
    let last = (max / step + GRID_TOLERANCE).floor();
    if last < first {
        return Vec::new();
    }

    let count = ((last - first) as usize + 1).min(MAX_TICKS);
    (0..count)
        .map(|offset| (first + offset as f64) * step)
        .collect()
}

/// Formats a tick value with as many fractional digits as `hash_num` calls for.
///
/// `hash_num <= 0` renders `|hash_num|` fractional digits; positive values
/// render integers.
#[must_use]
pub fn format_tick_label(value: f64, hash_num: i32) -> String {
    let decimals = if hash_num < 0 {
        hash_num.unsigned_abs() as usize
    } else {
        0
    };
    let label = format!("{value:.decimals$}");
    if label.starts_with('-') && label[1..].chars().all(|ch| ch == '0' || ch == '.') {
        label[1..].to_owned()
    } else {
        label
    }
}

fn pow10(exponent: i32) -> f64 {
    if exponent >= 0 {
        10f64.powi(exponent)
    } else {
        1.0 / 10f64.powi(-exponent)
    }
}

fn scaled(unit: f64, exponent: i32) -> f64 {
    // Dividing by an exact power of ten keeps 0.1, 0.2, 0.05 ... closest to their decimal form.
    if exponent >= 0 {
        unit * 10f64.powi(exponent)
    } else {
        unit / 10f64.powi(-exponent)
    }
}
