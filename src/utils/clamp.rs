//! Range clamping for layout values

/// Constrain `value` to the closed range `[min, max]`.
///
/// The upper bound is applied last, so an inverted range (`max < min`)
/// yields `max`. Panels taller than their container rely on this: their
/// `max` is negative and the result must follow it.
///
/// `f64::clamp` asserts `min <= max` and cannot be used here.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
