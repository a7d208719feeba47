/// Coerces a non-finite cost value (NaN, ±∞) to `0.0`.
///
/// The backend occasionally reports non-finite costs; rendering layers must
/// never see them.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Formats a cost as an edge/total label, coercing non-finite values to `0`.
pub fn format_cost(value: f64) -> String {
    finite_or_zero(value).to_string()
}

/// Formats a top-level total for display, falling back to a placeholder when
/// the value is non-finite.
pub fn display_cost_or_placeholder(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "n/a".to_string()
    }
}
