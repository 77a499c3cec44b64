//! Free-form numeric input normalization.

/// Parse a numeric entry exactly as typed into a capture form.
///
/// Accepts either decimal separator convention (`"70.5"` or `"70,5"`) and
/// surrounding whitespace. Returns `None` for empty or non-numeric input —
/// a missing measurement is not an error. Range checks (e.g. a zero height
/// that would be a divisor) happen at the point of use, not here.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}
