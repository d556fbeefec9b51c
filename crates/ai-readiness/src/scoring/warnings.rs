use serde::{Deserialize, Serialize};

/// Recoverable anomalies recorded while scoring.
///
/// None of these abort a calculation. The engine substitutes the documented
/// neutral value and keeps going so the caller always receives a number plus
/// this audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalcWarning {
    #[error("{field} value {value} outside [{min}, {max}], clamped")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} has a zero denominator, substituted neutral {substituted}")]
    DivisionGuard { field: String, substituted: f64 },
    #[error("{field} is missing or not finite, treated as zero contribution")]
    MissingField { field: String },
}

/// Clamp `value` into `[min, max]`, recording a warning when it was outside.
/// Non-finite input is treated as a missing field and contributes `min`.
pub(crate) fn clamped(
    field: &str,
    value: f64,
    min: f64,
    max: f64,
    warnings: &mut Vec<CalcWarning>,
) -> f64 {
    if !value.is_finite() {
        warnings.push(CalcWarning::MissingField {
            field: field.to_string(),
        });
        return min;
    }
    if value < min || value > max {
        warnings.push(CalcWarning::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
        return value.clamp(min, max);
    }
    value
}

/// Divide `numerator / denominator`, substituting `fallback` when the
/// denominator is zero, negative where a positive count is expected, or not
/// finite.
pub(crate) fn guarded_ratio(
    field: &str,
    numerator: f64,
    denominator: f64,
    fallback: f64,
    warnings: &mut Vec<CalcWarning>,
) -> f64 {
    if !numerator.is_finite() || !denominator.is_finite() {
        warnings.push(CalcWarning::MissingField {
            field: field.to_string(),
        });
        return fallback;
    }
    if denominator <= 0.0 {
        warnings.push(CalcWarning::DivisionGuard {
            field: field.to_string(),
            substituted: fallback,
        });
        return fallback;
    }
    numerator / denominator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_passes_in_range_values_silently() {
        let mut warnings = Vec::new();
        assert_eq!(clamped("prompting_score", 0.75, 0.0, 1.0, &mut warnings), 0.75);
        assert!(warnings.is_empty());
    }

    #[test]
    fn clamp_records_out_of_range() {
        let mut warnings = Vec::new();
        assert_eq!(clamped("tools_score", 1.4, 0.0, 1.0, &mut warnings), 1.0);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], CalcWarning::OutOfRange { .. }));
    }

    #[test]
    fn clamp_treats_nan_as_missing() {
        let mut warnings = Vec::new();
        assert_eq!(clamped("datalit_score", f64::NAN, 0.0, 1.0, &mut warnings), 0.0);
        assert!(matches!(warnings[0], CalcWarning::MissingField { .. }));
    }

    #[test]
    fn ratio_guards_zero_denominator() {
        let mut warnings = Vec::new();
        let value = guarded_ratio("error_catch_rate", 15.0, 0.0, 0.0, &mut warnings);
        assert_eq!(value, 0.0);
        assert!(matches!(warnings[0], CalcWarning::DivisionGuard { .. }));
    }

    #[test]
    fn ratio_neutral_fallback_for_multipliers() {
        let mut warnings = Vec::new();
        let value = guarded_ratio("growth_momentum", 500.0, 0.0, 1.0, &mut warnings);
        assert_eq!(value, 1.0);
    }
}
