use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::Value;

/// Converts a decimal amount to `f64`; unrepresentable amounts become `NaN`.
#[must_use]
pub fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Numeric coercion applied to raw item values.
///
/// Numbers pass through, numeric strings are parsed (blank strings count as
/// zero), booleans map to 1/0 and `null` to 0. Anything else, including a
/// missing field, yields `NaN`.
#[must_use]
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => coerce_numeric_str(text),
        Some(Value::Array(_) | Value::Object(_)) => f64::NAN,
    }
}

fn coerce_numeric_str(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // `f64::from_str` also accepts "inf"/"nan" spellings that are not numbers here.
    if trimmed
        .chars()
        .any(|ch| ch.is_ascii_alphabetic() && !matches!(ch, 'e' | 'E'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Rounds halves toward positive infinity.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Shortest display form of a value: integral values print without a
/// fractional part, `NaN` prints as `NaN`.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_like_a_numeric_cast() {
        assert_eq!(coerce_number(Some(&json!(12.5))), 12.5);
        assert_eq!(coerce_number(Some(&json!(" 42 "))), 42.0);
        assert_eq!(coerce_number(Some(&json!(""))), 0.0);
        assert_eq!(coerce_number(Some(&json!(true))), 1.0);
        assert_eq!(coerce_number(Some(&Value::Null)), 0.0);
        assert!(coerce_number(Some(&json!("12abc"))).is_nan());
        assert!(coerce_number(Some(&json!("nan"))).is_nan());
        assert!(coerce_number(Some(&json!([1]))).is_nan());
        assert!(coerce_number(None).is_nan());
        assert_eq!(coerce_number(Some(&json!("1e3"))), 1000.0);
    }

    #[test]
    fn rounds_half_toward_positive_infinity() {
        assert_eq!(round_half_up(4.5), 5.0);
        assert_eq!(round_half_up(4.8), 5.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn formats_integral_values_without_fraction() {
        assert_eq!(format_value(50.0), "50");
        assert_eq!(format_value(12.25), "12.25");
        assert_eq!(format_value(f64::NAN), "NaN");
    }
}
