use super::ContentValue;

/// Loose numeric coercion used for SVCB priorities and the `port` parameter.
///
/// A token that parses as a number becomes `U16` when it is a whole value in
/// `0..=65535` and `Float` otherwise. Anything else stays the original text.
pub fn coerce_number(token: &str) -> ContentValue {
    // non-finite values have no JSON number form
    let number = match token.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => return ContentValue::text(token),
    };

    if number.fract() == 0.0 && (0.0..=u16::MAX as f64).contains(&number) {
        ContentValue::U16(number as u16)
    } else {
        ContentValue::Float(number)
    }
}

/// Strict integer parse; `None` when the token is not an integer.
pub fn parse_int(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}

/// Best-effort integer parse; zero when the token is not an integer.
pub fn parse_int_or_zero(token: &str) -> i64 {
    parse_int(token).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_integer_is_u16() {
        assert_eq!(coerce_number("0"), ContentValue::U16(0));
        assert_eq!(coerce_number("1234"), ContentValue::U16(1234));
        assert_eq!(coerce_number("65535"), ContentValue::U16(65535));
    }

    #[test]
    fn test_out_of_range_is_float() {
        assert_eq!(coerce_number("65536"), ContentValue::Float(65536.0));
        assert_eq!(coerce_number("-1"), ContentValue::Float(-1.0));
        assert_eq!(coerce_number("1234.5"), ContentValue::Float(1234.5));
        assert_eq!(
            coerce_number("12341234125"),
            ContentValue::Float(12341234125.0)
        );
    }

    #[test]
    fn test_non_numeric_stays_text() {
        assert_eq!(coerce_number("abcde"), ContentValue::text("abcde"));
        assert_eq!(coerce_number(""), ContentValue::text(""));
        assert_eq!(coerce_number("x1"), ContentValue::text("x1"));
    }

    #[test]
    fn test_integer_helpers() {
        assert_eq!(parse_int("10"), Some(10));
        assert_eq!(parse_int("ten"), None);
        assert_eq!(parse_int_or_zero("ten"), 0);
        assert_eq!(parse_int_or_zero("-3"), -3);
    }
}
