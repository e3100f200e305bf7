/// Parses the lexeme of a numeric literal into its value.
///
/// The scanner only hands this function lexemes of the form `digits` or
/// `digits.digits`, both of which are valid `f64` syntax.
///
/// ## Parameters
/// - `lexeme`: The matched source text.
///
/// ## Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the text is not a decimal number.
///
/// ## Example
/// ```
/// use lox_frontend::util::num::parse_number_literal;
///
/// assert_eq!(parse_number_literal("12.5"), Some(12.5));
/// assert_eq!(parse_number_literal("007"), Some(7.0));
/// assert_eq!(parse_number_literal("1.2.3"), None);
/// ```
#[must_use]
pub fn parse_number_literal(lexeme: &str) -> Option<f64> {
    lexeme.parse().ok()
}

/// Formats a number the way token listings and AST dumps show it.
///
/// Integral values keep one fractional digit so that `1` prints as `1.0`;
/// everything else uses the shortest representation that round-trips.
///
/// ## Parameters
/// - `value`: The number to format.
///
/// ## Returns
/// The formatted number.
///
/// ## Example
/// ```
/// use lox_frontend::util::num::format_number;
///
/// assert_eq!(format_number(42.0), "42.0");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(-3.0), "-3.0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_integral_values_keep_fraction_digit() {
        assert_eq!(format_number(1e21), "1000000000000000000000.0");
    }

    #[test]
    fn leading_zeros_are_accepted() {
        assert_eq!(parse_number_literal("000.50"), Some(0.5));
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "inf");
    }
}
