//! # Dimension Formatting
//!
//! Converts decimal inches to the mixed-number fractional form carpenters
//! read off a tape measure, rounded to the nearest 1/16".

/// Format decimal inches as a fractional-inch string, e.g. `12.5` ->
/// `12 1/2"`.
///
/// Rounds to the nearest sixteenth and reduces the fraction, so `5.25`
/// comes out as `5 1/4"`, not `5 4/16"`. A fractional part that rounds all
/// the way up carries into the whole inch. Zero formats as `0"` - callers
/// that want to show nothing for "no value" must decide that upstream,
/// since zero inches is a legitimate dimension.
///
/// # Example
///
/// ```rust
/// use stair_core::format::format_dimension;
///
/// assert_eq!(format_dimension(12.5), "12 1/2\"");
/// assert_eq!(format_dimension(0.0625), "1/16\"");
/// assert_eq!(format_dimension(0.0), "0\"");
/// ```
pub fn format_dimension(inches: f64) -> String {
    let whole = inches.floor() as i64;
    let sixteenths = ((inches - whole as f64) * 16.0).round() as i64;

    if sixteenths == 0 {
        return format!("{}\"", whole);
    }
    if sixteenths == 16 {
        // Rounding carried the fraction into the next whole inch
        return format!("{}\"", whole + 1);
    }

    let divisor = gcd(sixteenths, 16);
    let numerator = sixteenths / divisor;
    let denominator = 16 / divisor;

    if whole > 0 {
        format!("{} {}/{}\"", whole, numerator, denominator)
    } else {
        format!("{}/{}\"", numerator, denominator)
    }
}

/// Format as fractional inches followed by the decimal value, e.g.
/// `7 11/16" (7.714")`. Used on cut lists where the fraction is what gets
/// marked but the decimal is what gets checked.
pub fn format_dimension_with_decimal(inches: f64) -> String {
    format!("{} ({:.3}\")", format_dimension(inches), inches)
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_dimension(12.0), "12\"");
        assert_eq!(format_dimension(1.0), "1\"");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_dimension(0.0), "0\"");
    }

    #[test]
    fn test_halves() {
        assert_eq!(format_dimension(12.5), "12 1/2\"");
    }

    #[test]
    fn test_quarters() {
        assert_eq!(format_dimension(5.25), "5 1/4\"");
        assert_eq!(format_dimension(5.75), "5 3/4\"");
    }

    #[test]
    fn test_sixteenths() {
        assert_eq!(format_dimension(5.0625), "5 1/16\"");
        assert_eq!(format_dimension(0.0625), "1/16\"");
    }

    #[test]
    fn test_eighths() {
        assert_eq!(format_dimension(11.125), "11 1/8\"");
        assert_eq!(format_dimension(0.375), "3/8\"");
    }

    #[test]
    fn test_rounding_to_nearest_sixteenth() {
        // 7.714 is between 7 11/16 (7.6875) and 7 3/4 (7.75); nearer 11/16
        assert_eq!(format_dimension(7.714), "7 11/16\"");
        assert_eq!(format_dimension(10.769), "10 3/4\"");
    }

    #[test]
    fn test_rounding_carry() {
        // 15.97 rounds to 16/16, which carries to the next inch
        assert_eq!(format_dimension(15.97), "16\"");
    }

    #[test]
    fn test_fractional_only() {
        // No whole-number prefix below one inch
        assert_eq!(format_dimension(0.5), "1/2\"");
    }

    #[test]
    fn test_with_decimal() {
        assert_eq!(format_dimension_with_decimal(12.5), "12 1/2\" (12.500\")");
    }
}
