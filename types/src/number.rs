//! Numeric formatting and display parsing.
//!
//! Results are rendered with `f64`'s `Display`, which produces the shortest
//! decimal string that round-trips to the same value. Non-finite sentinels
//! (`inf`, `-inf`, `NaN`) render and parse through the same path, so they
//! propagate into later operations as ordinary numbers.

/// Format a computed result for the display.
#[must_use]
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Parse the current display string as an operand.
///
/// The display is normally a valid numeric literal, but backspace can leave
/// degenerate fragments (a bare `"-"` after erasing a negative result).
/// Those parse to NaN rather than erroring, and the NaN then flows through
/// arithmetic like any other value.
#[must_use]
pub fn parse_display(display: &str) -> f64 {
    display.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_round_trip_formatting() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn non_finite_values_round_trip() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert!(parse_display("inf").is_infinite());
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert!(parse_display(&format_number(f64::NAN)).is_nan());
    }

    #[test]
    fn intermediate_literals_parse() {
        assert_eq!(parse_display("0."), 0.0);
        assert_eq!(parse_display("12.5"), 12.5);
    }

    #[test]
    fn degenerate_fragments_parse_to_nan() {
        assert!(parse_display("-").is_nan());
        assert!(parse_display("").is_nan());
    }
}
