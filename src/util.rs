// Small numeric helpers shared by the measurer and the components.

/// Rounds halves towards positive infinity, the way the browser's `Math.round` does.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Lenient float parse matching browser `parseFloat`: leading whitespace is
/// skipped and the longest numeric prefix wins ("12.5cm" -> 12.5).
/// Returns `None` when no digits are found ("5." and ".5" both parse).
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            Some(f64::NEG_INFINITY)
        } else {
            Some(f64::INFINITY)
        };
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }
    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_leading_float("5"), Some(5.0));
        assert_eq!(parse_leading_float("  2.54"), Some(2.54));
        assert_eq!(parse_leading_float("-3"), Some(-3.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("5."), Some(5.0));
        assert_eq!(parse_leading_float("1e2"), Some(100.0));
    }

    #[test]
    fn takes_numeric_prefix() {
        assert_eq!(parse_leading_float("12.5cm"), Some(12.5));
        assert_eq!(parse_leading_float("3e"), Some(3.0));
        assert_eq!(parse_leading_float("4.2.1"), Some(4.2));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("   "), None);
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("."), None);
        assert_eq!(parse_leading_float("NaN"), None);
    }

    #[test]
    fn parses_infinity() {
        assert_eq!(parse_leading_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_float("-Infinityx"), Some(f64::NEG_INFINITY));
    }
}
