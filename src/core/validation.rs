//! Input predicates applied before values enter the goal model.

/// Largest amount accepted for a target or a contribution.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Longest goal name accepted, counted in characters after trimming.
pub const MAX_GOAL_NAME_LEN: usize = 50;

/// Returns true when `raw` starts with a positive amount no larger than [`MAX_AMOUNT`].
pub fn validate_amount(raw: &str) -> bool {
    parse_amount(raw).is_some()
}

/// Reads the amount typed in `raw`, or `None` when it is not a valid amount.
///
/// Only the leading number counts: `"100 USD"` is 100 and `"1,000"` is 1.
pub fn parse_amount(raw: &str) -> Option<f64> {
    parse_leading_number(raw).filter(|value| is_valid_amount(*value))
}

/// Parses the longest decimal prefix of `raw` after leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, or `Infinity`. Anything after the number is ignored.
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Numeric half of [`validate_amount`].
pub fn is_valid_amount(value: f64) -> bool {
    // NaN fails both comparisons
    value > 0.0 && value <= MAX_AMOUNT
}

/// Returns true when the trimmed name has between 1 and [`MAX_GOAL_NAME_LEN`] characters.
pub fn validate_goal_name(raw: &str) -> bool {
    let len = raw.trim().chars().count();
    len > 0 && len <= MAX_GOAL_NAME_LEN
}
