//! Numeric readings of display magnitudes like `"100M+"`.
//!
//! Two readings exist on purpose. [`digits_only`] backs the `userCount` sort
//! key and drops the unit suffix, so `"2M+"` reads as 2 and `"100K+"` as 100.
//! That ordering is approximate and must not be used where real magnitude
//! matters. [`expand_magnitude`] backs `userMagnitude` and scales by the
//! `K`/`M`/`B` suffix.

/// Strip every non-digit and parse what remains. No digits reads as 0;
/// overflow saturates.
pub fn digits_only(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Parse the leading decimal and scale it by a `K`, `M` or `B` suffix.
/// Anything unparseable reads as 0.
pub fn expand_magnitude(raw: &str) -> u64 {
    let trimmed = raw.trim();
    let number_len = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(trimmed.len());

    let number: String = trimmed[..number_len].chars().filter(|c| *c != ',').collect();
    let Ok(value) = number.parse::<f64>() else {
        return 0;
    };

    let multiplier = match trimmed[number_len..].trim_start().chars().next() {
        Some('k') | Some('K') => 1_000.0,
        Some('m') | Some('M') => 1_000_000.0,
        Some('b') | Some('B') => 1_000_000_000.0,
        _ => 1.0,
    };

    let scaled = (value * multiplier).round();
    if scaled >= u64::MAX as f64 {
        u64::MAX
    } else {
        scaled as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only_drops_suffix() {
        assert_eq!(digits_only("100M+"), 100);
        assert_eq!(digits_only("100+"), 100);
        assert_eq!(digits_only("2M+"), 2);
        assert_eq!(digits_only("1.5M+"), 15);
    }

    #[test]
    fn test_digits_only_defaults_to_zero() {
        assert_eq!(digits_only(""), 0);
        assert_eq!(digits_only("Unknown"), 0);
    }

    #[test]
    fn test_digits_only_saturates() {
        assert_eq!(digits_only("999999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_expand_magnitude_scales_suffix() {
        assert_eq!(expand_magnitude("100M+"), 100_000_000);
        assert_eq!(expand_magnitude("100K+"), 100_000);
        assert_eq!(expand_magnitude("1.5M+"), 1_500_000);
        assert_eq!(expand_magnitude("2 B"), 2_000_000_000);
        assert_eq!(expand_magnitude("1,200"), 1_200);
    }

    #[test]
    fn test_expand_magnitude_unparseable() {
        assert_eq!(expand_magnitude(""), 0);
        assert_eq!(expand_magnitude("lots"), 0);
        assert_eq!(expand_magnitude("M+"), 0);
    }
}
