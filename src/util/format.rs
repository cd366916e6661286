//! Display formatting for the stats panel and the export.
//!
//! Numbers render with at most two fraction digits, trailing zeros trimmed
//! and thousands grouped with commas, so `6.0` shows as "6" and `46.5042`
//! as "46.5".

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // A rounded -0.004 would otherwise render as "-0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Formats with at most two fraction digits and comma thousands grouping.
pub fn format_number(value: f64) -> String {
    let rounded = round2(value);
    let text = rounded.abs().to_string();
    let (int_digits, fraction) = match text.split_once('.') {
        Some((int_digits, fraction)) => (int_digits, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_digits.len() / 3);
    for (i, digit) in int_digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut result: String = grouped.chars().rev().collect();
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    if rounded < 0.0 {
        result.insert(0, '-');
    }
    result
}

/// Dollar-prefixed [`format_number`].
pub fn format_money(value: f64) -> String {
    format!("${}", format_number(value))
}

/// Percent-suffixed [`format_number`].
pub fn format_pct(value: f64) -> String {
    format!("{}%", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_to_two_places() {
        assert_eq!(round2(64.6430358), 64.64);
        assert_eq!(round2(7.7507), 7.75);
        assert_eq!(round2(2.426), 2.43);
        assert_eq!(round2(-1.239), -1.24);
        assert_eq!(round2(10.0), 10.0);
    }

    #[test]
    fn test_round2_normalizes_signed_zero() {
        assert_eq!(round2(-0.001).to_string(), "0");
    }

    #[test]
    fn test_format_trims_trailing_zeros() {
        assert_eq!(format_number(6.0), "6");
        assert_eq!(format_number(10.303030), "10.3");
        assert_eq!(format_number(46.5042), "46.5");
        assert_eq!(format_number(3.4), "3.4");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_keeps_two_significant_fraction_digits() {
        assert_eq!(format_number(11.99), "11.99");
        assert_eq!(format_number(64.6430358), "64.64");
        assert_eq!(format_number(2.42), "2.42");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_number(7750.0), "7,750");
        assert_eq!(format_number(999.99), "999.99");
        assert_eq!(format_number(1234567.891), "1,234,567.89");
        assert_eq!(format_number(-7750.0), "-7,750");
    }

    #[test]
    fn test_money_and_pct_affixes() {
        assert_eq!(format_money(11.99), "$11.99");
        assert_eq!(format_money(-2.42), "$-2.42");
        assert_eq!(format_pct(64.6430358), "64.64%");
        assert_eq!(format_pct(60.0), "60%");
    }
}
