//! Price display helpers
//!
//! Order totals arrive as JSON numbers (or numeric strings) and are shown in
//! the mail with `,` as the thousands separator. The fractional part is kept
//! exactly as the client sent it. Quote totals are computed as [`Decimal`]
//! and go through the same grouping.

use rust_decimal::Decimal;

/// Format a price with `,` grouping: `5000` -> `5,000`, `1234567.5` -> `1,234,567.5`
pub fn format_grouped(value: Decimal) -> String {
    group_literal(&value.to_string())
}

/// Group a numeric literal as written.
///
/// Plain decimal literals (`-?digits[.digits]`) get `,` separators in the
/// integer part; anything else (`1e30`) is returned unchanged.
pub fn group_literal(raw: &str) -> String {
    if !is_plain_decimal(raw) {
        return raw.to_string();
    }
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (digits, None),
    };

    let mut out = String::with_capacity(raw.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `-?digits[.digits]`
pub fn is_plain_decimal(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (digits, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(int_part) && frac_part.is_none_or(all_digits)
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn fmt(s: &str) -> String {
        format_grouped(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn test_format_grouped_integers() {
        assert_eq!(fmt("0"), "0");
        assert_eq!(fmt("999"), "999");
        assert_eq!(fmt("1000"), "1,000");
        assert_eq!(fmt("5000"), "5,000");
        assert_eq!(fmt("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_grouped_keeps_fraction() {
        assert_eq!(fmt("1234567.5"), "1,234,567.5");
        assert_eq!(fmt("1410.00"), "1,410.00");
        assert_eq!(fmt("0.25"), "0.25");
    }

    #[test]
    fn test_group_literal_beyond_decimal_range() {
        assert_eq!(
            group_literal("99999999999999999999999999999999"),
            "99,999,999,999,999,999,999,999,999,999"
        );
        assert_eq!(group_literal("5000.0"), "5,000.0");
        assert_eq!(group_literal("1e30"), "1e30");
        assert_eq!(group_literal("-2.5e-3"), "-2.5e-3");
    }

    #[test]
    fn test_is_plain_decimal() {
        for ok in ["0", "1410", "-15", "1410.00", "0.5"] {
            assert!(is_plain_decimal(ok), "{}", ok);
        }
        for bad in ["", "-", ".5", "5.", "1e3", "1,000", "lots", " 1"] {
            assert!(!is_plain_decimal(bad), "{}", bad);
        }
    }

    #[test]
    fn test_format_grouped_negative() {
        assert_eq!(fmt("-1500"), "-1,500");
        assert_eq!(fmt("-999"), "-999");
        assert_eq!(fmt("-123456.7"), "-123,456.7");
    }
}
