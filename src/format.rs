//! Currency display formatting

/// Format an amount as whole currency units with thousands grouping
///
/// Rounds half away from zero: `1234.5` renders as `$1,235`, `-987654.4`
/// as `-$987,654`. Non-finite amounts render as `n/a`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }

    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1_000.0), "$1,000");
        assert_eq!(format_currency(2_454_919.0), "$2,454,919");
        assert_eq!(format_currency(123_456_789.0), "$123,456,789");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_currency(1_234.5), "$1,235");
        assert_eq!(format_currency(2_528_566.57), "$2,528,567");
        assert_eq!(format_currency(-987_654.4), "-$987,654");
        assert_eq!(format_currency(-0.4), "$0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_currency(f64::INFINITY), "n/a");
        assert_eq!(format_currency(f64::NAN), "n/a");
    }
}
