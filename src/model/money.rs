/// Formats an amount as dollars with two decimals, e.g. `$24.99`.
///
/// Rounds half-up on the amount's shortest decimal form, so `1.005` shows as `$1.01`
/// even though the nearest `f64` is slightly below it. No locale handling: the symbol
/// is always a leading `$` and the separator a `.`.
pub fn format_money(amount: f64) -> String {
    match round_to_cents(amount) {
        Some((negative, cents)) => {
            let sign = if negative { "-" } else { "" };
            format!("${}{}.{:02}", sign, cents / 100, cents % 100)
        }
        None => format!("${:.2}", amount),
    }
}

/// Sign and magnitude in cents. `None` for non-finite or absurdly large amounts.
fn round_to_cents(amount: f64) -> Option<(bool, u128)> {
    if !amount.is_finite() {
        return None;
    }
    // `Display` never uses exponent notation and gives the shortest round-trip digits
    let decimal = amount.abs().to_string();
    let (whole, fraction) = decimal.split_once('.').unwrap_or((decimal.as_str(), ""));

    let mut digits = fraction.bytes().map(|b| u128::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);

    let cents = whole
        .parse::<u128>()
        .ok()?
        .checked_mul(100)?
        .checked_add(tenths * 10 + hundredths + u128::from(round_up))?;
    Some((amount.is_sign_negative(), cents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(24.99), "$24.99");
        assert_eq!(format_money(5.5), "$5.50");
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234.567), "$1234.57");
        assert_eq!(format_money(-3.0), "$-3.00");
    }

    #[test]
    fn test_half_cents_round_up() {
        assert_eq!(format_money(0.125), "$0.13");
        assert_eq!(format_money(1.005), "$1.01");
        assert_eq!(format_money(2.675), "$2.68");
        assert_eq!(format_money(0.995), "$1.00");
        assert_eq!(format_money(2.674), "$2.67");
        assert_eq!(format_money(-0.125), "$-0.13");
    }

    #[test]
    fn test_cart_sums() {
        // 5.50 * 2 + 8.99 is 19.990000000000002 in f64
        assert_eq!(format_money(5.50 * 2.0 + 8.99), "$19.99");
        assert_eq!(format_money(0.1 + 0.2), "$0.30");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_money(f64::INFINITY), "$inf");
        assert_eq!(format_money(f64::NAN), "$NaN");
    }
}
