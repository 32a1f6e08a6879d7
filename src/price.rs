use std::fmt;
use std::iter::Sum;

/// A non-negative amount of money held in whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// Reads a display price such as `"$25.99"`, `"25.99"` or `"12.5 USD"`.
    ///
    /// The first `$` is dropped and the longest leading decimal number,
    /// including an exponent such as `1e3`, is used, rounded to the nearest
    /// cent. Text without digits, negative and non-finite amounts yield `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.replacen('$', "", 1);
        let number = leading_decimal(text.trim_start())?;
        let value: f64 = number.parse().ok()?;
        Self::from_amount(value)
    }

    /// Converts a decimal amount, rejecting negative and non-finite values.
    pub fn from_amount(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents > u64::MAX as f64 {
            return None;
        }
        Some(Self(cents as u64))
    }

    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, price| Price(acc.0.saturating_add(price.0)))
    }
}

fn leading_decimal(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'+') {
        end = 1;
    }
    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut fraction = end + 1;
        while fraction < bytes.len() && bytes[fraction].is_ascii_digit() {
            fraction += 1;
            digits += 1;
        }
        if fraction > end + 1 {
            end = fraction;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exponent = end + 1;
        if exponent < bytes.len() && matches!(bytes[exponent], b'+' | b'-') {
            exponent += 1;
        }
        let start = exponent;
        while exponent < bytes.len() && bytes[exponent].is_ascii_digit() {
            exponent += 1;
        }
        if exponent > start {
            end = exponent;
        }
    }
    Some(&text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_currency_prefixed_text() {
        assert_eq!(Price::parse("$25.99"), Some(Price::from_cents(2599)));
        assert_eq!(Price::parse("25.99"), Some(Price::from_cents(2599)));
        assert_eq!(Price::parse("  $7"), Some(Price::from_cents(700)));
        assert_eq!(Price::parse("$.5"), Some(Price::from_cents(50)));
    }

    #[test]
    fn takes_the_leading_number_only() {
        assert_eq!(Price::parse("12.5 USD"), Some(Price::from_cents(1250)));
        assert_eq!(Price::parse("3.456"), Some(Price::from_cents(346)));
        assert_eq!(Price::parse("4."), Some(Price::from_cents(400)));
    }

    #[test]
    fn reads_exponent_forms() {
        assert_eq!(Price::parse("1e3"), Some(Price::from_cents(100_000)));
        assert_eq!(Price::parse("$2.5E-1"), Some(Price::from_cents(25)));
        assert_eq!(Price::parse("7e"), Some(Price::from_cents(700)));
        assert_eq!(Price::parse("7e+x"), Some(Price::from_cents(700)));
        assert_eq!(Price::parse("1e400"), None);
    }

    #[test]
    fn rejects_text_without_an_amount() {
        assert_eq!(Price::parse(""), None);
        assert_eq!(Price::parse("$"), None);
        assert_eq!(Price::parse("free"), None);
        assert_eq!(Price::parse("-3.00"), None);
        assert_eq!(Price::from_amount(-0.5), None);
        assert_eq!(Price::from_amount(f64::NAN), None);
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(Price::from_cents(0).to_string(), "$0.00");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
        assert_eq!(Price::from_cents(123456).to_string(), "$1234.56");
    }

    #[test]
    fn subtotal_is_price_times_quantity_rounded_to_cents() {
        for (amount, quantity, expected) in [
            (25.99, 3, 7797),
            (0.1, 3, 30),
            (19.95, 7, 13965),
            (0.0, 12, 0),
        ] {
            let price = Price::from_amount(amount).unwrap();
            assert_eq!(price.times(quantity).cents(), expected);
        }
    }

    #[test]
    fn sums_prices() {
        let total: Price = [150, 250, 1].into_iter().map(Price::from_cents).sum();
        assert_eq!(total, Price::from_cents(401));
    }
}
