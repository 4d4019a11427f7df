//! Abbreviated currency formatting (K/M suffixes).

/// Currency code prepended by [`format_currency_with_code`].
pub const CURRENCY_CODE: &str = "USD";

const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// Format a raw amount as an abbreviated currency string.
///
/// Amounts of one million or more render as millions with two decimal
/// places (`2_500_000.0` → `"2.50M"`). Everything else renders as whole
/// thousands (`2500.0` → `"3K"`), with amounts below one thousand
/// collapsing to `"0K"` rather than rounding up (`500.0` → `"0K"`).
/// Negative amounts are not special-cased; they always compare below one
/// million and take the K branch with their raw value.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if amount >= MILLION {
        // Half-up at two decimals; the default formatter rounds ties to
        // even, which would disagree with the display contract.
        let millions = (amount / MILLION * 100.0).round() / 100.0;
        format!("{millions:.2}M")
    } else {
        let quotient = amount / THOUSAND;
        // Sub-unit quotients truncate to zero; whole thousands round
        // half up.
        let units = if quotient.abs() < 1.0 {
            0.0
        } else {
            (quotient + 0.5).floor()
        };
        format!("{units:.0}K")
    }
}

/// Format a raw amount with the currency code prepended.
#[must_use]
pub fn format_currency_with_code(amount: f64) -> String {
    format!("{CURRENCY_CODE} {}", format_currency(amount))
}
