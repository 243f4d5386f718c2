use rust_decimal::prelude::*;
use rusty_money::{iso, Money};

/// Pennies shown for a pound amount.
const GBP_FRACTION_DIGITS: u32 = 2;

/// Turns a full-precision amount into pounds sterling, rounded half away from zero to the penny.
///
/// Rounding happens here and nowhere else. Non-finite amounts become zero.
pub fn to_gbp(amount: f64) -> Money<'static, iso::Currency> {
    let exact = Decimal::from_f64_retain(amount).unwrap_or_default();
    let pennies =
        exact.round_dp_with_strategy(GBP_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
    // Drop the sign of amounts that round to zero so they don't print as "-£0.00".
    let pennies = if pennies.is_zero() { Decimal::ZERO } else { pennies };
    Money::from_decimal(pennies, iso::GBP)
}

/// `£1,234.50` style text for an amount.
pub fn format_gbp(amount: f64) -> String {
    to_gbp(amount).to_string()
}
