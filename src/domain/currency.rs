use crate::error::{GatewayError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Currencies Stripe charges in whole units, without a ×100 minor-unit scale.
///
/// See <https://stripe.com/docs/currencies#zero-decimal>.
pub const ZERO_DECIMAL_CURRENCIES: [&str; 16] = [
    "BIF", "CLP", "DJF", "GNF", "JPY", "KMF", "KRW", "MGA", "PYG", "RWF", "UGX", "VND", "VUV",
    "XAF", "XOF", "XPF",
];

const MINOR_UNIT_SCALE: u32 = 2;

pub fn is_zero_decimal_currency(currency: &str) -> bool {
    ZERO_DECIMAL_CURRENCIES
        .iter()
        .any(|code| code.eq_ignore_ascii_case(currency))
}

/// Converts a decimal amount into the integer amount Stripe expects.
///
/// Standard currencies are scaled by 100; zero-decimal currencies are only
/// rounded. Rounding is half-to-even. Negative amounts scale like positive ones.
pub fn get_amount_for_stripe(amount: Decimal, currency: &str) -> Result<i64> {
    let scaled = if is_zero_decimal_currency(currency) {
        amount
    } else {
        amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| GatewayError::InvalidAmount(format!("{amount} {currency} overflows")))?
    };

    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()
        .ok_or_else(|| {
            GatewayError::InvalidAmount(format!(
                "{amount} {currency} does not fit in a Stripe amount"
            ))
        })
}

/// Converts a Stripe integer amount back into a decimal amount.
pub fn get_amount_from_stripe(amount: i64, currency: &str) -> Decimal {
    if is_zero_decimal_currency(currency) {
        Decimal::from(amount)
    } else {
        Decimal::new(amount, MINOR_UNIT_SCALE)
    }
}

/// Stripe's API takes lowercase ISO codes.
pub fn get_currency_for_stripe(currency: &str) -> String {
    currency.to_lowercase()
}

pub fn get_currency_from_stripe(currency: &str) -> String {
    currency.to_uppercase()
}
