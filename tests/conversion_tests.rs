use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stripe_checkout::domain::currency::{
    ZERO_DECIMAL_CURRENCIES, get_amount_for_stripe, get_amount_from_stripe,
    get_currency_for_stripe, get_currency_from_stripe,
};

#[test]
fn test_round_trip_for_two_decimal_currencies() {
    let mut rng = rand::thread_rng();

    for currency in ["USD", "eur", "GBP", "PLN"] {
        for _ in 0..1_000 {
            let cents: i64 = rng.gen_range(-10_000_000..10_000_000);
            let amount = Decimal::new(cents, 2);

            let units = get_amount_for_stripe(amount, currency).unwrap();
            assert_eq!(units, cents);
            assert_eq!(get_amount_from_stripe(units, currency), amount);
        }
    }
}

#[test]
fn test_round_trip_for_zero_decimal_currencies() {
    let mut rng = rand::thread_rng();

    for currency in ZERO_DECIMAL_CURRENCIES {
        let whole: i64 = rng.gen_range(0..10_000_000);
        let amount = Decimal::from(whole);

        let units = get_amount_for_stripe(amount, currency).unwrap();
        assert_eq!(units, whole);
        assert_eq!(get_amount_from_stripe(units, &currency.to_lowercase()), amount);
    }
}

#[test]
fn test_sub_cent_amounts_round_to_nearest() {
    assert_eq!(get_amount_for_stripe(dec!(42.424), "USD").unwrap(), 4242);
    assert_eq!(get_amount_for_stripe(dec!(42.426), "USD").unwrap(), 4243);
    assert_eq!(get_amount_for_stripe(dec!(0.4), "JPY").unwrap(), 0);
    assert_eq!(get_amount_for_stripe(dec!(0.6), "JPY").unwrap(), 1);
}

#[test]
fn test_zero_amount() {
    assert_eq!(get_amount_for_stripe(Decimal::ZERO, "USD").unwrap(), 0);
    assert_eq!(get_amount_from_stripe(0, "USD"), Decimal::ZERO);
}

#[test]
fn test_currency_normalization_is_idempotent() {
    for code in ["USD", "usd", "uSd", "jpy"] {
        let lower = get_currency_for_stripe(code);
        assert_eq!(get_currency_for_stripe(&lower), lower);

        let upper = get_currency_from_stripe(code);
        assert_eq!(get_currency_from_stripe(&upper), upper);
        assert_eq!(get_currency_from_stripe(&lower), upper);
    }
}
