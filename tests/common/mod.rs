#![allow(dead_code)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stripe_checkout::domain::config::{ConnectionParams, GatewayConfig};
use stripe_checkout::domain::payment::PaymentInformation;

pub const TRANSACTION_AMOUNT: Decimal = dec!(42.42);
pub const TRANSACTION_CURRENCY: &str = "USD";
pub const CUSTOMER_EMAIL: &str = "test@example.com";
pub const FAKE_TOKEN: &str = "fake-token";

pub fn gateway_config() -> GatewayConfig {
    GatewayConfig {
        gateway_name: "stripe".to_string(),
        auto_capture: false,
        template_path: Some("template.html".to_string()),
        connection_params: ConnectionParams {
            public_key: Some("public".to_string()),
            secret_key: Some("secret".to_string()),
            store_name: Some("Saleor".to_string()),
            store_image: Some("image.gif".to_string()),
            prefill: true,
            remember_me: true,
            locale: Some("auto".to_string()),
            enable_billing_address: false,
            enable_shipping_address: false,
        },
    }
}

pub fn stripe_payment() -> PaymentInformation {
    PaymentInformation::new(TRANSACTION_AMOUNT, TRANSACTION_CURRENCY, CUSTOMER_EMAIL)
}
