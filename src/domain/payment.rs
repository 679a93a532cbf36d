use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The payment details handed to the gateway for a single checkout.
///
/// Assembled by the caller from its order/payment records; this crate only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInformation {
    /// Total to charge, in major units (e.g. dollars).
    pub amount: Decimal,
    /// ISO 4217 code, in whatever case the caller stores it.
    pub currency: String,
    pub customer_email: String,
    /// Stripe token, when the customer already went through checkout.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub order_id: Option<u64>,
    #[serde(default)]
    pub payment_id: Option<u64>,
}

impl PaymentInformation {
    pub fn new(
        amount: Decimal,
        currency: impl Into<String>,
        customer_email: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            customer_email: customer_email.into(),
            token: None,
            order_id: None,
            payment_id: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Returns the token only when it is present and non-empty.
    pub fn existing_token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}
