use crate::domain::config::ConnectionParams;
use crate::domain::currency::{get_amount_for_stripe, get_currency_from_stripe};
use crate::domain::payment::PaymentInformation;
use crate::error::Result;
use std::collections::BTreeMap;

pub const CHECKOUT_SCRIPT_URL: &str = "https://checkout.stripe.com/checkout.js";
pub const CHECKOUT_DESCRIPTION: &str = "Total payment";
pub const BUTTON_CLASS: &str = "stripe-button";

/// Renders the Stripe Checkout `<script>` tag for a payment.
///
/// Attributes are kept in a `BTreeMap` so the tag always comes out sorted by
/// attribute name. Caller-supplied attributes are applied last and win over
/// the ones derived from the payment and connection parameters.
#[derive(Debug, Clone)]
pub struct CheckoutWidget {
    payment_information: PaymentInformation,
    params: ConnectionParams,
    attrs: BTreeMap<String, String>,
}

impl CheckoutWidget {
    pub fn new(payment_information: PaymentInformation, params: ConnectionParams) -> Self {
        Self {
            payment_information,
            params,
            attrs: BTreeMap::new(),
        }
    }

    pub fn with_attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attrs.extend(attrs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builds the final attribute set, sorted by name.
    pub fn attributes(&self) -> Result<BTreeMap<String, String>> {
        let payment = &self.payment_information;
        let params = &self.params;

        let mut attrs = BTreeMap::new();
        attrs.insert("class".to_string(), BUTTON_CLASS.to_string());
        attrs.insert("src".to_string(), CHECKOUT_SCRIPT_URL.to_string());
        attrs.insert(
            "data-amount".to_string(),
            get_amount_for_stripe(payment.amount, &payment.currency)?.to_string(),
        );
        attrs.insert("data-currency".to_string(), get_currency_from_stripe(&payment.currency));
        attrs.insert("data-description".to_string(), CHECKOUT_DESCRIPTION.to_string());

        let optional = [
            ("data-key", &params.public_key),
            ("data-name", &params.store_name),
            ("data-image", &params.store_image),
            ("data-locale", &params.locale),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                attrs.insert(name.to_string(), value.clone());
            }
        }

        attrs.insert("data-allow-remember-me".to_string(), js_bool(params.remember_me));
        attrs.insert(
            "data-billing-address".to_string(),
            js_bool(params.enable_billing_address),
        );
        // Stripe only collects the zip code together with the billing address
        attrs.insert(
            "data-zip-code".to_string(),
            js_bool(params.enable_billing_address),
        );
        attrs.insert(
            "data-shipping-address".to_string(),
            js_bool(params.enable_shipping_address),
        );

        if params.prefill {
            attrs.insert("data-email".to_string(), payment.customer_email.clone());
        }

        attrs.extend(self.attrs.clone());
        attrs.remove("id");
        Ok(attrs)
    }

    pub fn render(&self) -> Result<String> {
        let attrs = self.attributes()?;
        let mut html = String::from("<script");
        for (name, value) in &attrs {
            html.push_str(&format!(" {}=\"{}\"", name, escape(value)));
        }
        html.push_str("></script>");
        Ok(html)
    }
}

fn js_bool(value: bool) -> String {
    value.to_string()
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
