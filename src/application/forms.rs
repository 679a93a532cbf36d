use crate::domain::config::ConnectionParams;
use crate::domain::payment::PaymentInformation;
use crate::domain::ports::{FormData, FormErrors, PaymentForm, PaymentFormBox};
use crate::error::Result;
use crate::interfaces::html::CheckoutWidget;
use tracing::debug;

/// Name of the field Stripe Checkout posts the token under.
pub const TOKEN_FIELD: &str = "stripeToken";
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// The Stripe Checkout modal form.
///
/// The customer has not paid yet, so the form renders the checkout widget and
/// expects Stripe to post back a `stripeToken`.
pub struct TokenRequiredForm {
    widget: CheckoutWidget,
    data: Option<FormData>,
    errors: FormErrors,
    token: Option<String>,
}

impl TokenRequiredForm {
    pub fn new(payment_information: PaymentInformation, params: ConnectionParams) -> Self {
        Self {
            widget: CheckoutWidget::new(payment_information, params),
            data: None,
            errors: FormErrors::new(),
            token: None,
        }
    }

    pub fn render_widget(&self) -> Result<String> {
        self.widget.render()
    }

    fn clean(&mut self) {
        self.errors.clear();
        self.token = None;

        let submitted = self
            .data
            .as_ref()
            .and_then(|data| data.get(TOKEN_FIELD))
            .map(|token| token.trim())
            .filter(|token| !token.is_empty());

        match submitted {
            Some(token) => self.token = Some(token.to_string()),
            None => {
                self.errors
                    .entry(TOKEN_FIELD.to_string())
                    .or_default()
                    .push(REQUIRED_MESSAGE.to_string());
            }
        }
    }
}

impl PaymentForm for TokenRequiredForm {
    fn requires_token(&self) -> bool {
        true
    }

    fn bind(&mut self, data: FormData) {
        self.data = Some(data);
        self.clean();
        debug!(valid = self.errors.is_empty(), "Bound Stripe checkout form");
    }

    fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    fn is_valid(&self) -> bool {
        self.is_bound() && self.errors.is_empty()
    }

    fn errors(&self) -> &FormErrors {
        &self.errors
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Form used when the payment already carries a token: nothing left to submit.
pub struct TokenPresentForm {
    token: String,
    bound: bool,
    errors: FormErrors,
}

impl TokenPresentForm {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            bound: false,
            errors: FormErrors::new(),
        }
    }
}

impl PaymentForm for TokenPresentForm {
    fn requires_token(&self) -> bool {
        false
    }

    fn bind(&mut self, _data: FormData) {
        self.bound = true;
    }

    fn is_bound(&self) -> bool {
        self.bound
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn errors(&self) -> &FormErrors {
        &self.errors
    }

    fn token(&self) -> Option<&str> {
        Some(&self.token)
    }
}

/// Picks the form variant for a payment and binds `data` to it when given.
pub fn create_form(
    data: Option<FormData>,
    payment_information: PaymentInformation,
    connection_params: ConnectionParams,
) -> PaymentFormBox {
    let existing = payment_information.existing_token().map(str::to_owned);
    let mut form: PaymentFormBox = match existing {
        Some(token) => {
            debug!(
                order_id = ?payment_information.order_id,
                payment_id = ?payment_information.payment_id,
                "Payment already carries a token"
            );
            Box::new(TokenPresentForm::new(token))
        }
        None => {
            debug!(
                order_id = ?payment_information.order_id,
                payment_id = ?payment_information.payment_id,
                "Payment requires a Stripe token"
            );
            Box::new(TokenRequiredForm::new(payment_information, connection_params))
        }
    };

    if let Some(data) = data {
        form.bind(data);
    }
    form
}
