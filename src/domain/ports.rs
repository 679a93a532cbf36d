use std::collections::{BTreeMap, HashMap};

/// Submitted form data keyed by field name.
pub type FormData = HashMap<String, String>;

/// Field-level validation messages keyed by field name.
pub type FormErrors = BTreeMap<String, Vec<String>>;

/// The form capability a checkout page drives.
///
/// Binding submitted data runs validation; an unbound form that still needs
/// a token is never valid.
pub trait PaymentForm: Send + Sync {
    /// Whether the customer still has to submit a Stripe token.
    fn requires_token(&self) -> bool;
    fn bind(&mut self, data: FormData);
    fn is_bound(&self) -> bool;
    fn is_valid(&self) -> bool;
    fn errors(&self) -> &FormErrors;
    /// The cleaned Stripe token, once the form is valid.
    fn token(&self) -> Option<&str>;
}

pub type PaymentFormBox = Box<dyn PaymentForm>;
