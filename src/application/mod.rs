//! Application layer tying payments, configuration and forms together.
//!
//! `create_form` is the entry point a checkout view uses: it decides whether
//! the customer still has to go through Stripe Checkout and binds whatever
//! data was submitted.

pub mod forms;
