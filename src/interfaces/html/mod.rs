pub mod widget;

pub use widget::CheckoutWidget;
