//! Adapters that present gateway data to the outside world.

pub mod html;
