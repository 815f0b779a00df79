//! Management Feature
//!
//! Users and posts tables plus the button showcase.

pub mod controller;
pub mod page;
pub mod showcase;
