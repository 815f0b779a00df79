//! Primitive Components
//!
//! Basic building blocks like buttons and badges.

pub mod badge;
pub mod button;
