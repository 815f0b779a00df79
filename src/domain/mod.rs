//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod config;
pub mod post;
pub mod seed;
pub mod user;
