//! Admin Console Library
//!
//! A users and posts management console built around a reusable tabular
//! view: search filter, column sort, pagination and per-cell rendering.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod state;
pub mod table;
pub mod theme;
pub mod utils;
