//! Composite Components
//!
//! Components built from primitives that keep their own state.

pub mod data_table;
