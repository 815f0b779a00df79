//! Layout Components
//!
//! Shell, header and stack.

pub mod header;
pub mod shell;
pub mod stack;
