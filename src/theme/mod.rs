//! Theme - Palette for the Admin Console

pub mod colors;
