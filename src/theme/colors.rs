//! Colors - Admin Console Theme Colors

use gpui::{rgb, Rgba};

/// Color palette - All colors are accessed via associated functions
pub struct AdminColors;

impl AdminColors {
    // Primary colors
    /// Header background - Slate
    pub fn header_bg() -> Rgba { rgb(0x1e293b) }
    /// Primary accent - Blue
    pub fn accent() -> Rgba { rgb(0x2563eb) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf7fafc) }
    /// Content area background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x16a34a) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xd97706) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    /// Info - Cyan
    pub fn info() -> Rgba { rgb(0x0891b2) }
    /// Neutral - Gray
    pub fn neutral() -> Rgba { rgb(0x6b7280) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x2563eb) }
    /// Primary button hover
    pub fn button_primary_hover() -> Rgba { rgb(0x1d4ed8) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0xe5e7eb) }
    /// Secondary button hover
    pub fn button_secondary_hover() -> Rgba { rgb(0xd1d5db) }
    /// Danger button background
    pub fn button_danger_bg() -> Rgba { rgb(0xdc2626) }
    /// Danger button hover
    pub fn button_danger_hover() -> Rgba { rgb(0xb91c1c) }
    /// Success button background
    pub fn button_success_bg() -> Rgba { rgb(0x16a34a) }
    /// Success button hover
    pub fn button_success_hover() -> Rgba { rgb(0x15803d) }
    /// Ghost / outline hover
    pub fn button_subtle_hover() -> Rgba { rgb(0xf3f4f6) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Table row alternate
    pub fn table_row_alt() -> Rgba { rgb(0xfcfcfd) }
}

/// Translucent fill for a badge of the given color
pub fn badge_fill(color: Rgba) -> Rgba {
    Rgba { a: 0.12, ..color }
}
