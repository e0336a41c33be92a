//! Style-class tables for the landing page components
//!
//! This module holds the constant class strings the resolvers assemble their
//! output from. The rendering layer applies them with a last-token-wins
//! styling engine, so the order a resolver joins these in is part of the
//! contract and is documented on the resolver itself.

use crate::components::{ButtonColor, ButtonVariant};

// =============================================================================
// Button Classes
// =============================================================================

/// Class tables for the call-to-action buttons
pub mod button {
    use super::{ButtonColor, ButtonVariant};

    /// Base classes shared by every solid button
    pub const SOLID_BASE: &str =
        "inline-flex items-center justify-center rounded-lg px-6 py-3 text-sm font-semibold transition-colors";

    /// Base classes shared by every outline button
    pub const OUTLINE_BASE: &str =
        "inline-flex items-center justify-center rounded-lg border px-6 py-3 text-sm font-semibold transition-colors";

    /// Color overlay for solid red buttons
    pub const SOLID_RED: &str = "bg-red-600 text-white hover:bg-red-500";

    /// Color overlay for solid white buttons
    pub const SOLID_WHITE: &str = "bg-white text-gray-900 hover:bg-gray-200";

    /// Color overlay for solid gray buttons
    pub const SOLID_GRAY: &str = "bg-gray-800 text-gray-100 hover:bg-gray-700";

    /// Color overlay for outline gray buttons
    pub const OUTLINE_GRAY: &str =
        "border-gray-400 text-gray-300 hover:border-gray-200 hover:text-white";

    /// Base class for a button variant
    pub fn base(variant: ButtonVariant) -> &'static str {
        match variant {
            ButtonVariant::Solid => SOLID_BASE,
            ButtonVariant::Outline => OUTLINE_BASE,
        }
    }

    /// Color overlay for a `(variant, color)` pair
    ///
    /// The outline row is only populated for gray; every other outline cell
    /// is the empty string and contributes nothing to the joined output.
    pub fn overlay(variant: ButtonVariant, color: ButtonColor) -> &'static str {
        match (variant, color) {
            (ButtonVariant::Solid, ButtonColor::Red) => SOLID_RED,
            (ButtonVariant::Solid, ButtonColor::White) => SOLID_WHITE,
            (ButtonVariant::Solid, ButtonColor::Gray) => SOLID_GRAY,
            (ButtonVariant::Outline, ButtonColor::Gray) => OUTLINE_GRAY,
            (ButtonVariant::Outline, _) => "",
        }
    }
}

// =============================================================================
// Card Classes
// =============================================================================

/// Class tables for the feature cards
pub mod card {
    /// Structural tokens every card ends with (rounded corners, border,
    /// shadow). Appended last so caller tokens cannot override them.
    pub const STRUCTURAL: &str = "overflow-hidden rounded-2xl border border-gray-800 shadow-lg";

    /// Layout token for the default two-row card (text row over image row)
    pub const LAYOUT_TALL: &str = "grid grid-rows-[auto_1fr]";

    /// Layout token for the compact single-row card
    pub const LAYOUT_COMPACT: &str = "grid grid-rows-1";

    /// Image region height for the default card
    pub const IMAGE_TALL: &str = "h-64";

    /// Image region height for the compact card
    pub const IMAGE_SHORT: &str = "h-36";

    /// Gradient mask painted over the image region when the top fade is set
    pub const FADE_TOP: &str = "bg-gradient-to-b from-gray-950 to-transparent";

    /// Gradient mask painted over the image region when the bottom fade is set
    pub const FADE_BOTTOM: &str = "bg-gradient-to-t from-gray-950 to-transparent";

    /// Layout token selected by the `compact` flag
    pub fn layout(compact: bool) -> &'static str {
        if compact {
            LAYOUT_COMPACT
        } else {
            LAYOUT_TALL
        }
    }
}
