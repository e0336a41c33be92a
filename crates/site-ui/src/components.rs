//! Landing-page component model
//!
//! Components are plain Rust values with serializable properties. A caller
//! constructs a configuration, resolution derives concrete class strings and
//! render decisions, and the rendering layer consumes the result. Resolution
//! is pure and synchronous; the only side effect on the whole page (the
//! clipboard write behind the command block) lives in `site-platform`.
//!
//! # Components
//!
//! - [`ButtonProps`] - call-to-action buttons, resolved by [`ButtonProps::resolve`]
//! - [`CardContent`] - feature cards, composed by [`CardContent::compose`]
//! - [`CommandBlock`] - copyable install instructions, rendered by [`CommandBlock::render`]

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classes;

// =============================================================================
// Common Types
// =============================================================================

/// Identifier of an event handler registered in the rendering layer
///
/// The component model stays serializable end-to-end, so callbacks are
/// carried as string identifiers the renderer maps to actual closures.
pub type EventHandler = String;

/// Identifier of a named content fragment the rendering layer substitutes
pub type FragmentRef = String;

// =============================================================================
// Errors
// =============================================================================

/// An illegal or structurally invalid component configuration
///
/// Raised synchronously from smart constructors. This always indicates a
/// defect in the calling code, never a runtime fault, so there is no
/// recovery path.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The color is not admitted by the button variant
    #[error("Illegal button styling: {variant:?} does not admit {color:?}")]
    IllegalColorForVariant {
        /// The requested presentation variant
        variant: ButtonVariant,
        /// The color the variant does not admit
        color: ButtonColor,
    },

    /// A command block was constructed without any lines
    #[error("A command block requires at least one line")]
    EmptyCommandBlock,
}

/// Result type for component construction
pub type Result<T> = std::result::Result<T, ConfigurationError>;

// =============================================================================
// Button Component
// =============================================================================

/// Button style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Solid background button
    #[default]
    Solid,
    /// Outlined button with border
    Outline,
}

/// Button color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonColor {
    /// Brand red
    #[default]
    Red,
    /// White on dark backgrounds
    White,
    /// Neutral gray
    Gray,
}

/// Validated presentation of a button
///
/// The outline variant only exists in gray, so the type carries no color for
/// it and the illegal combinations cannot be represented. Configurations
/// arriving as raw `(variant, color)` pairs go through
/// [`Presentation::from_parts`], which rejects what the type cannot hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "variant", content = "color", rename_all = "lowercase")]
pub enum Presentation {
    /// Solid background in any of the brand colors
    Solid(ButtonColor),
    /// Outlined, always gray
    Outline,
}

impl Default for Presentation {
    fn default() -> Self {
        Presentation::Solid(ButtonColor::default())
    }
}

impl Presentation {
    /// Build a presentation from a raw `(variant, color)` pair
    ///
    /// Fails fast on the combinations the type does not admit, naming the
    /// offending pair.
    pub fn from_parts(variant: ButtonVariant, color: ButtonColor) -> Result<Self> {
        match (variant, color) {
            (ButtonVariant::Solid, color) => Ok(Presentation::Solid(color)),
            (ButtonVariant::Outline, ButtonColor::Gray) => Ok(Presentation::Outline),
            (ButtonVariant::Outline, color) => Err(ConfigurationError::IllegalColorForVariant {
                variant: ButtonVariant::Outline,
                color,
            }),
        }
    }

    /// The variant axis of this presentation
    pub fn variant(&self) -> ButtonVariant {
        match self {
            Presentation::Solid(_) => ButtonVariant::Solid,
            Presentation::Outline => ButtonVariant::Outline,
        }
    }

    /// The color axis of this presentation
    pub fn color(&self) -> ButtonColor {
        match self {
            Presentation::Solid(color) => *color,
            Presentation::Outline => ButtonColor::Gray,
        }
    }
}

/// What activating a button does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ButtonAction {
    /// Navigate to a target
    Link {
        /// Navigation target (absolute URL or in-page anchor)
        href: String,
        /// Open in a new browsing context with referrer suppressed
        #[serde(default)]
        opens_externally: bool,
    },
    /// Invoke a handler in the rendering layer
    Press {
        /// Handler identifier
        handler: EventHandler,
    },
}

/// Button component properties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonProps {
    /// Visible label
    pub label: String,
    /// What activation does
    pub action: ButtonAction,
    /// Visual presentation (validated; see [`Presentation`])
    #[serde(default)]
    pub presentation: Presentation,
    /// Tooltip title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Accessible label for screen readers, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessible_label: Option<String>,
    /// Caller-supplied class tokens, appended after the defaults so they win
    /// at the styling engine's last-token-wins resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_class: Option<String>,
}

impl ButtonProps {
    /// Create a button with the given label and action
    pub fn new(label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            label: label.into(),
            action,
            presentation: Presentation::default(),
            title: None,
            accessible_label: None,
            extra_class: None,
        }
    }

    /// Create a button navigating to a target in the same browsing context
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(
            label,
            ButtonAction::Link {
                href: href.into(),
                opens_externally: false,
            },
        )
    }

    /// Create a button navigating to an external target (new browsing
    /// context, referrer suppressed)
    pub fn external_link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::new(
            label,
            ButtonAction::Link {
                href: href.into(),
                opens_externally: true,
            },
        )
    }

    /// Create a button invoking a handler in the rendering layer
    pub fn press(label: impl Into<String>, handler: impl Into<EventHandler>) -> Self {
        Self::new(
            label,
            ButtonAction::Press {
                handler: handler.into(),
            },
        )
    }

    /// Set the presentation
    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    /// Set the tooltip title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the accessible label
    pub fn with_accessible_label(mut self, label: impl Into<String>) -> Self {
        self.accessible_label = Some(label.into());
        self
    }

    /// Set caller class tokens, appended last in the resolved class string
    pub fn with_extra_class(mut self, extra: impl Into<String>) -> Self {
        self.extra_class = Some(extra.into());
        self
    }

    /// Resolve the button into its final class string and render decision
    ///
    /// Pure and deterministic: structurally equal props resolve to identical
    /// output. The class string is `base overlay extra` joined with single
    /// spaces (empty pieces skipped), so caller tokens land last and win on
    /// class conflicts. Note the feature card composes in the opposite
    /// order; both orders are contractual.
    pub fn resolve(&self) -> ResolvedButton {
        let variant = self.presentation.variant();
        let color = self.presentation.color();

        let mut class = String::from(classes::button::base(variant));
        let overlay = classes::button::overlay(variant, color);
        if !overlay.is_empty() {
            class.push(' ');
            class.push_str(overlay);
        }
        if let Some(extra) = self.extra_class.as_deref() {
            if !extra.is_empty() {
                class.push(' ');
                class.push_str(extra);
            }
        }

        let (render_as, href, target, referrer_policy, on_press) = match &self.action {
            ButtonAction::Link {
                href,
                opens_externally,
            } => {
                let target = if *opens_externally {
                    LinkTarget::NewTab
                } else {
                    LinkTarget::SameTab
                };
                let referrer_policy = if *opens_externally {
                    ReferrerPolicy::Suppressed
                } else {
                    ReferrerPolicy::Default
                };
                (
                    RenderAs::Anchor,
                    Some(href.clone()),
                    Some(target),
                    Some(referrer_policy),
                    None,
                )
            }
            ButtonAction::Press { handler } => {
                (RenderAs::Button, None, None, None, Some(handler.clone()))
            }
        };

        ResolvedButton {
            class,
            render_as,
            href,
            target,
            referrer_policy,
            on_press,
            label: self.label.clone(),
            title: self.title.clone(),
            accessible_label: self.accessible_label.clone(),
        }
    }
}

/// Element the rendering layer emits for a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderAs {
    /// Navigation action, rendered as an anchor
    Anchor,
    /// Handler action, rendered as a button element
    Button,
}

/// Browsing context an anchor opens its target in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    /// Open in a new browsing context
    NewTab,
    /// Open in the current browsing context
    SameTab,
}

/// Referrer policy an anchor carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferrerPolicy {
    /// Suppress referrer leakage to the target
    Suppressed,
    /// Host environment default
    Default,
}

/// Resolved button output consumed by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedButton {
    /// Final class string, `base overlay extra` in that order
    pub class: String,
    /// Element to emit
    pub render_as: RenderAs,
    /// Navigation target, present iff [`RenderAs::Anchor`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Browsing context, present iff [`RenderAs::Anchor`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<LinkTarget>,
    /// Referrer policy, present iff [`RenderAs::Anchor`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer_policy: Option<ReferrerPolicy>,
    /// Handler identifier, present iff [`RenderAs::Button`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Visible label, passed through
    pub label: String,
    /// Tooltip title, passed through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Accessible label, passed through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessible_label: Option<String>,
}

// =============================================================================
// Card Component
// =============================================================================

/// Feature card content slots and flags
///
/// The body is *either* a literal string or a fragment reference. When a
/// non-empty literal is supplied it wins and the fragment is ignored
/// entirely, even if also supplied; the two are never combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContent {
    /// Short label rendered above the title
    pub eyebrow: String,
    /// Card title
    pub title: String,
    /// Literal body text; takes precedence over `body_fragment` when non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
    /// Lazily rendered body fragment, used only when no literal body is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fragment: Option<FragmentRef>,
    /// Image fragment rendered in the image region
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<FragmentRef>,
    /// Paint a top-to-transparent gradient over the image region
    #[serde(default)]
    pub fade_top: bool,
    /// Paint a bottom-to-transparent gradient over the image region
    #[serde(default)]
    pub fade_bottom: bool,
    /// Single-row layout with the short image region
    #[serde(default)]
    pub compact: bool,
    /// Caller-supplied class tokens, placed first in the container class so
    /// the structural tokens cannot be overridden
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_class: Option<String>,
}

impl CardContent {
    /// Create a card with the given eyebrow and title
    pub fn new(eyebrow: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            eyebrow: eyebrow.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the literal body text
    pub fn with_body_text(mut self, text: impl Into<String>) -> Self {
        self.body_text = Some(text.into());
        self
    }

    /// Set the body fragment reference
    pub fn with_body_fragment(mut self, fragment: impl Into<FragmentRef>) -> Self {
        self.body_fragment = Some(fragment.into());
        self
    }

    /// Set the image fragment reference
    pub fn with_image(mut self, fragment: impl Into<FragmentRef>) -> Self {
        self.image = Some(fragment.into());
        self
    }

    /// Set the top fade overlay flag
    pub fn fade_top(mut self, fade: bool) -> Self {
        self.fade_top = fade;
        self
    }

    /// Set the bottom fade overlay flag
    pub fn fade_bottom(mut self, fade: bool) -> Self {
        self.fade_bottom = fade;
        self
    }

    /// Set the compact layout flag
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Set caller class tokens, placed first in the container class
    pub fn with_extra_class(mut self, extra: impl Into<String>) -> Self {
        self.extra_class = Some(extra.into());
        self
    }

    /// Compose the card into its container class and render decisions
    ///
    /// Pure and deterministic. The container class is `extra layout
    /// structural` joined with single spaces, so structural tokens land last
    /// and cannot be overridden by the caller. This is the opposite order
    /// from the button resolver and both orders are contractual.
    pub fn compose(&self) -> ComposedCard {
        let body_choice = match self.body_text.as_deref() {
            Some(text) if !text.is_empty() => BodyChoice::Literal,
            _ => BodyChoice::Fragment,
        };

        let mut container_class = String::new();
        if let Some(extra) = self.extra_class.as_deref() {
            if !extra.is_empty() {
                container_class.push_str(extra);
                container_class.push(' ');
            }
        }
        container_class.push_str(classes::card::layout(self.compact));
        container_class.push(' ');
        container_class.push_str(classes::card::STRUCTURAL);

        ComposedCard {
            container_class,
            body_choice,
            fade_overlays: FadeOverlays {
                top: self.fade_top,
                bottom: self.fade_bottom,
            },
            image_region: if self.compact {
                ImageRegion::Short
            } else {
                ImageRegion::Tall
            },
        }
    }
}

/// Which body source the rendering layer uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyChoice {
    /// Render the literal body text; ignore the fragment entirely
    Literal,
    /// Render the body fragment
    Fragment,
}

/// Fade overlay flags for the image region, passed through unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FadeOverlays {
    /// Top-to-transparent gradient
    pub top: bool,
    /// Bottom-to-transparent gradient
    pub bottom: bool,
}

/// Image region height, a fixed two-point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageRegion {
    /// Default height (`compact = false`)
    Tall,
    /// Short height (`compact = true`)
    Short,
}

/// Composed card output consumed by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedCard {
    /// Final container class, `extra layout structural` in that order
    pub container_class: String,
    /// Body source to render
    pub body_choice: BodyChoice,
    /// Fade overlay flags
    pub fade_overlays: FadeOverlays,
    /// Image region height
    pub image_region: ImageRegion,
}

// =============================================================================
// Command Block Component
// =============================================================================

/// An ordered, non-empty sequence of command lines
///
/// The lines are displayed verbatim, newline-joined in original order. Only
/// the first line is the clipboard payload; the rest are follow-up steps the
/// user runs by hand. Emptiness is rejected at construction, so a value of
/// this type always has a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CommandBlock {
    lines: Vec<String>,
}

impl CommandBlock {
    /// Create a command block from lines in display order
    ///
    /// Fails with [`ConfigurationError::EmptyCommandBlock`] when `lines` is
    /// empty; that is a caller programming error, not a runtime condition.
    pub fn new(lines: Vec<String>) -> Result<Self> {
        if lines.is_empty() {
            return Err(ConfigurationError::EmptyCommandBlock);
        }
        Ok(Self { lines })
    }

    /// Create a command block from string slices, in display order
    pub fn from_slices(lines: &[&str]) -> Result<Self> {
        Self::new(lines.iter().map(|line| line.to_string()).collect())
    }

    /// The command lines in display order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The clipboard payload: exactly the first line
    pub fn copy_payload(&self) -> &str {
        &self.lines[0]
    }

    /// Render the block into its display text and copy payload
    pub fn render(&self) -> RenderedCommand {
        RenderedCommand {
            display_text: self.lines.join("\n"),
            copy_payload: self.lines[0].clone(),
        }
    }
}

impl TryFrom<Vec<String>> for CommandBlock {
    type Error = ConfigurationError;

    fn try_from(lines: Vec<String>) -> Result<Self> {
        Self::new(lines)
    }
}

impl From<CommandBlock> for Vec<String> {
    fn from(block: CommandBlock) -> Self {
        block.lines
    }
}

/// Rendered command block output consumed by the rendering layer
///
/// `display_text` stays visible regardless of clipboard support, so the user
/// always has a manual fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedCommand {
    /// Lines newline-joined in original order, displayed verbatim
    pub display_text: String,
    /// Text the copy activation writes to the system clipboard
    pub copy_payload: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Presentation Tests
    // ==========================================================================

    #[test]
    fn test_presentation_from_parts_solid_admits_all_colors() {
        for color in [ButtonColor::Red, ButtonColor::White, ButtonColor::Gray] {
            let presentation = Presentation::from_parts(ButtonVariant::Solid, color).unwrap();
            assert_eq!(presentation.variant(), ButtonVariant::Solid);
            assert_eq!(presentation.color(), color);
        }
    }

    #[test]
    fn test_presentation_from_parts_outline_rejects_non_gray() {
        for color in [ButtonColor::Red, ButtonColor::White] {
            let err = Presentation::from_parts(ButtonVariant::Outline, color).unwrap_err();
            assert!(matches!(
                err,
                ConfigurationError::IllegalColorForVariant {
                    variant: ButtonVariant::Outline,
                    ..
                }
            ));
            // The message names the offending pair
            assert!(err.to_string().contains("Outline"));
        }
    }

    #[test]
    fn test_presentation_outline_is_gray() {
        let presentation =
            Presentation::from_parts(ButtonVariant::Outline, ButtonColor::Gray).unwrap();
        assert_eq!(presentation, Presentation::Outline);
        assert_eq!(presentation.color(), ButtonColor::Gray);
    }

    // ==========================================================================
    // Button Tests
    // ==========================================================================

    #[test]
    fn test_button_press_renders_as_button() {
        let button = ButtonProps::press("Run", "handle_run")
            .with_presentation(Presentation::Solid(ButtonColor::Red));
        let resolved = button.resolve();

        assert_eq!(resolved.render_as, RenderAs::Button);
        assert_eq!(resolved.on_press, Some("handle_run".to_string()));
        assert_eq!(resolved.href, None);
        assert_eq!(resolved.target, None);
    }

    #[test]
    fn test_button_link_renders_as_anchor() {
        let button = ButtonProps::link("Docs", "https://x")
            .with_presentation(Presentation::Solid(ButtonColor::White));
        let resolved = button.resolve();

        assert_eq!(resolved.render_as, RenderAs::Anchor);
        assert_eq!(resolved.href, Some("https://x".to_string()));
        assert_eq!(resolved.target, Some(LinkTarget::SameTab));
        assert_eq!(resolved.referrer_policy, Some(ReferrerPolicy::Default));
        assert_eq!(resolved.on_press, None);
    }

    #[test]
    fn test_button_external_link_attributes_are_independent() {
        let resolved = ButtonProps::external_link("GitHub", "https://github.com/x").resolve();

        // Two attributes derived from one flag, carried separately
        assert_eq!(resolved.target, Some(LinkTarget::NewTab));
        assert_eq!(resolved.referrer_policy, Some(ReferrerPolicy::Suppressed));
    }

    #[test]
    fn test_button_class_order_is_base_overlay_extra() {
        let resolved = ButtonProps::link("Go", "#install")
            .with_presentation(Presentation::Solid(ButtonColor::Red))
            .with_extra_class("w-full")
            .resolve();

        let base_at = resolved.class.find(classes::button::SOLID_BASE).unwrap();
        let overlay_at = resolved.class.find(classes::button::SOLID_RED).unwrap();
        let extra_at = resolved.class.find("w-full").unwrap();
        assert!(base_at < overlay_at);
        assert!(overlay_at < extra_at);
    }

    #[test]
    fn test_button_outline_class_has_no_empty_gaps() {
        let resolved = ButtonProps::link("More", "/docs")
            .with_presentation(Presentation::Outline)
            .resolve();

        assert!(!resolved.class.contains("  "));
        assert!(resolved.class.contains(classes::button::OUTLINE_GRAY));
    }

    #[test]
    fn test_button_resolve_is_deterministic() {
        let button = ButtonProps::external_link("GitHub", "https://github.com/x")
            .with_title("Source code")
            .with_extra_class("mt-4");

        assert_eq!(button.resolve(), button.clone().resolve());
    }

    #[test]
    fn test_button_serde_round_trip_preserves_resolution() {
        let button = ButtonProps::press("Copy", "copy_install")
            .with_presentation(Presentation::Outline)
            .with_accessible_label("Copy install command");

        let json = serde_json::to_string(&button).unwrap();
        let deserialized: ButtonProps = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, button);
        assert_eq!(deserialized.resolve(), button.resolve());
    }

    #[test]
    fn test_button_passes_through_decoration() {
        let resolved = ButtonProps::link("Get started", "#install")
            .with_title("Jump to install")
            .with_accessible_label("Get started with Lede")
            .resolve();

        assert_eq!(resolved.label, "Get started");
        assert_eq!(resolved.title, Some("Jump to install".to_string()));
        assert_eq!(
            resolved.accessible_label,
            Some("Get started with Lede".to_string())
        );
    }

    // ==========================================================================
    // Card Tests
    // ==========================================================================

    #[test]
    fn test_card_literal_body_wins_over_fragment() {
        let card = CardContent::new("Search", "Find anything")
            .with_body_text("Full-text search across stories and comments.")
            .with_body_fragment("search-body");

        assert_eq!(card.compose().body_choice, BodyChoice::Literal);
    }

    #[test]
    fn test_card_fragment_is_the_fallback() {
        let card = CardContent::new("Search", "Find anything").with_body_fragment("search-body");
        assert_eq!(card.compose().body_choice, BodyChoice::Fragment);
    }

    #[test]
    fn test_card_empty_literal_falls_back_to_fragment() {
        let card = CardContent::new("Search", "Find anything")
            .with_body_text("")
            .with_body_fragment("search-body");

        assert_eq!(card.compose().body_choice, BodyChoice::Fragment);
    }

    #[test]
    fn test_card_class_order_is_extra_layout_structural() {
        let composed = CardContent::new("Threads", "Collapse noise")
            .compact(true)
            .with_extra_class("foo")
            .compose();

        let extra_at = composed.container_class.find("foo").unwrap();
        let layout_at = composed
            .container_class
            .find(classes::card::LAYOUT_COMPACT)
            .unwrap();
        let structural_at = composed
            .container_class
            .find(classes::card::STRUCTURAL)
            .unwrap();
        assert!(extra_at < layout_at);
        assert!(layout_at < structural_at);
    }

    #[test]
    fn test_card_without_extra_class_starts_with_layout() {
        let composed = CardContent::new("Threads", "Collapse noise").compose();
        assert!(composed
            .container_class
            .starts_with(classes::card::LAYOUT_TALL));
        assert!(!composed.container_class.contains("  "));
    }

    #[test]
    fn test_card_image_region_is_binary() {
        let tall = CardContent::new("A", "B").compose();
        let short = CardContent::new("A", "B").compact(true).compose();

        assert_eq!(tall.image_region, ImageRegion::Tall);
        assert_eq!(short.image_region, ImageRegion::Short);
    }

    #[test]
    fn test_card_fade_flags_pass_through() {
        let composed = CardContent::new("A", "B")
            .fade_top(true)
            .fade_bottom(false)
            .compose();

        assert!(composed.fade_overlays.top);
        assert!(!composed.fade_overlays.bottom);
    }

    #[test]
    fn test_card_compose_is_deterministic() {
        let card = CardContent::new("Navigate", "Keyboard first")
            .with_body_fragment("nav-body")
            .with_image("screenshot-home")
            .fade_bottom(true);

        assert_eq!(card.compose(), card.clone().compose());
    }

    // ==========================================================================
    // Command Block Tests
    // ==========================================================================

    #[test]
    fn test_command_block_display_text_preserves_order() {
        let block = CommandBlock::from_slices(&["cmd1", "cmd2"]).unwrap();
        let rendered = block.render();

        assert_eq!(rendered.display_text, "cmd1\ncmd2");
        assert_eq!(rendered.copy_payload, "cmd1");
    }

    #[test]
    fn test_command_block_single_line() {
        let block = CommandBlock::from_slices(&["cargo install lede"]).unwrap();
        let rendered = block.render();

        assert_eq!(rendered.display_text, "cargo install lede");
        assert_eq!(rendered.copy_payload, "cargo install lede");
    }

    #[test]
    fn test_command_block_rejects_empty_at_construction() {
        let err = CommandBlock::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptyCommandBlock));
    }

    #[test]
    fn test_command_block_serde_rejects_empty() {
        let ok: CommandBlock = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(ok.lines().len(), 2);

        let err = serde_json::from_str::<CommandBlock>("[]");
        assert!(err.is_err());
    }

    #[test]
    fn test_command_block_serde_round_trip() {
        let block = CommandBlock::from_slices(&["cargo install lede", "lede"]).unwrap();
        let json = serde_json::to_string(&block).unwrap();
        let deserialized: CommandBlock = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, block);
        assert_eq!(deserialized.render(), block.render());
    }
}
