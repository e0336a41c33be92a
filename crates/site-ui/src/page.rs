//! Landing-page composition
//!
//! Assembles the full page model from the component library and the branding
//! constants: hero with the two call-to-action buttons, the feature card
//! grid, and the install command block. The model is serializable and is
//! everything the rendering layer needs to emit markup.

use serde::{Deserialize, Serialize};

use crate::branding;
use crate::components::{
    ButtonColor, ButtonProps, CardContent, CommandBlock, ComposedCard, Presentation,
    RenderedCommand, ResolvedButton, Result,
};

/// Hero section: title, tagline, and resolved call-to-action buttons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Hero title
    pub title: String,
    /// Tagline under the title
    pub tagline: String,
    /// Resolved call-to-action buttons, in display order
    pub actions: Vec<ResolvedButton>,
}

/// A feature card: its content slots plus the composed render decisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    /// Content slots the renderer substitutes
    pub content: CardContent,
    /// Composed container class and render decisions
    pub composed: ComposedCard,
}

impl FeatureCard {
    /// Compose a card's content into a page-ready feature card
    pub fn from_content(content: CardContent) -> Self {
        let composed = content.compose();
        Self { content, composed }
    }
}

/// Install section: heading and the rendered command block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallSection {
    /// Section heading
    pub heading: String,
    /// Rendered install command
    pub command: RenderedCommand,
}

/// The full landing-page model consumed by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingPage {
    /// Hero section
    pub hero: Hero,
    /// Feature cards in display order
    pub features: Vec<FeatureCard>,
    /// Install section
    pub install: InstallSection,
}

impl LandingPage {
    /// Compose the landing page from the branding constants
    ///
    /// Pure; every call produces the same model. A `ConfigurationError` here
    /// means the page content itself is defective, so composition fails as a
    /// whole rather than rendering a partial page.
    pub fn compose() -> Result<Self> {
        let hero = Hero {
            title: branding::HERO_TITLE.to_string(),
            tagline: branding::TAGLINE.to_string(),
            actions: vec![
                ButtonProps::link("Get started", branding::links::INSTALL_ANCHOR)
                    .with_presentation(Presentation::Solid(ButtonColor::Red))
                    .with_accessible_label("Jump to the install instructions")
                    .resolve(),
                ButtonProps::external_link("View on GitHub", branding::links::GITHUB)
                    .with_presentation(Presentation::Outline)
                    .with_title("Source code")
                    .resolve(),
            ],
        };

        let features = vec![
            FeatureCard::from_content(
                CardContent::new("Navigate", "Keyboard-first, end to end")
                    .with_body_text(
                        "Front page, new, ask, show and jobs are all one keystroke away. \
                         No mouse, no tabs, no waiting.",
                    )
                    .with_image("screenshot-home")
                    .fade_bottom(true),
            ),
            FeatureCard::from_content(
                CardContent::new("Threads", "Comments that stay readable")
                    .with_body_fragment("feature-threads-body")
                    .with_image("screenshot-thread")
                    .fade_top(true),
            ),
            FeatureCard::from_content(
                CardContent::new("Search", "Find any story in milliseconds")
                    .with_body_text("Full-text search across stories and comments, offline-cached.")
                    .with_image("screenshot-search")
                    .compact(true),
            ),
        ];

        let install = InstallSection {
            heading: branding::install::HEADING.to_string(),
            command: CommandBlock::new(branding::install::command_lines())?.render(),
        };

        Ok(Self {
            hero,
            features,
            install,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
