//! User interface composition layer for the Lede landing page
//!
//! This crate provides the typed component model behind the landing page:
//! call-to-action buttons, feature cards, and the copy-to-clipboard install
//! command block. Components are plain Rust values with serializable
//! properties; resolution turns them into concrete style classes and render
//! decisions that the rendering layer (the webview frontend) consumes.
//! No markup is emitted here.
//!
//! # Modules
//!
//! - [`branding`] - Product name, tagline, URLs, and install command lines
//! - [`classes`] - Style-class constant tables (buttons, cards)
//! - [`components`] - Button resolver, card composer, command block
//! - [`page`] - Full landing-page composition
//!
//! # Example
//!
//! ```rust
//! use site_ui::components::{ButtonProps, Presentation, ButtonColor, RenderAs};
//!
//! let button = ButtonProps::link("Get started", "#install")
//!     .with_presentation(Presentation::Solid(ButtonColor::Red));
//! let resolved = button.resolve();
//! assert_eq!(resolved.render_as, RenderAs::Anchor);
//! assert!(resolved.class.contains("bg-red-600"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod branding;
pub mod classes;
pub mod components;
pub mod page;

// Re-export commonly used types
pub use components::{
    BodyChoice, ButtonAction, ButtonColor, ButtonProps, ButtonVariant, CardContent,
    CommandBlock, ComposedCard, ConfigurationError, EventHandler, FadeOverlays, FragmentRef,
    ImageRegion, LinkTarget, Presentation, ReferrerPolicy, RenderAs, RenderedCommand,
    ResolvedButton,
};

pub use page::{FeatureCard, Hero, InstallSection, LandingPage};
