//! Lede branding
//!
//! This module contains the branding constants the landing page is composed
//! from. The page keeps its copy here rather than scattered through the
//! composition code so the content can be revised in one place.

/// Application name
pub const APP_NAME: &str = "Lede";

/// Application tagline, shown under the hero title
pub const TAGLINE: &str = "Hacker News, at terminal speed.";

/// Hero title
pub const HERO_TITLE: &str = "Read Hacker News without leaving your terminal";

/// Links used by the landing page
pub mod links {
    /// Official website
    pub const WEBSITE: &str = "https://lede.sh";

    /// GitHub repository
    pub const GITHUB: &str = "https://github.com/yourusername/lede";

    /// In-page anchor for the install section
    pub const INSTALL_ANCHOR: &str = "#install";
}

/// Install instructions rendered in the command block
pub mod install {
    /// Heading shown above the command block
    pub const HEADING: &str = "Install in seconds";

    /// The install command. First line is what the copy button puts on the
    /// clipboard; the rest is displayed as follow-up steps.
    pub const COMMAND_LINES: [&str; 2] = ["cargo install lede", "lede"];

    /// Command lines as owned strings, in display order
    pub fn command_lines() -> Vec<String> {
        COMMAND_LINES.iter().map(|line| line.to_string()).collect()
    }
}
