//! Scrape job model
//!
//! A job is a tagged union over the four Handinger actions. Each variant
//! carries only the options that action understands, so options belonging to
//! another action can never leak into a request.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default viewport width for screenshots
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Default viewport height for screenshots
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 1024;

/// Default remote page-load timeout for screenshots, in milliseconds
pub const DEFAULT_SCREENSHOT_TIMEOUT_MS: u64 = 30_000;

/// Default delay before capturing a screenshot, in milliseconds
pub const DEFAULT_SCREENSHOT_DELAY_MS: u64 = 500;

/// One unit of work: a target URL plus exactly one action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapeJob {
    /// The URL of the website to fetch content from
    pub url: String,

    /// Bypass the remote cache and fetch a fresh copy
    #[serde(default)]
    pub fresh: bool,

    /// The action to perform, with its action-specific options
    #[serde(flatten)]
    pub action: Action,
}

/// Action-specific options, tagged by the `action` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    /// Fetch the content and process it with the remote LLM
    Llm {
        /// The prompt to use for the LLM
        prompt: String,
        /// The JSON schema constraining the LLM output
        json_schema: String,
    },

    /// Fetch the page content as markdown or HTML
    Content {
        #[serde(default)]
        content_type: ContentType,
        #[serde(default)]
        link_style: LinkStyle,
        #[serde(default = "default_true")]
        clean_content: bool,
        #[serde(default)]
        inline_images: bool,
        #[serde(default = "default_true")]
        advanced_scraping: bool,
    },

    /// Fetch the page metadata
    Metadata {
        #[serde(default = "default_true")]
        advanced_scraping: bool,
    },

    /// Take a screenshot of the page
    Screenshot {
        #[serde(default)]
        image_type: ImageType,
        #[serde(default = "default_viewport_width")]
        viewport_width: u32,
        #[serde(default = "default_viewport_height")]
        viewport_height: u32,
        /// Remote page-load timeout in milliseconds, forwarded to the API
        #[serde(default = "default_screenshot_timeout")]
        timeout: u64,
        /// Delay before capture in milliseconds, forwarded to the API
        #[serde(default = "default_screenshot_delay")]
        delay: u64,
    },
}

impl Action {
    /// Action name as it appears on the wire and in the CLI
    pub fn name(&self) -> &'static str {
        match self {
            Action::Llm { .. } => "llm",
            Action::Content { .. } => "content",
            Action::Metadata { .. } => "metadata",
            Action::Screenshot { .. } => "screenshot",
        }
    }
}

/// Output format for the content action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Plain-text format suitable for LLM input
    #[default]
    Markdown,
    /// Rich-text format renderable in a browser or an email
    Html,
}

/// How links are rendered in extracted content
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// Links embedded directly within the text
    #[default]
    Inline,
    /// Links listed at the end, referenced by numbers in the text
    Citations,
    /// Links removed from the content
    None,
}

impl LinkStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkStyle::Inline => "inline",
            LinkStyle::Citations => "citations",
            LinkStyle::None => "none",
        }
    }
}

/// Screenshot image format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    #[default]
    Png,
    Jpeg,
}

impl ImageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Png => "png",
            ImageType::Jpeg => "jpeg",
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_viewport_width() -> u32 {
    DEFAULT_VIEWPORT_WIDTH
}

fn default_viewport_height() -> u32 {
    DEFAULT_VIEWPORT_HEIGHT
}

fn default_screenshot_timeout() -> u64 {
    DEFAULT_SCREENSHOT_TIMEOUT_MS
}

fn default_screenshot_delay() -> u64 {
    DEFAULT_SCREENSHOT_DELAY_MS
}
