//! Constants for endpoint paths and query parameter names
//!
//! This module defines the string constants shared between the request
//! builder, the HTTP client, and their tests.

/// API endpoint paths, relative to the base URL
pub mod endpoint {
    /// LLM extraction endpoint
    pub const LLM: &str = "/llm";

    /// Content as markdown
    pub const MARKDOWN: &str = "/markdown";

    /// Content as HTML
    pub const HTML: &str = "/html";

    /// Page metadata
    pub const META: &str = "/meta";

    /// Screenshot capture
    pub const IMAGE: &str = "/image";
}

/// Query parameter names
pub mod param {
    pub const URL: &str = "url";
    pub const FRESH: &str = "fresh";
    pub const PROMPT: &str = "prompt";
    pub const JSON_SCHEMA: &str = "json_schema";
    pub const LINK_STYLE: &str = "link_style";
    pub const CLEAN_CONTENT: &str = "clean_content";
    pub const INLINE_IMAGES: &str = "inline_images";
    pub const ADVANCED_SCRAPING: &str = "advanced_scraping";
    pub const IMAGE_TYPE: &str = "image_type";
    pub const VIEWPORT_WIDTH: &str = "viewport_width";
    pub const VIEWPORT_HEIGHT: &str = "viewport_height";
    pub const TIMEOUT: &str = "timeout";
    pub const DELAY: &str = "delay";
    pub const RESPONSE_TYPE: &str = "response_type";
}

/// Fixed query parameter values
pub mod value {
    /// Screenshots are always returned as a link, never inline bytes
    pub const RESPONSE_TYPE_LINK: &str = "link";
}
