//! Scrape job to API request conversion
//!
//! This module selects the endpoint for a job's action and assembles the
//! ordered query pairs sent with the GET request. Required parameters are
//! validated here, before any network I/O happens.

use crate::core::constants::{endpoint, param, value};
use crate::models::api::{ApiRequest, ResponseFormat};
use crate::models::job::{Action, ContentType, ScrapeJob};
use thiserror::Error;

/// Errors raised while assembling a request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Convert a scrape job into an API request
///
/// `url` and `fresh` lead the query string for every action; the remaining
/// pairs depend on the action. Fields belonging to other actions are never
/// emitted.
///
/// # Errors
///
/// Returns [`RequestError::MissingParameter`] when `url`, or for the LLM
/// action `prompt` or `json_schema`, is empty.
pub fn build_api_request(job: &ScrapeJob) -> Result<ApiRequest, RequestError> {
    if job.url.trim().is_empty() {
        return Err(RequestError::MissingParameter(param::URL));
    }

    let mut query: Vec<(&'static str, String)> = vec![
        (param::URL, job.url.clone()),
        (param::FRESH, job.fresh.to_string()),
    ];

    let (endpoint, response_format) = match &job.action {
        Action::Llm {
            prompt,
            json_schema,
        } => {
            if prompt.trim().is_empty() {
                return Err(RequestError::MissingParameter(param::PROMPT));
            }
            if json_schema.trim().is_empty() {
                return Err(RequestError::MissingParameter(param::JSON_SCHEMA));
            }
            query.push((param::PROMPT, prompt.clone()));
            query.push((param::JSON_SCHEMA, json_schema.clone()));
            (endpoint::LLM, ResponseFormat::Json)
        }

        Action::Content {
            content_type,
            link_style,
            clean_content,
            inline_images,
            advanced_scraping,
        } => {
            query.push((param::LINK_STYLE, link_style.as_str().to_string()));
            query.push((param::CLEAN_CONTENT, clean_content.to_string()));
            query.push((param::INLINE_IMAGES, inline_images.to_string()));
            query.push((param::ADVANCED_SCRAPING, advanced_scraping.to_string()));

            let endpoint = match content_type {
                ContentType::Markdown => endpoint::MARKDOWN,
                ContentType::Html => endpoint::HTML,
            };
            (endpoint, ResponseFormat::Text)
        }

        Action::Metadata { advanced_scraping } => {
            query.push((param::ADVANCED_SCRAPING, advanced_scraping.to_string()));
            (endpoint::META, ResponseFormat::Json)
        }

        Action::Screenshot {
            image_type,
            viewport_width,
            viewport_height,
            timeout,
            delay,
        } => {
            query.push((param::IMAGE_TYPE, image_type.as_str().to_string()));
            query.push((param::VIEWPORT_WIDTH, viewport_width.to_string()));
            query.push((param::VIEWPORT_HEIGHT, viewport_height.to_string()));
            query.push((param::TIMEOUT, timeout.to_string()));
            query.push((param::DELAY, delay.to_string()));
            query.push((param::RESPONSE_TYPE, value::RESPONSE_TYPE_LINK.to_string()));
            (endpoint::IMAGE, ResponseFormat::Text)
        }
    };

    Ok(ApiRequest {
        endpoint,
        query,
        response_format,
    })
}
