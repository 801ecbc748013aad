//! API data models
//!
//! This module contains the scrape job union submitted by callers, the wire
//! form of an outbound API request, and the per-job result record.

pub mod api;
pub mod job;
pub mod record;
