//! Job-to-wire conversion
//!
//! This module turns a scrape job into the wire form of an API request.

pub mod request_builder;
