//! Core application modules
//!
//! This module contains configuration, constants, logging, the HTTP client,
//! and the batch dispatcher.

pub mod client;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod logging;
pub mod transport;
