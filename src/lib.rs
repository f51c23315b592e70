//! Webworker - single-request static file responder
//!
//! Every accepted connection gets one HTTP response built from a local file,
//! with light template substitution for text documents.

pub mod config;
pub mod http;
pub mod server;
