//! Core utilities shared across the application
//!
//! - `http`: request headers sent with every page request

pub mod http;

pub use http::{default_header_map, header_map, DEFAULT_USER_AGENT};
