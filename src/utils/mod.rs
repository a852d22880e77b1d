//! Utility functions and helper modules.
//!
//! This module contains utilities used throughout the application,
//! including IP extraction, route patterns, and HMAC signing.

pub mod hmac;
pub mod http;
pub mod route;

pub use http::*;
pub use route::*;
