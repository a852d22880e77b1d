//! HTTP request handlers for API endpoints.
//!
//! This module contains all the HTTP request handlers that process
//! incoming requests and generate responses.

pub mod auth;
pub mod blogs;
pub mod health;
pub mod metrics;
pub mod openapi;
pub mod stats;
pub mod users;
pub mod version;

pub use auth::*;
pub use blogs::*;
pub use health::*;
pub use metrics::*;
pub use openapi::*;
pub use stats::*;
pub use users::*;
pub use version::*;
