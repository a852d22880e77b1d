//! Business logic and service layer modules.
//!
//! This module contains the core logic of the application: the blog
//! statistics aggregator, in-memory storage, token authentication, rate
//! limiting, and metrics collection.

pub mod aggregator;
pub mod auth;
pub mod login_tracker;
pub mod metrics;
pub mod rate_limit;
pub mod store;

pub use auth::AuthError;
pub use login_tracker::*;
pub use metrics::*;
pub use rate_limit::*;
pub use store::*;
