//! Route pattern extraction utilities.

use actix_web::HttpRequest;

/// Extract the matched route pattern from a request
///
/// Falls back to the raw path when the request did not match a resource,
/// so metrics labels stay bounded for registered routes.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| req.path().to_string())
}
