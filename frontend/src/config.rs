//! Build-time settings for the catalogue frontend.

/// Base URL of the catalogue API. Fixed at runtime; set
/// `CATALOGUE_API_URL` when building to point a bundle elsewhere.
pub const API_URL: &str = match option_env!("CATALOGUE_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000/api",
};

/// Quiet period before search and tag text reach the query.
pub const FILTER_DEBOUNCE_MS: u32 = 300;

/// Minimum spacing between submissions, page changes and detail fetches.
pub const ACTION_THROTTLE_MS: f64 = 500.0;
