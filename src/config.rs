
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:5000"  // Flask dev server when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub const LIVE_DATA_PATH: &str = "/live_data";
pub const FILTER_PATH: &str = "/filter";

// Last refreshed indicator tick
pub const REFRESH_INTERVAL_MS: u32 = 60_000;

/// Portrait for a record. Always derived from the id, never from the payload.
pub fn image_url(entity_id: &str) -> String {
    format!("/images/{}.jpg", entity_id)
}
