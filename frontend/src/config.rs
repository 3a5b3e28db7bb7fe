/// Base URL of the screening backend during local development. Deployments
/// override it at build time: `API_BASE_URL=https://... trunk build`.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Minimum time the fullscreen loader stays visible after a successful
/// submission, even when the backend answers instantly. Applies only to the
/// success path; failures surface immediately.
pub const MIN_PROCESSING_MS: u32 = 15_000;

/// Hard client-side cap on upload size. Files of exactly this size pass.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

pub fn api_base() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

pub fn endpoint(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
