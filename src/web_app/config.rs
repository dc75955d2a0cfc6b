// web_app/config.rs - Remote API configuration
//
// The browser bundle cannot read the environment at runtime, so the base URL
// is baked in at build time. Native code (server, tests) may override it.

/// Base URL used when `CATALOG_API_BASE_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "https://intern-task-api.bravo68web.workers.dev";

/// Environment variable overriding the API base URL
pub const API_BASE_URL_VAR: &str = "CATALOG_API_BASE_URL";

/// Storage key the session token is persisted under
pub const TOKEN_STORAGE_KEY: &str = "jwtToken";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from the process environment, falling back to the
    /// build-time value.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute API path (e.g. `/auth/login`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(option_env!("CATALOG_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}
