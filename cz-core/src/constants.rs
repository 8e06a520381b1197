//! Client-wide constants.

/// Application name.
pub const APP_NAME: &str = "ContentZen";

/// Client version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Production service address.
pub const DEFAULT_BASE_URL: &str = "https://api.contentzen.io";

/// REST API version prefix.
pub const API_VERSION: &str = "v1";

/// Default request timeout in milliseconds, covering the whole round trip.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable consulted when the config file has no API token.
pub const API_TOKEN_ENV: &str = "CONTENTZEN_API_TOKEN";

/// Multipart form part name for media uploads.
pub const UPLOAD_FORM_FIELD: &str = "file";

/// Document state filter sent with public document listings.
pub const PUBLISHED_STATE: &str = "published";

/// Name of the rolling log file.
pub const LOG_FILE_NAME: &str = "contentzen.log";
