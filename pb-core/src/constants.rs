//! Application-wide constants.

/// Application name, used for the config directory.
pub const APP_NAME: &str = "pushbullet";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pushbullet API host.
pub const API_BASE_URL: &str = "https://api.pushbullet.com";

/// REST API version prefix.
pub const API_VERSION: &str = "v2";

/// Default API request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

/// Push type string constants matching Pushbullet API values.
pub mod push_types {
    pub const NOTE: &str = "note";
    pub const LINK: &str = "link";
    pub const FILE: &str = "file";

    /// All valid push types.
    pub const ALL: &[&str] = &[NOTE, LINK, FILE];
}
