//! Frontend Configuration
//!
//! Values baked in at build time. Override with environment variables when
//! building the bundle, e.g. `TICKET_DESK_API_BASE=https://api.example.com trunk build`.

/// REST API origin, without trailing slash
pub const API_BASE: &str = match option_env!("TICKET_DESK_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8000",
};

/// Log level name for the console logger
pub const LOG_LEVEL: &str = match option_env!("TICKET_DESK_LOG") {
    Some(level) => level,
    None => "info",
};

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// How long success/failure toasts stay on screen
pub const TOAST_DURATION_MS: u32 = 3000;

/// Delay before leaving the create page after a successful submit
pub const CREATE_REDIRECT_DELAY_MS: u32 = 1500;

/// Grace period before a selector blur cancels the inline edit
pub const BLUR_GRACE_MS: i32 = leptos_inline_edit::DEFAULT_BLUR_GRACE_MS;

/// Maximum description length shown on list cards
pub const LIST_DESCRIPTION_LIMIT: usize = 100;

/// Build an absolute API URL from a path relative to [`API_BASE`]
pub fn api_url(path: &str) -> String {
    join_url(API_BASE, path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
