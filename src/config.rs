//! Build-time Configuration
//!
//! API base URL and Google OAuth client id, both supplied by the environment
//! at compile time (Trunk passes them through to rustc).

/// Base URL of the checklist backend, without a trailing slash
pub fn api_base_url() -> &'static str {
    option_env!("CHECKLIST_API_URL").unwrap_or("http://localhost:8000")
}

/// Google OAuth client id. Empty when not configured, in which case only the
/// demo login is offered.
pub fn google_client_id() -> &'static str {
    option_env!("GOOGLE_CLIENT_ID").unwrap_or("")
}
