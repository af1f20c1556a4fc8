//! Auth Endpoints

use super::types::{GoogleOAuthData, TokenResponse, UserResponse};
use crate::error::AppResult;

/// Exchange a Google OAuth credential for a backend session token
pub async fn google_login(credential: &str) -> AppResult<TokenResponse> {
    super::send_json(
        "POST",
        "/auth/google",
        &GoogleOAuthData { credential },
        "Failed to sign in with Google",
    )
    .await
}

/// Fetch the user behind the stored token
pub async fn me() -> AppResult<UserResponse> {
    super::get_json("/auth/me", "Failed to load the current user").await
}
