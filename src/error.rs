//! Application Errors
//!
//! Error taxonomy shared by the api layer, the session store and the
//! checklist controller.

/// Common result type for fallible app operations
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Network or non-2xx HTTP failure. Carries the server's structured
    /// `detail` message when one was present, else a per-operation fallback.
    Transport { message: String },
    /// Client-side validation failure. Never reaches the network.
    Validation(String),
    /// Token verification failure during session restoration.
    Session(String),
}

impl AppError {
    /// Build a transport error from an optional server detail, falling back
    /// to the operation's generic message.
    pub fn transport(detail: Option<String>, fallback: &str) -> Self {
        AppError::Transport {
            message: detail.unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// The message to show the user
    pub fn message(&self) -> &str {
        match self {
            AppError::Transport { message } => message,
            AppError::Validation(msg) => msg,
            AppError::Session(msg) => msg,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Transport { message } => write!(f, "Request failed: {}", message),
            AppError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            AppError::Session(msg) => write!(f, "Session error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_prefers_server_detail() {
        let err = AppError::transport(Some("Checklist not found".into()), "Failed to load checklist");
        assert_eq!(err.message(), "Checklist not found");
    }

    #[test]
    fn test_transport_falls_back_to_generic_message() {
        let err = AppError::transport(None, "Failed to load checklist");
        assert_eq!(err.message(), "Failed to load checklist");
    }
}
