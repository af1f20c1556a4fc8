//! Session Token Persistence
//!
//! One opaque token string in `localStorage`. The sentinel value `demo-token`
//! marks a demo session. On non-wasm targets (unit tests) the token lives in a
//! thread-local instead.

const TOKEN_KEY: &str = "checklist_token";

/// Sentinel stored in place of a real token for demo sessions
pub const DEMO_TOKEN: &str = "demo-token";

pub fn is_demo(token: &str) -> bool {
    token == DEMO_TOKEN
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::TOKEN_KEY;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn load() -> Option<String> {
        storage()?.get_item(TOKEN_KEY).ok()?
    }

    pub fn store(token: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    pub fn clear() {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::cell::RefCell;

    thread_local! {
        static TOKEN: RefCell<Option<String>> = const { RefCell::new(None) };
    }

    pub fn load() -> Option<String> {
        TOKEN.with(|t| t.borrow().clone())
    }

    pub fn store(token: &str) {
        TOKEN.with(|t| *t.borrow_mut() = Some(token.to_string()));
    }

    pub fn clear() {
        TOKEN.with(|t| *t.borrow_mut() = None);
    }
}

pub use backend::{clear, load, store};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_sentinel() {
        assert!(is_demo(DEMO_TOKEN));
        assert!(!is_demo("eyJhbGciOiJIUzI1NiJ9.real"));
    }

    #[test]
    fn test_store_load_clear() {
        store("abc");
        assert_eq!(load().as_deref(), Some("abc"));
        clear();
        assert_eq!(load(), None);
    }
}
