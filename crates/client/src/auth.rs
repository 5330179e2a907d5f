//! Bearer credential storage.

use std::sync::{PoisonError, RwLock};

/// The bearer token shared by every request and subscription of a client.
///
/// Replacing the token affects requests started afterwards. Last write wins.
#[derive(Debug, Default)]
pub struct Credentials {
    token: RwLock<Option<String>>,
}

impl Credentials {
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: RwLock::new(normalize(token)),
        }
    }

    /// Replace the token. `None` or an empty string clears it.
    pub fn set(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = normalize(token);
    }

    /// Current token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `Authorization` header value for the current token.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }
}

fn normalize(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let creds = Credentials::new(Some("first".to_string()));
        assert_eq!(creds.bearer().as_deref(), Some("Bearer first"));

        creds.set(Some("second".to_string()));
        assert_eq!(creds.token().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear() {
        let creds = Credentials::new(Some("tok".to_string()));
        creds.set(None);
        assert!(creds.bearer().is_none());

        creds.set(Some("tok".to_string()));
        creds.set(Some(String::new()));
        assert!(creds.token().is_none());
    }
}
