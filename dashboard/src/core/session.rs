//! # Session Store
//!
//! In-memory holder for the current session credentials (access token,
//! refresh token, device id). The store is owned by the API client and
//! shared with async tasks behind an `Arc`; there is no ambient global.

use parking_lot::RwLock;
use shared::dto::auth::SessionData;

/// Thread-safe holder for the current session credentials.
///
/// Writes are last-write-wins: when several in-flight calls refresh the same
/// expired token, whichever refresh completes last is the one that sticks.
/// There is no deduplication of concurrent refreshes.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<SessionData>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the credentials as of this instant.
    pub fn snapshot(&self) -> SessionData {
        self.inner.read().clone()
    }

    /// Replace all three credentials at once.
    pub fn set(&self, session: SessionData) {
        *self.inner.write() = session;
    }

    /// Drop all credentials (logout).
    pub fn clear(&self) {
        *self.inner.write() = SessionData::default();
    }

    /// Whether an access token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        !self.inner.read().access_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(tag: &str) -> SessionData {
        SessionData {
            access_token: format!("access-{}", tag),
            refresh_token: format!("refresh-{}", tag),
            device_id: format!("device-{}", tag),
        }
    }

    #[test]
    fn test_set_and_snapshot() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());

        store.set(session("1"));
        assert!(store.is_authenticated());
        assert_eq!(store.snapshot().access_token, "access-1");
    }

    #[test]
    fn test_clear() {
        let store = SessionStore::new();
        store.set(session("1"));
        store.clear();
        assert!(!store.is_authenticated());
        assert_eq!(store.snapshot(), SessionData::default());
    }

    #[test]
    fn test_last_write_wins() {
        let store = SessionStore::new();
        store.set(session("1"));
        store.set(session("2"));
        assert_eq!(store.snapshot().access_token, "access-2");
    }
}
