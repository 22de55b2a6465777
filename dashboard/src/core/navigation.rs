//! # Navigation Capability
//!
//! When a token refresh fails the client has to send the user back to the
//! login screen. What "send" means depends on the host: a desktop shell
//! swaps screens, an embedded webview changes location, a headless tool can
//! only log. The capability is injected so the client never has to know.

/// Capability to move the user to another route.
pub trait Navigator: Send + Sync {
    /// Send the user to `route`.
    fn redirect(&self, route: &str);
}

/// Default navigator for headless contexts: records the intent in the log.
#[derive(Debug, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn redirect(&self, route: &str) {
        tracing::warn!(route = %route, "session could not be recovered, redirect requested");
    }
}
