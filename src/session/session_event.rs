use crate::navigation::Route;

/// Events broadcast by the session context to every view that subscribed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Session token was rejected by the API and the session has been cleared.
    Invalidated { redirect: Route },
    /// User signed out explicitly.
    SignedOut,
}
