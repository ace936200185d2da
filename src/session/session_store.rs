use crate::session::SessionData;

/// Storage that persists the client-side session between runs.
pub trait SessionStore: Send + Sync {
    /// Loads previously saved session, if any.
    fn load(&self) -> anyhow::Result<Option<SessionData>>;

    /// Replaces the saved session with the specified one.
    fn save(&self, data: &SessionData) -> anyhow::Result<()>;

    /// Removes the saved session.
    fn clear(&self) -> anyhow::Result<()>;
}
