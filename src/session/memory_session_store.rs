use crate::session::{SessionData, SessionStore};
use std::sync::Mutex;

/// Session store that keeps the session in memory only.
#[derive(Default)]
pub struct MemorySessionStore {
    data: Mutex<Option<SessionData>>,
}

impl MemorySessionStore {
    /// Creates a store pre-populated with the specified session.
    pub fn with_data(data: SessionData) -> Self {
        Self {
            data: Mutex::new(Some(data)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> anyhow::Result<Option<SessionData>> {
        Ok(self
            .data
            .lock()
            .map_err(|_| anyhow::anyhow!("Session store lock is poisoned."))?
            .clone())
    }

    fn save(&self, data: &SessionData) -> anyhow::Result<()> {
        *self
            .data
            .lock()
            .map_err(|_| anyhow::anyhow!("Session store lock is poisoned."))? = Some(data.clone());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        self.data
            .lock()
            .map_err(|_| anyhow::anyhow!("Session store lock is poisoned."))?
            .take();
        Ok(())
    }
}
