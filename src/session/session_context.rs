use crate::{
    api::Api,
    error::Error as PhotoQuestError,
    navigation::Route,
    session::{MemorySessionStore, SessionData, SessionEvent, SessionStore},
    users::{User, UserRole},
};
use anyhow::bail;
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

/// Capacity of the session events channel, subscribers that lag behind lose the oldest events.
const SESSION_EVENTS_CAPACITY: usize = 16;

/// Session shared between the API client and all views, replaces ambient local storage lookups.
#[derive(Clone)]
pub struct SessionContext {
    data: Arc<RwLock<SessionData>>,
    store: Arc<dyn SessionStore>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionContext {
    /// Creates session context restoring the session saved in the specified store.
    pub fn load(store: Arc<dyn SessionStore>) -> anyhow::Result<Self> {
        let data = store.load()?.unwrap_or_default();
        let (events, _) = broadcast::channel(SESSION_EVENTS_CAPACITY);
        Ok(Self {
            data: Arc::new(RwLock::new(data)),
            store,
            events,
        })
    }

    /// Creates session context that isn't persisted anywhere.
    pub fn in_memory(data: SessionData) -> Self {
        let (events, _) = broadcast::channel(SESSION_EVENTS_CAPACITY);
        Self {
            data: Arc::new(RwLock::new(data.clone())),
            store: Arc::new(MemorySessionStore::with_data(data)),
            events,
        }
    }

    /// Returns session token, if any.
    pub async fn token(&self) -> Option<String> {
        self.data.read().await.token.clone()
    }

    /// Returns role of the signed in user, if any.
    pub async fn role(&self) -> Option<UserRole> {
        self.data.read().await.role
    }

    /// Returns cached profile of the signed in user, if any.
    pub async fn user(&self) -> Option<User> {
        self.data.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.data.read().await.token.is_some()
    }

    /// Subscribes to the session events.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Starts a new session with the token and role issued at login, dropping cached user.
    pub async fn sign_in(&self, token: String, role: UserRole) -> anyhow::Result<()> {
        let mut data = self.data.write().await;
        *data = SessionData {
            token: Some(token),
            role: Some(role),
            user: None,
        };
        self.store.save(&data)
    }

    /// Replaces cached profile of the signed in user.
    pub async fn set_user(&self, user: User) -> anyhow::Result<()> {
        let mut data = self.data.write().await;
        data.user = Some(user);
        self.store.save(&data)
    }

    /// Re-fetches the profile of the signed in user and updates the cached one.
    pub async fn refresh(&self, api: &Api) -> anyhow::Result<User> {
        if !self.is_authenticated().await {
            self.clear().await?;
            bail!(PhotoQuestError::rejected("No token found"));
        }

        let user = api.profile().get().await?;
        self.set_user(user.clone()).await?;

        Ok(user)
    }

    /// Clears the session rejected by the API and asks subscribed views to redirect to login.
    pub async fn invalidate(&self) -> anyhow::Result<()> {
        tracing::warn!("Session token was rejected, invalidating session.");
        self.clear().await?;

        // No subscribers isn't an error, there may be no views alive.
        let _ = self.events.send(SessionEvent::Invalidated {
            redirect: Route::Login { email: None },
        });

        Ok(())
    }

    /// Clears the session at the user request.
    pub async fn sign_out(&self) -> anyhow::Result<()> {
        self.clear().await?;
        let _ = self.events.send(SessionEvent::SignedOut);
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.data.write().await = SessionData::default();
        self.store.clear()
    }
}
