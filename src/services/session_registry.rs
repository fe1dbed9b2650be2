use crate::error::ApiError;
use crate::models::{PaletteSession, SessionId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Trait for session state storage
#[async_trait]
pub trait SessionRegistry: Send + Sync {
    /// Store a freshly created session
    async fn insert(&self, session: PaletteSession) -> Result<(), ApiError>;

    /// Find a session by id
    async fn find(&self, id: &SessionId) -> Result<Option<PaletteSession>, ApiError>;

    /// Write back a mutated session
    async fn update(&self, session: PaletteSession) -> Result<(), ApiError>;

    /// Drop a session; returns whether one existed
    async fn remove(&self, id: &SessionId) -> Result<bool, ApiError>;
}

/// In-memory session storage
///
/// Sessions live for the process lifetime unless explicitly removed.
/// Each session is independent state, so the map-level lock is the only
/// synchronization needed.
pub struct InMemorySessions {
    sessions: Arc<RwLock<HashMap<SessionId, PaletteSession>>>,
}

impl InMemorySessions {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of live sessions (for the status endpoint and tests)
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessions {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRegistry for InMemorySessions {
    async fn insert(&self, session: PaletteSession) -> Result<(), ApiError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn find(&self, id: &SessionId) -> Result<Option<PaletteSession>, ApiError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn update(&self, session: PaletteSession) -> Result<(), ApiError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn remove(&self, id: &SessionId) -> Result<bool, ApiError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(id).is_some())
    }
}
