// crates/account/src/infrastructure/memory/memory_session_repository.rs

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::domain::value_objects::{SessionToken, SubjectId};

/// Sessions du processus. Chaque `save` purge les sessions expirées,
/// la map reste bornée par le nombre de sessions actives.
pub struct MemorySessionRepository {
    sessions: RwLock<HashMap<SessionToken, Session>>,
    clock: Arc<dyn Clock>,
}

impl MemorySessionRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            clock,
        }
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn save(&self, session: &Session) -> Result<()> {
        let now = self.clock.now();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "🧹 Expired sessions evicted");
        }

        sessions.insert(session.token(), session.clone());
        Ok(())
    }

    async fn find(&self, token: &SessionToken) -> Result<Option<Session>> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn delete(&self, token: &SessionToken) -> Result<()> {
        self.sessions.write().await.remove(token);
        Ok(())
    }

    async fn delete_all_for(&self, subject_id: &SubjectId) -> Result<()> {
        self.sessions.write().await.retain(|_, s| s.subject_id() != subject_id);
        Ok(())
    }
}
