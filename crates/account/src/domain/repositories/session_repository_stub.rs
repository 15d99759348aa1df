use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::domain::value_objects::{SessionToken, SubjectId};

#[derive(Default)]
pub struct SessionRepositoryStub {
    pub sessions: Arc<Mutex<HashMap<SessionToken, Session>>>,
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl SessionRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_session(&self, session: Session) {
        self.sessions.lock().unwrap().insert(session.token(), session);
    }

    pub fn count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryStub {
    async fn save(&self, session: &Session) -> Result<()> {
        self.check_error()?;
        self.add_session(session.clone());
        Ok(())
    }

    async fn find(&self, token: &SessionToken) -> Result<Option<Session>> {
        self.check_error()?;
        Ok(self.sessions.lock().unwrap().get(token).cloned())
    }

    async fn delete(&self, token: &SessionToken) -> Result<()> {
        self.check_error()?;
        self.sessions.lock().unwrap().remove(token);
        Ok(())
    }

    async fn delete_all_for(&self, subject_id: &SubjectId) -> Result<()> {
        self.check_error()?;
        self.sessions.lock().unwrap().retain(|_, s| s.subject_id() != subject_id);
        Ok(())
    }
}
