use crate::domain::entities::{AccountId, Session, Vacation};
use crate::domain::errors::DomainResult;
use crate::domain::ports::session_repository::SessionRepository;
use crate::domain::ports::vacation_repository::VacationRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of VacationRepository using a HashMap
#[derive(Clone, Default)]
pub struct InMemoryVacationRepository {
    vacations: Arc<RwLock<HashMap<AccountId, Vacation>>>,
}

impl InMemoryVacationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VacationRepository for InMemoryVacationRepository {
    async fn retrieve_vacation(&self, account_id: &AccountId) -> DomainResult<Vacation> {
        let vacations = self.vacations.read().await;
        Ok(vacations.get(account_id).cloned().unwrap_or_default())
    }

    async fn modify_vacation(&self, account_id: &AccountId, vacation: &Vacation) -> DomainResult<()> {
        let mut vacations = self.vacations.write().await;
        vacations.insert(account_id.clone(), vacation.clone());
        Ok(())
    }
}

/// In-memory implementation of SessionRepository keyed by token
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create_session(&self, session: &Session) -> DomainResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session.clone());
        Ok(())
    }

    async fn get_session_by_token(&self, token: &str) -> DomainResult<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token).cloned())
    }

    async fn delete_session(&self, token: &str) -> DomainResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
        Ok(())
    }
}
