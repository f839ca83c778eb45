use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{Context, error::Result};

/// A stored submission waiting to be processed by a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub context: Context,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            context: Context::new(),
        }
    }
}

/// Trait for storing and retrieving sessions
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn save(&self, session: Session) -> Result<()>;

    async fn get(&self, id: &str) -> Result<Option<Session>>;

    /// Remove the session and return it. Entries are single-use: a second
    /// `take` of the same id yields `None`.
    async fn take(&self, id: &str) -> Result<Option<Session>>;

    async fn delete(&self, id: &str) -> Result<()>;
}

/// In-memory implementation of SessionStorage with optional TTL expiry
pub struct InMemorySessionStorage {
    sessions: DashMap<String, Session>,
    ttl: Option<Duration>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
            ttl: None,
        }
    }

    /// Entries older than `ttl` are treated as absent.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl: Some(ttl),
        }
    }

    fn is_expired(&self, session: &Session) -> bool {
        match self.ttl {
            Some(ttl) => Utc::now()
                .signed_duration_since(session.created_at)
                .to_std()
                .map(|age| age > ttl)
                .unwrap_or(false),
            None => false,
        }
    }
}

impl Default for InMemorySessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn save(&self, session: Session) -> Result<()> {
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Session>> {
        match self.sessions.get(id) {
            Some(entry) => {
                if self.is_expired(&entry) {
                    drop(entry);
                    self.sessions.remove(id);
                    Ok(None)
                } else {
                    Ok(Some(entry.clone()))
                }
            }
            None => Ok(None),
        }
    }

    async fn take(&self, id: &str) -> Result<Option<Session>> {
        match self.sessions.remove(id) {
            Some((_, session)) if !self.is_expired(&session) => Ok(Some(session)),
            _ => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.sessions.remove(id);
        Ok(())
    }
}
