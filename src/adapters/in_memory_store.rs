//! In-memory LearnerStore adapter.
//!
//! Reference store for hosts without a durable backend, and for tests.
//! State lives for the lifetime of the store instance; durable deployments
//! implement [`LearnerStore`] over their own backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::learner::{LearnerProfile, PreferenceProfile};
use crate::domain::memory::ConversationLog;
use crate::domain::progression::LearningProgression;
use crate::ports::LearnerStore;

#[derive(Debug, Clone, Default)]
struct UserRecord {
    profile: Option<LearnerProfile>,
    log: Option<ConversationLog>,
    progression: Option<LearningProgression>,
    preferences: Option<PreferenceProfile>,
}

/// In-memory storage for all per-user learner state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLearnerStore {
    records: Arc<RwLock<HashMap<UserId, UserRecord>>>,
}

impl InMemoryLearnerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with any stored state (useful for tests).
    pub async fn user_count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl LearnerStore for InMemoryLearnerStore {
    async fn profile(&self, user_id: &UserId) -> Result<Option<LearnerProfile>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .get(user_id)
            .and_then(|r| r.profile.clone()))
    }

    async fn put_profile(&self, profile: &LearnerProfile) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records
            .entry(profile.user_id().clone())
            .or_default()
            .profile = Some(profile.clone());
        Ok(())
    }

    async fn conversation_log(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ConversationLog>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .get(user_id)
            .and_then(|r| r.log.clone()))
    }

    async fn put_conversation_log(
        &self,
        user_id: &UserId,
        log: &ConversationLog,
    ) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.entry(user_id.clone()).or_default().log = Some(log.clone());
        Ok(())
    }

    async fn progression(
        &self,
        user_id: &UserId,
    ) -> Result<Option<LearningProgression>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .get(user_id)
            .and_then(|r| r.progression.clone()))
    }

    async fn put_progression(
        &self,
        user_id: &UserId,
        progression: &LearningProgression,
    ) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.entry(user_id.clone()).or_default().progression = Some(progression.clone());
        Ok(())
    }

    async fn preferences(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PreferenceProfile>, DomainError> {
        Ok(self
            .records
            .read()
            .await
            .get(user_id)
            .and_then(|r| r.preferences.clone()))
    }

    async fn put_preferences(
        &self,
        user_id: &UserId,
        preferences: &PreferenceProfile,
    ) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.entry(user_id.clone()).or_default().preferences = Some(preferences.clone());
        Ok(())
    }

    async fn delete_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.records.write().await.remove(user_id);
        Ok(())
    }
}
