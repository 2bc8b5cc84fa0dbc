//! LearnerStore port - persistence seam for the four per-user entities.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::learner::{LearnerProfile, PreferenceProfile};
use crate::domain::memory::ConversationLog;
use crate::domain::progression::LearningProgression;

/// Storage for per-user learner state, partitioned by user key.
///
/// The engine owns a store instance; no global state. Each entity kind is
/// fetched and stored independently so a durable backend can map them to
/// separate keys or tables. Absent entities mean the user is unknown;
/// entities are created lazily by the update pipeline, never by the store.
#[async_trait]
pub trait LearnerStore: Send + Sync {
    async fn profile(&self, user_id: &UserId) -> Result<Option<LearnerProfile>, DomainError>;

    async fn put_profile(&self, profile: &LearnerProfile) -> Result<(), DomainError>;

    async fn conversation_log(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ConversationLog>, DomainError>;

    async fn put_conversation_log(
        &self,
        user_id: &UserId,
        log: &ConversationLog,
    ) -> Result<(), DomainError>;

    async fn progression(
        &self,
        user_id: &UserId,
    ) -> Result<Option<LearningProgression>, DomainError>;

    async fn put_progression(
        &self,
        user_id: &UserId,
        progression: &LearningProgression,
    ) -> Result<(), DomainError>;

    async fn preferences(
        &self,
        user_id: &UserId,
    ) -> Result<Option<PreferenceProfile>, DomainError>;

    async fn put_preferences(
        &self,
        user_id: &UserId,
        preferences: &PreferenceProfile,
    ) -> Result<(), DomainError>;

    /// Removes all four entities for a user (privacy compliance).
    async fn delete_user(&self, user_id: &UserId) -> Result<(), DomainError>;
}
