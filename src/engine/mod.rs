//! LearnerEngine - orchestration of the per-turn update pipeline.
//!
//! One engine instance owns a store and an analyzer and serializes updates
//! per user; reads run without coordination and may observe a torn view
//! while an update for the same user is in flight.

mod dimension_updater;
mod progression_tracker;
mod synthesizer;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::domain::analysis::TurnAnalyzer;
use crate::domain::context::{
    CrossConversationContext, LearnerInsight, PersonalizedContext, RecommendationSet,
    Recommendations,
};
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::learner::{LearnerProfile, ProfileSummary};
use crate::domain::memory::LogEntry;
use crate::domain::progression::LearningTopic;
use crate::ports::LearnerStore;

/// Result of one successful model update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelUpdate {
    pub personalized_context: PersonalizedContext,
    pub user_insights: Vec<LearnerInsight>,
    pub profile_summary: ProfileSummary,
}

/// Per-user learner-modeling engine.
pub struct LearnerEngine {
    store: Arc<dyn LearnerStore>,
    analyzer: Arc<dyn TurnAnalyzer>,
    config: EngineConfig,
    user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl LearnerEngine {
    pub fn new(store: Arc<dyn LearnerStore>, analyzer: Arc<dyn TurnAnalyzer>) -> Self {
        Self::with_config(store, analyzer, EngineConfig::default())
    }

    pub fn with_config(
        store: Arc<dyn LearnerStore>,
        analyzer: Arc<dyn TurnAnalyzer>,
        config: EngineConfig,
    ) -> Self {
        Self {
            store,
            analyzer,
            config,
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Processes one conversational turn, stamping it with the current
    /// wall-clock time.
    pub async fn update_user_model(
        &self,
        user_id: &UserId,
        user_input: &str,
        system_response: &str,
        metadata: BTreeMap<String, String>,
    ) -> Result<ModelUpdate, DomainError> {
        self.update_user_model_at(user_id, user_input, system_response, metadata, Timestamp::now())
            .await
    }

    /// Processes one conversational turn at an explicit timestamp, for
    /// hosts that stamp turns upstream.
    ///
    /// All analysis runs before any state is touched. Mutations are then
    /// applied in the order profile, preferences, progression, memory; a
    /// store error stops the pipeline and leaves earlier writes in place,
    /// so callers must not assume a failed update changed nothing, and a
    /// replayed turn appends duplicate memory and progression entries.
    pub async fn update_user_model_at(
        &self,
        user_id: &UserId,
        user_input: &str,
        system_response: &str,
        metadata: BTreeMap<String, String>,
        now: Timestamp,
    ) -> Result<ModelUpdate, DomainError> {
        let analysis = self.analyzer.analyze(user_input);
        debug!(
            user = %user_id,
            novice = analysis.expertise_signals.novice_count,
            expert = analysis.expertise_signals.expert_count,
            subjects = analysis.subject_tags.len(),
            "turn analyzed"
        );

        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;

        let mut profile = match self.store.profile(user_id).await? {
            Some(profile) => profile,
            None => {
                info!(user = %user_id, "creating learner profile");
                LearnerProfile::new(user_id.clone(), now)
            }
        };
        dimension_updater::apply(&mut profile, &analysis, user_input);
        profile.record_conversation(now);
        self.store.put_profile(&profile).await?;

        let mut preferences = self.store.preferences(user_id).await?.unwrap_or_default();
        preferences.reinforce(&analysis);
        self.store.put_preferences(user_id, &preferences).await?;

        let mut progression = self.store.progression(user_id).await?.unwrap_or_default();
        progression_tracker::record(&mut progression, user_input, now, &self.config.progression);
        self.store.put_progression(user_id, &progression).await?;

        let mut log = self.store.conversation_log(user_id).await?.unwrap_or_default();
        log.append(
            LogEntry::new(now, user_input, system_response, metadata, analysis),
            now,
            &self.config.memory.long_term,
        );
        self.store.put_conversation_log(user_id, &log).await?;

        let personalized_context = synthesizer::personalized_context(
            &profile,
            Some(&progression),
            Some(&preferences),
            Some(&log),
            &self.config.memory,
            now,
        );
        let user_insights = personalized_context.insights.clone();
        let profile_summary = profile.summary(
            progression.topics_explored().len(),
            progression.learning_velocity(),
        );

        Ok(ModelUpdate {
            personalized_context,
            user_insights,
            profile_summary,
        })
    }

    /// Personalization snapshot for one user; unknown users get the fixed
    /// default context.
    pub async fn personalized_context(
        &self,
        user_id: &UserId,
    ) -> Result<PersonalizedContext, DomainError> {
        let Some(profile) = self.store.profile(user_id).await? else {
            return Ok(PersonalizedContext::default_for_unknown());
        };
        let progression = self.store.progression(user_id).await?;
        let preferences = self.store.preferences(user_id).await?;
        let log = self.store.conversation_log(user_id).await?;

        Ok(synthesizer::personalized_context(
            &profile,
            progression.as_ref(),
            preferences.as_ref(),
            log.as_ref(),
            &self.config.memory,
            Timestamp::now(),
        ))
    }

    /// Recommendation bundle for one user; unknown users get the fixed
    /// default bundle.
    pub async fn personalized_recommendations(
        &self,
        user_id: &UserId,
        current_topic: Option<LearningTopic>,
    ) -> Result<RecommendationSet, DomainError> {
        let Some(profile) = self.store.profile(user_id).await? else {
            return Ok(RecommendationSet {
                user_id: user_id.clone(),
                recommendations: Recommendations::default_bundle(),
                confidence_score: 0.1,
                based_on: vec!["defaults".to_string()],
            });
        };
        let progression = self.store.progression(user_id).await?;

        let mut based_on = vec!["profile".to_string()];
        if progression.is_some() {
            based_on.push("progression".to_string());
        }
        if let Some(topic) = current_topic {
            based_on.push(format!("current_topic:{topic}"));
        }

        Ok(RecommendationSet {
            user_id: user_id.clone(),
            recommendations: synthesizer::recommendations(
                &profile,
                progression.as_ref(),
                current_topic,
            ),
            confidence_score: profile.confidence().mean(),
            based_on,
        })
    }

    /// Relevant history for the current input; users with no stored memory
    /// get the unavailable sentinel.
    pub async fn cross_conversation_context(
        &self,
        user_id: &UserId,
        current_input: &str,
        max_context: Option<usize>,
    ) -> Result<CrossConversationContext, DomainError> {
        let Some(log) = self.store.conversation_log(user_id).await? else {
            return Ok(CrossConversationContext::unavailable());
        };
        if log.is_empty() {
            return Ok(CrossConversationContext::unavailable());
        }

        let max = max_context.unwrap_or(self.config.max_cross_context);
        Ok(synthesizer::cross_conversation(
            &log,
            current_input,
            max,
            Timestamp::now(),
        ))
    }

    /// Removes all stored state for a user.
    ///
    /// Takes the user's update lock first, so an in-flight update for the
    /// same user finishes its writes before the wipe and cannot re-create
    /// state afterwards.
    pub async fn delete_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        let lock = self.user_lock(user_id).await;
        let _guard = lock.lock().await;

        self.store.delete_user(user_id).await?;
        self.user_locks.lock().await.remove(user_id);
        info!(user = %user_id, "learner state deleted");
        Ok(())
    }

    async fn user_lock(&self, user_id: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks
            .entry(user_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
