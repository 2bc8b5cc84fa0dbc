//! Output types produced by personalized-context synthesis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::learner::{
    DimensionConfidence, ExpertiseLevel, LearningStyle, SubjectArea, TeachingContext,
};
use crate::domain::progression::LearningTopic;

/// What kind of observation an insight carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Expertise,
    LearningStyle,
    Progression,
}

/// Natural-language observation about the learner, gated by confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerInsight {
    pub kind: InsightKind,
    pub message: String,
    pub confidence: f32,
}

/// Personalization snapshot assembled from profile, progression and memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedContext {
    pub expertise_level: ExpertiseLevel,
    pub learning_style: LearningStyle,
    pub subject_area: SubjectArea,
    pub teaching_context: TeachingContext,
    pub confidence: DimensionConfidence,
    pub known_topics: Vec<LearningTopic>,
    pub learning_velocity: f32,
    pub preferred_content_types: Vec<String>,
    /// One-line summary of recent memory; "none" when no history exists.
    pub conversation_history: String,
    pub insights: Vec<LearnerInsight>,
}

impl PersonalizedContext {
    /// Fixed default context for users with no profile. Never fails.
    pub fn default_for_unknown() -> Self {
        Self {
            expertise_level: ExpertiseLevel::Developing,
            learning_style: LearningStyle::Mixed,
            subject_area: SubjectArea::General,
            teaching_context: TeachingContext::Primary,
            confidence: DimensionConfidence::default(),
            known_topics: Vec::new(),
            learning_velocity: 0.0,
            preferred_content_types: crate::domain::learner::DEFAULT_CONTENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            conversation_history: "none".to_string(),
            insights: Vec::new(),
        }
    }
}

/// Concrete suggestions for the next stretch of tutoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub next_topics: Vec<LearningTopic>,
    pub learning_path: String,
    pub content_type: String,
    pub interaction_style: String,
    pub difficulty_level: String,
}

impl Recommendations {
    /// Fixed bundle returned for users with no recorded state.
    pub fn default_bundle() -> Self {
        Self {
            next_topics: vec![
                LearningTopic::FieldBuilding,
                LearningTopic::Modeling,
                LearningTopic::JointConstruction,
            ],
            learning_path: "tlc_basics".to_string(),
            content_type: "mixed".to_string(),
            interaction_style: "supportive".to_string(),
            difficulty_level: "intermediate".to_string(),
        }
    }
}

/// Recommendation response for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub user_id: UserId,
    pub recommendations: Recommendations,
    pub confidence_score: f32,
    pub based_on: Vec<String>,
}

/// How the current input relates to stored history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Continuity {
    /// No stored history for this user.
    NoHistory,
    /// Nothing in history relates to the current input.
    NewTopic,
    /// Related material exists but is not recent.
    ReturningTopic,
    /// The current input continues a recent thread.
    ContinuingThread,
}

/// One history entry selected for cross-conversation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextItem {
    pub timestamp: Timestamp,
    pub topic: LearningTopic,
    pub user_progress: String,
    pub key_learnings: Vec<String>,
    pub unresolved_topics: Vec<String>,
    pub relevance_score: f32,
}

/// Cross-conversation context bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossConversationContext {
    pub available: bool,
    pub context: Vec<ContextItem>,
    pub continuity: Continuity,
    pub suggestions: Vec<String>,
}

impl CrossConversationContext {
    /// Sentinel for users with no stored memory. Never fails.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            context: Vec::new(),
            continuity: Continuity::NoHistory,
            suggestions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_matches_contract() {
        let ctx = PersonalizedContext::default_for_unknown();
        assert_eq!(ctx.expertise_level, ExpertiseLevel::Developing);
        assert_eq!(ctx.learning_style, LearningStyle::Mixed);
        assert_eq!(ctx.subject_area, SubjectArea::General);
        assert_eq!(ctx.teaching_context, TeachingContext::Primary);
        assert!(ctx.known_topics.is_empty());
        assert_eq!(ctx.conversation_history, "none");
    }

    #[test]
    fn default_bundle_matches_contract() {
        let bundle = Recommendations::default_bundle();
        assert_eq!(
            bundle.next_topics,
            vec![
                LearningTopic::FieldBuilding,
                LearningTopic::Modeling,
                LearningTopic::JointConstruction
            ]
        );
        assert_eq!(bundle.learning_path, "tlc_basics");
        assert_eq!(bundle.content_type, "mixed");
        assert_eq!(bundle.interaction_style, "supportive");
        assert_eq!(bundle.difficulty_level, "intermediate");
    }

    #[test]
    fn unavailable_context_is_the_empty_sentinel() {
        let ctx = CrossConversationContext::unavailable();
        assert!(!ctx.available);
        assert!(ctx.context.is_empty());
        assert_eq!(ctx.continuity, Continuity::NoHistory);
    }
}
