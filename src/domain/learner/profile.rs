//! LearnerProfile aggregate root.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Confidence, Timestamp, UserId};

use super::{ExpertiseLevel, LearningStyle, SubjectArea, TeachingContext};

/// Per-dimension confidence values.
///
/// Each value is monotonically non-decreasing over the profile's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionConfidence {
    pub expertise: Confidence,
    pub learning_style: Confidence,
    pub subject: Confidence,
    pub teaching_context: Confidence,
}

impl DimensionConfidence {
    /// Mean of the four dimension confidences.
    pub fn mean(&self) -> f32 {
        (self.expertise.value()
            + self.learning_style.value()
            + self.subject.value()
            + self.teaching_context.value())
            / 4.0
    }
}

/// LearnerProfile aggregate root.
///
/// A user-owned artifact capturing the evolving learner model across
/// conversations. Created lazily on the first update for a user key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerProfile {
    user_id: UserId,
    created_at: Timestamp,
    last_updated_at: Timestamp,
    conversation_count: u32,

    expertise_level: ExpertiseLevel,
    learning_style: LearningStyle,
    subject_area: SubjectArea,
    teaching_context: TeachingContext,

    confidence: DimensionConfidence,
}

impl LearnerProfile {
    /// Creates a fresh profile with default dimensions and 0.1 confidence
    /// on every dimension.
    pub fn new(user_id: UserId, timestamp: Timestamp) -> Self {
        Self {
            user_id,
            created_at: timestamp,
            last_updated_at: timestamp,
            conversation_count: 0,
            expertise_level: ExpertiseLevel::default(),
            learning_style: LearningStyle::default(),
            subject_area: SubjectArea::default(),
            teaching_context: TeachingContext::default(),
            confidence: DimensionConfidence::default(),
        }
    }

    // Getters
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn last_updated_at(&self) -> Timestamp {
        self.last_updated_at
    }

    pub fn conversation_count(&self) -> u32 {
        self.conversation_count
    }

    pub fn expertise_level(&self) -> ExpertiseLevel {
        self.expertise_level
    }

    pub fn learning_style(&self) -> LearningStyle {
        self.learning_style
    }

    pub fn subject_area(&self) -> SubjectArea {
        self.subject_area
    }

    pub fn teaching_context(&self) -> TeachingContext {
        self.teaching_context
    }

    pub fn confidence(&self) -> &DimensionConfidence {
        &self.confidence
    }

    /// Mutable access for the dimension updater.
    pub fn confidence_mut(&mut self) -> &mut DimensionConfidence {
        &mut self.confidence
    }

    // Dimension mutators. Gating rules live in the dimension updater; the
    // aggregate only enforces that confidences move through `Confidence`.
    pub fn set_expertise_level(&mut self, level: ExpertiseLevel) {
        self.expertise_level = level;
    }

    pub fn set_learning_style(&mut self, style: LearningStyle) {
        self.learning_style = style;
    }

    pub fn set_subject_area(&mut self, subject: SubjectArea) {
        self.subject_area = subject;
    }

    pub fn set_teaching_context(&mut self, context: TeachingContext) {
        self.teaching_context = context;
    }

    /// Records one processed conversation turn.
    pub fn record_conversation(&mut self, timestamp: Timestamp) {
        self.conversation_count += 1;
        self.last_updated_at = timestamp;
    }

    /// Builds the summary returned from the update pipeline.
    pub fn summary(&self, topics_explored: usize, learning_velocity: f32) -> ProfileSummary {
        ProfileSummary {
            user_id: self.user_id.clone(),
            conversation_count: self.conversation_count,
            expertise_level: self.expertise_level,
            learning_style: self.learning_style,
            subject_area: self.subject_area,
            teaching_context: self.teaching_context,
            overall_confidence: self.confidence.mean(),
            topics_explored,
            learning_velocity,
            last_updated_at: self.last_updated_at,
        }
    }
}

/// Read-only snapshot of a profile plus progression counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub user_id: UserId,
    pub conversation_count: u32,
    pub expertise_level: ExpertiseLevel,
    pub learning_style: LearningStyle,
    pub subject_area: SubjectArea,
    pub teaching_context: TeachingContext,
    pub overall_confidence: f32,
    pub topics_explored: usize,
    pub learning_velocity: f32,
    pub last_updated_at: Timestamp,
}
