//! Typed output of turn analysis.

use serde::{Deserialize, Serialize};

use crate::domain::learner::SubjectArea;

/// Counts for the four per-category preference vocabularies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSignals {
    pub detailed_explanations: u32,
    pub practical_examples: u32,
    pub step_by_step: u32,
    pub research_based: u32,
}

/// Expertise indicators extracted from one turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpertiseSignals {
    pub novice_count: u32,
    pub expert_count: u32,
    /// Language-complexity score in [0, 1], produced by the pluggable
    /// complexity scorer.
    pub complexity: f32,
}

/// Raw surface features of the turn text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFeatures {
    pub char_length: usize,
    pub question_count: u32,
}

/// Snapshot of all signals extracted from one conversational turn.
///
/// `Default` is the all-zero result produced for empty or missing text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub mastery_count: u32,
    pub struggle_count: u32,
    pub engagement_count: u32,
    pub preference_signals: PreferenceSignals,
    pub expertise_signals: ExpertiseSignals,
    /// Detected subject tags in the fixed priority order
    /// english > science > mathematics > history.
    pub subject_tags: Vec<SubjectArea>,
    pub raw: RawFeatures,
}

impl AnalysisResult {
    /// First detected subject by priority order, if any.
    pub fn first_subject(&self) -> Option<SubjectArea> {
        self.subject_tags.first().copied()
    }

    /// True when no signal of any kind was extracted.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
