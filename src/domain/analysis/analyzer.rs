//! Turn analyzer trait and the keyword reference implementation.

use std::sync::Arc;

use super::complexity::{ComplexityScorer, FixedComplexity};
use super::result::{AnalysisResult, ExpertiseSignals, PreferenceSignals, RawFeatures};
use super::vocabulary;

/// Scoring strategy seam for turn analysis.
///
/// Implementations must be deterministic and side-effect-free so the update
/// pipeline can run them before any state mutation. Swapping this for a
/// statistical analyzer must not touch the pipeline or its invariants.
pub trait TurnAnalyzer: Send + Sync {
    /// Extracts signal counts and tags from one turn's text.
    ///
    /// Empty or whitespace-only text yields the all-zero result, never an
    /// error.
    fn analyze(&self, turn_text: &str) -> AnalysisResult;
}

/// Reference analyzer: substring containment against fixed vocabularies.
pub struct KeywordAnalyzer {
    complexity: Arc<dyn ComplexityScorer>,
}

impl KeywordAnalyzer {
    pub fn new() -> Self {
        Self {
            complexity: Arc::new(FixedComplexity::default()),
        }
    }

    /// Uses a custom complexity scorer instead of the fixed default.
    pub fn with_complexity(complexity: Arc<dyn ComplexityScorer>) -> Self {
        Self { complexity }
    }
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnAnalyzer for KeywordAnalyzer {
    fn analyze(&self, turn_text: &str) -> AnalysisResult {
        if turn_text.trim().is_empty() {
            return AnalysisResult::default();
        }

        let text = turn_text.to_lowercase();
        let count = |phrases: &[&str]| vocabulary::count_occurrences(&text, phrases);

        let subject_tags = vocabulary::SUBJECTS
            .iter()
            .filter(|(_, keywords)| count(keywords) > 0)
            .map(|(subject, _)| *subject)
            .collect();

        AnalysisResult {
            mastery_count: count(&vocabulary::MASTERY),
            struggle_count: count(&vocabulary::STRUGGLE),
            engagement_count: count(&vocabulary::ENGAGEMENT),
            preference_signals: PreferenceSignals {
                detailed_explanations: count(&vocabulary::PREF_DETAILED_EXPLANATIONS),
                practical_examples: count(&vocabulary::PREF_PRACTICAL_EXAMPLES),
                step_by_step: count(&vocabulary::PREF_STEP_BY_STEP),
                research_based: count(&vocabulary::PREF_RESEARCH_BASED),
            },
            expertise_signals: ExpertiseSignals {
                novice_count: count(&vocabulary::NOVICE),
                expert_count: count(&vocabulary::EXPERT),
                complexity: self.complexity.score(turn_text),
            },
            subject_tags,
            raw: RawFeatures {
                char_length: turn_text.chars().count(),
                question_count: turn_text.chars().filter(|c| *c == '?').count() as u32,
            },
        }
    }
}
