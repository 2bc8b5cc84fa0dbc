//! PreferenceProfile - weighted content/interaction/difficulty preferences.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalysisResult;

/// Content types assumed before any preference signal is observed.
pub const DEFAULT_CONTENT_TYPES: [&str; 2] = ["explanatory", "practical"];

/// Weight added per observed preference signal occurrence.
const SIGNAL_WEIGHT: f32 = 0.1;

/// Per-category preference weights for one learner.
///
/// Weights accumulate from analyzer preference signals; reads fall back to
/// [`DEFAULT_CONTENT_TYPES`] while no signal has been observed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    content: BTreeMap<String, f32>,
    interaction: BTreeMap<String, f32>,
    difficulty: BTreeMap<String, f32>,
}

impl PreferenceProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reinforces preference weights from one turn's analysis.
    pub fn reinforce(&mut self, analysis: &AnalysisResult) {
        let signals = &analysis.preference_signals;
        Self::bump(&mut self.content, "explanatory", signals.detailed_explanations);
        Self::bump(&mut self.content, "practical", signals.practical_examples);
        Self::bump(&mut self.content, "research", signals.research_based);
        Self::bump(&mut self.interaction, "guided", signals.step_by_step);
    }

    fn bump(map: &mut BTreeMap<String, f32>, key: &str, count: u32) {
        if count == 0 {
            return;
        }
        *map.entry(key.to_string()).or_insert(0.0) += SIGNAL_WEIGHT * count as f32;
    }

    /// Content types ordered by accumulated weight, heaviest first.
    ///
    /// Ties break alphabetically via the underlying BTreeMap order. Returns
    /// the fixed defaults while no content preference has been observed.
    pub fn preferred_content_types(&self) -> Vec<String> {
        if self.content.is_empty() {
            return DEFAULT_CONTENT_TYPES.iter().map(|s| s.to_string()).collect();
        }
        let mut ranked: Vec<(&String, &f32)> = self.content.iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked.into_iter().take(2).map(|(k, _)| k.clone()).collect()
    }

    pub fn content_weights(&self) -> &BTreeMap<String, f32> {
        &self.content
    }

    pub fn interaction_weights(&self) -> &BTreeMap<String, f32> {
        &self.interaction
    }

    pub fn difficulty_weights(&self) -> &BTreeMap<String, f32> {
        &self.difficulty
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.interaction.is_empty() && self.difficulty.is_empty()
    }
}
