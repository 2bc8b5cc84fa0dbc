//! Pluggable language-complexity scoring.

/// Strategy for scoring language complexity of a turn in [0, 1].
///
/// The engine default is [`FixedComplexity`], the constant the dimension
/// update weights were tuned against. [`LexicalComplexity`] is a real
/// surface metric for hosts that want complexity to vary with the text.
pub trait ComplexityScorer: Send + Sync {
    fn score(&self, text: &str) -> f32;
}

/// Constant complexity score.
#[derive(Debug, Clone, Copy)]
pub struct FixedComplexity {
    score: f32,
}

impl FixedComplexity {
    pub fn new(score: f32) -> Self {
        Self {
            score: score.clamp(0.0, 1.0),
        }
    }
}

impl Default for FixedComplexity {
    fn default() -> Self {
        Self { score: 0.75 }
    }
}

impl ComplexityScorer for FixedComplexity {
    fn score(&self, text: &str) -> f32 {
        if text.trim().is_empty() {
            0.0
        } else {
            self.score
        }
    }
}

/// Surface-level lexical complexity: mean sentence length blended with
/// vocabulary diversity (type-token ratio).
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalComplexity;

impl LexicalComplexity {
    /// Sentence length at which the length component saturates.
    const SATURATION_WORDS: f32 = 25.0;
}

impl ComplexityScorer for LexicalComplexity {
    fn score(&self, text: &str) -> f32 {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return 0.0;
        }

        let sentence_count = text
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .count()
            .max(1);
        let mean_sentence_len = words.len() as f32 / sentence_count as f32;
        let length_component = (mean_sentence_len / Self::SATURATION_WORDS).min(1.0);

        let distinct: std::collections::HashSet<String> =
            words.iter().map(|w| w.to_lowercase()).collect();
        let diversity = distinct.len() as f32 / words.len() as f32;

        (0.6 * length_component + 0.4 * diversity).clamp(0.0, 1.0)
    }
}
