//! Teaching-learning-cycle topics and keyword extraction.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Topic tags tracked across a learner's progression.
///
/// The named variants follow the stages of the teaching and learning cycle
/// plus two cross-cutting practice areas; `General` is the fallback when a
/// turn matches no topic vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningTopic {
    FieldBuilding,
    Modeling,
    JointConstruction,
    IndependentConstruction,
    Differentiation,
    Assessment,
    General,
}

impl LearningTopic {
    /// Canonical cycle order used for next-topic recommendations.
    pub const CYCLE_ORDER: [LearningTopic; 6] = [
        LearningTopic::FieldBuilding,
        LearningTopic::Modeling,
        LearningTopic::JointConstruction,
        LearningTopic::IndependentConstruction,
        LearningTopic::Differentiation,
        LearningTopic::Assessment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FieldBuilding => "field_building",
            Self::Modeling => "modeling",
            Self::JointConstruction => "joint_construction",
            Self::IndependentConstruction => "independent_construction",
            Self::Differentiation => "differentiation",
            Self::Assessment => "assessment",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for LearningTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keyword-to-topic vocabularies, in cycle order.
static TOPIC_KEYWORDS: Lazy<Vec<(LearningTopic, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            LearningTopic::FieldBuilding,
            vec![
                "field building",
                "building the field",
                "background knowledge",
                "shared experience",
                "build the field",
            ],
        ),
        (
            LearningTopic::Modeling,
            vec!["modeling", "modelling", "deconstruction", "model text", "mentor text"],
        ),
        (
            LearningTopic::JointConstruction,
            vec![
                "joint construction",
                "write together",
                "co-construct",
                "shared writing",
            ],
        ),
        (
            LearningTopic::IndependentConstruction,
            vec![
                "independent construction",
                "independent writing",
                "on their own",
                "independently",
            ],
        ),
        (
            LearningTopic::Differentiation,
            vec!["differentiation", "differentiate", "scaffolding", "extension task"],
        ),
        (
            LearningTopic::Assessment,
            vec!["assessment", "assess", "rubric", "marking", "feedback"],
        ),
    ]
});

/// Extracts topic tags from turn text, in fixed cycle order.
///
/// Returns an empty vec when nothing matches; callers fall back to
/// [`LearningTopic::General`] for the path sample.
pub fn extract_topics(turn_text: &str) -> Vec<LearningTopic> {
    let text = turn_text.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(topic, _)| *topic)
        .collect()
}

/// Heuristic confidence that the turn meaningfully engages its topic.
///
/// Grows with the number of matched topic vocabularies; a turn with no
/// topic keywords keeps the low base value.
pub fn topic_confidence(turn_text: &str) -> f32 {
    let matched = extract_topics(turn_text).len() as f32;
    (0.3 + 0.15 * matched).min(0.9)
}
