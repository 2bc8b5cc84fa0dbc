//! Categorical dimension types for the learner model.

use serde::{Deserialize, Serialize};

/// Expertise level on an ordered ordinal scale (0..3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpertiseLevel {
    Novice,
    Developing,
    Proficient,
    Expert,
}

impl ExpertiseLevel {
    /// Ordinal index of this level (0..3).
    pub fn index(&self) -> i32 {
        match self {
            Self::Novice => 0,
            Self::Developing => 1,
            Self::Proficient => 2,
            Self::Expert => 3,
        }
    }

    /// Maps an ordinal index back to a level, clamping to [0, 3].
    pub fn from_index(index: i32) -> Self {
        match index.clamp(0, 3) {
            0 => Self::Novice,
            1 => Self::Developing,
            2 => Self::Proficient,
            _ => Self::Expert,
        }
    }

    /// Snake-case label used in synthesized contexts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Developing => "developing",
            Self::Proficient => "proficient",
            Self::Expert => "expert",
        }
    }
}

impl Default for ExpertiseLevel {
    fn default() -> Self {
        Self::Developing
    }
}

impl std::fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Preferred learning style.
///
/// `Mixed` is the unset starting value before any style signal is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    Reading,
    Mixed,
}

impl LearningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Auditory => "auditory",
            Self::Kinesthetic => "kinesthetic",
            Self::Reading => "reading",
            Self::Mixed => "mixed",
        }
    }
}

impl Default for LearningStyle {
    fn default() -> Self {
        Self::Mixed
    }
}

impl std::fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Subject context the learner operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectArea {
    English,
    Science,
    Mathematics,
    History,
    General,
}

impl SubjectArea {
    /// Fixed detection priority for downstream "first match" consumers.
    pub const DETECTION_PRIORITY: [SubjectArea; 4] = [
        SubjectArea::English,
        SubjectArea::Science,
        SubjectArea::Mathematics,
        SubjectArea::History,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Science => "science",
            Self::Mathematics => "mathematics",
            Self::History => "history",
            Self::General => "general",
        }
    }
}

impl Default for SubjectArea {
    fn default() -> Self {
        Self::General
    }
}

impl std::fmt::Display for SubjectArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Teaching stage the learner works at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeachingContext {
    EarlyYears,
    Primary,
    Secondary,
    Adult,
}

impl TeachingContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EarlyYears => "early_years",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Adult => "adult",
        }
    }
}

impl Default for TeachingContext {
    fn default() -> Self {
        Self::Primary
    }
}

impl std::fmt::Display for TeachingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
