//! Fixed indicator vocabularies for turn analysis.
//!
//! Matching is substring containment on lowercased text, not word-boundary
//! matching. Phrase lists are ordered but order never affects counts; the
//! subject and teaching-context tables carry an explicit evaluation order
//! because downstream consumers depend on it.

use once_cell::sync::Lazy;

use crate::domain::learner::{SubjectArea, TeachingContext};

/// Phrases signalling the learner has grasped something.
pub static MASTERY: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "i understand",
        "that makes sense",
        "makes sense now",
        "i see how",
        "got it",
        "i can do",
        "now i know",
        "i've got the hang",
    ]
});

/// Phrases signalling difficulty or confusion.
pub static STRUGGLE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "struggling",
        "i'm stuck",
        "don't get",
        "confusing",
        "confused",
        "too hard",
        "i'm lost",
        "not sure how",
    ]
});

/// Phrases signalling engagement and curiosity.
pub static ENGAGEMENT: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "interesting",
        "tell me more",
        "what about",
        "can we try",
        "i'd like to",
        "let's try",
        "curious",
        "keen to",
    ]
});

/// Phrases used by learners new to a topic.
pub static NOVICE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "new to",
        "what is",
        "how do i",
        "never done",
        "just starting",
        "beginner",
        "can you explain",
        "where do i start",
    ]
});

/// Phrases used by experienced practitioners.
pub static EXPERT: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "in my experience",
        "i've found that",
        "i usually",
        "metalanguage",
        "pedagog",
        "genre theory",
        "when i teach",
        "my students",
    ]
});

/// Preference vocabulary: requests for detailed explanation.
pub static PREF_DETAILED_EXPLANATIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "explain in detail",
        "in depth",
        "more detail",
        "why does",
        "the theory",
        "background on",
    ]
});

/// Preference vocabulary: requests for practical examples.
pub static PREF_PRACTICAL_EXAMPLES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "example",
        "show me",
        "for instance",
        "in practice",
        "demonstrate",
        "sample",
    ]
});

/// Preference vocabulary: requests for stepwise guidance.
pub static PREF_STEP_BY_STEP: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "step by step",
        "walk me through",
        "one at a time",
        "first step",
        "in order",
        "checklist",
    ]
});

/// Preference vocabulary: requests for research grounding.
pub static PREF_RESEARCH_BASED: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "research",
        "evidence",
        "study",
        "literature",
        "citation",
        "peer-reviewed",
    ]
});

/// Subject keyword tables, in the fixed detection priority order
/// english > science > mathematics > history.
pub static SUBJECTS: Lazy<Vec<(SubjectArea, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            SubjectArea::English,
            vec![
                "english", "writing", "literacy", "grammar", "text type", "genre", "spelling",
                "reading comprehension",
            ],
        ),
        (
            SubjectArea::Science,
            vec![
                "science", "experiment", "hypothesis", "biology", "chemistry", "physics",
            ],
        ),
        (
            SubjectArea::Mathematics,
            vec![
                "mathematics", "maths", "math ", "algebra", "geometry", "fraction", "number line",
            ],
        ),
        (
            SubjectArea::History,
            vec![
                "history", "historical", "timeline", "ancient", "civilisation", "primary source",
            ],
        ),
    ]
});

/// Teaching-context keyword groups in their fixed evaluation order
/// {early_years, primary, secondary}.
///
/// Every matching group writes its label, so when one turn matches several
/// groups the group evaluated last wins. The order here is the contract;
/// do not rely on incidental iteration order elsewhere.
pub static TEACHING_CONTEXTS: Lazy<Vec<(TeachingContext, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            TeachingContext::EarlyYears,
            vec!["early years", "kindergarten", "preschool", "foundation stage", "prep class"],
        ),
        (
            TeachingContext::Primary,
            vec![
                "primary", "elementary", "year 3", "year 4", "year 5", "year 6",
            ],
        ),
        (
            TeachingContext::Secondary,
            vec![
                "secondary", "high school", "year 7", "year 8", "year 9", "year 10", "adolescent",
            ],
        ),
    ]
});

/// Counts total occurrences of each phrase in lowercased text.
///
/// Substring containment; non-overlapping occurrences of the same phrase
/// each count.
pub fn count_occurrences(lowercased: &str, phrases: &[&str]) -> u32 {
    phrases
        .iter()
        .map(|phrase| lowercased.matches(phrase).count() as u32)
        .sum()
}
