//! Builds personalized context, recommendations and cross-conversation
//! context from stored learner state.

use std::collections::BTreeSet;

use crate::config::MemoryConfig;
use crate::domain::context::{
    ContextItem, Continuity, CrossConversationContext, InsightKind, LearnerInsight,
    PersonalizedContext, Recommendations,
};
use crate::domain::foundation::Timestamp;
use crate::domain::learner::{ExpertiseLevel, LearnerProfile, LearningStyle, PreferenceProfile};
use crate::domain::memory::{ConversationLog, LogEntry};
use crate::domain::progression::{extract_topics, LearningProgression, LearningTopic};

/// Expertise insight threshold.
const EXPERTISE_INSIGHT_GATE: f32 = 0.7;
/// Learning-style insight threshold.
const STYLE_INSIGHT_GATE: f32 = 0.6;
/// Progression insight fires past this many explored topics, at a fixed
/// confidence.
const PROGRESSION_INSIGHT_TOPICS: usize = 3;
const PROGRESSION_INSIGHT_CONFIDENCE: f32 = 0.8;

/// Relevance above which a recent entry continues the current thread.
const CONTINUING_RELEVANCE: f32 = 0.5;
/// Relevance above which history counts as a returning topic.
const RETURNING_RELEVANCE: f32 = 0.3;
/// An entry this recent can continue a thread.
const RECENT_THREAD_MILLIS: i64 = 24 * 3_600 * 1_000;

/// Assembles the personalization snapshot for one known learner.
pub fn personalized_context(
    profile: &LearnerProfile,
    progression: Option<&LearningProgression>,
    preferences: Option<&PreferenceProfile>,
    log: Option<&ConversationLog>,
    memory: &MemoryConfig,
    now: Timestamp,
) -> PersonalizedContext {
    let known_topics: Vec<LearningTopic> = progression
        .map(|p| p.topics_explored().iter().copied().collect())
        .unwrap_or_default();
    let learning_velocity = progression.map(|p| p.learning_velocity()).unwrap_or(0.0);

    let preferred_content_types = preferences
        .map(|p| p.preferred_content_types())
        .unwrap_or_else(|| {
            PreferenceProfile::new().preferred_content_types()
        });

    PersonalizedContext {
        expertise_level: profile.expertise_level(),
        learning_style: profile.learning_style(),
        subject_area: profile.subject_area(),
        teaching_context: profile.teaching_context(),
        confidence: profile.confidence().clone(),
        known_topics,
        learning_velocity,
        preferred_content_types,
        conversation_history: history_summary(log, memory, now),
        insights: insights(profile, progression),
    }
}

fn history_summary(log: Option<&ConversationLog>, memory: &MemoryConfig, now: Timestamp) -> String {
    let Some(log) = log.filter(|l| !l.is_empty()) else {
        return "none".to_string();
    };

    let recent = log.view(&memory.short_term, now).len();
    let retained = log.len();
    let latest_topic = log
        .newest()
        .and_then(|entry| extract_topics(&entry.user_input).first().copied())
        .unwrap_or(LearningTopic::General);

    format!("{recent} turns in the last day of {retained} retained; latest touched {latest_topic}")
}

/// Natural-language observations, each gated by its own confidence
/// threshold.
pub fn insights(
    profile: &LearnerProfile,
    progression: Option<&LearningProgression>,
) -> Vec<LearnerInsight> {
    let mut insights = Vec::new();
    let confidence = profile.confidence();

    if confidence.expertise.exceeds(EXPERTISE_INSIGHT_GATE) {
        insights.push(LearnerInsight {
            kind: InsightKind::Expertise,
            message: format!(
                "Consistently works at a {} level of expertise",
                profile.expertise_level()
            ),
            confidence: confidence.expertise.value(),
        });
    }

    if confidence.learning_style.exceeds(STYLE_INSIGHT_GATE) {
        insights.push(LearnerInsight {
            kind: InsightKind::LearningStyle,
            message: format!("Responds best to {} approaches", profile.learning_style()),
            confidence: confidence.learning_style.value(),
        });
    }

    if let Some(progression) = progression {
        let explored = progression.topics_explored().len();
        if explored > PROGRESSION_INSIGHT_TOPICS {
            insights.push(LearnerInsight {
                kind: InsightKind::Progression,
                message: format!("Has explored {explored} topics across the teaching cycle"),
                confidence: PROGRESSION_INSIGHT_CONFIDENCE,
            });
        }
    }

    insights
}

/// Derives the recommendation bundle for a known learner.
///
/// A fresh profile with no progression reproduces the fixed default bundle,
/// so new and unknown users see the same starting suggestions.
pub fn recommendations(
    profile: &LearnerProfile,
    progression: Option<&LearningProgression>,
    current_topic: Option<LearningTopic>,
) -> Recommendations {
    let explored: BTreeSet<LearningTopic> = progression
        .map(|p| p.topics_explored().clone())
        .unwrap_or_default();

    // The topic under discussion is never suggested as a next step.
    let mut next_topics: Vec<LearningTopic> = LearningTopic::CYCLE_ORDER
        .iter()
        .copied()
        .filter(|topic| !explored.contains(topic) && Some(*topic) != current_topic)
        .take(3)
        .collect();
    if next_topics.is_empty() {
        // Full cycle covered: point at the deepening practice areas.
        next_topics = vec![LearningTopic::Differentiation, LearningTopic::Assessment];
    }

    let learning_path = match profile.expertise_level() {
        ExpertiseLevel::Novice | ExpertiseLevel::Developing => "tlc_basics",
        ExpertiseLevel::Proficient => "tlc_extension",
        ExpertiseLevel::Expert => "tlc_mastery",
    };

    let content_type = match profile.learning_style() {
        LearningStyle::Visual => "visual",
        LearningStyle::Reading => "text",
        LearningStyle::Kinesthetic => "hands_on",
        LearningStyle::Auditory => "discussion",
        LearningStyle::Mixed => "mixed",
    };

    let interaction_style = match profile.expertise_level() {
        ExpertiseLevel::Novice | ExpertiseLevel::Developing => "supportive",
        ExpertiseLevel::Proficient => "collaborative",
        ExpertiseLevel::Expert => "consultative",
    };

    let difficulty_level = match profile.expertise_level() {
        ExpertiseLevel::Novice => "foundational",
        ExpertiseLevel::Developing | ExpertiseLevel::Proficient => "intermediate",
        ExpertiseLevel::Expert => "advanced",
    };

    Recommendations {
        next_topics,
        learning_path: learning_path.to_string(),
        content_type: content_type.to_string(),
        interaction_style: interaction_style.to_string(),
        difficulty_level: difficulty_level.to_string(),
    }
}

/// Selects the most relevant history for the current input.
///
/// Relevance blends topic overlap with keyword overlap; callers handle the
/// empty-log case before calling.
pub fn cross_conversation(
    log: &ConversationLog,
    current_input: &str,
    max_context: usize,
    now: Timestamp,
) -> CrossConversationContext {
    if log.is_empty() {
        return CrossConversationContext::unavailable();
    }

    let current_topics: BTreeSet<LearningTopic> = extract_topics(current_input).into_iter().collect();
    let current_words = word_set(current_input);

    let mut scored: Vec<(f32, &LogEntry)> = log
        .entries()
        .map(|entry| (relevance(entry, &current_topics, &current_words), entry))
        .filter(|(score, _)| *score > 0.0)
        .collect();
    scored.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| b.1.timestamp.cmp(&a.1.timestamp))
    });

    let context: Vec<ContextItem> = scored
        .into_iter()
        .take(max_context)
        .map(|(score, entry)| context_item(entry, score))
        .collect();

    let continuity = classify_continuity(&context, now);
    let suggestions = continuity_suggestions(continuity, &context);

    CrossConversationContext {
        available: true,
        context,
        continuity,
        suggestions,
    }
}

/// 60% topic overlap, 40% word overlap, both in [0, 1].
fn relevance(
    entry: &LogEntry,
    current_topics: &BTreeSet<LearningTopic>,
    current_words: &BTreeSet<String>,
) -> f32 {
    let entry_topics: BTreeSet<LearningTopic> =
        extract_topics(&entry.user_input).into_iter().collect();
    let topic_part = if current_topics.is_empty() {
        0.0
    } else {
        let shared = current_topics.intersection(&entry_topics).count();
        shared as f32 / current_topics.len() as f32
    };

    let entry_words = word_set(&entry.user_input);
    let union = current_words.union(&entry_words).count();
    let word_part = if union == 0 {
        0.0
    } else {
        current_words.intersection(&entry_words).count() as f32 / union as f32
    };

    (0.6 * topic_part + 0.4 * word_part).clamp(0.0, 1.0)
}

/// Lowercased words longer than three characters.
fn word_set(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 3)
        .map(|w| w.to_string())
        .collect()
}

fn context_item(entry: &LogEntry, relevance_score: f32) -> ContextItem {
    let topics = extract_topics(&entry.user_input);
    let topic = topics.first().copied().unwrap_or(LearningTopic::General);

    let analysis = &entry.analysis;
    let user_progress = if analysis.mastery_count > analysis.struggle_count {
        "progressing"
    } else if analysis.struggle_count > analysis.mastery_count {
        "needs_support"
    } else {
        "steady"
    };

    let key_learnings: Vec<String> = topics.iter().map(|t| t.to_string()).collect();
    let unresolved_topics = if analysis.struggle_count > analysis.mastery_count {
        key_learnings.clone()
    } else {
        Vec::new()
    };

    ContextItem {
        timestamp: entry.timestamp,
        topic,
        user_progress: user_progress.to_string(),
        key_learnings,
        unresolved_topics,
        relevance_score,
    }
}

fn classify_continuity(context: &[ContextItem], now: Timestamp) -> Continuity {
    match context.first() {
        None => Continuity::NewTopic,
        Some(best) => {
            let recent = now.millis_since(&best.timestamp) < RECENT_THREAD_MILLIS;
            if best.relevance_score > CONTINUING_RELEVANCE && recent {
                Continuity::ContinuingThread
            } else if best.relevance_score > RETURNING_RELEVANCE {
                Continuity::ReturningTopic
            } else {
                Continuity::NewTopic
            }
        }
    }
}

fn continuity_suggestions(continuity: Continuity, context: &[ContextItem]) -> Vec<String> {
    let mut suggestions = match (continuity, context.first()) {
        (Continuity::ContinuingThread, Some(best)) => {
            vec![format!("Continue the recent thread on {}", best.topic)]
        }
        (Continuity::ReturningTopic, Some(best)) => {
            vec![format!("Recap the earlier discussion of {} before going deeper", best.topic)]
        }
        _ => vec!["Introduce the topic fresh; no closely related history".to_string()],
    };

    let unresolved: BTreeSet<&String> = context
        .iter()
        .flat_map(|item| item.unresolved_topics.iter())
        .collect();
    for topic in unresolved {
        suggestions.push(format!("Revisit the unresolved questions about {topic}"));
    }

    suggestions
}
