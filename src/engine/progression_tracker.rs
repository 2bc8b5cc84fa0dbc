//! Records one turn against a learner's progression state.

use crate::config::ProgressionConfig;
use crate::domain::foundation::Timestamp;
use crate::domain::progression::{
    extract_topics, topic_confidence, LearningProgression, LearningTopic, PathEntry,
};

/// Extracts topics from the turn, grows the explored set, appends one path
/// sample and recomputes learning velocity.
///
/// A turn matching no topic vocabulary is sampled as `General` so the path
/// still reflects conversational cadence.
pub fn record(
    progression: &mut LearningProgression,
    turn_text: &str,
    now: Timestamp,
    config: &ProgressionConfig,
) {
    let topics = extract_topics(turn_text);
    let primary = topics.first().copied().unwrap_or(LearningTopic::General);

    progression.explore_topics(topics);
    progression.push_path_entry(
        PathEntry {
            timestamp: now,
            topic: primary,
            user_input: turn_text.to_string(),
            confidence: topic_confidence(turn_text),
        },
        config.path_capacity,
    );
    progression.recompute_velocity(config.default_velocity, config.velocity_cap);
}
