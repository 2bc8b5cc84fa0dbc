//! Learning progression - topic exploration and velocity tracking.

mod topics;

pub use topics::{extract_topics, topic_confidence, LearningTopic};

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// One sample on the progression path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathEntry {
    pub timestamp: Timestamp,
    pub topic: LearningTopic,
    pub user_input: String,
    pub confidence: f32,
}

/// Per-user progression state.
///
/// `topics_explored` only ever grows; the path is a FIFO-bounded sample
/// history used to derive learning velocity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningProgression {
    topics_explored: BTreeSet<LearningTopic>,
    path: Vec<PathEntry>,
    learning_velocity: f32,
}

impl LearningProgression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topics_explored(&self) -> &BTreeSet<LearningTopic> {
        &self.topics_explored
    }

    pub fn path(&self) -> &[PathEntry] {
        &self.path
    }

    pub fn learning_velocity(&self) -> f32 {
        self.learning_velocity
    }

    /// Adds topics to the explored set (monotonic union).
    pub fn explore_topics(&mut self, topics: impl IntoIterator<Item = LearningTopic>) {
        self.topics_explored.extend(topics);
    }

    /// Appends a path sample, dropping the oldest entry past `capacity`.
    pub fn push_path_entry(&mut self, entry: PathEntry, capacity: usize) {
        self.path.push(entry);
        while self.path.len() > capacity {
            self.path.remove(0);
        }
    }

    /// Recomputes learning velocity from the current path.
    ///
    /// Fewer than two samples yields `default_velocity`; otherwise
    /// min(distinct topics in path / hours between first and last sample,
    /// `cap`). Spans under 1ms are floored at 1ms so a burst of samples
    /// cannot divide by zero.
    pub fn recompute_velocity(&mut self, default_velocity: f32, cap: f32) {
        // Slice pattern requires at least two samples.
        let [first, .., last] = self.path.as_slice() else {
            self.learning_velocity = default_velocity;
            return;
        };

        let span_millis = last.timestamp.millis_since(&first.timestamp).max(1);
        let hours = span_millis as f32 / 3_600_000.0;

        let distinct: BTreeSet<LearningTopic> = self.path.iter().map(|e| e.topic).collect();
        self.learning_velocity = (distinct.len() as f32 / hours).min(cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ts: Timestamp, topic: LearningTopic) -> PathEntry {
        PathEntry {
            timestamp: ts,
            topic,
            user_input: "turn".to_string(),
            confidence: 0.5,
        }
    }

    #[test]
    fn velocity_defaults_below_two_samples() {
        let mut progression = LearningProgression::new();
        progression.recompute_velocity(0.5, 2.0);
        assert_eq!(progression.learning_velocity(), 0.5);

        progression.push_path_entry(
            sample(Timestamp::from_unix_millis(0), LearningTopic::Modeling),
            50,
        );
        progression.recompute_velocity(0.5, 2.0);
        assert_eq!(progression.learning_velocity(), 0.5);
    }

    #[test]
    fn velocity_is_distinct_topics_per_hour() {
        // Path spanning exactly 2 hours with 3 distinct topics -> 1.5
        let base = Timestamp::from_unix_millis(1_700_000_000_000);
        let mut progression = LearningProgression::new();
        progression.push_path_entry(sample(base, LearningTopic::FieldBuilding), 50);
        progression.push_path_entry(sample(base.plus_hours(1), LearningTopic::Modeling), 50);
        progression.push_path_entry(
            sample(base.plus_hours(2), LearningTopic::JointConstruction),
            50,
        );

        progression.recompute_velocity(0.5, 2.0);
        assert!((progression.learning_velocity() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn velocity_caps_at_two() {
        let base = Timestamp::from_unix_millis(1_700_000_000_000);
        let mut progression = LearningProgression::new();
        // 4 distinct topics in one minute would be far above the cap
        for (i, topic) in [
            LearningTopic::FieldBuilding,
            LearningTopic::Modeling,
            LearningTopic::Differentiation,
            LearningTopic::Assessment,
        ]
        .into_iter()
        .enumerate()
        {
            progression.push_path_entry(sample(base.plus_millis(i as i64 * 15_000), topic), 50);
        }

        progression.recompute_velocity(0.5, 2.0);
        assert_eq!(progression.learning_velocity(), 2.0);
    }

    #[test]
    fn zero_span_is_floored_not_divided_by_zero() {
        let ts = Timestamp::from_unix_millis(1_700_000_000_000);
        let mut progression = LearningProgression::new();
        progression.push_path_entry(sample(ts, LearningTopic::FieldBuilding), 50);
        progression.push_path_entry(sample(ts, LearningTopic::Modeling), 50);

        progression.recompute_velocity(0.5, 2.0);
        assert_eq!(progression.learning_velocity(), 2.0);
    }

    #[test]
    fn path_is_fifo_bounded() {
        let base = Timestamp::from_unix_millis(1_700_000_000_000);
        let mut progression = LearningProgression::new();
        for i in 0..55 {
            progression.push_path_entry(
                sample(base.plus_millis(i * 1_000), LearningTopic::General),
                50,
            );
        }

        assert_eq!(progression.path().len(), 50);
        // Oldest five dropped
        assert_eq!(
            progression.path().first().unwrap().timestamp,
            base.plus_millis(5_000)
        );
    }

    #[test]
    fn topics_explored_grows_monotonically() {
        let mut progression = LearningProgression::new();
        progression.explore_topics([LearningTopic::Modeling]);
        progression.explore_topics([LearningTopic::Modeling, LearningTopic::Assessment]);

        assert_eq!(progression.topics_explored().len(), 2);
        assert!(progression.topics_explored().contains(&LearningTopic::Modeling));
    }
}
