//! Per-user conversation log with derived tier views.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::domain::analysis::AnalysisResult;
use crate::domain::foundation::{EntryId, Timestamp};

/// Retention limits for one memory tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierLimits {
    /// Maximum entry age, in seconds.
    pub max_age_secs: i64,
    /// Maximum number of entries.
    pub capacity: usize,
}

impl TierLimits {
    pub const fn new(max_age_secs: i64, capacity: usize) -> Self {
        Self {
            max_age_secs,
            capacity,
        }
    }

    fn max_age_millis(&self) -> i64 {
        self.max_age_secs * 1_000
    }
}

/// The three named views over one underlying log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryTier {
    /// 24 hours, 10 entries.
    ShortTerm,
    /// 7 days, 50 entries.
    MediumTerm,
    /// 30 days, 200 entries. This tier also bounds the log itself.
    LongTerm,
}

/// One recorded conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: EntryId,
    pub timestamp: Timestamp,
    pub user_input: String,
    pub system_response: String,
    pub metadata: BTreeMap<String, String>,
    pub analysis: AnalysisResult,
}

impl LogEntry {
    pub fn new(
        timestamp: Timestamp,
        user_input: impl Into<String>,
        system_response: impl Into<String>,
        metadata: BTreeMap<String, String>,
        analysis: AnalysisResult,
    ) -> Self {
        Self {
            id: EntryId::new(),
            timestamp,
            user_input: user_input.into(),
            system_response: system_response.into(),
            metadata,
            analysis,
        }
    }
}

/// Single ordered sequence of log entries, newest at tail.
///
/// Tier views are read-only filters computed fresh from this sequence; they
/// are not separate stores. After every append the log holds at most the
/// long-term capacity, and every surviving entry is younger than the
/// long-term duration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationLog {
    entries: VecDeque<LogEntry>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends at the tail, then enforces the long-term bound: drop entries
    /// aged `>= long.max_age`, then drop oldest entries until the length is
    /// within capacity.
    pub fn append(&mut self, entry: LogEntry, now: Timestamp, long: &TierLimits) {
        self.entries.push_back(entry);

        let max_age = long.max_age_millis();
        self.entries
            .retain(|e| now.millis_since(&e.timestamp) < max_age);

        while self.entries.len() > long.capacity {
            self.entries.pop_front();
        }
    }

    /// Returns the suffix of at most `limits.capacity` most-recent entries
    /// younger than `limits.max_age`, oldest first. Never mutates.
    pub fn view(&self, limits: &TierLimits, now: Timestamp) -> Vec<&LogEntry> {
        let max_age = limits.max_age_millis();
        let mut selected: Vec<&LogEntry> = self
            .entries
            .iter()
            .rev()
            .filter(|e| now.millis_since(&e.timestamp) < max_age)
            .take(limits.capacity)
            .collect();
        selected.reverse();
        selected
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: TierLimits = TierLimits::new(30 * 24 * 3_600, 200);
    const MEDIUM: TierLimits = TierLimits::new(7 * 24 * 3_600, 50);
    const SHORT: TierLimits = TierLimits::new(24 * 3_600, 10);

    fn entry_at(ts: Timestamp) -> LogEntry {
        LogEntry::new(ts, "input", "response", BTreeMap::new(), AnalysisResult::default())
    }

    #[test]
    fn append_keeps_newest_at_tail() {
        let now = Timestamp::from_unix_millis(10_000_000);
        let mut log = ConversationLog::new();
        log.append(entry_at(now.minus_hours(2)), now, &LONG);
        log.append(entry_at(now), now, &LONG);

        assert_eq!(log.len(), 2);
        assert_eq!(log.newest().unwrap().timestamp, now);
    }

    #[test]
    fn append_evicts_oldest_beyond_capacity_fifo() {
        let base = Timestamp::from_unix_millis(1_700_000_000_000);
        let mut log = ConversationLog::new();
        let mut ids = Vec::new();

        for i in 0..(LONG.capacity + 1) {
            let entry = entry_at(base.plus_millis(i as i64 * 1_000));
            ids.push(entry.id);
            let now = entry.timestamp;
            log.append(entry, now, &LONG);
        }

        assert_eq!(log.len(), LONG.capacity);
        // The single oldest entry was evicted first, by identity.
        let surviving: Vec<EntryId> = log.entries().map(|e| e.id).collect();
        assert!(!surviving.contains(&ids[0]));
        assert_eq!(surviving, ids[1..].to_vec());
    }

    #[test]
    fn append_drops_entries_past_long_term_age() {
        let now = Timestamp::from_unix_millis(1_700_000_000_000);
        let mut log = ConversationLog::new();
        log.append(entry_at(now.minus_days(31)), now, &LONG);
        log.append(entry_at(now.minus_days(29)), now, &LONG);
        log.append(entry_at(now), now, &LONG);

        assert_eq!(log.len(), 2);
        for entry in log.entries() {
            assert!(now.millis_since(&entry.timestamp) < LONG.max_age_secs * 1_000);
        }
    }

    #[test]
    fn invariant_holds_after_every_append() {
        let base = Timestamp::from_unix_millis(1_700_000_000_000);
        let mut log = ConversationLog::new();

        for i in 0..300 {
            // Mix of recent and stale entries
            let ts = if i % 7 == 0 {
                base.plus_millis(i * 60_000).minus_days(40)
            } else {
                base.plus_millis(i * 60_000)
            };
            let now = base.plus_millis(i * 60_000);
            log.append(entry_at(ts), now, &LONG);

            assert!(log.len() <= LONG.capacity);
            for entry in log.entries() {
                assert!(now.millis_since(&entry.timestamp) < LONG.max_age_secs * 1_000);
            }
        }
    }

    #[test]
    fn view_filters_by_age_and_capacity() {
        let now = Timestamp::from_unix_millis(1_700_000_000_000);
        let mut log = ConversationLog::new();

        // 12 entries within 24h, 3 older
        for i in 0..3 {
            log.append(entry_at(now.minus_days(3).plus_millis(i)), now, &LONG);
        }
        for i in 0..12 {
            log.append(entry_at(now.minus_hours(12).plus_millis(i)), now, &LONG);
        }

        let short = log.view(&SHORT, now);
        assert_eq!(short.len(), SHORT.capacity);
        for entry in &short {
            assert!(now.millis_since(&entry.timestamp) < SHORT.max_age_secs * 1_000);
        }

        // The view is the most-recent suffix, oldest first
        let timestamps: Vec<i64> = short.iter().map(|e| e.timestamp.as_unix_millis()).collect();
        let mut sorted = timestamps.clone();
        sorted.sort();
        assert_eq!(timestamps, sorted);
    }

    #[test]
    fn medium_view_spans_a_week_up_to_fifty_entries() {
        let now = Timestamp::from_unix_millis(1_700_000_000_000);
        let mut log = ConversationLog::new();

        // 5 entries past the week boundary, 60 within it
        for i in 0..5 {
            log.append(entry_at(now.minus_days(8).plus_millis(i)), now, &LONG);
        }
        for i in 0..60 {
            log.append(entry_at(now.minus_days(2).plus_millis(i)), now, &LONG);
        }

        let medium = log.view(&MEDIUM, now);
        assert_eq!(medium.len(), MEDIUM.capacity);
        for entry in &medium {
            assert!(now.millis_since(&entry.timestamp) < MEDIUM.max_age_secs * 1_000);
        }

        // The view is the most-recent suffix of the in-window entries: the
        // ten oldest of the sixty are dropped.
        assert_eq!(
            medium.first().unwrap().timestamp,
            now.minus_days(2).plus_millis(10)
        );
        assert_eq!(
            medium.last().unwrap().timestamp,
            now.minus_days(2).plus_millis(59)
        );
    }

    #[test]
    fn view_does_not_mutate() {
        let now = Timestamp::from_unix_millis(1_700_000_000_000);
        let mut log = ConversationLog::new();
        log.append(entry_at(now.minus_days(10)), now, &LONG);

        let before = log.clone();
        let _ = log.view(&SHORT, now);
        assert_eq!(log, before);
    }
}
