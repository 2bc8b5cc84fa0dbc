//! Conversation memory - append-only, tiered, capacity/age-bounded log.

mod log;

pub use log::{ConversationLog, LogEntry, MemoryTier, TierLimits};
