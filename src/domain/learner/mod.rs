//! Learner module - the evolving per-user model.
//!
//! The LearnerProfile is a user-owned aggregate that persists across
//! conversations. It tracks four modeled dimensions:
//!
//! - **Expertise level** - novice .. expert on an ordered ordinal scale
//! - **Learning style** - visual / auditory / kinesthetic / reading
//! - **Subject area** - the subject context the learner operates in
//! - **Teaching context** - the stage the learner teaches or studies at
//!
//! # Domain Invariants
//!
//! 1. Each profile belongs to exactly one user
//! 2. Per-dimension confidence never decreases and clamps at 1.0
//! 3. Categorical dimension values change only under component gating rules
//! 4. Conversation count only increases

pub mod dimensions;
pub mod preferences;
pub mod profile;

pub use dimensions::{ExpertiseLevel, LearningStyle, SubjectArea, TeachingContext};
pub use preferences::{PreferenceProfile, DEFAULT_CONTENT_TYPES};
pub use profile::{DimensionConfidence, LearnerProfile, ProfileSummary};
