//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `learner` - Learner profile aggregate, dimensions, and preferences
//! - `analysis` - Pure turn analysis (indicator vocabularies, signal counts)
//! - `memory` - Tiered, capacity/age-bounded conversation log
//! - `progression` - Topic exploration and learning velocity
//! - `context` - Personalized-context synthesis output types

pub mod analysis;
pub mod context;
pub mod foundation;
pub mod learner;
pub mod memory;
pub mod progression;
