//! Learner Compass - Adaptive learner modeling for conversational tutoring
//!
//! This crate builds a persistent, evolving model of an individual learner
//! across conversational turns: expertise level, learning style, subject and
//! teaching context, topics explored, and learning velocity, plus a bounded
//! tiered window of past turns for cross-conversation context.
//!
//! The update pipeline per turn is:
//! turn analysis -> dimension update -> progression tracking -> memory
//! retention/eviction -> personalized-context synthesis.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod engine;
pub mod ports;
