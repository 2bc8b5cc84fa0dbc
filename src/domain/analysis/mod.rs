//! Turn analysis - pure signal extraction from one conversational turn.
//!
//! The analyzer is deterministic and side-effect-free: it normalizes the
//! turn text and counts occurrences of fixed indicator vocabularies. It is
//! the only component that looks at raw language; everything downstream
//! consumes the typed [`AnalysisResult`].

mod analyzer;
mod complexity;
mod result;
pub mod vocabulary;

pub use analyzer::{KeywordAnalyzer, TurnAnalyzer};
pub use complexity::{ComplexityScorer, FixedComplexity, LexicalComplexity};
pub use result::{AnalysisResult, ExpertiseSignals, PreferenceSignals, RawFeatures};
