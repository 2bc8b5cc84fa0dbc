//! Applies one turn's analysis to a profile's four dimensions.

use crate::domain::analysis::{vocabulary, AnalysisResult};
use crate::domain::learner::{ExpertiseLevel, LearnerProfile, LearningStyle};

/// Evidence weight when expert phrases or high complexity are present.
const STRONG_TERM: f32 = 0.10;
/// Evidence weight for the mastery/struggle comparison.
const WEAK_TERM: f32 = 0.05;
/// Confidence gained when a learning-style signal wins.
const STYLE_GAIN: f32 = 0.10;
/// Confidence gained per subject or teaching-context match.
const TAG_GAIN: f32 = 0.20;
/// Expertise confidence a profile must exceed before the level may move.
const LEVEL_CHANGE_CONFIDENCE: f32 = 0.6;
/// Minimum absolute adjustment required to move the level.
const LEVEL_CHANGE_ADJUSTMENT: f32 = 0.1;

/// Mutates the profile's dimensions and confidences from one analysis.
///
/// Teaching-context detection runs on the raw turn text; everything else
/// consumes the analyzer output. Confidences only ever rise.
pub fn apply(profile: &mut LearnerProfile, analysis: &AnalysisResult, turn_text: &str) {
    update_expertise(profile, analysis);
    update_learning_style(profile, analysis);
    update_subject(profile, analysis);
    update_teaching_context(profile, turn_text);
}

/// Expertise moves by a signed sum of fixed-weight evidence terms; every
/// fired term also contributes its magnitude as confidence evidence, so
/// conflicting signals still count as observations.
fn update_expertise(profile: &mut LearnerProfile, analysis: &AnalysisResult) {
    let signals = &analysis.expertise_signals;
    let terms = [
        (STRONG_TERM, signals.expert_count > 0),
        (STRONG_TERM, signals.complexity > 0.7),
        (WEAK_TERM, analysis.mastery_count > analysis.struggle_count),
        (-STRONG_TERM, signals.novice_count > 0),
        (-WEAK_TERM, analysis.struggle_count > analysis.mastery_count),
    ];

    let fired = terms.iter().filter(|(_, hit)| *hit);
    let adjustment: f32 = fired.clone().map(|(weight, _)| weight).sum();
    let evidence: f32 = fired.map(|(weight, _)| weight.abs()).sum();

    profile.confidence_mut().expertise.raise(evidence);

    let confident = profile.confidence().expertise.exceeds(LEVEL_CHANGE_CONFIDENCE);
    if confident && adjustment.abs() > LEVEL_CHANGE_ADJUSTMENT {
        let index = profile.expertise_level().index() + (adjustment * 10.0).round() as i32;
        profile.set_expertise_level(ExpertiseLevel::from_index(index));
    }
}

/// Argmax over four style scores; the scan order is the tie-break priority.
fn update_learning_style(profile: &mut LearnerProfile, analysis: &AnalysisResult) {
    let prefs = &analysis.preference_signals;
    let scores = [
        (LearningStyle::Visual, prefs.practical_examples),
        (LearningStyle::Reading, prefs.detailed_explanations),
        (LearningStyle::Kinesthetic, prefs.step_by_step),
        (LearningStyle::Auditory, analysis.engagement_count),
    ];

    let mut winner = scores[0];
    for candidate in &scores[1..] {
        if candidate.1 > winner.1 {
            winner = *candidate;
        }
    }

    if winner.1 > 0 {
        profile.set_learning_style(winner.0);
        profile.confidence_mut().learning_style.raise(STYLE_GAIN);
    }
}

/// Latest detected subject always overwrites the current value.
fn update_subject(profile: &mut LearnerProfile, analysis: &AnalysisResult) {
    if let Some(subject) = analysis.first_subject() {
        profile.set_subject_area(subject);
        profile.confidence_mut().subject.raise(TAG_GAIN);
    }
}

/// Every matching keyword group writes its label in the fixed evaluation
/// order, so the last matching group wins when a turn matches several.
fn update_teaching_context(profile: &mut LearnerProfile, turn_text: &str) {
    let text = turn_text.to_lowercase();
    for (context, keywords) in vocabulary::TEACHING_CONTEXTS.iter() {
        if keywords.iter().any(|k| text.contains(k)) {
            profile.set_teaching_context(*context);
            profile.confidence_mut().teaching_context.raise(TAG_GAIN);
        }
    }
}
