//! Integration tests for the learner-modeling engine.
//!
//! These tests exercise the full public surface end to end:
//! 1. Profile creation and dimension defaults on first contact
//! 2. Memory retention invariants under repeated appends
//! 3. Learning velocity derivation from the progression path
//! 4. Confidence monotonicity across update sequences
//! 5. Default sentinels for unknown users
//!
//! Uses the in-memory store; no external dependencies.

use std::collections::BTreeMap;
use std::sync::Arc;

use learner_compass::adapters::InMemoryLearnerStore;
use learner_compass::config::EngineConfig;
use learner_compass::domain::analysis::KeywordAnalyzer;
use learner_compass::domain::context::{Continuity, CrossConversationContext};
use learner_compass::domain::foundation::{Timestamp, UserId};
use learner_compass::domain::learner::{
    ExpertiseLevel, LearningStyle, SubjectArea, TeachingContext,
};
use learner_compass::domain::memory::TierLimits;
use learner_compass::domain::progression::LearningTopic;
use learner_compass::engine::LearnerEngine;
use learner_compass::ports::LearnerStore;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn engine_with_store() -> (LearnerEngine, Arc<InMemoryLearnerStore>) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let store = Arc::new(InMemoryLearnerStore::new());
    let engine = LearnerEngine::new(store.clone(), Arc::new(KeywordAnalyzer::new()));
    (engine, store)
}

fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn base() -> Timestamp {
    Timestamp::from_unix_millis(1_700_000_000_000)
}

async fn update_at(
    engine: &LearnerEngine,
    id: &UserId,
    text: &str,
    now: Timestamp,
) -> learner_compass::engine::ModelUpdate {
    engine
        .update_user_model_at(id, text, "response", BTreeMap::new(), now)
        .await
        .unwrap()
}

// =============================================================================
// Profile creation
// =============================================================================

#[tokio::test]
async fn first_contact_creates_profile_with_default_dimensions() {
    let (engine, _) = engine_with_store();
    let id = user("fresh");

    let update = update_at(&engine, &id, "", base()).await;

    let summary = update.profile_summary;
    assert_eq!(summary.expertise_level, ExpertiseLevel::Developing);
    assert_eq!(summary.learning_style, LearningStyle::Mixed);
    assert_eq!(summary.subject_area, SubjectArea::General);
    assert_eq!(summary.teaching_context, TeachingContext::Primary);

    let confidence = update.personalized_context.confidence;
    assert_eq!(confidence.expertise.value(), 0.1);
    assert_eq!(confidence.learning_style.value(), 0.1);
    assert_eq!(confidence.subject.value(), 0.1);
    assert_eq!(confidence.teaching_context.value(), 0.1);
}

#[tokio::test]
async fn novice_turn_on_fresh_profile_matches_the_reference_numbers() {
    let (engine, _) = engine_with_store();
    let id = user("novice");

    let update = update_at(
        &engine,
        &id,
        "I'm new to this, what is field building?",
        base(),
    )
    .await;

    let ctx = update.personalized_context;
    assert!((ctx.confidence.expertise.value() - 0.3).abs() < 1e-6);
    assert_eq!(ctx.expertise_level, ExpertiseLevel::Developing);
    assert_eq!(ctx.known_topics, vec![LearningTopic::FieldBuilding]);
}

// =============================================================================
// Memory invariants
// =============================================================================

#[tokio::test]
async fn memory_log_respects_long_term_bounds_after_every_append() {
    let (engine, store) = engine_with_store();
    let id = user("memory");
    let long = TierLimits::new(30 * 24 * 3_600, 200);

    for i in 0..250_i64 {
        let now = base().plus_millis(i * 3_600_000);
        update_at(&engine, &id, "assessment feedback please", now).await;

        let log = store.conversation_log(&id).await.unwrap().unwrap();
        assert!(log.len() <= long.capacity);
        for entry in log.entries() {
            assert!(now.millis_since(&entry.timestamp) < long.max_age_secs * 1_000);
        }
    }
}

#[tokio::test]
async fn overfilling_memory_evicts_exactly_the_oldest_entry() {
    let (engine, store) = engine_with_store();
    let id = user("evict");
    let capacity = 200_i64;

    for i in 0..=capacity {
        // One second apart so nothing ages out
        update_at(&engine, &id, "quick question", base().plus_millis(i * 1_000)).await;
    }

    let log = store.conversation_log(&id).await.unwrap().unwrap();
    assert_eq!(log.len(), capacity as usize);

    // The entry stamped at base() is gone; everything else survives in order
    let timestamps: Vec<i64> = log.entries().map(|e| e.timestamp.as_unix_millis()).collect();
    assert_eq!(timestamps[0], base().plus_millis(1_000).as_unix_millis());
    assert_eq!(
        *timestamps.last().unwrap(),
        base().plus_millis(capacity * 1_000).as_unix_millis()
    );
}

// =============================================================================
// Progression and velocity
// =============================================================================

#[tokio::test]
async fn velocity_defaults_then_tracks_distinct_topics_per_hour() {
    let (engine, _) = engine_with_store();
    let id = user("velocity");

    let update = update_at(&engine, &id, "what is field building?", base()).await;
    assert_eq!(update.profile_summary.learning_velocity, 0.5);

    update_at(&engine, &id, "show me modelling next", base().plus_hours(1)).await;
    let update = update_at(
        &engine,
        &id,
        "then joint construction",
        base().plus_hours(2),
    )
    .await;

    // 3 distinct topics over exactly 2 hours
    assert!((update.profile_summary.learning_velocity - 1.5).abs() < 1e-6);
}

#[tokio::test]
async fn rapid_topic_hopping_is_capped_at_two() {
    let (engine, _) = engine_with_store();
    let id = user("burst");

    let texts = [
        "what is field building?",
        "now modelling",
        "then differentiation",
        "finally assessment",
    ];
    let mut last = None;
    for (i, text) in texts.iter().enumerate() {
        last = Some(update_at(&engine, &id, text, base().plus_millis(i as i64 * 10_000)).await);
    }

    assert_eq!(last.unwrap().profile_summary.learning_velocity, 2.0);
}

// =============================================================================
// Confidence monotonicity
// =============================================================================

#[tokio::test]
async fn confidences_never_decrease_over_a_long_mixed_session() {
    let (engine, _) = engine_with_store();
    let id = user("monotonic");

    let turns = [
        "I'm new to this, what is field building?",
        "show me an example of modelling for my primary class",
        "in my experience genre theory helps with english writing",
        "I'm struggling, this is confusing",
        "",
        "walk me through assessment step by step",
        "my high school students enjoyed the science experiment",
    ];

    let mut previous = [0.0_f32; 4];
    for (i, text) in turns.iter().cycle().take(40).enumerate() {
        let update = update_at(&engine, &id, text, base().plus_millis(i as i64 * 60_000)).await;
        let c = update.personalized_context.confidence;
        let current = [
            c.expertise.value(),
            c.learning_style.value(),
            c.subject.value(),
            c.teaching_context.value(),
        ];
        for (now, before) in current.iter().zip(previous.iter()) {
            assert!(now >= before);
            assert!(*now <= 1.0);
        }
        previous = current;
    }
}

// =============================================================================
// Default sentinels for unknown users
// =============================================================================

#[tokio::test]
async fn unseen_user_receives_the_exact_default_recommendation_bundle() {
    let (engine, _) = engine_with_store();

    let set = engine
        .personalized_recommendations(&user("stranger"), None)
        .await
        .unwrap();

    let bundle = set.recommendations;
    assert_eq!(
        bundle.next_topics,
        vec![
            LearningTopic::FieldBuilding,
            LearningTopic::Modeling,
            LearningTopic::JointConstruction,
        ]
    );
    assert_eq!(bundle.learning_path, "tlc_basics");
    assert_eq!(bundle.content_type, "mixed");
    assert_eq!(bundle.interaction_style, "supportive");
    assert_eq!(bundle.difficulty_level, "intermediate");
}

#[tokio::test]
async fn current_topic_never_reappears_as_a_next_topic() {
    let (engine, _) = engine_with_store();
    let id = user("topical");
    update_at(&engine, &id, "what is field building?", base()).await;

    let set = engine
        .personalized_recommendations(&id, Some(LearningTopic::Modeling))
        .await
        .unwrap();

    assert!(!set
        .recommendations
        .next_topics
        .contains(&LearningTopic::Modeling));
    assert!(set.based_on.iter().any(|s| s.starts_with("current_topic")));
}

#[tokio::test]
async fn user_with_no_memory_gets_unavailable_context() {
    let (engine, _) = engine_with_store();

    let ctx = engine
        .cross_conversation_context(&user("stranger"), "anything at all", None)
        .await
        .unwrap();

    assert_eq!(ctx, CrossConversationContext::unavailable());
    assert!(!ctx.available);
    assert!(ctx.context.is_empty());
}

// =============================================================================
// Cross-conversation context over real history
// =============================================================================

#[tokio::test]
async fn related_history_is_selected_and_classified() {
    let (engine, _) = engine_with_store();
    let id = user("history");

    update_at(
        &engine,
        &id,
        "what is field building in my writing lessons?",
        base(),
    )
    .await;
    update_at(&engine, &id, "fractions homework tonight", base().plus_hours(1)).await;

    let ctx = engine
        .cross_conversation_context(&id, "more field building ideas for writing lessons", None)
        .await
        .unwrap();

    assert!(ctx.available);
    assert!(!ctx.context.is_empty());
    assert_eq!(ctx.context[0].topic, LearningTopic::FieldBuilding);
    assert_ne!(ctx.continuity, Continuity::NoHistory);
    assert!(!ctx.suggestions.is_empty());
}

// =============================================================================
// Configuration plumbing
// =============================================================================

#[tokio::test]
async fn custom_config_bounds_are_honored() {
    let store = Arc::new(InMemoryLearnerStore::new());
    let mut config = EngineConfig::new();
    config.memory.long_term = TierLimits::new(30 * 24 * 3_600, 5);
    config.progression.path_capacity = 3;
    let engine =
        LearnerEngine::with_config(store.clone(), Arc::new(KeywordAnalyzer::new()), config);
    let id = user("custom");

    for i in 0..10_i64 {
        update_at(&engine, &id, "assessment question", base().plus_millis(i * 1_000)).await;
    }

    let log = store.conversation_log(&id).await.unwrap().unwrap();
    assert_eq!(log.len(), 5);
    let progression = store.progression(&id).await.unwrap().unwrap();
    assert_eq!(progression.path().len(), 3);
}
