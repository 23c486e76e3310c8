use std::sync::Arc;

use quiz_core::model::{QuestionId, QuestionRecord};
use services::SessionStore;
use services::sessions::{HISTORY_KEY, SESSION_KEY};
use storage::repository::{InMemoryKeyValueStore, KeyValueStore};

use super::quiz::NO_MATCHES;
use super::test_harness::setup_quiz_harness;

fn record(id: &str, category: &str, topic: &str) -> QuestionRecord {
    QuestionRecord::new(
        QuestionId::new(id),
        category,
        topic,
        format!("Prompt {id}?"),
        "Right",
        ["Right", "Wrong", "Other", ""].map(str::to_string),
    )
    .unwrap()
}

fn records() -> Vec<QuestionRecord> {
    vec![
        record("1", "Security", "TLS"),
        record("2", "Networking", "DNS"),
    ]
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_without_stored_session_shows_filters() {
    let mut harness = setup_quiz_harness(records(), InMemoryKeyValueStore::new());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Configure Quiz"), "missing title in {html}");
    assert!(html.contains("Security"), "missing category in {html}");
    assert!(html.contains("Networking"), "missing category in {html}");
    assert!(html.contains("All Matching Questions"), "missing count in {html}");
    assert!(html.contains("Start Quiz"), "missing start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_resumes_stored_session_at_next_question() {
    let kv = InMemoryKeyValueStore::new();
    kv.put(SESSION_KEY, r#"["2","1"]"#).await.unwrap();
    kv.put(
        HISTORY_KEY,
        r#"[{"questionId":"2","isCorrect":true,"userSelection":"Right"}]"#,
    )
    .await
    .unwrap();

    let mut harness = setup_quiz_harness(records(), kv);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "missing header in {html}");
    assert!(html.contains("Prompt 1?"), "missing prompt in {html}");
    assert!(html.contains("Finish Quiz"), "missing finish label in {html}");
    assert!(html.contains("50% Completed"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_shows_results_for_finished_session() {
    let kv = InMemoryKeyValueStore::new();
    kv.put(SESSION_KEY, r#"["1","2"]"#).await.unwrap();
    kv.put(
        HISTORY_KEY,
        r#"[{"questionId":"1","isCorrect":true,"userSelection":"Right"},{"questionId":"2","isCorrect":false,"userSelection":"Wrong"}]"#,
    )
    .await
    .unwrap();

    let mut harness = setup_quiz_harness(records(), kv);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Score: 1 / 2"), "missing score in {html}");
    assert!(html.contains("Your answer: Wrong"), "missing answer in {html}");
    assert!(html.contains("Correct answer: Right"), "missing correction in {html}");
    assert!(html.contains("Restart Quiz"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_drops_stale_session_and_clears_storage() {
    let kv = InMemoryKeyValueStore::new();
    kv.put(SESSION_KEY, r#"["gone"]"#).await.unwrap();

    let mut harness = setup_quiz_harness(records(), kv);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Configure Quiz"), "missing filters in {html}");
    assert!(harness.kv.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn start_with_unmatched_category_shows_notice_and_stores_nothing() {
    let mut harness = setup_quiz_harness(records(), InMemoryKeyValueStore::new());
    harness.settle().await;
    let intents = harness.intents();

    harness.fire(intents.toggle_category, "Databases".to_string());
    harness.fire(intents.start, ());
    harness.settle_events().await;

    let html = harness.render();
    assert!(html.contains(NO_MATCHES), "missing notice in {html}");
    assert!(html.contains("Configure Quiz"), "left filter screen in {html}");
    assert!(harness.kv.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn answering_every_question_then_restarting_returns_to_filters() {
    let mut harness = setup_quiz_harness(records(), InMemoryKeyValueStore::new());
    harness.settle().await;
    let intents = harness.intents();

    harness.fire(intents.start, ());
    harness.settle_events().await;
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing header in {html}");
    assert!(!html.contains("choice--selected"), "nothing selected yet in {html}");

    for _ in 0..2 {
        harness.fire(intents.select, "Right".to_string());
        harness.settle_events().await;
        assert!(harness.render().contains("choice--selected"));
        harness.fire(intents.submit, ());
        harness.settle_events().await;
    }

    let html = harness.render();
    assert!(html.contains("Score: 2 / 2"), "missing score in {html}");
    assert!(harness.kv.get(SESSION_KEY).await.unwrap().is_some());
    assert!(harness.kv.get(HISTORY_KEY).await.unwrap().is_some());

    harness.fire(intents.restart, ());
    harness.settle_events().await;

    let html = harness.render();
    assert!(html.contains("Configure Quiz"), "missing filters in {html}");
    assert!(harness.kv.is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn repeated_submit_before_storage_settles_records_one_answer() {
    let mut harness = setup_quiz_harness(records(), InMemoryKeyValueStore::new());
    harness.settle().await;
    let intents = harness.intents();
    harness.fire(intents.start, ());
    harness.settle_events().await;

    harness.fire(intents.select, "Right".to_string());
    harness.fire(intents.submit, ());
    harness.fire(intents.select, "Wrong".to_string());
    harness.fire(intents.submit, ());
    harness.settle_events().await;

    let state = harness.session().unwrap();
    assert_eq!(state.current_index(), 1);
    assert_eq!(state.history().len(), 1);
    assert_eq!(state.history()[0].user_selection, "Right");

    let stored = SessionStore::new(Arc::new(harness.kv.clone()))
        .load_history()
        .await;
    assert_eq!(stored, state.history());
}
