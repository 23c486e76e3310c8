use std::sync::Arc;

use quiz_core::model::{FilterSpec, HistoryEntry, QuestionCatalog, QuizPhase, SessionState};
use storage::repository::KeyValueStore;

use super::persistence::SessionStore;
use super::plan::SessionBuilder;
use crate::error::SessionError;

/// Result of starting a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStart {
    /// Questions that passed the filters.
    pub matched: usize,
    /// Questions in the session after the limit.
    pub total: usize,
}

/// Result of answering the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionAnswerResult {
    pub entry: HistoryEntry,
    pub is_complete: bool,
}

/// Drives `SessionState` transitions and keeps the stored copy in step.
///
/// The in-memory transition always happens first; storage writes follow and
/// never undo it.
#[derive(Clone)]
pub struct QuizLoopService {
    catalog: Arc<QuestionCatalog>,
    store: SessionStore,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(catalog: Arc<QuestionCatalog>, kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            catalog,
            store: SessionStore::new(kv),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<QuestionCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Rebuild the session left in storage, or a configuring session if none.
    pub async fn restore(&self) -> SessionState {
        let Some(ids) = self.store.load_session_ids().await else {
            return SessionState::configuring();
        };
        let history = self.store.load_history().await;
        let state = SessionState::restore(&ids, history, &self.catalog);

        let kept = state.total();
        if kept < ids.len() {
            tracing::warn!(
                stored = ids.len(),
                kept,
                "dropped stored question ids missing from the question file"
            );
        }
        if state.phase() == QuizPhase::Configuring {
            self.store.clear().await;
        } else {
            tracing::info!(
                index = state.current_index(),
                total = state.total(),
                "resumed stored session"
            );
        }
        state
    }

    /// Build a session from `filter` and move `state` into it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoMatches` when no question passes the filters;
    /// `state` is left untouched in that case.
    pub async fn start(
        &self,
        state: &mut SessionState,
        filter: &FilterSpec,
    ) -> Result<SessionStart, SessionError> {
        let plan = SessionBuilder::new(filter).build(self.catalog.records());
        if plan.is_empty() {
            tracing::info!(
                categories = filter.categories.len(),
                topics = filter.topics.len(),
                "no questions match filters"
            );
            return Err(SessionError::NoMatches);
        }

        let started = SessionStart {
            matched: plan.matched,
            total: plan.total(),
        };
        *state = SessionState::start(plan.questions)?;

        self.store.save_session_ids(&state.question_ids()).await;
        self.store.clear_history().await;

        tracing::info!(
            matched = started.matched,
            total = started.total,
            "session started"
        );
        Ok(started)
    }

    /// Grade the pending selection, advance, and store the history.
    ///
    /// Returns `None` when nothing was selected or no question is showing.
    pub async fn submit(&self, state: &mut SessionState) -> Option<SessionAnswerResult> {
        let entry = state.submit()?.clone();
        let is_complete = state.is_finished();

        self.store.save_history(state.history()).await;

        tracing::debug!(
            index = state.current_index(),
            correct = entry.is_correct,
            "answer recorded"
        );
        if is_complete {
            let score = state.score();
            tracing::info!(
                correct = score.correct,
                total = score.total,
                "session finished"
            );
        }

        Some(SessionAnswerResult { entry, is_complete })
    }

    /// Drop the session and its stored copy.
    pub async fn reset(&self, state: &mut SessionState) {
        state.reset();
        self.store.clear().await;
        tracing::info!("session reset");
    }
}
