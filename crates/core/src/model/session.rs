use thiserror::Error;

use crate::model::catalog::QuestionCatalog;
use crate::model::history::HistoryEntry;
use crate::model::ids::QuestionId;
use crate::model::question::QuestionRecord;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionStateError {
    #[error("cannot start a session without questions")]
    Empty,
}

//
// ─── PHASE / PROGRESS ──────────────────────────────────────────────────────────
//

/// Which screen the quiz is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Configuring,
    InProgress,
    Finished,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// Share of answered questions in `[0, 100]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.answered as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run of the quiz over a fixed, ordered list of questions.
///
/// The question list never changes after `start`. `history` always holds one
/// entry per answered question, in the same order as `questions`, so the
/// current index equals `history.len()` between transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    questions: Vec<QuestionRecord>,
    current: usize,
    history: Vec<HistoryEntry>,
    pending: Option<String>,
}

impl SessionState {
    /// A session on the filter screen with nothing loaded.
    #[must_use]
    pub fn configuring() -> Self {
        Self::default()
    }

    /// Start a session over `questions`.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::Empty` if `questions` is empty.
    pub fn start(questions: Vec<QuestionRecord>) -> Result<Self, SessionStateError> {
        if questions.is_empty() {
            return Err(SessionStateError::Empty);
        }
        Ok(Self {
            questions,
            ..Self::default()
        })
    }

    /// Rebuild a session from persisted ids and history.
    ///
    /// Ids without a matching record are dropped. The history is kept only as
    /// far as it lines up, in order, with the rebuilt question list. An empty
    /// rebuilt list yields a configuring session.
    #[must_use]
    pub fn restore(
        stored_ids: &[QuestionId],
        stored_history: Vec<HistoryEntry>,
        catalog: &QuestionCatalog,
    ) -> Self {
        let questions: Vec<QuestionRecord> = stored_ids
            .iter()
            .filter_map(|id| catalog.get(id).cloned())
            .collect();
        if questions.is_empty() {
            return Self::configuring();
        }

        let mut history = stored_history;
        let aligned = history
            .iter()
            .zip(&questions)
            .take_while(|(entry, record)| entry.question_id == *record.id())
            .count();
        history.truncate(aligned);

        Self {
            current: history.len(),
            questions,
            history,
            pending: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        if self.questions.is_empty() {
            QuizPhase::Configuring
        } else if self.current >= self.questions.len() {
            QuizPhase::Finished
        } else {
            QuizPhase::InProgress
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase() == QuizPhase::Finished
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    #[must_use]
    pub fn question_ids(&self) -> Vec<QuestionId> {
        self.questions.iter().map(|q| q.id().clone()).collect()
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// 0-based index of the question being shown.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn pending_selection(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    /// True when the current question is the last one.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current + 1 == self.questions.len()
    }

    /// Mark `choice` as the pending answer for the current question.
    ///
    /// Ignored unless a question is showing and it offers `choice`.
    pub fn select_choice(&mut self, choice: &str) {
        let offered = self
            .current_question()
            .is_some_and(|question| question.offers_choice(choice));
        if offered {
            self.pending = Some(choice.to_owned());
        }
    }

    /// Grade the pending selection and advance.
    ///
    /// Returns `None` (and changes nothing) when no selection is pending or no
    /// question is showing.
    pub fn submit(&mut self) -> Option<&HistoryEntry> {
        let question = self.questions.get(self.current)?;
        let selection = self.pending.take()?;

        self.history.push(HistoryEntry::grade(question, selection));
        self.current += 1;
        self.history.last()
    }

    /// Return to the filter screen, dropping the session.
    pub fn reset(&mut self) {
        *self = Self::configuring();
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total(),
            answered: self.history.len(),
            remaining: self.total().saturating_sub(self.current),
            is_complete: self.is_finished(),
        }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        Score {
            correct: self.history.iter().filter(|entry| entry.is_correct).count(),
            total: self.total(),
        }
    }

    /// Answered questions paired with their history entries, in order.
    pub fn review(&self) -> impl Iterator<Item = (&QuestionRecord, &HistoryEntry)> {
        self.questions.iter().zip(&self.history)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
