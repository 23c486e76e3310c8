use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question text cannot be empty")]
    EmptyQuestion,
}

//
// ─── FIELDS ────────────────────────────────────────────────────────────────────
//

/// Text fields of a question that can be used to group or filter rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionField {
    Category,
    Topic,
}

//
// ─── RECORD ────────────────────────────────────────────────────────────────────
//

/// Number of answer slots a question row carries.
pub const CHOICE_SLOTS: usize = 4;

/// A single multiple-choice question loaded from the question file.
///
/// Records are immutable once loaded. Some choice slots may be empty; those
/// are never offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    id: QuestionId,
    category: String,
    topic: String,
    question: String,
    answer: String,
    choices: [String; CHOICE_SLOTS],
}

impl QuestionRecord {
    /// Creates a new question record.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyId` if the id is blank and
    /// `QuestionError::EmptyQuestion` if the question text is blank.
    pub fn new(
        id: QuestionId,
        category: impl Into<String>,
        topic: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
        choices: [String; CHOICE_SLOTS],
    ) -> Result<Self, QuestionError> {
        if id.as_str().trim().is_empty() {
            return Err(QuestionError::EmptyId);
        }
        let question = question.into();
        if question.trim().is_empty() {
            return Err(QuestionError::EmptyQuestion);
        }

        Ok(Self {
            id,
            category: category.into(),
            topic: topic.into(),
            question,
            answer: answer.into(),
            choices,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The correct-answer text.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// All four choice slots, including empty ones.
    #[must_use]
    pub fn choices(&self) -> &[String; CHOICE_SLOTS] {
        &self.choices
    }

    /// Choices to display, in slot order, skipping empty slots.
    pub fn visible_choices(&self) -> impl Iterator<Item = &str> {
        self.choices
            .iter()
            .map(String::as_str)
            .filter(|choice| !choice.trim().is_empty())
    }

    #[must_use]
    pub fn offers_choice(&self, choice: &str) -> bool {
        self.visible_choices().any(|visible| visible == choice)
    }

    /// Exact string comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, selection: &str) -> bool {
        self.answer == selection
    }

    #[must_use]
    pub fn field(&self, field: QuestionField) -> &str {
        match field {
            QuestionField::Category => &self.category,
            QuestionField::Topic => &self.topic,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn choices(values: [&str; CHOICE_SLOTS]) -> [String; CHOICE_SLOTS] {
        values.map(str::to_string)
    }

    #[test]
    fn record_rejects_blank_id() {
        let err = QuestionRecord::new(
            QuestionId::new("  "),
            "Cat",
            "Topic",
            "Q?",
            "A",
            choices(["A", "B", "", ""]),
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyId);
    }

    #[test]
    fn record_rejects_blank_question() {
        let err = QuestionRecord::new(
            QuestionId::new("1"),
            "Cat",
            "Topic",
            "",
            "A",
            choices(["A", "B", "", ""]),
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyQuestion);
    }

    #[test]
    fn visible_choices_skip_empty_slots() {
        let record = QuestionRecord::new(
            QuestionId::new("1"),
            "Cat",
            "Topic",
            "Pick one",
            "Yes",
            choices(["Yes", "", "No", "  "]),
        )
        .unwrap();

        let visible: Vec<_> = record.visible_choices().collect();
        assert_eq!(visible, vec!["Yes", "No"]);
        assert!(record.offers_choice("No"));
        assert!(!record.offers_choice(""));
    }

    #[test]
    fn correctness_is_exact_match() {
        let record = QuestionRecord::new(
            QuestionId::new("1"),
            "Cat",
            "Topic",
            "Capital of France?",
            "Paris",
            choices(["Paris", "paris", "Lyon", "Nice"]),
        )
        .unwrap();

        assert!(record.is_correct("Paris"));
        assert!(!record.is_correct("paris"));
        assert!(!record.is_correct("Paris "));
    }

    #[test]
    fn field_selects_category_or_topic() {
        let record = QuestionRecord::new(
            QuestionId::new("1"),
            "Networking",
            "DNS",
            "Q",
            "A",
            choices(["A", "B", "C", "D"]),
        )
        .unwrap();

        assert_eq!(record.field(QuestionField::Category), "Networking");
        assert_eq!(record.field(QuestionField::Topic), "DNS");
    }
}
