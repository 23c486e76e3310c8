use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;
use crate::model::question::QuestionRecord;

/// Outcome of one answered question within a session.
///
/// The serialized shape (`questionId`, `isCorrect`, `userSelection`) is the
/// persisted history format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub question_id: QuestionId,
    pub is_correct: bool,
    pub user_selection: String,
}

impl HistoryEntry {
    /// Grades `selection` against the record's correct answer.
    #[must_use]
    pub fn grade(record: &QuestionRecord, selection: impl Into<String>) -> Self {
        let user_selection = selection.into();
        Self {
            question_id: record.id().clone(),
            is_correct: record.is_correct(&user_selection),
            user_selection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let entry = HistoryEntry {
            question_id: QuestionId::new("7"),
            is_correct: true,
            user_selection: "Paris".into(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"questionId":"7","isCorrect":true,"userSelection":"Paris"}"#
        );
    }

    #[test]
    fn grade_compares_exactly() {
        let record = QuestionRecord::new(
            QuestionId::new("7"),
            "Geo",
            "Capitals",
            "Capital of France?",
            "Paris",
            ["Paris", "Rome", "", ""].map(str::to_string),
        )
        .unwrap();

        assert!(HistoryEntry::grade(&record, "Paris").is_correct);
        assert!(!HistoryEntry::grade(&record, "Rome").is_correct);
    }
}
