//! Question file reader.
//!
//! The question bank is a CSV file with a header row:
//! `QuestionID,Category,Topic,Question,Answer,AnswerChoice1..AnswerChoice4`.
//! Fields are trimmed, blank rows are skipped, and missing choice columns read
//! as empty choices. Rows that cannot form a question are logged and skipped.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use quiz_core::model::{QuestionError, QuestionId, QuestionRecord};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RowSourceError {
    #[error("cannot open question file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("question file has no {column} column")]
    MissingColumn { column: &'static str },
}

const REQUIRED_COLUMNS: [&str; 2] = ["QuestionID", "Question"];

/// One CSV row as it appears in the file.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    #[serde(rename = "QuestionID")]
    id: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Topic", default)]
    topic: String,
    #[serde(rename = "Question")]
    question: String,
    #[serde(rename = "Answer", default)]
    answer: String,
    #[serde(rename = "AnswerChoice1", default)]
    choice1: String,
    #[serde(rename = "AnswerChoice2", default)]
    choice2: String,
    #[serde(rename = "AnswerChoice3", default)]
    choice3: String,
    #[serde(rename = "AnswerChoice4", default)]
    choice4: String,
}

impl RawQuestion {
    fn into_record(self) -> Result<QuestionRecord, QuestionError> {
        QuestionRecord::new(
            QuestionId::new(self.id),
            self.category,
            self.topic,
            self.question,
            self.answer,
            [self.choice1, self.choice2, self.choice3, self.choice4],
        )
    }
}

/// Load every question from the CSV file at `path`.
///
/// # Errors
///
/// Returns `RowSourceError::Io` if the file cannot be opened, and the errors of
/// [`read_questions`] otherwise.
pub fn load_questions(path: &Path) -> Result<Vec<QuestionRecord>, RowSourceError> {
    let file = File::open(path).map_err(|source| RowSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = read_questions(file)?;
    tracing::info!(path = %path.display(), count = questions.len(), "loaded question file");
    Ok(questions)
}

/// Parse questions from any CSV reader.
///
/// # Errors
///
/// Returns `RowSourceError::MissingColumn` when the header lacks `QuestionID`
/// or `Question`, and `RowSourceError::Csv` when the file is not readable CSV.
/// A single bad row is skipped with a warning naming its line.
pub fn read_questions<R: io::Read>(reader: R) -> Result<Vec<QuestionRecord>, RowSourceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(RowSourceError::MissingColumn { column });
    }

    let mut questions = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        let line = row.position().map_or(0, csv::Position::line);
        let record = row
            .deserialize::<RawQuestion>(Some(&headers))
            .map_err(|err| err.to_string())
            .and_then(|raw| raw.into_record().map_err(|err| err.to_string()));
        match record {
            Ok(question) => questions.push(question),
            Err(reason) => tracing::warn!(line, %reason, "skipping question row"),
        }
    }

    Ok(questions)
}
