use std::path::Path;
use std::sync::Arc;

use quiz_core::model::{QuestionCatalog, QuestionRecord};
use storage::questions::load_questions;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::sessions::QuizLoopService;

/// Assembles app-facing services from a question set and a storage backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<QuestionCatalog>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    /// Build services from already-loaded questions and storage.
    #[must_use]
    pub fn new(questions: Vec<QuestionRecord>, storage: &Storage) -> Self {
        let catalog = Arc::new(QuestionCatalog::new(questions));
        let quiz_loop = Arc::new(QuizLoopService::new(
            Arc::clone(&catalog),
            Arc::clone(&storage.kv),
        ));
        Self { catalog, quiz_loop }
    }

    /// Build services backed by `SQLite` storage and a CSV question file.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the question file cannot be read or
    /// storage initialization fails.
    pub async fn new_sqlite(db_url: &str, questions_path: &Path) -> Result<Self, AppServicesError> {
        let questions = load_questions(questions_path)?;
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(questions, &storage))
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<QuestionCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
