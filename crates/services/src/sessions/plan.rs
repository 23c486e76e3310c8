use rand::Rng;
use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::{FilterSpec, QuestionRecord};

/// Selection result for a session build.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub questions: Vec<QuestionRecord>,
    /// Number of records that passed the filters before the limit was applied.
    pub matched: usize,
}

impl SessionPlan {
    /// Total number of questions in this plan.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Returns true when no questions were selected for this session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Builds a session by filtering, shuffling, and capping the question set.
pub struct SessionBuilder<'a> {
    filter: &'a FilterSpec,
}

impl<'a> SessionBuilder<'a> {
    #[must_use]
    pub fn new(filter: &'a FilterSpec) -> Self {
        Self { filter }
    }

    /// Build a session plan using the thread-local RNG.
    pub fn build<'r>(self, records: impl IntoIterator<Item = &'r QuestionRecord>) -> SessionPlan {
        let mut rng = rng();
        self.build_with_rng(records, &mut rng)
    }

    /// Build a session plan with a caller-provided RNG.
    ///
    /// - rows outside the selected categories or topics are dropped (empty sets keep all);
    /// - survivors are shuffled uniformly (Fisher–Yates);
    /// - a non-zero `limit` keeps only the first `limit` after shuffling.
    pub fn build_with_rng<'r, R: Rng + ?Sized>(
        self,
        records: impl IntoIterator<Item = &'r QuestionRecord>,
        rng: &mut R,
    ) -> SessionPlan {
        let mut questions: Vec<QuestionRecord> = records
            .into_iter()
            .filter(|record| self.filter.matches(record))
            .cloned()
            .collect();
        let matched = questions.len();

        questions.as_mut_slice().shuffle(rng);

        if let Some(cap) = self.filter.cap() {
            questions.truncate(cap);
        }

        SessionPlan { questions, matched }
    }
}
