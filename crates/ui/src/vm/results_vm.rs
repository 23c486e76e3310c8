use quiz_core::model::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub number: usize,
    pub prompt: String,
    pub your_answer: String,
    pub is_correct: bool,
    /// Only set for misses.
    pub correct_answer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub score_label: String,
    pub items: Vec<ReviewItemVm>,
}

#[must_use]
pub fn map_results(state: &SessionState) -> ResultsVm {
    let score = state.score();
    let items = state
        .review()
        .enumerate()
        .map(|(idx, (question, entry))| ReviewItemVm {
            number: idx + 1,
            prompt: question.question().to_string(),
            your_answer: entry.user_selection.clone(),
            is_correct: entry.is_correct,
            correct_answer: (!entry.is_correct).then(|| question.answer().to_string()),
        })
        .collect();

    ResultsVm {
        score_label: format!("Score: {} / {}", score.correct, score.total),
        items,
    }
}
