use quiz_core::model::SessionState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub label: String,
    pub selected: bool,
}

/// Everything the question screen renders.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub header: String,
    pub topic: String,
    pub prompt: String,
    pub choices: Vec<ChoiceVm>,
    pub can_submit: bool,
    pub submit_label: &'static str,
    pub progress_percent: f64,
    pub progress_label: String,
}

/// Map the current question of an in-progress session.
///
/// Returns `None` when no question is showing.
#[must_use]
pub fn map_question(state: &SessionState) -> Option<QuestionVm> {
    let question = state.current_question()?;
    let pending = state.pending_selection();
    let progress = state.progress();
    let percent = progress.percent();

    let choices = question
        .visible_choices()
        .map(|choice| ChoiceVm {
            label: choice.to_string(),
            selected: pending == Some(choice),
        })
        .collect();

    Some(QuestionVm {
        header: format!(
            "Question {} of {} \u{2022} {}",
            state.current_index() + 1,
            state.total(),
            question.category()
        ),
        topic: question.topic().to_string(),
        prompt: question.question().to_string(),
        choices,
        can_submit: pending.is_some(),
        submit_label: if state.is_last_question() {
            "Finish Quiz"
        } else {
            "Next Question"
        },
        progress_percent: percent,
        progress_label: format!("{percent:.0}% Completed"),
    })
}
