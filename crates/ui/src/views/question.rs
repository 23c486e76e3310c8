use dioxus::prelude::*;

use crate::vm::{ChoiceVm, QuestionVm};

#[component]
pub fn QuestionPanel(
    question: QuestionVm,
    busy: bool,
    on_select: Callback<String>,
    on_submit: Callback<()>,
) -> Element {
    let width = format!("width: {:.0}%;", question.progress_percent);
    rsx! {
        section { class: "quiz-question",
            header { class: "view-header",
                p { class: "question-meta", "{question.header}" }
                if !question.topic.is_empty() {
                    p { class: "question-topic", "{question.topic}" }
                }
            }
            h2 { class: "question-prompt", "{question.prompt}" }
            div { class: "question-choices", role: "radiogroup",
                for choice in question.choices.iter() {
                    ChoiceButton { key: "{choice.label}", choice: choice.clone(), on_select }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: busy || !question.can_submit,
                onclick: move |_| on_submit.call(()),
                "{question.submit_label}"
            }
            div { class: "quiz-progress",
                div { class: "quiz-progress-track",
                    div { class: "quiz-progress-fill", style: "{width}" }
                }
                span { class: "quiz-progress-label", "{question.progress_label}" }
            }
        }
    }
}

#[component]
fn ChoiceButton(choice: ChoiceVm, on_select: Callback<String>) -> Element {
    let label = choice.label.clone();
    let class = if choice.selected {
        "choice choice--selected"
    } else {
        "choice"
    };
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            role: "radio",
            aria_checked: "{choice.selected}",
            onclick: move |_| on_select.call(label.clone()),
            "{choice.label}"
        }
    }
}
