use dioxus::prelude::*;

use crate::vm::{ResultsVm, ReviewItemVm};

#[component]
pub fn ResultsPanel(results: ResultsVm, busy: bool, on_restart: Callback<()>) -> Element {
    rsx! {
        section { class: "quiz-results",
            header { class: "view-header",
                h2 { class: "view-title", "Quiz Complete" }
                p { class: "results-score", "{results.score_label}" }
            }
            div { class: "view-divider" }
            ol { class: "results-review",
                for item in results.items.iter() {
                    ReviewItem { key: "{item.number}", item: item.clone() }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_restart.call(()),
                "Restart Quiz"
            }
        }
    }
}

#[component]
fn ReviewItem(item: ReviewItemVm) -> Element {
    let class = if item.is_correct {
        "review-item review-item--correct"
    } else {
        "review-item review-item--wrong"
    };
    rsx! {
        li { class: "{class}",
            p { class: "review-prompt", "{item.number}. {item.prompt}" }
            p { class: "review-answer", "Your answer: {item.your_answer}" }
            if let Some(correct) = item.correct_answer.as_ref() {
                p { class: "review-correct", "Correct answer: {correct}" }
            }
        }
    }
}
