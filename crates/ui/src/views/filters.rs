use dioxus::prelude::*;
use quiz_core::model::CountLimit;

use crate::vm::FilterOptionVm;

#[component]
pub fn FiltersPanel(
    categories: Vec<FilterOptionVm>,
    topics: Vec<FilterOptionVm>,
    topic_hint: &'static str,
    count: CountLimit,
    notice: Option<&'static str>,
    busy: bool,
    on_toggle_category: Callback<String>,
    on_toggle_topic: Callback<String>,
    on_count_change: Callback<String>,
    on_start: Callback<()>,
) -> Element {
    let count_options = CountLimit::OPTIONS.iter().map(|limit| {
        let value = limit.value();
        rsx! {
            option {
                value: "{value}",
                selected: *limit == count,
                "{limit.label()}"
            }
        }
    });

    rsx! {
        section { class: "quiz-filters",
            header { class: "view-header",
                h2 { class: "view-title", "Configure Quiz" }
                p { class: "view-subtitle", "Pick categories and topics, or leave them empty to use everything." }
            }
            div { class: "view-divider" }
            fieldset { class: "filter-group",
                legend { "Categories" }
                if categories.is_empty() {
                    p { class: "view-hint", "No categories found." }
                }
                for item in categories.iter() {
                    CheckboxOption { key: "{item.value}", option: item.clone(), on_toggle: on_toggle_category }
                }
            }
            fieldset { class: "filter-group",
                legend { "Topics" }
                p { class: "view-hint", "{topic_hint}" }
                for item in topics.iter() {
                    CheckboxOption { key: "{item.value}", option: item.clone(), on_toggle: on_toggle_topic }
                }
            }
            label { class: "filter-count",
                span { "Number of questions" }
                select {
                    class: "filter-select",
                    value: "{count.value()}",
                    onchange: move |evt| on_count_change.call(evt.value()),
                    {count_options}
                }
            }
            if let Some(message) = notice {
                p { class: "quiz-notice", role: "status", "{message}" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: busy,
                onclick: move |_| on_start.call(()),
                "Start Quiz"
            }
        }
    }
}

#[component]
fn CheckboxOption(option: FilterOptionVm, on_toggle: Callback<String>) -> Element {
    let value = option.value.clone();
    rsx! {
        label { class: "filter-option",
            input {
                r#type: "checkbox",
                checked: option.checked,
                onchange: move |_| on_toggle.call(value.clone()),
            }
            span { "{option.value}" }
        }
    }
}
