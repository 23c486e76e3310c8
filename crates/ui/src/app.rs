use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

const STYLE: Asset = asset!("/assets/style.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: STYLE }
        document::Title { "Quiz" }

        div { class: "quiz-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "The quiz hit an unexpected error" }
                        p { "Restart the app to continue. Finished answers are kept." }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
