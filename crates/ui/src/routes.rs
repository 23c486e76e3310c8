use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::QuizView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Quiz" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
