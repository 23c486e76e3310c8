use dioxus::prelude::*;
use quiz_core::model::{QuizPhase, SessionState};
use services::SessionError;

use crate::context::AppContext;
use crate::views::{
    FiltersPanel, QuestionPanel, ResultsPanel, ViewError, ViewState, view_state_from_resource,
};
use crate::vm::{FilterFormVm, map_question, map_results};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

pub(crate) const NO_MATCHES: &str = "No questions match the selected filters.";

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let catalog = ctx.catalog();

    let session = use_signal(|| None::<SessionState>);
    let form = use_signal(FilterFormVm::default);
    let notice = use_signal(|| None::<&'static str>);
    let error = use_signal(|| None::<ViewError>);
    // Set while a transition waits on storage; other intents are dropped meanwhile.
    let busy = use_signal(|| false);

    let quiz_loop_for_resource = quiz_loop.clone();
    let resource = use_resource(move || {
        let quiz_loop = quiz_loop_for_resource.clone();
        let mut session = session;
        async move {
            let restored = quiz_loop.restore().await;
            session.set(Some(restored));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let on_toggle_category = {
        let catalog = catalog.clone();
        use_callback(move |category: String| {
            let mut form = form;
            let mut notice = notice;
            form.write().toggle_category(&category, &catalog);
            notice.set(None);
        })
    };
    let on_toggle_topic = use_callback(move |topic: String| {
        let mut form = form;
        let mut notice = notice;
        form.write().toggle_topic(&topic);
        notice.set(None);
    });
    let on_count_change = use_callback(move |raw: String| {
        let mut form = form;
        form.write().set_count_value(&raw);
    });

    let on_start = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |()| {
            let mut busy = busy;
            if *busy.peek() {
                return;
            }
            busy.set(true);
            let quiz_loop = quiz_loop.clone();
            let mut session = session;
            let mut notice = notice;
            let mut error = error;
            let filter = form.peek().to_filter();
            spawn(async move {
                let mut next = session.peek().clone().unwrap_or_default();
                match quiz_loop.start(&mut next, &filter).await {
                    Ok(_) => {
                        notice.set(None);
                        error.set(None);
                        session.set(Some(next));
                    }
                    Err(SessionError::NoMatches) => notice.set(Some(NO_MATCHES)),
                    Err(_) => error.set(Some(ViewError::Unknown)),
                }
                busy.set(false);
            });
        })
    };

    let on_select = use_callback(move |choice: String| {
        if *busy.peek() {
            return;
        }
        let mut session = session;
        if let Some(state) = session.write().as_mut() {
            state.select_choice(&choice);
        }
    });

    let on_submit = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |()| {
            let mut busy = busy;
            if *busy.peek() {
                return;
            }
            let mut session = session;
            let Some(mut next) = session.peek().clone() else {
                return;
            };
            busy.set(true);
            let quiz_loop = quiz_loop.clone();
            spawn(async move {
                if quiz_loop.submit(&mut next).await.is_some() {
                    session.set(Some(next));
                }
                busy.set(false);
            });
        })
    };

    let on_restart = {
        let quiz_loop = quiz_loop.clone();
        use_callback(move |()| {
            let mut busy = busy;
            if *busy.peek() {
                return;
            }
            busy.set(true);
            let quiz_loop = quiz_loop.clone();
            let mut session = session;
            let mut notice = notice;
            spawn(async move {
                let mut next = session.peek().clone().unwrap_or_default();
                quiz_loop.reset(&mut next).await;
                notice.set(None);
                session.set(Some(next));
                busy.set(false);
            });
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(
                    QuizIntents {
                        toggle_category: on_toggle_category,
                        start: on_start,
                        select: on_select,
                        submit: on_submit,
                        restart: on_restart,
                    },
                    session,
                );
            }
        }
    }

    let current = session.read().clone();
    let form_value = form.read().clone();
    let busy_now = busy();

    rsx! {
        div { class: "page quiz-page",
            if let Some(err) = error() {
                p { class: "quiz-error", role: "alert", "{err.message()}" }
            }
            match (state, current) {
                (ViewState::Error(err), _) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                (ViewState::Ready(()), Some(state)) => match state.phase() {
                    QuizPhase::Configuring => rsx! {
                        FiltersPanel {
                            categories: form_value.category_options(&catalog),
                            topics: form_value.topic_options(&catalog),
                            topic_hint: form_value.topic_hint(),
                            count: form_value.count,
                            notice: notice(),
                            busy: busy_now,
                            on_toggle_category,
                            on_toggle_topic,
                            on_count_change,
                            on_start,
                        }
                    },
                    QuizPhase::InProgress => match map_question(&state) {
                        Some(question) => rsx! {
                            QuestionPanel { question, busy: busy_now, on_select, on_submit }
                        },
                        None => rsx! {},
                    },
                    QuizPhase::Finished => rsx! {
                        ResultsPanel { results: map_results(&state), busy: busy_now, on_restart }
                    },
                },
                _ => rsx! {
                    p { "Loading..." }
                },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct QuizIntents {
    pub(crate) toggle_category: Callback<String>,
    pub(crate) start: Callback<()>,
    pub(crate) select: Callback<String>,
    pub(crate) submit: Callback<()>,
    pub(crate) restart: Callback<()>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    intents: Rc<RefCell<Option<QuizIntents>>>,
    session: Rc<RefCell<Option<Signal<Option<SessionState>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, intents: QuizIntents, session: Signal<Option<SessionState>>) {
        *self.intents.borrow_mut() = Some(intents);
        *self.session.borrow_mut() = Some(session);
    }

    pub(crate) fn intents(&self) -> QuizIntents {
        (*self.intents.borrow()).expect("quiz intents registered")
    }

    pub(crate) fn session(&self) -> Signal<Option<SessionState>> {
        (*self.session.borrow()).expect("quiz session registered")
    }
}
