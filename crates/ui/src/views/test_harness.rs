use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{QuestionCatalog, QuestionRecord, SessionState};
use services::QuizLoopService;
use storage::repository::InMemoryKeyValueStore;

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::{QuizIntents, QuizTestHandles};

#[derive(Clone)]
struct TestApp {
    catalog: Arc<QuestionCatalog>,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<QuestionCatalog> {
        Arc::clone(&self.catalog)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for QuizHarnessProps {}

#[component]
fn QuizHarnessRoot(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct QuizHarness {
    pub dom: VirtualDom,
    pub kv: InMemoryKeyValueStore,
    handles: QuizTestHandles,
}

impl QuizHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild and let the restore task settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    /// Let spawned transitions finish and re-render.
    pub async fn settle_events(&mut self) {
        drive_dom(&mut self.dom);
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn intents(&self) -> QuizIntents {
        self.handles.intents()
    }

    /// Run `callback` inside the dom's runtime, as a click would.
    pub fn fire<T: 'static>(&mut self, callback: Callback<T>, value: T) {
        self.dom.in_runtime(|| callback.call(value));
    }

    pub fn session(&self) -> Option<SessionState> {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.peek().clone())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a quiz screen over `records`, backed by `kv`.
pub fn setup_quiz_harness(records: Vec<QuestionRecord>, kv: InMemoryKeyValueStore) -> QuizHarness {
    let catalog = Arc::new(QuestionCatalog::new(records));
    let quiz_loop = Arc::new(QuizLoopService::new(
        Arc::clone(&catalog),
        Arc::new(kv.clone()),
    ));
    let app = Arc::new(TestApp { catalog, quiz_loop });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        QuizHarnessRoot,
        QuizHarnessProps {
            app,
            handles: handles.clone(),
        },
    );
    QuizHarness { dom, kv, handles }
}
