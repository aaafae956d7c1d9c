use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::components::nav_bar::NavBar;
use crate::components::warning_dialog::WarningDialogView;
use crate::config::AppConfig;
use crate::effects;
use crate::flow::{transition, FlowEvent, FlowState, Step};
use crate::pages::career_score::CareerScorePage;
use crate::pages::career_suggestions::CareerSuggestionsPage;
use crate::pages::jobs::JobsPage;
use crate::pages::post_upload_choice::PostUploadChoicePage;
use crate::pages::progress::ProgressPage;
use crate::pages::survey::SurveyPage;
use crate::pages::upload::UploadPage;
use crate::pages::welcome::WelcomePage;

/// Flow state plus the single entry point for changing it.
#[derive(Clone, Copy)]
pub struct FlowContext {
    pub state: RwSignal<FlowState>,
    pub dispatch: Callback<FlowEvent>,
}

impl FlowContext {
    pub fn send(&self, event: FlowEvent) {
        self.dispatch.run(event);
    }
}

pub fn use_flow() -> FlowContext {
    expect_context::<FlowContext>()
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log!("API base URL: {:?}", config.api_base_url);
    let api = ApiClient::new(&config);

    let state = RwSignal::new(FlowState::default());
    let on_event = Callback::new(move |event: FlowEvent| dispatch(state, api.clone(), event));
    provide_context(FlowContext {
        state,
        dispatch: on_event,
    });

    // Create the session user once on mount
    Effect::new(move |_| on_event.run(FlowEvent::AppStarted));

    // Pages rebuild only when the step changes, not on every state update
    let step = Memo::new(move |_| state.with(|s| s.step()));
    let modal = Memo::new(move |_| state.with(|s| s.session.modal.clone()));

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="content">
                {move || match step.get() {
                    Step::Welcome => view! { <WelcomePage /> }.into_any(),
                    Step::Upload => view! { <UploadPage /> }.into_any(),
                    Step::PostUploadChoice => view! { <PostUploadChoicePage /> }.into_any(),
                    Step::Survey => view! { <SurveyPage /> }.into_any(),
                    Step::CareerSuggestions => view! { <CareerSuggestionsPage /> }.into_any(),
                    Step::CareerScore => view! { <CareerScorePage /> }.into_any(),
                    Step::Progress => view! { <ProgressPage /> }.into_any(),
                    Step::Jobs => view! { <JobsPage /> }.into_any(),
                }}
            </main>
            {move || modal.get().map(|dialog| view! { <WarningDialogView dialog=dialog /> })}
            <footer class="app-footer">
                <p>"NextObjective - AI-powered career guidance"</p>
            </footer>
        </div>
    }
}

/// Applies `event`, then runs the resulting effects in order on one task.
/// Each effect's outcome is dispatched as soon as it completes.
fn dispatch(state: RwSignal<FlowState>, api: ApiClient, event: FlowEvent) {
    let before = state.with_untracked(|s| s.step());
    let mut pending = Vec::new();
    state.update(|current| {
        let (next, requested) = transition(std::mem::take(current), event);
        *current = next;
        pending = requested;
    });

    let after = state.with_untracked(|s| s.step());
    if before != after {
        log!("Step: {} -> {}", before.id(), after.id());
    }

    if pending.is_empty() {
        return;
    }
    spawn_local(async move {
        for effect in pending {
            if let Some(outcome) = effects::perform(&api, effect).await {
                dispatch(state, api.clone(), outcome);
            }
        }
    });
}
