use leptos::prelude::*;

use crate::app::use_flow;
use crate::components::career_filter::CareerPathSearch;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::suggestion_card::SuggestionCard;
use crate::flow::FlowEvent;

#[component]
pub fn CareerSuggestionsPage() -> impl IntoView {
    let flow = use_flow();
    let busy = Signal::derive(move || flow.state.with(|s| s.loading));
    let suggestions = Memo::new(move |_| {
        flow.state.with(|s| {
            s.resume_analysis
                .as_ref()
                .map(|a| a.career_suggestions.clone())
                .unwrap_or_default()
        })
    });
    let on_select = Callback::new(move |career_path: String| {
        flow.send(FlowEvent::CareerPathPicked(career_path))
    });

    view! {
        <div class="page career-suggestions-page">
            <h2>"Your Career Suggestions"</h2>
            <p class="page-description">
                "Choose a career path to see your Career Score and start tracking progress."
            </p>

            <Show when=move || busy.get()>
                <LoadingSpinner message="Calculating your career score..." />
            </Show>

            <div class="suggestion-grid">
                {move || {
                    suggestions
                        .get()
                        .into_iter()
                        .map(|suggestion| view! {
                            <SuggestionCard suggestion=suggestion on_select=on_select disabled=busy />
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <CareerPathSearch disabled=busy />
        </div>
    }
}
