//! Search box over the full career-path list.

use leptos::prelude::*;

use crate::app::use_flow;
use crate::flow::FlowEvent;

/// Entries shown at most, however many match.
pub const MAX_SHOWN_PATHS: usize = 12;

/// Case-insensitive substring filter. A blank term matches everything.
pub fn filter_career_paths(paths: &[String], term: &str, limit: usize) -> Vec<String> {
    let query = term.trim().to_lowercase();
    paths
        .iter()
        .filter(|path| query.is_empty() || path.to_lowercase().contains(&query))
        .take(limit)
        .cloned()
        .collect()
}

#[component]
pub fn CareerPathSearch(#[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let flow = use_flow();

    let visible = move || {
        flow.state
            .with(|s| filter_career_paths(&s.career_paths, &s.search_term, MAX_SHOWN_PATHS))
    };

    view! {
        <div class="career-search">
            <h3>"Explore Other Career Paths"</h3>
            <input
                type="text"
                class="input"
                placeholder="Search career paths..."
                prop:value=move || flow.state.with(|s| s.search_term.clone())
                on:input=move |ev| flow.send(FlowEvent::SearchTermChanged(event_target_value(&ev)))
            />
            <div class="career-path-grid">
                <For
                    each=visible
                    key=|path| path.clone()
                    children=move |path| {
                        let label = path.clone();
                        view! {
                            <button
                                class="career-path-option"
                                disabled=move || disabled.get()
                                on:click=move |_| flow.send(FlowEvent::CareerPathPicked(path.clone()))
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
            <Show when=move || visible().is_empty()>
                <p class="empty-state">"No career paths match your search."</p>
            </Show>
        </div>
    }
}
