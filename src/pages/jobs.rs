use leptos::prelude::*;

use crate::app::use_flow;
use crate::components::job_card::JobCard;
use crate::flow::FlowEvent;

#[component]
pub fn JobsPage() -> impl IntoView {
    let flow = use_flow();
    let career_path = flow.state.with_untracked(|s| s.session.selected_career_path.clone());
    let jobs = Memo::new(move |_| flow.state.with(|s| s.jobs.clone()));

    view! {
        <div class="page jobs-page">
            <div class="page-header">
                <h2>{format!("Job Listings: {}", career_path)}</h2>
                <button class="btn btn-secondary" on:click=move |_| flow.send(FlowEvent::BackToProgress)>
                    "Back to Dashboard"
                </button>
            </div>

            <Show
                when=move || !jobs.with(|j| j.is_empty())
                fallback=|| view! { <p class="empty-state">"No openings found for this path right now."</p> }
            >
                <div class="job-grid">
                    {move || {
                        jobs.get()
                            .into_iter()
                            .map(|job| view! { <JobCard job=job /> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
