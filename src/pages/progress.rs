//! Progress dashboard: current score, log form, recent history and the
//! gate to job listings.

use leptos::prelude::*;

use crate::app::use_flow;
use crate::components::skill_tags::SkillTags;
use crate::flow::{FlowEvent, JOBS_UNLOCK_SCORE};
use crate::models::ProgressDraft;

#[component]
pub fn ProgressPage() -> impl IntoView {
    let flow = use_flow();
    let (log_entry, set_log_entry) = signal(String::new());
    let (activities, set_activities) = signal(String::new());
    let (skills, set_skills) = signal(String::new());

    let career_path = move || flow.state.with(|s| s.session.selected_career_path.clone());
    let score = move || flow.state.with(|s| s.current_score().clamp(0.0, 100.0).round() as u32);
    let unlocked = move || flow.state.with(|s| s.jobs_unlocked());
    let jobs_enabled = move || flow.state.with(|s| s.jobs_button_enabled());
    let logs = Memo::new(move |_| flow.state.with(|s| s.progress_logs.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ProgressDraft::parse(&log_entry.get(), &activities.get(), &skills.get());
        if let Some(draft) = draft {
            flow.send(FlowEvent::ProgressLogged(draft));
            set_log_entry.set(String::new());
            set_activities.set(String::new());
            set_skills.set(String::new());
        }
    };

    view! {
        <div class="page progress-page">
            <h2>"Progress Dashboard"</h2>
            <p class="page-description">{move || format!("Tracking: {}", career_path())}</p>

            <div class="card score-card">
                <div class="score-header">
                    <span>"Career Score"</span>
                    <span class="score-value">{move || format!("{}/100", score())}</span>
                </div>
                <div class="score-bar">
                    <div class="score-bar-fill" style=move || format!("width: {}%", score())></div>
                </div>
                <button
                    class="btn btn-primary"
                    class:locked=move || !unlocked()
                    disabled=move || !jobs_enabled()
                    on:click=move |_| flow.send(FlowEvent::ViewJobsRequested)
                >
                    {move || {
                        if unlocked() {
                            "View Job Listings".to_string()
                        } else {
                            format!(
                                "Unlock Jobs at {}+ Score (Current: {})",
                                JOBS_UNLOCK_SCORE,
                                score()
                            )
                        }
                    }}
                </button>
            </div>

            <form class="card progress-form" on:submit=on_submit>
                <h3>"Log Progress"</h3>
                <textarea
                    class="input"
                    placeholder="What did you work on?"
                    prop:value=move || log_entry.get()
                    on:input=move |ev| set_log_entry.set(event_target_value(&ev))
                ></textarea>
                <input
                    type="text"
                    class="input"
                    placeholder="Activities completed (comma separated)"
                    prop:value=move || activities.get()
                    on:input=move |ev| set_activities.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    class="input"
                    placeholder="Skills improved (comma separated)"
                    prop:value=move || skills.get()
                    on:input=move |ev| set_skills.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || log_entry.with(|text| text.trim().is_empty())
                >
                    "Add Entry"
                </button>
            </form>

            <div class="card progress-history">
                <h3>"Recent Activity"</h3>
                <Show
                    when=move || !logs.with(|l| l.is_empty())
                    fallback=|| view! { <p class="empty-state">"No progress logged yet."</p> }
                >
                    <ul class="log-list">
                        {move || {
                            logs.get()
                                .into_iter()
                                .map(|entry| {
                                    let date = entry.date().to_string();
                                    view! {
                                        <li class="log-item">
                                            <span class="log-date">{date}</span>
                                            <p class="log-text">{entry.log_entry}</p>
                                            <SkillTags skills=entry.activities_completed tag_class="activity-tag" />
                                            <SkillTags skills=entry.skills_improved />
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </div>
        </div>
    }
}
