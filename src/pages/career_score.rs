use leptos::prelude::*;

use crate::app::use_flow;
use crate::flow::FlowEvent;

#[component]
pub fn CareerScorePage() -> impl IntoView {
    let flow = use_flow();
    let career_path = move || flow.state.with(|s| s.session.selected_career_path.clone());
    let score = move || flow.state.with(|s| s.career_score.clone());

    view! {
        <div class="page career-score-page">
            <h2>"Your Career Score"</h2>
            <p class="page-description">{move || format!("Career path: {}", career_path())}</p>

            {move || score().map(|score| {
                let value = score.display_score();
                let interpretation = score.interpretation();
                view! {
                    <div class="score-summary">
                        <div class="score-circle" style=format!("--score: {}", value)>
                            <span class="score-value">{value}</span>
                            <span class="score-max">"/100"</span>
                        </div>
                        <p class="score-interpretation">{interpretation}</p>
                    </div>

                    <div class="card-grid">
                        <ScoreList title="Strengths" list_class="strength-list" items=score.strength_areas />
                        <ScoreList title="Skill Gaps" list_class="gap-list" items=score.skill_gaps />
                        <ScoreList
                            title="Recommendations"
                            list_class="recommendation-list"
                            items=score.recommendations
                        />
                    </div>
                }
            })}

            <div class="action-buttons">
                <button class="btn btn-secondary" on:click=move |_| flow.send(FlowEvent::SurveyRequested)>
                    "Take Preference Survey"
                </button>
                <button
                    class="btn btn-primary"
                    on:click=move |_| flow.send(FlowEvent::TrackProgressRequested)
                >
                    "Start Tracking Progress"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ScoreList(title: &'static str, list_class: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{title}</h3>
            {if items.is_empty() {
                view! { <p class="empty-state">"Nothing to show yet."</p> }.into_any()
            } else {
                view! {
                    <ul class=list_class>
                        {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}
