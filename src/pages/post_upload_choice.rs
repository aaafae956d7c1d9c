use leptos::prelude::*;

use crate::app::use_flow;
use crate::components::skill_tags::SkillTags;
use crate::flow::FlowEvent;

#[component]
pub fn PostUploadChoicePage() -> impl IntoView {
    let flow = use_flow();
    let analysis = flow.state.with_untracked(|s| s.resume_analysis.clone());

    view! {
        <div class="page post-upload-page">
            <h2>"Resume Analyzed"</h2>

            {analysis.map(|analysis| view! {
                <div class="analysis-summary card">
                    <p>
                        <strong>"Experience level: "</strong>
                        {analysis.experience_level.clone()}
                    </p>
                    <p>
                        {format!("{} career paths suggested", analysis.career_suggestions.len())}
                    </p>
                    <SkillTags skills=analysis.extracted_skills.clone() limit=10 />
                </div>
            })}

            <p class="page-description">
                "Answer a short survey about your preferences for more personalized suggestions, or go straight to your results."
            </p>

            <div class="card-grid">
                <div class="card">
                    <h3>"Take the Survey"</h3>
                    <p>"Tell us about your work style and priorities"</p>
                    <button class="btn btn-primary" on:click=move |_| flow.send(FlowEvent::SurveyChosen)>
                        "Start Survey"
                    </button>
                </div>
                <div class="card">
                    <h3>"View Results"</h3>
                    <p>"See career suggestions based on your resume alone"</p>
                    <button class="btn btn-secondary" on:click=move |_| flow.send(FlowEvent::ResultsChosen)>
                        "View Career Suggestions"
                    </button>
                </div>
            </div>
        </div>
    }
}
