use leptos::prelude::*;

use crate::app::use_flow;
use crate::flow::FlowEvent;

#[component]
pub fn WelcomePage() -> impl IntoView {
    let flow = use_flow();

    view! {
        <div class="page welcome-page">
            <div class="hero">
                <h2>"Find Your Next Objective"</h2>
                <p class="page-description">
                    "Upload your resume and let AI map out the career paths that fit you best."
                </p>
                <button class="btn btn-primary btn-large" on:click=move |_| flow.send(FlowEvent::StartClicked)>
                    "Get Started"
                </button>
            </div>

            <div class="card-grid">
                <div class="card">
                    <h3>"Resume Analysis"</h3>
                    <p>"Extract your skills and experience level from a PDF or text resume"</p>
                </div>
                <div class="card">
                    <h3>"Career Score"</h3>
                    <p>"See how well you match a career path and where the gaps are"</p>
                </div>
                <div class="card">
                    <h3>"Progress Tracking"</h3>
                    <p>"Log what you learn and unlock job listings as your score grows"</p>
                </div>
            </div>
        </div>
    }
}
