use leptos::prelude::*;

use crate::components::skill_tags::SkillTags;
use crate::models::Job;

#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    view! {
        <div class="job-card">
            <div class="job-card-header">
                <h3 class="job-title">{job.title}</h3>
                <span class="job-company">{job.company}</span>
            </div>
            <p class="job-location">{job.location}</p>
            {job.salary_range.map(|salary| view! { <p class="job-salary">{salary}</p> })}
            <p class="job-description">{job.description}</p>

            <SkillTags skills=job.requirements tag_class="requirement-tag" />

            <a href=job.url target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                "Apply Now"
            </a>
        </div>
    }
}
