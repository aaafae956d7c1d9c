use leptos::prelude::*;

/// Inline list of skill chips. Renders nothing for an empty list.
#[component]
pub fn SkillTags(
    skills: Vec<String>,
    #[prop(optional)] limit: Option<usize>,
    #[prop(default = "skill-tag")] tag_class: &'static str,
) -> impl IntoView {
    let shown = limit.unwrap_or(skills.len());

    (!skills.is_empty()).then(|| {
        view! {
            <div class="skills-list">
                {skills
                    .into_iter()
                    .take(shown)
                    .map(|skill| view! { <span class=tag_class>{skill}</span> })
                    .collect::<Vec<_>>()}
            </div>
        }
    })
}
