use leptos::prelude::*;

use crate::components::skill_tags::SkillTags;
use crate::models::CareerSuggestion;

#[component]
pub fn SuggestionCard(
    suggestion: CareerSuggestion,
    #[prop(into)] on_select: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let match_pct = suggestion.match_percent();
    let match_class = if match_pct >= 70 {
        "match-high"
    } else if match_pct >= 40 {
        "match-medium"
    } else {
        "match-low"
    };
    let career_path = suggestion.career_path.clone();

    view! {
        <div class="suggestion-card">
            <div class="suggestion-card-header">
                <h3 class="suggestion-title">{suggestion.career_path.clone()}</h3>
                <span class={format!("match-score {}", match_class)}>
                    {format!("{}% match", match_pct)}
                </span>
            </div>

            <p class="suggestion-reasoning">{suggestion.reasoning.clone()}</p>

            {suggestion.preference_match.clone().map(|pref| view! {
                <p class="preference-match">
                    <strong>"Matches your preferences: "</strong>
                    {pref}
                </p>
            })}

            <SkillTags skills=suggestion.key_skills.clone() />

            <button
                class="btn btn-primary"
                disabled=move || disabled.get()
                on:click=move |_| on_select.run(career_path.clone())
            >
                "Choose This Path"
            </button>
        </div>
    }
}
