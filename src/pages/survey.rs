//! Preference survey page.
//!
//! Multiple-choice questions render as option buttons, scale questions as
//! range sliders. Submit stays disabled until every question is answered.

use leptos::prelude::*;

use crate::app::{use_flow, FlowContext};
use crate::components::loading_spinner::LoadingSpinner;
use crate::flow::FlowEvent;
use crate::models::{QuestionId, QuestionKind, SurveyAnswer, SurveyQuestion};

#[component]
pub fn SurveyPage() -> impl IntoView {
    let flow = use_flow();
    let questions = Memo::new(move |_| flow.state.with(|s| s.survey_questions.clone()));
    let busy = move || flow.state.with(|s| s.loading);
    let can_submit = move || flow.state.with(|s| s.survey_complete() && !s.loading);
    let answered = move || {
        flow.state
            .with(|s| format!("{} of {} answered", s.survey_responses.len(), s.survey_questions.len()))
    };

    view! {
        <div class="page survey-page">
            <h2>"Career Preferences Survey"</h2>
            <p class="page-description">
                "Help us understand what you want from your next role."
            </p>
            <p class="survey-progress">{answered}</p>

            <div class="survey-questions">
                {move || {
                    questions
                        .get()
                        .into_iter()
                        .map(|question| view! { <QuestionCard flow=flow question=question /> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show
                when=busy
                fallback=move || view! {
                    <button
                        class="btn btn-primary"
                        disabled=move || !can_submit()
                        on:click=move |_| flow.send(FlowEvent::SurveySubmitted)
                    >
                        "Get Personalized Suggestions"
                    </button>
                }
            >
                <LoadingSpinner message="Personalizing your career suggestions..." />
            </Show>
        </div>
    }
}

#[component]
fn QuestionCard(flow: FlowContext, question: SurveyQuestion) -> impl IntoView {
    let id = question.id.clone();
    let anchor = format!("question-{}", id.as_str());

    let input = match question.kind {
        QuestionKind::MultipleChoice { options } => view! {
            <div class="choice-options">
                {options
                    .into_iter()
                    .map(|option| view! { <ChoiceButton flow=flow id=id.clone() option=option /> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any(),
        QuestionKind::Scale { min, max, labels } => {
            let [low, high] = labels;
            let id_for_value = id.clone();
            let current = Signal::derive(move || {
                match flow.state.with(|s| s.answer_for(&id_for_value).cloned()) {
                    Some(SurveyAnswer::Scale(value)) => Some(value),
                    _ => None,
                }
            });
            let on_input = move |ev: leptos::ev::Event| {
                if let Ok(value) = event_target_value(&ev).parse::<i64>() {
                    flow.send(FlowEvent::SurveyAnswered {
                        question_id: id.clone(),
                        answer: SurveyAnswer::Scale(value),
                    });
                }
            };

            view! {
                <div class="scale-input">
                    <span class="scale-label">{low}</span>
                    <input
                        type="range"
                        min=min.to_string()
                        max=max.to_string()
                        prop:value=move || current.get().unwrap_or(min).to_string()
                        on:input=on_input
                    />
                    <span class="scale-label">{high}</span>
                    <span class="scale-value" class:unanswered=move || current.get().is_none()>
                        {move || scale_value_label(current.get())}
                    </span>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="card survey-question" id=anchor>
            <h3>{question.question}</h3>
            {input}
        </div>
    }
}

#[component]
fn ChoiceButton(flow: FlowContext, id: QuestionId, option: String) -> impl IntoView {
    let label = option.clone();
    let id_for_check = id.clone();
    let option_for_check = option.clone();
    let selected = move || {
        flow.state.with(|s| {
            matches!(
                s.answer_for(&id_for_check),
                Some(SurveyAnswer::Choice(chosen)) if *chosen == option_for_check
            )
        })
    };

    view! {
        <button
            class="choice-option"
            class:selected=selected
            on:click=move |_| flow.send(FlowEvent::SurveyAnswered {
                question_id: id.clone(),
                answer: SurveyAnswer::Choice(option.clone()),
            })
        >
            {label}
        </button>
    }
}

/// Text beside a slider. An untouched slider sits at its minimum without
/// counting as an answer, so it asks to be moved instead.
fn scale_value_label(current: Option<i64>) -> String {
    match current {
        Some(value) => value.to_string(),
        None => "- (move the slider to answer)".to_string(),
    }
}
