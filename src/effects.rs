//! Effect runner: performs the side effects requested by
//! [`transition`](crate::flow::transition) and reports each outcome back as a
//! [`FlowEvent`].

use leptos::logging::{error, log, warn};

use crate::api::ApiClient;
use crate::flow::{Effect, FlowEvent};

/// Runs one effect to completion. Effects with no outcome the flow cares
/// about (storage writes, alerts) return `None`.
pub async fn perform(api: &ApiClient, effect: Effect) -> Option<FlowEvent> {
    match effect {
        Effect::CreateUser => Some(match api.create_user().await {
            Ok(user) => {
                log!("Created session user {}", user.id);
                FlowEvent::UserCreated(user.id)
            }
            Err(e) => {
                error!("Error creating user: {}", e);
                FlowEvent::UserCreationFailed(e.into())
            }
        }),
        Effect::PersistUserId(user_id) => {
            if let Err(e) = crate::storage::save_user_id(&user_id) {
                warn!("{}", e);
            }
            None
        }
        Effect::FetchCareerPaths => Some(match api.career_paths().await {
            Ok(paths) => FlowEvent::CareerPathsLoaded(paths),
            Err(e) => {
                error!("Error loading career paths: {}", e);
                FlowEvent::CareerPathsFailed(e.into())
            }
        }),
        Effect::FetchSurveyQuestions => Some(match api.survey_questions().await {
            Ok(questions) => FlowEvent::SurveyQuestionsLoaded(questions),
            Err(e) => {
                error!("Error loading survey questions: {}", e);
                FlowEvent::SurveyQuestionsFailed(e.into())
            }
        }),
        Effect::UploadResume { user_id, file } => {
            log!("Uploading resume {} ({} bytes)", file.name, file.bytes.len());
            Some(match api.upload_resume(&user_id, &file).await {
                Ok(analysis) => FlowEvent::ResumeAnalyzed(analysis),
                Err(e) => {
                    error!("Error uploading resume: {}", e);
                    FlowEvent::ResumeUploadFailed(e.into())
                }
            })
        }
        Effect::ProbeCareerScore {
            user_id,
            career_path,
        } => Some(match api.calculate_career_score(&user_id, &career_path).await {
            Ok(score) => FlowEvent::CareerScoreProbed { career_path, score },
            Err(e) => {
                error!("Error checking career score for {}: {}", career_path, e);
                FlowEvent::CareerScoreProbeFailed {
                    career_path,
                    error: e.into(),
                }
            }
        }),
        Effect::SelectCareerPath {
            user_id,
            career_path,
        } => Some(match api.select_career_path(&user_id, &career_path).await {
            Ok(()) => FlowEvent::CareerPathRecorded(career_path),
            Err(e) => {
                error!("Error selecting career path {}: {}", career_path, e);
                FlowEvent::CareerPathRecordFailed {
                    career_path,
                    error: e.into(),
                }
            }
        }),
        Effect::CalculateCareerScore {
            user_id,
            career_path,
        } => Some(match api.calculate_career_score(&user_id, &career_path).await {
            Ok(score) => FlowEvent::CareerScoreCalculated { career_path, score },
            Err(e) => {
                error!("Error calculating career score for {}: {}", career_path, e);
                FlowEvent::CareerScoreFailed {
                    career_path,
                    error: e.into(),
                }
            }
        }),
        Effect::SubmitSurvey { user_id, responses } => {
            Some(match api.submit_survey(&user_id, &responses).await {
                Ok(()) => FlowEvent::SurveyAccepted,
                Err(e) => {
                    error!("Error submitting survey: {}", e);
                    FlowEvent::SurveySubmitFailed(e.into())
                }
            })
        }
        Effect::FetchEnhancedSuggestions { user_id } => {
            Some(match api.enhanced_suggestions(&user_id).await {
                Ok(analysis) => FlowEvent::EnhancedSuggestionsReceived(analysis),
                Err(e) => {
                    error!("Error getting enhanced suggestions: {}", e);
                    FlowEvent::EnhancedSuggestionsFailed(e.into())
                }
            })
        }
        Effect::AddProgressLog(entry) => Some(match api.add_progress_log(&entry).await {
            Ok(()) => FlowEvent::ProgressLogSaved,
            Err(e) => {
                error!("Error adding progress log: {}", e);
                FlowEvent::ProgressLogFailed(e.into())
            }
        }),
        Effect::FetchUserProgress { user_id } => Some(match api.user_progress(&user_id).await {
            Ok(progress) => FlowEvent::ProgressLoaded(progress),
            Err(e) => {
                error!("Error loading progress: {}", e);
                FlowEvent::ProgressFailed(e.into())
            }
        }),
        Effect::FetchJobs { career_path } => Some(match api.jobs(&career_path).await {
            Ok(jobs) => FlowEvent::JobsLoaded(jobs),
            Err(e) => {
                error!("Error loading jobs for {}: {}", career_path, e);
                FlowEvent::JobsFailed(e.into())
            }
        }),
        Effect::Alert(message) => {
            alert(&message);
            None
        }
    }
}

/// Blocking browser alert.
fn alert(message: &str) {
    let shown = web_sys::window().map(|w| w.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        warn!("Could not show alert: {}", message);
    }
}
