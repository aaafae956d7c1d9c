//! Step-based flow controller.
//!
//! All session state lives in [`FlowState`]. Every user action and every
//! completed request arrives as a [`FlowEvent`]; [`transition`] folds it into
//! the state and returns the [`Effect`]s (requests, storage writes, alerts)
//! that the runtime must perform next. Nothing in this module touches the
//! browser, so the whole flow is testable natively.

use crate::models::{
    CareerScore, Job, ProgressDraft, ProgressLogEntry, ProgressLogRequest, QuestionId,
    ResumeAnalysis, ResumeFile, SurveyAnswer, SurveyQuestion, SurveyResponses, UserProgress,
};

/// Probed scores below this surface the low-match warning.
pub const WARNING_THRESHOLD: f64 = 60.0;
/// Minimum career score for the jobs screen.
pub const JOBS_UNLOCK_SCORE: f64 = 70.0;

pub const UPLOAD_FAILED_MESSAGE: &str = "Error analyzing resume. Please try again.";
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Please upload your resume as a PDF or TXT file.";
pub const SURVEY_FAILED_MESSAGE: &str = "Error submitting survey. Please try again.";
pub const ENHANCEMENT_FAILED_MESSAGE: &str =
    "Your survey was saved, but personalized suggestions are unavailable right now. Showing your original suggestions.";
pub const JOBS_LOCKED_MESSAGE: &str =
    "You need a Career Score of 70+ to unlock job listings. Keep improving!";

/// Screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Welcome,
    Upload,
    PostUploadChoice,
    Survey,
    CareerSuggestions,
    CareerScore,
    Progress,
    Jobs,
}

impl Step {
    pub fn id(self) -> &'static str {
        match self {
            Step::Welcome => "welcome",
            Step::Upload => "upload",
            Step::PostUploadChoice => "post-upload-choice",
            Step::Survey => "survey",
            Step::CareerSuggestions => "career-suggestions",
            Step::CareerScore => "career-score",
            Step::Progress => "progress",
            Step::Jobs => "jobs",
        }
    }

    /// Steps that only make sense once a career path has been chosen.
    pub fn requires_career_path(self) -> bool {
        matches!(self, Step::CareerScore | Step::Progress | Step::Jobs)
    }
}

/// Low-match confirmation shown over the suggestions screen.
#[derive(Debug, Clone, PartialEq)]
pub struct WarningDialog {
    pub career_path: String,
    pub potential_score: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub user_id: String,
    pub step: Step,
    pub selected_career_path: String,
    pub modal: Option<WarningDialog>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowState {
    pub session: Session,
    pub resume_analysis: Option<ResumeAnalysis>,
    pub career_score: Option<CareerScore>,
    pub career_paths: Vec<String>,
    pub survey_questions: Vec<SurveyQuestion>,
    pub survey_responses: SurveyResponses,
    pub progress_logs: Vec<ProgressLogEntry>,
    pub jobs: Vec<Job>,
    pub search_term: String,
    /// Spinner / disabled-button flag. Not a lock.
    pub loading: bool,
}

impl FlowState {
    pub fn step(&self) -> Step {
        self.session.step
    }

    pub fn current_score(&self) -> f64 {
        self.career_score
            .as_ref()
            .map(|s| s.current_score)
            .unwrap_or(0.0)
    }

    pub fn jobs_unlocked(&self) -> bool {
        self.career_score
            .as_ref()
            .is_some_and(|s| s.current_score >= JOBS_UNLOCK_SCORE)
    }

    /// The jobs button is clickable only once unlocked and while idle.
    pub fn jobs_button_enabled(&self) -> bool {
        self.jobs_unlocked() && !self.loading
    }

    /// Every fetched question has an answer.
    pub fn survey_complete(&self) -> bool {
        self.survey_questions
            .iter()
            .all(|q| self.survey_responses.contains_key(&q.id))
    }

    pub fn dashboard_available(&self) -> bool {
        !self.session.selected_career_path.is_empty()
    }

    pub fn answer_for(&self, id: &QuestionId) -> Option<&SurveyAnswer> {
        self.survey_responses.get(id)
    }
}

/// Everything that can happen to the flow: user actions and request outcomes.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    AppStarted,
    UserCreated(String),
    UserCreationFailed(String),
    CareerPathsLoaded(Vec<String>),
    CareerPathsFailed(String),
    SurveyQuestionsLoaded(Vec<SurveyQuestion>),
    SurveyQuestionsFailed(String),

    StartClicked,
    ResumeChosen(ResumeFile),
    ResumeAnalyzed(ResumeAnalysis),
    ResumeUploadFailed(String),

    SurveyChosen,
    ResultsChosen,

    SearchTermChanged(String),
    CareerPathPicked(String),
    CareerScoreProbed { career_path: String, score: CareerScore },
    CareerScoreProbeFailed { career_path: String, error: String },
    WarningConfirmed,
    WarningCancelled,
    CareerPathRecorded(String),
    CareerPathRecordFailed { career_path: String, error: String },
    CareerScoreCalculated { career_path: String, score: CareerScore },
    CareerScoreFailed { career_path: String, error: String },

    SurveyRequested,
    TrackProgressRequested,

    SurveyAnswered { question_id: QuestionId, answer: SurveyAnswer },
    SurveySubmitted,
    SurveyAccepted,
    SurveySubmitFailed(String),
    EnhancedSuggestionsReceived(ResumeAnalysis),
    EnhancedSuggestionsFailed(String),

    ProgressLogged(ProgressDraft),
    ProgressLogSaved,
    ProgressLogFailed(String),
    ProgressLoaded(UserProgress),
    ProgressFailed(String),

    ViewJobsRequested,
    JobsLoaded(Vec<Job>),
    JobsFailed(String),
    BackToProgress,

    HomeRequested,
    DashboardRequested,
}

/// Work the runtime performs after a transition, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CreateUser,
    PersistUserId(String),
    FetchCareerPaths,
    FetchSurveyQuestions,
    UploadResume { user_id: String, file: ResumeFile },
    ProbeCareerScore { user_id: String, career_path: String },
    SelectCareerPath { user_id: String, career_path: String },
    CalculateCareerScore { user_id: String, career_path: String },
    SubmitSurvey { user_id: String, responses: SurveyResponses },
    FetchEnhancedSuggestions { user_id: String },
    AddProgressLog(ProgressLogRequest),
    FetchUserProgress { user_id: String },
    FetchJobs { career_path: String },
    Alert(String),
}

/// Applies one event. Events that do not fit the current step are stale
/// (a late response, a click from a screen no longer shown) and leave the
/// state unchanged apart from clearing `loading` for request outcomes.
pub fn transition(mut state: FlowState, event: FlowEvent) -> (FlowState, Vec<Effect>) {
    let step = state.session.step;
    let mut effects = Vec::new();

    match event {
        FlowEvent::AppStarted => effects.push(Effect::CreateUser),
        FlowEvent::UserCreated(user_id) => {
            state.session.user_id = user_id.clone();
            effects.push(Effect::PersistUserId(user_id));
            effects.push(Effect::FetchCareerPaths);
            effects.push(Effect::FetchSurveyQuestions);
        }
        FlowEvent::UserCreationFailed(_) => {
            effects.push(Effect::FetchCareerPaths);
            effects.push(Effect::FetchSurveyQuestions);
        }
        FlowEvent::CareerPathsLoaded(paths) => state.career_paths = paths,
        FlowEvent::SurveyQuestionsLoaded(questions) => {
            // Answers keyed by ids that no longer exist would block completion.
            state
                .survey_responses
                .retain(|id, _| questions.iter().any(|q| &q.id == id));
            state.survey_questions = questions;
        }
        FlowEvent::CareerPathsFailed(_) | FlowEvent::SurveyQuestionsFailed(_) => {}

        FlowEvent::StartClicked if step == Step::Welcome => state.session.step = Step::Upload,
        FlowEvent::ResumeChosen(file) if step == Step::Upload && !state.loading => {
            if file.is_supported() {
                state.loading = true;
                effects.push(Effect::UploadResume {
                    user_id: state.session.user_id.clone(),
                    file,
                });
            } else {
                effects.push(Effect::Alert(UNSUPPORTED_FILE_MESSAGE.to_string()));
            }
        }
        FlowEvent::ResumeAnalyzed(analysis) => {
            state.loading = false;
            if step == Step::Upload {
                state.resume_analysis = Some(analysis);
                state.session.step = Step::PostUploadChoice;
            }
        }
        FlowEvent::ResumeUploadFailed(_) => {
            state.loading = false;
            effects.push(Effect::Alert(UPLOAD_FAILED_MESSAGE.to_string()));
        }

        FlowEvent::SurveyChosen if step == Step::PostUploadChoice => {
            state.session.step = Step::Survey
        }
        FlowEvent::ResultsChosen if step == Step::PostUploadChoice => {
            state.session.step = Step::CareerSuggestions
        }

        FlowEvent::SearchTermChanged(term) => state.search_term = term,
        FlowEvent::CareerPathPicked(career_path)
            if step == Step::CareerSuggestions
                && !career_path.is_empty()
                && state.session.modal.is_none()
                && !state.loading =>
        {
            state.loading = true;
            effects.push(Effect::ProbeCareerScore {
                user_id: state.session.user_id.clone(),
                career_path,
            });
        }
        FlowEvent::CareerScoreProbed { career_path, score } => {
            state.loading = false;
            if step == Step::CareerSuggestions && state.session.modal.is_none() {
                if score.current_score < WARNING_THRESHOLD {
                    state.session.modal = Some(WarningDialog {
                        career_path,
                        potential_score: score.current_score,
                    });
                } else {
                    proceed_with(&mut state, career_path, &mut effects);
                }
            }
        }
        FlowEvent::WarningConfirmed => {
            if let Some(dialog) = state.session.modal.take() {
                proceed_with(&mut state, dialog.career_path, &mut effects);
            }
        }
        FlowEvent::WarningCancelled => state.session.modal = None,
        FlowEvent::CareerPathRecorded(career_path) => {
            if step == Step::CareerSuggestions {
                effects.push(Effect::CalculateCareerScore {
                    user_id: state.session.user_id.clone(),
                    career_path,
                });
            } else {
                state.loading = false;
            }
        }
        FlowEvent::CareerScoreCalculated { career_path, score } => {
            state.loading = false;
            if step == Step::CareerSuggestions && !career_path.is_empty() {
                state.session.selected_career_path = career_path;
                state.career_score = Some(score);
                state.session.step = Step::CareerScore;
            }
        }
        FlowEvent::CareerScoreProbeFailed { .. }
        | FlowEvent::CareerPathRecordFailed { .. }
        | FlowEvent::CareerScoreFailed { .. } => state.loading = false,

        FlowEvent::SurveyRequested if step == Step::CareerScore => {
            state.session.step = Step::Survey
        }
        FlowEvent::TrackProgressRequested if step == Step::CareerScore => {
            enter_progress(&mut state, &mut effects)
        }

        FlowEvent::SurveyAnswered {
            question_id,
            answer,
        } if step == Step::Survey => {
            let accepted = state
                .survey_questions
                .iter()
                .find(|q| q.id == question_id)
                .and_then(|q| q.accept(answer));
            if let Some(answer) = accepted {
                state.survey_responses.insert(question_id, answer);
            }
        }
        FlowEvent::SurveySubmitted
            if step == Step::Survey && state.survey_complete() && !state.loading =>
        {
            state.loading = true;
            effects.push(Effect::SubmitSurvey {
                user_id: state.session.user_id.clone(),
                responses: state.survey_responses.clone(),
            });
        }
        FlowEvent::SurveyAccepted => {
            if step == Step::Survey {
                effects.push(Effect::FetchEnhancedSuggestions {
                    user_id: state.session.user_id.clone(),
                });
            } else {
                state.loading = false;
            }
        }
        FlowEvent::SurveySubmitFailed(_) => {
            state.loading = false;
            effects.push(Effect::Alert(SURVEY_FAILED_MESSAGE.to_string()));
        }
        FlowEvent::EnhancedSuggestionsReceived(analysis) => {
            state.loading = false;
            if step == Step::Survey {
                state.resume_analysis = Some(analysis);
                state.session.step = Step::CareerSuggestions;
            }
        }
        FlowEvent::EnhancedSuggestionsFailed(_) => {
            state.loading = false;
            if step == Step::Survey {
                effects.push(Effect::Alert(ENHANCEMENT_FAILED_MESSAGE.to_string()));
                state.session.step = Step::CareerSuggestions;
            }
        }

        FlowEvent::ProgressLogged(draft) if step == Step::Progress => {
            effects.push(Effect::AddProgressLog(ProgressLogRequest {
                user_id: state.session.user_id.clone(),
                career_path: state.session.selected_career_path.clone(),
                log_entry: draft.log_entry,
                activities_completed: draft.activities_completed,
                skills_improved: draft.skills_improved,
            }));
        }
        FlowEvent::ProgressLogSaved => effects.push(Effect::FetchUserProgress {
            user_id: state.session.user_id.clone(),
        }),
        FlowEvent::ProgressLoaded(progress) => {
            if let Some(score) = progress.career_score {
                state.career_score = Some(score);
            }
            state.progress_logs = progress.recent_logs;
        }
        FlowEvent::ProgressLogFailed(_) | FlowEvent::ProgressFailed(_) => {}

        FlowEvent::ViewJobsRequested if step == Step::Progress && !state.loading => {
            if state.jobs_unlocked() {
                state.loading = true;
                effects.push(Effect::FetchJobs {
                    career_path: state.session.selected_career_path.clone(),
                });
            } else {
                effects.push(Effect::Alert(JOBS_LOCKED_MESSAGE.to_string()));
            }
        }
        FlowEvent::JobsLoaded(jobs) => {
            state.loading = false;
            if step == Step::Progress {
                state.jobs = jobs;
                state.session.step = Step::Jobs;
            }
        }
        FlowEvent::JobsFailed(_) => state.loading = false,
        FlowEvent::BackToProgress if step == Step::Jobs => state.session.step = Step::Progress,

        FlowEvent::HomeRequested => {
            state.session.modal = None;
            state.session.step = Step::Welcome;
        }
        FlowEvent::DashboardRequested if state.dashboard_available() => {
            state.session.modal = None;
            enter_progress(&mut state, &mut effects);
        }

        // Guarded user actions that did not match their step.
        FlowEvent::StartClicked
        | FlowEvent::ResumeChosen(_)
        | FlowEvent::SurveyChosen
        | FlowEvent::ResultsChosen
        | FlowEvent::CareerPathPicked(_)
        | FlowEvent::SurveyRequested
        | FlowEvent::TrackProgressRequested
        | FlowEvent::SurveyAnswered { .. }
        | FlowEvent::SurveySubmitted
        | FlowEvent::ProgressLogged(_)
        | FlowEvent::ViewJobsRequested
        | FlowEvent::BackToProgress
        | FlowEvent::DashboardRequested => {}
    }

    debug_assert!(
        !state.step().requires_career_path() || state.dashboard_available(),
        "entered {} without a career path",
        state.step().id()
    );
    (state, effects)
}

/// Records the selection, then recalculates the score for real. Shared by
/// high-match picks and a confirmed warning.
fn proceed_with(state: &mut FlowState, career_path: String, effects: &mut Vec<Effect>) {
    state.loading = true;
    effects.push(Effect::SelectCareerPath {
        user_id: state.session.user_id.clone(),
        career_path,
    });
}

fn enter_progress(state: &mut FlowState, effects: &mut Vec<Effect>) {
    state.session.step = Step::Progress;
    effects.push(Effect::FetchUserProgress {
        user_id: state.session.user_id.clone(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CareerSuggestion, QuestionKind};
    use proptest::prelude::*;

    fn score(value: f64) -> CareerScore {
        CareerScore {
            current_score: value,
            strength_areas: vec!["Python".into()],
            skill_gaps: vec!["Deep learning".into()],
            recommendations: vec!["Take an ML course".into()],
        }
    }

    fn analysis(paths: &[&str]) -> ResumeAnalysis {
        ResumeAnalysis {
            extracted_skills: vec!["Python".into(), "SQL".into()],
            experience_level: "Mid".into(),
            career_suggestions: paths
                .iter()
                .map(|p| CareerSuggestion {
                    career_path: p.to_string(),
                    match_score: 0.8,
                    reasoning: "fits".into(),
                    key_skills: vec![],
                    preference_match: None,
                })
                .collect(),
        }
    }

    fn questions() -> Vec<SurveyQuestion> {
        vec![
            SurveyQuestion {
                id: QuestionId::new("1"),
                question: "Work environment?".into(),
                kind: QuestionKind::MultipleChoice {
                    options: vec!["Remote".into(), "Office".into()],
                },
            },
            SurveyQuestion {
                id: QuestionId::new("2"),
                question: "Work-life balance?".into(),
                kind: QuestionKind::Scale {
                    min: 1,
                    max: 5,
                    labels: ["Low".into(), "High".into()],
                },
            },
        ]
    }

    fn at_step(step: Step) -> FlowState {
        let mut state = FlowState::default();
        state.session.user_id = "user-1".into();
        state.session.step = step;
        if step.requires_career_path() {
            state.session.selected_career_path = "Data Scientist".into();
        }
        state
    }

    fn run(state: FlowState, events: Vec<FlowEvent>) -> (FlowState, Vec<Effect>) {
        let mut state = state;
        let mut all = Vec::new();
        for event in events {
            let (next, effects) = transition(state, event);
            state = next;
            all.extend(effects);
        }
        (state, all)
    }

    #[test]
    fn test_fresh_load_creates_user_then_fetches_lists_once() {
        let (state, effects) = transition(FlowState::default(), FlowEvent::AppStarted);
        assert_eq!(effects, vec![Effect::CreateUser]);

        let (state, effects) = transition(state, FlowEvent::UserCreated("abc".into()));
        assert_eq!(state.session.user_id, "abc");
        assert_eq!(
            effects,
            vec![
                Effect::PersistUserId("abc".into()),
                Effect::FetchCareerPaths,
                Effect::FetchSurveyQuestions,
            ]
        );
        assert_eq!(state.step(), Step::Welcome);
    }

    #[test]
    fn test_lists_still_load_when_user_creation_fails() {
        let (state, effects) =
            transition(FlowState::default(), FlowEvent::UserCreationFailed("offline".into()));
        assert!(state.session.user_id.is_empty());
        assert_eq!(
            effects,
            vec![Effect::FetchCareerPaths, Effect::FetchSurveyQuestions]
        );
    }

    #[test]
    fn test_start_moves_to_upload() {
        let (state, _) = transition(at_step(Step::Welcome), FlowEvent::StartClicked);
        assert_eq!(state.step(), Step::Upload);
    }

    #[test]
    fn test_upload_success_stores_analysis_verbatim() {
        let file = ResumeFile::new("resume.pdf", b"%PDF".to_vec());
        let (state, effects) = transition(at_step(Step::Upload), FlowEvent::ResumeChosen(file.clone()));
        assert!(state.loading);
        assert_eq!(
            effects,
            vec![Effect::UploadResume {
                user_id: "user-1".into(),
                file
            }]
        );

        let received = analysis(&["Data Scientist", "ML Engineer"]);
        let (state, effects) = transition(state, FlowEvent::ResumeAnalyzed(received.clone()));
        assert!(effects.is_empty());
        assert!(!state.loading);
        assert_eq!(state.step(), Step::PostUploadChoice);
        assert_eq!(state.resume_analysis, Some(received));
    }

    #[test]
    fn test_upload_failure_alerts_without_transition() {
        let mut uploading = at_step(Step::Upload);
        uploading.loading = true;
        let (state, effects) =
            transition(uploading, FlowEvent::ResumeUploadFailed("500".into()));
        assert_eq!(state.step(), Step::Upload);
        assert!(!state.loading);
        assert_eq!(effects, vec![Effect::Alert(UPLOAD_FAILED_MESSAGE.into())]);
    }

    #[test]
    fn test_unsupported_file_is_rejected_locally() {
        let file = ResumeFile::new("resume.docx", vec![0; 4]);
        let (state, effects) = transition(at_step(Step::Upload), FlowEvent::ResumeChosen(file));
        assert!(!state.loading);
        assert_eq!(effects, vec![Effect::Alert(UNSUPPORTED_FILE_MESSAGE.into())]);
    }

    #[test]
    fn test_post_upload_choices() {
        let (survey, _) = transition(at_step(Step::PostUploadChoice), FlowEvent::SurveyChosen);
        assert_eq!(survey.step(), Step::Survey);
        let (results, _) = transition(at_step(Step::PostUploadChoice), FlowEvent::ResultsChosen);
        assert_eq!(results.step(), Step::CareerSuggestions);
    }

    #[test]
    fn test_high_match_skips_warning() {
        let (state, effects) = run(
            at_step(Step::CareerSuggestions),
            vec![
                FlowEvent::CareerPathPicked("ML Engineer".into()),
                FlowEvent::CareerScoreProbed {
                    career_path: "ML Engineer".into(),
                    score: score(60.0),
                },
            ],
        );
        assert!(state.session.modal.is_none());
        assert_eq!(
            effects,
            vec![
                Effect::ProbeCareerScore {
                    user_id: "user-1".into(),
                    career_path: "ML Engineer".into()
                },
                Effect::SelectCareerPath {
                    user_id: "user-1".into(),
                    career_path: "ML Engineer".into()
                },
            ]
        );

        let (state, effects) = run(
            state,
            vec![
                FlowEvent::CareerPathRecorded("ML Engineer".into()),
                FlowEvent::CareerScoreCalculated {
                    career_path: "ML Engineer".into(),
                    score: score(64.0),
                },
            ],
        );
        assert_eq!(
            effects,
            vec![Effect::CalculateCareerScore {
                user_id: "user-1".into(),
                career_path: "ML Engineer".into()
            }]
        );
        assert_eq!(state.step(), Step::CareerScore);
        assert_eq!(state.session.selected_career_path, "ML Engineer");
        assert_eq!(state.current_score(), 64.0);
        assert!(!state.loading);
    }

    #[test]
    fn test_low_match_shows_warning_then_proceeds_on_confirm() {
        let (state, _) = run(
            at_step(Step::CareerSuggestions),
            vec![
                FlowEvent::CareerPathPicked("Data Scientist".into()),
                FlowEvent::CareerScoreProbed {
                    career_path: "Data Scientist".into(),
                    score: score(45.0),
                },
            ],
        );
        assert_eq!(state.step(), Step::CareerSuggestions);
        assert_eq!(
            state.session.modal,
            Some(WarningDialog {
                career_path: "Data Scientist".into(),
                potential_score: 45.0
            })
        );
        assert!(!state.loading);

        let (state, effects) = run(
            state,
            vec![
                FlowEvent::WarningConfirmed,
                FlowEvent::CareerPathRecorded("Data Scientist".into()),
                FlowEvent::CareerScoreCalculated {
                    career_path: "Data Scientist".into(),
                    score: score(45.0),
                },
            ],
        );
        assert!(effects.contains(&Effect::SelectCareerPath {
            user_id: "user-1".into(),
            career_path: "Data Scientist".into()
        }));
        assert!(state.session.modal.is_none());
        assert_eq!(state.step(), Step::CareerScore);
        assert_eq!(state.session.selected_career_path, "Data Scientist");
    }

    #[test]
    fn test_warning_cancel_leaves_screen_untouched() {
        let mut state = at_step(Step::CareerSuggestions);
        state.resume_analysis = Some(analysis(&["Data Scientist"]));
        state.session.modal = Some(WarningDialog {
            career_path: "Data Scientist".into(),
            potential_score: 30.0,
        });
        let before = state.clone();

        let (state, effects) = transition(state, FlowEvent::WarningCancelled);
        assert!(effects.is_empty());
        assert!(state.session.modal.is_none());
        assert_eq!(state.step(), Step::CareerSuggestions);
        assert_eq!(state.resume_analysis, before.resume_analysis);
        assert_eq!(state.session.selected_career_path, "");
    }

    #[test]
    fn test_picking_is_ignored_while_warning_is_open() {
        let mut state = at_step(Step::CareerSuggestions);
        state.session.modal = Some(WarningDialog {
            career_path: "Data Scientist".into(),
            potential_score: 30.0,
        });
        let (_, effects) = transition(state, FlowEvent::CareerPathPicked("Nurse".into()));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_selection_failure_never_transitions() {
        let mut state = at_step(Step::CareerSuggestions);
        state.loading = true;
        let (state, effects) = transition(
            state,
            FlowEvent::CareerPathRecordFailed {
                career_path: "Nurse".into(),
                error: "HTTP 500".into(),
            },
        );
        assert!(effects.is_empty());
        assert!(!state.loading);
        assert_eq!(state.step(), Step::CareerSuggestions);
        assert!(state.session.selected_career_path.is_empty());
    }

    #[test]
    fn test_career_score_actions() {
        let (survey, _) = transition(at_step(Step::CareerScore), FlowEvent::SurveyRequested);
        assert_eq!(survey.step(), Step::Survey);

        let (progress, effects) =
            transition(at_step(Step::CareerScore), FlowEvent::TrackProgressRequested);
        assert_eq!(progress.step(), Step::Progress);
        assert_eq!(
            effects,
            vec![Effect::FetchUserProgress {
                user_id: "user-1".into()
            }]
        );
    }

    fn survey_ready() -> FlowState {
        let mut state = at_step(Step::Survey);
        state.survey_questions = questions();
        state.resume_analysis = Some(analysis(&["Data Scientist"]));
        state
    }

    fn answer_all(state: FlowState) -> FlowState {
        run(
            state,
            vec![
                FlowEvent::SurveyAnswered {
                    question_id: QuestionId::new("1"),
                    answer: SurveyAnswer::Choice("Remote".into()),
                },
                FlowEvent::SurveyAnswered {
                    question_id: QuestionId::new("2"),
                    answer: SurveyAnswer::Scale(4),
                },
            ],
        )
        .0
    }

    #[test]
    fn test_survey_submit_ignored_until_complete() {
        let (state, effects) = run(
            survey_ready(),
            vec![
                FlowEvent::SurveyAnswered {
                    question_id: QuestionId::new("1"),
                    answer: SurveyAnswer::Choice("Remote".into()),
                },
                FlowEvent::SurveySubmitted,
            ],
        );
        assert!(!state.survey_complete());
        assert!(effects.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_survey_answer_for_unknown_question_is_dropped() {
        let (state, _) = transition(
            survey_ready(),
            FlowEvent::SurveyAnswered {
                question_id: QuestionId::new("99"),
                answer: SurveyAnswer::Scale(3),
            },
        );
        assert!(state.survey_responses.is_empty());
    }

    #[test]
    fn test_survey_success_replaces_analysis_with_enhanced() {
        let state = answer_all(survey_ready());
        assert!(state.survey_complete());

        let (state, effects) = transition(state, FlowEvent::SurveySubmitted);
        assert!(state.loading);
        match &effects[..] {
            [Effect::SubmitSurvey { user_id, responses }] => {
                assert_eq!(user_id, "user-1");
                assert_eq!(responses.len(), 2);
            }
            other => panic!("unexpected effects {:?}", other),
        }

        let (state, effects) = transition(state, FlowEvent::SurveyAccepted);
        assert_eq!(
            effects,
            vec![Effect::FetchEnhancedSuggestions {
                user_id: "user-1".into()
            }]
        );

        let enhanced = analysis(&["Product Manager"]);
        let (state, _) = transition(state, FlowEvent::EnhancedSuggestionsReceived(enhanced.clone()));
        assert_eq!(state.step(), Step::CareerSuggestions);
        assert_eq!(state.resume_analysis, Some(enhanced));
        assert!(!state.loading);
    }

    #[test]
    fn test_enhancement_failure_falls_back_and_still_advances() {
        let state = answer_all(survey_ready());
        let original = state.resume_analysis.clone();
        let (state, effects) = run(
            state,
            vec![
                FlowEvent::SurveySubmitted,
                FlowEvent::SurveyAccepted,
                FlowEvent::EnhancedSuggestionsFailed("HTTP 502".into()),
            ],
        );
        assert!(effects.contains(&Effect::Alert(ENHANCEMENT_FAILED_MESSAGE.into())));
        assert_eq!(state.step(), Step::CareerSuggestions);
        assert_eq!(state.resume_analysis, original);
        assert!(!state.loading);
    }

    #[test]
    fn test_survey_submit_failure_alerts_and_stays() {
        let (state, effects) = run(
            answer_all(survey_ready()),
            vec![
                FlowEvent::SurveySubmitted,
                FlowEvent::SurveySubmitFailed("network".into()),
            ],
        );
        assert_eq!(state.step(), Step::Survey);
        assert_eq!(effects.last(), Some(&Effect::Alert(SURVEY_FAILED_MESSAGE.into())));
        assert!(!state.loading);
    }

    #[test]
    fn test_question_reload_drops_orphaned_answers() {
        let mut state = answer_all(survey_ready());
        state
            .survey_responses
            .insert(QuestionId::new("old"), SurveyAnswer::Scale(1));
        let (state, _) = transition(state, FlowEvent::SurveyQuestionsLoaded(questions()));
        assert_eq!(state.survey_responses.len(), 2);
        assert!(state.survey_complete());
    }

    #[test]
    fn test_jobs_locked_below_seventy() {
        let mut state = at_step(Step::Progress);
        state.career_score = Some(score(69.0));
        let (state, effects) = transition(state, FlowEvent::ViewJobsRequested);
        assert_eq!(state.step(), Step::Progress);
        assert_eq!(effects, vec![Effect::Alert(JOBS_LOCKED_MESSAGE.into())]);
    }

    #[test]
    fn test_jobs_unlock_and_back() {
        let mut state = at_step(Step::Progress);
        state.career_score = Some(score(70.0));
        let (state, effects) = transition(state, FlowEvent::ViewJobsRequested);
        assert_eq!(
            effects,
            vec![Effect::FetchJobs {
                career_path: "Data Scientist".into()
            }]
        );

        let job = Job {
            title: "Senior Data Scientist".into(),
            company: "Tech Corp".into(),
            location: "San Francisco, CA".into(),
            description: "Exciting opportunity".into(),
            requirements: vec!["5+ years experience".into()],
            salary_range: Some("$80,000 - $120,000".into()),
            url: "https://example.com/job1".into(),
        };
        let (state, _) = transition(state, FlowEvent::JobsLoaded(vec![job]));
        assert_eq!(state.step(), Step::Jobs);
        assert_eq!(state.jobs.len(), 1);

        let (state, _) = transition(state, FlowEvent::BackToProgress);
        assert_eq!(state.step(), Step::Progress);
    }

    #[test]
    fn test_jobs_button_enabled_across_unlock_boundary() {
        let mut state = at_step(Step::Progress);
        assert!(!state.jobs_button_enabled());

        state.career_score = Some(score(45.0));
        assert!(!state.jobs_button_enabled());
        state.career_score = Some(score(69.9));
        assert!(!state.jobs_button_enabled());
        state.career_score = Some(score(70.0));
        assert!(state.jobs_button_enabled());

        state.loading = true;
        assert!(!state.jobs_button_enabled());
    }

    #[test]
    fn test_jobs_fetch_failure_is_silent() {
        let mut state = at_step(Step::Progress);
        state.loading = true;
        let (state, effects) = transition(state, FlowEvent::JobsFailed("timeout".into()));
        assert!(effects.is_empty());
        assert_eq!(state.step(), Step::Progress);
        assert!(!state.loading);
    }

    #[test]
    fn test_progress_log_then_refresh() {
        let draft = ProgressDraft::parse("Finished Kaggle notebook", "kaggle", "pandas").unwrap();
        let (state, effects) = transition(at_step(Step::Progress), FlowEvent::ProgressLogged(draft));
        assert_eq!(
            effects,
            vec![Effect::AddProgressLog(ProgressLogRequest {
                user_id: "user-1".into(),
                career_path: "Data Scientist".into(),
                log_entry: "Finished Kaggle notebook".into(),
                activities_completed: vec!["kaggle".into()],
                skills_improved: vec!["pandas".into()],
            })]
        );

        let (state, effects) = transition(state, FlowEvent::ProgressLogSaved);
        assert_eq!(
            effects,
            vec![Effect::FetchUserProgress {
                user_id: "user-1".into()
            }]
        );

        let entry = ProgressLogEntry {
            timestamp: "2025-03-04T09:30:00".into(),
            log_entry: "Finished Kaggle notebook".into(),
            activities_completed: vec!["kaggle".into()],
            skills_improved: vec!["pandas".into()],
        };
        let (state, _) = transition(
            state,
            FlowEvent::ProgressLoaded(UserProgress {
                career_score: Some(score(72.0)),
                recent_logs: vec![entry],
            }),
        );
        assert_eq!(state.progress_logs.len(), 1);
        assert!(state.jobs_unlocked());
    }

    #[test]
    fn test_progress_without_score_keeps_current_score() {
        let mut state = at_step(Step::Progress);
        state.career_score = Some(score(55.0));
        let (state, _) = transition(state, FlowEvent::ProgressLoaded(UserProgress::default()));
        assert_eq!(state.current_score(), 55.0);
    }

    #[test]
    fn test_dashboard_requires_selected_path() {
        let (state, effects) = transition(at_step(Step::Upload), FlowEvent::DashboardRequested);
        assert_eq!(state.step(), Step::Upload);
        assert!(effects.is_empty());

        let mut chosen = at_step(Step::Survey);
        chosen.session.selected_career_path = "Nurse".into();
        let (state, _) = transition(chosen, FlowEvent::DashboardRequested);
        assert_eq!(state.step(), Step::Progress);
    }

    #[test]
    fn test_home_clears_modal() {
        let mut state = at_step(Step::CareerSuggestions);
        state.session.modal = Some(WarningDialog {
            career_path: "Nurse".into(),
            potential_score: 20.0,
        });
        let (state, _) = transition(state, FlowEvent::HomeRequested);
        assert_eq!(state.step(), Step::Welcome);
        assert!(state.session.modal.is_none());
    }

    #[test]
    fn test_late_probe_after_leaving_screen_is_ignored() {
        let mut state = at_step(Step::Welcome);
        state.loading = true;
        let (state, effects) = transition(
            state,
            FlowEvent::CareerScoreProbed {
                career_path: "Nurse".into(),
                score: score(10.0),
            },
        );
        assert!(effects.is_empty());
        assert!(state.session.modal.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_step_ids_match_screen_names() {
        assert_eq!(Step::PostUploadChoice.id(), "post-upload-choice");
        assert_eq!(Step::CareerSuggestions.id(), "career-suggestions");
        assert_eq!(Step::default(), Step::Welcome);
    }

    fn career_path() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["Data Scientist", "Nurse", "UX Designer"]).prop_map(String::from)
    }

    fn any_event() -> impl Strategy<Value = FlowEvent> {
        let simple = prop::sample::select(vec![
            FlowEvent::StartClicked,
            FlowEvent::SurveyChosen,
            FlowEvent::ResultsChosen,
            FlowEvent::ResumeAnalyzed(analysis(&["Data Scientist"])),
            FlowEvent::WarningConfirmed,
            FlowEvent::WarningCancelled,
            FlowEvent::SurveyRequested,
            FlowEvent::TrackProgressRequested,
            FlowEvent::SurveySubmitted,
            FlowEvent::SurveyAccepted,
            FlowEvent::EnhancedSuggestionsFailed("x".into()),
            FlowEvent::ViewJobsRequested,
            FlowEvent::JobsLoaded(vec![]),
            FlowEvent::BackToProgress,
            FlowEvent::HomeRequested,
            FlowEvent::DashboardRequested,
        ]);
        prop_oneof![
            simple,
            career_path().prop_map(FlowEvent::CareerPathPicked),
            (career_path(), 0.0f64..100.0).prop_map(|(career_path, s)| {
                FlowEvent::CareerScoreProbed {
                    career_path,
                    score: score(s),
                }
            }),
            career_path().prop_map(FlowEvent::CareerPathRecorded),
            (career_path(), 0.0f64..100.0).prop_map(|(career_path, s)| {
                FlowEvent::CareerScoreCalculated {
                    career_path,
                    score: score(s),
                }
            }),
            (0.0f64..100.0).prop_map(|s| FlowEvent::ProgressLoaded(UserProgress {
                career_score: Some(score(s)),
                recent_logs: vec![],
            })),
        ]
    }

    proptest! {
        #[test]
        fn prop_career_path_set_on_path_steps(events in prop::collection::vec(any_event(), 0..40)) {
            let mut state = FlowState::default();
            state.session.user_id = "user-1".into();
            for event in events {
                state = transition(state, event).0;
                if state.step().requires_career_path() {
                    prop_assert!(!state.session.selected_career_path.is_empty());
                }
            }
        }

        #[test]
        fn prop_jobs_request_only_when_unlocked(s in 0.0f64..100.0) {
            let mut state = at_step(Step::Progress);
            state.career_score = Some(score(s));
            let (_, effects) = transition(state, FlowEvent::ViewJobsRequested);
            let fetches = effects.iter().any(|e| matches!(e, Effect::FetchJobs { .. }));
            prop_assert_eq!(fetches, s >= JOBS_UNLOCK_SCORE);
        }

        #[test]
        fn prop_survey_submits_only_when_complete(
            answer_first in any::<bool>(),
            answer_second in any::<bool>()
        ) {
            let mut events = Vec::new();
            if answer_first {
                events.push(FlowEvent::SurveyAnswered {
                    question_id: QuestionId::new("1"),
                    answer: SurveyAnswer::Choice("Office".into()),
                });
            }
            if answer_second {
                events.push(FlowEvent::SurveyAnswered {
                    question_id: QuestionId::new("2"),
                    answer: SurveyAnswer::Scale(2),
                });
            }
            events.push(FlowEvent::SurveySubmitted);

            let (_, effects) = run(survey_ready(), events);
            let submits = effects.iter().any(|e| matches!(e, Effect::SubmitSurvey { .. }));
            prop_assert_eq!(submits, answer_first && answer_second);
        }

        #[test]
        fn prop_warning_shown_exactly_below_threshold(s in 0.0f64..100.0) {
            let (state, effects) = run(
                at_step(Step::CareerSuggestions),
                vec![
                    FlowEvent::CareerPathPicked("Nurse".into()),
                    FlowEvent::CareerScoreProbed { career_path: "Nurse".into(), score: score(s) },
                ],
            );
            prop_assert_eq!(state.session.modal.is_some(), s < WARNING_THRESHOLD);
            prop_assert_eq!(state.step(), Step::CareerSuggestions);
            let selects = effects.iter().any(|e| matches!(e, Effect::SelectCareerPath { .. }));
            prop_assert_eq!(selects, s >= WARNING_THRESHOLD);
        }
    }
}
