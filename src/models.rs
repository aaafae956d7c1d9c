//! Wire types for the NextObjective API.
//!
//! Response types ignore fields the client never reads (`id`, `user_id`,
//! `timestamp` on analyses and scores), so server-side additions do not break
//! decoding.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

// -- Users --

#[derive(Serialize)]
pub struct CreateUserRequest {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedUser {
    pub id: String,
}

// -- Resume analysis --

/// One AI-suggested career path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CareerSuggestion {
    pub career_path: String,
    /// Fit between 0.0 and 1.0.
    pub match_score: f64,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub key_skills: Vec<String>,
    /// Present only on survey-enhanced suggestions.
    #[serde(default)]
    pub preference_match: Option<String>,
}

impl CareerSuggestion {
    pub fn match_percent(&self) -> u32 {
        (self.match_score.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

/// Result of a resume upload or of an enhanced recompute.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResumeAnalysis {
    #[serde(default)]
    pub extracted_skills: Vec<String>,
    #[serde(default)]
    pub experience_level: String,
    pub career_suggestions: Vec<CareerSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct CareerPathsResponse {
    pub career_paths: Vec<String>,
}

// -- Career score --

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CareerScore {
    pub current_score: f64,
    #[serde(default)]
    pub strength_areas: Vec<String>,
    #[serde(default)]
    pub skill_gaps: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl CareerScore {
    /// Score as shown on screen, 0 to 100.
    pub fn display_score(&self) -> u32 {
        self.current_score.clamp(0.0, 100.0).round() as u32
    }

    pub fn interpretation(&self) -> &'static str {
        if self.current_score >= 80.0 {
            "Excellent match!"
        } else if self.current_score >= 60.0 {
            "Good foundation, room for improvement"
        } else {
            "Significant growth opportunities ahead"
        }
    }
}

#[derive(Serialize)]
pub struct SelectCareerPathRequest {
    pub user_id: String,
    pub selected_career_path: String,
}

// -- Survey --

/// Question identifier. The server sends integers; strings are accepted too.
/// Serialized as a string because it keys the JSON response object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => QuestionId::new(n.to_string()),
            RawId::Text(s) => QuestionId::new(s),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<String>,
    },
    Scale {
        min: i64,
        max: i64,
        /// Low-end and high-end captions.
        labels: [String; 2],
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SurveyQuestion {
    pub id: QuestionId,
    pub question: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

impl SurveyQuestion {
    /// Checks an answer against the question kind. Scale answers are clamped
    /// into range; a choice must be one of the listed options.
    pub fn accept(&self, answer: SurveyAnswer) -> Option<SurveyAnswer> {
        match (&self.kind, answer) {
            (QuestionKind::MultipleChoice { options }, SurveyAnswer::Choice(choice)) => {
                options.contains(&choice).then_some(SurveyAnswer::Choice(choice))
            }
            (QuestionKind::Scale { min, max, .. }, SurveyAnswer::Scale(value)) => {
                Some(SurveyAnswer::Scale(value.clamp(*min, (*max).max(*min))))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SurveyQuestionsResponse {
    pub questions: Vec<SurveyQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SurveyAnswer {
    Scale(i64),
    Choice(String),
}

pub type SurveyResponses = BTreeMap<QuestionId, SurveyAnswer>;

#[derive(Debug, Serialize)]
pub struct SurveySubmission {
    pub user_id: String,
    pub responses: SurveyResponses,
}

// -- Progress --

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressLogEntry {
    pub timestamp: String,
    pub log_entry: String,
    #[serde(default)]
    pub activities_completed: Vec<String>,
    #[serde(default)]
    pub skills_improved: Vec<String>,
}

impl ProgressLogEntry {
    /// Calendar date portion of an ISO-8601 timestamp.
    pub fn date(&self) -> &str {
        self.timestamp
            .split(|c| c == 'T' || c == ' ')
            .next()
            .unwrap_or(self.timestamp.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UserProgress {
    #[serde(default)]
    pub career_score: Option<CareerScore>,
    #[serde(default)]
    pub recent_logs: Vec<ProgressLogEntry>,
}

/// A progress entry as typed into the progress form.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDraft {
    pub log_entry: String,
    pub activities_completed: Vec<String>,
    pub skills_improved: Vec<String>,
}

impl ProgressDraft {
    /// Returns `None` when the free-text entry is blank.
    pub fn parse(log_entry: &str, activities: &str, skills: &str) -> Option<Self> {
        if log_entry.trim().is_empty() {
            return None;
        }
        Some(Self {
            log_entry: log_entry.to_string(),
            activities_completed: split_tags(activities),
            skills_improved: split_tags(skills),
        })
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressLogRequest {
    pub user_id: String,
    pub career_path: String,
    pub log_entry: String,
    pub activities_completed: Vec<String>,
    pub skills_improved: Vec<String>,
}

// -- Jobs --

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
}

// -- Resume file --

/// A resume read into memory, ready for multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = content_type_for(&name).unwrap_or("application/octet-stream");
        Self {
            content_type: content_type.to_string(),
            name,
            bytes,
        }
    }

    pub fn is_supported(&self) -> bool {
        content_type_for(&self.name).is_some()
    }
}

fn content_type_for(file_name: &str) -> Option<&'static str> {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".pdf") {
        Some("application/pdf")
    } else if lower.ends_with(".txt") {
        Some("text/plain")
    } else {
        None
    }
}
