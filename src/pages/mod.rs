pub mod career_score;
pub mod career_suggestions;
pub mod jobs;
pub mod post_upload_choice;
pub mod progress;
pub mod survey;
pub mod upload;
pub mod welcome;
