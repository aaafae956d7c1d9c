pub mod career_filter;
pub mod job_card;
pub mod loading_spinner;
pub mod nav_bar;
pub mod skill_tags;
pub mod suggestion_card;
pub mod warning_dialog;
