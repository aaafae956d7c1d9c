//! Client configuration.
//!
//! The API base URL comes from `NEXTOBJECTIVE_BACKEND_URL` at build time and
//! can be overridden per deployment with
//! `<meta name="nextobjective-backend-url" content="...">` in `index.html`.
//! An empty base URL means same-origin requests.

const BACKEND_URL_META: &str = "nextobjective-backend-url";
const BUILD_TIME_BACKEND_URL: Option<&str> = option_env!("NEXTOBJECTIVE_BACKEND_URL");

/// Email sent when creating the anonymous session user.
pub const DEFAULT_EMAIL: &str = "user@example.com";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub default_email: String,
}

impl AppConfig {
    pub fn load() -> Self {
        let meta = read_meta_content(BACKEND_URL_META);
        Self::from_sources(meta.as_deref(), BUILD_TIME_BACKEND_URL)
    }

    /// Runtime override wins over the build-time value when non-blank.
    pub fn from_sources(runtime: Option<&str>, build_time: Option<&str>) -> Self {
        let base = runtime
            .filter(|url| !url.trim().is_empty())
            .or(build_time)
            .unwrap_or_default();

        Self {
            api_base_url: normalize_base_url(base),
            default_email: DEFAULT_EMAIL.to_string(),
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn read_meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
}
