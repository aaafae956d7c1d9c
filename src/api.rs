//! HTTP client for the NextObjective API, built on the browser Fetch API.
//!
//! One method per endpoint. Failures come back as [`ApiError`]; deciding
//! whether a failure alerts the user or is only logged is left to the flow.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{
    CareerPathsResponse, CareerScore, CreateUserRequest, CreatedUser, Job, JobsResponse,
    ProgressLogRequest, ResumeAnalysis, ResumeFile, SelectCareerPathRequest, SurveyQuestion,
    SurveyQuestionsResponse, SurveyResponses, SurveySubmission, UserProgress,
};

const USERS_ENDPOINT: &str = "/api/users";
const CAREER_PATHS_ENDPOINT: &str = "/api/career-paths";
const SURVEY_QUESTIONS_ENDPOINT: &str = "/api/survey-questions";
const UPLOAD_RESUME_ENDPOINT: &str = "/api/upload-resume";
const SELECT_CAREER_PATH_ENDPOINT: &str = "/api/select-career-path";
const CALCULATE_SCORE_ENDPOINT: &str = "/api/calculate-career-score";
const PROGRESS_LOG_ENDPOINT: &str = "/api/progress-log";
const USER_PROGRESS_ENDPOINT: &str = "/api/user-progress";
const SUBMIT_SURVEY_ENDPOINT: &str = "/api/submit-survey";
const ENHANCED_SUGGESTIONS_ENDPOINT: &str = "/api/enhanced-career-suggestions";
const MOCK_JOBS_ENDPOINT: &str = "/api/mock-jobs";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    email: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            email: config.default_email.clone(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Path-parameter URL with the dynamic segment percent-encoded.
    fn url_with_segment(&self, endpoint: &str, segment: &str) -> String {
        format!("{}{}/{}", self.base_url, endpoint, urlencoding::encode(segment))
    }

    // -- Session bootstrap --

    pub async fn create_user(&self) -> Result<CreatedUser, ApiError> {
        let payload = CreateUserRequest {
            email: self.email.clone(),
        };
        self.post_json(USERS_ENDPOINT, &payload).await
    }

    pub async fn career_paths(&self) -> Result<Vec<String>, ApiError> {
        let response: CareerPathsResponse = self.get(CAREER_PATHS_ENDPOINT).await?;
        Ok(response.career_paths)
    }

    pub async fn survey_questions(&self) -> Result<Vec<SurveyQuestion>, ApiError> {
        let response: SurveyQuestionsResponse = self.get(SURVEY_QUESTIONS_ENDPOINT).await?;
        Ok(response.questions)
    }

    // -- Resume and career path --

    pub async fn upload_resume(
        &self,
        user_id: &str,
        file: &ResumeFile,
    ) -> Result<ResumeAnalysis, ApiError> {
        let form = new_form()?;
        let blob = file_blob(file)?;
        form.append_with_blob_and_filename("file", &blob, &file.name)
            .map_err(|e| ApiError::from_js("Failed to attach resume", e))?;
        form.append_with_str("user_id", user_id)
            .map_err(|e| ApiError::from_js("Failed to build form", e))?;

        self.post_form(UPLOAD_RESUME_ENDPOINT, &form).await
    }

    pub async fn select_career_path(&self, user_id: &str, career_path: &str) -> Result<(), ApiError> {
        let payload = SelectCareerPathRequest {
            user_id: user_id.to_string(),
            selected_career_path: career_path.to_string(),
        };
        self.post_json_ack(SELECT_CAREER_PATH_ENDPOINT, &payload).await
    }

    pub async fn calculate_career_score(
        &self,
        user_id: &str,
        career_path: &str,
    ) -> Result<CareerScore, ApiError> {
        let form = form_with_fields(&[("user_id", user_id), ("career_path", career_path)])?;
        self.post_form(CALCULATE_SCORE_ENDPOINT, &form).await
    }

    // -- Survey --

    pub async fn submit_survey(
        &self,
        user_id: &str,
        responses: &SurveyResponses,
    ) -> Result<(), ApiError> {
        let payload = SurveySubmission {
            user_id: user_id.to_string(),
            responses: responses.clone(),
        };
        self.post_json_ack(SUBMIT_SURVEY_ENDPOINT, &payload).await
    }

    pub async fn enhanced_suggestions(&self, user_id: &str) -> Result<ResumeAnalysis, ApiError> {
        let form = form_with_fields(&[("user_id", user_id)])?;
        self.post_form(ENHANCED_SUGGESTIONS_ENDPOINT, &form).await
    }

    // -- Progress and jobs --

    pub async fn add_progress_log(&self, entry: &ProgressLogRequest) -> Result<(), ApiError> {
        self.post_json_ack(PROGRESS_LOG_ENDPOINT, entry).await
    }

    pub async fn user_progress(&self, user_id: &str) -> Result<UserProgress, ApiError> {
        self.get_url(&self.url_with_segment(USER_PROGRESS_ENDPOINT, user_id))
            .await
    }

    pub async fn jobs(&self, career_path: &str) -> Result<Vec<Job>, ApiError> {
        let response: JobsResponse = self
            .get_url(&self.url_with_segment(MOCK_JOBS_ENDPOINT, career_path))
            .await?;
        Ok(response.jobs)
    }

    // -- Transport helpers --

    async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
        self.get_url(&self.url(endpoint)).await
    }

    /// GET against a fully built URL, for endpoints with path parameters.
    async fn get_url<R: DeserializeOwned>(&self, url: &str) -> Result<R, ApiError> {
        let request = build_request(url, "GET", None)?;
        decode(send(request).await?).await
    }

    async fn post_json<T: Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: &T,
    ) -> Result<R, ApiError> {
        let request = json_request(&self.url(endpoint), payload)?;
        decode(send(request).await?).await
    }

    /// POST where only the status matters.
    async fn post_json_ack<T: Serialize>(&self, endpoint: &str, payload: &T) -> Result<(), ApiError> {
        let request = json_request(&self.url(endpoint), payload)?;
        send(request).await.map(|_| ())
    }

    async fn post_form<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: &FormData,
    ) -> Result<R, ApiError> {
        let body: &wasm_bindgen::JsValue = form.as_ref();
        let request = build_request(&self.url(endpoint), "POST", Some(body))?;
        decode(send(request).await?).await
    }
}

fn build_request(
    url: &str,
    method: &str,
    body: Option<&wasm_bindgen::JsValue>,
) -> Result<Request, ApiError> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = body {
        init.set_body(body);
    }
    Request::new_with_str_and_init(url, &init)
        .map_err(|e| ApiError::from_js(&format!("Invalid request to {}", url), e))
}

fn json_request<T: Serialize>(url: &str, payload: &T) -> Result<Request, ApiError> {
    let body = serde_json::to_string(payload)
        .map_err(|e| ApiError::Decode(format!("Failed to encode request: {}", e)))?;
    let request = build_request(url, "POST", Some(&wasm_bindgen::JsValue::from_str(&body)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::from_js("Failed to set headers", e))?;
    Ok(request)
}

/// Performs the request; non-2xx statuses become [`ApiError::Status`].
async fn send(request: Request) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Browser("No window".to_string()))?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_message(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|_| ApiError::Browser("fetch did not return a Response".to_string()))?;

    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = read_text(&response)
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiError::Status { status, body })
    }
}

async fn decode<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    let promise = response
        .json()
        .map_err(|e| ApiError::Decode(js_message(&e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Decode(js_message(&e)))?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_text(response: &Response) -> Result<String, ApiError> {
    let promise = response
        .text()
        .map_err(|e| ApiError::from_js("Failed to read body", e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::from_js("Failed to read body", e))?;
    Ok(value.as_string().unwrap_or_default())
}

fn new_form() -> Result<FormData, ApiError> {
    FormData::new().map_err(|e| ApiError::from_js("Failed to create form", e))
}

fn form_with_fields(fields: &[(&str, &str)]) -> Result<FormData, ApiError> {
    let form = new_form()?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::from_js("Failed to build form", e))?;
    }
    Ok(form)
}

fn file_blob(file: &ResumeFile) -> Result<Blob, ApiError> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.content_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| ApiError::from_js("Failed to wrap resume", e))
}

fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Unknown error".to_string())
}
