//! Axum route handlers for the Analysis API.

use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::analysis::AnalysisRecord;
use crate::state::AppState;

pub const DEFAULT_FILE_NAME: &str = "uploaded_resume.pdf";
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
/// Whole-request limit, applied as a router layer.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const ALLOWED_RESUME_TYPES: [&str; 4] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub analyses: Vec<AnalysisRecord>,
}

/// Normalized analyze input, whichever body shape it arrived in.
struct AnalyzeInput {
    resume_text: String,
    job_description: String,
    file_name: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Body parsing
// ────────────────────────────────────────────────────────────────────────────

/// Stand-in text for an uploaded document; file contents are not parsed.
fn placeholder_resume_text(file_name: &str) -> String {
    format!(
        "[Resume content from {file_name}]\n\n\
         Uploaded documents are not text-extracted; this placeholder stands in for the file body."
    )
}

fn require_texts(request: AnalyzeRequest, file_name: String) -> Result<AnalyzeInput, AppError> {
    let present = |v: Option<String>| v.filter(|s| !s.is_empty());
    match (
        present(request.resume_text),
        present(request.job_description),
    ) {
        (Some(resume_text), Some(job_description)) => Ok(AnalyzeInput {
            resume_text,
            job_description,
            file_name,
        }),
        _ => Err(AppError::Validation(
            "Resume text and job description are required".to_string(),
        )),
    }
}

fn file_too_large() -> AppError {
    AppError::Validation("File size too large. Maximum size is 5MB.".to_string())
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        file_too_large()
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<AnalyzeInput, AppError> {
    let mut request = AnalyzeRequest::default();
    let mut uploaded: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .unwrap_or(DEFAULT_FILE_NAME)
                    .to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                if !ALLOWED_RESUME_TYPES.contains(&content_type.as_str()) {
                    return Err(AppError::Validation(
                        "Invalid file type. Please upload PDF, DOC, DOCX, or TXT files."
                            .to_string(),
                    ));
                }
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if bytes.len() > MAX_RESUME_BYTES {
                    return Err(file_too_large());
                }
                uploaded = Some(file_name);
            }
            "resumeText" => request.resume_text = Some(field.text().await.map_err(multipart_error)?),
            "jobDescription" => {
                request.job_description = Some(field.text().await.map_err(multipart_error)?)
            }
            _ => {}
        }
    }

    // An uploaded file takes precedence over any pasted text.
    let file_name = match uploaded {
        Some(name) => {
            request.resume_text = Some(placeholder_resume_text(&name));
            name
        }
        None => DEFAULT_FILE_NAME.to_string(),
    };
    require_texts(request, file_name)
}

async fn read_analyze_input(state: &AppState, req: Request) -> Result<AnalyzeInput, AppError> {
    let is_multipart = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false);

    if is_multipart {
        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {}", e.body_text())))?;
        read_multipart(multipart).await
    } else {
        let Json(request) = Json::<AnalyzeRequest>::from_request(req, state).await?;
        require_texts(request, DEFAULT_FILE_NAME.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Accepts JSON `{ resumeText, jobDescription }` or multipart with an optional
/// `resume` file. Runs the analyzer (remote first, local fallback), stores the
/// record in history, and returns it.
pub async fn handle_analyze(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    req: Request,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let input = read_analyze_input(&state, req).await?;

    let result = state
        .analyzer
        .analyze(&input.resume_text, &input.job_description)
        .await;
    let source = result.source;

    let record = AnalysisRecord::new(user.id, input.file_name, input.job_description, result);
    let record = state.analyses.append(record).await?;

    info!(
        "Analysis {} for user {}: score {} ({:?})",
        record.id, user.id, record.ats_score, source
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        analysis: Some(record),
        message: None,
    }))
}

/// GET /api/history
///
/// Returns the caller's analyses, newest first.
pub async fn handle_history(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<HistoryResponse>, AppError> {
    let analyses = state.analyses.list_for_user(user.id).await?;
    Ok(Json(HistoryResponse {
        success: true,
        analyses,
    }))
}
