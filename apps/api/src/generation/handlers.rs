//! Axum route handlers for the AI task API.
//!
//! Entities arrive fully loaded in the request body; nothing is read from or
//! written to storage here.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::interpreter::TaskOutput;
use crate::generation::renderer::TaskRequest;
use crate::models::job_application::JobApplication;
use crate::models::portfolio::Portfolio;
use crate::models::resume::Resume;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeContentRequest {
    pub job_description: String,
    pub resume: Resume,
}

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    pub resume: Resume,
}

#[derive(Debug, Deserialize)]
pub struct PortfolioRequest {
    pub portfolio: Portfolio,
}

#[derive(Debug, Deserialize)]
pub struct JobApplicationRequest {
    pub job_application: JobApplication,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub job_application: JobApplication,
    pub resume: Resume,
}

#[derive(Debug, Deserialize)]
pub struct InterviewQuestionsRequest {
    pub job_application: JobApplication,
    #[serde(default)]
    pub resume: Option<Resume>,
}

#[derive(Debug, Deserialize)]
pub struct InterviewAnswerRequest {
    pub question: String,
    pub job_application: JobApplication,
    pub resume: Resume,
}

#[derive(Debug, Deserialize)]
pub struct TextInterviewAnswerRequest {
    pub question: String,
    pub job_title: String,
    #[serde(default)]
    pub resume_text: Option<String>,
}

async fn run(state: &AppState, request: TaskRequest<'_>) -> Result<Json<TaskOutput>, AppError> {
    Ok(Json(state.ai.run(&request).await?))
}

fn require_text(value: &str, name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/resumes/content
///
/// Tailors resume content to a pasted job description.
pub async fn handle_resume_content(
    State(state): State<AppState>,
    Json(req): Json<ResumeContentRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    require_text(&req.job_description, "job_description")?;
    run(
        &state,
        TaskRequest::ResumeContentForJob {
            job_description: &req.job_description,
            resume: &req.resume,
        },
    )
    .await
}

/// POST /api/v1/ai/resumes/suggestions
pub async fn handle_resume_suggestions(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(
        &state,
        TaskRequest::ResumeImprovementSuggestions {
            resume: &req.resume,
        },
    )
    .await
}

/// POST /api/v1/ai/resumes/optimizations
pub async fn handle_resume_optimizations(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(&state, TaskRequest::ResumeOptimizations { resume: &req.resume }).await
}

/// POST /api/v1/ai/resumes/keywords
pub async fn handle_resume_keywords(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(
        &state,
        TaskRequest::ResumeKeywordExtraction {
            resume: &req.resume,
        },
    )
    .await
}

/// POST /api/v1/ai/resumes/feedback
pub async fn handle_resume_feedback(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(
        &state,
        TaskRequest::ResumeComprehensiveFeedback {
            resume: &req.resume,
        },
    )
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Portfolio
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/portfolios/content
pub async fn handle_portfolio_content(
    State(state): State<AppState>,
    Json(req): Json<PortfolioRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(
        &state,
        TaskRequest::PortfolioContentGeneration {
            portfolio: &req.portfolio,
        },
    )
    .await
}

/// POST /api/v1/ai/portfolios/suggestions
pub async fn handle_portfolio_suggestions(
    State(state): State<AppState>,
    Json(req): Json<PortfolioRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(
        &state,
        TaskRequest::PortfolioImprovementSuggestions {
            portfolio: &req.portfolio,
        },
    )
    .await
}

/// POST /api/v1/ai/portfolios/description
pub async fn handle_portfolio_description(
    State(state): State<AppState>,
    Json(req): Json<PortfolioRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(
        &state,
        TaskRequest::PortfolioDescription {
            portfolio: &req.portfolio,
        },
    )
    .await
}

/// POST /api/v1/ai/portfolios/keywords
pub async fn handle_portfolio_keywords(
    State(state): State<AppState>,
    Json(req): Json<PortfolioRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(
        &state,
        TaskRequest::PortfolioKeywordExtraction {
            portfolio: &req.portfolio,
        },
    )
    .await
}

// ────────────────────────────────────────────────────────────────────────────
// Job application
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/job-applications/cover-letter
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(
        &state,
        TaskRequest::CoverLetter {
            job_application: &req.job_application,
            resume: &req.resume,
        },
    )
    .await
}

/// POST /api/v1/ai/job-applications/tips
pub async fn handle_job_application_tips(
    State(state): State<AppState>,
    Json(req): Json<JobApplicationRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(
        &state,
        TaskRequest::JobApplicationTips {
            job_application: &req.job_application,
        },
    )
    .await
}

/// POST /api/v1/ai/job-applications/interview-questions/prepare
///
/// Questions from the job alone. Every non-empty line of the reply is a question.
pub async fn handle_prepare_interview_questions(
    State(state): State<AppState>,
    Json(req): Json<JobApplicationRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(
        &state,
        TaskRequest::InterviewQuestions {
            job_application: &req.job_application,
        },
    )
    .await
}

/// POST /api/v1/ai/job-applications/interview-questions
///
/// Questions tailored to the candidate when a resume is supplied. Only lines
/// labeled `Q:` or `Question:` in the reply are kept.
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(req): Json<InterviewQuestionsRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    run(
        &state,
        TaskRequest::InterviewQuestionsWithResume {
            job_application: &req.job_application,
            resume: req.resume.as_ref(),
        },
    )
    .await
}

/// POST /api/v1/ai/job-applications/interview-answer
pub async fn handle_interview_answer(
    State(state): State<AppState>,
    Json(req): Json<InterviewAnswerRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    require_text(&req.question, "question")?;
    run(
        &state,
        TaskRequest::InterviewAnswer {
            question: &req.question,
            job_application: &req.job_application,
            resume: &req.resume,
        },
    )
    .await
}

/// POST /api/v1/ai/interview-answer
///
/// Answer from a job title and free-form resume text.
pub async fn handle_text_interview_answer(
    State(state): State<AppState>,
    Json(req): Json<TextInterviewAnswerRequest>,
) -> Result<Json<TaskOutput>, AppError> {
    require_text(&req.question, "question")?;
    run(
        &state,
        TaskRequest::InterviewAnswerFromText {
            question: &req.question,
            job_title: &req.job_title,
            resume_text: req.resume_text.as_deref(),
        },
    )
    .await
}
