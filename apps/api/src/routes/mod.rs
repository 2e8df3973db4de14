pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume tasks
        .route(
            "/api/v1/ai/resumes/content",
            post(handlers::handle_resume_content),
        )
        .route(
            "/api/v1/ai/resumes/suggestions",
            post(handlers::handle_resume_suggestions),
        )
        .route(
            "/api/v1/ai/resumes/optimizations",
            post(handlers::handle_resume_optimizations),
        )
        .route(
            "/api/v1/ai/resumes/keywords",
            post(handlers::handle_resume_keywords),
        )
        .route(
            "/api/v1/ai/resumes/feedback",
            post(handlers::handle_resume_feedback),
        )
        // Portfolio tasks
        .route(
            "/api/v1/ai/portfolios/content",
            post(handlers::handle_portfolio_content),
        )
        .route(
            "/api/v1/ai/portfolios/suggestions",
            post(handlers::handle_portfolio_suggestions),
        )
        .route(
            "/api/v1/ai/portfolios/description",
            post(handlers::handle_portfolio_description),
        )
        .route(
            "/api/v1/ai/portfolios/keywords",
            post(handlers::handle_portfolio_keywords),
        )
        // Job application tasks
        .route(
            "/api/v1/ai/job-applications/cover-letter",
            post(handlers::handle_cover_letter),
        )
        .route(
            "/api/v1/ai/job-applications/tips",
            post(handlers::handle_job_application_tips),
        )
        .route(
            "/api/v1/ai/job-applications/interview-questions",
            post(handlers::handle_interview_questions),
        )
        .route(
            "/api/v1/ai/job-applications/interview-questions/prepare",
            post(handlers::handle_prepare_interview_questions),
        )
        .route(
            "/api/v1/ai/job-applications/interview-answer",
            post(handlers::handle_interview_answer),
        )
        .route(
            "/api/v1/ai/interview-answer",
            post(handlers::handle_text_interview_answer),
        )
        .fallback(not_found)
        .with_state(state)
}
