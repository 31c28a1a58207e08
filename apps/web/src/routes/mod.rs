pub mod contact;
pub mod datasets;
pub mod downloads;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages (session-backed navigation)
        .route("/", get(pages::handle_current_page))
        .route("/pages/:page", get(pages::handle_select_page))
        .route("/contact", post(pages::handle_contact_form))
        // Downloads and assets
        .route("/downloads/resume.pdf", get(downloads::handle_resume_pdf))
        .route("/downloads/resume.txt", get(downloads::handle_resume_text))
        .route("/assets/profile-image", get(downloads::handle_profile_image))
        // JSON API
        .route("/api/v1/pages/:page", get(pages::handle_get_page_view))
        .route("/api/v1/contact", post(contact::handle_submit_contact))
        .route("/api/v1/datasets/iris", get(datasets::handle_iris))
        .route("/api/v1/datasets/sales", get(datasets::handle_sales))
        .route("/api/v1/datasets/models", get(datasets::handle_models))
        .with_state(state)
}
