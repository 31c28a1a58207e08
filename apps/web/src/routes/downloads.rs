use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::content::Download;
use crate::errors::AppError;
use crate::state::AppState;

fn attachment(download: &Download) -> Response {
    (
        [
            (header::CONTENT_TYPE, download.media_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", download.filename),
            ),
        ],
        download.bytes.clone(),
    )
        .into_response()
}

/// GET /downloads/resume.pdf
/// May be an empty body when no PDF was found at startup.
pub async fn handle_resume_pdf(State(state): State<AppState>) -> Response {
    attachment(&state.content.resume().pdf)
}

/// GET /downloads/resume.txt
pub async fn handle_resume_text(State(state): State<AppState>) -> Response {
    attachment(&state.content.resume().text)
}

/// GET /assets/profile-image
pub async fn handle_profile_image(State(state): State<AppState>) -> Result<Response, AppError> {
    let image = state
        .content
        .profile_image()
        .image()
        .ok_or_else(|| AppError::NotFound("Profile image is not available".to_string()))?;
    Ok(([(header::CONTENT_TYPE, image.media_type)], image.bytes).into_response())
}
