use axum::Json;
use axum_extra::extract::WithRejection;

use crate::contact::{submit_contact, Acknowledgment, ContactSubmission};
use crate::errors::AppError;

/// POST /api/v1/contact
/// Validates the submission and acknowledges it. Nothing is sent or stored.
pub async fn handle_submit_contact(
    WithRejection(Json(input), _): WithRejection<Json<ContactSubmission>, AppError>,
) -> Result<Json<Acknowledgment>, AppError> {
    Ok(Json(submit_contact(&input)?))
}
