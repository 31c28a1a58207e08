use axum::{extract::Query, Json};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::demos::iris::{filter_species, generate_iris_dataset, IrisRow};
use crate::demos::metrics::{generate_model_metrics, ModelMetrics};
use crate::demos::sales::{generate_sales_series, SalesPoint, DEFAULT_PERIODS};
use crate::errors::AppError;

/// Upper bound on generated sales periods (ten years of days).
const MAX_PERIODS: usize = 3650;

#[derive(Debug, Deserialize)]
pub struct IrisQuery {
    pub species: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    pub periods: Option<usize>,
}

/// GET /api/v1/datasets/iris
pub async fn handle_iris(
    WithRejection(Query(query), _): WithRejection<Query<IrisQuery>, AppError>,
) -> Result<Json<Vec<IrisRow>>, AppError> {
    let rows = generate_iris_dataset();
    match query.species.as_deref() {
        Some(name) => Ok(Json(filter_species(&rows, name)?)),
        None => Ok(Json(rows)),
    }
}

/// GET /api/v1/datasets/sales
/// Fresh noise on every call.
pub async fn handle_sales(
    WithRejection(Query(query), _): WithRejection<Query<SalesQuery>, AppError>,
) -> Result<Json<Vec<SalesPoint>>, AppError> {
    let periods = query.periods.unwrap_or(DEFAULT_PERIODS);
    if periods > MAX_PERIODS {
        return Err(AppError::BadRequest(format!(
            "periods must be at most {MAX_PERIODS}"
        )));
    }
    Ok(Json(generate_sales_series(periods, &mut rand::thread_rng())))
}

/// GET /api/v1/datasets/models
pub async fn handle_models() -> Json<Vec<ModelMetrics>> {
    Json(generate_model_metrics())
}
