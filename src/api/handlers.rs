//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, SiteDto, SitesQuery};
use crate::data::filter::year_filter;
use crate::data::summary::SiteSummary;

/// Returns the aggregate dataset summary.
///
/// `GET /summary` → 200 + `SiteSummary` JSON
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<SiteSummary> {
    Json(state.summary.clone())
}

/// Returns site records, optionally filtered by operational-year range.
///
/// `GET /sites` → 200 + `Vec<SiteDto>` JSON (every record, filtered or not)
/// `GET /sites?max_year=Y` → records with a known year `<= Y`
/// `GET /sites?min_year=A&max_year=B` → known year in `[A, B]`
/// `GET /sites?min_year=2010&max_year=2000` → 400 + `ErrorResponse`
pub async fn get_sites(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SitesQuery>,
) -> impl IntoResponse {
    if let (Some(lo), Some(hi)) = (query.min_year, query.max_year) {
        if lo > hi {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("`min_year` ({lo}) must be <= `max_year` ({hi})"),
                }),
            ));
        }
    }

    let records: Vec<SiteDto> = state
        .sites
        .iter()
        .filter(|r| match query.max_year {
            Some(hi) => year_filter(hi)(r),
            None => true,
        })
        .filter(|r| match query.min_year {
            Some(lo) => r.operational_year.is_some_and(|y| y >= lo),
            None => true,
        })
        .map(SiteDto::from)
        .collect();

    Ok(Json(records))
}
