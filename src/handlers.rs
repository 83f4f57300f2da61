use crate::categories::Category;
use crate::errors::AppError;
use crate::models::{LatestResponse, SeriesResponse};
use crate::state::{AppState, DashboardState, default_latest, default_series};
use crate::ui::render_dashboard;
use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    category: Option<String>,
    view: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    category: Option<String>,
}

/// The dashboard page. Each request plays the part of a fresh mount: both
/// fetch operations fire concurrently, both reducers run, and the reducer
/// for the requested view runs last so its outcome owns the shared error
/// field and the mode flag.
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let category = parse_category(query.category.as_deref())?;
    let cards = match query.view.as_deref() {
        None | Some("chart") => false,
        Some("cards") => true,
        Some(other) => {
            return Err(AppError::bad_request(format!("unknown view '{other}'")));
        }
    };

    let (series, latest) = tokio::join!(
        state.fetcher.fetch_category(category),
        state.fetcher.fetch_latest()
    );
    if let Err(err) = &series {
        warn!("series fetch for {category} failed, serving defaults: {err}");
    }
    if let Err(err) = &latest {
        warn!("latest-values fetch failed, serving defaults: {err}");
    }

    let mut dashboard = DashboardState::default();
    if cards {
        dashboard.apply_series(category, series);
        dashboard.apply_summary(latest);
    } else {
        dashboard.apply_summary(latest);
        dashboard.apply_series(category, series);
    }

    Ok(Html(render_dashboard(&dashboard)))
}

/// JSON mirror of the single-category fetch, fallback semantics included.
pub async fn api_series(
    State(state): State<AppState>,
    Query(query): Query<SeriesQuery>,
) -> Result<Json<SeriesResponse>, AppError> {
    let category = parse_category(query.category.as_deref())?;

    let response = match state.fetcher.fetch_category(category).await {
        Ok(data) => SeriesResponse {
            category,
            data,
            error_message: String::new(),
        },
        Err(err) => {
            warn!("series fetch for {category} failed, serving defaults: {err}");
            SeriesResponse {
                category: Category::PositiveCases,
                data: default_series(),
                error_message: err.to_string(),
            }
        }
    };

    Ok(Json(response))
}

/// JSON mirror of the latest-values batch: six entries or six zeros.
pub async fn api_latest(State(state): State<AppState>) -> Json<LatestResponse> {
    let response = match state.fetcher.fetch_latest().await {
        Ok(data) => LatestResponse {
            data,
            error_message: String::new(),
        },
        Err(err) => {
            warn!("latest-values fetch failed, serving defaults: {err}");
            LatestResponse {
                data: default_latest(),
                error_message: err.to_string(),
            }
        }
    };

    Json(response)
}

/// Only members of the fixed category set may reach the network layer;
/// anything else is rejected here.
fn parse_category(raw: Option<&str>) -> Result<Category, AppError> {
    match raw {
        None => Ok(Category::PositiveCases),
        Some(slug) => slug
            .parse()
            .map_err(|err: crate::categories::UnknownCategory| {
                AppError::bad_request(err.to_string())
            }),
    }
}
