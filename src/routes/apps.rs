use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::models::AppsQuery;
use crate::query::QueryProcessor;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/apps", get(get_apps))
}

/// GET /apps?sort=<app|rating>&genre=<genre> - List apps, optionally filtered and sorted.
async fn get_apps(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = AppsQuery::from_pairs(pairs);
    match QueryProcessor::process(query.sort.as_deref(), query.genre.as_deref(), &state.apps) {
        Ok(apps) => {
            tracing::debug!(
                sort = ?query.sort,
                genre = ?query.genre,
                "Returning {} apps",
                apps.len()
            );
            Json(apps).into_response()
        }
        Err(e) => {
            tracing::debug!("Rejected apps query: {}", e);
            e.into_response()
        }
    }
}
