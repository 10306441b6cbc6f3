//! Public endpoints.

use axum::{
    extract::State,
    http::HeaderMap,
    response::Html,
};

use crate::errors::AppError;
use crate::views;
use crate::AppState;

/// Header the front end's prompt puts the submitted text in.
pub const PROMPT_HEADER: &str = "hx-prompt";

/// GET / - Landing page.
pub async fn index() -> Html<String> {
    Html(views::render_index())
}

/// GET /random-gripe - One gripe chosen uniformly at random.
pub async fn random_gripe(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    match state.repo.random_gripe().await {
        Ok(Some(text)) => Ok(Html(views::escape_html(&text))),
        Ok(None) => Ok(Html(views::NO_GRIPES_AVAILABLE.to_string())),
        Err(e) if e.is_corrupted() => {
            tracing::warn!("Serving placeholder gripe: {}", e);
            Ok(Html(views::NO_GRIPES.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /submit-a-gripe - Queue a visitor submission for review.
///
/// The confirmation is returned whether or not anything was recorded.
pub async fn submit_gripe(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<&'static str>, AppError> {
    let text = headers
        .get(PROMPT_HEADER)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();

    match state.repo.submit(&text).await {
        Ok(recorded) => {
            if !recorded {
                tracing::debug!("Blank submission ignored");
            }
        }
        Err(e) if e.is_corrupted() => {
            tracing::error!("Submission dropped, store unreadable: {}", e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(Html(views::SUBMISSION_CONFIRMATION))
}
