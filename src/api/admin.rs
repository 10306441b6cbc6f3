//! Admin endpoints. Every route here sits behind the basic auth layer.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::Html,
    Form,
};

use crate::errors::AppError;
use crate::models::AddGripeForm;
use crate::views;
use crate::AppState;

/// GET /gripes - Admin dashboard.
pub async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let gripes = state.repo.list_gripes().await?;
    let submissions = state.repo.list_submissions().await?;

    Ok(Html(views::render_admin(&gripes, &submissions)))
}

/// POST /admin/gripes - Add a gripe from the `gripe` form field.
///
/// A missing or unreadable form counts as blank input.
pub async fn add_gripe(
    State(state): State<AppState>,
    form: Result<Form<AddGripeForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("Unreadable gripe form: {}", rejection);
            AddGripeForm::default()
        }
    };

    if state.repo.add_gripe(&form.gripe).await?.is_none() {
        tracing::debug!("Blank gripe ignored");
    }

    let gripes = state.repo.list_gripes().await?;
    Ok(Html(views::render_gripes_list(&gripes)))
}

/// DELETE /admin/gripes/{id} - Remove a gripe.
pub async fn delete_gripe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    state.repo.delete_gripe(&id).await?;

    let gripes = state.repo.list_gripes().await?;
    Ok(Html(views::render_gripes_list(&gripes)))
}

/// DELETE /admin/submissions/{index} - Remove a submission by position.
pub async fn delete_submission(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Html<String>, AppError> {
    state.repo.delete_submission(index).await?;

    let submissions = state.repo.list_submissions().await?;
    Ok(Html(views::render_submissions_list(&submissions)))
}
