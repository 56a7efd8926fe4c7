//! Item route handlers.
//!
//! Each handler is stateless across requests: it reads its input, calls the
//! repository, and either renders a page or redirects. Every mutating route
//! commits before responding and ends in a redirect to the list page, so a
//! browser refresh never resubmits the write.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;

use crate::domain::ItemDraft;
use crate::error::AppError;
use crate::view;
use crate::web::AppState;

/// GET `/` - the item list.
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let items = state.repo.list_items().await?;
    Ok(view::list_page(&items))
}

/// GET `/add` - the empty add form.
pub async fn add_form() -> Html<String> {
    view::add_page()
}

/// POST `/add` - create an item, then redirect to the list.
pub async fn add(
    State(state): State<AppState>,
    Form(draft): Form<ItemDraft>,
) -> Result<Redirect, AppError> {
    validate_name(&draft)?;

    let id = state.repo.insert_item(&draft).await?;
    tracing::info!(id, name = %draft.name, "item created");

    Ok(Redirect::to("/"))
}

/// GET `/edit/{id}` - the edit form, pre-filled with current values.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let item = state
        .repo
        .get_item(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no item with id {}", id)))?;

    Ok(view::edit_page(&item))
}

/// POST `/edit/{id}` - overwrite an item's fields, then redirect to the list.
///
/// A missing id is a silent no-op; the redirect happens either way.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(draft): Form<ItemDraft>,
) -> Result<Redirect, AppError> {
    validate_name(&draft)?;

    state.repo.update_item(id, &draft).await?;
    tracing::info!(id, name = %draft.name, "item updated");

    Ok(Redirect::to("/"))
}

/// POST `/delete/{id}` - delete an item, then redirect to the list.
///
/// Idempotent; a missing id is a silent no-op.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.repo.delete_item(id).await?;
    tracing::info!(id, "item deleted");

    Ok(Redirect::to("/"))
}

fn validate_name(draft: &ItemDraft) -> Result<(), AppError> {
    if draft.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}
