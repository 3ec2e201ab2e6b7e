use crate::actions::{self, Outcome};
use crate::errors::{AppError, UploadError};
use crate::import;
use crate::models::{JsonForm, RemoveForm};
use crate::panels::{ButtonGroup, InputPanel};
use crate::state::AppState;
use crate::ui::render_index;
use crate::view::AdminView;
use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use std::collections::BTreeMap;
use tracing::warn;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let view = state.view.lock().await;
    Html(render_index(&view))
}

pub async fn get_view(State(state): State<AppState>) -> Json<AdminView> {
    Json(state.view.lock().await.clone())
}

pub async fn add_activity(
    State(state): State<AppState>,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Redirect {
    let outcome = actions::create_from_fields(&state.client, fields).await;
    state.settle(outcome).await;
    Redirect::to("/")
}

pub async fn add_activity_json(
    State(state): State<AppState>,
    Form(payload): Form<JsonForm>,
) -> Redirect {
    let outcome = actions::create_from_json(&state.client, &payload.json).await;
    state.settle(outcome).await;
    Redirect::to("/")
}

/// Pulls the `file` part out of an upload. Any transport or framing error
/// means there is nothing to parse.
async fn read_upload(
    upload: Result<Multipart, MultipartRejection>,
) -> Result<Bytes, UploadError> {
    let mut multipart = upload?;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            return Ok(field.bytes().await?);
        }
    }
    Err(UploadError::MissingFile)
}

pub async fn import_activities(
    State(state): State<AppState>,
    upload: Result<Multipart, MultipartRejection>,
) -> Redirect {
    let outcome = match read_upload(upload).await {
        Ok(contents) => import::import_file(&state.client, &contents).await,
        Err(err) => {
            warn!("upload unreadable: {err}");
            Outcome::failure(import::PARSE_FAILED)
        }
    };
    state.settle(outcome).await;
    Redirect::to("/")
}

pub async fn edit_activity(
    State(state): State<AppState>,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Redirect {
    let outcome = actions::edit(&state.client, fields).await;
    state.settle(outcome).await;
    Redirect::to("/")
}

pub async fn remove_activity(
    State(state): State<AppState>,
    Form(payload): Form<RemoveForm>,
) -> Redirect {
    let outcome = actions::remove(&state.client, &payload.id).await;
    state.settle(outcome).await;
    Redirect::to("/")
}

pub async fn reset_activities(State(state): State<AppState>) -> Redirect {
    let outcome = actions::reset(&state.client).await;
    state.settle(outcome).await;
    Redirect::to("/")
}

pub async fn refresh_table(State(state): State<AppState>) -> Redirect {
    state.refresh().await;
    Redirect::to("/")
}

pub async fn toggle_group(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Redirect, AppError> {
    let group = ButtonGroup::from_name(&name)
        .ok_or_else(|| AppError::not_found(format!("unknown button group '{name}'")))?;
    state.view.lock().await.panels.toggle_group(group);
    Ok(Redirect::to("/"))
}

pub async fn toggle_input(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Redirect, AppError> {
    let panel = InputPanel::from_id(&name)
        .ok_or_else(|| AppError::not_found(format!("unknown input panel '{name}'")))?;
    state.view.lock().await.panels.toggle_input(panel);
    Ok(Redirect::to("/"))
}
