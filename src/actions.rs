use crate::client::ActivityClient;
use crate::errors::ActionError;
use crate::models::{Activity, REQUIRED_FIELDS};
use crate::view::{StatusMessage, TableView};
use chrono::Local;
use reqwest::{Response, StatusCode};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{info, warn};

pub const ADD_OK: &str = "Addition was successful!";
pub const ADD_FAILED: &str = "Addition was unsuccessful!";
pub const UPDATE_OK: &str = "Update was successful!";
pub const UPDATE_FAILED: &str = "Update was unsuccessful!";
pub const UPDATE_INVALID_ID: &str = "Update was unsuccessful! Make sure you enter a valid id.";
pub const REMOVE_OK: &str = "Removal was successful!";
pub const REMOVE_FAILED: &str = "Removal was unsuccessful!";
pub const REMOVE_INVALID_ID: &str = "Removal was unsuccessful! Make sure you enter a valid id.";
pub const REMOVE_NOT_FOUND: &str =
    "Removal was unsuccessful! An entry with the provided id was not found.";
pub const RESET_OK: &str = "Reset successful!";
pub const RESET_FAILED: &str = "Reset was unsuccessful!";
pub const DB_UNREACHABLE: &str = "Could not connect to the database!";

/// What an action leaves behind: the status line, and whether the table
/// should be re-read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: StatusMessage,
    pub refresh: bool,
}

impl Outcome {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            status: StatusMessage::success(text),
            refresh: true,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            status: StatusMessage::failure(text),
            refresh: false,
        }
    }
}

/// Replaces a client-supplied `id` with `null` so the server assigns one.
pub fn neutralize_id(value: &mut Value) {
    if let Some(id) = value.as_object_mut().and_then(|object| object.get_mut("id")) {
        *id = Value::Null;
    }
}

fn fields_to_payload(fields: BTreeMap<String, String>) -> Result<Value, ActionError> {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .into_iter()
        .filter(|key| fields.get(*key).is_none_or(|value| value.trim().is_empty()))
        .collect();
    if !missing.is_empty() {
        return Err(ActionError::Decode(format!("missing {}", missing.join(", "))));
    }

    let mut payload: Value = fields
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect::<Map<String, Value>>()
        .into();
    neutralize_id(&mut payload);
    Ok(payload)
}

/// 400 is a rejection; anything else must carry a JSON entity.
async fn read_entity(response: Response) -> Result<Value, ActionError> {
    if response.status() == StatusCode::BAD_REQUEST {
        return Err(ActionError::Rejected);
    }
    response
        .json::<Value>()
        .await
        .map_err(|err| ActionError::Body(err.to_string()))
}

fn log_failure(action: &str, err: &ActionError) {
    match err {
        ActionError::Network(_) | ActionError::Body(_) => warn!("{action} failed: {err}"),
        _ => info!(sent = err.sent_request(), "{action} failed: {err}"),
    }
}

async fn post_fields(
    client: &ActivityClient,
    fields: BTreeMap<String, String>,
) -> Result<Value, ActionError> {
    let payload = fields_to_payload(fields)?;
    read_entity(client.create(&payload).await?).await
}

pub async fn create_from_fields(client: &ActivityClient, fields: BTreeMap<String, String>) -> Outcome {
    match post_fields(client, fields).await {
        Ok(_) => {
            info!("activity added from form");
            Outcome::success(ADD_OK)
        }
        Err(err) => {
            log_failure("add", &err);
            Outcome::failure(ADD_FAILED)
        }
    }
}

async fn post_json(client: &ActivityClient, raw: &str) -> Result<Value, ActionError> {
    let mut payload: Value =
        serde_json::from_str(raw).map_err(|err| ActionError::Decode(err.to_string()))?;
    if !payload.is_object() {
        return Err(ActionError::Decode("expected a JSON object".to_string()));
    }
    neutralize_id(&mut payload);
    read_entity(client.create(&payload).await?).await
}

pub async fn create_from_json(client: &ActivityClient, raw: &str) -> Outcome {
    match post_json(client, raw).await {
        Ok(created) => {
            let title = created
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| created.to_string());
            info!(%title, "activity added from JSON");
            Outcome::success(format!("{ADD_OK} Just added {title}."))
        }
        Err(err) => {
            log_failure("add from JSON", &err);
            Outcome::failure(ADD_FAILED)
        }
    }
}

/// Trims `id` and refuses values that would not address a single item.
/// Blank and dot-segment ids collapse onto the collection path.
fn item_id(id: &str) -> Result<&str, ActionError> {
    let id = id.trim();
    match id {
        "" => Err(ActionError::Decode("missing id".to_string())),
        "." | ".." => Err(ActionError::Decode(format!("invalid id {id:?}"))),
        _ => Ok(id),
    }
}

async fn put_fields(
    client: &ActivityClient,
    mut fields: BTreeMap<String, String>,
) -> Result<Value, ActionError> {
    let id = fields.remove("id").unwrap_or_default();
    let id = item_id(&id)?;
    let payload = fields_to_payload(fields)?;
    read_entity(client.update(id, &payload).await?).await
}

/// Edits the activity named by the form's `id` field with the remaining fields.
pub async fn edit(client: &ActivityClient, fields: BTreeMap<String, String>) -> Outcome {
    let invalid_id = fields.get("id").is_none_or(|id| item_id(id).is_err());
    match put_fields(client, fields).await {
        Ok(_) => {
            info!("activity updated");
            Outcome::success(UPDATE_OK)
        }
        Err(err) => {
            log_failure("update", &err);
            if invalid_id {
                Outcome::failure(UPDATE_INVALID_ID)
            } else {
                Outcome::failure(UPDATE_FAILED)
            }
        }
    }
}

async fn delete_one(client: &ActivityClient, id: &str) -> Result<(), ActionError> {
    let id = item_id(id)?;
    let response = client.delete(id).await?;
    match response.status() {
        StatusCode::BAD_REQUEST => Err(ActionError::Rejected),
        StatusCode::NOT_FOUND => Err(ActionError::NotFound),
        _ => Ok(()),
    }
}

pub async fn remove(client: &ActivityClient, id: &str) -> Outcome {
    match delete_one(client, id).await {
        Ok(()) => {
            info!(id = id.trim(), "activity removed");
            Outcome::success(REMOVE_OK)
        }
        Err(err) => {
            log_failure("remove", &err);
            match err {
                ActionError::Decode(_) | ActionError::Rejected => Outcome::failure(REMOVE_INVALID_ID),
                ActionError::NotFound => Outcome::failure(REMOVE_NOT_FOUND),
                _ => Outcome::failure(REMOVE_FAILED),
            }
        }
    }
}

pub async fn reset(client: &ActivityClient) -> Outcome {
    match client.delete_all().await {
        Ok(response) if response.status() == StatusCode::BAD_REQUEST => {
            log_failure("reset", &ActionError::Rejected);
            Outcome::failure(RESET_FAILED)
        }
        Ok(_) => {
            info!("collection reset");
            Outcome::success(RESET_OK)
        }
        Err(err) => {
            log_failure("reset", &ActionError::Network(err));
            Outcome::failure(DB_UNREACHABLE)
        }
    }
}

/// Reads the whole collection into a fresh table snapshot.
pub async fn refresh(client: &ActivityClient) -> Result<TableView, ActionError> {
    let response = client.list().await?;
    let status = response.status();
    let activities = response
        .json::<Vec<Activity>>()
        .await
        .map_err(|err| ActionError::Body(format!("{status}: {err}")))?;
    Ok(TableView::from_activities(activities, Local::now()))
}
