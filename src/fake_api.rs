//! In-memory stand-in for the activities REST API, used by unit tests.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
    pub json_content_type: bool,
}

#[derive(Default)]
struct Store {
    next_id: i64,
    activities: Vec<Map<String, Value>>,
    requests: Vec<RecordedRequest>,
    plain_text: bool,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    store: Arc<Mutex<Store>>,
}

impl FakeApi {
    /// Serves the fake on an ephemeral port and returns its collection url.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/api/activities", get(list).post(create).delete(delete_all))
            .route("/api/activities/:id", axum::routing::put(update).delete(delete_one))
            .with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/api/activities")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.store.lock().unwrap().requests.clone()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.method == method && request.path == path)
            .count()
    }

    pub fn seed(&self, title: &str) -> i64 {
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;
        let id = store.next_id;
        let mut activity = Map::new();
        activity.insert("id".into(), Value::from(id));
        activity.insert("title".into(), Value::from(title));
        activity.insert("consumption_in_wh".into(), Value::from(100));
        activity.insert("image_path".into(), Value::from("00/seed.png"));
        activity.insert("source".into(), Value::from("https://example.org"));
        store.activities.push(activity);
        id
    }

    /// Stores `row` as-is, bypassing validation.
    pub fn seed_raw(&self, row: Value) {
        if let Value::Object(row) = row {
            self.store.lock().unwrap().activities.push(row);
        }
    }

    /// Successful list, create and update calls answer 200 with a text body.
    pub fn answer_with_plain_text(&self) {
        self.store.lock().unwrap().plain_text = true;
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().activities.len()
    }

    fn record(&self, method: Method, path: String, headers: &HeaderMap, body: &str) {
        let json_content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));
        self.store.lock().unwrap().requests.push(RecordedRequest {
            method: method.to_string(),
            path,
            body: serde_json::from_str(body).ok(),
            json_content_type,
        });
    }
}

/// A url nothing is listening on.
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/activities")
}

fn valid_payload(body: &str) -> Option<Map<String, Value>> {
    let Value::Object(payload) = serde_json::from_str::<Value>(body).ok()? else {
        return None;
    };
    for key in ["title", "image_path", "source"] {
        match payload.get(key) {
            Some(Value::String(text)) if !text.trim().is_empty() => {}
            _ => return None,
        }
    }
    let consumption = match payload.get("consumption_in_wh")? {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (consumption > 0.0).then_some(payload)
}

fn entity<T: serde::Serialize>(plain_text: bool, value: T) -> Response {
    if plain_text {
        (StatusCode::OK, "created").into_response()
    } else {
        Json(value).into_response()
    }
}

async fn list(State(api): State<FakeApi>, headers: HeaderMap) -> Response {
    api.record(Method::GET, "/api/activities".into(), &headers, "");
    let store = api.store.lock().unwrap();
    entity(store.plain_text, store.activities.clone())
}

async fn create(State(api): State<FakeApi>, headers: HeaderMap, body: String) -> Response {
    api.record(Method::POST, "/api/activities".into(), &headers, &body);
    let Some(mut activity) = valid_payload(&body) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let mut store = api.store.lock().unwrap();
    store.next_id += 1;
    activity.insert("id".into(), Value::from(store.next_id));
    store.activities.push(activity.clone());
    entity(store.plain_text, activity)
}

async fn update(
    State(api): State<FakeApi>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    api.record(Method::PUT, format!("/api/activities/{id}"), &headers, &body);
    let (Ok(id), Some(details)) = (id.parse::<i64>(), valid_payload(&body)) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let mut store = api.store.lock().unwrap();
    let Some(activity) = store
        .activities
        .iter_mut()
        .find(|activity| activity.get("id") == Some(&Value::from(id)))
    else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    for (key, value) in details {
        if key != "id" {
            activity.insert(key, value);
        }
    }
    let activity = activity.clone();
    entity(store.plain_text, activity)
}

async fn delete_one(State(api): State<FakeApi>, Path(id): Path<String>, headers: HeaderMap) -> StatusCode {
    api.record(Method::DELETE, format!("/api/activities/{id}"), &headers, "");
    let Ok(id) = id.parse::<i64>() else {
        return StatusCode::BAD_REQUEST;
    };
    let mut store = api.store.lock().unwrap();
    let before = store.activities.len();
    store
        .activities
        .retain(|activity| activity.get("id") != Some(&Value::from(id)));
    if store.activities.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn delete_all(State(api): State<FakeApi>, headers: HeaderMap) -> StatusCode {
    api.record(Method::DELETE, "/api/activities".into(), &headers, "");
    api.store.lock().unwrap().activities.clear();
    StatusCode::NO_CONTENT
}
