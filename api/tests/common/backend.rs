//! Stand-in for the Supabase project and the Gemini endpoint, served over a
//! real socket so the production HTTP clients are exercised.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Duration, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use uuid::Uuid;

pub const ANON_KEY: &str = "anon-key";
pub const GEMINI_KEY: &str = "gemini-key";

#[derive(Clone)]
struct StubUser {
    id: Uuid,
    email: String,
    password: String,
}

#[derive(Default)]
pub struct BackendData {
    users: Vec<StubUser>,
    tokens: HashMap<String, Uuid>,
    tables: HashMap<String, Vec<Value>>,
    ticks: i64,
    pub prompts: Vec<String>,
    pub llm_reply: String,
    pub llm_down: bool,
}

pub type SharedBackend = Arc<Mutex<BackendData>>;

impl BackendData {
    fn session_for(&mut self, user: &StubUser) -> Value {
        let token = format!("token-{}", Uuid::new_v4());
        self.tokens.insert(token.clone(), user.id);

        json!({
            "access_token": token,
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": {"id": user.id, "email": user.email, "aud": "authenticated"}
        })
    }

    /// Strictly increasing, fixed-width timestamps.
    fn next_timestamp(&mut self) -> String {
        self.ticks += 1;
        (Utc::now() + Duration::milliseconds(self.ticks))
            .to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables.get(table).cloned().unwrap_or_default()
    }
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn has_anon_key(headers: &HeaderMap) -> bool {
    headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(ANON_KEY)
}

fn error(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

#[derive(Deserialize)]
struct PasswordGrant {
    email: String,
    password: String,
}

async fn signup(
    State(backend): State<SharedBackend>,
    headers: HeaderMap,
    Json(body): Json<PasswordGrant>,
) -> Response {
    if !has_anon_key(&headers) {
        return error(StatusCode::UNAUTHORIZED, json!({"message": "No API key found"}));
    }

    let mut data = backend.lock().unwrap();
    if data.users.iter().any(|u| u.email == body.email) {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({"code": 422, "msg": "User already registered"}),
        );
    }

    let user = StubUser {
        id: Uuid::new_v4(),
        email: body.email,
        password: body.password,
    };
    data.users.push(user.clone());

    Json(data.session_for(&user)).into_response()
}

async fn token(
    State(backend): State<SharedBackend>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<PasswordGrant>,
) -> Response {
    if query.get("grant_type").map(String::as_str) != Some("password") {
        return error(
            StatusCode::BAD_REQUEST,
            json!({"error": "unsupported_grant_type"}),
        );
    }

    let mut data = backend.lock().unwrap();
    let user = data
        .users
        .iter()
        .find(|u| u.email == body.email && u.password == body.password)
        .cloned();

    match user {
        Some(user) => Json(data.session_for(&user)).into_response(),
        None => error(
            StatusCode::BAD_REQUEST,
            json!({"error": "invalid_grant", "error_description": "Invalid login credentials"}),
        ),
    }
}

async fn logout(State(backend): State<SharedBackend>, headers: HeaderMap) -> Response {
    let mut data = backend.lock().unwrap();
    match bearer(&headers).and_then(|t| data.tokens.remove(&t)) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => error(StatusCode::UNAUTHORIZED, json!({"msg": "invalid JWT"})),
    }
}

async fn current_user(State(backend): State<SharedBackend>, headers: HeaderMap) -> Response {
    let data = backend.lock().unwrap();
    let user = bearer(&headers)
        .and_then(|t| data.tokens.get(&t).copied())
        .and_then(|id| data.users.iter().find(|u| u.id == id));

    match user {
        Some(user) => Json(json!({"id": user.id, "email": user.email})).into_response(),
        None => error(StatusCode::UNAUTHORIZED, json!({"msg": "invalid JWT"})),
    }
}

/// Row filters in PostgREST's `column=eq.value` form, plus the row-level
/// policy that only the caller's rows are visible.
fn row_matches(row: &Value, query: &HashMap<String, String>, caller: Uuid) -> bool {
    if row["user_id"].as_str() != Some(caller.to_string().as_str()) {
        return false;
    }

    query
        .iter()
        .filter(|(k, _)| !matches!(k.as_str(), "select" | "order" | "limit"))
        .all(|(column, filter)| match filter.strip_prefix("eq.") {
            Some(expected) => row[column.as_str()].as_str() == Some(expected),
            None => false,
        })
}

fn caller(data: &BackendData, headers: &HeaderMap) -> Option<Uuid> {
    if !has_anon_key(headers) {
        return None;
    }
    bearer(headers).and_then(|t| data.tokens.get(&t).copied())
}

async fn select(
    State(backend): State<SharedBackend>,
    Path(table): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let data = backend.lock().unwrap();
    let Some(caller) = caller(&data, &headers) else {
        return error(StatusCode::UNAUTHORIZED, json!({"message": "JWT expired"}));
    };

    let mut rows: Vec<Value> = data
        .rows(&table)
        .into_iter()
        .filter(|row| row_matches(row, &query, caller))
        .collect();

    if let Some((column, direction)) = query.get("order").and_then(|o| o.split_once('.')) {
        rows.sort_by(|a, b| {
            let ordering = a[column].as_str().cmp(&b[column].as_str());
            if direction == "desc" {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    if let Some(limit) = query.get("limit").and_then(|l| l.parse::<usize>().ok()) {
        rows.truncate(limit);
    }

    Json(rows).into_response()
}

async fn insert(
    State(backend): State<SharedBackend>,
    Path(table): Path<String>,
    headers: HeaderMap,
    Json(mut row): Json<Value>,
) -> Response {
    let mut data = backend.lock().unwrap();
    let Some(caller) = caller(&data, &headers) else {
        return error(StatusCode::UNAUTHORIZED, json!({"message": "JWT expired"}));
    };

    if row["user_id"].as_str() != Some(caller.to_string().as_str()) {
        return error(
            StatusCode::FORBIDDEN,
            json!({"message": "new row violates row-level security policy"}),
        );
    }

    row["id"] = json!(Uuid::new_v4());
    row["created_at"] = json!(data.next_timestamp());
    data.tables.entry(table).or_default().push(row.clone());

    (StatusCode::CREATED, Json(vec![row])).into_response()
}

async fn update(
    State(backend): State<SharedBackend>,
    Path(table): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(changes): Json<Value>,
) -> Response {
    let mut data = backend.lock().unwrap();
    let Some(caller) = caller(&data, &headers) else {
        return error(StatusCode::UNAUTHORIZED, json!({"message": "JWT expired"}));
    };

    let mut updated = Vec::new();
    for row in data.tables.entry(table).or_default().iter_mut() {
        if row_matches(row, &query, caller) {
            if let (Some(row), Some(changes)) = (row.as_object_mut(), changes.as_object()) {
                for (column, value) in changes {
                    row.insert(column.clone(), value.clone());
                }
            }
            updated.push(row.clone());
        }
    }

    Json(updated).into_response()
}

async fn remove(
    State(backend): State<SharedBackend>,
    Path(table): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let mut data = backend.lock().unwrap();
    let Some(caller) = caller(&data, &headers) else {
        return error(StatusCode::UNAUTHORIZED, json!({"message": "JWT expired"}));
    };

    let rows = data.tables.entry(table).or_default();
    let (removed, kept): (Vec<Value>, Vec<Value>) = rows
        .drain(..)
        .partition(|row| row_matches(row, &query, caller));
    *rows = kept;

    Json(removed).into_response()
}

async fn generate_content(
    State(backend): State<SharedBackend>,
    Path(model): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(GEMINI_KEY) {
        return error(StatusCode::FORBIDDEN, json!({"error": {"message": "API key not valid"}}));
    }
    if !model.ends_with(":generateContent") {
        return error(StatusCode::NOT_FOUND, json!({"error": {"message": "unknown method"}}));
    }

    let mut data = backend.lock().unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    data.prompts.push(prompt);

    if data.llm_down {
        return error(
            StatusCode::SERVICE_UNAVAILABLE,
            json!({"error": {"message": "The model is overloaded"}}),
        );
    }

    Json(json!({
        "candidates": [{
            "content": {"parts": [{"text": data.llm_reply}], "role": "model"},
            "finishReason": "STOP"
        }]
    }))
    .into_response()
}

/// Serves the stub on an ephemeral port and returns its base URL.
pub async fn spawn_backend(backend: SharedBackend) -> String {
    let app = Router::new()
        .route("/auth/v1/signup", post(signup))
        .route("/auth/v1/token", post(token))
        .route("/auth/v1/logout", post(logout))
        .route("/auth/v1/user", get(current_user))
        .route(
            "/rest/v1/{table}",
            get(select).post(insert).patch(update).delete(remove),
        )
        .route("/v1beta/models/{model}", post(generate_content))
        .with_state(backend);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
