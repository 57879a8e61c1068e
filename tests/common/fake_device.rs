//! A WLED stand-in served over real HTTP.
//!
//! Binds `127.0.0.1:0` and answers the four JSON endpoints the panel uses.
//! Writes to `/json/si` are applied to an in-memory document so later reads
//! reflect them.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Map, Value, json};
use tokio::task::JoinHandle;
use tracing::debug;

use wled::device::mock::sample_document;

#[derive(Debug, Default)]
struct Model {
    document: Value,
    live_frames: VecDeque<Value>,
    log: Vec<String>,
    writes: Vec<Value>,
    fail_next: usize,
}

type Shared = Arc<Mutex<Model>>;

/// Handle to a running fake device. The server stops when dropped.
pub struct FakeDevice {
    addr: SocketAddr,
    model: Shared,
    server: JoinHandle<()>,
}

impl FakeDevice {
    /// Serve the sample document with `segments` segments.
    pub async fn start(segments: u8) -> Self {
        Self::with_document(sample_document(segments)).await
    }

    pub async fn with_document(document: Value) -> Self {
        let model: Shared = Arc::new(Mutex::new(Model {
            document,
            ..Model::default()
        }));

        let app = Router::new()
            .route("/json", get(full))
            .route("/json/si", post(write))
            .route("/json/live", get(live))
            .route("/json/palx", get(palx))
            .with_state(Arc::clone(&model));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake device");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake device");
        });
        debug!(%addr, "Fake device listening");

        Self {
            addr,
            model,
            server,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn document(&self) -> Value {
        self.lock().document.clone()
    }

    /// Paths requested so far, e.g. `GET /json`.
    pub fn requests(&self) -> Vec<String> {
        self.lock().log.clone()
    }

    pub fn count(&self, request: &str) -> usize {
        self.lock().log.iter().filter(|r| *r == request).count()
    }

    /// Bodies posted to `/json/si`, in order.
    pub fn writes(&self) -> Vec<Value> {
        self.lock().writes.clone()
    }

    pub fn push_live_frame(&self, leds: &[&str]) {
        self.lock()
            .live_frames
            .push_back(json!({ "leds": leds, "n": 1 }));
    }

    /// Answer the next `count` requests with HTTP 500.
    pub fn fail_next(&self, count: usize) {
        self.lock().fail_next = count;
    }

    fn lock(&self) -> MutexGuard<'_, Model> {
        self.model.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for FakeDevice {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn enter(model: &Shared, request: String) -> Result<MutexGuard<'_, Model>, StatusCode> {
    let mut guard = model.lock().unwrap_or_else(PoisonError::into_inner);
    guard.log.push(request);
    if guard.fail_next > 0 {
        guard.fail_next -= 1;
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(guard)
}

async fn full(State(model): State<Shared>) -> Result<Json<Value>, StatusCode> {
    let guard = enter(&model, "GET /json".to_string())?;
    Ok(Json(guard.document.clone()))
}

async fn write(
    State(model): State<Shared>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut guard = enter(&model, "POST /json/si".to_string())?;
    guard.writes.push(body.clone());
    apply_write(&mut guard.document, &body);
    Ok(Json(json!({
        "state": guard.document["state"].clone(),
        "info": guard.document["info"].clone(),
    })))
}

async fn live(State(model): State<Shared>) -> Result<Json<Value>, StatusCode> {
    let mut guard = enter(&model, "GET /json/live".to_string())?;
    let frame = if guard.live_frames.len() > 1 {
        guard.live_frames.pop_front()
    } else {
        guard.live_frames.front().cloned()
    };
    Ok(Json(
        frame.unwrap_or_else(|| json!({ "leds": ["000000", "000000"], "n": 1 })),
    ))
}

// Two pages: a stop-based gradient and a symbolic one on each.
async fn palx(
    State(model): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let page: u32 = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
    let _guard = enter(&model, format!("GET /json/palx?page={page}"))?;
    let mut entries = Map::new();
    if page < 2 {
        let id = 13 + page * 2;
        entries.insert(
            id.to_string(),
            json!([[0, 255, 0, 0], [128, 0, 255, 0], [255, 0, 0, 255]]),
        );
        entries.insert((id + 1).to_string(), json!(["c1", "c2", "c3"]));
    }
    Ok(Json(json!({ "m": 1, "p": entries })))
}

fn apply_write(document: &mut Value, body: &Value) {
    let Some(state) = document.get_mut("state").and_then(Value::as_object_mut) else {
        return;
    };
    for key in ["on", "bri", "transition"] {
        if let Some(value) = body.get(key) {
            state.insert(key.to_string(), value.clone());
        }
    }

    let Some(patch) = body.get("seg").and_then(Value::as_object) else {
        return;
    };
    let Some(id) = patch.get("id").and_then(Value::as_u64) else {
        return;
    };
    let Some(segments) = state.get_mut("seg").and_then(Value::as_array_mut) else {
        return;
    };

    if patch.get("stop").and_then(Value::as_u64) == Some(0) {
        segments.retain(|s| s["id"].as_u64() != Some(id));
        return;
    }

    let index = match segments.iter().position(|s| s["id"].as_u64() == Some(id)) {
        Some(index) => index,
        None => {
            segments.push(json!({ "id": id }));
            segments.len() - 1
        }
    };
    if let Some(fields) = segments[index].as_object_mut() {
        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }
        let start = fields.get("start").and_then(Value::as_u64).unwrap_or(0);
        let stop = fields.get("stop").and_then(Value::as_u64).unwrap_or(0);
        fields.insert("len".to_string(), json!(stop.saturating_sub(start)));
    }
}
