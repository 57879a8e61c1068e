//! Mock transport for unit testing.
//!
//! [`MockTransport`] behaves like a small WLED device: it keeps a full
//! `/json` document, applies `/json/si` writes to it, serves live frames and
//! gradient pages, and records every request for later assertion.
//!
//! # Example
//!
//! ```rust,ignore
//! use wled::device::mock::{MockTransport, Request};
//!
//! let mock = MockTransport::with_segments(2);
//! let client = WledClient::new(mock.clone());
//! client.refresh().await?;
//!
//! mock.assert_requests(&[Request::get("/json")]);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde_json::{Map, Value, json};
use tokio::sync::{Mutex as AsyncMutex, Notify, OwnedMutexGuard};
use tracing::{debug, trace};

use super::{PATH_FULL, PATH_LIVE, PATH_PALETTES_EX, PATH_STATE_INFO, Transport};
use crate::error::{Result, WledError};

/// HTTP method of a recorded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Recorded request for assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl Request {
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::Get,
            path: path.to_string(),
            body: None,
        }
    }

    #[must_use]
    pub fn post(path: &str, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.to_string(),
            body: Some(body),
        }
    }
}

/// Configuration for mock behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Fail every request after this many have been answered.
    pub fail_after_requests: Option<usize>,
    /// Simulated response time.
    pub latency: Option<Duration>,
    /// Number of `/json/palx` pages to serve.
    pub gradient_pages: u32,
}

#[derive(Debug)]
struct DeviceModel {
    document: Value,
    live_frames: VecDeque<Value>,
}

/// Mock WLED device.
///
/// Cheap to clone; clones share the same device model and request log.
#[derive(Clone)]
pub struct MockTransport {
    inner: Arc<Inner>,
}

struct Inner {
    config: MockConfig,
    model: Mutex<DeviceModel>,
    log: Mutex<Vec<Request>>,
    injected: Mutex<VecDeque<WledError>>,
    answered: AtomicUsize,
    arrived: Notify,
    gate: Arc<AsyncMutex<()>>,
}

impl MockTransport {
    /// Create a mock serving `document` as its `/json` response.
    #[must_use]
    pub fn new(document: Value) -> Self {
        Self::with_config(document, MockConfig::default())
    }

    #[must_use]
    pub fn with_config(document: Value, config: MockConfig) -> Self {
        debug!(?config, "Creating mock transport");
        Self {
            inner: Arc::new(Inner {
                config,
                model: Mutex::new(DeviceModel {
                    document,
                    live_frames: VecDeque::new(),
                }),
                log: Mutex::new(Vec::new()),
                injected: Mutex::new(VecDeque::new()),
                answered: AtomicUsize::new(0),
                arrived: Notify::new(),
                gate: Arc::new(AsyncMutex::new(())),
            }),
        }
    }

    /// A 60-LED device split into `count` equal segments.
    #[must_use]
    pub fn with_segments(count: u8) -> Self {
        Self::new(sample_document(count))
    }

    // === Scripting ===

    /// Fail the next request with `error`. Repeated calls queue errors.
    pub fn inject_error(&self, error: WledError) {
        lock(&self.inner.injected).push_back(error);
    }

    /// Queue a `/json/live` frame. Without queued frames the last frame
    /// served is repeated (all black on first use).
    pub fn push_live_frame(&self, leds: &[&str]) {
        lock(&self.inner.model)
            .live_frames
            .push_back(json!({ "leds": leds, "n": 1 }));
    }

    /// Replace part of the device document, e.g. to simulate a change made
    /// by another client.
    pub fn set_section(&self, section: &str, value: Value) {
        if let Some(doc) = lock(&self.inner.model).document.as_object_mut() {
            doc.insert(section.to_string(), value);
        }
    }

    /// Current device document.
    #[must_use]
    pub fn document(&self) -> Value {
        lock(&self.inner.model).document.clone()
    }

    /// Block all responses until the returned guard is dropped. Requests
    /// are still recorded when they arrive.
    pub async fn hold(&self) -> OwnedMutexGuard<()> {
        self.inner.gate.clone().lock_owned().await
    }

    /// Wait until at least `count` requests have arrived.
    pub async fn wait_for_requests(&self, count: usize) {
        loop {
            let notified = self.inner.arrived.notified();
            if self.request_count() >= count {
                return;
            }
            notified.await;
        }
    }

    // === Assertions ===

    /// Get all recorded requests.
    #[must_use]
    pub fn requests(&self) -> Vec<Request> {
        lock(&self.inner.log).clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        lock(&self.inner.log).len()
    }

    /// Recorded requests to `path`.
    #[must_use]
    pub fn requests_to(&self, path: &str) -> Vec<Request> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    /// Bodies of every `/json/si` write, in order.
    #[must_use]
    pub fn writes(&self) -> Vec<Value> {
        self.requests_to(PATH_STATE_INFO)
            .into_iter()
            .filter_map(|r| r.body)
            .collect()
    }

    /// Assert the exact request sequence.
    ///
    /// # Panics
    ///
    /// Panics if the requests don't match.
    pub fn assert_requests(&self, expected: &[Request]) {
        let actual = self.requests();
        assert_eq!(
            actual, expected,
            "Request mismatch.\nExpected: {expected:#?}\nActual: {actual:#?}",
        );
    }

    /// Assert no requests were made.
    ///
    /// # Panics
    ///
    /// Panics if any request was recorded.
    pub fn assert_no_requests(&self) {
        let requests = self.requests();
        assert!(
            requests.is_empty(),
            "Expected no requests, but found: {requests:#?}",
        );
    }

    /// Clear the request log for fresh assertions.
    pub fn clear_requests(&self) {
        lock(&self.inner.log).clear();
    }

    // === Internal Helpers ===

    fn record(&self, request: Request) {
        trace!(?request, "Recording request");
        lock(&self.inner.log).push(request);
        self.inner.arrived.notify_waiters();
    }

    fn check_error(&self) -> Result<()> {
        if let Some(error) = lock(&self.inner.injected).pop_front() {
            return Err(error);
        }
        if let Some(limit) = self.inner.config.fail_after_requests {
            if self.inner.answered.load(Ordering::SeqCst) >= limit {
                return Err(WledError::DeviceCommunication(
                    "Mock failure after request limit".to_string(),
                ));
            }
        }
        Ok(())
    }

    async fn respond(&self, request: Request) -> Result<Value> {
        self.record(request.clone());
        {
            let _pass = self.inner.gate.lock().await;
        }
        if let Some(latency) = self.inner.config.latency {
            tokio::time::sleep(latency).await;
        }
        self.check_error()?;
        self.inner.answered.fetch_add(1, Ordering::SeqCst);

        let mut model = lock(&self.inner.model);
        match (request.method, request.path.as_str()) {
            (Method::Get, PATH_FULL) => Ok(model.document.clone()),
            (Method::Get, PATH_LIVE) => Ok(next_live_frame(&mut model)),
            (Method::Get, path) if path.starts_with(PATH_PALETTES_EX) => {
                Ok(gradient_page(path, self.inner.config.gradient_pages))
            }
            (Method::Post, PATH_STATE_INFO) => {
                apply_write(&mut model.document, request.body.as_ref());
                Ok(json!({
                    "state": model.document.get("state").cloned().unwrap_or(Value::Null),
                    "info": model.document.get("info").cloned().unwrap_or(Value::Null),
                }))
            }
            _ => Err(WledError::Status {
                status: 404,
                url: request.path.clone(),
            }),
        }
    }
}

impl Transport for MockTransport {
    fn base_url(&self) -> &str {
        "mock://wled"
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        self.respond(Request::get(path)).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        self.respond(Request::post(path, body.clone())).await
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn next_live_frame(model: &mut DeviceModel) -> Value {
    if model.live_frames.len() > 1 {
        if let Some(frame) = model.live_frames.pop_front() {
            return frame;
        }
    }
    model
        .live_frames
        .front()
        .cloned()
        .unwrap_or_else(|| json!({ "leds": vec!["000000"; 4], "n": 1 }))
}

fn gradient_page(path: &str, pages: u32) -> Value {
    let page: u32 = path
        .split_once("page=")
        .and_then(|(_, n)| n.parse().ok())
        .unwrap_or(0);
    let max = pages.saturating_sub(1);
    let mut entries = Map::new();
    if page < pages {
        let id = 13 + page * 2;
        entries.insert(id.to_string(), json!([[0, 255, 0, 0], [255, 0, 0, 255]]));
        entries.insert((id + 1).to_string(), json!(["c1", "c2"]));
    }
    json!({ "m": max, "p": entries })
}

// Apply a `/json/si` body the way the firmware does for the fields the
// panel writes.
fn apply_write(document: &mut Value, body: Option<&Value>) {
    let Some(body) = body.and_then(Value::as_object) else {
        return;
    };
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
        segments.retain(|s| s.get("id").and_then(Value::as_u64) != Some(id));
        return;
    }

    let position = segments
        .iter()
        .position(|s| s.get("id").and_then(Value::as_u64) == Some(id));
    let index = position.unwrap_or_else(|| {
        segments.push(json!({ "id": id }));
        segments.len() - 1
    });
    let target = &mut segments[index];
    if let Some(fields) = target.as_object_mut() {
        for (key, value) in patch {
            fields.insert(key.clone(), value.clone());
        }
        let start = fields.get("start").and_then(Value::as_u64).unwrap_or(0);
        let stop = fields.get("stop").and_then(Value::as_u64).unwrap_or(0);
        fields.insert("len".to_string(), json!(stop.saturating_sub(start)));
    }
}

/// A complete `/json` document for a 60-LED strip.
#[must_use]
pub fn sample_document(segment_count: u8) -> Value {
    let count = u16::from(segment_count.max(1));
    let span = 60 / count;
    let segments: Vec<Value> = (0..u16::from(segment_count))
        .map(|i| {
            json!({
                "id": i, "start": i * span, "stop": (i + 1) * span, "len": span,
                "fx": 0, "sx": 128, "ix": 128, "pal": 0, "grp": 1, "spc": 0,
                "bri": 255, "on": true, "mi": false, "rev": false, "sel": i == 0,
                "col": [[255, 160, 0], [0, 0, 0], [0, 0, 0]]
            })
        })
        .collect();

    json!({
        "state": {
            "on": true, "bri": 128, "transition": 7, "ps": -1, "pl": -1,
            "nl": { "on": false, "dur": 60, "fade": true, "mode": 1, "tbri": 0, "rem": -1 },
            "udpn": { "send": false, "recv": true },
            "lor": 0, "mainseg": 0, "seg": segments
        },
        "info": {
            "ver": "0.13.3", "vid": 2_208_222, "name": "WLED Mock",
            "leds": {
                "count": 60, "rgbw": false, "wv": false, "pwr": 0,
                "maxpwr": 850, "maxseg": 16, "seglock": false
            },
            "udpport": 21324, "live": false, "lm": "", "lip": "", "ws": -1,
            "fxcount": 118, "palcount": 54, "arch": "esp32", "core": "v3.3.6",
            "freeheap": 180_000, "uptime": 42, "opt": 131, "brand": "WLED", "product": "FOSS",
            "mac": "0123456789ab",
            "wifi": { "bssid": "00:11:22:33:44:55", "rssi": -60, "signal": 80, "channel": 6 }
        },
        "effects": ["Solid", "Blink", "Breathe", "Wipe"],
        "palettes": [
            "Default", "* Random Cycle", "* Color 1", "* Colors 1&2", "* Color Gradient",
            "* Colors Only", "Party", "Cloud", "Lava", "Ocean", "Forest", "Rainbow",
            "Rainbow Bands", "Sunset", "Rivendell", "Breeze"
        ]
    })
}
