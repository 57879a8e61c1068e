//! Transport layer for WLED controllers.
//!
//! This module provides a trait-based abstraction over the device's JSON
//! HTTP API, with a reqwest implementation for real hardware and a
//! recording mock for tests.

mod info;
pub mod mock;
mod real;

pub use info::{
    BuildOptions, DeviceInfo, DeviceSnapshot, GlobalState, GradientPage, GradientPoint, LedInfo,
    LiveFrame, Nightlight, RealtimeMode, Segment, SegmentPatch, StatePatch, UdpSync, WifiInfo,
};
pub use real::HttpTransport;

use std::future::Future;

use serde_json::Value;

use crate::error::Result;

/// Full state, info, effect and palette names.
pub const PATH_FULL: &str = "/json";
/// State write endpoint; answers with state and info.
pub const PATH_STATE_INFO: &str = "/json/si";
/// Currently displayed LED colors.
pub const PATH_LIVE: &str = "/json/live";
/// Paged gradient palette definitions.
pub const PATH_PALETTES_EX: &str = "/json/palx";

/// Core transport operations.
///
/// Implementations perform exactly one HTTP exchange per call and never
/// retry. Non-2xx responses and undecodable bodies are errors.
pub trait Transport: Send + Sync + 'static {
    /// Base URL of the device, for display.
    fn base_url(&self) -> &str;

    /// `GET path` and decode the JSON body.
    fn get_json(&self, path: &str) -> impl Future<Output = Result<Value>> + Send;

    /// `POST path` with a JSON body and decode the JSON response.
    fn post_json(&self, path: &str, body: &Value) -> impl Future<Output = Result<Value>> + Send;
}
