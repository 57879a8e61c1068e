//! WLED control panel library.
//!
//! Talks to WLED LED controllers over their JSON HTTP API: keeps a cached,
//! request-serialized view of the device, coalesces bursts of segment edits
//! into single writes, derives the palette choices that fit each effect, and
//! polls the live LED colors for previews. The `wled` CLI is built on it.
//!
//! # Modules
//!
//! - `device`: transport trait, wire types, HTTP and mock transports
//! - `sync`: cached snapshot and the one-request-at-a-time slot
//! - `coalesce`: per-segment write lanes
//! - `client` / `status`: the friendly client, views and events
//! - `catalog`: effect metadata, FastLED gradients and palette derivation
//! - `live`: live preview polling and history
//! - `config`, `logging`, `output`, `cli`: the CLI's ambient stack
#![forbid(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod client;
pub mod coalesce;
pub mod color;
pub mod config;
pub mod device;
pub mod error;
pub mod image_ops;
pub mod live;
pub mod logging;
pub mod output;
pub mod status;
pub mod sync;
pub mod theme;

pub use client::{PanelEvent, WledClient};
pub use error::{Result, WledError};
pub use status::{DeviceStatus, SegmentView};
