//! High-level client for one WLED device.

use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::catalog::{ColorSlot, GradientTable};
use crate::coalesce::Coalescer;
use crate::color::Rgb;
use crate::device::{DeviceSnapshot, SegmentPatch, StatePatch, Transport};
use crate::error::{Result, WledError};
use crate::live::{LiveConfig, LivePreview};
use crate::status::DeviceStatus;
use crate::sync::{DEFAULT_STALENESS, Synchronizer};

const EVENT_CAPACITY: usize = 64;

/// User-facing change notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PanelEvent {
    ColorPicked {
        segment: u8,
        slot: ColorSlot,
        color: Option<Rgb>,
    },
    EffectSelected {
        segment: u8,
        effect: u8,
    },
    PaletteSelected {
        segment: u8,
        palette: u8,
    },
}

/// Client for a single device.
///
/// Cheap to clone; clones share the cache, write lanes and event channel.
pub struct WledClient<T> {
    inner: Arc<ClientInner<T>>,
}

struct ClientInner<T> {
    sync: Arc<Synchronizer<T>>,
    writer: SegmentWriter<T>,
    gradients: RwLock<Arc<GradientTable>>,
    status: Mutex<Option<DeviceStatus<T>>>,
}

/// Write access handed to status views: the coalescer plus the event
/// channel. Holds no reference back to the client.
pub struct SegmentWriter<T> {
    coalescer: Arc<Coalescer<T>>,
    events: broadcast::Sender<PanelEvent>,
}

impl<T> Clone for SegmentWriter<T> {
    fn clone(&self) -> Self {
        Self {
            coalescer: Arc::clone(&self.coalescer),
            events: self.events.clone(),
        }
    }
}

impl<T: Transport> SegmentWriter<T> {
    pub async fn update_segment(&self, id: u8, patch: SegmentPatch) -> Result<()> {
        self.coalescer.update_segment(id, patch).await
    }

    pub async fn delete_segment(&self, id: u8) -> Result<()> {
        self.coalescer.delete_segment(id).await
    }

    pub fn emit(&self, event: PanelEvent) {
        debug!(?event, "Panel event");
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

impl<T> Clone for WledClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> WledClient<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_staleness(transport, DEFAULT_STALENESS)
    }

    #[must_use]
    pub fn with_staleness(transport: T, staleness: Duration) -> Self {
        let sync = Arc::new(Synchronizer::with_staleness(transport, staleness));
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(ClientInner {
                writer: SegmentWriter {
                    coalescer: Arc::new(Coalescer::new(Arc::clone(&sync))),
                    events,
                },
                sync,
                gradients: RwLock::new(Arc::new(GradientTable::new())),
                status: Mutex::new(None),
            }),
        }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        self.inner.sync.transport()
    }

    #[must_use]
    pub fn synchronizer(&self) -> &Arc<Synchronizer<T>> {
        &self.inner.sync
    }

    #[must_use]
    pub fn coalescer(&self) -> &Coalescer<T> {
        &self.inner.writer.coalescer
    }

    /// Cached snapshot, without I/O.
    #[must_use]
    pub fn snapshot(&self) -> Arc<DeviceSnapshot> {
        self.inner.sync.snapshot()
    }

    /// Force a full read and return the resulting status.
    pub async fn refresh(&self) -> Result<DeviceStatus<T>> {
        self.inner.sync.refresh().await?;
        self.current_status().ok_or_else(|| self.incomplete())
    }

    /// Status from cache when recent, otherwise after a full read.
    pub async fn ensure_fresh(&self) -> Result<DeviceStatus<T>> {
        self.inner.sync.ensure_fresh().await?;
        self.current_status().ok_or_else(|| self.incomplete())
    }

    /// Friendly view of the cached snapshot, `None` until it is complete.
    ///
    /// The same status object is returned until the snapshot or gradient
    /// table changes, so its memoized values are computed once.
    #[must_use]
    pub fn current_status(&self) -> Option<DeviceStatus<T>> {
        let snapshot = self.inner.sync.snapshot();
        if !snapshot.is_complete() {
            return None;
        }
        let gradients = self.gradients();

        let mut cached = self
            .inner
            .status
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(status) = cached.as_ref() {
            if status.is_built_from(&snapshot, &gradients) {
                return Some(status.clone());
            }
        }

        let status = DeviceStatus::new(self.inner.writer.clone(), snapshot, gradients);
        *cached = Some(status.clone());
        Some(status)
    }

    /// Fetch the device's gradient definitions for palette previews.
    pub async fn load_gradients(&self) -> Result<usize> {
        let table = self.inner.sync.fetch_gradients().await?;
        let count = table.len();
        *self
            .inner
            .gradients
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(table);
        info!(count, "Loaded gradient palettes");
        Ok(count)
    }

    #[must_use]
    pub fn gradients(&self) -> Arc<GradientTable> {
        Arc::clone(
            &self
                .inner
                .gradients
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PanelEvent> {
        self.inner.writer.events.subscribe()
    }

    pub fn emit(&self, event: PanelEvent) {
        self.inner.writer.emit(event);
    }

    pub async fn update_segment(&self, id: u8, patch: SegmentPatch) -> Result<()> {
        self.coalescer().update_segment(id, patch).await
    }

    pub async fn delete_segment(&self, id: u8) -> Result<()> {
        self.coalescer().delete_segment(id).await
    }

    pub async fn add_segment(&self, definition: SegmentPatch) -> Result<u8> {
        self.coalescer().add_segment(definition).await
    }

    pub async fn update_state(&self, patch: StatePatch) -> Result<()> {
        self.coalescer().update_state(patch).await
    }

    pub async fn set_power(&self, on: bool) -> Result<()> {
        self.update_state(StatePatch {
            on: Some(on),
            ..StatePatch::default()
        })
        .await
    }

    pub async fn set_brightness(&self, bri: u8) -> Result<()> {
        self.update_state(StatePatch {
            bri: Some(bri),
            ..StatePatch::default()
        })
        .await
    }

    /// Live preview feed sharing this client's transport.
    #[must_use]
    pub fn live_preview(&self, config: LiveConfig) -> LivePreview<T> {
        LivePreview::new(Arc::clone(&self.inner.sync), config)
    }

    fn incomplete(&self) -> WledError {
        WledError::IncompleteSnapshot {
            missing: self.snapshot().missing_section().unwrap_or("state"),
        }
    }
}
