//! Device state synchronizer.
//!
//! Owns the single cached [`DeviceSnapshot`] and serializes every state
//! request (reads of `/json`, writes to `/json/si`, gradient pages) through
//! one FIFO request slot, so at most one is outstanding at a time.
//!
//! Responses are merged shallowly: each top-level section present in a
//! response replaces the cached one; absent sections are kept. A failed
//! request leaves the cache exactly as it was.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard};
use tokio::time::Instant;
use tracing::{debug, trace, warn};

use crate::catalog::GradientTable;
use crate::color::Palette;
use crate::device::{
    DeviceSnapshot, GradientPage, GradientPoint, PATH_FULL, PATH_PALETTES_EX, PATH_STATE_INFO,
    Transport,
};
use crate::error::{Result, WledError};

/// Snapshots younger than this are served from cache.
pub const DEFAULT_STALENESS: Duration = Duration::from_millis(1000);

/// Upper bound on `/json/palx` pages walked in one fetch.
const MAX_GRADIENT_PAGES: u32 = 64;

/// The one-outstanding-request slot.
///
/// `tokio::sync::Mutex` queues waiters fairly, which gives FIFO ordering
/// between competing requests.
#[derive(Debug, Default)]
pub struct RequestSlot {
    lock: Mutex<()>,
}

impl RequestSlot {
    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().await
    }

    /// Whether a request currently holds the slot.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.lock.try_lock().is_err()
    }
}

#[derive(Debug, Default)]
struct Cache {
    snapshot: Arc<DeviceSnapshot>,
    last_request_sent: Option<Instant>,
    last_response_received: Option<Instant>,
}

/// Cached, request-serializing view of one device.
pub struct Synchronizer<T> {
    transport: T,
    slot: RequestSlot,
    cache: RwLock<Cache>,
    /// Completed full reads; lets a queued refresh reuse a newer result.
    full_reads: AtomicU64,
    staleness: Duration,
}

impl<T: Transport> Synchronizer<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_staleness(transport, DEFAULT_STALENESS)
    }

    #[must_use]
    pub fn with_staleness(transport: T, staleness: Duration) -> Self {
        Self {
            transport,
            slot: RequestSlot::default(),
            cache: RwLock::new(Cache::default()),
            full_reads: AtomicU64::new(0),
            staleness,
        }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub const fn staleness(&self) -> Duration {
        self.staleness
    }

    /// Current cache contents, without I/O.
    #[must_use]
    pub fn snapshot(&self) -> Arc<DeviceSnapshot> {
        Arc::clone(&self.read_cache().snapshot)
    }

    #[must_use]
    pub fn last_request_sent(&self) -> Option<Instant> {
        self.read_cache().last_request_sent
    }

    #[must_use]
    pub fn last_response_received(&self) -> Option<Instant> {
        self.read_cache().last_response_received
    }

    /// Whether a state request is outstanding.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.slot.is_busy()
    }

    /// Full read of `/json`.
    ///
    /// If another full read completes while this call waits for the slot,
    /// its result is returned instead of issuing a second read.
    pub async fn refresh(&self) -> Result<Arc<DeviceSnapshot>> {
        let seen = self.full_reads.load(Ordering::SeqCst);
        let _slot = self.slot.acquire().await;
        if self.full_reads.load(Ordering::SeqCst) > seen {
            trace!("Reusing full read that completed while queued");
            return Ok(self.snapshot());
        }
        self.full_read().await
    }

    /// Cached snapshot if recent and complete, otherwise a fresh read.
    ///
    /// Waits for any in-flight request first. A successful result always
    /// has all four sections.
    ///
    /// # Errors
    ///
    /// Returns the read error if the device cannot be reached, and
    /// [`WledError::IncompleteSnapshot`] naming the first missing section if
    /// the fresh read still lacks one.
    pub async fn ensure_fresh(&self) -> Result<Arc<DeviceSnapshot>> {
        let _slot = self.slot.acquire().await;
        {
            let cache = self.read_cache();
            let recent = cache
                .last_request_sent
                .is_some_and(|sent| sent.elapsed() < self.staleness);
            if recent && cache.snapshot.is_complete() {
                return Ok(Arc::clone(&cache.snapshot));
            }
        }

        let snapshot = self.full_read().await?;
        match snapshot.missing_section() {
            Some(missing) => Err(WledError::IncompleteSnapshot { missing }),
            None => Ok(snapshot),
        }
    }

    /// `POST /json/si` with `body`; the response is merged into the cache.
    pub async fn post_state(&self, body: &Value) -> Result<Arc<DeviceSnapshot>> {
        let _slot = self.slot.acquire().await;
        self.mark_sent();
        let response = self.transport.post_json(PATH_STATE_INFO, body).await?;
        let update: DeviceSnapshot = serde_json::from_value(response)?;
        Ok(self.merge(update))
    }

    /// Walk `/json/palx` and collect every gradient described by stops.
    ///
    /// Each page takes the request slot separately so state requests can
    /// interleave. The result is not merged into the snapshot.
    pub async fn fetch_gradients(&self) -> Result<GradientTable> {
        let mut table = GradientTable::new();
        let mut page = 0;
        let mut last_page = 0;

        while page <= last_page && page < MAX_GRADIENT_PAGES {
            let path = format!("{PATH_PALETTES_EX}?page={page}");
            let value = {
                let _slot = self.slot.acquire().await;
                debug!(%path, "Fetching gradient page");
                self.transport.get_json(&path).await?
            };
            let decoded: GradientPage = serde_json::from_value(value)?;
            last_page = decoded.m;
            collect_gradients(&mut table, decoded);
            page += 1;
        }

        debug!(count = table.len(), pages = page, "Fetched gradient palettes");
        Ok(table)
    }

    // Caller holds the slot.
    async fn full_read(&self) -> Result<Arc<DeviceSnapshot>> {
        self.mark_sent();
        debug!(base = self.transport.base_url(), "Reading full device state");
        let response = self.transport.get_json(PATH_FULL).await?;
        let update: DeviceSnapshot = serde_json::from_value(response)?;
        let snapshot = self.merge(update);
        self.full_reads.fetch_add(1, Ordering::SeqCst);
        Ok(snapshot)
    }

    fn mark_sent(&self) {
        self.write_cache().last_request_sent = Some(Instant::now());
    }

    fn merge(&self, update: DeviceSnapshot) -> Arc<DeviceSnapshot> {
        let mut cache = self.write_cache();
        let mut next = DeviceSnapshot::clone(&cache.snapshot);
        trace!(
            state = update.state.is_some(),
            info = update.info.is_some(),
            effects = update.effects.is_some(),
            palettes = update.palettes.is_some(),
            "Merging response"
        );
        next.merge(update);
        cache.snapshot = Arc::new(next);
        cache.last_response_received = Some(Instant::now());
        Arc::clone(&cache.snapshot)
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, Cache> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, Cache> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn collect_gradients(table: &mut GradientTable, page: GradientPage) {
    for (key, points) in page.p {
        let Ok(id) = key.parse::<u8>() else {
            warn!(%key, "Ignoring gradient with non-numeric id");
            continue;
        };
        let mut bytes = Vec::with_capacity(points.len() * 4);
        let mut symbolic = false;
        for point in points {
            match point {
                GradientPoint::Stop(stop) => bytes.extend(stop.into_iter().take(4)),
                GradientPoint::Symbolic(_) => symbolic = true,
            }
        }
        if symbolic {
            trace!(id, "Skipping color-dependent gradient");
            continue;
        }
        table.insert(id, Palette::from_bytes(&bytes));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::mock::{MockConfig, MockTransport, Request, sample_document};
    use serde_json::json;

    #[tokio::test]
    async fn test_refresh_populates_cache() {
        let mock = MockTransport::with_segments(2);
        let sync = Synchronizer::new(mock.clone());
        assert!(!sync.snapshot().is_complete());

        let snapshot = sync.refresh().await.unwrap();
        assert!(snapshot.is_complete());
        assert_eq!(snapshot.segments().len(), 2);
        assert!(sync.last_response_received().is_some());
        mock.assert_requests(&[Request::get(PATH_FULL)]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ensure_fresh_uses_cache_within_staleness() {
        let mock = MockTransport::with_segments(1);
        let sync = Synchronizer::new(mock.clone());

        sync.ensure_fresh().await.unwrap();
        tokio::time::advance(Duration::from_millis(500)).await;
        sync.ensure_fresh().await.unwrap();
        assert_eq!(mock.request_count(), 1);

        tokio::time::advance(Duration::from_millis(600)).await;
        sync.ensure_fresh().await.unwrap();
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_ensure_fresh_refreshes_incomplete_snapshot() {
        let mock = MockTransport::with_segments(1);
        let sync = Synchronizer::new(mock.clone());

        // A write response carries only state and info.
        sync.post_state(&json!({"on": true})).await.unwrap();
        assert!(!sync.snapshot().is_complete());

        let snapshot = sync.ensure_fresh().await.unwrap();
        assert!(snapshot.is_complete());
        assert_eq!(mock.requests_to(PATH_FULL).len(), 1);
    }

    #[tokio::test]
    async fn test_ensure_fresh_reports_missing_sections() {
        let mock = MockTransport::new(json!({"state": {"on": true}}));
        let sync = Synchronizer::new(mock);
        let err = sync.ensure_fresh().await.unwrap_err();
        assert!(matches!(err, WledError::IncompleteSnapshot { missing: "info" }));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_cache() {
        let mock = MockTransport::with_segments(2);
        let sync = Synchronizer::new(mock.clone());
        let before = sync.refresh().await.unwrap();

        mock.inject_error(WledError::DeviceCommunication("offline".into()));
        assert!(sync.refresh().await.is_err());
        assert!(Arc::ptr_eq(&before, &sync.snapshot()));

        assert!(sync.refresh().await.is_ok());
    }

    #[tokio::test]
    async fn test_malformed_response_keeps_cache() {
        let mock = MockTransport::new(json!({"state": {"bri": "bright"}}));
        let sync = Synchronizer::new(mock);
        assert!(matches!(sync.refresh().await, Err(WledError::Json(_))));
        assert_eq!(*sync.snapshot(), DeviceSnapshot::default());
    }

    #[tokio::test]
    async fn test_queued_refresh_reuses_result() {
        let mock = MockTransport::with_segments(1);
        let sync = Arc::new(Synchronizer::new(mock.clone()));

        let gate = mock.hold().await;
        let first = tokio::spawn({
            let sync = Arc::clone(&sync);
            async move { sync.refresh().await }
        });
        mock.wait_for_requests(1).await;
        let second = tokio::spawn({
            let sync = Arc::clone(&sync);
            async move { sync.refresh().await }
        });
        tokio::task::yield_now().await;
        drop(gate);

        first.await.unwrap().unwrap();
        second.await.unwrap().unwrap();
        assert_eq!(mock.requests_to(PATH_FULL).len(), 1);
    }

    #[tokio::test]
    async fn test_requests_are_serialized() {
        let mock = MockTransport::with_segments(1);
        let sync = Arc::new(Synchronizer::new(mock.clone()));

        let gate = mock.hold().await;
        let write = tokio::spawn({
            let sync = Arc::clone(&sync);
            async move { sync.post_state(&json!({"bri": 10})).await }
        });
        mock.wait_for_requests(1).await;
        assert!(sync.is_busy());

        let read = tokio::spawn({
            let sync = Arc::clone(&sync);
            async move { sync.refresh().await }
        });
        tokio::task::yield_now().await;
        // The read is queued behind the write, not sent.
        assert_eq!(mock.request_count(), 1);

        drop(gate);
        write.await.unwrap().unwrap();
        let snapshot = read.await.unwrap().unwrap();
        assert_eq!(snapshot.state.as_ref().unwrap().bri, 10);
        assert_eq!(mock.request_count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_gradients_pages() {
        let config = MockConfig {
            gradient_pages: 3,
            ..MockConfig::default()
        };
        let mock = MockTransport::with_config(sample_document(1), config);
        let sync = Synchronizer::new(mock.clone());

        let table = sync.fetch_gradients().await.unwrap();
        assert_eq!(mock.requests_to("/json/palx?page=2").len(), 1);
        assert_eq!(mock.request_count(), 3);
        // Stop-based entries 13, 15, 17 kept; symbolic 14, 16, 18 skipped.
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(15).unwrap().len(), 2);
        assert!(table.get(14).is_none());
        assert!(!sync.snapshot().is_complete());
    }
}
