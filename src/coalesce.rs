//! Per-segment write coalescing.
//!
//! Every segment has a write lane. While a write is in flight on a lane,
//! further updates for that segment accumulate in a single pending patch
//! (later fields win). When the lane frees up, the pending patch is
//! completed from the cached segment and sent as one full definition.
//!
//! A burst of slider movements therefore produces at most one in-flight and
//! one queued write per segment, and the device always receives the latest
//! value of every touched field.
//!
//! The queued send runs on its own task, so a caller that stops waiting does
//! not strand the patches merged into its write.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, oneshot};
use tracing::{debug, trace, warn};

use crate::device::{SegmentPatch, StatePatch, Transport};
use crate::error::{Result, WledError};
use crate::sync::Synchronizer;

type PendingMap = Mutex<HashMap<u8, PendingWrite>>;

#[derive(Debug, Default)]
struct PendingWrite {
    /// Held for the duration of a send.
    lane: Arc<AsyncMutex<()>>,
    /// Patch waiting for the lane, if any.
    next: Option<SegmentPatch>,
}

/// Segment mutation coalescer.
pub struct Coalescer<T> {
    sync: Arc<Synchronizer<T>>,
    pending: Arc<PendingMap>,
}

impl<T: Transport> Coalescer<T> {
    #[must_use]
    pub fn new(sync: Arc<Synchronizer<T>>) -> Self {
        Self {
            sync,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Number of segments with a write in flight or queued.
    #[must_use]
    pub fn active_lanes(&self) -> usize {
        lock(&self.pending).len()
    }

    /// Queue `patch` for segment `id`.
    ///
    /// Returns as soon as the patch is merged into an already pending write.
    /// Otherwise waits for the segment's lane, sends the accumulated patch
    /// and returns the outcome of that send. The send goes ahead even if
    /// this future is dropped while waiting.
    pub async fn update_segment(&self, id: u8, patch: SegmentPatch) -> Result<()> {
        let lane = {
            let mut pending = lock(&self.pending);
            let entry = pending.entry(id).or_default();
            if let Some(next) = entry.next.as_mut() {
                next.merge(patch);
                trace!(id, "Merged into pending segment write");
                return Ok(());
            }
            entry.next = Some(patch);
            Arc::clone(&entry.lane)
        };

        let (tx, rx) = oneshot::channel();
        let sync = Arc::clone(&self.sync);
        let pending = Arc::clone(&self.pending);
        tokio::spawn(async move {
            let result = drain_lane(&sync, &pending, id, lane).await;
            if tx.send(result).is_err() {
                trace!(id, "Segment write finished after its caller left");
            }
        });

        rx.await.map_err(|_| {
            warn!(id, "Segment write task ended without a result");
            WledError::Other(format!("write to segment {id} was abandoned"))
        })?
    }
    /// Delete segment `id` by collapsing it to zero length.
    pub async fn delete_segment(&self, id: u8) -> Result<()> {
        self.update_segment(id, SegmentPatch::delete()).await
    }

    /// Create a segment with the next free id and return that id.
    pub async fn add_segment(&self, mut definition: SegmentPatch) -> Result<u8> {
        let snapshot = self.sync.ensure_fresh().await?;
        let id = match snapshot.segments().iter().map(|s| s.id).max() {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                WledError::InvalidArgument("no free segment id".to_string())
            })?,
            None => 0,
        };
        definition.id = Some(id);
        debug!(id, "Adding segment");

        let body = serde_json::to_value(StatePatch::segment(definition))?;
        self.sync.post_state(&body).await?;
        Ok(id)
    }

    /// Write global `on` / `bri` / `transition`.
    pub async fn update_state(&self, patch: StatePatch) -> Result<()> {
        let body = serde_json::to_value(patch)?;
        self.sync.post_state(&body).await?;
        Ok(())
    }

}

// Wait for the lane, then send whatever has accumulated for `id`.
async fn drain_lane<T: Transport>(
    sync: &Synchronizer<T>,
    pending: &PendingMap,
    id: u8,
    lane: Arc<AsyncMutex<()>>,
) -> Result<()> {
    let guard = Arc::clone(&lane).lock_owned().await;
    let patch = lock(pending)
        .get_mut(&id)
        .and_then(|entry| entry.next.take());

    let result = match patch {
        Some(patch) => send(sync, id, patch).await,
        None => Ok(()),
    };

    drop(guard);
    drop(lane);
    release(pending, id);
    result
}

async fn send<T: Transport>(sync: &Synchronizer<T>, id: u8, patch: SegmentPatch) -> Result<()> {
    let snapshot = sync.ensure_fresh().await?;
    let current = snapshot
        .segment(id)
        .ok_or_else(|| WledError::SegmentNotFound {
            id,
            count: snapshot.segments().len(),
        })?;

    let mut full = patch.completed_from(current);
    full.id = Some(id);
    debug!(id, "Sending segment write");
    let body = serde_json::to_value(StatePatch::segment(full))?;
    sync.post_state(&body).await?;
    Ok(())
}

// Drop the record once nothing is queued on or waiting for its lane.
fn release(pending: &PendingMap, id: u8) {
    let mut pending = lock(pending);
    let idle = pending
        .get(&id)
        .is_some_and(|entry| entry.next.is_none() && Arc::strong_count(&entry.lane) == 1);
    if idle {
        pending.remove(&id);
    }
}

fn lock(pending: &PendingMap) -> MutexGuard<'_, HashMap<u8, PendingWrite>> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::PATH_STATE_INFO;
    use crate::device::mock::MockTransport;
    use serde_json::json;

    fn coalescer(mock: &MockTransport) -> Arc<Coalescer<MockTransport>> {
        Arc::new(Coalescer::new(Arc::new(Synchronizer::new(mock.clone()))))
    }

    #[tokio::test]
    async fn test_single_update_sends_full_segment() {
        let mock = MockTransport::with_segments(2);
        let coalescer = coalescer(&mock);

        coalescer
            .update_segment(1, SegmentPatch::effect(42))
            .await
            .unwrap();

        let writes = mock.writes();
        assert_eq!(writes.len(), 1);
        let seg = &writes[0]["seg"];
        assert_eq!(writes[0]["v"], true);
        assert_eq!(seg["id"], 1);
        assert_eq!(seg["fx"], 42);
        assert_eq!(seg["start"], 30);
        assert_eq!(seg["stop"], 60);
        assert_eq!(seg["col"][0], json!([255, 160, 0]));
        assert!(seg.get("len").is_none());
        assert_eq!(coalescer.active_lanes(), 0);
    }

    #[tokio::test]
    async fn test_burst_collapses_to_latest_values() {
        let mock = MockTransport::with_segments(1);
        let coalescer = coalescer(&mock);
        coalescer.sync.refresh().await.unwrap();

        let gate = mock.hold().await;
        let first = tokio::spawn({
            let c = Arc::clone(&coalescer);
            let patch = SegmentPatch {
                sx: Some(1),
                ..SegmentPatch::default()
            };
            async move { c.update_segment(0, patch).await }
        });
        mock.wait_for_requests(2).await;

        let mut queued = Vec::new();
        for (sx, ix) in [(2, 10), (3, 20), (4, 30)] {
            let c = Arc::clone(&coalescer);
            let patch = SegmentPatch {
                sx: Some(sx),
                ix: Some(ix),
                ..SegmentPatch::default()
            };
            queued.push(tokio::spawn(async move { c.update_segment(0, patch).await }));
            tokio::task::yield_now().await;
        }
        // Only the first write is in flight while the device is held.
        assert_eq!(mock.writes().len(), 1);

        drop(gate);
        first.await.unwrap().unwrap();
        for task in queued {
            task.await.unwrap().unwrap();
        }

        let writes = mock.writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0]["seg"]["sx"], 1);
        assert_eq!(writes[1]["seg"]["sx"], 4);
        assert_eq!(writes[1]["seg"]["ix"], 30);
        assert_eq!(coalescer.active_lanes(), 0);
    }

    #[tokio::test]
    async fn test_abandoned_caller_still_delivers() {
        let mock = MockTransport::with_segments(1);
        let coalescer = coalescer(&mock);
        coalescer.sync.refresh().await.unwrap();

        let gate = mock.hold().await;
        let first = tokio::spawn({
            let c = Arc::clone(&coalescer);
            async move { c.update_segment(0, SegmentPatch::effect(1)).await }
        });
        mock.wait_for_requests(2).await;

        let queued = tokio::spawn({
            let c = Arc::clone(&coalescer);
            async move { c.update_segment(0, SegmentPatch::effect(2)).await }
        });
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        queued.abort();
        assert!(queued.await.unwrap_err().is_cancelled());

        drop(gate);
        first.await.unwrap().unwrap();
        mock.wait_for_requests(3).await;

        coalescer
            .update_segment(0, SegmentPatch::effect(3))
            .await
            .unwrap();
        let effects: Vec<_> = mock.writes().iter().map(|w| w["seg"]["fx"].clone()).collect();
        assert_eq!(effects, vec![json!(1), json!(2), json!(3)]);
        assert_eq!(coalescer.active_lanes(), 0);
    }

    #[tokio::test]
    async fn test_delete_sends_zero_stop() {
        let mock = MockTransport::with_segments(2);
        let coalescer = coalescer(&mock);
        coalescer.delete_segment(0).await.unwrap();

        let writes = mock.writes();
        assert_eq!(writes[0]["seg"]["id"], 0);
        assert_eq!(writes[0]["seg"]["stop"], 0);
    }

    #[tokio::test]
    async fn test_unknown_segment_is_rejected() {
        let mock = MockTransport::with_segments(1);
        let coalescer = coalescer(&mock);
        let err = coalescer
            .update_segment(7, SegmentPatch::palette(3))
            .await
            .unwrap_err();
        assert!(matches!(err, WledError::SegmentNotFound { id: 7, count: 1 }));
        assert!(mock.writes().is_empty());
        assert_eq!(coalescer.active_lanes(), 0);
    }

    #[tokio::test]
    async fn test_write_failure_reaches_sender() {
        let mock = MockTransport::with_segments(1);
        let coalescer = coalescer(&mock);
        coalescer.sync.refresh().await.unwrap();

        mock.inject_error(WledError::DeviceCommunication("dropped".into()));
        assert!(coalescer.update_segment(0, SegmentPatch::effect(3)).await.is_err());
        assert!(coalescer.update_segment(0, SegmentPatch::effect(4)).await.is_ok());
        assert_eq!(mock.requests_to(PATH_STATE_INFO).len(), 2);
    }

    #[tokio::test]
    async fn test_add_segment_uses_next_id() {
        let mock = MockTransport::with_segments(3);
        let coalescer = coalescer(&mock);

        let definition = SegmentPatch {
            start: Some(10),
            stop: Some(20),
            ..SegmentPatch::default()
        };
        let id = coalescer.add_segment(definition).await.unwrap();
        assert_eq!(id, 3);
        assert_eq!(mock.writes()[0]["seg"]["id"], 3);
    }

    #[tokio::test]
    async fn test_add_segment_on_empty_device() {
        let mock = MockTransport::with_segments(0);
        let coalescer = coalescer(&mock);
        let id = coalescer.add_segment(SegmentPatch::default()).await.unwrap();
        assert_eq!(id, 0);
    }

    #[tokio::test]
    async fn test_update_state() {
        let mock = MockTransport::with_segments(1);
        let coalescer = coalescer(&mock);
        coalescer
            .update_state(StatePatch { on: Some(false), bri: Some(40), ..StatePatch::default() })
            .await
            .unwrap();
        assert_eq!(mock.writes(), vec![json!({"on": false, "bri": 40})]);
    }
}
