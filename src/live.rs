//! Live preview feed.
//!
//! Polls `/json/live` on its own timer, independent of the state request
//! slot, and keeps a rolling history of frames (newest first) that can be
//! rendered as an image.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use image::RgbImage;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use crate::color::Rgb;
use crate::device::{LiveFrame, PATH_LIVE, Transport};
use crate::error::{Result, WledError};
use crate::image_ops;
use crate::sync::Synchronizer;

/// Delay between live polls.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(40);
/// Rows kept in the rolling history.
pub const DEFAULT_HISTORY_LINES: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveConfig {
    pub interval: Duration,
    pub history_lines: usize,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            history_lines: DEFAULT_HISTORY_LINES,
        }
    }
}

/// Capped frame history, newest row first.
///
/// All rows share one width; a frame of a different width starts a new
/// history.
#[derive(Debug, Clone, Default)]
pub struct LiveHistory {
    rows: VecDeque<Vec<Rgb>>,
    capacity: usize,
    width: usize,
}

impl LiveHistory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            rows: VecDeque::with_capacity(capacity),
            capacity,
            width: 0,
        }
    }

    pub fn push(&mut self, row: Vec<Rgb>) {
        if row.len() != self.width {
            if !self.rows.is_empty() {
                debug!(from = self.width, to = row.len(), "Live width changed, clearing history");
            }
            self.rows.clear();
            self.width = row.len();
        }
        self.rows.push_front(row);
        self.rows.truncate(self.capacity);
    }

    /// Change the row limit, keeping the newest rows.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.rows.truncate(capacity);
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn newest(&self) -> Option<&[Rgb]> {
        self.rows.front().map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.width = 0;
    }
}

#[derive(Debug, Default)]
struct LiveState {
    last_frame: Option<LiveFrame>,
    history: LiveHistory,
}

/// Shared between the preview handle and its poll task.
struct Feed {
    state: Mutex<LiveState>,
    frames: watch::Sender<u64>,
}

impl Feed {
    fn lock(&self) -> MutexGuard<'_, LiveState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, frame: LiveFrame) {
        let row = frame.colors();
        {
            let mut state = self.lock();
            state.history.push(row);
            state.last_frame = Some(frame);
        }
        self.frames.send_modify(|count| *count += 1);
    }
}

/// Live LED preview for one device.
pub struct LivePreview<T> {
    sync: Arc<Synchronizer<T>>,
    interval: Duration,
    feed: Arc<Feed>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Transport> LivePreview<T> {
    #[must_use]
    pub fn new(sync: Arc<Synchronizer<T>>, config: LiveConfig) -> Self {
        let (frames, _) = watch::channel(0);
        Self {
            sync,
            interval: config.interval,
            feed: Arc::new(Feed {
                state: Mutex::new(LiveState {
                    last_frame: None,
                    history: LiveHistory::new(config.history_lines),
                }),
                frames,
            }),
            task: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Start or stop polling.
    ///
    /// Enabling while a poll chain is running does nothing. Enabling after
    /// the chain stopped on an error starts a new one. Disabling aborts any
    /// pending poll.
    pub fn set_enabled(&self, enabled: bool) {
        let mut task = self.task.lock().unwrap_or_else(PoisonError::into_inner);
        if enabled {
            if task.as_ref().is_some_and(|handle| !handle.is_finished()) {
                return;
            }
            debug!(interval_ms = self.interval.as_millis(), "Starting live preview");
            *task = Some(tokio::spawn(poll_loop(
                Arc::clone(&self.sync),
                Arc::clone(&self.feed),
                self.interval,
            )));
        } else if let Some(handle) = task.take() {
            debug!("Stopping live preview");
            handle.abort();
        }
    }

    /// Whether a poll chain is currently scheduled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.task
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Frame counter; changes on every received frame.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.feed.frames.subscribe()
    }

    #[must_use]
    pub fn frames_received(&self) -> u64 {
        *self.feed.frames.borrow()
    }

    /// Wait until at least `count` frames have been received in total.
    ///
    /// # Errors
    ///
    /// Returns an error if the feed is dropped first.
    pub async fn wait_for_frames(&self, count: u64) -> Result<()> {
        let mut frames = self.subscribe();
        frames
            .wait_for(|received| *received >= count)
            .await
            .map_err(|_| WledError::Other("live preview closed".to_string()))?;
        Ok(())
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<LiveFrame> {
        self.feed.lock().last_frame.clone()
    }

    #[must_use]
    pub fn history(&self) -> LiveHistory {
        self.feed.lock().history.clone()
    }

    #[must_use]
    pub fn history_lines(&self) -> usize {
        self.feed.lock().history.capacity()
    }

    pub fn set_history_lines(&self, lines: usize) {
        self.feed.lock().history.set_capacity(lines);
    }

    /// The newest frame as a one-pixel-high image.
    #[must_use]
    pub fn current_line_image(&self) -> Option<RgbImage> {
        let state = self.feed.lock();
        state
            .history
            .newest()
            .map(|row| image_ops::render_rows([row], row.len()))
    }

    /// The whole history, newest row at the top.
    #[must_use]
    pub fn history_image(&self) -> Option<RgbImage> {
        let state = self.feed.lock();
        let history = &state.history;
        if history.is_empty() {
            return None;
        }
        Some(image_ops::render_rows(history.rows(), history.width()))
    }

    /// PNG data URL of [`Self::current_line_image`].
    ///
    /// # Errors
    ///
    /// Returns an error if no frame has been received or encoding fails.
    pub fn current_line_data_url(&self) -> Result<String> {
        image_ops::png_data_url(&self.current_line_image().ok_or_else(no_frames)?)
    }

    /// PNG data URL of [`Self::history_image`].
    ///
    /// # Errors
    ///
    /// Returns an error if no frame has been received or encoding fails.
    pub fn history_data_url(&self) -> Result<String> {
        image_ops::png_data_url(&self.history_image().ok_or_else(no_frames)?)
    }

    /// Write the history image as a PNG, enlarged by `scale`.
    ///
    /// # Errors
    ///
    /// Returns an error if no frame has been received, the scaled image is
    /// too large or the file cannot be written.
    pub fn save_history(
        &self,
        path: &Path,
        scale: u32,
        filter: image_ops::ScaleFilter,
    ) -> Result<()> {
        let img = self.history_image().ok_or_else(no_frames)?;
        image_ops::save_png(&image_ops::scale(&img, scale, filter)?, path)?;
        debug!(path = %path.display(), "Saved live history");
        Ok(())
    }
}

impl<T> Drop for LivePreview<T> {
    fn drop(&mut self) {
        if let Some(handle) = self
            .task
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }
}

fn no_frames() -> WledError {
    WledError::InvalidArgument("no live frames received yet".to_string())
}

async fn poll_loop<T: Transport>(sync: Arc<Synchronizer<T>>, feed: Arc<Feed>, interval: Duration) {
    loop {
        tokio::time::sleep(interval).await;
        let frame = match sync.transport().get_json(PATH_LIVE).await {
            Ok(value) => serde_json::from_value::<LiveFrame>(value).map_err(WledError::from),
            Err(e) => Err(e),
        };
        match frame {
            Ok(frame) => {
                trace!(leds = frame.leds.len(), "Live frame");
                feed.record(frame);
            }
            Err(e) => {
                warn!(error = %e, "Live preview stopped");
                return;
            }
        }
    }
}
