//! Robot mode JSON output implementation.

use std::path::Path;

use serde::Serialize;
use serde_json::json;
use tracing::{debug, instrument, trace, warn};

use crate::catalog::EffectInfo;
use crate::client::PanelEvent;
use crate::color::Rgb;
use crate::error::WledError;

use super::{
    ConfigReport, LiveReport, Output, PaletteReport, RobotFormat, SegmentReport, StatusReport,
};

/// JSON output implementation for AI agents and scripting.
///
/// Results go to stdout, errors to stderr. Streaming data (live frames,
/// events) is always one object per line.
pub struct RobotOutput {
    format: RobotFormat,
}

impl RobotOutput {
    #[instrument]
    pub fn new(format: RobotFormat) -> Self {
        debug!(?format, "Creating RobotOutput");
        Self { format }
    }

    fn render<T: Serialize + ?Sized>(&self, data: &T) -> Option<String> {
        let rendered = match self.format {
            RobotFormat::Json => serde_json::to_string_pretty(data),
            RobotFormat::JsonCompact => serde_json::to_string(data),
        };
        match rendered {
            Ok(json) => {
                trace!(json_len = json.len(), "JSON serialized");
                Some(json)
            }
            Err(e) => {
                warn!(error = %e, "Failed to serialize output");
                None
            }
        }
    }

    /// Output any serializable data as JSON to stdout.
    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        if let Some(json) = self.render(data) {
            println!("{json}");
        }
    }

    /// Output single-line JSON (for streaming).
    fn output_json_line<T: Serialize>(&self, data: &T) {
        match serde_json::to_string(data) {
            Ok(json) => println!("{json}"),
            Err(e) => warn!(error = %e, "Failed to serialize output line"),
        }
    }
}

impl Output for RobotOutput {
    fn success(&self, message: &str) {
        self.output_json(&json!({ "success": true, "message": message }));
    }

    #[instrument(skip(self))]
    fn error(&self, error: &WledError) {
        debug!(error = %error, "Robot: error");
        let body = json!({
            "error": true,
            "message": error.to_string(),
            "suggestion": error.suggestion(),
            "recoverable": error.is_user_recoverable(),
        });
        if let Some(json) = self.render(&body) {
            eprintln!("{json}");
        }
    }

    fn warning(&self, message: &str) {
        self.output_json(&json!({ "warning": true, "message": message }));
    }

    fn info(&self, message: &str) {
        self.output_json(&json!({ "info": true, "message": message }));
    }

    #[instrument(skip_all, fields(name = %report.name))]
    fn device_status(&self, report: &StatusReport) {
        debug!("Robot: device_status");
        self.output_json(report);
    }

    fn power_set(&self, on: bool) {
        self.output_json(&json!({ "success": true, "on": on }));
    }

    fn brightness_set(&self, level: u8) {
        self.output_json(&json!({ "success": true, "brightness": level }));
    }

    #[instrument(skip_all, fields(count = segments.len()))]
    fn segment_list(&self, segments: &[SegmentReport]) {
        debug!("Robot: segment_list");
        self.output_json(segments);
    }

    fn segment_detail(&self, segment: &SegmentReport) {
        self.output_json(segment);
    }

    fn segment_added(&self, id: u8) {
        self.output_json(&json!({ "success": true, "segment": id, "action": "added" }));
    }

    fn segment_deleted(&self, id: u8) {
        self.output_json(&json!({ "success": true, "segment": id, "action": "deleted" }));
    }

    fn event(&self, event: &PanelEvent) {
        self.output_json_line(event);
    }

    #[instrument(skip_all, fields(segment = segment, count = palettes.len()))]
    fn palette_list(&self, segment: u8, palettes: &[PaletteReport]) {
        debug!("Robot: palette_list");
        self.output_json(&json!({ "segment": segment, "palettes": palettes }));
    }

    #[instrument(skip_all, fields(count = effects.len()))]
    fn effect_list(&self, effects: &[&'static EffectInfo]) {
        debug!("Robot: effect_list");
        self.output_json(effects);
    }

    fn live_frame(&self, index: u64, colors: &[Rgb]) {
        let leds: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
        self.output_json_line(&json!({ "frame": index, "leds": leds }));
    }

    fn live_summary(&self, report: &LiveReport) {
        self.output_json(report);
    }

    fn config_show(&self, report: &ConfigReport) {
        self.output_json(report);
    }

    fn config_created(&self, path: &Path) {
        self.output_json(&json!({ "success": true, "path": path.display().to_string() }));
    }

    fn version_info(&self, version: &str, git_sha: Option<&str>, build_time: Option<&str>) {
        self.output_json(&json!({
            "version": version,
            "git_sha": git_sha,
            "build_time": build_time,
            "rustc": option_env!("VERGEN_RUSTC_SEMVER"),
            "target": option_env!("VERGEN_CARGO_TARGET_TRIPLE"),
        }));
    }
}
