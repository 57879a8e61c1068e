//! Output mode abstraction for robot and human output.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{EffectInfo, PaletteGroupId};
use crate::cli::Cli;
use crate::client::PanelEvent;
use crate::color::Rgb;
use crate::config::PanelConfig;
use crate::device::Transport;
use crate::error::WledError;
use crate::status::{DeviceStatus, EffectView, SegmentView};

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

// === Report Types ===

/// Whole-device summary.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub url: String,
    pub name: String,
    pub version: String,
    pub led_count: u16,
    pub on: bool,
    pub brightness: u8,
    /// Estimated current draw in milliamps.
    pub power_ma: u32,
    pub effect_count: usize,
    pub palette_count: usize,
    pub segments: Vec<SegmentReport>,
}

impl StatusReport {
    #[must_use]
    pub fn from_status<T: Transport>(url: &str, status: &DeviceStatus<T>) -> Self {
        let info = status.info();
        Self {
            url: url.to_string(),
            name: status.name().to_string(),
            version: info.map(|i| i.ver.clone()).unwrap_or_default(),
            led_count: status.led_count(),
            on: status.is_on(),
            brightness: status.brightness(),
            power_ma: info.map_or(0, |i| i.leds.pwr),
            effect_count: status.effect_names().len(),
            palette_count: status.palette_names().len(),
            segments: status.segments().iter().map(SegmentReport::from_view).collect(),
        }
    }
}

/// One segment, with names resolved.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentReport {
    pub id: u8,
    pub start: u16,
    pub stop: u16,
    pub len: u16,
    pub on: bool,
    pub brightness: u8,
    pub effect: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_name: Option<String>,
    pub speed: u8,
    pub intensity: u8,
    pub palette: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_name: Option<String>,
    pub colors: [Option<Rgb>; 3],
    pub grouping: u8,
    pub spacing: u8,
    pub mirror: bool,
    pub reverse: bool,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<EffectView>,
}

impl SegmentReport {
    #[must_use]
    pub fn from_view<T: Transport>(view: &SegmentView<T>) -> Self {
        Self {
            id: view.segment_id(),
            start: view.start_led_index(),
            stop: view.end_led_index(),
            len: view.led_count(),
            on: view.is_active(),
            brightness: view.brightness(),
            effect: view.effect_index(),
            effect_name: view.effect_name().map(str::to_string),
            speed: view.effect_speed(),
            intensity: view.effect_intensity(),
            palette: view.palette_index(),
            palette_name: view.selected_palette().map(|p| p.name.clone()),
            colors: view.manual_palette_colors().map(|slot| slot.0),
            grouping: view.group_index(),
            spacing: view.spacing(),
            mirror: view.is_mirrored(),
            reverse: view.is_reversed(),
            selected: view.is_selected(),
            controls: view.effect_info().cloned(),
        }
    }
}

/// One selectable palette for a segment.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteReport {
    pub group: PaletteGroupId,
    pub group_name: &'static str,
    pub customizable: bool,
    pub id: u8,
    pub name: String,
    pub colors: Vec<Rgb>,
    pub css: String,
    pub selected: bool,
}

impl PaletteReport {
    #[must_use]
    pub fn for_segment<T: Transport>(view: &SegmentView<T>) -> Vec<Self> {
        let selected = view.palette_index();
        view.palette_groups()
            .groups()
            .iter()
            .flat_map(|group| {
                group.palettes.iter().map(move |entry| Self {
                    group: group.id,
                    group_name: group.name,
                    customizable: group.customizable,
                    id: entry.id,
                    name: entry.name.clone(),
                    colors: entry.palette.colors(),
                    css: entry.css_gradient(),
                    selected: entry.id == selected,
                })
            })
            .collect()
    }
}

/// Outcome of a `live` capture.
#[derive(Debug, Clone, Serialize)]
pub struct LiveReport {
    pub captured_at: DateTime<Utc>,
    pub frames: u64,
    pub width: usize,
    pub rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
}

/// Resolved configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigReport {
    pub path: String,
    pub exists: bool,
    pub config: PanelConfig,
}

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    /// JSON output for AI agents and scripting.
    Robot(RobotFormat),
    /// Styled terminal output for human users.
    Human { color: bool },
}

impl OutputMode {
    /// Create OutputMode from CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else {
            Self::Human {
                color: !cli.no_color,
            }
        }
    }

    #[must_use]
    pub const fn is_robot(&self) -> bool {
        matches!(self, Self::Robot(_))
    }

    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human { color } => Box::new(HumanOutput::new(color)),
        }
    }
}

/// Trait for all output operations.
///
/// Commands call these methods without knowing the output mode.
pub trait Output {
    // Basic messages
    fn success(&self, message: &str);
    fn error(&self, error: &WledError);
    fn warning(&self, message: &str);
    fn info(&self, message: &str);

    // Device
    fn device_status(&self, report: &StatusReport);
    fn power_set(&self, on: bool);
    fn brightness_set(&self, level: u8);

    // Segments
    fn segment_list(&self, segments: &[SegmentReport]);
    fn segment_detail(&self, segment: &SegmentReport);
    fn segment_added(&self, id: u8);
    fn segment_deleted(&self, id: u8);
    fn event(&self, event: &PanelEvent);

    // Catalogs
    fn palette_list(&self, segment: u8, palettes: &[PaletteReport]);
    fn effect_list(&self, effects: &[&'static EffectInfo]);

    // Live preview
    fn live_frame(&self, index: u64, colors: &[Rgb]);
    fn live_summary(&self, report: &LiveReport);

    // Configuration
    fn config_show(&self, report: &ConfigReport);
    fn config_created(&self, path: &Path);

    // Metadata
    fn version_info(&self, version: &str, git_sha: Option<&str>, build_time: Option<&str>);
}
