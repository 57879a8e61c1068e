//! Human-friendly terminal output using `console`.

use std::path::Path;

use console::{Term, measure_text_width, pad_str, Alignment};
use tracing::{debug, instrument, trace};

use crate::catalog::{EffectInfo, OptionUse};
use crate::client::PanelEvent;
use crate::color::Rgb;
use crate::error::WledError;
use crate::theme::PanelTheme;

use super::{
    ConfigReport, LiveReport, Output, PaletteReport, SegmentReport, StatusReport,
};

/// Styled terminal output implementation for human users.
pub struct HumanOutput {
    out: Term,
    err: Term,
    theme: PanelTheme,
}

impl HumanOutput {
    #[instrument]
    pub fn new(color: bool) -> Self {
        debug!("Creating HumanOutput");
        if !color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: PanelTheme::default(),
        }
    }

    fn line(&self, text: &str) {
        // A closed stdout is not worth reporting.
        let _ = self.out.write_line(text);
    }

    fn field(&self, name: &str, value: &str) {
        self.line(&format!(
            "  {}{}",
            self.theme.label.apply_to(format!("{name:<12}")),
            self.theme.value.apply_to(value)
        ));
    }

    fn rule(&self, title: &str) {
        let width = usize::from(self.out.size().1).clamp(20, 100);
        let fill = width.saturating_sub(measure_text_width(title) + 4);
        self.line(&format!(
            "{} {} {}",
            self.theme.accent.apply_to("──"),
            self.theme.header.apply_to(title),
            self.theme.accent.apply_to("─".repeat(fill))
        ));
    }

    fn swatches(colors: &[Option<Rgb>]) -> String {
        colors
            .iter()
            .map(|color| match color {
                Some(rgb) => format!("{} {}", PanelTheme::swatch(*rgb), rgb),
                None => "--".to_string(),
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn strip(colors: &[Rgb]) -> String {
        colors.iter().map(|c| PanelTheme::swatch(*c)).collect()
    }

    fn on_off(&self, on: bool) -> String {
        if on {
            self.theme.success.apply_to("on").to_string()
        } else {
            self.theme.muted.apply_to("off").to_string()
        }
    }

    fn segment_row(&self, segment: &SegmentReport) -> String {
        let effect = segment
            .effect_name
            .clone()
            .unwrap_or_else(|| format!("#{}", segment.effect));
        let palette = segment
            .palette_name
            .clone()
            .unwrap_or_else(|| format!("#{}", segment.palette));
        format!(
            "  {} {:>4}-{:<4} {:<4} {} {}  {}",
            self.theme.segment_id.apply_to(format!("[{:>2}]", segment.id)),
            segment.start,
            segment.stop,
            self.on_off(segment.on),
            pad_str(&effect, 22, Alignment::Left, Some("…")),
            pad_str(&palette, 24, Alignment::Left, Some("…")),
            Self::swatches(&segment.colors)
        )
    }
}

impl Output for HumanOutput {
    fn success(&self, message: &str) {
        self.line(&format!("{} {message}", self.theme.success.apply_to("[OK]")));
    }

    #[instrument(skip(self))]
    fn error(&self, error: &WledError) {
        debug!(
            error = %error,
            recoverable = error.is_user_recoverable(),
            "Outputting error"
        );
        let _ = self.err.write_line(&format!(
            "{} {}",
            self.theme.error.apply_to("[ERR]"),
            self.theme.value.apply_to(error)
        ));
        if let Some(suggestion) = error.suggestion() {
            trace!(suggestion, "Adding suggestion");
            let _ = self.err.write_line(&format!(
                "      {}",
                self.theme.muted.apply_to(suggestion)
            ));
        }
    }

    fn warning(&self, message: &str) {
        let _ = self.err.write_line(&format!(
            "{} {message}",
            self.theme.warning.apply_to("[WARN]")
        ));
    }

    fn info(&self, message: &str) {
        self.line(&format!("{} {message}", self.theme.accent.apply_to("[INFO]")));
    }

    #[instrument(skip_all, fields(name = %report.name))]
    fn device_status(&self, report: &StatusReport) {
        debug!("Outputting device status");
        let title = if report.name.is_empty() { "WLED" } else { &report.name };
        self.rule(title);
        self.field("URL", &report.url);
        self.field("Firmware", &report.version);
        self.field("Power", &self.on_off(report.on));
        self.field("Brightness", &report.brightness.to_string());
        self.field("LEDs", &report.led_count.to_string());
        if report.power_ma > 0 {
            self.field("Current", &format!("{} mA", report.power_ma));
        }
        self.field(
            "Catalog",
            &format!("{} effects, {} palettes", report.effect_count, report.palette_count),
        );
        self.line("");
        self.segment_list(&report.segments);
    }

    fn power_set(&self, on: bool) {
        self.success(&format!("Power {}", if on { "on" } else { "off" }));
    }

    fn brightness_set(&self, level: u8) {
        self.success(&format!("Brightness set to {level}"));
    }

    #[instrument(skip_all, fields(count = segments.len()))]
    fn segment_list(&self, segments: &[SegmentReport]) {
        if segments.is_empty() {
            self.warning("Device has no segments");
            return;
        }
        self.rule("Segments");
        for segment in segments {
            self.line(&self.segment_row(segment));
        }
    }

    fn segment_detail(&self, segment: &SegmentReport) {
        self.rule(&format!("Segment {}", segment.id));
        self.field(
            "Range",
            &format!("{}..{} ({} LEDs)", segment.start, segment.stop, segment.len),
        );
        self.field("Active", &self.on_off(segment.on));
        self.field("Brightness", &segment.brightness.to_string());
        self.field(
            "Effect",
            &format!(
                "{} (#{})",
                segment.effect_name.as_deref().unwrap_or("unknown"),
                segment.effect
            ),
        );

        let controls = segment.controls.as_ref();
        let speed = controls.and_then(|c| c.speed_label()).unwrap_or("Speed");
        let intensity = controls.and_then(|c| c.intensity_label()).unwrap_or("Intensity");
        self.field(speed, &segment.speed.to_string());
        self.field(intensity, &segment.intensity.to_string());
        self.field(
            "Palette",
            &format!(
                "{} (#{})",
                segment.palette_name.as_deref().unwrap_or("unknown"),
                segment.palette
            ),
        );
        self.field("Colors", &Self::swatches(&segment.colors));
        if let Some(controls) = controls {
            for color in &controls.colors {
                let current = color
                    .current_color
                    .map_or_else(|| "unset".to_string(), |c| c.to_string());
                self.field(color.label, &current);
            }
        }
        self.field(
            "Layout",
            &format!(
                "group {} / space {}{}{}",
                segment.grouping,
                segment.spacing,
                if segment.mirror { ", mirrored" } else { "" },
                if segment.reverse { ", reversed" } else { "" }
            ),
        );
    }

    fn segment_added(&self, id: u8) {
        self.success(&format!("Segment {id} added"));
    }

    fn segment_deleted(&self, id: u8) {
        self.success(&format!("Segment {id} deleted"));
    }

    fn event(&self, event: &PanelEvent) {
        let text = match event {
            PanelEvent::ColorPicked { segment, slot, color } => format!(
                "Segment {segment}: {} color {}",
                slot.generic_label(),
                color.map_or_else(|| "cleared".to_string(), |c| c.to_string())
            ),
            PanelEvent::EffectSelected { segment, effect } => {
                format!("Segment {segment}: effect #{effect}")
            }
            PanelEvent::PaletteSelected { segment, palette } => {
                format!("Segment {segment}: palette #{palette}")
            }
        };
        self.line(&format!("  {}", self.theme.muted.apply_to(text)));
    }

    #[instrument(skip_all, fields(segment = segment, count = palettes.len()))]
    fn palette_list(&self, segment: u8, palettes: &[PaletteReport]) {
        debug!("Outputting palette list");
        let mut current_group = None;
        for palette in palettes {
            if current_group != Some(palette.group) {
                current_group = Some(palette.group);
                let title = if palette.customizable {
                    format!("{} (segment {segment}, follows manual colors)", palette.group_name)
                } else {
                    format!("{} (segment {segment})", palette.group_name)
                };
                self.rule(&title);
            }
            let marker = if palette.selected {
                self.theme.selected.apply_to("*").to_string()
            } else {
                " ".to_string()
            };
            self.line(&format!(
                "{marker} {} {} {}",
                self.theme.segment_id.apply_to(format!("{:>3}", palette.id)),
                pad_str(&palette.name, 32, Alignment::Left, Some("…")),
                Self::strip(&palette.colors)
            ));
        }
    }

    #[instrument(skip_all, fields(count = effects.len()))]
    fn effect_list(&self, effects: &[&'static EffectInfo]) {
        if effects.is_empty() {
            self.warning("No matching effects");
            return;
        }
        self.rule("Effects");
        for effect in effects {
            let controls: Vec<&str> = [
                effect.speed.label_or("speed"),
                effect.intensity.label_or("intensity"),
                (effect.color_count() > 0).then_some("colors"),
                matches!(effect.palette, OptionUse::Unused).then_some("no palette"),
            ]
            .into_iter()
            .flatten()
            .collect();
            self.line(&format!(
                "  {} {} {}",
                self.theme.segment_id.apply_to(format!("{:>3}", effect.wled_index)),
                pad_str(effect.proposed_name, 28, Alignment::Left, Some("…")),
                self.theme.muted.apply_to(controls.join(", "))
            ));
        }
    }

    fn live_frame(&self, index: u64, colors: &[Rgb]) {
        self.line(&format!(
            "{} {}",
            self.theme.muted.apply_to(format!("{index:>5}")),
            Self::strip(colors)
        ));
    }

    fn live_summary(&self, report: &LiveReport) {
        let mut message = format!(
            "Captured {} frames ({} LEDs, {} rows kept)",
            report.frames, report.width, report.rows
        );
        if let Some(path) = &report.saved_to {
            message.push_str(&format!(", saved to {path}"));
        }
        self.success(&message);
    }

    fn config_show(&self, report: &ConfigReport) {
        self.rule("Configuration");
        let exists = if report.exists { "" } else { " (not found, using defaults)" };
        self.field("File", &format!("{}{exists}", report.path));
        self.field(
            "Device URL",
            report.config.device.url.as_deref().unwrap_or("(not set)"),
        );
        self.field("Staleness", &format!("{} ms", report.config.sync.staleness_ms));
        self.field("Live poll", &format!("{} ms", report.config.live.interval_ms));
        self.field("History", &format!("{} rows", report.config.live.history_lines));
    }

    fn config_created(&self, path: &Path) {
        self.success(&format!("Wrote {}", path.display()));
    }

    #[instrument(skip(self))]
    fn version_info(&self, version: &str, git_sha: Option<&str>, build_time: Option<&str>) {
        self.rule("wled");
        self.field("Version", version);
        if let Some(sha) = git_sha {
            let dirty = matches!(option_env!("VERGEN_GIT_DIRTY"), Some("true"));
            let sha = if dirty { format!("{sha} (dirty)") } else { sha.to_string() };
            self.field("Git SHA", &sha);
        }
        if let Some(time) = build_time {
            self.field("Built", time);
        }
        if let Some(rustc) = option_env!("VERGEN_RUSTC_SEMVER") {
            self.field("Rust", rustc);
        }
        if let Some(target) = option_env!("VERGEN_CARGO_TARGET_TRIPLE") {
            self.field("Target", target);
        }
    }
}
