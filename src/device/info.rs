//! Wire types for the WLED JSON API.
//!
//! Field names follow the firmware's short codes exactly. Every field has a
//! default so older or trimmed-down firmware builds still decode.

use serde::{Deserialize, Serialize};

use crate::color::{Rgb, SlotColor};

/// Cached view of `GET /json`.
///
/// Each section is optional because write responses and partial reads only
/// carry some of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<GlobalState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<DeviceInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palettes: Option<Vec<String>>,
}

impl DeviceSnapshot {
    /// Name of the first missing section, if any.
    #[must_use]
    pub fn missing_section(&self) -> Option<&'static str> {
        if self.state.is_none() {
            Some("state")
        } else if self.info.is_none() {
            Some("info")
        } else if self.effects.is_none() {
            Some("effects")
        } else if self.palettes.is_none() {
            Some("palettes")
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_section().is_none()
    }

    /// Shallow merge: every section present in `update` replaces ours.
    pub fn merge(&mut self, update: Self) {
        if let Some(state) = update.state {
            self.state = Some(state);
        }
        if let Some(info) = update.info {
            self.info = Some(info);
        }
        if let Some(effects) = update.effects {
            self.effects = Some(effects);
        }
        if let Some(palettes) = update.palettes {
            self.palettes = Some(palettes);
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        match &self.state {
            Some(state) => &state.seg,
            None => &[],
        }
    }

    #[must_use]
    pub fn segment(&self, id: u8) -> Option<&Segment> {
        self.segments().iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn palette_names(&self) -> &[String] {
        self.palettes.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn effect_names(&self) -> &[String] {
        self.effects.as_deref().unwrap_or_default()
    }
}

/// Global light state (`state`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalState {
    pub on: bool,
    pub bri: u8,
    /// Crossfade duration in units of 100 ms.
    pub transition: u16,
    /// Current preset, -1 when none.
    pub ps: i16,
    /// Current playlist, -1 when none.
    pub pl: i16,
    pub nl: Nightlight,
    pub udpn: UdpSync,
    pub lor: u8,
    pub mainseg: u8,
    pub seg: Vec<Segment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nightlight {
    pub on: bool,
    /// Duration in minutes.
    pub dur: u16,
    pub fade: bool,
    pub mode: u8,
    pub tbri: u8,
    /// Remaining seconds, -1 when inactive.
    pub rem: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UdpSync {
    pub send: bool,
    pub recv: bool,
}

/// A contiguous run of LEDs with its own effect, colors and palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    pub id: u8,
    pub start: u16,
    pub stop: u16,
    pub len: u16,
    pub fx: u8,
    pub sx: u8,
    pub ix: u8,
    pub pal: u8,
    pub grp: u8,
    pub spc: u8,
    pub bri: u8,
    pub on: bool,
    pub mi: bool,
    pub rev: bool,
    pub sel: bool,
    pub col: Vec<SlotColor>,
}

impl Segment {
    /// Manual color slot `index`, unset when the device sent fewer slots.
    #[must_use]
    pub fn color(&self, index: usize) -> SlotColor {
        self.col.get(index).copied().unwrap_or_default()
    }
}

/// Partial segment update; only `Some` fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SegmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub len: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fx: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sx: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ix: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pal: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grp: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spc: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bri: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col: Option<Vec<SlotColor>>,
}

impl SegmentPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fold `later` into `self`; fields set in `later` win.
    pub fn merge(&mut self, later: Self) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if later.$field.is_some() { self.$field = later.$field; })*
            };
        }
        take!(id, start, stop, len, fx, sx, ix, pal, grp, spc, bri, on, mi, rev, sel, col);
    }

    /// Fill every unset field from `current`, except the derived `len`.
    #[must_use]
    pub fn completed_from(self, current: &Segment) -> Self {
        Self {
            id: self.id.or(Some(current.id)),
            start: self.start.or(Some(current.start)),
            stop: self.stop.or(Some(current.stop)),
            len: self.len,
            fx: self.fx.or(Some(current.fx)),
            sx: self.sx.or(Some(current.sx)),
            ix: self.ix.or(Some(current.ix)),
            pal: self.pal.or(Some(current.pal)),
            grp: self.grp.or(Some(current.grp)),
            spc: self.spc.or(Some(current.spc)),
            bri: self.bri.or(Some(current.bri)),
            on: self.on.or(Some(current.on)),
            mi: self.mi.or(Some(current.mi)),
            rev: self.rev.or(Some(current.rev)),
            sel: self.sel.or(Some(current.sel)),
            col: self.col.or_else(|| Some(current.col.clone())),
        }
    }

    #[must_use]
    pub fn effect(fx: u8) -> Self {
        Self { fx: Some(fx), ..Self::default() }
    }

    #[must_use]
    pub fn palette(pal: u8) -> Self {
        Self { pal: Some(pal), ..Self::default() }
    }

    #[must_use]
    pub fn colors(colors: Vec<SlotColor>) -> Self {
        Self { col: Some(colors), ..Self::default() }
    }

    /// Zero-length segment, which the firmware treats as deletion.
    #[must_use]
    pub fn delete() -> Self {
        Self { stop: Some(0), ..Self::default() }
    }
}

/// Body of `POST /json/si`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bri: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seg: Option<SegmentPatch>,
    /// Ask the device to answer with its full state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<bool>,
}

impl StatePatch {
    /// Single-segment write that requests a verbose response.
    #[must_use]
    pub fn segment(seg: SegmentPatch) -> Self {
        Self {
            seg: Some(seg),
            v: Some(true),
            ..Self::default()
        }
    }
}

/// Device information (`info`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceInfo {
    pub ver: String,
    pub vid: u64,
    pub leds: LedInfo,
    #[serde(rename = "str")]
    pub sync_toggle_receive: bool,
    pub name: String,
    pub udpport: u16,
    pub live: bool,
    pub lm: String,
    pub lip: String,
    pub ws: i32,
    pub fxcount: u8,
    pub palcount: u16,
    pub wifi: WifiInfo,
    pub arch: String,
    pub core: String,
    pub freeheap: u64,
    pub uptime: u64,
    pub opt: u8,
    pub brand: String,
    pub product: String,
    pub mac: String,
}

impl DeviceInfo {
    #[must_use]
    pub const fn build_options(&self) -> BuildOptions {
        BuildOptions(self.opt)
    }

    /// Realtime source currently overriding effects, if any.
    #[must_use]
    pub fn realtime_mode(&self) -> RealtimeMode {
        if !self.live {
            return RealtimeMode::Inactive;
        }
        RealtimeMode::from_label(&self.lm)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedInfo {
    pub count: u16,
    pub rgbw: bool,
    pub wv: bool,
    /// Estimated current draw in milliamps.
    pub pwr: u32,
    pub maxpwr: u32,
    pub maxseg: u8,
    pub seglock: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WifiInfo {
    pub bssid: String,
    pub rssi: i32,
    pub signal: u8,
    pub channel: u8,
}

/// Compile-time feature bits reported in `info.opt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildOptions(pub u8);

impl BuildOptions {
    const DEBUG: u8 = 0x80;
    const DISABLE_ALEXA: u8 = 0x40;
    const DISABLE_BLYNK: u8 = 0x20;
    const DISABLE_CRONIXIE: u8 = 0x10;
    const DISABLE_FILESYSTEM: u8 = 0x08;
    const DISABLE_HUESYNC: u8 = 0x04;
    const ENABLE_ADALIGHT: u8 = 0x02;
    const DISABLE_OTA: u8 = 0x01;

    const fn has(self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    pub const fn debug(self) -> bool {
        self.has(Self::DEBUG)
    }

    pub const fn alexa(self) -> bool {
        !self.has(Self::DISABLE_ALEXA)
    }

    pub const fn blynk(self) -> bool {
        !self.has(Self::DISABLE_BLYNK)
    }

    pub const fn cronixie(self) -> bool {
        !self.has(Self::DISABLE_CRONIXIE)
    }

    pub const fn filesystem(self) -> bool {
        !self.has(Self::DISABLE_FILESYSTEM)
    }

    pub const fn huesync(self) -> bool {
        !self.has(Self::DISABLE_HUESYNC)
    }

    pub const fn adalight(self) -> bool {
        self.has(Self::ENABLE_ADALIGHT)
    }

    pub const fn ota(self) -> bool {
        !self.has(Self::DISABLE_OTA)
    }

    /// Names of the enabled optional features.
    #[must_use]
    pub fn enabled(self) -> Vec<&'static str> {
        [
            ("debug", self.debug()),
            ("alexa", self.alexa()),
            ("blynk", self.blynk()),
            ("cronixie", self.cronixie()),
            ("filesystem", self.filesystem()),
            ("huesync", self.huesync()),
            ("adalight", self.adalight()),
            ("ota", self.ota()),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

/// Realtime protocol feeding the strip, from `info.lm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RealtimeMode {
    Inactive,
    Generic,
    Udp,
    Hyperion,
    E131,
    Adalight,
    ArtNet,
    Tpm2Net,
    Ddp,
}

impl RealtimeMode {
    fn from_label(label: &str) -> Self {
        match label {
            "UDP" => Self::Udp,
            "Hyperion" => Self::Hyperion,
            "E1.31" => Self::E131,
            "USB Adalight/TPM2" => Self::Adalight,
            "Art-Net" => Self::ArtNet,
            "tpm2.net" => Self::Tpm2Net,
            "DDP" => Self::Ddp,
            _ => Self::Generic,
        }
    }
}

/// One frame from `GET /json/live`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveFrame {
    /// Colors as `RRGGBB` hex strings, one per sampled LED.
    #[serde(default)]
    pub leds: Vec<String>,
    /// Sampling stride: every n-th LED is reported.
    #[serde(default = "default_stride")]
    pub n: u32,
}

const fn default_stride() -> u32 {
    1
}

impl LiveFrame {
    /// Decoded colors; undecodable entries become black.
    #[must_use]
    pub fn colors(&self) -> Vec<Rgb> {
        self.leds
            .iter()
            .map(|hex| Rgb::from_hex_str(hex).unwrap_or(Rgb::BLACK))
            .collect()
    }
}

/// One page of `GET /json/palx`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradientPage {
    /// Highest page index.
    #[serde(default)]
    pub m: u32,
    #[serde(default)]
    pub p: std::collections::BTreeMap<String, Vec<GradientPoint>>,
}

/// A palette point: either `[pos, r, g, b]` or a symbolic color reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GradientPoint {
    Stop(Vec<u8>),
    Symbolic(String),
}
