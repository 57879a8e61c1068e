//! Effect metadata.
//!
//! One entry per firmware effect, indexed by the numeric id the device uses
//! in `seg.fx`. Each entry records which segment controls the effect reads
//! and how the panel should label them.

use serde::Serialize;

/// How an effect uses one of its tunable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "use", content = "label", rename_all = "snake_case")]
pub enum OptionUse {
    Unused,
    /// Used with the generic label.
    Used,
    /// Used with an effect-specific label.
    Labeled(&'static str),
}

impl OptionUse {
    #[must_use]
    pub const fn is_used(self) -> bool {
        !matches!(self, Self::Unused)
    }

    /// Label to show, or `None` when the input is unused.
    #[must_use]
    pub const fn label_or(self, generic: &'static str) -> Option<&'static str> {
        match self {
            Self::Unused => None,
            Self::Used => Some(generic),
            Self::Labeled(label) => Some(label),
        }
    }
}

/// One of the three manual color slots of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSlot {
    Primary,
    Secondary,
    Tertiary,
}

impl ColorSlot {
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
            Self::Tertiary => 2,
        }
    }

    #[must_use]
    pub const fn generic_label(self) -> &'static str {
        match self {
            Self::Primary => "Primary Color",
            Self::Secondary => "Secondary Color",
            Self::Tertiary => "Tertiary Color",
        }
    }
}

/// Static description of a single effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectInfo {
    pub wled_index: u8,
    pub effect_id: &'static str,
    pub fx_method: &'static str,
    /// Name the firmware reports in `/json/effects`.
    pub ui_name: &'static str,
    /// Friendlier name shown by the panel.
    pub proposed_name: &'static str,
    pub description: Option<&'static str>,
    pub speed: OptionUse,
    pub intensity: OptionUse,
    pub primary_color: OptionUse,
    pub secondary_color: OptionUse,
    pub tertiary_color: OptionUse,
    pub palette: OptionUse,
    /// Slot whose color tints the firmware default palette, if any.
    pub default_palette_uses_color: Option<ColorSlot>,
    pub dev_notes: Option<&'static str>,
    pub showcase: bool,
}

impl EffectInfo {
    #[must_use]
    pub const fn color(&self, slot: ColorSlot) -> OptionUse {
        match slot {
            ColorSlot::Primary => self.primary_color,
            ColorSlot::Secondary => self.secondary_color,
            ColorSlot::Tertiary => self.tertiary_color,
        }
    }

    /// Number of manual color slots the effect reads.
    #[must_use]
    pub fn color_count(&self) -> usize {
        ColorSlot::ALL
            .iter()
            .filter(|slot| self.color(**slot).is_used())
            .count()
    }

    /// Case-insensitive match against either name or the firmware id.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.ui_name.to_lowercase().contains(&needle)
            || self.proposed_name.to_lowercase().contains(&needle)
            || self.effect_id.to_lowercase().contains(&needle)
    }
}

/// Effect ids the panel treats specially.
pub mod fx {
    pub const STATIC: u8 = 0;
    pub const PALETTE: u8 = 65;
    pub const FIRE_2012: u8 = 66;
    pub const COLORWAVES: u8 = 67;
    pub const FILLNOISE8: u8 = 69;
    pub const NOISE16_1: u8 = 70;
    pub const NOISE16_2: u8 = 71;
    pub const NOISE16_3: u8 = 72;
    pub const NOISE16_4: u8 = 73;
    pub const GLITTER: u8 = 87;
    pub const SUNRISE: u8 = 104;
    pub const FLOW: u8 = 110;
}

/// Look up an effect by its numeric id.
#[must_use]
pub fn effect_info(id: u8) -> Option<&'static EffectInfo> {
    EFFECTS.get(usize::from(id)).filter(|e| e.wled_index == id)
}

/// Effects whose names contain `needle`, in id order.
pub fn search(needle: &str) -> impl Iterator<Item = &'static EffectInfo> + '_ {
    EFFECTS.iter().filter(move |e| e.matches(needle))
}

/// Effects flagged for the showcase list.
pub fn showcase() -> impl Iterator<Item = &'static EffectInfo> {
    EFFECTS.iter().filter(|e| e.showcase)
}

pub static EFFECTS: &[EffectInfo] = &[
    EffectInfo {
        wled_index: 0,
        effect_id: "FX_MODE_STATIC",
        fx_method: "mode_static",
        ui_name: "Solid",
        proposed_name: "Single Color",
        description: Some("All LEDs one color"),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Labeled("Color"),
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 1,
        effect_id: "FX_MODE_BLINK",
        fx_method: "mode_blink",
        ui_name: "Blink",
        proposed_name: "Blink",
        description: Some("Alternate between two solid colors"),
        speed: OptionUse::Used,
        intensity: OptionUse::Used,
        primary_color: OptionUse::Labeled("Color 1"),
        secondary_color: OptionUse::Labeled("Color 2"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 2,
        effect_id: "FX_MODE_BREATH",
        fx_method: "mode_breath",
        ui_name: "Breathe",
        proposed_name: "Fade: Breathe",
        description: Some("LEDs fade between a background color and a gradient, reminiscent of Apple Device standby fade"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 3,
        effect_id: "FX_MODE_COLOR_WIPE",
        fx_method: "mode_color_wipe",
        ui_name: "Wipe",
        proposed_name: "Color Wipe",
        description: Some("LEDs turn on left to right, revealing gradient, then turn off left to right"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Foreground Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 4,
        effect_id: "FX_MODE_COLOR_WIPE_RANDOM",
        fx_method: "mode_color_wipe_random",
        ui_name: "Wipe Random",
        proposed_name: "Color Wipe Random",
        description: Some("LEDs turn on left to right, then turn off left to right. Foreground and background colors are picked at random from palette."),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Palette"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 5,
        effect_id: "FX_MODE_RANDOM_COLOR",
        fx_method: "mode_random_color",
        ui_name: "Random Colors",
        proposed_name: "Random Color: All",
        description: Some("All LEDs fade between colors picked at random from the palette"),
        speed: OptionUse::Used,
        intensity: OptionUse::Used,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Palette"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 6,
        effect_id: "FX_MODE_COLOR_SWEEP",
        fx_method: "mode_color_sweep",
        ui_name: "Sweep",
        proposed_name: "Color Sweep",
        description: Some("LEDs turn on left to right, revealing gradient, then turn off right to left."),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Foreground Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 7,
        effect_id: "FX_MODE_DYNAMIC",
        fx_method: "mode_dynamic",
        ui_name: "Dynamic",
        proposed_name: "Random Color: Separate",
        description: Some("Each LED assigned a random color from the palette, all changed at same time"),
        speed: OptionUse::Used,
        intensity: OptionUse::Used,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Palette"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 8,
        effect_id: "FX_MODE_RAINBOW",
        fx_method: "mode_rainbow",
        ui_name: "Colorloop",
        proposed_name: "Gradient: All Fade",
        description: Some("All LEDs fade through a gradient"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Saturation"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 9,
        effect_id: "FX_MODE_RAINBOW_CYCLE",
        fx_method: "mode_rainbow_cycle",
        ui_name: "Rainbow",
        proposed_name: "Gradient: Moving",
        description: Some("Gradient moves across the LEDs"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Gradient Zoom (Inverse)"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 10,
        effect_id: "FX_MODE_SCAN",
        fx_method: "mode_scan",
        ui_name: "Scan",
        proposed_name: "Scan: Single",
        description: Some("A stripe of gradient is moved back and forth against a background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Stripe Width"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Stripe Palette"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 11,
        effect_id: "FX_MODE_DUAL_SCAN",
        fx_method: "mode_dual_scan",
        ui_name: "Scan Dual",
        proposed_name: "Scan: Dual",
        description: Some("Two stripes of gradient move back and forth against a background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Stripe Width"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Stripe Palette"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 12,
        effect_id: "FX_MODE_FADE",
        fx_method: "mode_fade",
        ui_name: "Fade",
        proposed_name: "Fade: Fade",
        description: Some("LEDs fade between a background color and a gradient"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 13,
        effect_id: "FX_MODE_THEATER_CHASE",
        fx_method: "mode_theater_chase",
        ui_name: "Theater",
        proposed_name: "Theater: Individual",
        description: Some("Gradient showing through a background with many small alternating stripes"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Gradient Dot Density"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 14,
        effect_id: "FX_MODE_THEATER_CHASE_RAINBOW",
        fx_method: "mode_theater_chase_rainbow",
        ui_name: "Theater Rainbow",
        proposed_name: "Theater: All",
        description: Some("Many small alternating strips, all the same color, fading through a gradient, over a background color"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Gradient Dot Density"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 15,
        effect_id: "FX_MODE_RUNNING_LIGHTS",
        fx_method: "mode_running_lights",
        ui_name: "Running",
        proposed_name: "Gradient: Smooth Stripes",
        description: Some("Smooth Stripes of a gradient moving over a background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Gradient Stripe Width (Inverse)"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 16,
        effect_id: "FX_MODE_SAW",
        fx_method: "mode_saw",
        ui_name: "Saw",
        proposed_name: "Gradient: Saw Stripes",
        description: Some("Stripes of a gradient moving over a background, leading edge is sharp."),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Gradient Stripe Width (Inverse)"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 17,
        effect_id: "FX_MODE_TWINKLE",
        fx_method: "mode_twinkle",
        ui_name: "Twinkle",
        proposed_name: "Twinkle",
        description: Some("LEDs slowly and randomly blink on and off with colors from a gradient over a background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Blink lifetime"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 18,
        effect_id: "FX_MODE_DISSOLVE",
        fx_method: "mode_dissolve",
        ui_name: "Dissolve",
        proposed_name: "Dissolve",
        description: Some("LEDs quickly randomly blink, alternating between a gradient and a background, reminiscent of a video dissolve effect"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Blink Intensity"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 19,
        effect_id: "FX_MODE_DISSOLVE_RANDOM",
        fx_method: "mode_dissolve_random",
        ui_name: "Dissolve Rnd",
        proposed_name: "Dissolve: Random",
        description: Some("LEDs quickly randomly blink, alternating between a shuffled gradient and a background, reminiscent of a video dissolve effect"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Blink Intensity"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 20,
        effect_id: "FX_MODE_SPARKLE",
        fx_method: "mode_sparkle",
        ui_name: "Sparkle",
        proposed_name: "Sparkle: Color 1 over Gradient",
        description: Some("Sparkles a color over a gradient background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Labeled("Sparkle Color"),
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 21,
        effect_id: "FX_MODE_FLASH_SPARKLE",
        fx_method: "mode_flash_sparkle",
        ui_name: "Sparkle Dark",
        proposed_name: "Sparkle: Color 2 over Gradient",
        description: Some("Sparkles a color over a gradient background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Sparkle Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 22,
        effect_id: "FX_MODE_HYPER_SPARKLE",
        fx_method: "mode_hyper_sparkle",
        ui_name: "Sparkle+",
        proposed_name: "Sparkle+: Color 2 over Gradient",
        description: Some("Sparkles a lot of a color over a gradient background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Sparkle Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 23,
        effect_id: "FX_MODE_STROBE",
        fx_method: "mode_strobe",
        ui_name: "Strobe",
        proposed_name: "Strobe",
        description: Some("All LEDs display base color with strobes of another color"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Labeled("Strobe Color"),
        secondary_color: OptionUse::Labeled("Base Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 24,
        effect_id: "FX_MODE_STROBE_RAINBOW",
        fx_method: "mode_strobe_rainbow",
        ui_name: "Strobe Rainbow",
        proposed_name: "Strobe Gradient",
        description: Some("All LEDs display base color with strokes of a changing gradient"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Base Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Used,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 25,
        effect_id: "FX_MODE_MULTI_STROBE",
        fx_method: "mode_multi_strobe",
        ui_name: "Strobe Mega",
        proposed_name: "Strobe: Different",
        description: Some("Strobes a color over a background gradient"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Labeled("Strobe Color"),
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 26,
        effect_id: "FX_MODE_BLINK_RAINBOW",
        fx_method: "mode_blink_rainbow",
        ui_name: "Blink Rainbow",
        proposed_name: "Palette Blink",
        description: Some("All LEDs alternate between a fading gradient and a solid color"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Gradient / Solid Ratio"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Solid Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 27,
        effect_id: "FX_MODE_ANDROID",
        fx_method: "mode_android",
        ui_name: "Android",
        proposed_name: "Android Loading",
        description: Some("Displays a solid band that pulses while moving back and forth over a gradient background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Labeled("Band Color"),
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 28,
        effect_id: "FX_MODE_CHASE_COLOR",
        fx_method: "mode_chase_color",
        ui_name: "Chase",
        proposed_name: "Chase: Gradient",
        description: Some("Two connected solid bars of color move over a gradient background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Bar Width"),
        primary_color: OptionUse::Labeled("Left Bar Color"),
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Labeled("Right Bar Color"),
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 29,
        effect_id: "FX_MODE_CHASE_RANDOM",
        fx_method: "mode_chase_random",
        ui_name: "Chase: Random",
        proposed_name: "Chase: Two",
        description: Some("Two connected solid bars of color move over a solid background randomly picked from the gradient on each cycle"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Bar Width"),
        primary_color: OptionUse::Labeled("Left Bar Color"),
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Labeled("Right Bar Color"),
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 30,
        effect_id: "FX_MODE_CHASE_RAINBOW",
        fx_method: "mode_chase_rainbow",
        ui_name: "Chase Rainbow",
        proposed_name: "Chase: Two",
        description: Some("Two connected solid bars of color move over a solid background fading through the gradient"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Bar Width"),
        primary_color: OptionUse::Labeled("Left Bar Color"),
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Labeled("Right Bar Color"),
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 31,
        effect_id: "FX_MODE_CHASE_FLASH",
        fx_method: "mode_chase_flash",
        ui_name: "Chase Flash",
        proposed_name: "Flash: Over Gradient",
        description: Some("Tiny flashes of a solid color, moving from left to right, over a gradient background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Flash Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 32,
        effect_id: "FX_MODE_CHASE_FLASH_RANDOM",
        fx_method: "mode_chase_flash_random",
        ui_name: "Chase Flash Rnd",
        proposed_name: "Flash: Alternate Over Gradient",
        description: Some("Tiny flashes of a solid color randomly chosen from two colors, moving from left to right, over solid backgrounds randomly chosen"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Labeled("Flash Color 1"),
        secondary_color: OptionUse::Labeled("Flash Color 2"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 33,
        effect_id: "FX_MODE_CHASE_RAINBOW_WHITE",
        fx_method: "mode_chase_rainbow_white",
        ui_name: "Rainbow Runner",
        proposed_name: "Fading Bar Chase",
        description: Some("A bar fading through a gradient over the primary background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Bar Width"),
        primary_color: OptionUse::Labeled("Background Color"),
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Bar Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 34,
        effect_id: "FX_MODE_COLORFUL",
        fx_method: "mode_colorful",
        ui_name: "Colorful",
        proposed_name: "Red - Amber - Green - Blue",
        description: Some("Red - Amber - Green - Blue lights running over a solid background moving through the gradient"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Color Choice Mode?"),
        primary_color: OptionUse::Used,
        secondary_color: OptionUse::Used,
        tertiary_color: OptionUse::Used,
        palette: OptionUse::Used,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 35,
        effect_id: "FX_MODE_TRAFFIC_LIGHT",
        fx_method: "mode_traffic_light",
        ui_name: "Traffic Light",
        proposed_name: "Traffic Light",
        description: Some("Every third LED lights up red, yellow, or blue over a graident background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 36,
        effect_id: "FX_MODE_COLOR_SWEEP_RANDOM",
        fx_method: "mode_color_sweep_random",
        ui_name: "Sweep Random",
        proposed_name: "Color Sweep Random",
        description: Some("LEDs turn on left to right, then turn off right to left. Foreground and background colors are picked at random from palette."),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 37,
        effect_id: "FX_MODE_RUNNING_COLOR",
        fx_method: "mode_running_color",
        ui_name: "Running 2",
        proposed_name: "Running: Secondary over Gradient",
        description: Some("Bands of the secondary color over a gradient background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Band Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 38,
        effect_id: "FX_MODE_RUNNING_RED_BLUE",
        fx_method: "mode_running_red_blue",
        ui_name: "Red & Blue",
        proposed_name: "Running: Blue",
        description: Some("Bands of blue over a background gradient"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 39,
        effect_id: "FX_MODE_RUNNING_RANDOM",
        fx_method: "mode_running_random",
        ui_name: "Stream",
        proposed_name: "Stream: Random",
        description: Some("Random Colors Bands moving left to right, fading to black"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Palette"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 40,
        effect_id: "FX_MODE_LARSON_SCANNER",
        fx_method: "mode_larson_scanner",
        ui_name: "Scanner",
        proposed_name: "Scanner",
        description: Some("Gradient scans back and forth, then fades, over background color"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Background Intensity"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Scan Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 41,
        effect_id: "FX_MODE_COMET",
        fx_method: "mode_comet",
        ui_name: "Lighthouse",
        proposed_name: "Scanner: Lighthouse",
        description: Some("Gradient scans left to right, then fades, over background color"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Background Intensity"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Scan Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 42,
        effect_id: "FX_MODE_FIREWORKS",
        fx_method: "mode_fireworks",
        ui_name: "Fireworks",
        proposed_name: "Fireworks",
        description: Some("Random bursts of color from a palette over a black background"),
        speed: OptionUse::Labeled("Firework Lifetime"),
        intensity: OptionUse::Labeled("Firework Frequency"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Palette"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 43,
        effect_id: "FX_MODE_RAIN",
        fx_method: "mode_rain",
        ui_name: "Rain",
        proposed_name: "Rain",
        description: Some("Random 'drops' of rain falling from right to left, picked from a palette, over a black background"),
        speed: OptionUse::Labeled("Drop Lifetime"),
        intensity: OptionUse::Labeled("Drop Frequency"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Palette"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 44,
        effect_id: "FX_MODE_MERRY_CHRISTMAS",
        fx_method: "mode_merry_christmas",
        ui_name: "Merry Christmas",
        proposed_name: "Merry Christmas",
        description: Some("Green bands over a gradient (default red) background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 45,
        effect_id: "FX_MODE_FIRE_FLICKER",
        fx_method: "mode_fire_flicker",
        ui_name: "Fire Flicker",
        proposed_name: "Fire Flicker",
        description: Some("Gradient or solid color flickering"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Flicker Intensity"),
        primary_color: OptionUse::Labeled("Solid Color"),
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: Some(ColorSlot::Primary),
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 46,
        effect_id: "FX_MODE_GRADIENT",
        fx_method: "mode_gradient",
        ui_name: "Gradient",
        proposed_name: "Gradient",
        description: Some("Soft primary color band moves over background gradient or solid color"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Labeled("Band Color"),
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: Some(ColorSlot::Secondary),
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 47,
        effect_id: "FX_MODE_LOADING",
        fx_method: "mode_loading",
        ui_name: "Loading",
        proposed_name: "Gradient: Loading",
        description: Some("Left Soft / Right hard primary color band moves over background gradient or solid color"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Labeled("Band Color"),
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Background Gradient"),
        default_palette_uses_color: Some(ColorSlot::Secondary),
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 48,
        effect_id: "FX_MODE_POLICE",
        fx_method: "mode_police",
        ui_name: "Police",
        proposed_name: "Bands: Police",
        description: Some("Bands of blue and red over a solid background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 49,
        effect_id: "FX_MODE_POLICE_ALL",
        fx_method: "mode_police_all",
        ui_name: "Police: All",
        proposed_name: "Full Bands: Police",
        description: Some("Bands of blue and red moving across the LEDs"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 50,
        effect_id: "FX_MODE_TWO_DOTS",
        fx_method: "mode_two_dots",
        ui_name: "Two Dots",
        proposed_name: "Two Bands",
        description: Some("Two solid bands of color moving over a solid background color"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Labeled("Band 1 Color"),
        secondary_color: OptionUse::Labeled("Band 2 Color"),
        tertiary_color: OptionUse::Labeled("Background Color"),
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 51,
        effect_id: "FX_MODE_TWO_AREAS",
        fx_method: "mode_two_areas",
        ui_name: "Two Areas",
        proposed_name: "Full Bands",
        description: Some("Two colors alternating moving across the LEDs"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Labeled("Band 1 Color"),
        secondary_color: OptionUse::Labeled("Band 2 Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 52,
        effect_id: "FX_MODE_CIRCUS_COMBUSTUS",
        fx_method: "mode_circus_combustus",
        ui_name: "Circus",
        proposed_name: "Full Bands: Circus",
        description: Some("Bands of white, red, and a chosen color or gradient"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Third Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Third Gradient"),
        default_palette_uses_color: Some(ColorSlot::Secondary),
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 53,
        effect_id: "FX_MODE_HALLOWEEN",
        fx_method: "mode_halloween",
        ui_name: "Halloween",
        proposed_name: "Full Bands: Halloween",
        description: Some("Full Bands of red and purple moving across the LEDs"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 54,
        effect_id: "FX_MODE_TRICOLOR_CHASE",
        fx_method: "mode_tricolor_chase",
        ui_name: "Tri Chase",
        proposed_name: "Full Bands: Three Colors",
        description: Some("Three full bands moving across the LEDs, two solid, one can be gradient or solid"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Width"),
        primary_color: OptionUse::Labeled("Color 1"),
        secondary_color: OptionUse::Labeled("Color 3"),
        tertiary_color: OptionUse::Labeled("Color 2"),
        palette: OptionUse::Labeled("Gradient 3"),
        default_palette_uses_color: Some(ColorSlot::Secondary),
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 55,
        effect_id: "FX_MODE_TRICOLOR_WIPE",
        fx_method: "mode_tricolor_wipe",
        ui_name: "Tri Wipe",
        proposed_name: "Tri Wipe",
        description: Some("Two solid colors and a color or gradient take turns wiping across the LEDs"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Labeled("Color 1"),
        secondary_color: OptionUse::Labeled("Color 2"),
        tertiary_color: OptionUse::Labeled("Color 3"),
        palette: OptionUse::Labeled("Gradient 3"),
        default_palette_uses_color: Some(ColorSlot::Tertiary),
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 56,
        effect_id: "FX_MODE_TRICOLOR_FADE",
        fx_method: "mode_tricolor_fade",
        ui_name: "Tri Fade",
        proposed_name: "Tri Wipe",
        description: Some("Two solid colors and a color or gradient take turns fading across all the LEDs at once"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Labeled("Color 1"),
        secondary_color: OptionUse::Labeled("Color 2"),
        tertiary_color: OptionUse::Labeled("Color 3"),
        palette: OptionUse::Labeled("Gradient 3"),
        default_palette_uses_color: Some(ColorSlot::Tertiary),
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 57,
        effect_id: "FX_MODE_LIGHTNING",
        fx_method: "mode_lightning",
        ui_name: "Lightning",
        proposed_name: "Lightning",
        description: Some("Flashes of a solid color or gradient over a solid background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Flash Frequency"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Flash Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 58,
        effect_id: "FX_MODE_ICU",
        fx_method: "mode_icu",
        ui_name: "ICU",
        proposed_name: "ICU",
        description: Some("Two single pixel bands of a solid color or gradient move together but randomly across a solid background"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Band Spacing"),
        primary_color: OptionUse::Labeled("Band Color"),
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Band Palette"),
        default_palette_uses_color: Some(ColorSlot::Primary),
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 59,
        effect_id: "FX_MODE_MULTI_COMET",
        fx_method: "mode_multi_comet",
        ui_name: "Multi Comet",
        proposed_name: "Multi Comet",
        description: Some("Left smooth/right sharp bands overlapping bands move from left to right. One band is solid color, other is solid or gradient, background is solid color but brightness changes with intensity."),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Background Brightness"),
        primary_color: OptionUse::Labeled("Band 1 Color"),
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Labeled("Band 2 Color"),
        palette: OptionUse::Labeled("Band 1 Gradient"),
        default_palette_uses_color: Some(ColorSlot::Primary),
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 60,
        effect_id: "FX_MODE_DUAL_LARSON_SCANNER",
        fx_method: "mode_dual_larson_scanner",
        ui_name: "Scanner Dual",
        proposed_name: "Scanner Dual",
        description: Some("Bouncing bands with one sharp, one smooth edge moving back and forth in opposite directions. One band is solid or gradient, one is solid, background is solid but brightness changes with intensity."),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Background Brightness"),
        primary_color: OptionUse::Labeled("Band 1 Color"),
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Labeled("Band 2 Color"),
        palette: OptionUse::Labeled("Band 1 Gradient"),
        default_palette_uses_color: Some(ColorSlot::Primary),
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 61,
        effect_id: "FX_MODE_RANDOM_CHASE",
        fx_method: "mode_random_chase",
        ui_name: "Stream 2",
        proposed_name: "Stream: Random Colors",
        description: Some("A stream of random pixels moving from left to right"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 62,
        effect_id: "FX_MODE_OSCILLATE",
        fx_method: "mode_oscillate",
        ui_name: "Oscillate",
        proposed_name: "Three Bands",
        description: Some("Three bands of color slowly move back and forth, mixing where they overlap"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Bar width (inverse)"),
        primary_color: OptionUse::Labeled("Color 1"),
        secondary_color: OptionUse::Labeled("Color 2"),
        tertiary_color: OptionUse::Labeled("Color 3"),
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 63,
        effect_id: "FX_MODE_PRIDE_2015",
        fx_method: "mode_pride_2015",
        ui_name: "Pride 2015",
        proposed_name: "Pride Rainbows",
        description: Some("Bands of color cycling through the rainbow"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 64,
        effect_id: "FX_MODE_JUGGLE",
        fx_method: "mode_juggle",
        ui_name: "Juggle",
        proposed_name: "Comets: 8",
        description: Some("8 'comets' that move back and forth in colors from the gradient, over a background color."),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Fade Intensity"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Labeled("Background Color"),
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: Some("Default Palette is CHSV(X, 220, 255)"),
        showcase: false,
    },
    EffectInfo {
        wled_index: 65,
        effect_id: "FX_MODE_PALETTE",
        fx_method: "mode_palette",
        ui_name: "Palette",
        proposed_name: "Gradient",
        description: Some("Displays a gradient moving across the LEDs"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 66,
        effect_id: "FX_MODE_FIRE_2012",
        fx_method: "mode_fire_2012",
        ui_name: "Fire 2012",
        proposed_name: "Fire 2012",
        description: Some("Classic Fire Effect, uses a gradient"),
        speed: OptionUse::Used,
        intensity: OptionUse::Used,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Fire Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 67,
        effect_id: "FX_MODE_COLORWAVES",
        fx_method: "mode_colorwaves",
        ui_name: "Colorwaves",
        proposed_name: "Small Bands",
        description: Some("Many small bands of constantly changing colors chosen from a gradient"),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Color Shift Speed"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 68,
        effect_id: "FX_MODE_BPM",
        fx_method: "mode_bpm",
        ui_name: "Bpm",
        proposed_name: "Gradient Waves",
        description: Some("Moving gradient displayed as 'waves' with a soft left edge and sharp right edge"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: Some("There are odd gaps in this pattern that probably aren't desired"),
        showcase: false,
    },
    EffectInfo {
        wled_index: 69,
        effect_id: "FX_MODE_FILLNOISE8",
        fx_method: "mode_fillnoise8",
        ui_name: "Fill Noise",
        proposed_name: "Noise: Small",
        description: Some("Gently shifting random noise from a gradient in smallish bands"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 70,
        effect_id: "FX_MODE_NOISE16_1",
        fx_method: "mode_noise16_1",
        ui_name: "Noise 1",
        proposed_name: "Noise: Blobs",
        description: Some("Gently shifting random noise from a gradient in large shifting blobs"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 71,
        effect_id: "FX_MODE_NOISE16_2",
        fx_method: "mode_noise16_2",
        ui_name: "Noise 2",
        proposed_name: "Noise: Scrolling",
        description: Some("Random bands of a gradient scrolling from right to left"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 72,
        effect_id: "FX_MODE_NOISE16_3",
        fx_method: "mode_noise16_3",
        ui_name: "Noise 3",
        proposed_name: "Noise: Blobs 2",
        description: Some("Gently shifting random noise from a gradient in shifting blobs"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: true,
    },
    EffectInfo {
        wled_index: 73,
        effect_id: "FX_MODE_NOISE16_4",
        fx_method: "mode_noise16_4",
        ui_name: "Noise 4",
        proposed_name: "Noise: Static",
        description: Some("Quickly shifting random noise from a gradient in a static pattern"),
        speed: OptionUse::Used,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 74,
        effect_id: "FX_MODE_COLORTWINKLE",
        fx_method: "mode_colortwinkle",
        ui_name: "Colortwinkles",
        proposed_name: "Gradient Twinkles",
        description: Some("Twinkles of color chosen randomly from a gradient. Reminiscent of twinkling holiday lights."),
        speed: OptionUse::Used,
        intensity: OptionUse::Labeled("Twinkle Count"),
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Labeled("Gradient"),
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: true,
    },
    EffectInfo {
        wled_index: 75,
        effect_id: "FX_MODE_LAKE",
        fx_method: "mode_lake",
        ui_name: "Lake",
        proposed_name: "Lake",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 76,
        effect_id: "FX_MODE_METEOR",
        fx_method: "mode_meteor",
        ui_name: "Meteor",
        proposed_name: "Meteor",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 77,
        effect_id: "FX_MODE_METEOR_SMOOTH",
        fx_method: "mode_meteor_smooth",
        ui_name: "Meteor Smooth",
        proposed_name: "Meteor Smooth",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 78,
        effect_id: "FX_MODE_RAILWAY",
        fx_method: "mode_railway",
        ui_name: "Railway",
        proposed_name: "Railway",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 79,
        effect_id: "FX_MODE_RIPPLE",
        fx_method: "mode_ripple",
        ui_name: "Ripple",
        proposed_name: "Ripple",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 80,
        effect_id: "FX_MODE_TWINKLEFOX",
        fx_method: "mode_twinklefox",
        ui_name: "Twinklefox",
        proposed_name: "Twinklefox",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 81,
        effect_id: "FX_MODE_TWINKLECAT",
        fx_method: "mode_twinklecat",
        ui_name: "Twinklecat",
        proposed_name: "Twinklecat",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 82,
        effect_id: "FX_MODE_HALLOWEEN_EYES",
        fx_method: "mode_halloween_eyes",
        ui_name: "Halloween Eyes",
        proposed_name: "Halloween Eyes",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 83,
        effect_id: "FX_MODE_STATIC_PATTERN",
        fx_method: "mode_static_pattern",
        ui_name: "Solid Pattern",
        proposed_name: "Solid Pattern",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 84,
        effect_id: "FX_MODE_TRI_STATIC_PATTERN",
        fx_method: "mode_tri_static_pattern",
        ui_name: "Solid Pattern Tri",
        proposed_name: "Solid Pattern Tri",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 85,
        effect_id: "FX_MODE_SPOTS",
        fx_method: "mode_spots",
        ui_name: "Spots",
        proposed_name: "Spots",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 86,
        effect_id: "FX_MODE_SPOTS_FADE",
        fx_method: "mode_spots_fade",
        ui_name: "Spots Fade",
        proposed_name: "Spots Fade",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 87,
        effect_id: "FX_MODE_GLITTER",
        fx_method: "mode_glitter",
        ui_name: "Glitter",
        proposed_name: "Glitter",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 88,
        effect_id: "FX_MODE_CANDLE",
        fx_method: "mode_candle",
        ui_name: "Candle",
        proposed_name: "Candle",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 89,
        effect_id: "FX_MODE_STARBURST",
        fx_method: "mode_starburst",
        ui_name: "Fireworks Starburst",
        proposed_name: "Fireworks Starburst",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 90,
        effect_id: "FX_MODE_EXPLODING_FIREWORKS",
        fx_method: "mode_exploding_fireworks",
        ui_name: "Fireworks 1D",
        proposed_name: "Fireworks 1D",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: true,
    },
    EffectInfo {
        wled_index: 91,
        effect_id: "FX_MODE_BOUNCINGBALLS",
        fx_method: "mode_bouncing_balls",
        ui_name: "Bouncing Balls",
        proposed_name: "Bouncing Balls",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 92,
        effect_id: "FX_MODE_SINELON",
        fx_method: "mode_sinelon",
        ui_name: "Sinelon",
        proposed_name: "Sinelon",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 93,
        effect_id: "FX_MODE_SINELON_DUAL",
        fx_method: "mode_sinelon_dual",
        ui_name: "Sinelon Dual",
        proposed_name: "Sinelon Dual",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 94,
        effect_id: "FX_MODE_SINELON_RAINBOW",
        fx_method: "mode_sinelon_rainbow",
        ui_name: "Sinelon Rainbow",
        proposed_name: "Sinelon Rainbow",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 95,
        effect_id: "FX_MODE_POPCORN",
        fx_method: "mode_popcorn",
        ui_name: "Popcorn",
        proposed_name: "Popcorn",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 96,
        effect_id: "FX_MODE_DRIP",
        fx_method: "mode_drip",
        ui_name: "Drip",
        proposed_name: "Drip",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 97,
        effect_id: "FX_MODE_PLASMA",
        fx_method: "mode_plasma",
        ui_name: "Plasma",
        proposed_name: "Plasma",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 98,
        effect_id: "FX_MODE_PERCENT",
        fx_method: "mode_percent",
        ui_name: "Percent",
        proposed_name: "Percent",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 99,
        effect_id: "FX_MODE_RIPPLE_RAINBOW",
        fx_method: "mode_ripple_rainbow",
        ui_name: "Ripple Rainbow",
        proposed_name: "Ripple Rainbow",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 100,
        effect_id: "FX_MODE_HEARTBEAT",
        fx_method: "mode_heartbeat",
        ui_name: "Heartbeat",
        proposed_name: "Heartbeat",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 101,
        effect_id: "FX_MODE_PACIFICA",
        fx_method: "mode_pacifica",
        ui_name: "Pacifica",
        proposed_name: "Pacifica",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 102,
        effect_id: "FX_MODE_CANDLE_MULTI",
        fx_method: "mode_candle_multi",
        ui_name: "Candle Multi",
        proposed_name: "Candle Multi",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 103,
        effect_id: "FX_MODE_SOLID_GLITTER",
        fx_method: "mode_solid_glitter",
        ui_name: "Solid Glitter",
        proposed_name: "Solid Glitter",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 104,
        effect_id: "FX_MODE_SUNRISE",
        fx_method: "mode_sunrise",
        ui_name: "Sunrise",
        proposed_name: "Sunrise",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 105,
        effect_id: "FX_MODE_PHASED",
        fx_method: "mode_phased",
        ui_name: "Phased",
        proposed_name: "Phased",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 106,
        effect_id: "FX_MODE_TWINKLEUP",
        fx_method: "mode_twinkleup",
        ui_name: "Twinkleup",
        proposed_name: "Twinkleup",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 107,
        effect_id: "FX_MODE_NOISEPAL",
        fx_method: "mode_noisepal",
        ui_name: "Noise Pal",
        proposed_name: "Noise Pal",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 108,
        effect_id: "FX_MODE_SINEWAVE",
        fx_method: "mode_sinewave",
        ui_name: "Sine",
        proposed_name: "Sine",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 109,
        effect_id: "FX_MODE_PHASEDNOISE",
        fx_method: "mode_phased_noise",
        ui_name: "Phased Noise",
        proposed_name: "Phased Noise",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 110,
        effect_id: "FX_MODE_FLOW",
        fx_method: "mode_flow",
        ui_name: "Flow",
        proposed_name: "Flow",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 111,
        effect_id: "FX_MODE_CHUNCHUN",
        fx_method: "mode_chunchun",
        ui_name: "Chunchun",
        proposed_name: "Chunchun",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 112,
        effect_id: "FX_MODE_DANCING_SHADOWS",
        fx_method: "mode_dancing_shadows",
        ui_name: "Dancing Shadows",
        proposed_name: "Dancing Shadows",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 113,
        effect_id: "FX_MODE_WASHING_MACHINE",
        fx_method: "mode_washing_machine",
        ui_name: "Washing Machine",
        proposed_name: "Washing Machine",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 114,
        effect_id: "FX_MODE_CANDY_CANE",
        fx_method: "mode_candy_cane",
        ui_name: "Candy Cane",
        proposed_name: "Candy Cane",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
    EffectInfo {
        wled_index: 115,
        effect_id: "FX_MODE_BLENDS",
        fx_method: "mode_blends",
        ui_name: "Blends",
        proposed_name: "Blends",
        description: Some(""),
        speed: OptionUse::Unused,
        intensity: OptionUse::Unused,
        primary_color: OptionUse::Unused,
        secondary_color: OptionUse::Unused,
        tertiary_color: OptionUse::Unused,
        palette: OptionUse::Unused,
        default_palette_uses_color: None,
        dev_notes: None,
        showcase: false,
    },
];
