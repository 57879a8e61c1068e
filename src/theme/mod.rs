//! Theme for human-mode output.

use console::Style;

use crate::color::Rgb;

/// Visual theme for `wled` human-mode output.
///
/// Centralizes styles so every command renders consistently.
pub struct PanelTheme {
    pub accent: Style,
    pub success: Style,
    pub error: Style,
    pub warning: Style,
    pub muted: Style,

    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub segment_id: Style,
    pub selected: Style,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            accent: Style::new().color256(33),
            success: Style::new().color256(41).bold(),
            error: Style::new().color256(203).bold(),
            warning: Style::new().color256(214).bold(),
            muted: Style::new().color256(244),
            header: Style::new().color256(33).bold(),
            label: Style::new().dim(),
            value: Style::new().bold(),
            segment_id: Style::new().color256(214).bold(),
            selected: Style::new().color256(41).bold(),
        }
    }
}

impl PanelTheme {
    /// Two-cell block painted in the nearest 256-color approximation.
    #[must_use]
    pub fn swatch(color: Rgb) -> String {
        Style::new()
            .on_color256(ansi256(color))
            .apply_to("  ")
            .to_string()
    }
}

/// Nearest xterm-256 index: the 6x6x6 cube, or the gray ramp for grays.
#[must_use]
pub fn ansi256(color: Rgb) -> u8 {
    let Rgb { r, g, b } = color;
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            level => 232 + ((level - 8) / 10).min(23),
        };
    }
    let cube = |v: u8| if v < 48 { 0 } else { (v - 35) / 40 };
    16 + 36 * cube(r) + 6 * cube(g) + cube(b)
}
