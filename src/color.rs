//! Color and palette value types.
//!
//! Colors travel over the wire as `[r, g, b]` triples (or `[]` for an unset
//! slot) and live previews report them as `RRGGBB` hex strings. Palettes are
//! ordered `(position, color)` stops, either spread evenly over `0..=255` or
//! decoded from flat `pos, r, g, b` byte quadruples.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WledError};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` integer. Bits above 24 are ignored.
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Self::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// Parse `RRGGBB`, `#RRGGBB`, `RGB` or `#RGB`.
    pub fn from_hex_str(input: &str) -> Result<Self> {
        let digits = input.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => {
                return Err(WledError::InvalidColor {
                    input: input.to_string(),
                });
            }
        };

        let mut bytes = [0u8; 3];
        hex::decode_to_slice(&expanded, &mut bytes).map_err(|_| WledError::InvalidColor {
            input: input.to_string(),
        })?;
        Ok(Self::from(bytes))
    }

    /// Lowercase `rrggbb` without a leading `#`.
    #[must_use]
    pub fn to_hex(self) -> String {
        hex::encode([self.r, self.g, self.b])
    }

    /// CSS `rgb(r,g,b)` notation.
    #[must_use]
    pub fn css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(color: Rgb) -> Self {
        Self(color.to_array())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// A color supplied by a caller, in one of the encodings the panel accepts.
///
/// The variant is chosen at the call site; nothing inspects types at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    /// `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    Hex(String),
    /// Packed `0xRRGGBB`.
    Integer(u32),
    /// Raw channel triple.
    Triple([u8; 3]),
}

impl ColorInput {
    /// Resolve to a color, or `None` when the input cannot be decoded.
    #[must_use]
    pub fn resolve(&self) -> Option<Rgb> {
        match self {
            Self::Hex(text) => Rgb::from_hex_str(text).ok(),
            Self::Integer(value) => Some(Rgb::from_u32(*value)),
            Self::Triple(channels) => Some(Rgb::from(*channels)),
        }
    }

    /// Resolve to a color, falling back to `default` for undecodable input.
    #[must_use]
    pub fn resolve_or(&self, default: Rgb) -> Rgb {
        self.resolve().unwrap_or(default)
    }
}

impl From<Rgb> for ColorInput {
    fn from(color: Rgb) -> Self {
        Self::Triple(color.to_array())
    }
}

/// One manual color slot of a segment (`col[n]` on the wire).
///
/// The device encodes an unset slot as an empty array. RGBW devices append a
/// white channel which is not carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<u8>", into = "Vec<u8>")]
pub struct SlotColor(pub Option<Rgb>);

impl SlotColor {
    pub const UNSET: Self = Self(None);

    #[must_use]
    pub const fn rgb(color: Rgb) -> Self {
        Self(Some(color))
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        self.0.is_some()
    }
}

impl From<Vec<u8>> for SlotColor {
    fn from(channels: Vec<u8>) -> Self {
        match channels.as_slice() {
            [r, g, b, ..] => Self(Some(Rgb::new(*r, *g, *b))),
            _ => Self(None),
        }
    }
}

impl From<SlotColor> for Vec<u8> {
    fn from(slot: SlotColor) -> Self {
        slot.0.map(|c| c.to_array().to_vec()).unwrap_or_default()
    }
}

/// A single gradient stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteStop {
    pub position: u8,
    pub color: Rgb,
}

impl PaletteStop {
    #[must_use]
    pub const fn new(position: u8, color: Rgb) -> Self {
        Self { position, color }
    }

    /// Position as a fraction of the full gradient.
    #[must_use]
    pub fn fraction(self) -> f64 {
        f64::from(self.position) / 255.0
    }

    /// Position as a rounded CSS percentage, e.g. `"50%"`.
    #[must_use]
    pub fn percent(self) -> String {
        format!("{}%", (self.fraction() * 100.0).round())
    }

    fn css_stop(self) -> String {
        format!("{} {}", self.color.css(), self.percent())
    }
}

/// An ordered list of gradient stops.
///
/// Stops decoded from device bytes keep the device's order, which is
/// conventionally but not necessarily increasing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Palette {
    pub stops: Vec<PaletteStop>,
}

impl Palette {
    #[must_use]
    pub const fn new(stops: Vec<PaletteStop>) -> Self {
        Self { stops }
    }

    /// Spread `colors` evenly over `0..=255`; missing colors become `default`.
    ///
    /// A single color yields one stop at position 0.
    #[must_use]
    pub fn from_colors(colors: &[Option<Rgb>], default: Rgb) -> Self {
        let last = colors.len().saturating_sub(1);
        let stops = colors
            .iter()
            .enumerate()
            .map(|(index, color)| {
                PaletteStop::new(even_position(index, last), color.unwrap_or(default))
            })
            .collect();
        Self { stops }
    }

    /// Spread fully specified colors evenly over `0..=255`.
    #[must_use]
    pub fn from_rgb(colors: &[Rgb]) -> Self {
        let wrapped: Vec<Option<Rgb>> = colors.iter().copied().map(Some).collect();
        Self::from_colors(&wrapped, Rgb::BLACK)
    }

    /// Build from packed `0xRRGGBB` values, the way FastLED tables are written.
    #[must_use]
    pub fn from_packed(values: &[u32]) -> Self {
        let colors: Vec<Rgb> = values.iter().copied().map(Rgb::from_u32).collect();
        Self::from_rgb(&colors)
    }

    /// Decode flat `pos, r, g, b` quadruples. A trailing partial quadruple is
    /// zero-filled.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let stops = bytes
            .chunks(4)
            .map(|chunk| {
                let byte = |i: usize| chunk.get(i).copied().unwrap_or(0);
                PaletteStop::new(byte(0), Rgb::new(byte(1), byte(2), byte(3)))
            })
            .collect();
        Self { stops }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Colors of every stop, in order.
    #[must_use]
    pub fn colors(&self) -> Vec<Rgb> {
        self.stops.iter().map(|s| s.color).collect()
    }

    /// CSS rendering: a solid color for one stop, a horizontal gradient otherwise.
    #[must_use]
    pub fn css_gradient(&self) -> String {
        match self.stops.as_slice() {
            [] => "transparent".to_string(),
            [only] => only.color.css(),
            stops => {
                let parts: Vec<String> = stops.iter().map(|s| s.css_stop()).collect();
                format!("linear-gradient(90deg, {})", parts.join(","))
            }
        }
    }

    /// Copy of this palette with the stop at `index` recolored. Out-of-range
    /// indices leave the palette unchanged; an undecodable color becomes black.
    #[must_use]
    pub fn with_color_at_stop(&self, index: usize, color: Option<Rgb>) -> Self {
        let mut stops = self.stops.clone();
        if let Some(stop) = stops.get_mut(index) {
            stop.color = color.unwrap_or(Rgb::BLACK);
        }
        Self { stops }
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn even_position(index: usize, last: usize) -> u8 {
    if last == 0 {
        return 0;
    }
    ((index as f64 / last as f64) * 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex_str("ff0000").unwrap(), RED);
        assert_eq!(Rgb::from_hex_str("#00FF00").unwrap(), GREEN);
        assert_eq!(Rgb::from_hex_str("#f80").unwrap(), Rgb::new(0xff, 0x88, 0x00));
        assert!(Rgb::from_hex_str("zzzzzz").is_err());
        assert!(Rgb::from_hex_str("12345").is_err());
    }

    #[test]
    fn test_packed_integer() {
        assert_eq!(Rgb::from_u32(0x5500AB), Rgb::new(0x55, 0x00, 0xAB));
        assert_eq!(Rgb::from_u32(0xFF_FF0000), RED);
    }

    #[test]
    fn test_color_input_variants() {
        assert_eq!(ColorInput::Hex("#ff0000".into()).resolve(), Some(RED));
        assert_eq!(ColorInput::Integer(0x00FF00).resolve(), Some(GREEN));
        assert_eq!(ColorInput::Triple([1, 2, 3]).resolve(), Some(Rgb::new(1, 2, 3)));
        assert_eq!(ColorInput::Hex("nope".into()).resolve(), None);
        assert_eq!(
            ColorInput::Hex("nope".into()).resolve_or(Rgb::BLACK),
            Rgb::BLACK
        );
    }

    #[test]
    fn test_slot_color_wire_format() {
        let slots: Vec<SlotColor> = serde_json::from_str("[[255,0,0],[],[1,2,3,4]]").unwrap();
        assert_eq!(slots[0], SlotColor::rgb(RED));
        assert_eq!(slots[1], SlotColor::UNSET);
        assert_eq!(slots[2], SlotColor::rgb(Rgb::new(1, 2, 3)));

        let json = serde_json::to_string(&slots).unwrap();
        assert_eq!(json, "[[255,0,0],[],[1,2,3]]");
    }

    #[test]
    fn test_from_colors_positions() {
        let single = Palette::from_colors(&[Some(RED)], Rgb::BLACK);
        assert_eq!(single.stops, vec![PaletteStop::new(0, RED)]);

        let pair = Palette::from_colors(&[Some(RED), None], Rgb::BLACK);
        assert_eq!(
            pair.stops,
            vec![PaletteStop::new(0, RED), PaletteStop::new(255, Rgb::BLACK)]
        );

        let triple = Palette::from_rgb(&[RED, GREEN, RED]);
        let positions: Vec<u8> = triple.stops.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 127, 255]);
    }

    #[test]
    fn test_from_bytes_keeps_device_order() {
        let palette = Palette::from_bytes(&[0, 255, 0, 0, 200, 0, 0, 255, 100, 0, 255]);
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.stops[1], PaletteStop::new(200, Rgb::new(0, 0, 255)));
        assert_eq!(palette.stops[2], PaletteStop::new(100, Rgb::new(0, 255, 0)));
    }

    #[test]
    fn test_css_gradient() {
        assert_eq!(Palette::from_rgb(&[RED]).css_gradient(), "rgb(255,0,0)");
        assert_eq!(
            Palette::from_rgb(&[RED, GREEN]).css_gradient(),
            "linear-gradient(90deg, rgb(255,0,0) 0%,rgb(0,255,0) 100%)"
        );
        assert_eq!(Palette::default().css_gradient(), "transparent");
    }

    #[test]
    fn test_with_color_at_stop() {
        let palette = Palette::from_rgb(&[RED, RED]);
        let edited = palette.with_color_at_stop(1, Some(GREEN));
        assert_eq!(edited.colors(), vec![RED, GREEN]);
        assert_eq!(edited.stops[1].position, 255);

        let blacked = palette.with_color_at_stop(0, None);
        assert_eq!(blacked.colors(), vec![Rgb::BLACK, RED]);

        assert_eq!(palette.with_color_at_stop(9, Some(GREEN)), palette);
    }
}
