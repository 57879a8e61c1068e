//! Built-in FastLED gradients and the firmware's automatic palette choice.

use std::collections::BTreeMap;

use crate::color::Palette;

use super::effects::fx;

/// HTML color names used by the FastLED tables.
mod named {
    pub const BLUE: u32 = 0x0000FF;
    pub const DARK_BLUE: u32 = 0x00008B;
    pub const SKY_BLUE: u32 = 0x87CEEB;
    pub const LIGHT_BLUE: u32 = 0xADD8E6;
    pub const WHITE: u32 = 0xFFFFFF;
    pub const BLACK: u32 = 0x000000;
    pub const MAROON: u32 = 0x800000;
    pub const DARK_RED: u32 = 0x8B0000;
    pub const RED: u32 = 0xFF0000;
    pub const ORANGE: u32 = 0xFFA500;
    pub const MIDNIGHT_BLUE: u32 = 0x191970;
    pub const NAVY: u32 = 0x000080;
    pub const MEDIUM_BLUE: u32 = 0x0000CD;
    pub const SEA_GREEN: u32 = 0x2E8B57;
    pub const TEAL: u32 = 0x008080;
    pub const CADET_BLUE: u32 = 0x5F9EA0;
    pub const DARK_CYAN: u32 = 0x008B8B;
    pub const CORNFLOWER_BLUE: u32 = 0x6495ED;
    pub const AQUAMARINE: u32 = 0x7FFFD4;
    pub const AQUA: u32 = 0x00FFFF;
    pub const LIGHT_SKY_BLUE: u32 = 0x87CEFA;
    pub const DARK_GREEN: u32 = 0x006400;
    pub const DARK_OLIVE_GREEN: u32 = 0x556B2F;
    pub const GREEN: u32 = 0x008000;
    pub const FOREST_GREEN: u32 = 0x228B22;
    pub const OLIVE_DRAB: u32 = 0x6B8E23;
    pub const MEDIUM_AQUAMARINE: u32 = 0x66CDAA;
    pub const LIME_GREEN: u32 = 0x32CD32;
    pub const YELLOW_GREEN: u32 = 0x9ACD32;
    pub const LIGHT_GREEN: u32 = 0x90EE90;
    pub const LAWN_GREEN: u32 = 0x7CFC00;
}

use named::*;

pub const CLOUD_COLORS: [u32; 16] = [
    BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE, DARK_BLUE, BLUE,
    DARK_BLUE, SKY_BLUE, SKY_BLUE, LIGHT_BLUE, WHITE, LIGHT_BLUE, SKY_BLUE,
];

pub const LAVA_COLORS: [u32; 15] = [
    BLACK, MAROON, BLACK, MAROON, DARK_RED, MAROON, DARK_RED, DARK_RED, DARK_RED, RED, ORANGE,
    WHITE, ORANGE, RED, DARK_RED,
];

pub const OCEAN_COLORS: [u32; 16] = [
    MIDNIGHT_BLUE, DARK_BLUE, MIDNIGHT_BLUE, NAVY, DARK_BLUE, MEDIUM_BLUE, SEA_GREEN, TEAL,
    CADET_BLUE, BLUE, DARK_CYAN, CORNFLOWER_BLUE, AQUAMARINE, SEA_GREEN, AQUA, LIGHT_SKY_BLUE,
];

pub const FOREST_COLORS: [u32; 16] = [
    DARK_GREEN, DARK_GREEN, DARK_OLIVE_GREEN, DARK_GREEN, GREEN, FOREST_GREEN, OLIVE_DRAB, GREEN,
    SEA_GREEN, MEDIUM_AQUAMARINE, LIME_GREEN, YELLOW_GREEN, LIGHT_GREEN, LAWN_GREEN,
    MEDIUM_AQUAMARINE, FOREST_GREEN,
];

pub const RAINBOW_COLORS: [u32; 16] = [
    0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A, 0x00AB55,
    0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B,
];

pub const RAINBOW_STRIPE_COLORS: [u32; 16] = [
    0xFF0000, 0x000000, 0xAB5500, 0x000000, 0xABAB00, 0x000000, 0x00FF00, 0x000000, 0x00AB55,
    0x000000, 0x0000FF, 0x000000, 0x5500AB, 0x000000, 0xAB0055, 0x000000,
];

pub const PARTY_COLORS: [u32; 16] = [
    0x5500AB, 0x84007C, 0xB5004B, 0xE5001B, 0xE81700, 0xB84700, 0xAB7700, 0xABAB00, 0xAB5500,
    0xDD2200, 0xF2000E, 0xC2003E, 0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9,
];

pub const HEAT_COLORS: [u32; 16] = [
    0x000000, 0x330000, 0x660000, 0x990000, 0xCC0000, 0xFF0000, 0xFF3300, 0xFF6600, 0xFF9900,
    0xFFCC00, 0xFFFF00, 0xFFFF33, 0xFFFF66, 0xFFFF99, 0xFFFFCC, 0xFFFFFF,
];

/// A fixed gradient compiled into the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinGradient {
    /// Palette id the device uses for this gradient.
    pub id: u8,
    pub name: &'static str,
    pub colors: &'static [u32],
}

impl BuiltinGradient {
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::from_packed(self.colors)
    }
}

/// FastLED gradients in device id order (6..=12).
pub const FASTLED_GRADIENTS: [BuiltinGradient; 7] = [
    BuiltinGradient { id: 6, name: "Party colors", colors: &PARTY_COLORS },
    BuiltinGradient { id: 7, name: "Cloud colors", colors: &CLOUD_COLORS },
    BuiltinGradient { id: 8, name: "Lava colors", colors: &LAVA_COLORS },
    BuiltinGradient { id: 9, name: "Ocean colors", colors: &OCEAN_COLORS },
    BuiltinGradient { id: 10, name: "Forest colors", colors: &FOREST_COLORS },
    BuiltinGradient { id: 11, name: "Rainbow colors", colors: &RAINBOW_COLORS },
    BuiltinGradient { id: 12, name: "Rainbow stripe colors", colors: &RAINBOW_STRIPE_COLORS },
];

pub const HEAT_GRADIENT: BuiltinGradient =
    BuiltinGradient { id: 35, name: "Heat colors", colors: &HEAT_COLORS };

/// First palette id backed by a device gradient table.
pub const FIRST_GRADIENT_ID: u8 = 13;

/// Where the firmware's "Default" palette points for a given effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoPalette {
    /// Palette id the firmware switches to.
    pub target: u8,
    /// Gradient to show when the device did not report `target`.
    pub fallback: BuiltinGradient,
}

/// Resolve the firmware's automatic palette for `effect`.
#[must_use]
pub fn auto_palette(effect: u8) -> AutoPalette {
    let target = match effect {
        fx::FIRE_2012 | fx::NOISE16_3 | fx::SUNRISE => HEAT_GRADIENT.id,
        fx::COLORWAVES | fx::NOISE16_4 => 26,
        fx::FILLNOISE8 => 9,
        fx::NOISE16_1 => 20,
        fx::NOISE16_2 => 43,
        fx::GLITTER => 11,
        fx::FLOW => 6,
        _ => 14,
    };
    let fallback = match target {
        35 => HEAT_GRADIENT,
        9 => FASTLED_GRADIENTS[3],
        11 => FASTLED_GRADIENTS[5],
        _ => FASTLED_GRADIENTS[0],
    };
    AutoPalette { target, fallback }
}

/// Device-reported gradient stops keyed by palette id (`/json/palx`).
///
/// Entries the device describes symbolically (`"c1"`, `"r"`, ...) depend on
/// segment colors and are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradientTable {
    entries: BTreeMap<u8, Palette>,
}

impl GradientTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u8, palette: Palette) {
        self.entries.insert(id, palette);
    }

    #[must_use]
    pub fn get(&self, id: u8) -> Option<&Palette> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_palette_mapping() {
        assert_eq!(auto_palette(fx::FIRE_2012).target, 35);
        assert_eq!(auto_palette(fx::SUNRISE).fallback, HEAT_GRADIENT);
        assert_eq!(auto_palette(fx::COLORWAVES).target, 26);
        assert_eq!(auto_palette(fx::FILLNOISE8).fallback.name, "Ocean colors");
        assert_eq!(auto_palette(fx::NOISE16_2).target, 43);
        assert_eq!(auto_palette(fx::GLITTER).fallback.name, "Rainbow colors");
        assert_eq!(auto_palette(fx::FLOW).target, 6);
        let other = auto_palette(fx::STATIC);
        assert_eq!(other.target, 14);
        assert_eq!(other.fallback.name, "Party colors");
    }

    #[test]
    fn test_builtin_tables() {
        assert_eq!(LAVA_COLORS.len(), 15);
        let ocean = FASTLED_GRADIENTS[3].palette();
        assert_eq!(
            ocean.stops.first().unwrap().color,
            crate::color::Rgb::from_u32(MIDNIGHT_BLUE)
        );
        assert_eq!(ocean.stops.last().unwrap().position, 255);
        let ids: Vec<u8> = FASTLED_GRADIENTS.iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10, 11, 12]);
    }
}
