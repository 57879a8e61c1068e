//! Palette choices offered for a segment.
//!
//! The firmware numbers its palettes 0..N: two dynamic entries, four built
//! from the segment's manual colors, the seven FastLED gradients and then
//! every gradient the device reports. [`derive_palette_groups`] rebuilds that
//! list for one segment so each entry can be previewed before it is picked.

use serde::Serialize;

use crate::color::{Palette, Rgb, SlotColor};

use super::palettes::{FASTLED_GRADIENTS, FIRST_GRADIENT_ID, GradientTable, auto_palette};

pub const AUTOMATIC: u8 = 0;
pub const RANDOM: u8 = 1;
pub const ONE_CUSTOM_COLOR: u8 = 2;
pub const TWO_CUSTOM_COLORS: u8 = 3;
pub const THREE_CUSTOM_COLORS: u8 = 4;
pub const DISTINCT_CUSTOM_COLORS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteGroupId {
    Dynamic,
    UserDefined,
    FastLed,
    Gradient,
}

/// One selectable palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    /// Value written to `seg.pal`.
    pub id: u8,
    pub name: String,
    pub palette: Palette,
    /// Manual color slots this entry lets the user edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picker_colors: Option<Vec<Option<Rgb>>>,
}

impl PaletteEntry {
    fn fixed(id: u8, name: impl Into<String>, palette: Palette) -> Self {
        Self {
            id,
            name: name.into(),
            palette,
            picker_colors: None,
        }
    }

    fn custom(id: u8, name: &str, palette: Palette, pickers: &[Option<Rgb>]) -> Self {
        Self {
            id,
            name: name.to_string(),
            palette,
            picker_colors: Some(pickers.to_vec()),
        }
    }

    #[must_use]
    pub fn css_gradient(&self) -> String {
        self.palette.css_gradient()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteGroup {
    pub id: PaletteGroupId,
    pub name: &'static str,
    /// Whether entries follow the segment's manual colors.
    pub customizable: bool,
    pub palettes: Vec<PaletteEntry>,
}

/// The four palette groups in device id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PaletteGroups {
    groups: Vec<PaletteGroup>,
}

impl PaletteGroups {
    #[must_use]
    pub fn groups(&self) -> &[PaletteGroup] {
        &self.groups
    }

    #[must_use]
    pub fn group(&self, id: PaletteGroupId) -> Option<&PaletteGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Every entry, flattened in id order.
    pub fn entries(&self) -> impl Iterator<Item = &PaletteEntry> {
        self.groups.iter().flat_map(|g| g.palettes.iter())
    }

    #[must_use]
    pub fn entry(&self, id: u8) -> Option<&PaletteEntry> {
        self.entries().find(|e| e.id == id)
    }

    pub fn customizable(&self) -> impl Iterator<Item = &PaletteGroup> {
        self.groups.iter().filter(|g| g.customizable)
    }

    pub fn presets(&self) -> impl Iterator<Item = &PaletteGroup> {
        self.groups.iter().filter(|g| !g.customizable)
    }

    #[must_use]
    pub fn is_customizable(&self, id: u8) -> bool {
        self.customizable()
            .any(|g| g.palettes.iter().any(|e| e.id == id))
    }
}

/// Build the palette list for a segment running `effect` with `colors`.
///
/// `palette_names` is the device's `palettes` list; entries from id 13 on
/// become gradient palettes whose stops come from `gradients` (empty when
/// the device has not described them).
#[must_use]
pub fn derive_palette_groups(
    effect: u8,
    colors: &[SlotColor],
    palette_names: &[String],
    gradients: &GradientTable,
) -> PaletteGroups {
    let slot = |i: usize| colors.get(i).and_then(|c| c.0);
    let (c1, c2, c3) = (slot(0), slot(1), slot(2));
    let all = [c1, c2, c3];

    let party = FASTLED_GRADIENTS[0].palette();

    let distinct = if c3.is_some() {
        let mut arrangement = vec![c1; 5];
        arrangement.extend([c2; 5]);
        arrangement.extend([c3; 5]);
        arrangement.push(c1);
        arrangement
    } else {
        let mut arrangement = vec![c1; 8];
        arrangement.extend([c2; 8]);
        arrangement
    };

    let user_defined = vec![
        PaletteEntry::custom(
            ONE_CUSTOM_COLOR,
            "One Custom Color",
            Palette::from_colors(&all[..1], Rgb::BLACK),
            &all[..1],
        ),
        PaletteEntry::custom(
            TWO_CUSTOM_COLORS,
            "Two Custom Colors",
            Palette::from_colors(&all[..2], Rgb::BLACK),
            &all[..2],
        ),
        PaletteEntry::custom(
            THREE_CUSTOM_COLORS,
            "Three Custom Colors",
            Palette::from_colors(&all, Rgb::BLACK),
            &all,
        ),
        PaletteEntry::custom(
            DISTINCT_CUSTOM_COLORS,
            "Distinct Custom Colors",
            Palette::from_colors(&distinct, Rgb::BLACK),
            &all,
        ),
    ];

    let fast_led: Vec<PaletteEntry> = FASTLED_GRADIENTS
        .iter()
        .map(|g| PaletteEntry::fixed(g.id, g.name, g.palette()))
        .collect();

    let gradient: Vec<PaletteEntry> = palette_names
        .iter()
        .enumerate()
        .skip(usize::from(FIRST_GRADIENT_ID))
        .filter_map(|(index, name)| {
            let id = u8::try_from(index).ok()?;
            let palette = gradients.get(id).cloned().unwrap_or_default();
            Some(PaletteEntry::fixed(id, name.clone(), palette))
        })
        .collect();

    let automatic = {
        let auto = auto_palette(effect);
        let known = fast_led
            .iter()
            .chain(gradient.iter())
            .find(|e| e.id == auto.target && !e.palette.is_empty());
        let (name, palette) = match known {
            Some(entry) => (entry.name.clone(), entry.palette.clone()),
            // Built-in stops carry the built-in name.
            None => (auto.fallback.name.to_string(), auto.fallback.palette()),
        };
        PaletteEntry::fixed(AUTOMATIC, format!("Automatic ({name})"), palette)
    };

    PaletteGroups {
        groups: vec![
            PaletteGroup {
                id: PaletteGroupId::Dynamic,
                name: "Dynamic",
                customizable: false,
                palettes: vec![automatic, PaletteEntry::fixed(RANDOM, "Random", party)],
            },
            PaletteGroup {
                id: PaletteGroupId::UserDefined,
                name: "Custom Palette Styles",
                customizable: true,
                palettes: user_defined,
            },
            PaletteGroup {
                id: PaletteGroupId::FastLed,
                name: "Fast LED Palettes",
                customizable: false,
                palettes: fast_led,
            },
            PaletteGroup {
                id: PaletteGroupId::Gradient,
                name: "Gradient Palettes",
                customizable: false,
                palettes: gradient,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::effects::fx;
    use crate::catalog::palettes::HEAT_GRADIENT;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn slots(colors: &[Option<Rgb>]) -> Vec<SlotColor> {
        colors.iter().map(|c| SlotColor(*c)).collect()
    }

    fn names() -> Vec<String> {
        [
            "Default",
            "* Random Cycle",
            "* Color 1",
            "* Colors 1&2",
            "* Color Gradient",
            "* Colors Only",
            "Party",
            "Cloud",
            "Lava",
            "Ocean",
            "Forest",
            "Rainbow",
            "Rainbow Bands",
            "Sunset",
            "Rivendell",
        ]
        .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_fire_2012_uses_heat() {
        let groups = derive_palette_groups(fx::FIRE_2012, &[], &[], &GradientTable::new());
        let auto = groups.entry(AUTOMATIC).unwrap();
        assert_eq!(auto.palette, HEAT_GRADIENT.palette());
        assert_eq!(auto.name, "Automatic (Heat colors)");
    }

    #[test]
    fn test_auto_prefers_device_gradient() {
        let mut table = GradientTable::new();
        table.insert(14, Palette::from_rgb(&[RED, BLUE]));
        let groups = derive_palette_groups(fx::STATIC, &[], &names(), &table);
        let auto = groups.entry(AUTOMATIC).unwrap();
        assert_eq!(auto.name, "Automatic (Rivendell)");
        assert_eq!(auto.palette.colors(), vec![RED, BLUE]);
    }

    #[test]
    fn test_auto_fallback_keeps_builtin_name() {
        // The device names palette 14 but reported no stops for it.
        let groups = derive_palette_groups(fx::STATIC, &[], &names(), &GradientTable::new());
        let auto = groups.entry(AUTOMATIC).unwrap();
        assert_eq!(auto.name, "Automatic (Party colors)");
        assert_eq!(auto.palette, FASTLED_GRADIENTS[0].palette());
    }

    #[test]
    fn test_auto_fastled_target() {
        let groups = derive_palette_groups(fx::FLOW, &[], &[], &GradientTable::new());
        assert_eq!(groups.entry(AUTOMATIC).unwrap().name, "Automatic (Party colors)");
    }

    #[test]
    fn test_one_custom_color() {
        let groups = derive_palette_groups(
            fx::STATIC,
            &slots(&[Some(RED)]),
            &[],
            &GradientTable::new(),
        );
        let one = groups.entry(ONE_CUSTOM_COLOR).unwrap();
        assert_eq!(one.palette.len(), 1);
        assert_eq!(one.palette.stops[0].color, RED);
        assert_eq!(one.palette.stops[0].position, 0);
        assert_eq!(one.picker_colors, Some(vec![Some(RED)]));
    }

    #[test]
    fn test_distinct_with_three_colors() {
        let groups = derive_palette_groups(
            fx::STATIC,
            &slots(&[Some(RED), Some(GREEN), Some(BLUE)]),
            &[],
            &GradientTable::new(),
        );
        let distinct = groups.entry(DISTINCT_CUSTOM_COLORS).unwrap().palette.colors();
        let mut expected = vec![RED; 5];
        expected.extend([GREEN; 5]);
        expected.extend([BLUE; 5]);
        expected.push(RED);
        assert_eq!(distinct, expected);
    }

    #[test]
    fn test_distinct_with_two_colors() {
        let groups = derive_palette_groups(
            fx::STATIC,
            &slots(&[Some(RED), Some(GREEN), None]),
            &[],
            &GradientTable::new(),
        );
        let distinct = groups.entry(DISTINCT_CUSTOM_COLORS).unwrap().palette.colors();
        let mut expected = vec![RED; 8];
        expected.extend([GREEN; 8]);
        assert_eq!(distinct, expected);
    }

    #[test]
    fn test_missing_colors_are_black() {
        let groups = derive_palette_groups(fx::STATIC, &[], &[], &GradientTable::new());
        let three = groups.entry(THREE_CUSTOM_COLORS).unwrap();
        assert_eq!(three.palette.colors(), vec![Rgb::BLACK; 3]);
    }

    #[test]
    fn test_group_layout() {
        let groups = derive_palette_groups(fx::STATIC, &[], &names(), &GradientTable::new());
        let ids: Vec<u8> = groups.entries().map(|e| e.id).collect();
        assert_eq!(ids, (0..=14).collect::<Vec<u8>>());
        assert!(groups.is_customizable(DISTINCT_CUSTOM_COLORS));
        assert!(!groups.is_customizable(RANDOM));
        assert_eq!(groups.customizable().count(), 1);
        assert_eq!(groups.presets().count(), 3);

        let sunset = groups.entry(13).unwrap();
        assert_eq!(sunset.name, "Sunset");
        assert!(sunset.palette.is_empty());
    }
}
