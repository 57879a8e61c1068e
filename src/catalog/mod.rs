//! Static effect and palette knowledge.
//!
//! - [`effects`]: per-effect metadata keyed by firmware effect id
//! - [`palettes`]: FastLED gradients, the automatic palette mapping and
//!   device-reported gradient tables
//! - [`derive`]: the palette groups offered for a particular segment

pub mod derive;
pub mod effects;
pub mod palettes;

pub use derive::{PaletteEntry, PaletteGroup, PaletteGroupId, PaletteGroups, derive_palette_groups};
pub use effects::{ColorSlot, EFFECTS, EffectInfo, OptionUse, effect_info};
pub use palettes::{AutoPalette, BuiltinGradient, GradientTable, auto_palette};
