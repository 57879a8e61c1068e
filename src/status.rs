//! Friendly views over a device snapshot.
//!
//! [`DeviceStatus`] wraps one immutable snapshot. Its [`SegmentView`]s expose
//! descriptive getters in place of the terse wire codes, memoize derived
//! values such as the palette groups, and offer mutations that go through
//! the client's write coalescer.

use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::catalog::derive::{DISTINCT_CUSTOM_COLORS, ONE_CUSTOM_COLOR};
use crate::catalog::{
    ColorSlot, EffectInfo, GradientTable, PaletteEntry, PaletteGroup, PaletteGroups,
    derive_palette_groups, effect_info,
};
use crate::client::{PanelEvent, SegmentWriter};
use crate::color::{ColorInput, Rgb, SlotColor};
use crate::device::{DeviceInfo, DeviceSnapshot, GlobalState, Segment, SegmentPatch, Transport};
use crate::error::{Result, WledError};

/// Status of the whole device at one point in time.
///
/// Cheap to clone. Only built from complete snapshots.
pub struct DeviceStatus<T> {
    inner: Arc<StatusInner<T>>,
}

struct StatusInner<T> {
    writer: SegmentWriter<T>,
    snapshot: Arc<DeviceSnapshot>,
    gradients: Arc<GradientTable>,
    segments: OnceLock<Vec<SegmentView<T>>>,
}

impl<T> Clone for DeviceStatus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> DeviceStatus<T> {
    pub(crate) fn new(
        writer: SegmentWriter<T>,
        snapshot: Arc<DeviceSnapshot>,
        gradients: Arc<GradientTable>,
    ) -> Self {
        Self {
            inner: Arc::new(StatusInner {
                writer,
                snapshot,
                gradients,
                segments: OnceLock::new(),
            }),
        }
    }

    pub(crate) fn is_built_from(
        &self,
        snapshot: &Arc<DeviceSnapshot>,
        gradients: &Arc<GradientTable>,
    ) -> bool {
        Arc::ptr_eq(&self.inner.snapshot, snapshot) && Arc::ptr_eq(&self.inner.gradients, gradients)
    }

    /// Whether both handles share the same memoized state.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    #[must_use]
    pub fn snapshot(&self) -> &DeviceSnapshot {
        &self.inner.snapshot
    }

    #[must_use]
    pub fn state(&self) -> Option<&GlobalState> {
        self.inner.snapshot.state.as_ref()
    }

    #[must_use]
    pub fn info(&self) -> Option<&DeviceInfo> {
        self.inner.snapshot.info.as_ref()
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state().is_some_and(|s| s.on)
    }

    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.state().map_or(0, |s| s.bri)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.info().map_or("", |i| i.name.as_str())
    }

    #[must_use]
    pub fn led_count(&self) -> u16 {
        self.info().map_or(0, |i| i.leds.count)
    }

    #[must_use]
    pub fn effect_names(&self) -> &[String] {
        self.inner.snapshot.effect_names()
    }

    #[must_use]
    pub fn palette_names(&self) -> &[String] {
        self.inner.snapshot.palette_names()
    }

    /// One view per segment, in device order.
    pub fn segments(&self) -> &[SegmentView<T>] {
        self.inner.segments.get_or_init(|| {
            self.inner
                .snapshot
                .segments()
                .iter()
                .map(|segment| {
                    SegmentView::new(
                        self.inner.writer.clone(),
                        segment.clone(),
                        Arc::clone(&self.inner.snapshot),
                        Arc::clone(&self.inner.gradients),
                    )
                })
                .collect()
        })
    }

    #[must_use]
    pub fn segment(&self, id: u8) -> Option<&SegmentView<T>> {
        self.segments().iter().find(|s| s.segment_id() == id)
    }

    /// Like [`segment`](Self::segment) but with a descriptive error.
    pub fn require_segment(&self, id: u8) -> Result<&SegmentView<T>> {
        self.segment(id).ok_or(WledError::SegmentNotFound {
            id,
            count: self.segments().len(),
        })
    }
}

/// Segment with friendly getters, memoized derived values and mutations.
pub struct SegmentView<T> {
    writer: SegmentWriter<T>,
    segment: Segment,
    snapshot: Arc<DeviceSnapshot>,
    gradients: Arc<GradientTable>,
    palette_groups: OnceLock<PaletteGroups>,
    effect: OnceLock<Option<EffectView>>,
}

impl<T: Transport> SegmentView<T> {
    fn new(
        writer: SegmentWriter<T>,
        segment: Segment,
        snapshot: Arc<DeviceSnapshot>,
        gradients: Arc<GradientTable>,
    ) -> Self {
        Self {
            writer,
            segment,
            snapshot,
            gradients,
            palette_groups: OnceLock::new(),
            effect: OnceLock::new(),
        }
    }

    /// Underlying wire representation.
    #[must_use]
    pub fn raw(&self) -> &Segment {
        &self.segment
    }

    // === Getters ===

    pub fn segment_id(&self) -> u8 {
        self.segment.id
    }

    pub fn start_led_index(&self) -> u16 {
        self.segment.start
    }

    /// Exclusive end index.
    pub fn end_led_index(&self) -> u16 {
        self.segment.stop
    }

    pub fn effect_index(&self) -> u8 {
        self.segment.fx
    }

    pub fn effect_speed(&self) -> u8 {
        self.segment.sx
    }

    pub fn effect_intensity(&self) -> u8 {
        self.segment.ix
    }

    pub fn palette_index(&self) -> u8 {
        self.segment.pal
    }

    pub fn group_index(&self) -> u8 {
        self.segment.grp
    }

    pub fn spacing(&self) -> u8 {
        self.segment.spc
    }

    pub fn brightness(&self) -> u8 {
        self.segment.bri
    }

    pub fn led_count(&self) -> u16 {
        self.segment.len
    }

    pub fn is_active(&self) -> bool {
        self.segment.on
    }

    pub fn is_mirrored(&self) -> bool {
        self.segment.mi
    }

    pub fn is_reversed(&self) -> bool {
        self.segment.rev
    }

    pub fn is_selected(&self) -> bool {
        self.segment.sel
    }

    /// The three manual color slots; missing slots read as unset.
    pub fn manual_palette_colors(&self) -> [SlotColor; 3] {
        [self.segment.color(0), self.segment.color(1), self.segment.color(2)]
    }

    /// Device-reported name of the running effect.
    pub fn effect_name(&self) -> Option<&str> {
        self.snapshot
            .effect_names()
            .get(usize::from(self.segment.fx))
            .map(String::as_str)
    }

    // === Derived (memoized) ===

    pub fn palette_groups(&self) -> &PaletteGroups {
        self.palette_groups.get_or_init(|| {
            derive_palette_groups(
                self.segment.fx,
                &self.manual_palette_colors(),
                self.snapshot.palette_names(),
                &self.gradients,
            )
        })
    }

    pub fn palettes(&self) -> Vec<&PaletteEntry> {
        self.palette_groups().entries().collect()
    }

    pub fn customizable_palette_groups(&self) -> Vec<&PaletteGroup> {
        self.palette_groups().customizable().collect()
    }

    pub fn preset_palette_groups(&self) -> Vec<&PaletteGroup> {
        self.palette_groups().presets().collect()
    }

    pub fn selected_palette(&self) -> Option<&PaletteEntry> {
        self.palette_groups().entry(self.segment.pal)
    }

    pub fn is_custom_palette_selected(&self) -> bool {
        self.palette_groups().is_customizable(self.segment.pal)
    }

    pub fn is_preset_palette_selected(&self) -> bool {
        self.selected_palette().is_some() && !self.is_custom_palette_selected()
    }

    /// Catalog view of the running effect, `None` for unknown effect ids.
    pub fn effect_info(&self) -> Option<&EffectView> {
        self.effect
            .get_or_init(|| {
                effect_info(self.segment.fx)
                    .map(|info| EffectView::new(info, self.manual_palette_colors()))
            })
            .as_ref()
    }

    // === Mutations ===

    /// Send an arbitrary patch for this segment.
    pub async fn update(&self, patch: SegmentPatch) -> Result<()> {
        self.writer.update_segment(self.segment.id, patch).await
    }

    pub async fn update_effect_speed(&self, speed: u8) -> Result<()> {
        self.update(SegmentPatch {
            sx: Some(speed),
            ..SegmentPatch::default()
        })
        .await
    }

    pub async fn update_effect_intensity(&self, intensity: u8) -> Result<()> {
        self.update(SegmentPatch {
            ix: Some(intensity),
            ..SegmentPatch::default()
        })
        .await
    }

    pub async fn update_brightness(&self, bri: u8) -> Result<()> {
        self.update(SegmentPatch {
            bri: Some(bri),
            ..SegmentPatch::default()
        })
        .await
    }

    pub async fn set_active(&self, on: bool) -> Result<()> {
        self.update(SegmentPatch {
            on: Some(on),
            ..SegmentPatch::default()
        })
        .await
    }

    /// Select palette `id`. Selecting the current palette sends nothing.
    pub async fn select_palette(&self, id: u8) -> Result<()> {
        if id == self.segment.pal {
            return Ok(());
        }
        self.writer.emit(PanelEvent::PaletteSelected {
            segment: self.segment.id,
            palette: id,
        });
        self.update(SegmentPatch::palette(id)).await
    }

    pub async fn select_effect(&self, effect: &EffectInfo) -> Result<()> {
        self.select_effect_index(effect.wled_index).await
    }

    pub async fn select_effect_index(&self, fx: u8) -> Result<()> {
        self.writer.emit(PanelEvent::EffectSelected {
            segment: self.segment.id,
            effect: fx,
        });
        self.update(SegmentPatch::effect(fx)).await
    }

    /// Replace all manual colors. Missing or undecodable inputs become black.
    pub async fn update_manual_palette_colors(
        &self,
        colors: &[Option<ColorInput>],
    ) -> Result<()> {
        let slots = colors
            .iter()
            .map(|input| {
                SlotColor::rgb(
                    input
                        .as_ref()
                        .map_or(Rgb::BLACK, |c| c.resolve_or(Rgb::BLACK)),
                )
            })
            .collect();
        self.update(SegmentPatch::colors(slots)).await
    }

    /// Set one manual color slot; `None` unsets it, undecodable input is black.
    pub async fn update_manual_color(
        &self,
        slot: ColorSlot,
        color: Option<ColorInput>,
    ) -> Result<()> {
        let resolved = color.map(|c| c.resolve_or(Rgb::BLACK));
        self.writer.emit(PanelEvent::ColorPicked {
            segment: self.segment.id,
            slot,
            color: resolved,
        });

        let mut slots = self.manual_palette_colors().to_vec();
        slots[slot.index()] = SlotColor(resolved);
        self.update(SegmentPatch::colors(slots)).await
    }

    /// Distinct Custom Colors when a second or third color is set,
    /// otherwise One Custom Color.
    pub async fn select_best_custom_palette(&self) -> Result<()> {
        let [_, second, third] = self.manual_palette_colors();
        let target = if second.is_set() || third.is_set() {
            DISTINCT_CUSTOM_COLORS
        } else {
            ONE_CUSTOM_COLOR
        };
        self.select_palette(target).await
    }

    /// The firmware's automatic palette.
    pub async fn select_best_preset_palette(&self) -> Result<()> {
        self.select_palette(crate::catalog::derive::AUTOMATIC).await
    }

    /// Delete this segment on the device. This view is left unchanged.
    pub async fn delete(&self) -> Result<()> {
        self.writer.delete_segment(self.segment.id).await
    }
}

/// Effect metadata bound to one segment's colors.
#[derive(Debug, Clone, Serialize)]
pub struct EffectView {
    #[serde(flatten)]
    pub info: &'static EffectInfo,
    pub colors: Vec<EffectColorView>,
    pub palette: Option<PaletteInfo>,
}

impl EffectView {
    fn new(info: &'static EffectInfo, current: [SlotColor; 3]) -> Self {
        let colors: Vec<EffectColorView> = ColorSlot::ALL
            .into_iter()
            .filter_map(|slot| {
                let label = info.color(slot).label_or(slot.generic_label())?;
                Some(EffectColorView {
                    slot,
                    label,
                    is_palette_default: info.default_palette_uses_color == Some(slot),
                    current_color: current[slot.index()].0,
                })
            })
            .collect();

        // Custom palette colors would double up with effect colors.
        let palette = info.palette.label_or("Palette").map(|label| PaletteInfo {
            label,
            allow_custom_colors: colors.is_empty(),
        });

        Self {
            info,
            colors,
            palette,
        }
    }

    pub fn speed_label(&self) -> Option<&'static str> {
        self.info.speed.label_or("Speed")
    }

    pub fn intensity_label(&self) -> Option<&'static str> {
        self.info.intensity.label_or("Intensity")
    }

    pub fn color_info(&self, slot: ColorSlot) -> Option<&EffectColorView> {
        self.colors.iter().find(|c| c.slot == slot)
    }
}

/// One color input an effect exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectColorView {
    pub slot: ColorSlot,
    pub label: &'static str,
    /// Whether this color feeds the effect's default palette.
    pub is_palette_default: bool,
    pub current_color: Option<Rgb>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaletteInfo {
    pub label: &'static str,
    pub allow_custom_colors: bool,
}
