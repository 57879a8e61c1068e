//! Palette derivation with gradients read from the device.

use wled::catalog::derive::{AUTOMATIC, DISTINCT_CUSTOM_COLORS, ONE_CUSTOM_COLOR, PaletteGroupId};
use wled::catalog::effects::{ColorSlot, fx};
use wled::color::{ColorInput, Rgb};
use wled::device::HttpTransport;
use wled::{PanelEvent, WledClient};

use crate::common::FakeDevice;

const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 255, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn client_for(fake: &FakeDevice) -> WledClient<HttpTransport> {
    WledClient::new(HttpTransport::new(&fake.url()).unwrap())
}

#[tokio::test]
async fn test_gradients_are_paged_in() {
    let fake = FakeDevice::start(1).await;
    let client = client_for(&fake);
    client.refresh().await.unwrap();

    // Symbolic entries (14, 16) are skipped.
    assert_eq!(client.load_gradients().await.unwrap(), 2);
    assert_eq!(fake.count("GET /json/palx?page=0"), 1);
    assert_eq!(fake.count("GET /json/palx?page=1"), 1);

    let status = client.current_status().unwrap();
    let groups = status.segment(0).unwrap().palette_groups();
    let gradient = groups.group(PaletteGroupId::Gradient).unwrap();
    let names: Vec<&str> = gradient.palettes.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Sunset", "Rivendell", "Breeze"]);

    let sunset = groups.entry(13).unwrap();
    assert_eq!(sunset.palette.colors(), vec![RED, GREEN, BLUE]);
    assert!(sunset.css_gradient().starts_with("linear-gradient("));

    let rivendell = groups.entry(14).unwrap();
    assert!(rivendell.palette.is_empty());
    assert_eq!(rivendell.css_gradient(), "transparent");
}

#[tokio::test]
async fn test_automatic_palette_follows_effect() {
    let fake = FakeDevice::start(1).await;
    let client = client_for(&fake);
    let status = client.refresh().await.unwrap();

    status
        .segment(0)
        .unwrap()
        .select_effect_index(fx::FIRE_2012)
        .await
        .unwrap();
    let status = client.refresh().await.unwrap();
    let seg = status.segment(0).unwrap();
    assert_eq!(seg.effect_index(), fx::FIRE_2012);

    let automatic = seg.palette_groups().entry(AUTOMATIC).unwrap();
    assert!(automatic.name.starts_with("Automatic ("));
    assert!(!automatic.palette.is_empty());
}

#[tokio::test]
async fn test_custom_palette_tracks_manual_colors() {
    let fake = FakeDevice::start(1).await;
    let client = client_for(&fake);
    let status = client.refresh().await.unwrap();

    status
        .segment(0)
        .unwrap()
        .update_manual_palette_colors(&[
            Some(ColorInput::Hex("#00f".into())),
            Some(ColorInput::Integer(0x00FF00)),
            None,
        ])
        .await
        .unwrap();

    let status = client.refresh().await.unwrap();
    let seg = status.segment(0).unwrap();
    assert_eq!(
        seg.manual_palette_colors().map(|c| c.0),
        [Some(BLUE), Some(GREEN), Some(Rgb::BLACK)]
    );

    let groups = seg.palette_groups();
    let one = groups.entry(ONE_CUSTOM_COLOR).unwrap();
    assert_eq!(one.palette.colors(), vec![BLUE]);
    assert!(groups.is_customizable(DISTINCT_CUSTOM_COLORS));
    assert!(!groups.is_customizable(AUTOMATIC));
}

#[tokio::test]
async fn test_best_custom_palette_and_events() {
    let fake = FakeDevice::start(1).await;
    let client = client_for(&fake);
    let mut events = client.subscribe();
    // Each edit starts from a fresh view so it keeps the previous one.
    for slot in [ColorSlot::Secondary, ColorSlot::Tertiary] {
        let status = client.refresh().await.unwrap();
        status
            .segment(0)
            .unwrap()
            .update_manual_color(slot, None)
            .await
            .unwrap();
    }

    let status = client.refresh().await.unwrap();
    let seg = status.segment(0).unwrap();
    seg.select_best_custom_palette().await.unwrap();
    assert_eq!(fake.writes().last().unwrap()["seg"]["pal"], ONE_CUSTOM_COLOR);

    assert_eq!(
        events.recv().await.unwrap(),
        PanelEvent::ColorPicked {
            segment: 0,
            slot: ColorSlot::Secondary,
            color: None,
        }
    );
    events.recv().await.unwrap();
    assert_eq!(
        events.recv().await.unwrap(),
        PanelEvent::PaletteSelected {
            segment: 0,
            palette: ONE_CUSTOM_COLOR,
        }
    );
}
