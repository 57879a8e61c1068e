//! Live preview polling over HTTP.

use std::time::Duration;

use wled::color::Rgb;
use wled::device::HttpTransport;
use wled::image_ops::ScaleFilter;
use wled::live::LiveConfig;
use wled::WledClient;

use crate::common::FakeDevice;

fn fast() -> LiveConfig {
    LiveConfig {
        interval: Duration::from_millis(10),
        history_lines: 4,
    }
}

#[tokio::test]
async fn test_frames_fill_history() {
    let fake = FakeDevice::start(1).await;
    fake.push_live_frame(&["ff0000", "00ff00", "0000ff"]);
    let client = WledClient::new(HttpTransport::new(&fake.url()).unwrap());

    let live = client.live_preview(fast());
    live.set_enabled(true);
    tokio::time::timeout(Duration::from_secs(5), live.wait_for_frames(6))
        .await
        .expect("frames within timeout")
        .unwrap();
    live.set_enabled(false);

    let frame = live.last_frame().unwrap();
    assert_eq!(
        frame.colors(),
        vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]
    );
    let history = live.history();
    assert_eq!(history.len(), 4);
    assert_eq!(history.width(), 3);

    let image = live.history_image().unwrap();
    assert_eq!((image.width(), image.height()), (3, 4));
    assert!(live.current_line_data_url().unwrap().starts_with("data:image/png;base64,"));

    // Polling never touches the state endpoints.
    assert_eq!(fake.count("GET /json"), 0);
}

#[tokio::test]
async fn test_device_error_stops_feed() {
    let fake = FakeDevice::start(1).await;
    let client = WledClient::new(HttpTransport::new(&fake.url()).unwrap());
    let live = client.live_preview(fast());

    fake.fail_next(1);
    live.set_enabled(true);
    tokio::time::timeout(Duration::from_secs(5), async {
        while live.is_enabled() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("feed stops after an error");
    assert_eq!(live.frames_received(), 0);

    live.set_enabled(true);
    tokio::time::timeout(Duration::from_secs(5), live.wait_for_frames(1))
        .await
        .expect("restarted feed delivers frames")
        .unwrap();
}

#[tokio::test]
async fn test_save_history_png() {
    let fake = FakeDevice::start(1).await;
    fake.push_live_frame(&["102030", "405060"]);
    let client = WledClient::new(HttpTransport::new(&fake.url()).unwrap());
    let live = client.live_preview(fast());

    live.set_enabled(true);
    tokio::time::timeout(Duration::from_secs(5), live.wait_for_frames(2))
        .await
        .expect("frames within timeout")
        .unwrap();
    live.set_enabled(false);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("live.png");
    live.save_history(&path, 3, ScaleFilter::Nearest).unwrap();

    let saved = image::open(&path).unwrap().to_rgb8();
    assert_eq!(saved.width(), 6);
    assert_eq!(saved.get_pixel(0, 0).0, [0x10, 0x20, 0x30]);
    assert_eq!(saved.get_pixel(5, 0).0, [0x40, 0x50, 0x60]);
}
