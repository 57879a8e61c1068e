//! The reqwest transport and client against the HTTP stand-in.

use serde_json::json;

use wled::device::{HttpTransport, PATH_FULL, PATH_STATE_INFO, SegmentPatch, Transport};
use wled::{WledClient, WledError};

use crate::common::{FakeDevice, init_test_logging};

fn client_for(fake: &FakeDevice) -> WledClient<HttpTransport> {
    WledClient::new(HttpTransport::new(&fake.url()).unwrap())
}

#[tokio::test]
async fn test_transport_reads_full_document() {
    init_test_logging();
    let fake = FakeDevice::start(2).await;
    let transport = HttpTransport::new(&fake.url()).unwrap();

    let doc = transport.get_json(PATH_FULL).await.unwrap();
    assert_eq!(doc["info"]["name"], "WLED Mock");
    assert_eq!(doc["state"]["seg"].as_array().unwrap().len(), 2);
    assert_eq!(fake.requests(), vec!["GET /json"]);
}

#[tokio::test]
async fn test_transport_posts_state() {
    let fake = FakeDevice::start(1).await;
    let transport = HttpTransport::new(&fake.url()).unwrap();

    let response = transport
        .post_json(PATH_STATE_INFO, &json!({ "on": false, "bri": 12 }))
        .await
        .unwrap();
    assert_eq!(response["state"]["on"], false);
    assert_eq!(response["state"]["bri"], 12);
    assert!(response.get("effects").is_none());
    assert_eq!(fake.writes(), vec![json!({ "on": false, "bri": 12 })]);
}

#[tokio::test]
async fn test_transport_reports_http_status() {
    let fake = FakeDevice::start(1).await;
    let transport = HttpTransport::new(&fake.url()).unwrap();

    fake.fail_next(1);
    let err = transport.get_json(PATH_FULL).await.unwrap_err();
    assert!(matches!(err, WledError::Status { status: 500, .. }));

    let err = transport.get_json("/json/nope").await.unwrap_err();
    match err {
        WledError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/json/nope"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_device_is_http_error() {
    // Port 9 on loopback is closed in test environments.
    let transport = HttpTransport::new("http://127.0.0.1:9").unwrap();
    let err = transport.get_json(PATH_FULL).await.unwrap_err();
    assert!(matches!(err, WledError::Http(_)));
}

#[tokio::test]
async fn test_client_status_over_http() {
    let fake = FakeDevice::start(2).await;
    let client = client_for(&fake);

    let status = client.ensure_fresh().await.unwrap();
    assert_eq!(status.name(), "WLED Mock");
    assert_eq!(status.led_count(), 60);
    assert_eq!(status.segments().len(), 2);
    assert_eq!(status.segment(1).unwrap().start_led_index(), 30);

    // Within the staleness window the cache answers.
    client.ensure_fresh().await.unwrap();
    assert_eq!(fake.count("GET /json"), 1);
}

#[tokio::test]
async fn test_segment_write_sends_full_definition() {
    let fake = FakeDevice::start(2).await;
    let client = client_for(&fake);
    let status = client.refresh().await.unwrap();

    status.segment(1).unwrap().update_effect_speed(200).await.unwrap();

    let writes = fake.writes();
    assert_eq!(writes.len(), 1);
    let seg = &writes[0]["seg"];
    assert_eq!(seg["id"], 1);
    assert_eq!(seg["sx"], 200);
    assert_eq!(seg["start"], 30);
    assert_eq!(seg["stop"], 60);
    assert_eq!(seg["fx"], 0);
    assert!(seg.get("len").is_none());
    assert_eq!(writes[0]["v"], true);

    // The write response is merged into the cache.
    let status = client.current_status().unwrap();
    assert_eq!(status.segment(1).unwrap().effect_speed(), 200);
    assert_eq!(fake.document()["state"]["seg"][1]["sx"], 200);
}

#[tokio::test]
async fn test_concurrent_edits_coalesce() {
    let fake = FakeDevice::start(1).await;
    let client = client_for(&fake);
    let status = client.refresh().await.unwrap();
    let seg = status.segment(0).unwrap();

    let (a, b, c, d) = tokio::join!(
        seg.update_effect_speed(10),
        seg.update_effect_speed(20),
        seg.update_effect_intensity(30),
        seg.update_effect_speed(40),
    );
    for result in [a, b, c, d] {
        result.unwrap();
    }

    let writes = fake.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0]["seg"]["sx"], 10);
    assert_eq!(writes[1]["seg"]["sx"], 40);
    assert_eq!(writes[1]["seg"]["ix"], 30);
    assert_eq!(client.coalescer().active_lanes(), 0);
}

#[tokio::test]
async fn test_add_and_delete_segments() {
    let fake = FakeDevice::start(2).await;
    let client = client_for(&fake);

    let id = client
        .add_segment(SegmentPatch {
            start: Some(10),
            stop: Some(20),
            fx: Some(2),
            ..SegmentPatch::default()
        })
        .await
        .unwrap();
    assert_eq!(id, 2);
    assert_eq!(fake.document()["state"]["seg"][2]["len"], 10);

    client.delete_segment(0).await.unwrap();
    let status = client.refresh().await.unwrap();
    let ids: Vec<u8> = status.segments().iter().map(|s| s.segment_id()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_power_and_brightness_over_http() {
    let fake = FakeDevice::start(1).await;
    let client = client_for(&fake);

    client.set_power(false).await.unwrap();
    client.set_brightness(77).await.unwrap();

    assert_eq!(
        fake.writes(),
        vec![json!({ "on": false }), json!({ "bri": 77 })]
    );
    let snapshot = client.snapshot();
    let state = snapshot.state.as_ref().unwrap();
    assert!(!state.on);
    assert_eq!(state.bri, 77);
}

#[tokio::test]
async fn test_write_failure_reaches_caller_and_keeps_cache() {
    let fake = FakeDevice::start(1).await;
    let client = client_for(&fake);
    let status = client.refresh().await.unwrap();

    fake.fail_next(1);
    let err = status
        .segment(0)
        .unwrap()
        .update_brightness(5)
        .await
        .unwrap_err();
    assert!(matches!(err, WledError::Status { status: 500, .. }));
    assert_eq!(
        client.current_status().unwrap().segment(0).unwrap().brightness(),
        255
    );
}
