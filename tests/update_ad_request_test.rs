use vistar_config::{AdConfig, AdRequest, DeviceAttribute, DisplayArea, ParamMap, params};

fn vistar_params() -> ParamMap {
    params::from_json(
        r#"{
            "vistar.url": "staging-url",
            "vistar.api_key": "api-key",
            "vistar.network_id": "network-id",
            "vistar.venue_id": "venue-id",
            "vistar.direct_connection": "true",
            "vistar.latitude": "45.5",
            "vistar.longitude": "44.4",
            "vistar.mime_types": "a,b,c",
            "vistar.width": "100",
            "vistar.height": "200",
            "vistar.allow_audio": "true",
            "vistar.static_duration": "9"
        }"#,
    )
    .expect("valid parameter json")
}

#[test]
fn update_ad_request_appends_defaults_after_caller_entries() {
    let conf = AdConfig::parse(&vistar_params());
    assert_eq!(conf.base_request().display_time, 0);

    let mut req = AdRequest {
        display_areas: vec![DisplayArea {
            id: "d1".into(),
            width: 500,
            height: 500,
            allow_audio: false,
            supported_media: vec!["image".into()],
            ..Default::default()
        }],
        device_attributes: vec![
            DeviceAttribute::new("attr1", "value1"),
            DeviceAttribute::new("attr2", "value2"),
        ],
        ..Default::default()
    };

    conf.update_ad_request(&mut req);

    assert_eq!(req.api_key, "api-key");
    assert_eq!(req.network_id, "network-id");
    assert_eq!(req.device_id, "venue-id");
    assert_eq!(req.venue_id, "venue-id");
    assert!(req.direct_connection);
    assert_eq!(req.latitude, 45.5);
    assert_eq!(req.longitude, 44.4);
    assert_ne!(req.display_time, 0);
    assert_eq!(req.number_of_screens, 1);

    assert_eq!(req.display_areas.len(), 2);
    let caller = &req.display_areas[0];
    assert_eq!(caller.id, "d1");
    assert_eq!(caller.width, 500);
    assert_eq!(caller.height, 500);
    assert!(!caller.allow_audio);
    assert_eq!(caller.supported_media, vec!["image"]);
    assert_eq!(caller.static_duration, 0);

    let appended = &req.display_areas[1];
    assert_eq!(appended.width, 100);
    assert_eq!(appended.height, 200);
    assert!(appended.allow_audio);
    assert_eq!(appended.supported_media, vec!["a", "b", "c"]);
    assert_eq!(appended.static_duration, 9);

    assert_eq!(req.device_attributes.len(), 4);
    assert_eq!(req.device_attributes[0].name, "attr1");
    assert_eq!(req.device_attributes[1].name, "attr2");
    assert_eq!(&req.device_attributes[2..], &conf.base_request().device_attributes[..]);
}

#[test]
fn finalised_request_serializes_for_the_ad_endpoint() {
    let conf = AdConfig::parse(&vistar_params());
    let json = serde_json::to_value(conf.ad_request()).unwrap();

    assert_eq!(json["api_key"], "api-key");
    assert_eq!(json["venue_id"], json["device_id"]);
    assert_eq!(json["display_area"][0]["supported_media"][1], "b");
    assert_eq!(json["device_attribute"].as_array().map(Vec::len), Some(2));
}
