use crate::helpers::utilities::{controller_document, init, teardown};
use avi_models::codec::{from_json, from_json_value, from_yaml, to_json, to_yaml};
use avi_models::io_models::object_type::OBJECT_TYPES;
use avi_models::{AlertObjectList, AlertSource, Codec, CodecSettings, ModelError};
use serde_json::{Value, json};
use strum::IntoEnumIterator;

#[test]
fn test_controller_document_round_trip() {
    let start = init();

    for source in AlertSource::iter() {
        let document = controller_document("vs-alerts", source.as_str(), &["VIRTUALSERVICE", "POOL"]);

        let list = from_json_value(document.clone()).expect("cannot decode controller document");
        assert_eq!(Some(source), list.source_kind());
        assert_eq!(
            Some("https://10.10.25.42/api/alertobjectlist/alertobjectlist-vs-alerts"),
            list.url()
        );
        assert_eq!(Some("alertobjectlist-vs-alerts"), list.uuid());

        let encoded = to_json(&list).expect("cannot encode alert object list");
        assert_eq!(document, serde_json::from_str::<Value>(&encoded).unwrap());
    }

    teardown(start, "test_controller_document_round_trip");
}

#[test]
fn test_every_known_object_type_round_trips() {
    let start = init();

    let list = AlertObjectList::builder()
        .name("all-objects")
        .source_kind(AlertSource::Metrics)
        .objects(OBJECT_TYPES.iter().copied())
        .build()
        .unwrap();

    assert_eq!(Ok(()), list.validate());
    assert!(list.unknown_objects().is_empty());
    assert_eq!(list, from_json(&to_json(&list).unwrap()).unwrap());
    assert_eq!(list, from_yaml(&to_yaml(&list).unwrap()).unwrap());

    teardown(start, "test_every_known_object_type_round_trips");
}

#[test]
fn test_unknown_values_pass_through() {
    let start = init();

    let list = AlertObjectList::builder()
        .name("a")
        .source("METRICS")
        .object("NOT_A_REAL_TYPE")
        .build()
        .unwrap();

    let encoded = to_json(&list).unwrap();
    assert_eq!(r#"{"name":"a","objects":["NOT_A_REAL_TYPE"],"source":"METRICS"}"#, encoded);
    let decoded = from_json(&encoded).unwrap();
    assert_eq!(list, decoded);
    assert_eq!(vec!["NOT_A_REAL_TYPE"], decoded.unknown_objects());

    teardown(start, "test_unknown_values_pass_through");
}

#[test]
fn test_request_body_from_controller_document() {
    let start = init();

    let mut list = from_json_value(controller_document("vs-alerts", "EVENT_LOGS", &["POOL"])).unwrap();
    list.push_object("POOLGROUP");

    let body = to_json(&list.without_server_fields()).unwrap();
    assert_eq!(
        json!({
            "name": "vs-alerts",
            "objects": ["POOL", "POOLGROUP"],
            "source": "EVENT_LOGS",
            "tenant_ref": "https://10.10.25.42/api/tenant/admin#admin",
            "uuid": "alertobjectlist-vs-alerts",
        }),
        serde_json::from_str::<Value>(&body).unwrap()
    );

    let tenant = list.tenant().unwrap().expect("tenant_ref should be set");
    assert_eq!("tenant", tenant.kind());
    assert_eq!(Some("admin"), tenant.uuid());
    assert_eq!(Some("admin"), tenant.name());

    teardown(start, "test_request_body_from_controller_document");
}

#[test]
fn test_missing_required_fields() {
    let start = init();

    let err = from_json(r#"{"objects":["POOL"]}"#).unwrap_err();
    assert!(err.is_missing_required_field());
    assert_eq!(ModelError::new_missing_required_field("name"), err);

    let strict = Codec::new(CodecSettings {
        strict_enums: true,
        ..CodecSettings::default()
    });
    assert_eq!(
        Err(ModelError::new_missing_required_field("source")),
        strict.decode_json(r#"{"name":"a","objects":["NOT_A_REAL_TYPE"]}"#)
    );

    teardown(start, "test_missing_required_fields");
}
