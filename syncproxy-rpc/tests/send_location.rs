use syncproxy_rpc::{
    AccessorConfig, Image, ImageType, MessageRole, NumericCoercion, ParameterStore, Parameters,
    RpcError, RpcMessage, SendLocation, Value,
};

fn populated() -> SendLocation {
    let mut msg = SendLocation::new();
    msg.set_longitude_degrees(Some(-83.0458));
    msg.set_latitude_degrees(Some(42.3314));
    msg.set_location_name(Some("Coffee Shop".to_string()));
    msg.set_location_description(Some("Espresso bar".to_string()));
    msg.set_address_lines(Some(vec![
        "1 Main St".to_string(),
        "Detroit, MI".to_string(),
    ]));
    msg.set_phone_number(Some("555-0100".to_string()));
    msg.set_location_image(Some(Image::dynamic("cup.png")));
    msg
}

fn clear_all(msg: &mut SendLocation) {
    msg.set_longitude_degrees(None);
    msg.set_latitude_degrees(None);
    msg.set_location_name(None);
    msg.set_location_description(None);
    msg.set_address_lines(None);
    msg.set_phone_number(None);
    msg.set_location_image(None);
}

// ============================================================================
// Setter / getter contract
// ============================================================================

#[test]
fn test_location_name_scenario() {
    let mut msg = SendLocation::new();
    msg.set_location_name(Some("Coffee Shop".to_string()));
    assert_eq!(msg.location_name().as_deref(), Some("Coffee Shop"));

    msg.set_location_name(None);
    assert_eq!(msg.location_name(), None);
    assert!(!msg.store().contains("locationName"));
}

#[test]
fn test_every_field_reads_back_what_was_written() {
    let msg = populated();
    assert_eq!(msg.longitude_degrees(), Some(-83.0458));
    assert_eq!(msg.latitude_degrees(), Some(42.3314));
    assert_eq!(msg.location_name().as_deref(), Some("Coffee Shop"));
    assert_eq!(msg.location_description().as_deref(), Some("Espresso bar"));
    assert_eq!(
        msg.address_lines(),
        Some(vec!["1 Main St".to_string(), "Detroit, MI".to_string()])
    );
    assert_eq!(msg.phone_number().as_deref(), Some("555-0100"));

    let image = msg.location_image().unwrap();
    assert_eq!(image.value().as_deref(), Some("cup.png"));
    assert_eq!(image.image_type(), Some(ImageType::Dynamic));
}

#[test]
fn test_clearing_every_field_leaves_an_empty_store() {
    let mut msg = populated();
    clear_all(&mut msg);
    assert!(msg.store().is_empty());
    assert_eq!(msg.longitude_degrees(), None);
    assert_eq!(msg.address_lines(), None);
    assert_eq!(msg.location_image(), None);

    // Clearing again from the empty state is still fine
    clear_all(&mut msg);
    assert!(msg.store().is_empty());
}

#[test]
fn test_clearing_malformed_fields_leaves_an_empty_store() {
    let mut msg = SendLocation::new();
    msg.store_mut().set("longitudeDegrees", "east");
    msg.store_mut().set("latitudeDegrees", true);
    msg.store_mut().set("locationName", 12i64);
    msg.store_mut().set("locationDescription", vec![1i64]);
    msg.store_mut().set("addressLines", Value::List(vec![]));
    msg.store_mut().set("phoneNumber", 5550100i64);
    msg.store_mut().set("locationImage", 5i64);

    clear_all(&mut msg);
    assert!(msg.store().is_empty());
    assert_eq!(msg.latitude_degrees(), None);
    assert_eq!(msg.location_image(), None);
}

#[test]
fn test_overwrite_replaces_value() {
    let mut msg = populated();
    msg.set_phone_number(Some("555-0199".to_string()));
    assert_eq!(msg.phone_number().as_deref(), Some("555-0199"));
    assert_eq!(msg.store().len(), SendLocation::FIELD_KEYS.len());
}

// ============================================================================
// Malformed data
// ============================================================================

#[test]
fn test_latitude_not_a_number_is_absent() {
    let mut msg = SendLocation::new();
    msg.store_mut().set("latitudeDegrees", "not a number");
    assert_eq!(msg.latitude_degrees(), None);
    assert!(msg.store().contains("latitudeDegrees"));
}

#[test]
fn test_wrong_type_under_every_key_is_absent() {
    let mut msg = SendLocation::new();
    msg.store_mut().set("longitudeDegrees", true);
    msg.store_mut().set("latitudeDegrees", vec![1.0f64]);
    msg.store_mut().set("locationName", 12i64);
    msg.store_mut().set("locationDescription", 1.5f64);
    msg.store_mut().set("addressLines", "1 Main St");
    msg.store_mut().set("phoneNumber", ParameterStore::new());
    msg.store_mut().set("locationImage", "cup.png");

    assert_eq!(msg.longitude_degrees(), None);
    assert_eq!(msg.latitude_degrees(), None);
    assert_eq!(msg.location_name(), None);
    assert_eq!(msg.location_description(), None);
    assert_eq!(msg.address_lines(), None);
    assert_eq!(msg.phone_number(), None);
    assert_eq!(msg.location_image(), None);
}

#[test]
fn test_integer_coordinates_follow_numeric_policy() {
    let mut msg = SendLocation::new();
    msg.store_mut().set("latitudeDegrees", 45i64);
    assert_eq!(msg.latitude_degrees(), Some(45.0));

    let msg = msg.with_config(AccessorConfig::default().with_numeric(NumericCoercion::Strict));
    assert_eq!(msg.latitude_degrees(), None);
}

// ============================================================================
// Collections
// ============================================================================

#[test]
fn test_empty_address_lines_are_absent() {
    let mut msg = SendLocation::new();
    msg.set_address_lines(Some(Vec::new()));
    assert!(msg.store().contains("addressLines"));
    assert_eq!(msg.address_lines(), None);
}

#[test]
fn test_single_address_line_is_returned_unchanged() {
    let mut msg = SendLocation::new();
    msg.set_address_lines(Some(vec!["1 Main St".to_string()]));
    assert_eq!(msg.address_lines(), Some(vec!["1 Main St".to_string()]));
}

#[test]
fn test_address_lines_only_check_first_element_by_default() {
    let mut msg = SendLocation::new();
    msg.store_mut().set(
        "addressLines",
        Value::List(vec![Value::from("1 Main St"), Value::Integer(48226)]),
    );
    assert_eq!(msg.address_lines(), Some(vec!["1 Main St".to_string()]));

    let msg = msg.with_config(AccessorConfig::STRICT);
    assert_eq!(msg.address_lines(), None);
}

#[test]
fn test_rewriting_a_mixed_list_drops_later_bad_elements() {
    let mut msg = SendLocation::new();
    msg.store_mut().set(
        "addressLines",
        Value::List(vec![Value::from("a"), Value::Integer(2), Value::from("c")]),
    );

    let lines = msg.address_lines();
    msg.set_address_lines(lines);
    assert_eq!(
        msg.store().get("addressLines"),
        Some(&Value::List(vec![Value::from("a"), Value::from("c")]))
    );
}

#[test]
fn test_address_lines_with_bad_first_element_are_absent() {
    let mut msg = SendLocation::new();
    msg.store_mut().set(
        "addressLines",
        Value::List(vec![Value::Integer(1), Value::from("Main St")]),
    );
    assert_eq!(msg.address_lines(), None);
}

// ============================================================================
// Nested image
// ============================================================================

#[test]
fn test_image_inherits_message_config() {
    let mut image = ParameterStore::new();
    image.set("value", "cup.png");
    let mut msg = SendLocation::new().with_config(AccessorConfig::STRICT);
    msg.store_mut().set("locationImage", image);

    let image = msg.location_image().unwrap();
    assert_eq!(image.config(), &AccessorConfig::STRICT);
    assert_eq!(image.value().as_deref(), Some("cup.png"));
    assert_eq!(image.image_type(), None);
}

// ============================================================================
// Construction paths
// ============================================================================

#[test]
fn test_round_trip_through_store_keeps_well_typed_fields() {
    let original = populated();
    let received = SendLocation::from_store(original.to_store());
    assert_eq!(received, original);

    let mut rebuilt = SendLocation::new();
    rebuilt.set_longitude_degrees(received.longitude_degrees());
    rebuilt.set_latitude_degrees(received.latitude_degrees());
    rebuilt.set_location_name(received.location_name());
    rebuilt.set_location_description(received.location_description());
    rebuilt.set_address_lines(received.address_lines());
    rebuilt.set_phone_number(received.phone_number());
    rebuilt.set_location_image(received.location_image());

    assert_eq!(rebuilt.store(), original.store());
}

#[test]
fn test_round_trip_drops_malformed_fields() {
    let mut original = SendLocation::new();
    original.set_location_name(Some("Coffee Shop".to_string()));
    original.store_mut().set("phoneNumber", 5550100i64);
    original.store_mut().set("addressLines", Value::List(vec![]));

    let received = SendLocation::from_store(original.to_store());
    let mut rebuilt = SendLocation::new();
    rebuilt.set_location_name(received.location_name());
    rebuilt.set_address_lines(received.address_lines());
    rebuilt.set_phone_number(received.phone_number());

    assert_eq!(rebuilt.store().keys().collect::<Vec<_>>(), vec!["locationName"]);
}

#[test]
fn test_from_store_adopts_foreign_function_name() {
    let mut other = RpcMessage::request("Show");
    other.parameters_mut().set("locationName", "Kiosk");

    let msg = SendLocation::from_store(other.to_store());
    assert_eq!(msg.function_name(), "Show");
    assert_eq!(msg.location_name().as_deref(), Some("Kiosk"));
}

#[test]
fn test_copy_construction_clones_the_store() {
    let source = populated();
    let mut copy = SendLocation::from_message(source.message());
    copy.set_location_name(None);

    assert_eq!(source.location_name().as_deref(), Some("Coffee Shop"));
    assert_eq!(copy.location_name(), None);
    assert_eq!(copy.phone_number(), source.phone_number());
}

#[test]
fn test_copy_construction_is_always_a_request() {
    let mut response = RpcMessage::new("SendLocation", MessageRole::Response);
    response.set_correlation_id(Some(4));
    response.parameters_mut().set("locationName", "Kiosk");

    let copy = SendLocation::from_message(&response);
    assert_eq!(copy.message().role(), MessageRole::Request);
    assert_eq!(copy.correlation_id(), Some(4));
    assert!(copy.to_store().contains("request"));
    assert!(!copy.to_store().contains("response"));
    assert_eq!(copy.location_name().as_deref(), Some("Kiosk"));
}

#[test]
fn test_try_from_message_checks_identity() {
    let msg = SendLocation::try_from_message(RpcMessage::request("SendLocation")).unwrap();
    assert_eq!(msg.function_name(), SendLocation::FUNCTION_NAME);

    assert!(matches!(
        SendLocation::try_from_message(RpcMessage::request("Show")),
        Err(RpcError::FunctionMismatch { .. })
    ));
    assert!(matches!(
        SendLocation::try_from_message(RpcMessage::new("SendLocation", MessageRole::Response)),
        Err(RpcError::RoleMismatch { .. })
    ));
}

#[test]
fn test_correlation_id_survives_the_envelope() {
    let mut msg = populated();
    msg.set_correlation_id(Some(12));
    let received = SendLocation::from_store(msg.to_store());
    assert_eq!(received.correlation_id(), Some(12));
    assert_eq!(RpcMessage::from(received).correlation_id(), Some(12));
}
