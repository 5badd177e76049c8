use chrono::TimeZone;

use super::*;

fn caught_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

#[test]
fn new_entry_trims_and_drops_empty_notes() {
    let entry = NewCollectionEntry::new(25, 5, "  Viridian Forest ", Some("   "), caught_at())
        .unwrap();
    assert_eq!(entry.location, "Viridian Forest");
    assert_eq!(entry.notes, None);
}

#[test]
fn new_entry_rejects_blank_location() {
    let err = NewCollectionEntry::new(25, 5, "   ", None, caught_at()).unwrap_err();
    assert_eq!(err, CoreError::MissingField("Location"));
}

#[test]
fn new_entry_rejects_level_out_of_range() {
    for level in [0, 101, 255] {
        let err = NewCollectionEntry::new(25, level, "Route 1", None, caught_at()).unwrap_err();
        assert!(matches!(err, CoreError::LevelOutOfRange { .. }));
    }
    assert!(NewCollectionEntry::new(25, 1, "Route 1", None, caught_at()).is_ok());
    assert!(NewCollectionEntry::new(25, 100, "Route 1", None, caught_at()).is_ok());
}

#[test]
fn new_entry_serializes_camel_case() {
    let entry =
        NewCollectionEntry::new(25, 5, "Route 1", Some("first catch"), caught_at()).unwrap();
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["pokemonId"], 25);
    assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
    assert_eq!(json["notes"], "first catch");
}

#[test]
fn update_payload_has_no_catalog_reference() {
    let entry = CollectionEntry {
        id: "abc".to_string(),
        pokemon_id: 25,
        level: 5,
        location: "Route 1".to_string(),
        notes: None,
        created_at: caught_at(),
    };
    let update = entry.to_update().with_level(6).with_notes("evolved soon");
    let json = serde_json::to_value(&update).unwrap();
    assert!(json.get("pokemonId").is_none());
    assert_eq!(json["level"], 6);
    assert_eq!(json["notes"], "evolved soon");
    assert!(json.get("notes").is_some());
}

#[test]
fn update_with_empty_notes_clears_them() {
    let update = CollectionEntryUpdate {
        level: 5,
        location: "Route 1".to_string(),
        notes: Some("old".to_string()),
        created_at: caught_at(),
    }
    .with_notes("");
    assert_eq!(update.notes, None);
}

#[test]
fn entry_deserializes_js_timestamp() {
    let json = r#"{"id": "e1", "pokemonId": 55, "level": 30, "location": "Cerulean Cave",
        "createdAt": "2024-05-01T12:00:00.000Z"}"#;
    let entry: CollectionEntry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.pokemon_id, 55);
    assert_eq!(entry.created_at, caught_at());
    assert_eq!(entry.notes, None);
}

#[test]
fn parse_timestamp_accepts_offsets() {
    let ts = parse_timestamp("2024-05-01T14:00:00+02:00").unwrap();
    assert_eq!(ts, caught_at());
    assert!(matches!(
        parse_timestamp("yesterday"),
        Err(CoreError::InvalidTimestamp(_))
    ));
}
