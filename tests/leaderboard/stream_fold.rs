use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use paceline::client::routes::leaderboard::Roster;
use paceline::db::protocol::RecordChange;

use crate::util::{finisher, runner};

use super::roster_of;

fn snapshot(records: &[(&str, Value)]) -> RecordChange {
    let map: BTreeMap<String, Value> = records
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect();

    RecordChange::Replaced(map)
}

#[test]
fn the_initial_snapshot_replaces_whatever_was_shown() {
    let mut roster = roster_of(&[("stale", runner("Gone Runner", "Nowhere"))]);

    roster.apply(&snapshot(&[(
        "abc",
        json!({"name": "Ada Okafor", "location": "Aurora Bay"}),
    )]));

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.get("abc").unwrap().name, "Ada Okafor");
    assert!(roster.get("stale").is_none());
}

#[test]
// The stream key is authoritative; whatever id the payload carried, the
// roster's record ends up keyed and identified by the stream's key
fn decoded_records_take_their_id_from_the_stream_key() {
    let mut roster = Roster::default();

    roster.apply(&RecordChange::Upserted {
        key: "k1".to_string(),
        value: json!({"id": "something-else", "name": "Ada Okafor", "location": "Aurora Bay"}),
    });

    assert_eq!(roster.get("k1").unwrap().id.as_deref(), Some("k1"));
}

#[test]
fn an_upsert_overwrites_the_record_in_full() {
    let mut roster = roster_of(&[("k1", finisher("Ada Okafor", "Aurora Bay", 4800))]);

    roster.apply(&RecordChange::Upserted {
        key: "k1".to_string(),
        value: json!({"name": "Ada Okafor", "location": "Port Meridian"}),
    });

    let ada = roster.get("k1").unwrap();
    assert_eq!(ada.location, "Port Meridian");
    // A full overwrite without the field clears the old finish
    assert_eq!(ada.finish_seconds, None);
}

#[test]
// The way a finish recorded by another staff device arrives: a patch with
// just the changed field
fn a_patch_changes_only_the_named_fields() {
    let mut roster = roster_of(&[("k1", runner("Ada Okafor", "Aurora Bay"))]);

    let mut fields = Map::new();
    fields.insert("finish_seconds".to_string(), json!(4800));
    roster.apply(&RecordChange::Patched {
        key: "k1".to_string(),
        fields,
    });

    let ada = roster.get("k1").unwrap();
    assert_eq!(ada.finish_seconds, Some(4800));
    assert_eq!(ada.location, "Aurora Bay");
}

#[test]
fn a_null_patch_value_deletes_the_field() {
    let mut roster = roster_of(&[("k1", finisher("Ada Okafor", "Aurora Bay", 4800))]);

    let mut fields = Map::new();
    fields.insert("finish_seconds".to_string(), Value::Null);
    roster.apply(&RecordChange::Patched {
        key: "k1".to_string(),
        fields,
    });

    assert_eq!(roster.get("k1").unwrap().finish_seconds, None);
}

#[test]
fn a_patch_against_an_unknown_key_is_dropped() {
    let mut roster = roster_of(&[("k1", runner("Ada Okafor", "Aurora Bay"))]);

    let mut fields = Map::new();
    fields.insert("finish_seconds".to_string(), json!(4800));
    roster.apply(&RecordChange::Patched {
        key: "ghost".to_string(),
        fields,
    });

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.get("k1").unwrap().finish_seconds, None);
}

#[test]
fn a_removal_drops_the_record() {
    let mut roster = roster_of(&[
        ("k1", runner("Ada Okafor", "Aurora Bay")),
        ("k2", runner("Ben Ilsted", "Port Meridian")),
    ]);

    roster.apply(&RecordChange::Removed {
        key: "k1".to_string(),
    });

    assert_eq!(roster.len(), 1);
    assert!(roster.get("k1").is_none());
}

#[test]
// One malformed record must not take the table down with it
fn undecodable_records_are_skipped_not_fatal() {
    let mut roster = Roster::default();

    roster.apply(&snapshot(&[
        ("good", json!({"name": "Ada Okafor", "location": "Aurora Bay"})),
        ("bad", json!("not an object")),
        ("worse", json!({"location": "missing a name"})),
    ]));

    assert_eq!(roster.len(), 1);
    assert!(roster.get("good").is_some());
}

#[test]
// Fields this application never wrote survive the decode/patch cycle, so an
// older build cannot strip what a newer one stored
fn unknown_fields_ride_along_through_a_patch() {
    let mut roster = Roster::default();

    roster.apply(&RecordChange::Upserted {
        key: "k1".to_string(),
        value: json!({
            "name": "Ada Okafor",
            "location": "Aurora Bay",
            "shoe_chip": "A-7781"
        }),
    });

    let mut fields = Map::new();
    fields.insert("finish_seconds".to_string(), json!(4800));
    roster.apply(&RecordChange::Patched {
        key: "k1".to_string(),
        fields,
    });

    let ada = roster.get("k1").unwrap();
    assert_eq!(ada.extra.get("shoe_chip"), Some(&json!("A-7781")));
    assert_eq!(ada.finish_seconds, Some(4800));
}
