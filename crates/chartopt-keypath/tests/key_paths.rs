use chartopt_keypath::{join, lookup, segments, split_first, validate_key_path};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn split_first_agrees_with_segments() {
    let path = "exporting.buttons.contextButton.enabled";
    let (head, rest) = split_first(path);
    assert_eq!(head, segments(path)[0]);
    assert_eq!(rest, Some("buttons.contextButton.enabled"));
}

#[test]
fn lookup_walks_mixed_containers() {
    let record = json!({
        "regions": [
            {"name": "Kent", "rainfall": [101, 87, 93]},
            {"name": "Surrey", "rainfall": [88, 91, 79]}
        ]
    });
    assert_eq!(lookup(&record, "regions.1.name"), Some(&json!("Surrey")));
    assert_eq!(lookup(&record, "regions.0.rainfall.2"), Some(&json!(93)));
    assert_eq!(lookup(&record, "regions.0.rainfall.bad"), None);
}

const SEGMENT: &str = "[A-Za-z_$][A-Za-z0-9_$]{0,11}";

proptest! {
    #[test]
    fn join_segments_roundtrip(segs in prop::collection::vec(SEGMENT, 1..6)) {
        let path = join(&segs);
        prop_assert_eq!(segments(&path), segs.iter().map(String::as_str).collect::<Vec<_>>());
        prop_assert!(validate_key_path(&path).is_ok());
    }

    #[test]
    fn split_first_reassembles(segs in prop::collection::vec(SEGMENT, 2..6)) {
        let path = join(&segs);
        let (head, rest) = split_first(&path);
        prop_assert_eq!(head, segs[0].as_str());
        prop_assert_eq!(rest.unwrap(), join(&segs[1..]));
    }
}
