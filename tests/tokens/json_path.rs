use serde_json::json;
use ytchat_rs::json::{MAX_SEARCH_DEPTH, find_first_string, get, get_array, get_object, get_str};

#[test]
fn path_lookups() {
    let v = json!({"a": {"b": {"c": "x", "arr": [1, 2], "obj": {"k": 1}}}});

    assert_eq!(get_str(&v, &["a", "b", "c"]), Some("x"));
    assert_eq!(get_array(&v, &["a", "b", "arr"]).map(Vec::len), Some(2));
    assert!(get_object(&v, &["a", "b", "obj"]).is_some());
    assert_eq!(get(&v, &[]), Some(&v));

    // wrong shape or missing key is None, never a panic
    assert_eq!(get_str(&v, &["a", "b", "arr"]), None);
    assert_eq!(get_str(&v, &["a", "missing", "c"]), None);
    assert_eq!(get(&v, &["a", "b", "c", "deeper"]), None);
}

#[test]
fn own_key_is_checked_before_children() {
    let v = json!({
        "child": {"continuation": "CHILD"},
        "continuation": "OWN"
    });
    assert_eq!(find_first_string(&v, "continuation"), Some("OWN"));
}

#[test]
fn children_in_declared_order() {
    let v = json!({
        "z": {"continuation": "FIRST"},
        "a": {"continuation": "SECOND"}
    });
    assert_eq!(find_first_string(&v, "continuation"), Some("FIRST"));
}

#[test]
fn arrays_and_non_strings() {
    let v = json!([
        {"continuation": 42},
        {"continuation": ""},
        [{"nested": {"continuation": "FOUND"}}]
    ]);
    assert_eq!(find_first_string(&v, "continuation"), Some("FOUND"));
    assert_eq!(find_first_string(&json!("continuation"), "continuation"), None);
}

#[test]
fn search_stops_at_depth_limit() {
    let mut deep = json!({"continuation": "TOO-DEEP"});
    for _ in 0..(MAX_SEARCH_DEPTH + 5) {
        deep = json!({ "n": deep });
    }
    assert_eq!(find_first_string(&deep, "continuation"), None);

    let mut shallow = json!({"continuation": "OK"});
    for _ in 0..10 {
        shallow = json!({ "n": shallow });
    }
    assert_eq!(find_first_string(&shallow, "continuation"), Some("OK"));
}
