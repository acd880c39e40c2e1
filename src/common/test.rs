use bytes::Bytes;
use std::collections::HashMap;

use crate::common::ByteStr;

#[test]
fn bytestr() {
    let string = ByteStr::from_static("<https://x/>; rel=next");
    assert_eq!(string, "<https://x/>; rel=next");
    assert_eq!(string.len(), 22);

    let rel = string.slice_ref(&string[18..]);
    assert_eq!(rel, "next");
    assert_eq!(rel.as_ptr(), string[18..].as_ptr());

    let empty = string.slice_ref("");
    assert!(empty.is_empty());
    assert_eq!(empty, ByteStr::new());

    assert_eq!(ByteStr::copy_from_str("a"), ByteStr::from(String::from("a")));
    assert_eq!(rel.clone().into_string(), "next");
    assert_eq!(Bytes::from(rel), Bytes::from_static(b"next"));

    assert!(ByteStr::from_utf8(Bytes::from_static(b"\xff")).is_err());
    assert_eq!(ByteStr::from_utf8(Bytes::from_static(b"ok")).unwrap(), "ok");

    assert_eq!(format!("{string}"), "<https://x/>; rel=next");
    assert_eq!(format!("{:?}", ByteStr::from_static("a\"b")), "\"a\\\"b\"");
}

#[test]
fn bytestr_map_key() {
    let mut map = HashMap::new();
    map.insert(ByteStr::copy_from_str("next"), 1);
    map.insert(ByteStr::from_static("prev"), 2);

    assert_eq!(map.get("next"), Some(&1));
    assert_eq!(map.get("prev"), Some(&2));
    assert_eq!(map.get("last"), None);
}
