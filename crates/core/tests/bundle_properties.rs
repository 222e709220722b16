//! Behaviour of a keyword bundle as seen by a host building and reading one

use kwargs_core::{Dict, Error, Value, ValueKind};

fn scenario() -> Dict {
    let mut nested = Dict::new();
    nested.set("key1", 42);
    nested.set("key2", "value");

    let mut dict = Dict::new();
    dict.set("flag", true);
    dict.set("pi", 3.1415);
    dict.set("nested", nested);
    dict
}

#[test]
fn test_scenario_rendering() {
    let dict = scenario();
    assert_eq!(
        dict.to_string(),
        r#"{"flag": true, "nested": {"key1": 42, "key2": "value"}, "pi": 3.1415}"#
    );
}

#[test]
fn test_scenario_merge_with_empty() {
    let dict = scenario();
    assert_eq!(dict, dict.merge(&Dict::new()));
}

#[test]
fn test_scenario_defaulting_accessor() {
    let dict = scenario();
    assert_eq!(dict.get::<i32>("missing", -1), -1);
    assert_eq!(dict.get::<f64>("pi", 0.0), 3.1415);
    let nested = dict.get::<Dict>("nested", Dict::new());
    assert_eq!(nested.get::<i64>("key1", 0), 42);
}

#[test]
fn test_round_trip_every_native() {
    let mut dict = Dict::new();
    dict.set("i8", i8::MIN);
    dict.set("i16", i16::MIN);
    dict.set("i32", i32::MIN);
    dict.set("i64", i64::MIN);
    dict.set("isize", isize::MAX);
    dict.set("u8", u8::MAX);
    dict.set("u16", u16::MAX);
    dict.set("u32", u32::MAX);
    dict.set("u64", u64::MAX);
    dict.set("usize", usize::MAX);
    dict.set("f32", f32::MIN_POSITIVE);
    dict.set("f64", f64::MAX);
    dict.set("bool", false);
    dict.set("str", "text");
    dict.set("string", String::from("owned"));

    assert_eq!(dict.get_or_die::<i8>("i8"), Ok(i8::MIN));
    assert_eq!(dict.get_or_die::<i16>("i16"), Ok(i16::MIN));
    assert_eq!(dict.get_or_die::<i32>("i32"), Ok(i32::MIN));
    assert_eq!(dict.get_or_die::<i64>("i64"), Ok(i64::MIN));
    assert_eq!(dict.get_or_die::<isize>("isize"), Ok(isize::MAX));
    assert_eq!(dict.get_or_die::<u8>("u8"), Ok(u8::MAX));
    assert_eq!(dict.get_or_die::<u16>("u16"), Ok(u16::MAX));
    assert_eq!(dict.get_or_die::<u32>("u32"), Ok(u32::MAX));
    assert_eq!(dict.get_or_die::<u64>("u64"), Ok(u64::MAX));
    assert_eq!(dict.get_or_die::<usize>("usize"), Ok(usize::MAX));
    assert_eq!(dict.get_or_die::<f32>("f32"), Ok(f32::MIN_POSITIVE));
    assert_eq!(dict.get_or_die::<f64>("f64"), Ok(f64::MAX));
    assert_eq!(dict.get_or_die::<bool>("bool"), Ok(false));
    assert_eq!(dict.get_or_die::<String>("str"), Ok("text".to_string()));
    assert_eq!(dict.get_or_die::<String>("string"), Ok("owned".to_string()));
}

#[test]
fn test_every_numeric_pair_casts() {
    let sources = [
        Value::Int(-2),
        Value::UInt(2),
        Value::Float(2.0),
        Value::Bool(true),
    ];
    for source in sources {
        let kind = source.kind();
        let dict = Dict::from([("v", source)]);
        assert!(dict.get_or_die::<i64>("v").is_ok(), "i64 from {}", kind);
        assert!(dict.get_or_die::<u64>("v").is_ok(), "u64 from {}", kind);
        assert!(dict.get_or_die::<f64>("v").is_ok(), "f64 from {}", kind);
        assert!(dict.get_or_die::<bool>("v").is_ok(), "bool from {}", kind);
        assert_eq!(
            dict.get_or_die::<String>("v"),
            Err(Error::mismatch(ValueKind::String, kind))
        );
    }
}

#[test]
fn test_has_key_tracks_set_and_remove() {
    let mut dict = Dict::new();
    assert!(!dict.has_key("k"));
    dict.set("k", 1);
    assert!(dict.has_key("k"));
    dict.remove("k");
    assert!(!dict.has_key("k"));
}

#[test]
fn test_strict_accessor_distinguishes_failures() {
    let dict = scenario();
    assert!(matches!(
        dict.get_or_die::<i64>("absent"),
        Err(Error::KeyNotFound { .. })
    ));
    assert!(matches!(
        dict.get_or_die::<i64>("nested"),
        Err(Error::VariantMismatch { .. })
    ));
}

#[test]
fn test_prefix_then_merge() {
    let defaults = Dict::from([("depth", 3), ("width", 8)]);
    let user = Dict::from([("opt.depth", 5)]);

    let merged = defaults.with_prefix("opt.").merge(&user);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.get_or_die::<i64>("opt.depth"), Ok(5));
    assert_eq!(merged.get_or_die::<i64>("opt.width"), Ok(8));
}
