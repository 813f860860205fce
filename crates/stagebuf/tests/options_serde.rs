#![allow(missing_docs)]
use stagebuf::{BufferOptions, GrowthPolicy};

#[test]
fn partial_config_uses_defaults() {
    let options: BufferOptions = serde_json::from_str(r#"{"initial_capacity": 512}"#).unwrap();
    assert_eq!(
        options,
        BufferOptions {
            initial_capacity: 512,
            ..Default::default()
        }
    );
}

#[test]
fn growth_policy_names() {
    let options: BufferOptions =
        serde_json::from_str(r#"{"growth": {"factor": 4}, "read_size": 4096}"#).unwrap();
    assert_eq!(options.growth, GrowthPolicy::Factor(4));
    assert_eq!(options.read_size, 4096);

    let options: BufferOptions = serde_json::from_str(r#"{"growth": "doubling"}"#).unwrap();
    assert_eq!(options.growth, GrowthPolicy::Doubling);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = serde_json::from_str::<BufferOptions>(r#"{"capacity": 1}"#).unwrap_err();
    assert!(err.to_string().contains("unknown field"));
}

#[test]
fn serializes_every_field() {
    let json = serde_json::to_value(BufferOptions::default()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "initial_capacity": 16384,
            "read_size": 16384,
            "growth": "doubling",
        })
    );
}
