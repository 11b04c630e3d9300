#![allow(non_snake_case)]

use super::*;

#[test]
fn ExtrasError___missing_entry___names_the_tag() {
    let err = ExtrasError::MissingEntry {
        tag: "app::Foo".to_string(),
    };

    assert_eq!(err.to_string(), r#"no entry tagged "app::Foo""#);
}

#[test]
fn ExtrasError___missing_args___has_stable_message() {
    assert_eq!(
        ExtrasError::MissingArgs.to_string(),
        "component has no arguments attached"
    );
}

#[test]
fn ExtrasError___from_serde_error___maps_to_encode() {
    let serde_err = serde_json::from_str::<i32>("not json").unwrap_err();

    let err: ExtrasError = serde_err.into();

    assert!(matches!(err, ExtrasError::Encode(_)));
}
