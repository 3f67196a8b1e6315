//! Loading codec configuration through serde

use bibencodings::{BibEncoding, Codec, ErrorPolicy};

#[test]
fn test_codec_from_json() {
    let codec: Codec = serde_json::from_str(r#"{"encoding": "usmarc", "errors": "replace"}"#)
        .expect("valid codec config");
    assert_eq!(codec.encoding, BibEncoding::Marc);
    assert_eq!(codec.errors, ErrorPolicy::Replace);
    assert_eq!(codec.decode(b"\xe8a\xff").unwrap(), "\u{00E4}\u{FFFD}");
}

#[test]
fn test_missing_fields_use_defaults() {
    let codec: Codec = serde_json::from_str("{}").unwrap();
    assert_eq!(codec, Codec::default());
    assert_eq!(codec.encoding, BibEncoding::Iso5426);
    assert_eq!(codec.errors, ErrorPolicy::Strict);

    let codec: Codec = serde_json::from_str(r#"{"errors": "ignore"}"#).unwrap();
    assert_eq!(codec.encoding, BibEncoding::Iso5426);
    assert_eq!(codec.errors, ErrorPolicy::Ignore);
}

#[test]
fn test_serializes_canonical_names() {
    let codec = Codec::new(BibEncoding::Iso5426Xe0).with_errors(ErrorPolicy::Repr);
    let json = serde_json::to_string(&codec).unwrap();
    assert_eq!(json, r#"{"encoding":"iso-5426-xe0","errors":"repr"}"#);
    assert_eq!(serde_json::from_str::<Codec>(&json).unwrap(), codec);
}

#[test]
fn test_aliases_accepted() {
    for (name, expected) in [
        ("\"mab2\"", BibEncoding::Iso5426),
        ("\"iso5426\"", BibEncoding::Iso5426),
        ("\"mab2-xe0\"", BibEncoding::Iso5426Xe0),
        ("\"ansel\"", BibEncoding::Marc),
    ] {
        assert_eq!(serde_json::from_str::<BibEncoding>(name).unwrap(), expected);
    }
}

#[test]
fn test_unknown_values_rejected() {
    assert!(serde_json::from_str::<Codec>(r#"{"encoding": "marc-8"}"#).is_err());
    assert!(serde_json::from_str::<Codec>(r#"{"errors": "xmlcharrefreplace"}"#).is_err());
}

#[test]
fn test_policy_names_round_trip() {
    for policy in [
        ErrorPolicy::Strict,
        ErrorPolicy::Replace,
        ErrorPolicy::Ignore,
        ErrorPolicy::Repr,
    ] {
        assert_eq!(policy.to_string().parse::<ErrorPolicy>().unwrap(), policy);
        assert_eq!(
            serde_json::to_string(&policy).unwrap(),
            format!("\"{}\"", policy.as_str())
        );
    }
    assert!("Strict".parse::<ErrorPolicy>().is_err());
}
