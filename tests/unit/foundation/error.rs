use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TraceError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        TraceError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        TraceError::session("x")
            .to_string()
            .contains("session error:")
    );
    assert!(
        TraceError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TraceError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_convert() {
    let bad = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: TraceError = bad.into();
    assert!(matches!(err, TraceError::Serde(_)));
}
