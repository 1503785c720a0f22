use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FieldError::missing_resource("x")
            .to_string()
            .contains("missing resource:")
    );
    assert!(
        FieldError::data_format("x")
            .to_string()
            .contains("data format error:")
    );
    assert!(
        FieldError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FieldError::render("x").to_string().contains("render error:"));
    assert!(FieldError::encode("x").to_string().contains("encode error:"));
    assert!(
        FieldError::cosmetic("x")
            .to_string()
            .contains("formatting error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FieldError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_missing_inputs_skip_an_artifact() {
    assert!(FieldError::missing_resource("dir").skips_artifact());
    assert!(!FieldError::data_format("row 3").skips_artifact());
    assert!(!FieldError::cosmetic("label").skips_artifact());
    assert!(!FieldError::encode("gif").skips_artifact());
    assert!(!FieldError::validation("fps").skips_artifact());
}
