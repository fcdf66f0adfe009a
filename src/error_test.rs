use super::*;

#[test]
fn selector_error_messages_name_the_input() {
    let err = SelectorError::Unsupported { selector: "a > b".into(), found: '>' };
    assert_eq!(err.to_string(), "unsupported selector syntax '>' in \"a > b\"");
    assert_eq!(SelectorError::Empty.to_string(), "empty selector");
}

#[test]
fn store_error_display() {
    assert_eq!(StoreError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StoreError::Write("quota".into()).to_string(), "storage write failed: quota");
}

#[test]
fn site_error_wraps_config_and_selector_errors() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = SiteError::from(json_err);
    assert!(err.to_string().starts_with("config parse failed:"));

    let err = SiteError::from(SelectorError::Empty);
    assert_eq!(err.to_string(), "invalid selector: empty selector");
}
