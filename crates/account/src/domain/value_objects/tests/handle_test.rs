use crate::domain::value_objects::Handle;
use shared_kernel::errors::DomainError;

#[test]
fn test_handle_is_case_insensitive() {
    let upper = Handle::try_new("Alice").unwrap();
    let lower = Handle::try_new("alice").unwrap();

    assert_eq!(upper, lower);
    assert_eq!(upper.as_str(), "alice");
}

#[test]
fn test_handle_trim_and_nfc() {
    // "e" + accent combinant -> "é" précomposé
    let handle = Handle::try_new("  Re\u{0301}mi ").unwrap();
    assert_eq!(handle.as_str(), "rémi");
    assert_eq!(Handle::try_new(" ann").unwrap(), Handle::try_new("ann").unwrap());
}

#[test]
fn test_handle_rejects_empty() {
    let result = Handle::try_new("   ");
    assert!(matches!(result, Err(DomainError::Validation { field: "handle", .. })));
}

#[test]
fn test_handle_rejects_document_separators() {
    assert!(Handle::try_new("ann/admin").is_err());
    assert!(Handle::try_new("ann smith").is_err());
}

#[test]
fn test_handle_max_length() {
    assert!(Handle::try_new("a".repeat(Handle::MAX_LEN)).is_ok());
    assert!(Handle::try_new("a".repeat(Handle::MAX_LEN + 1)).is_err());
}

#[test]
fn test_handle_serde_normalizes() {
    let handle: Handle = serde_json::from_str("\"ANN\"").unwrap();
    assert_eq!(handle.as_str(), "ann");
    assert_eq!(serde_json::to_string(&handle).unwrap(), "\"ann\"");
}
