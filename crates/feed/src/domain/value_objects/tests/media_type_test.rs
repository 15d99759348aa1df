use crate::domain::value_objects::MediaType;

#[test]
fn test_media_type_from_mime_prefix() {
    assert_eq!(MediaType::from_mime("image/png"), Some(MediaType::Image));
    assert_eq!(MediaType::from_mime("IMAGE/JPEG"), Some(MediaType::Image));
    assert_eq!(MediaType::from_mime("video/mp4"), Some(MediaType::Video));
    assert_eq!(MediaType::from_mime("application/pdf"), None);
    assert_eq!(MediaType::from_mime(""), None);
}

#[test]
fn test_media_type_storage_roundtrip() {
    assert_eq!("video".parse::<MediaType>().unwrap(), MediaType::Video);
    assert!("gif".parse::<MediaType>().is_err());
    assert_eq!(serde_json::to_value(MediaType::Image).unwrap(), "image");
}
