use chrono::{TimeZone, Utc};
use shared_kernel::errors::DomainError;

use crate::domain::entities::{Author, Media, Post};
use crate::domain::value_objects::{AuthorId, MediaType, ObjectPath, PostContent, PostId};

fn author() -> Author {
    Author::new(AuthorId::try_new("uid-1").unwrap(), "Ann", None)
}

#[test]
fn test_author_without_avatar_gets_placeholder() {
    assert_eq!(author().avatar_url(), "https://placehold.co/40x40/FF69B4/FFFFFF?text=A");

    let with_avatar = Author::new(
        AuthorId::try_new("uid-1").unwrap(),
        "Ann",
        Some("https://cdn.example.com/ann.png".into()),
    );
    assert_eq!(with_avatar.avatar_url(), "https://cdn.example.com/ann.png");
}

#[test]
fn test_placeholder_avatar_encodes_reserved_initial() {
    assert_eq!(Author::placeholder_avatar("#tag"), "https://placehold.co/40x40/FF69B4/FFFFFF?text=%23");
    assert_eq!(Author::placeholder_avatar("&co"), "https://placehold.co/40x40/FF69B4/FFFFFF?text=%26");
}

#[test]
fn test_blank_author_name_is_anonymous() {
    let anonymous = Author::new(AuthorId::try_new("uid-1").unwrap(), "  ", None);
    assert_eq!(anonymous.name(), "Anonymous");
    assert!(anonymous.avatar_url().ends_with("text=A"));
}

#[test]
fn test_publish_rejects_empty_post() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();

    let result = Post::publish(PostId::new(), author(), PostContent::try_new("  ").unwrap(), None, now);

    assert!(matches!(result, Err(DomainError::Validation { field: "content", .. })));
}

#[test]
fn test_media_only_post_is_valid() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let media = Media::new(
        "https://media.example.com/posts/uid-1/1_a.png",
        ObjectPath::from_raw("posts/uid-1/1_a.png"),
        Some(MediaType::Image),
    );

    let post = Post::publish(PostId::new(), author(), PostContent::default(), Some(media), now).unwrap();

    assert!(post.likes().is_empty());
    assert!(post.comments().is_empty());
    assert!(post.is_authored_by(&AuthorId::try_new("uid-1").unwrap()));
    assert!(!post.is_authored_by(&AuthorId::try_new("uid-2").unwrap()));
}
