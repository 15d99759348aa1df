use std::sync::Arc;
use chrono::Utc;
use shared_kernel::errors::DomainError;

use crate::application::delete_post::{DeletePostCommand, DeletePostUseCase};
use crate::domain::entities::{Author, Media, Post};
use crate::domain::ports::MediaStorageStub;
use crate::domain::repositories::PostRepositoryStub;
use crate::domain::value_objects::{AuthorId, MediaType, ObjectPath, PostContent, PostId};

struct Fixture {
    use_case: DeletePostUseCase,
    posts: Arc<PostRepositoryStub>,
    storage: Arc<MediaStorageStub>,
}

fn setup() -> Fixture {
    let posts = Arc::new(PostRepositoryStub::new());
    let storage = Arc::new(MediaStorageStub::new());
    let use_case = DeletePostUseCase::new(posts.clone(), storage.clone());
    Fixture { use_case, posts, storage }
}

fn author_id() -> AuthorId {
    AuthorId::try_new("uid-1").unwrap()
}

fn post_with_media(fx: &Fixture) -> Post {
    let path = ObjectPath::from_raw("posts/uid-1/1_a.png");
    fx.storage.add_object(path.clone(), "image/png");

    let post = Post::publish(
        PostId::new(),
        Author::new(author_id(), "Ann", None),
        PostContent::default(),
        Some(Media::new("https://media.test/posts/uid-1/1_a.png", path, Some(MediaType::Image))),
        Utc::now(),
    )
    .unwrap();
    fx.posts.add_post(post.clone());
    post
}

#[tokio::test]
async fn test_author_deletes_post_and_media() {
    let fx = setup();
    let post = post_with_media(&fx);

    fx.use_case
        .execute(DeletePostCommand { requester: author_id(), post_id: post.id() })
        .await
        .unwrap();

    assert_eq!(fx.posts.count(), 0);
    assert_eq!(fx.storage.count(), 0);
}

#[tokio::test]
async fn test_other_user_is_forbidden() {
    let fx = setup();
    let post = post_with_media(&fx);

    let result = fx
        .use_case
        .execute(DeletePostCommand { requester: AuthorId::try_new("uid-2").unwrap(), post_id: post.id() })
        .await;

    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
    assert_eq!(fx.posts.count(), 1);
    assert_eq!(fx.storage.count(), 1);
}

#[tokio::test]
async fn test_missing_media_object_is_tolerated() {
    let fx = setup();
    let post = post_with_media(&fx);
    fx.storage.objects.lock().unwrap().clear();

    let result = fx
        .use_case
        .execute(DeletePostCommand { requester: author_id(), post_id: post.id() })
        .await;

    assert!(result.is_ok());
    assert_eq!(fx.posts.count(), 0);
}

#[tokio::test]
async fn test_storage_failure_is_reported_after_document_removal() {
    let fx = setup();
    let post = post_with_media(&fx);
    *fx.storage.delete_error.lock().unwrap() = Some(DomainError::Infrastructure("bucket offline".into()));

    let result = fx
        .use_case
        .execute(DeletePostCommand { requester: author_id(), post_id: post.id() })
        .await;

    assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    assert_eq!(fx.posts.count(), 0);
}

#[tokio::test]
async fn test_unknown_post_is_not_found() {
    let fx = setup();

    let result = fx
        .use_case
        .execute(DeletePostCommand { requester: author_id(), post_id: PostId::new() })
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { entity: "Post", .. })));
}
