// crates/feed/tests/postgres_it.rs
#![cfg(feature = "integration")]

mod common;

use chrono::{Duration, Utc};
use feed::domain::entities::{Media, Post};
use feed::domain::repositories::PostRepository;
use feed::domain::value_objects::{MediaType, ObjectPath, PostContent, PostId};
use feed::infrastructure::postgres::repositories::PostgresPostRepository;

use crate::common::author;

#[tokio::test]
async fn test_post_lifecycle() {
    let (pool, _c) = common::setup_postgres_test_db().await;
    let repo = PostgresPostRepository::new(pool);

    let media = Media::new(
        "https://media.test/posts/uid-1/1_a.png",
        ObjectPath::from_raw("posts/uid-1/1_a.png"),
        Some(MediaType::Image),
    );
    let post = Post::publish(
        PostId::new(),
        author("uid-1", "Ann"),
        PostContent::try_new("hello").unwrap(),
        Some(media),
        Utc::now(),
    )
    .unwrap();

    repo.create(&post).await.unwrap();

    let found = repo.find_by_id(&post.id()).await.unwrap().expect("Should find post");
    assert_eq!(found.author().avatar_url(), post.author().avatar_url());
    assert_eq!(found.media().and_then(|m| m.media_type()), Some(MediaType::Image));
    assert!(found.likes().is_empty());

    repo.delete(&post.id()).await.unwrap();
    assert!(repo.find_by_id(&post.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_recent_is_newest_first() {
    let (pool, _c) = common::setup_postgres_test_db().await;
    let repo = PostgresPostRepository::new(pool);
    let start = Utc::now();

    for i in 0..3 {
        let post = Post::publish(
            PostId::new(),
            author("uid-1", "Ann"),
            PostContent::try_new(format!("post {}", i)).unwrap(),
            None,
            start + Duration::seconds(i),
        )
        .unwrap();
        repo.create(&post).await.unwrap();
    }

    let posts = repo.list_recent(2).await.unwrap();
    let contents: Vec<&str> = posts.iter().map(|p| p.content().as_str()).collect();
    assert_eq!(contents, vec!["post 2", "post 1"]);
}
