// crates/feed/src/infrastructure/postgres/repositories/postgres_post_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::{Pool, Postgres, query, query_as};

use crate::domain::entities::Post;
use crate::domain::repositories::PostRepository;
use crate::domain::value_objects::PostId;
use crate::infrastructure::postgres::rows::PostgresPostRow;

pub struct PostgresPostRepository {
    pool: Pool<Postgres>,
}

impl PostgresPostRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: &Post) -> Result<()> {
        let row = PostgresPostRow::from(post);

        <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query(
                    r#"
                    INSERT INTO posts (
                        id, author_id, author_name, author_avatar_url, content,
                        media_url, media_object_path, media_type, likes, comments, created_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    "#,
                )
                .bind(row.id)
                .bind(row.author_id)
                .bind(row.author_name)
                .bind(row.author_avatar_url)
                .bind(row.content)
                .bind(row.media_url)
                .bind(row.media_object_path)
                .bind(row.media_type)
                .bind(row.likes)
                .bind(row.comments)
                .bind(row.created_at)
                .execute(conn)
                .await
                .map_domain::<Post>()?;
                Ok(())
            })
        })
        .await
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>> {
        let uuid = id.as_uuid();

        let row = <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresPostRow>("SELECT * FROM posts WHERE id = $1")
                    .bind(uuid)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<Post>()
            })
        })
        .await?;

        row.map(Post::try_from).transpose()
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Post>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let rows = <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query_as::<_, PostgresPostRow>(
                    "SELECT * FROM posts ORDER BY created_at DESC, id DESC LIMIT $1",
                )
                .bind(limit)
                .fetch_all(conn)
                .await
                .map_domain::<Post>()
            })
        })
        .await?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn delete(&self, id: &PostId) -> Result<()> {
        let uuid = id.as_uuid();

        <dyn Transaction>::execute_on(&self.pool, None, |conn| {
            Box::pin(async move {
                query("DELETE FROM posts WHERE id = $1")
                    .bind(uuid)
                    .execute(conn)
                    .await
                    .map_domain::<Post>()?;
                Ok(())
            })
        })
        .await
    }
}
