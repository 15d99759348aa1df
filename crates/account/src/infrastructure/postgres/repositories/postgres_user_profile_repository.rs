// crates/account/src/infrastructure/postgres/repositories/postgres_user_profile_repository.rs

use async_trait::async_trait;
use shared_kernel::domain::transaction::Transaction;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::postgres::mappers::SqlxErrorExt;
use sqlx::{Pool, Postgres, query, query_as};

use crate::domain::entities::UserProfile;
use crate::domain::repositories::UserProfileRepository;
use crate::domain::value_objects::SubjectId;
use crate::infrastructure::postgres::rows::PostgresUserProfileRow;

pub struct PostgresUserProfileRepository {
    pool: Pool<Postgres>,
}

impl PostgresUserProfileRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserProfileRepository for PostgresUserProfileRepository {
    async fn find_by_subject_id(
        &self,
        subject_id: &SubjectId,
        tx: Option<&mut dyn Transaction>,
    ) -> Result<Option<UserProfile>> {
        let id = subject_id.as_str().to_string();
        let has_tx = tx.is_some();

        let row = <dyn Transaction>::execute_on(&self.pool, tx, |conn| {
            Box::pin(async move {
                let sql = if has_tx {
                    "SELECT * FROM users WHERE subject_id = $1 FOR UPDATE"
                } else {
                    "SELECT * FROM users WHERE subject_id = $1"
                };

                query_as::<_, PostgresUserProfileRow>(sql)
                    .bind(id)
                    .fetch_optional(conn)
                    .await
                    .map_domain::<UserProfile>()
            })
        })
        .await?;

        row.map(UserProfile::try_from).transpose()
    }

    async fn create(&self, profile: &UserProfile, tx: &mut dyn Transaction) -> Result<()> {
        let row = PostgresUserProfileRow::from(profile);

        <dyn Transaction>::execute_on(&self.pool, Some(tx), |conn| {
            Box::pin(async move {
                query(
                    r#"
                    INSERT INTO users (
                        subject_id, display_name, handle, email, avatar_url, country,
                        redeemed_gift_codes, redeemed_think_codes, created_at
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    "#,
                )
                .bind(row.subject_id)
                .bind(row.display_name)
                .bind(row.handle)
                .bind(row.email)
                .bind(row.avatar_url)
                .bind(row.country)
                .bind(row.redeemed_gift_codes)
                .bind(row.redeemed_think_codes)
                .bind(row.created_at)
                .execute(conn)
                .await
                .map_domain::<UserProfile>()?;
                Ok(())
            })
        })
        .await
    }

    async fn delete(&self, subject_id: &SubjectId, tx: &mut dyn Transaction) -> Result<()> {
        let id = subject_id.as_str().to_string();

        <dyn Transaction>::execute_on(&self.pool, Some(tx), |conn| {
            Box::pin(async move {
                query("DELETE FROM users WHERE subject_id = $1")
                    .bind(id)
                    .execute(conn)
                    .await
                    .map_domain::<UserProfile>()?;
                Ok(())
            })
        })
        .await
    }
}
