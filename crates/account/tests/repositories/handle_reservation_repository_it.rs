// crates/account/tests/repositories/handle_reservation_repository_it.rs

use account::domain::entities::{HandleReservation, UserProfile};
use account::domain::repositories::{HandleReservationRepository, UserProfileRepository};
use account::domain::value_objects::{DisplayName, Email, Handle, SubjectId};
use account::infrastructure::postgres::repositories::{
    PostgresHandleReservationRepository, PostgresUserProfileRepository,
};
use shared_kernel::errors::DomainError;
use shared_kernel::infrastructure::postgres::transactions::PostgresTransaction;
use sqlx::PgPool;

async fn seed_profile(pool: &PgPool, uid: &str, handle: &str) -> SubjectId {
    let repo = PostgresUserProfileRepository::new(pool.clone());
    let profile = UserProfile::builder(
        SubjectId::try_new(uid).unwrap(),
        DisplayName::try_new("Ann").unwrap(),
        Handle::try_new(handle).unwrap(),
        Email::try_new(format!("{}@x.io", uid)).unwrap(),
    )
    .build();

    let mut tx = PostgresTransaction::new(pool.begin().await.unwrap());
    repo.create(&profile, &mut tx).await.unwrap();
    tx.take().await.unwrap().commit().await.unwrap();
    profile.subject_id().clone()
}

#[tokio::test]
async fn test_reservation_is_found_by_normalized_handle() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresHandleReservationRepository::new(pool.clone());
    let owner = seed_profile(&pool, "uid-1", "ann").await;

    let mut tx = PostgresTransaction::new(pool.begin().await.unwrap());
    repo.create(&HandleReservation::new(Handle::try_new("ann").unwrap(), owner.clone()), &mut tx)
        .await
        .unwrap();
    tx.take().await.unwrap().commit().await.unwrap();

    let found = repo
        .find_by_handle(&Handle::try_new(" ANN ").unwrap(), None)
        .await
        .unwrap()
        .expect("Should find reservation");
    assert!(found.is_owned_by(&owner));
}

#[tokio::test]
async fn test_second_reservation_violates_primary_key() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresHandleReservationRepository::new(pool.clone());
    let first = seed_profile(&pool, "uid-1", "ann").await;
    let second = seed_profile(&pool, "uid-2", "ann").await;
    let handle = Handle::try_new("ann").unwrap();

    let mut tx = PostgresTransaction::new(pool.begin().await.unwrap());
    repo.create(&HandleReservation::new(handle.clone(), first), &mut tx).await.unwrap();
    tx.take().await.unwrap().commit().await.unwrap();

    let mut tx = PostgresTransaction::new(pool.begin().await.unwrap());
    let result = repo.create(&HandleReservation::new(handle, second), &mut tx).await;

    assert!(matches!(
        result,
        Err(DomainError::AlreadyExists { entity: "HandleReservation", field: "handle", .. })
    ));
}

#[tokio::test]
async fn test_deleting_owner_profile_frees_handle() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let reservations = PostgresHandleReservationRepository::new(pool.clone());
    let profiles = PostgresUserProfileRepository::new(pool.clone());
    let owner = seed_profile(&pool, "uid-1", "ann").await;
    let handle = Handle::try_new("ann").unwrap();

    let mut tx = PostgresTransaction::new(pool.begin().await.unwrap());
    reservations.create(&HandleReservation::new(handle.clone(), owner.clone()), &mut tx).await.unwrap();
    tx.take().await.unwrap().commit().await.unwrap();

    // ON DELETE CASCADE sur usernames.subject_id
    let mut tx = PostgresTransaction::new(pool.begin().await.unwrap());
    profiles.delete(&owner, &mut tx).await.unwrap();
    tx.take().await.unwrap().commit().await.unwrap();

    assert!(reservations.find_by_handle(&handle, None).await.unwrap().is_none());
}
