// crates/account/tests/repositories/user_profile_repository_it.rs

use account::domain::entities::UserProfile;
use account::domain::repositories::UserProfileRepository;
use account::domain::value_objects::{AvatarUrl, Country, DisplayName, Email, Handle, SubjectId};
use account::infrastructure::postgres::repositories::PostgresUserProfileRepository;
use shared_kernel::infrastructure::postgres::transactions::PostgresTransaction;

fn profile(uid: &str, handle: &str) -> UserProfile {
    let name = DisplayName::try_new("Sonny").unwrap();
    UserProfile::builder(
        SubjectId::try_new(uid).unwrap(),
        name.clone(),
        Handle::try_new(handle).unwrap(),
        Email::try_new(format!("{}@rust.com", uid)).unwrap(),
    )
    .with_avatar(AvatarUrl::placeholder_for(&name))
    .with_country(Country::try_new("FR").unwrap())
    .build()
}

#[tokio::test]
async fn test_profile_lifecycle() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresUserProfileRepository::new(pool.clone());
    let original = profile("uid-1", "sonny_dev");

    let mut tx = PostgresTransaction::new(pool.begin().await.unwrap());
    repo.create(&original, &mut tx).await.unwrap();
    tx.take().await.unwrap().commit().await.unwrap();

    let found = repo
        .find_by_subject_id(original.subject_id(), None)
        .await
        .unwrap()
        .expect("Should find profile");
    assert_eq!(found.handle().as_str(), "sonny_dev");
    assert_eq!(found.country().as_str(), "FR");
    assert_eq!(found.avatar_url(), original.avatar_url());
    assert!(found.redeemed_think_codes().is_zero());

    let mut tx = PostgresTransaction::new(pool.begin().await.unwrap());
    repo.delete(original.subject_id(), &mut tx).await.unwrap();
    tx.take().await.unwrap().commit().await.unwrap();

    assert!(repo.find_by_subject_id(original.subject_id(), None).await.unwrap().is_none());
}

#[tokio::test]
async fn test_rollback_discards_profile() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresUserProfileRepository::new(pool.clone());
    let ghost = profile("ghost", "ghost_acc");

    let mut tx = PostgresTransaction::new(pool.begin().await.unwrap());
    repo.create(&ghost, &mut tx).await.unwrap();
    tx.take().await.unwrap().rollback().await.unwrap();

    assert!(repo.find_by_subject_id(ghost.subject_id(), None).await.unwrap().is_none());
}
