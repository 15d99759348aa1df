use std::sync::Arc;
use chrono::{TimeZone, Utc};
use shared_kernel::clock::FixedClock;
use shared_kernel::errors::DomainError;

use crate::application::sign_in::{SignInCommand, SignInUseCase};
use crate::domain::entities::{Identity, UserProfile, ANONYMOUS_DISPLAY_NAME};
use crate::domain::ports::IdentityProviderStub;
use crate::domain::repositories::{SessionRepositoryStub, UserProfileRepositoryStub};
use crate::domain::value_objects::{DisplayName, Email, Handle, Password, SubjectId};

fn setup() -> (SignInUseCase, Arc<IdentityProviderStub>, Arc<UserProfileRepositoryStub>, Arc<SessionRepositoryStub>) {
    let provider = Arc::new(IdentityProviderStub::new());
    let profiles = Arc::new(UserProfileRepositoryStub::new());
    let sessions = Arc::new(SessionRepositoryStub::new());
    let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()));

    provider.add_identity(
        Identity::new(SubjectId::from_raw("uid-ann"), Email::try_new("ann@x.io").unwrap()),
        "secret123",
    );

    let use_case = SignInUseCase::new(provider.clone(), profiles.clone(), sessions.clone(), clock);
    (use_case, provider, profiles, sessions)
}

fn command(password: &str) -> SignInCommand {
    SignInCommand {
        email: Email::try_new("ann@x.io").unwrap(),
        password: Password::try_new(password).unwrap(),
    }
}

#[tokio::test]
async fn test_sign_in_loads_profile() {
    let (use_case, _, profiles, sessions) = setup();
    profiles.add_profile(
        UserProfile::builder(
            SubjectId::from_raw("uid-ann"),
            DisplayName::try_new("Ann").unwrap(),
            Handle::try_new("ann").unwrap(),
            Email::try_new("ann@x.io").unwrap(),
        )
        .build(),
    );

    let session = use_case.execute(command("secret123")).await.unwrap();

    assert_eq!(session.display_name(), "Ann");
    assert_eq!(session.handle().map(|h| h.as_str()), Some("ann"));
    assert_eq!(sessions.count(), 1);
}

#[tokio::test]
async fn test_sign_in_without_profile_uses_provisional_view() {
    let (use_case, _, _, sessions) = setup();

    let session = use_case.execute(command("secret123")).await.unwrap();

    assert!(session.profile().is_none());
    assert_eq!(session.display_name(), ANONYMOUS_DISPLAY_NAME);
    assert!(session.redeemed_think_codes().is_zero());
    assert_eq!(sessions.count(), 1);
}

#[tokio::test]
async fn test_sign_in_wrong_password() {
    let (use_case, _, _, sessions) = setup();

    let result = use_case.execute(command("wrong-password")).await;

    assert!(matches!(result, Err(DomainError::Unauthorized { .. })));
    assert_eq!(sessions.count(), 0);
}

#[tokio::test]
async fn test_sign_in_profile_store_failure_is_propagated() {
    let (use_case, _, profiles, sessions) = setup();
    *profiles.error_to_return.lock().unwrap() = Some(DomainError::Infrastructure("unavailable".into()));

    let result = use_case.execute(command("secret123")).await;

    assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    assert_eq!(sessions.count(), 0);
}
