// crates/account/tests/common/memory_world.rs

use std::sync::Arc;
use account::application::delete_account::DeleteAccountUseCase;
use account::application::get_profile_by_handle::GetProfileByHandleUseCase;
use account::application::register_account::{RegisterAccountCommand, RegisterAccountUseCase};
use account::application::resolve_session::ResolveSessionUseCase;
use account::application::sign_in::SignInUseCase;
use account::application::sign_out::SignOutUseCase;
use account::domain::value_objects::{Country, DisplayName, Email, Handle, Password};
use account::infrastructure::memory::{
    MemoryHandleReservationRepository, MemoryIdentityProvider, MemorySessionRepository,
    MemoryUserProfileRepository,
};
use shared_kernel::clock::SystemClock;
use shared_kernel::infrastructure::memory::{MemoryDocumentStore, MemoryTransactionManager};

/// Tous les cas d'usage câblés sur les adaptateurs en mémoire
pub struct MemoryWorld {
    pub store: Arc<MemoryDocumentStore>,
    pub identities: Arc<MemoryIdentityProvider>,
    pub register: RegisterAccountUseCase,
    pub sign_in: SignInUseCase,
    pub sign_out: SignOutUseCase,
    pub resolve: ResolveSessionUseCase,
    pub delete: DeleteAccountUseCase,
    pub by_handle: GetProfileByHandleUseCase,
}

impl MemoryWorld {
    pub fn new() -> Self {
        let clock = Arc::new(SystemClock);
        let store = Arc::new(MemoryDocumentStore::new());
        let identities = Arc::new(MemoryIdentityProvider::new(clock.clone()));
        let profiles = Arc::new(MemoryUserProfileRepository::new(store.clone()));
        let reservations = Arc::new(MemoryHandleReservationRepository::new(store.clone()));
        let sessions = Arc::new(MemorySessionRepository::new(clock.clone()));
        let tx_manager = Arc::new(MemoryTransactionManager::new(store.clone()));

        Self {
            register: RegisterAccountUseCase::new(
                identities.clone(),
                profiles.clone(),
                reservations.clone(),
                sessions.clone(),
                tx_manager.clone(),
                clock.clone(),
            ),
            sign_in: SignInUseCase::new(identities.clone(), profiles.clone(), sessions.clone(), clock.clone()),
            sign_out: SignOutUseCase::new(sessions.clone()),
            resolve: ResolveSessionUseCase::new(sessions.clone(), clock),
            delete: DeleteAccountUseCase::new(
                identities.clone(),
                profiles.clone(),
                reservations.clone(),
                sessions,
                tx_manager,
            ),
            by_handle: GetProfileByHandleUseCase::new(reservations, profiles),
            store,
            identities,
        }
    }
}

pub fn command(name: &str, handle: &str, email: &str) -> RegisterAccountCommand {
    RegisterAccountCommand {
        display_name: DisplayName::try_new(name).unwrap(),
        handle: Handle::try_new(handle).unwrap(),
        email: Email::try_new(email).unwrap(),
        password: Password::try_new("secret123").unwrap(),
        country: Country::try_new("US").unwrap(),
    }
}
