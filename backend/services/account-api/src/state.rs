// backend/services/account-api/src/state.rs

use std::sync::Arc;
use account::application::delete_account::DeleteAccountUseCase;
use account::application::get_profile::GetProfileUseCase;
use account::application::get_profile_by_handle::GetProfileByHandleUseCase;
use account::application::register_account::RegisterAccountUseCase;
use account::application::resolve_session::ResolveSessionUseCase;
use account::application::sign_in::SignInUseCase;
use account::application::sign_out::SignOutUseCase;
use account::domain::ports::IdentityProvider;
use account::domain::repositories::{HandleReservationRepository, UserProfileRepository};
use account::infrastructure::identity_toolkit::{IdentityToolkitConfig, IdentityToolkitProvider};
use account::infrastructure::memory::{
    MemoryHandleReservationRepository, MemoryIdentityProvider, MemorySessionRepository,
    MemoryUserProfileRepository,
};
use feed::application::create_post::CreatePostUseCase;
use feed::application::delete_post::DeletePostUseCase;
use feed::application::list_feed::ListFeedUseCase;
use feed::domain::repositories::PostRepository;
use feed::infrastructure::memory::{MemoryMediaStorage, MemoryPostRepository};
use shared_kernel::clock::{Clock, SystemClock};
use shared_kernel::domain::transaction::TransactionManager;
use shared_kernel::errors::AppResult;
use shared_kernel::infrastructure::memory::{MemoryDocumentStore, MemoryTransactionManager};

use crate::config::{ApiConfig, IdentityBackend, StorageBackend};

/// Adaptateurs de persistance choisis au démarrage
struct Persistence {
    profiles: Arc<dyn UserProfileRepository>,
    reservations: Arc<dyn HandleReservationRepository>,
    posts: Arc<dyn PostRepository>,
    tx_manager: Arc<dyn TransactionManager>,
}

#[derive(Clone)]
pub struct AppState {
    pub register: Arc<RegisterAccountUseCase>,
    pub sign_in: Arc<SignInUseCase>,
    pub sign_out: Arc<SignOutUseCase>,
    pub resolve_session: Arc<ResolveSessionUseCase>,
    pub delete_account: Arc<DeleteAccountUseCase>,
    pub get_profile: Arc<GetProfileUseCase>,
    pub get_profile_by_handle: Arc<GetProfileByHandleUseCase>,
    pub create_post: Arc<CreatePostUseCase>,
    pub list_feed: Arc<ListFeedUseCase>,
    pub delete_post: Arc<DeletePostUseCase>,
    pub media: Arc<MemoryMediaStorage>,
}

impl AppState {
    pub async fn from_config(config: &ApiConfig) -> AppResult<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let identity_provider: Arc<dyn IdentityProvider> = match config.identity {
            IdentityBackend::Memory => Arc::new(MemoryIdentityProvider::new(clock.clone())),
            IdentityBackend::Toolkit => {
                let toolkit = IdentityToolkitConfig::from_env()?;
                Arc::new(IdentityToolkitProvider::new(toolkit, clock.clone())?)
            }
        };

        let persistence = match config.storage {
            StorageBackend::Memory => memory_persistence(),
            StorageBackend::Postgres => postgres_persistence().await?,
        };

        tracing::info!(storage = ?config.storage, identity = ?config.identity, "🔌 Adapters selected");

        Ok(Self::assemble(
            identity_provider,
            persistence,
            Arc::new(MemoryMediaStorage::new(config.media_public_base_url.clone())),
            clock,
        ))
    }

    /// Tout en mémoire (tests, développement local)
    pub fn in_memory(identity_provider: Arc<dyn IdentityProvider>, media_public_base_url: &str) -> Self {
        Self::assemble(
            identity_provider,
            memory_persistence(),
            Arc::new(MemoryMediaStorage::new(media_public_base_url)),
            Arc::new(SystemClock),
        )
    }

    fn assemble(
        identity_provider: Arc<dyn IdentityProvider>,
        persistence: Persistence,
        media: Arc<MemoryMediaStorage>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let Persistence { profiles, reservations, posts, tx_manager } = persistence;
        let sessions = Arc::new(MemorySessionRepository::new(clock.clone()));

        Self {
            register: Arc::new(RegisterAccountUseCase::new(
                identity_provider.clone(),
                profiles.clone(),
                reservations.clone(),
                sessions.clone(),
                tx_manager.clone(),
                clock.clone(),
            )),
            sign_in: Arc::new(SignInUseCase::new(
                identity_provider.clone(),
                profiles.clone(),
                sessions.clone(),
                clock.clone(),
            )),
            sign_out: Arc::new(SignOutUseCase::new(sessions.clone())),
            resolve_session: Arc::new(ResolveSessionUseCase::new(sessions.clone(), clock.clone())),
            delete_account: Arc::new(DeleteAccountUseCase::new(
                identity_provider,
                profiles.clone(),
                reservations.clone(),
                sessions,
                tx_manager,
            )),
            get_profile: Arc::new(GetProfileUseCase::new(profiles.clone())),
            get_profile_by_handle: Arc::new(GetProfileByHandleUseCase::new(reservations, profiles)),
            create_post: Arc::new(CreatePostUseCase::new(posts.clone(), media.clone(), clock)),
            list_feed: Arc::new(ListFeedUseCase::new(posts.clone())),
            delete_post: Arc::new(DeletePostUseCase::new(posts, media.clone())),
            media,
        }
    }
}

fn memory_persistence() -> Persistence {
    let store = Arc::new(MemoryDocumentStore::new());

    Persistence {
        profiles: Arc::new(MemoryUserProfileRepository::new(store.clone())),
        reservations: Arc::new(MemoryHandleReservationRepository::new(store.clone())),
        posts: Arc::new(MemoryPostRepository::new(store.clone())),
        tx_manager: Arc::new(MemoryTransactionManager::new(store)),
    }
}

#[cfg(feature = "postgres")]
async fn postgres_persistence() -> AppResult<Persistence> {
    use account::infrastructure::postgres::repositories::{
        PostgresHandleReservationRepository, PostgresUserProfileRepository,
    };
    use feed::infrastructure::postgres::repositories::PostgresPostRepository;
    use shared_kernel::infrastructure::postgres::factories::{create_postgres_pool, DbConfig};
    use shared_kernel::infrastructure::postgres::transactions::PostgresTransactionManager;

    let pool = create_postgres_pool(&DbConfig::from_env()?).await?;

    account::infrastructure::postgres::utils::run_postgres_migrations(&pool).await?;
    feed::infrastructure::postgres::utils::run_postgres_migrations(&pool).await?;
    tracing::info!("✅ Postgres migrations completed");

    Ok(Persistence {
        profiles: Arc::new(PostgresUserProfileRepository::new(pool.clone())),
        reservations: Arc::new(PostgresHandleReservationRepository::new(pool.clone())),
        posts: Arc::new(PostgresPostRepository::new(pool.clone())),
        tx_manager: Arc::new(PostgresTransactionManager::new(pool)),
    })
}

#[cfg(not(feature = "postgres"))]
async fn postgres_persistence() -> AppResult<Persistence> {
    use shared_kernel::errors::{AppError, ErrorCode};

    Err(AppError::new(
        ErrorCode::InternalError,
        "STORAGE_BACKEND=postgres requires the `postgres` feature",
    ))
}
