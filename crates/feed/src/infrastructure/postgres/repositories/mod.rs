mod postgres_post_repository;

pub use postgres_post_repository::PostgresPostRepository;
