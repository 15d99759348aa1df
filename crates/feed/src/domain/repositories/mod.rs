mod post_repository;

pub use post_repository::PostRepository;

#[cfg(test)]
mod post_repository_stub;
#[cfg(test)]
pub use post_repository_stub::PostRepositoryStub;
