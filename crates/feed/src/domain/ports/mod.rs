mod media_storage;

pub use media_storage::MediaStorage;

#[cfg(test)]
mod media_storage_stub;
#[cfg(test)]
pub use media_storage_stub::MediaStorageStub;
