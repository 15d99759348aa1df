// crates/account/src/application/mod.rs

pub mod delete_account;
pub mod get_profile;
pub mod get_profile_by_handle;
pub mod register_account;
pub mod resolve_session;
pub mod sign_in;
pub mod sign_out;
