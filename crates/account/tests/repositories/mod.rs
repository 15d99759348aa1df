// crates/account/tests/repositories/mod.rs

mod handle_reservation_repository_it;
mod user_profile_repository_it;
