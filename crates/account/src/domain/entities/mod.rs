mod handle_reservation;
mod identity;
mod session;
mod user_profile;


pub use handle_reservation::HandleReservation;
pub use identity::{Identity, IdentityCredential};
pub use session::{Session, ANONYMOUS_DISPLAY_NAME};
pub use user_profile::UserProfile;
