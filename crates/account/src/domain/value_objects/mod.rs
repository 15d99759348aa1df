mod avatar_url;
mod country;
mod display_name;
mod email;
mod handle;
mod password;
mod session_token;
mod subject_id;

#[cfg(test)]
mod tests;

pub use avatar_url::AvatarUrl;
pub use country::Country;
pub use display_name::DisplayName;
pub use email::Email;
pub use handle::Handle;
pub use password::Password;
pub use session_token::SessionToken;
pub use subject_id::SubjectId;
