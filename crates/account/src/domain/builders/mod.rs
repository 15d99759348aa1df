mod user_profile_builder;

pub use user_profile_builder::UserProfileBuilder;
