mod fetch_user;
mod update_profile;

pub use fetch_user::FetchUserProfileService;
pub use update_profile::UpdateUserProfileService;
