mod base;
mod oauth;

pub use base::BaseClient;
pub use oauth::OAuthClient;
