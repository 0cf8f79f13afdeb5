pub mod articles;
pub mod auth;

pub use articles::{ArticleDto, TranslationDto};
pub use auth::AuthenticatedUser;
