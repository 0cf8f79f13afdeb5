// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod input;
mod service;
mod translate;

pub use create::CreateArticleCommand;
pub use delete::DeleteArticleCommand;
pub use input::TranslationInput;
pub use service::ArticleCommandService;
pub use translate::TranslateArticleCommand;
