// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, TranslateArticleCommand, TranslationInput,
    },
    dto::ArticleDto,
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::{Value, json};

fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// The admin API takes the initial translation inline with the article
/// fields. Values stay untyped here; the field rules in the application
/// layer decide between missing and mistyped.
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub headline: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub template_id: Option<Value>,
    #[serde(default)]
    pub state_id: Option<Value>,
    #[serde(default)]
    pub category_id: Option<Value>,
    #[serde(default)]
    pub language_id: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct TranslateArticleRequest {
    #[serde(default)]
    pub headline: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub state_id: Option<Value>,
    #[serde(default)]
    pub language_id: Option<Value>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id: article_id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        category_id: payload.category_id,
        template_id: payload.template_id,
        translation: TranslationInput {
            headline: payload.headline,
            description: payload.description,
            body: payload.body,
            state_id: payload.state_id,
            language_id: payload.language_id,
        },
    };

    state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn translate_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(article_id): Path<i64>,
    Json(payload): Json<TranslateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = TranslateArticleCommand {
        article_id,
        translation: TranslationInput {
            headline: payload.headline,
            description: payload.description,
            body: payload.body,
            state_id: payload.state_id,
            language_id: payload.language_id,
        },
    };

    state
        .services
        .article_commands
        .translate_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(article_id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id: article_id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
