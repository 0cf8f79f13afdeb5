// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use pressroom::application::dto::AuthenticatedUser;
use pressroom::application::error::{ApplicationError, ApplicationResult};
use pressroom::application::ports::auth::SessionAuthenticator;
use pressroom::application::ports::time::Clock;
use pressroom::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleTranslation, ArticleWriteRepository,
    NewArticle, NewTranslation, TranslationId,
};
use pressroom::domain::errors::{DomainError, DomainResult};

/// In-memory stand-in for the Postgres repositories. Enforces the same
/// one-translation-per-language rule the unique constraint enforces in the
/// real store, so the functional suite exercises genuine behavior.
pub struct InMemoryArticleRepository {
    articles: Mutex<BTreeMap<i64, Article>>,
    next_article_id: AtomicI64,
    next_translation_id: AtomicI64,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            articles: Mutex::new(BTreeMap::new()),
            next_article_id: AtomicI64::new(1),
            next_translation_id: AtomicI64::new(1),
        }
    }

    /// Insert a prebuilt article, the fixture equivalent of a factory row.
    pub fn seed(&self, article: Article) {
        let id = i64::from(article.id);
        let max_translation = article
            .translations
            .iter()
            .map(|translation| i64::from(translation.id))
            .max()
            .unwrap_or(0);
        self.next_article_id.fetch_max(id + 1, Ordering::SeqCst);
        self.next_translation_id
            .fetch_max(max_translation + 1, Ordering::SeqCst);
        self.articles.lock().unwrap().insert(id, article);
    }

    pub fn translation_count(&self, article_id: i64) -> usize {
        self.articles
            .lock()
            .unwrap()
            .get(&article_id)
            .map(|article| article.translations.len())
            .unwrap_or(0)
    }

    fn materialize(&self, translation: NewTranslation, now: DateTime<Utc>) -> ArticleTranslation {
        let id = self.next_translation_id.fetch_add(1, Ordering::SeqCst);
        ArticleTranslation {
            id: TranslationId::new(id).unwrap(),
            headline: translation.headline,
            description: translation.description,
            body: translation.body,
            state_id: translation.state_id,
            language_id: translation.language_id,
            created_at: now,
        }
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_article_id.fetch_add(1, Ordering::SeqCst);
        let translation = self.materialize(article.translation, article.created_at);
        let article = Article {
            id: ArticleId::new(id).unwrap(),
            category_id: article.category_id,
            template_id: article.template_id,
            translations: vec![translation],
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        self.articles.lock().unwrap().insert(id, article.clone());
        Ok(article)
    }

    async fn add_translation(
        &self,
        article_id: ArticleId,
        translation: NewTranslation,
        now: DateTime<Utc>,
    ) -> DomainResult<Article> {
        let translation = self.materialize(translation, now);
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(article_id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.add_translation(translation, now)?;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.articles
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .get(&i64::from(id))
            .cloned())
    }

    async fn list(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let articles = self.articles.lock().unwrap();
        let mut all: Vec<Article> = articles.values().cloned().collect();
        all.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(i64::from(b.id).cmp(&i64::from(a.id)))
        });
        all.truncate(limit.clamp(1, 100) as usize);
        Ok(all)
    }
}

/// Accepts exactly one session id, the way an identity service fixture would.
pub struct StaticSessionAuthenticator {
    pub session_id: String,
    pub user: AuthenticatedUser,
}

#[async_trait]
impl SessionAuthenticator for StaticSessionAuthenticator {
    async fn authenticate(&self, session_id: &str) -> ApplicationResult<AuthenticatedUser> {
        if session_id == self.session_id {
            Ok(self.user.clone())
        } else {
            Err(ApplicationError::unauthorized("unknown or expired session"))
        }
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn default_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
