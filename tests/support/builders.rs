// tests/support/builders.rs
use chrono::Utc;

use pressroom::domain::article::*;

pub struct ArticleBuilder {
    id: i64,
    category_id: i64,
    template_id: i64,
    translations: Vec<(i64, i64, String)>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            category_id: 1,
            template_id: 1,
            translations: vec![(1, 1, "My First Article".into())],
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    /// Replace the default translation set; tuples are
    /// (translation id, language id, headline).
    pub fn translations(mut self, translations: Vec<(i64, i64, &str)>) -> Self {
        self.translations = translations
            .into_iter()
            .map(|(id, language_id, headline)| (id, language_id, headline.to_string()))
            .collect();
        self
    }

    pub fn build(self) -> Article {
        let now = Utc::now();
        let translations = self
            .translations
            .into_iter()
            .map(|(id, language_id, headline)| ArticleTranslation {
                id: TranslationId::new(id).unwrap(),
                headline: Headline::new(headline).unwrap(),
                description: None,
                body: ArticleBody::new("Lorem ipsum").unwrap(),
                state_id: StateId::new(1).unwrap(),
                language_id: LanguageId::new(language_id).unwrap(),
                created_at: now,
            })
            .collect();

        Article {
            id: ArticleId::new(self.id).unwrap(),
            category_id: CategoryId::new(self.category_id).unwrap(),
            template_id: TemplateId::new(self.template_id).unwrap(),
            translations,
            created_at: now,
            updated_at: now,
        }
    }
}
