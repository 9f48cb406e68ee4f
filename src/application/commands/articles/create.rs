// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleDraft, DraftViolation, ValidArticleDraftSpec},
};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub price: Decimal,
    pub currency: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

impl From<CreateArticleCommand> for ArticleDraft {
    fn from(command: CreateArticleCommand) -> Self {
        Self {
            name: command.name,
            description: command.description,
            category: command.category,
            price: command.price,
            currency: command.currency,
        }
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    price: Decimal,
    currency: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            name: self.name.ok_or("name is required")?,
            description: self.description.ok_or("description is required")?,
            category: self.category,
            price: self.price,
            currency: self.currency,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let draft = ArticleDraft::from(command);

        if let Err(violation) = ValidArticleDraftSpec::new(&draft).check() {
            log_violation(&draft, violation);
            return Err(ApplicationError::validation(violation.to_string()));
        }

        let created = self.repo.add(draft).await.map_err(|err| {
            tracing::debug!(error = %err, "failed to add article");
            ApplicationError::with_context(err, "Failed to add article")
        })?;

        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}

fn log_violation(draft: &ArticleDraft, violation: DraftViolation) {
    match violation {
        DraftViolation::NameTooLong => {
            tracing::debug!(name = %draft.name, "article name too long");
        }
        DraftViolation::DescriptionTooLong => {
            tracing::debug!(description = %draft.description, "article description too long");
        }
        DraftViolation::CategoryTooLong => {
            tracing::debug!(category = ?draft.category, "article category too long");
        }
        DraftViolation::NegativePrice => {
            tracing::debug!(price = %draft.price, "article price negative");
        }
        DraftViolation::MissingCurrency => {
            tracing::debug!(price = %draft.price, "article currency missing for price");
        }
        DraftViolation::InvalidCurrency => {
            tracing::debug!(currency = ?draft.currency, "article currency invalid");
        }
    }
}
