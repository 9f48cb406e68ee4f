// tests/support/builders.rs
use std::str::FromStr;

use catalog_core::application::commands::articles::CreateArticleCommand;
use catalog_core::domain::article::ArticleDraft;
use rust_decimal::Decimal;

pub fn price(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

pub fn memory_stick_draft() -> ArticleDraft {
    ArticleDraft {
        name: "Branded Memory Stick".into(),
        description: "Branded 16 GB memory stick.".into(),
        category: Some("USB flash drive".into()),
        price: price("17.89"),
        currency: Some("NOK".into()),
    }
}

pub fn mug_draft() -> ArticleDraft {
    ArticleDraft {
        name: "Branded Drinking Mug".into(),
        description: "Porcelain drinking cup with your logo on it.".into(),
        category: Some("Mug".into()),
        price: Decimal::ZERO,
        currency: None,
    }
}

pub fn memory_stick_command() -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .name("Branded Memory Stick")
        .description("Branded 16 GB memory stick.")
        .category("USB flash drive")
        .price(price("17.89"))
        .currency("NOK")
        .build()
        .unwrap()
}

pub fn mug_command() -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .name("Branded Drinking Mug")
        .description("Porcelain drinking cup with your logo on it.")
        .category("Mug")
        .build()
        .unwrap()
}

pub fn command_from(draft: ArticleDraft) -> CreateArticleCommand {
    CreateArticleCommand {
        name: draft.name,
        description: draft.description,
        category: draft.category,
        price: draft.price,
        currency: draft.currency,
    }
}
