use crate::domain::article::entity::ArticleDraft;
use crate::domain::currency::is_iso4217_code;
use crate::domain::errors::DomainError;
use rust_decimal::Decimal;
use thiserror::Error;

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_DESCRIPTION_LENGTH: usize = 2048;
pub const MAX_CATEGORY_LENGTH: usize = 64;

/// The first business rule an [`ArticleDraft`] breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftViolation {
    #[error("Article name cannot be longer than 64 characters.")]
    NameTooLong,
    #[error("Article description cannot be longer than 2048 characters.")]
    DescriptionTooLong,
    #[error("Article category cannot be longer than 64 characters.")]
    CategoryTooLong,
    #[error("Article price cannot be negative.")]
    NegativePrice,
    #[error("Article currency must be specified when price is greater than zero.")]
    MissingCurrency,
    #[error("Article currency must be a valid ISO 4217 currency code.")]
    InvalidCurrency,
}

impl From<DraftViolation> for DomainError {
    fn from(value: DraftViolation) -> Self {
        DomainError::Validation(value.to_string())
    }
}

pub struct ValidArticleDraftSpec<'a> {
    draft: &'a ArticleDraft,
}

impl<'a> ValidArticleDraftSpec<'a> {
    pub fn new(draft: &'a ArticleDraft) -> Self {
        Self { draft }
    }

    pub fn is_satisfied(&self) -> bool {
        self.check().is_ok()
    }

    /// Evaluates the rules in a fixed order and stops at the first failure.
    pub fn check(&self) -> Result<(), DraftViolation> {
        let draft = self.draft;

        if char_len(&draft.name) > MAX_NAME_LENGTH {
            return Err(DraftViolation::NameTooLong);
        }

        if char_len(&draft.description) > MAX_DESCRIPTION_LENGTH {
            return Err(DraftViolation::DescriptionTooLong);
        }

        if draft
            .category
            .as_deref()
            .is_some_and(|category| char_len(category) > MAX_CATEGORY_LENGTH)
        {
            return Err(DraftViolation::CategoryTooLong);
        }

        if draft.price < Decimal::ZERO {
            return Err(DraftViolation::NegativePrice);
        }

        if draft.price > Decimal::ZERO {
            let currency = draft.currency.as_deref();
            if currency.is_none_or(|c| c.trim().is_empty()) {
                return Err(DraftViolation::MissingCurrency);
            }
            if !is_iso4217_code(currency) {
                return Err(DraftViolation::InvalidCurrency);
            }
        }

        Ok(())
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn draft() -> ArticleDraft {
        ArticleDraft {
            name: "Branded Memory Stick".into(),
            description: "Branded 16 GB memory stick.".into(),
            category: Some("USB flash drive".into()),
            price: Decimal::from_str("17.89").unwrap(),
            currency: Some("NOK".into()),
        }
    }

    fn check(draft: &ArticleDraft) -> Result<(), DraftViolation> {
        ValidArticleDraftSpec::new(draft).check()
    }

    #[test]
    fn accepts_a_valid_priced_draft() {
        assert!(ValidArticleDraftSpec::new(&draft()).is_satisfied());
    }

    #[test]
    fn free_article_needs_no_currency() {
        let mut free = draft();
        free.price = Decimal::ZERO;
        free.currency = None;
        assert_eq!(check(&free), Ok(()));
    }

    #[test]
    fn length_limits_are_inclusive() {
        let mut at_limit = draft();
        at_limit.name = "n".repeat(MAX_NAME_LENGTH);
        at_limit.description = "d".repeat(MAX_DESCRIPTION_LENGTH);
        at_limit.category = Some("c".repeat(MAX_CATEGORY_LENGTH));
        assert_eq!(check(&at_limit), Ok(()));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut accented = draft();
        accented.name = "é".repeat(MAX_NAME_LENGTH);
        assert_eq!(check(&accented), Ok(()));
    }

    #[test]
    fn reports_each_rule() {
        let mut d = draft();
        d.name = "n".repeat(MAX_NAME_LENGTH + 1);
        assert_eq!(check(&d), Err(DraftViolation::NameTooLong));

        let mut d = draft();
        d.description = "d".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert_eq!(check(&d), Err(DraftViolation::DescriptionTooLong));

        let mut d = draft();
        d.category = Some("c".repeat(MAX_CATEGORY_LENGTH + 1));
        assert_eq!(check(&d), Err(DraftViolation::CategoryTooLong));

        let mut d = draft();
        d.price = Decimal::from_str("-0.01").unwrap();
        assert_eq!(check(&d), Err(DraftViolation::NegativePrice));

        let mut d = draft();
        d.currency = None;
        assert_eq!(check(&d), Err(DraftViolation::MissingCurrency));

        let mut d = draft();
        d.currency = Some("  ".into());
        assert_eq!(check(&d), Err(DraftViolation::MissingCurrency));

        let mut d = draft();
        d.currency = Some("ABC".into());
        assert_eq!(check(&d), Err(DraftViolation::InvalidCurrency));
    }

    #[test]
    fn first_failing_rule_wins() {
        let mut d = draft();
        d.name = "n".repeat(MAX_NAME_LENGTH + 1);
        d.price = Decimal::from_str("-1").unwrap();
        d.currency = None;
        assert_eq!(check(&d), Err(DraftViolation::NameTooLong));

        let mut d = draft();
        d.price = Decimal::from_str("-1").unwrap();
        d.currency = Some("nope".into());
        assert_eq!(check(&d), Err(DraftViolation::NegativePrice));
    }

    #[test]
    fn lowercase_currency_is_valid() {
        let mut d = draft();
        d.currency = Some("nok".into());
        assert_eq!(check(&d), Ok(()));
    }

    #[test]
    fn violation_converts_to_validation_error() {
        let err: DomainError = DraftViolation::NegativePrice.into();
        assert_eq!(
            err,
            DomainError::Validation("Article price cannot be negative.".into())
        );
    }
}
