use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use pacioli_core::DomainError;

use crate::account::{Account, NormalBalance};

/// Why a journal entry could not be constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JournalEntryError {
    /// A line collection was absent (only reachable through a draft).
    #[error("{0}s are required")]
    MissingLines(NormalBalance),

    #[error("{0}s must contain at least one line")]
    EmptyLines(NormalBalance),

    #[error("{0} is not a valid entry date")]
    InvalidDate(DateTime<Utc>),

    #[error("account {0} appears on both the debit and credit side")]
    NonExclusiveAccount(Account),

    #[error("debits and credits do not net to zero (variance {variance})")]
    Unbalanced { variance: Decimal },

    #[error("line amounts sum to a value outside the decimal range")]
    AmountOverflow,
}

impl JournalEntryError {
    /// Name of the offending argument, when a single one is to blame.
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            JournalEntryError::MissingLines(side) | JournalEntryError::EmptyLines(side) => {
                Some(match side {
                    NormalBalance::Debit => "debits",
                    NormalBalance::Credit => "credits",
                })
            }
            JournalEntryError::InvalidDate(_) => Some("date"),
            JournalEntryError::NonExclusiveAccount(_)
            | JournalEntryError::Unbalanced { .. }
            | JournalEntryError::AmountOverflow => None,
        }
    }
}

impl From<JournalEntryError> for DomainError {
    fn from(err: JournalEntryError) -> Self {
        match err {
            JournalEntryError::MissingLines(_)
            | JournalEntryError::EmptyLines(_)
            | JournalEntryError::InvalidDate(_) => DomainError::validation(err.to_string()),
            JournalEntryError::NonExclusiveAccount(_)
            | JournalEntryError::Unbalanced { .. }
            | JournalEntryError::AmountOverflow => DomainError::invariant(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn messages_name_the_side() {
        assert_eq!(
            JournalEntryError::MissingLines(NormalBalance::Credit).to_string(),
            "credits are required"
        );
        assert_eq!(
            JournalEntryError::EmptyLines(NormalBalance::Debit).to_string(),
            "debits must contain at least one line"
        );
    }

    #[test]
    fn unbalanced_reports_variance() {
        let err = JournalEntryError::Unbalanced { variance: dec!(-10) };
        assert_eq!(
            err.to_string(),
            "debits and credits do not net to zero (variance -10)"
        );
    }

    #[test]
    fn argument_names_the_offender() {
        assert_eq!(
            JournalEntryError::EmptyLines(NormalBalance::Credit).argument(),
            Some("credits")
        );
        assert_eq!(
            JournalEntryError::InvalidDate(DateTime::<Utc>::MIN_UTC).argument(),
            Some("date")
        );
        assert_eq!(JournalEntryError::AmountOverflow.argument(), None);
    }

    #[test]
    fn maps_onto_domain_error_categories() {
        let err: DomainError = JournalEntryError::EmptyLines(NormalBalance::Debit).into();
        assert!(matches!(err, DomainError::Validation(_)));

        let account = Account::new("Cash", NormalBalance::Debit);
        let err: DomainError = JournalEntryError::NonExclusiveAccount(account).into();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("Cash (debit)")),
            other => panic!("expected invariant violation, got {other:?}"),
        }
    }
}
