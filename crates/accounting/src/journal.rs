use std::collections::HashSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::{Account, NormalBalance};
use crate::error::JournalEntryError;
use crate::line::{CreditLine, DebitLine, JournalEntryLine};
use crate::sum::exact_sum;

/// A validated double-entry journal entry.
///
/// Construction is all-or-nothing: [`JournalEntry::new`] either returns an
/// entry for which every invariant below holds, or an error and nothing else.
/// There are no setters, so a constructed entry stays valid.
///
/// - the date is a real date (not `MIN_UTC`, not the `Default` epoch)
/// - both sides have at least one line
/// - no account appears on both sides
/// - debit and credit amounts sum to exactly zero
///
/// The entry owns copies of its lines; the caller's collections can be reused
/// or mutated freely afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "JournalEntryDraft", into = "JournalEntryDraft")]
pub struct JournalEntry {
    date: DateTime<Utc>,
    description: Option<String>,
    debits: Vec<DebitLine>,
    credits: Vec<CreditLine>,
}

impl JournalEntry {
    /// Validate the inputs and freeze them into an entry.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// date, empty debits, empty credits, side exclusivity, balance.
    pub fn new(
        date: DateTime<Utc>,
        description: Option<String>,
        debits: &[DebitLine],
        credits: &[CreditLine],
    ) -> Result<Self, JournalEntryError> {
        validate(date, debits, credits)?;

        Ok(Self {
            date,
            description,
            debits: debits.to_vec(),
            credits: credits.to_vec(),
        })
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn debits(&self) -> &[DebitLine] {
        &self.debits
    }

    pub fn credits(&self) -> &[CreditLine] {
        &self.credits
    }

    /// All lines, debits first, each in input order.
    pub fn lines(&self) -> impl Iterator<Item = &dyn JournalEntryLine> + '_ {
        let debits = self.debits.iter().map(|l| l as &dyn JournalEntryLine);
        let credits = self.credits.iter().map(|l| l as &dyn JournalEntryLine);
        debits.chain(credits)
    }

    /// Sum of the debit amounts (equal to the negated credit sum).
    ///
    /// `None` when that sum does not fit in a `Decimal`; the entry can still
    /// balance, e.g. debits `[MAX, 1]` against credits `[-MAX, -1]`.
    pub fn total(&self) -> Option<Decimal> {
        exact_sum(self.debits.iter().map(|l| l.amount()))
    }
}

fn validate(
    date: DateTime<Utc>,
    debits: &[DebitLine],
    credits: &[CreditLine],
) -> Result<(), JournalEntryError> {
    ensure_real_date(date)?;

    if debits.is_empty() {
        return Err(JournalEntryError::EmptyLines(NormalBalance::Debit));
    }
    if credits.is_empty() {
        return Err(JournalEntryError::EmptyLines(NormalBalance::Credit));
    }

    ensure_exclusive_sides(debits, credits)?;

    let variance = variance(debits, credits)?;
    if !variance.is_zero() {
        return Err(JournalEntryError::Unbalanced { variance });
    }

    Ok(())
}

fn ensure_real_date(date: DateTime<Utc>) -> Result<(), JournalEntryError> {
    if date == DateTime::<Utc>::MIN_UTC || date == DateTime::<Utc>::default() {
        return Err(JournalEntryError::InvalidDate(date));
    }
    Ok(())
}

fn ensure_exclusive_sides(
    debits: &[DebitLine],
    credits: &[CreditLine],
) -> Result<(), JournalEntryError> {
    let debit_accounts: HashSet<&Account> = debits.iter().map(|l| l.account()).collect();

    match credits
        .iter()
        .map(|l| l.account())
        .find(|account| debit_accounts.contains(account))
    {
        Some(shared) => Err(JournalEntryError::NonExclusiveAccount(shared.clone())),
        None => Ok(()),
    }
}

/// Exact signed sum of every line; zero when the entry balances.
fn variance(debits: &[DebitLine], credits: &[CreditLine]) -> Result<Decimal, JournalEntryError> {
    let amounts = debits
        .iter()
        .map(|l| l.amount())
        .chain(credits.iter().map(|l| l.amount()));

    exact_sum(amounts).ok_or(JournalEntryError::AmountOverflow)
}

/// Unvalidated shape of a journal entry, as it arrives from outside.
///
/// Every field is optional so that absence can be reported precisely instead
/// of failing inside the deserializer. A missing date is treated as the zero
/// date and rejected as such. Unknown keys are a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JournalEntryDraft {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub debits: Option<Vec<DebitLine>>,
    #[serde(default)]
    pub credits: Option<Vec<CreditLine>>,
}

impl TryFrom<JournalEntryDraft> for JournalEntry {
    type Error = JournalEntryError;

    fn try_from(draft: JournalEntryDraft) -> Result<Self, Self::Error> {
        let debits = draft
            .debits
            .ok_or(JournalEntryError::MissingLines(NormalBalance::Debit))?;
        let credits = draft
            .credits
            .ok_or(JournalEntryError::MissingLines(NormalBalance::Credit))?;
        let date = draft.date.unwrap_or_default();

        // The draft's vectors are already exclusively ours; no second copy.
        validate(date, &debits, &credits)?;

        Ok(Self {
            date,
            description: draft.description,
            debits,
            credits,
        })
    }
}

impl From<JournalEntry> for JournalEntryDraft {
    fn from(entry: JournalEntry) -> Self {
        Self {
            date: Some(entry.date),
            description: entry.description,
            debits: Some(entry.debits),
            credits: Some(entry.credits),
        }
    }
}
