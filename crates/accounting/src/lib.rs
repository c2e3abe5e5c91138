//! Accounting module (double-entry journal entries).
//!
//! Pure domain logic only: no IO, no logging, no persistence concerns.
//!
//! Sign convention: credit amounts are stored negated, so a balanced entry's
//! lines sum to exactly zero (`Debit 100` pairs with `Credit -100`).

pub mod account;
pub mod error;
pub mod journal;
pub mod line;
mod sum;

pub use account::{Account, NormalBalance};
pub use error::JournalEntryError;
pub use journal::{JournalEntry, JournalEntryDraft};
pub use line::{CreditLine, DebitLine, JournalEntryLine};
