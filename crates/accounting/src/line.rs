//! Journal entry lines.
//!
//! The side of a line is a type-level fact: a [`DebitLine`] can only go into an
//! entry's debit collection and a [`CreditLine`] only into its credit
//! collection. Lines carry no invariants of their own; zero and either-sign
//! amounts are accepted here and judged by [`crate::JournalEntry`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::account::{Account, NormalBalance};

/// Read-only view shared by both line variants.
pub trait JournalEntryLine {
    fn account(&self) -> &Account;

    /// Signed contribution to the entry total (credits are negated).
    fn amount(&self) -> Decimal;

    /// Which side of the entry this line sits on.
    fn side(&self) -> NormalBalance;
}

macro_rules! impl_line_variant {
    ($(#[$meta:meta])* $t:ident, $side:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $t {
            account: Account,
            amount: Decimal,
        }

        impl $t {
            pub fn new(account: Account, amount: Decimal) -> Self {
                Self { account, amount }
            }
        }

        impl JournalEntryLine for $t {
            fn account(&self) -> &Account {
                &self.account
            }

            fn amount(&self) -> Decimal {
                self.amount
            }

            fn side(&self) -> NormalBalance {
                $side
            }
        }
    };
}

impl_line_variant!(
    /// Debit-side line.
    DebitLine,
    NormalBalance::Debit
);
impl_line_variant!(
    /// Credit-side line. The amount is stored negated so it cancels debits.
    CreditLine,
    NormalBalance::Credit
);
