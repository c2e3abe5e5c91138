use serde::{Deserialize, Serialize};

use pacioli_core::ValueObject;

/// Side of an entry that increases an account's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    Debit,
    Credit,
}

impl NormalBalance {
    pub fn opposite(self) -> Self {
        match self {
            NormalBalance::Debit => NormalBalance::Credit,
            NormalBalance::Credit => NormalBalance::Debit,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NormalBalance::Debit => "debit",
            NormalBalance::Credit => "credit",
        }
    }
}

impl core::fmt::Display for NormalBalance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ledger account (value object).
///
/// Two accounts with the same name and normal balance are the same account,
/// however many times they were constructed. The name is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    name: String,
    normal_balance: NormalBalance,
}

impl Account {
    pub fn new(name: impl Into<String>, normal_balance: NormalBalance) -> Self {
        Self {
            name: name.into(),
            normal_balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn normal_balance(&self) -> NormalBalance {
        self.normal_balance
    }
}

impl ValueObject for Account {}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.normal_balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn accounts_are_compared_by_value() {
        let account = Account::new("Account", NormalBalance::Debit);
        let same_account = Account::new(String::from("Account"), NormalBalance::Debit);

        assert_eq!(account, same_account);

        let mut set = HashSet::new();
        set.insert(account);
        assert!(set.contains(&same_account));
    }

    #[test]
    fn normal_balance_is_part_of_identity() {
        let debit = Account::new("Suspense", NormalBalance::Debit);
        let credit = Account::new("Suspense", NormalBalance::Credit);

        assert_ne!(debit, credit);
    }

    #[test]
    fn opposite_flips_side() {
        assert_eq!(NormalBalance::Debit.opposite(), NormalBalance::Credit);
        assert_eq!(NormalBalance::Credit.opposite(), NormalBalance::Debit);
    }

    #[test]
    fn display_includes_normal_balance() {
        let account = Account::new("Cash", NormalBalance::Debit);
        assert_eq!(account.to_string(), "Cash (debit)");
    }

    #[test]
    fn serializes_normal_balance_lowercase() {
        let account = Account::new("Revenue", NormalBalance::Credit);
        let json = serde_json::to_value(&account).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "name": "Revenue", "normal_balance": "credit" })
        );
    }
}
