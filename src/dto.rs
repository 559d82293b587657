use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use crate::accounts::{Account, AccountKind, BankAccount, CheckingAccount, SavingsAccount};
use crate::Error;

/// One account to open, as read from the input CSV.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AccountRow {
    pub owner: String,
    pub kind: AccountKind,
    #[serde(deserialize_with = "deserialize_decimal_4dp")]
    pub balance: Decimal,
    #[serde(deserialize_with = "deserialize_opt_decimal_4dp")]
    pub rate: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_opt_decimal_4dp")]
    pub fee: Option<Decimal>,
}

impl AccountRow {
    /// Opens the account described by the row.
    /// Savings rows need a `rate` and checking rows need a `fee`.
    pub fn open(self) -> Result<Box<dyn Account>, Error> {
        Ok(match self.kind {
            AccountKind::Basic => Box::new(BankAccount::new(self.owner, self.balance)),
            AccountKind::Savings => Box::new(SavingsAccount::new(
                self.owner,
                self.balance,
                self.rate.ok_or(Error::MissingField("rate"))?,
            )),
            AccountKind::Checking => Box::new(CheckingAccount::new(
                self.owner,
                self.balance,
                self.fee.ok_or(Error::MissingField("fee"))?,
            )),
        })
    }
}

/// Final state of one account, as written to the output CSV.
#[derive(Debug, Serialize, PartialEq)]
pub struct StatementRow {
    pub owner: String,
    pub kind: AccountKind,
    pub balance: Decimal,
}

impl From<&dyn Account> for StatementRow {
    fn from(account: &dyn Account) -> Self {
        Self {
            owner: account.owner().to_owned(),
            kind: account.kind(),
            balance: account.balance().normalize(),
        }
    }
}

fn truncate_4dp(dec: Decimal) -> Decimal {
    dec.round_dp_with_strategy(4, RoundingStrategy::ToZero)
}

fn deserialize_decimal_4dp<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    <Decimal as Deserialize>::deserialize(deserializer).map(truncate_4dp)
}

fn deserialize_opt_decimal_4dp<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer).map(|opt_dec| opt_dec.map(truncate_4dp))
}
