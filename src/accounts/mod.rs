//! Account types for the tour. Provides:
//! - A plain account with an encapsulated owner and balance ([`BankAccount`])
//! - An interest-bearing account ([`SavingsAccount`])
//! - An account that may overdraw for a flat fee ([`CheckingAccount`])
//!
//! All three are driven through the [`Account`] trait so a tour can hold
//! them side by side as `Box<dyn Account>`.

mod base;
mod checking;
mod savings;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Error;

pub use base::BankAccount;
pub use checking::CheckingAccount;
pub use savings::SavingsAccount;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Basic,
    Savings,
    Checking,
}

pub trait Account: fmt::Debug + Send {
    fn owner(&self) -> &str;

    fn balance(&self) -> Decimal;

    fn kind(&self) -> AccountKind;

    /// Adds a positive amount and returns the new balance.
    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, Error>;

    /// Removes an amount and returns the new balance.
    /// Whether the balance may go negative depends on the account type.
    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, Error>;

    fn statement(&self) -> String {
        format!("{}'s balance: ${}", self.owner(), self.balance())
    }

    /// Gives access to interest operations when the account earns interest.
    fn as_savings_mut(&mut self) -> Option<&mut SavingsAccount> {
        None
    }
}
