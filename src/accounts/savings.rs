use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use super::{Account, AccountKind, BankAccount};
use crate::Error;

/// An account that earns interest on demand at a fixed rate (e.g. `0.02` = 2%).
#[derive(Debug)]
pub struct SavingsAccount {
    inner: BankAccount,
    interest_rate: Decimal,
}

impl SavingsAccount {
    pub fn new(owner: impl Into<String>, initial_balance: Decimal, interest_rate: Decimal) -> Self {
        Self {
            inner: BankAccount::new(owner, initial_balance),
            interest_rate,
        }
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// Deposits `balance * rate`, truncated to 4 decimal places, and returns the interest.
    /// The interest goes through the regular deposit rules, so an account with
    /// no positive balance earns nothing and gets an error instead.
    pub fn apply_interest(&mut self) -> Result<Decimal, Error> {
        let interest = (self.inner.balance() * self.interest_rate)
            .round_dp_with_strategy(4, RoundingStrategy::ToZero);
        self.inner.deposit(interest)?;
        info!(
            "Applied interest ${:.2} at rate {:.1}%.",
            interest,
            self.interest_rate * Decimal::ONE_HUNDRED
        );
        Ok(interest)
    }
}

impl Account for SavingsAccount {
    fn owner(&self) -> &str {
        self.inner.owner()
    }

    fn balance(&self) -> Decimal {
        self.inner.balance()
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Savings
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        self.inner.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        self.inner.withdraw(amount)
    }

    fn as_savings_mut(&mut self) -> Option<&mut SavingsAccount> {
        Some(self)
    }
}
