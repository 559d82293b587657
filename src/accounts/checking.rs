use rust_decimal::Decimal;
use tracing::{info, warn};

use super::{Account, AccountKind, BankAccount};
use crate::Error;

/// An account that lets withdrawals overdraw the balance for a flat fee.
/// There is no overdraft limit.
#[derive(Debug)]
pub struct CheckingAccount {
    inner: BankAccount,
    overdraft_fee: Decimal,
}

impl CheckingAccount {
    pub fn new(owner: impl Into<String>, initial_balance: Decimal, overdraft_fee: Decimal) -> Self {
        Self {
            inner: BankAccount::new(owner, initial_balance),
            overdraft_fee,
        }
    }

    pub fn overdraft_fee(&self) -> Decimal {
        self.overdraft_fee
    }
}

impl Account for CheckingAccount {
    fn owner(&self) -> &str {
        self.inner.owner()
    }

    fn balance(&self) -> Decimal {
        self.inner.balance()
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Checking
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        self.inner.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        if amount <= Decimal::ZERO {
            warn!(owner = %self.owner(), %amount, "Withdrawal failed. Invalid amount.");
            return Err(Error::AmountMustBePositive);
        }
        let balance = self.inner.balance();
        if amount <= balance {
            return self.inner.withdraw(amount);
        }

        let new_balance = balance - amount - self.overdraft_fee;
        self.inner.set_balance(new_balance);
        info!(
            "{} overdrew ${} (fee ${}). New balance: ${}",
            self.owner(),
            amount,
            self.overdraft_fee,
            new_balance
        );
        Ok(new_balance)
    }
}
