use rust_decimal::Decimal;
use tracing::{info, warn};

use super::{Account, AccountKind};
use crate::Error;

#[derive(Debug)]
pub struct BankAccount {
    owner: String,
    balance: Decimal,
}

impl BankAccount {
    pub fn new(owner: impl Into<String>, initial_balance: Decimal) -> Self {
        Self {
            owner: owner.into(),
            balance: initial_balance,
        }
    }

    /// Overwrites the balance without any checks.
    /// Only account types layered on top of this one may bypass the rules.
    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }
}

impl Account for BankAccount {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn balance(&self) -> Decimal {
        self.balance
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Basic
    }

    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        if amount <= Decimal::ZERO {
            warn!(owner = %self.owner, %amount, "Deposit amount must be positive.");
            return Err(Error::AmountMustBePositive);
        }
        self.balance += amount;
        info!(
            "{} deposited ${}. New balance: ${}",
            self.owner, amount, self.balance
        );
        Ok(self.balance)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, Error> {
        if amount <= Decimal::ZERO {
            warn!(owner = %self.owner, %amount, "Withdrawal failed. Invalid amount.");
            return Err(Error::AmountMustBePositive);
        }
        if amount > self.balance {
            warn!(owner = %self.owner, %amount, "Withdrawal failed. Insufficient funds.");
            return Err(Error::InsufficientFunds);
        }
        self.balance -= amount;
        info!(
            "{} withdrew ${}. New balance: ${}",
            self.owner, amount, self.balance
        );
        Ok(self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_account_keeps_initial_balance() {
        let account = BankAccount::new("Alice", dec!(500.0));
        assert_eq!(account.owner(), "Alice");
        assert_eq!(account.balance(), dec!(500.0));
    }

    #[test]
    fn test_negative_initial_balance_is_accepted() {
        let account = BankAccount::new("Alice", dec!(-20));
        assert_eq!(account.balance(), dec!(-20));
    }

    #[test]
    fn test_deposit() {
        let mut account = BankAccount::new("Alice", dec!(500));
        assert_eq!(account.deposit(dec!(100)).unwrap(), dec!(600));
        assert_eq!(account.balance(), dec!(600));
    }

    #[test]
    fn test_deposit_must_be_positive() {
        let mut account = BankAccount::new("Alice", dec!(500));

        assert!(matches!(
            account.deposit(Decimal::ZERO),
            Err(Error::AmountMustBePositive)
        ));
        assert!(matches!(
            account.deposit(dec!(-1)),
            Err(Error::AmountMustBePositive)
        ));
        assert_eq!(account.balance(), dec!(500));
    }

    #[test]
    fn test_withdraw() {
        let mut account = BankAccount::new("Alice", dec!(500));
        assert_eq!(account.withdraw(dec!(50)).unwrap(), dec!(450));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut account = BankAccount::new("Alice", dec!(500));
        assert_eq!(account.withdraw(dec!(500)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut account = BankAccount::new("Alice", dec!(10));
        assert!(matches!(
            account.withdraw(dec!(10.01)),
            Err(Error::InsufficientFunds)
        ));
        assert_eq!(account.balance(), dec!(10));
    }

    #[test]
    fn test_withdraw_must_be_positive() {
        let mut account = BankAccount::new("Alice", dec!(10));
        assert!(matches!(
            account.withdraw(dec!(-5)),
            Err(Error::AmountMustBePositive)
        ));
        assert_eq!(account.balance(), dec!(10));
    }

    #[test]
    fn test_set_balance_bypasses_checks() {
        let mut account = BankAccount::new("Alice", dec!(10));
        account.set_balance(dec!(-100));
        assert_eq!(account.balance(), dec!(-100));
    }
}
