use tracing::{info, warn};

use crate::accounts::Account;
use crate::dto::{AccountRow, StatementRow};
use crate::{Error, TourConfig};

/// Outcome counts of one [`Tour::run_round`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub interest_applied: usize,
}

/// Drives every admitted account through the same scripted round:
/// a deposit, a withdrawal, then interest for the savings accounts.
pub struct Tour {
    config: TourConfig,
    accounts: Vec<Box<dyn Account>>,
}

impl Tour {
    pub fn new(config: TourConfig) -> Self {
        Self {
            config,
            accounts: Vec::new(),
        }
    }

    /// Opens the account described by `row` and adds it to the tour.
    pub fn admit(&mut self, row: AccountRow) -> Result<(), Error> {
        let account = row.open()?;
        self.accounts.push(account);
        Ok(())
    }

    pub fn push(&mut self, account: Box<dyn Account>) {
        self.accounts.push(account);
    }

    pub fn accounts(&self) -> impl Iterator<Item = &dyn Account> {
        self.accounts.iter().map(|account| account.as_ref())
    }

    /// Runs the round once. Rejected operations are logged and counted,
    /// they never stop the round.
    pub fn run_round(&mut self) -> RoundSummary {
        let mut summary = RoundSummary::default();
        let TourConfig {
            deposit,
            withdrawal,
            ..
        } = self.config;

        for account in self.accounts.iter_mut() {
            for result in [account.deposit(deposit), account.withdraw(withdrawal)] {
                summary.record(account.owner(), result.map(|_| ()));
            }
            info!("{}", account.statement());
        }

        info!("Applying interest to savings accounts");
        for account in self.accounts.iter_mut() {
            if let Some(savings) = account.as_savings_mut() {
                let result = savings.apply_interest().map(|_| ());
                if result.is_ok() {
                    summary.interest_applied += 1;
                }
                summary.record(savings.owner(), result);
                info!("{}", savings.statement());
            }
        }
        summary
    }

    /// Current state of every account, in admission order.
    pub fn statements(&self) -> impl Iterator<Item = StatementRow> + '_ {
        self.accounts().map(|account| StatementRow::from(account))
    }
}

impl RoundSummary {
    fn record(&mut self, owner: &str, result: Result<(), Error>) {
        match result {
            Ok(()) => self.succeeded += 1,
            Err(err) => {
                warn!(owner, error = %err, "operation rejected");
                self.failed += 1;
            }
        }
    }
}
