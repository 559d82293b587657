//! This example generates a CSV file of accounts for a number of owners
//! supplied as a command-line argument.
//!
//! The CSV file can then be fed to the `rusty-primer tour` command.
//!
//! Example (300 accounts):
//! ```bash
//! cargo run --example generator 300 > data/300_accounts.csv
//! ```
//! ### Maths
//! Account `i` (1-based) is opened by owner `owner{i}`, its kind chosen by `i % 3`.
//! With the default round (deposit D = 100, withdrawal W = 50):
//!
//! - **basic** (`i % 3 == 1`), opened with `10·i`:
//!   `10·i + D - W = 10·i + 50`.
//! - **savings** (`i % 3 == 2`), opened with `10·i` at rate `0.1`:
//!   `(10·i + 50)·1.1 = 11·i + 55`.
//! - **checking** (`i % 3 == 0`), opened with `-100` and fee `5·i`:
//!   the deposit brings it to 0, so the withdrawal overdraws to `-50 - 5·i`.

use csv::Writer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rusty_primer::accounts::AccountKind;
use rusty_primer::AccountRow;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: cargo run --example generator <num_accounts>");
        std::process::exit(1);
    }
    let num_accounts: u32 = args[1].parse()?;

    let mut wtr = Writer::from_writer(std::io::stdout());
    for i in 1..=num_accounts {
        wtr.serialize(account_row(i))?;
    }
    wtr.flush()?;
    Ok(())
}

fn account_row(i: u32) -> AccountRow {
    let scale = Decimal::from(i);
    let owner = format!("owner{}", i);
    match i % 3 {
        1 => AccountRow {
            owner,
            kind: AccountKind::Basic,
            balance: dec!(10) * scale,
            rate: None,
            fee: None,
        },
        2 => AccountRow {
            owner,
            kind: AccountKind::Savings,
            balance: dec!(10) * scale,
            rate: Some(dec!(0.1)),
            fee: None,
        },
        _ => AccountRow {
            owner,
            kind: AccountKind::Checking,
            balance: dec!(-100),
            rate: None,
            fee: Some(dec!(5) * scale),
        },
    }
}
