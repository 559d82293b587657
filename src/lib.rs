pub mod accounts;
mod config;
mod csv_utils;
mod dto;
mod error;
pub mod fault;
pub mod mathlib;
mod runner;
pub mod sequence;
pub mod timing;
mod tour;
pub mod workers;

pub use config::TourConfig;
pub use dto::{AccountRow, StatementRow};
pub use error::Error;
pub use runner::{run, run_async};
pub use tour::{RoundSummary, Tour};
