use std::error::Error;
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::{
    csv_utils::{read_csv, write_csv},
    dto::AccountRow,
    Tour, TourConfig,
};

/// Runs a tour over the accounts listed in the input file and writes their
/// final statements to the provided writer.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file listing the accounts to open
/// * `config` - Amounts used for the round
/// * `writer` - Where to write the statements (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, config: TourConfig, writer: W) -> Result<(), Box<dyn Error>>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut tour = Tour::new(config);

    for row in read_csv::<AccountRow, _>(input_path)? {
        // CSV parsing errors are critical - propagate them
        let row = row?;
        let owner = row.owner.clone();
        // An incomplete row only skips that account
        if let Err(err) = tour.admit(row) {
            warn!(%owner, error = %err, "account skipped");
        }
    }

    let summary = tour.run_round();
    info!(?summary, "round finished");

    write_csv(writer, tour.statements())?;
    Ok(())
}
