use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::{csv_utils::write_csv, dto::AccountRow, Tour, TourConfig};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::{debug, info, warn};

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Runs a tour async over the accounts listed in the input file and writes their
/// final statements to the provided writer.
/// Spawns two tasks:
/// * CSV reader - streams account rows from the input file, deserializes them and sends them to the processor via channel.
/// * Processor - opens an account per received row until the channel is closed, then runs the round.
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub async fn run<P, W>(input_path: P, config: TourConfig, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_accounts(input_path, tx));
    let processor_handle = tokio::spawn(process_accounts(rx, config));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    let tour = processor_handle.await?;

    write_csv(writer, tour.statements())?;
    Ok(())
}

/// Reads and deserializes account rows from a CSV file.
/// Returns them through the provided channel.
async fn read_accounts(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<AccountRow>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<AccountRow>();
    while let Some(result) = records.next().await {
        // CSV parsing errors are critical - propagate them
        let row = result?;
        if tx.send(row).await.is_err() {
            debug!("processor gone, reader stopping");
            break;
        }
    }
    Ok(())
}

/// Admits accounts received through the channel.
/// Runs the round and returns the tour once the channel is closed by the reader.
async fn process_accounts(mut rx: mpsc::Receiver<AccountRow>, config: TourConfig) -> Tour {
    let mut tour = Tour::new(config);
    while let Some(row) = rx.recv().await {
        let owner = row.owner.clone();
        if let Err(err) = tour.admit(row) {
            warn!(%owner, error = %err, "account skipped");
        }
    }
    let summary = tour.run_round();
    info!(?summary, "round finished");
    tour
}
