use std::env;
use std::error::Error;
use std::process;

use rusty_primer::workers::run_workers_async;
use rusty_primer::{run_async, TourConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    if let Err(err) = run_app().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run_app() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err("Usage: cargo run --example async_main -- accounts.csv".into());
    }
    let config = TourConfig::from_env()?;

    let reports = run_workers_async(2, config.worker_delay).await?;
    eprintln!("{} workers finished", reports.len());

    run_async(args[1].clone(), config, std::io::stdout()).await
}
