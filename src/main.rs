use std::env;
use std::error::Error;
use std::io;
use std::process;

use rust_decimal::Decimal;
use tokio::runtime::Runtime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use rusty_primer::fault::process_file;
use rusty_primer::sequence::{count_up_to, RemoteControl};
use rusty_primer::timing::timer;
use rusty_primer::workers::run_workers;
use rusty_primer::{run, run_async, TourConfig};

const USAGE: &str = "Usage: rusty-primer <command>

Commands:
  tour <accounts.csv>            run a tour and print statements as CSV
  tour-async <accounts.csv>      same, reading the file asynchronously
  workers [count]                run sleeping workers (default 2)
  count <limit>                  count from 1 up to limit
  remote                         flip through the remote control channels
  process-file <path> [divisor]  read a file and divide 10 by divisor (default 0)
  hello                          say hello, timed";

fn main() {
    init_tracing();
    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn init_tracing() {
    let log_format = env::var("PRIMER_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout is reserved for command output
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .init();
    }
}

fn run_app() -> Result<(), Box<dyn Error + Send + Sync>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let config = TourConfig::from_env()?;

    match args.as_slice() {
        ["tour", path] => run(path, config, io::stdout()).map_err(|err| err.to_string())?,
        ["tour-async", path] => Runtime::new()?.block_on(run_async(path, config, io::stdout()))?,
        ["workers"] => print_workers(2, &config)?,
        ["workers", count] => print_workers(count.parse()?, &config)?,
        ["count", limit] => {
            for n in count_up_to(limit.parse()?) {
                println!("{}", n);
            }
        }
        ["remote"] => {
            for channel in RemoteControl::new() {
                println!("{}", channel);
            }
        }
        ["process-file", path] => print_processed(path, Decimal::ZERO)?,
        ["process-file", path, divisor] => print_processed(path, divisor.parse()?)?,
        ["hello"] => {
            let say_hello = timer("say_hello", |()| println!("Hello!"));
            say_hello(());
        }
        _ => return Err(USAGE.into()),
    }
    Ok(())
}

fn print_workers(count: usize, config: &TourConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    for report in run_workers(count, config.worker_delay)? {
        println!("{} slept {:?}", report.name, report.slept);
    }
    Ok(())
}

fn print_processed(path: &str, divisor: Decimal) -> Result<(), Box<dyn Error + Send + Sync>> {
    match process_file(path, divisor)? {
        Some(processed) => {
            println!("{}", processed.content);
            println!("10 / {} = {}", divisor, processed.quotient);
        }
        None => println!("Nothing processed: {} not found", path),
    }
    Ok(())
}
