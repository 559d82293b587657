use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rusty_primer::accounts::{BankAccount, CheckingAccount, SavingsAccount};
use rusty_primer::{run, run_async, Tour, TourConfig};
use std::io;
use std::time::Duration;
use tokio::runtime::Runtime;

const NUM_ACCOUNTS: u64 = 100_000;

struct NoopWriter;

impl io::Write for NoopWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Just return the length of input without actually writing
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn populated_tour() -> Tour {
    let mut tour = Tour::new(TourConfig::default());
    for i in 1..=NUM_ACCOUNTS {
        let balance = Decimal::from(i);
        let owner = format!("owner{}", i);
        match i % 3 {
            1 => tour.push(Box::new(BankAccount::new(owner, balance))),
            2 => tour.push(Box::new(SavingsAccount::new(owner, balance, dec!(0.03)))),
            _ => tour.push(Box::new(CheckingAccount::new(owner, -balance, dec!(35)))),
        }
    }
    tour
}

fn tour_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour");

    group.throughput(Throughput::Elements(NUM_ACCOUNTS));
    group.measurement_time(Duration::from_secs(20));
    group.sample_size(20);

    group.bench_function("round_100K_accounts", |b| {
        b.iter_batched(
            populated_tour,
            |mut tour| tour.run_round(),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn runners(c: &mut Criterion) {
    let mut group = c.benchmark_group("runner");

    group.bench_function("sync_accounts_csv", |b| {
        b.iter(|| {
            run("data/accounts.csv", TourConfig::default(), NoopWriter).unwrap();
        });
    });

    group.bench_function("async_accounts_csv", |b| {
        let rt = Runtime::new().unwrap();
        b.to_async(rt).iter(|| async {
            run_async("data/accounts.csv", TourConfig::default(), NoopWriter)
                .await
                .unwrap()
        });
    });

    group.finish();
}

criterion_group!(benches, tour_round, runners);
criterion_main!(benches);
