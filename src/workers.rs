//! Independent workers that sleep and report, on OS threads or tokio tasks.
//! Workers share no state; the caller waits for every one of them.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tokio::task;
use tracing::info;

use crate::Error;

/// What a finished worker reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub name: String,
    pub slept: Duration,
}

fn worker_name(index: usize) -> String {
    format!("worker-{}", index + 1)
}

fn work(name: &str, delay: Duration) -> WorkerReport {
    info!("Thread {} starts", name);
    let start = Instant::now();
    thread::sleep(delay);
    let slept = start.elapsed();
    info!("Thread {} ends", name);
    WorkerReport {
        name: name.to_owned(),
        slept,
    }
}

/// Spawns `count` named threads that each sleep for `delay`, then joins them in spawn order.
pub fn run_workers(count: usize, delay: Duration) -> Result<Vec<WorkerReport>, Error> {
    let handles = (0..count)
        .map(|index| {
            let name = worker_name(index);
            thread::Builder::new()
                .name(name.clone())
                .spawn(move || work(&name, delay))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let reports = join_threads(handles);
    info!("Main thread ends");
    reports
}

/// Joins every handle in order, then reports the first worker that panicked.
fn join_threads(handles: Vec<JoinHandle<WorkerReport>>) -> Result<Vec<WorkerReport>, Error> {
    let outcomes: Vec<_> = handles
        .into_iter()
        .enumerate()
        .map(|(index, handle)| {
            let name = handle
                .thread()
                .name()
                .map_or_else(|| worker_name(index), str::to_owned);
            handle.join().map_err(|_| Error::WorkerPanicked(name))
        })
        .collect();
    outcomes.into_iter().collect()
}

/// Same as [`run_workers`], on tokio tasks sleeping with `tokio::time::sleep`.
pub async fn run_workers_async(count: usize, delay: Duration) -> Result<Vec<WorkerReport>, Error> {
    let handles: Vec<_> = (0..count)
        .map(|index| {
            let name = worker_name(index);
            tokio::spawn(async move {
                info!("Task {} starts", name);
                let start = Instant::now();
                tokio::time::sleep(delay).await;
                let slept = start.elapsed();
                info!("Task {} ends", name);
                WorkerReport { name, slept }
            })
        })
        .collect();

    let reports = join_tasks(handles).await;
    info!("Main task ends");
    reports
}

/// Awaits every task in order, then reports the first worker that failed.
async fn join_tasks(
    handles: Vec<task::JoinHandle<WorkerReport>>,
) -> Result<Vec<WorkerReport>, Error> {
    let mut outcomes = Vec::with_capacity(handles.len());
    for (index, handle) in handles.into_iter().enumerate() {
        outcomes.push(
            handle
                .await
                .map_err(|_| Error::WorkerPanicked(worker_name(index))),
        );
    }
    outcomes.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    const DELAY: Duration = Duration::from_millis(200);

    fn names(reports: &[WorkerReport]) -> Vec<&str> {
        reports.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_two_workers_run_concurrently() {
        let start = Instant::now();
        let reports = run_workers(2, DELAY).unwrap();
        let elapsed = start.elapsed();

        assert_eq!(names(&reports), vec!["worker-1", "worker-2"]);
        assert!(reports.iter().all(|r| r.slept >= DELAY));
        // Sequential execution would take at least twice the delay
        assert!(elapsed < DELAY * 2, "took {:?}", elapsed);
    }

    #[test]
    fn test_threads_carry_worker_names() {
        let handle = thread::Builder::new()
            .name(worker_name(0))
            .spawn(|| thread::current().name().map(str::to_owned))
            .unwrap();
        assert_eq!(handle.join().unwrap().as_deref(), Some("worker-1"));
    }

    #[test]
    fn test_no_workers() {
        assert!(run_workers(0, DELAY).unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_async_workers() {
        let start = Instant::now();
        let reports = run_workers_async(2, DELAY).await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(names(&reports), vec!["worker-1", "worker-2"]);
        assert!(reports.iter().all(|r| r.slept >= DELAY));
        assert!(elapsed < DELAY * 2, "took {:?}", elapsed);
    }

    #[tokio::test]
    async fn test_async_workers_on_current_thread_runtime() {
        let reports = run_workers_async(3, Duration::from_millis(5)).await.unwrap();
        assert_eq!(names(&reports), vec!["worker-1", "worker-2", "worker-3"]);
    }

    #[test]
    fn test_panicked_worker_is_reported_after_all_joined() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();
        let handles = vec![
            thread::Builder::new()
                .name(worker_name(0))
                .spawn(|| -> WorkerReport { panic!("worker failure") })
                .unwrap(),
            thread::Builder::new()
                .name(worker_name(1))
                .spawn(move || {
                    let report = work(&worker_name(1), DELAY);
                    flag.store(true, Ordering::SeqCst);
                    report
                })
                .unwrap(),
        ];

        let result = join_threads(handles);

        assert!(matches!(result, Err(Error::WorkerPanicked(name)) if name == "worker-1"));
        assert!(finished.load(Ordering::SeqCst));
    }

    async fn failing_task() -> WorkerReport {
        panic!("task failure")
    }

    #[tokio::test]
    async fn test_panicked_task_is_reported_after_all_awaited() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();
        let handles = vec![
            tokio::spawn(failing_task()),
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                flag.store(true, Ordering::SeqCst);
                WorkerReport {
                    name: worker_name(1),
                    slept: Duration::from_millis(50),
                }
            }),
        ];

        let result = join_tasks(handles).await;

        assert!(matches!(result, Err(Error::WorkerPanicked(name)) if name == "worker-1"));
        assert!(finished.load(Ordering::SeqCst));
    }
}
