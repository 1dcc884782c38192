//! End-to-end: a dispatcher pulling from a job source and feeding a worker.
//!
//! Exercises the pull-based dispatch contract: the caller checks
//! `available_capacity`, claims that many jobs from the source, and writes
//! each outcome back via `update`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use jobrun::{HandlerFn, Job, JobError, JobQueue, JobStatus, MemoryQueue, Worker};

#[derive(Clone, Serialize, Deserialize)]
struct Crawl {
    url: String,
    fail: bool,
}

fn crawl_job(url: &str, fail: bool) -> Job {
    Job::encode(&Crawl {
        url: url.into(),
        fail,
    })
    .unwrap()
}

/// Drains the queue through the worker, acking every outcome to the source.
async fn drain(queue: &MemoryQueue, worker: &Worker<Crawl>) -> Vec<Job> {
    let mut finished = Vec::new();
    loop {
        let batch = queue
            .dequeue_batch(worker.name(), worker.available_capacity())
            .await
            .unwrap();
        if batch.is_empty() {
            break;
        }
        for mut job in batch {
            job.attempts += 1;
            match worker.execute(job.clone()).await {
                Ok(()) => {
                    job.status = JobStatus::Done;
                }
                Err(err) => {
                    job.status = JobStatus::Failed;
                    job.last_error = Some(err.to_string());
                }
            }
            finished.push(job);
        }
    }
    finished
}

#[tokio::test]
async fn dispatcher_processes_queue_and_acks_outcomes() {
    let queue = MemoryQueue::new();
    queue.enqueue(crawl_job("https://a.example", false)).await.unwrap();
    queue.enqueue(crawl_job("https://b.example", true)).await.unwrap();
    queue.enqueue(crawl_job("https://c.example", false)).await.unwrap();

    let processed = Arc::new(AtomicU32::new(0));
    let p = processed.clone();
    let worker = Worker::builder(
        "crawler",
        HandlerFn::arc(move |c: Crawl| {
            let p = p.clone();
            async move {
                p.fetch_add(1, Ordering::SeqCst);
                if c.fail {
                    Err(JobError::Fail {
                        error: format!("unreachable: {}", c.url),
                    })
                } else {
                    Ok(())
                }
            }
        }),
    )
    .concurrency(2)
    .build();

    let finished = drain(&queue, &worker).await;

    assert_eq!(processed.load(Ordering::SeqCst), 3);
    assert_eq!(finished.len(), 3);
    assert!(queue.is_empty());

    let done = finished
        .iter()
        .filter(|j| j.status == JobStatus::Done)
        .count();
    let failed: Vec<_> = finished
        .iter()
        .filter(|j| j.status == JobStatus::Failed)
        .collect();
    assert_eq!(done, 2);
    assert_eq!(failed.len(), 1);
    assert!(failed[0].last_error.as_deref().unwrap().contains("b.example"));

    // All capacity restored once the queue is drained.
    assert_eq!(worker.available_capacity(), worker.concurrency());
}

#[tokio::test(start_paused = true)]
async fn retry_worker_eventually_succeeds_per_job() {
    let queue = MemoryQueue::new();
    queue
        .enqueue(crawl_job("https://flaky.example", true).with_timeout(Duration::from_millis(20)))
        .await
        .unwrap();

    // Fails on the first two attempts of each job, then succeeds.
    let per_job_calls = Arc::new(AtomicU32::new(0));
    let calls = per_job_calls.clone();
    let worker = Worker::builder(
        "crawler",
        HandlerFn::arc(move |_c: Crawl| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(JobError::Fail {
                        error: "flaky".into(),
                    })
                } else {
                    Ok(())
                }
            }
        }),
    )
    .retries(2)
    .build();

    let job = queue.dequeue_next().await.unwrap();
    worker.execute(job).await.unwrap();
    assert_eq!(per_job_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn status_updates_flow_back_to_the_source() {
    let queue = MemoryQueue::new();
    let job = crawl_job("https://a.example", false);
    queue.enqueue(job.clone()).await.unwrap();

    // The engine never mutates the stored record; the dispatcher does.
    let mut claimed = queue.dequeue_next().await.unwrap();
    claimed.status = JobStatus::Running;
    queue.enqueue(claimed.clone()).await.unwrap();

    let worker = Worker::builder("crawler", HandlerFn::arc(|_: Crawl| async { Ok(()) })).build();
    worker.execute(claimed.clone()).await.unwrap();

    claimed.status = JobStatus::Done;
    queue.update(claimed).await.unwrap();

    let all = queue.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].status, JobStatus::Done);
}
