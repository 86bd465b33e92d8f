//! Fixed-size worker pool for root-parallel search tasks.
//!
//! A single producer submits boxed closures; each submission hands back a
//! [`JobHandle`] that yields the closure's return value exactly once. The
//! queue is FIFO under a mutex with a condvar. Shutdown drains the queue:
//! workers finish what was already submitted, new submissions fail with
//! [`PoolError::Stopped`], and every worker is joined before the pool is
//! dropped.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::{Condvar, Mutex};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Errors from pool submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// The pool has begun shutting down and accepts no new work.
    Stopped,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::Stopped => write!(f, "submit on stopped worker pool"),
        }
    }
}

impl std::error::Error for PoolError {}

struct Queue {
    jobs: VecDeque<Job>,
    stopped: bool,
}

struct PoolShared {
    queue: Mutex<Queue>,
    available: Condvar,
}

/// A fixed set of worker threads executing submitted closures in FIFO order.
pub struct WorkerPool {
    shared: Arc<PoolShared>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `num_threads` workers (at least one).
    #[must_use]
    pub fn new(num_threads: usize) -> WorkerPool {
        let shared = Arc::new(PoolShared {
            queue: Mutex::new(Queue {
                jobs: VecDeque::new(),
                stopped: false,
            }),
            available: Condvar::new(),
        });

        let workers = (0..num_threads.max(1))
            .map(|id| {
                let shared = Arc::clone(&shared);
                thread::Builder::new()
                    .name(format!("worker-{id}"))
                    .spawn(move || worker_loop(&shared))
                    .expect("failed to spawn pool worker")
            })
            .collect();

        WorkerPool { shared, workers }
    }

    /// Pool sized to the machine's available parallelism.
    #[must_use]
    pub fn with_default_size() -> WorkerPool {
        let threads = thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        WorkerPool::new(threads)
    }

    /// Number of worker threads.
    #[must_use]
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Queue `task` and return a handle to its result.
    ///
    /// Fails with [`PoolError::Stopped`] once shutdown has begun.
    pub fn submit<T, F>(&self, task: F) -> Result<JobHandle<T>, PoolError>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let slot = Arc::new(ResultSlot {
            value: Mutex::new(None),
            done: Condvar::new(),
        });
        let worker_slot = Arc::clone(&slot);
        let job: Job = Box::new(move || {
            let value = task();
            let mut guard = worker_slot.value.lock();
            *guard = Some(value);
            worker_slot.done.notify_all();
        });

        {
            let mut queue = self.shared.queue.lock();
            if queue.stopped {
                return Err(PoolError::Stopped);
            }
            queue.jobs.push_back(job);
        }
        self.shared.available.notify_one();
        Ok(JobHandle { slot })
    }

    /// Begin shutdown: reject new submissions and let workers drain the
    /// queue. Idempotent; `Drop` calls it and then joins the workers.
    pub fn shutdown(&self) {
        let mut queue = self.shared.queue.lock();
        queue.stopped = true;
        drop(queue);
        self.shared.available.notify_all();
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

fn worker_loop(shared: &PoolShared) {
    loop {
        let job = {
            let mut queue = shared.queue.lock();
            while queue.jobs.is_empty() && !queue.stopped {
                shared.available.wait(&mut queue);
            }
            match queue.jobs.pop_front() {
                Some(job) => job,
                None => return, // stopped and drained
            }
        };
        job();
    }
}

#[derive(Debug)]
struct ResultSlot<T> {
    value: Mutex<Option<T>>,
    done: Condvar,
}

/// Completion handle for a submitted task.
#[derive(Debug)]
pub struct JobHandle<T> {
    slot: Arc<ResultSlot<T>>,
}

impl<T> JobHandle<T> {
    /// Block until the task finishes and take its result.
    pub fn wait(self) -> T {
        let mut guard = self.slot.value.lock();
        loop {
            if let Some(value) = guard.take() {
                return value;
            }
            self.slot.done.wait(&mut guard);
        }
    }
}
