//! Background island generation on a dedicated worker thread.
//!
//! Keeps large-canvas runs off the UI thread. At most one run is queued or
//! executing at any time; requests arriving while busy are handed back to the
//! caller. A cancelled run delivers nothing, so a consumer only ever sees
//! complete output sets.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, bounded};
use tracing::{debug, warn};

use crate::error::TerrainError;
use crate::params::Parameters;
use crate::pipeline::{OutputRasterSet, generate_island_cancellable};

/// Identifies one submitted run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunTicket(pub u64);

/// A finished run ready to be installed.
#[derive(Debug)]
pub struct GeneratedIsland {
    /// The ticket returned by [`AsyncIslandGenerator::submit`].
    pub ticket: RunTicket,
    /// The complete output set, or the validation error that stopped the run.
    pub result: Result<OutputRasterSet, TerrainError>,
    /// Generation time in microseconds (for profiling).
    pub generation_time_us: u64,
}

/// Internal wrapper that carries the parameters and the cancellation flag.
struct QueuedRun {
    ticket: RunTicket,
    params: Parameters,
    cancelled: Arc<AtomicBool>,
}

/// Runs the pipeline on a background thread, one run at a time.
pub struct AsyncIslandGenerator {
    /// Sender for submitting runs. Taken on drop to stop the worker.
    task_sender: Option<Sender<QueuedRun>>,
    /// Receiver for collecting finished runs on the caller's thread.
    result_receiver: Receiver<GeneratedIsland>,
    /// Set from submission until the worker has finished the run.
    busy: Arc<AtomicBool>,
    /// Cancellation flag of the most recent run.
    current: Option<Arc<AtomicBool>>,
    next_ticket: u64,
    worker: Option<JoinHandle<()>>,
}

impl AsyncIslandGenerator {
    /// Spawn the worker thread.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the thread cannot be spawned.
    pub fn new() -> std::io::Result<Self> {
        let (task_sender, task_receiver) = bounded::<QueuedRun>(1);
        let (result_sender, result_receiver) = bounded::<GeneratedIsland>(4);
        let busy = Arc::new(AtomicBool::new(false));

        let worker_busy = Arc::clone(&busy);
        let worker = std::thread::Builder::new()
            .name("island-gen-worker".into())
            .spawn(move || {
                while let Ok(run) = task_receiver.recv() {
                    let start = Instant::now();
                    let flag = Arc::clone(&run.cancelled);
                    let result =
                        generate_island_cancellable(&run.params, || flag.load(Ordering::Relaxed));
                    let elapsed = start.elapsed().as_micros() as u64;

                    let cancelled = matches!(result, Err(TerrainError::Cancelled))
                        || run.cancelled.load(Ordering::Relaxed);

                    // Idle before delivering so the consumer can resubmit as
                    // soon as it has the result.
                    worker_busy.store(false, Ordering::Release);

                    if cancelled {
                        debug!(ticket = run.ticket.0, "island run cancelled");
                    } else if result_sender
                        .send(GeneratedIsland {
                            ticket: run.ticket,
                            result,
                            generation_time_us: elapsed,
                        })
                        .is_err()
                    {
                        break;
                    }
                }
            })?;

        Ok(Self {
            task_sender: Some(task_sender),
            result_receiver,
            busy,
            current: None,
            next_ticket: 0,
            worker: Some(worker),
        })
    }

    /// Queue a run with the given parameter snapshot.
    ///
    /// Returns the run's ticket, or `Err(params)` if another run is still
    /// queued or executing.
    pub fn submit(&mut self, params: Parameters) -> Result<RunTicket, Parameters> {
        let Some(sender) = &self.task_sender else {
            return Err(params);
        };
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(params);
        }

        let ticket = RunTicket(self.next_ticket);
        let cancelled = Arc::new(AtomicBool::new(false));
        let run = QueuedRun {
            ticket,
            params,
            cancelled: Arc::clone(&cancelled),
        };
        match sender.try_send(run) {
            Ok(()) => {
                self.next_ticket += 1;
                self.current = Some(cancelled);
                debug!(ticket = ticket.0, "island run submitted");
                Ok(ticket)
            }
            Err(e) => {
                self.busy.store(false, Ordering::Release);
                warn!("island worker unavailable");
                Err(e.into_inner().params)
            }
        }
    }

    /// Cancel the most recent run if it has not delivered yet.
    ///
    /// If the run has already completed, this is a no-op.
    pub fn cancel(&mut self) {
        if let Some(cancelled) = self.current.take() {
            cancelled.store(true, Ordering::Relaxed);
        }
    }

    /// Drain all finished runs without blocking.
    pub fn poll(&self) -> Vec<GeneratedIsland> {
        self.result_receiver.try_iter().collect()
    }

    /// Block until a finished run arrives or `timeout` elapses.
    pub fn wait(&self, timeout: Duration) -> Option<GeneratedIsland> {
        self.result_receiver.recv_timeout(timeout).ok()
    }

    /// Returns `true` while a run is queued or executing.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for AsyncIslandGenerator {
    fn drop(&mut self) {
        self.cancel();
        self.task_sender = None;
        // Make room in case the worker is blocked delivering a result.
        while self.result_receiver.try_recv().is_ok() {}
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
