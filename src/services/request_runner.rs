//! Background request runner
//!
//! Runs one blocking HTTP call on a worker thread and hands the result back
//! to the UI thread through a channel, polled on every tick. Submitting
//! again while a request is in flight replaces the receiver, so only the
//! latest submission is delivered.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// A request running on a worker thread
struct PendingRequest<T> {
    receiver: Receiver<T>,
    started: Instant,
}

/// Outcome of polling the runner
#[derive(Debug, PartialEq)]
pub enum Poll<T> {
    /// Nothing submitted, or the last result was already taken
    Idle,
    /// Still waiting on the worker
    Pending,
    /// The worker finished; carries its result and elapsed time
    Ready(T, Duration),
    /// The worker thread died without sending a result
    Lost,
}

pub struct RequestRunner<T> {
    pending: Option<PendingRequest<T>>,
}

impl<T> Default for RequestRunner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RequestRunner<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T: Send + 'static> RequestRunner<T> {
    /// Run `work` on a new thread
    pub fn spawn<F>(&mut self, work: F)
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            // Receiver may be gone if a newer request replaced this one
            let _ = tx.send(work());
        });

        self.pending = Some(PendingRequest {
            receiver: rx,
            started: Instant::now(),
        });
    }

    /// Check for a result without blocking
    pub fn poll(&mut self) -> Poll<T> {
        let Some(ref pending) = self.pending else {
            return Poll::Idle;
        };

        match pending.receiver.try_recv() {
            Ok(result) => {
                let elapsed = pending.started.elapsed();
                self.pending = None;
                Poll::Ready(result, elapsed)
            }
            Err(TryRecvError::Empty) => Poll::Pending,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                Poll::Lost
            }
        }
    }
}
