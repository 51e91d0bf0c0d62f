//! Timer-based coalescing queue.
//!
//! Values pushed in quick succession collapse into the most recent one,
//! which is forwarded to the sink once `interval` passes without a new push.
//! The scorer never sees a timer; this only throttles how often a caller
//! re-runs it.

use crate::error::ReadResult;
use crossbeam_channel::{unbounded, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

pub struct Debouncer<T: Send + 'static> {
    sender: Option<Sender<T>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(interval: Duration, mut sink: F) -> ReadResult<Self>
    where
        F: FnMut(T) + Send + 'static,
    {
        let (sender, receiver) = unbounded::<T>();

        let worker = thread::Builder::new()
            .name("debouncer".to_string())
            .spawn(move || {
                let mut pending: Option<T> = None;
                let mut coalesced = 0usize;
                loop {
                    let next = match pending {
                        None => receiver.recv().map_err(|_| RecvTimeoutError::Disconnected),
                        Some(_) => receiver.recv_timeout(interval),
                    };
                    match next {
                        Ok(value) => {
                            if pending.replace(value).is_some() {
                                coalesced += 1;
                            }
                        }
                        Err(RecvTimeoutError::Timeout) => {
                            if let Some(value) = pending.take() {
                                debug!("⏱️ Forwarding after {} coalesced updates", coalesced);
                                coalesced = 0;
                                sink(value);
                            }
                        }
                        Err(RecvTimeoutError::Disconnected) => {
                            if let Some(value) = pending.take() {
                                sink(value);
                            }
                            break;
                        }
                    }
                }
            })?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }

    pub fn push(&self, value: T) {
        let delivered = self
            .sender
            .as_ref()
            .is_some_and(|sender| sender.send(value).is_ok());
        if !delivered {
            warn!("⚠️ Debouncer worker has stopped; update dropped");
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    /// Flushes any pending value, then waits for the worker.
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("⚠️ Debouncer sink panicked");
            }
        }
    }
}
