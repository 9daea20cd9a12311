//! Dedicated worker thread for session start/stop.
//!
//! Start and stop are fire-and-forget requests from the caller's point of
//! view: they are queued on an mpsc channel and executed in submission
//! order by one worker thread. The "already running / not running" guard
//! is evaluated inside the worker, under the session lock, at execution
//! time — not at request time.

use super::capture::{lock, SessionHandle};
use std::sync::mpsc;
use std::thread::JoinHandle;

enum Command {
    Start,
    Stop,
    /// Acknowledged once every previously queued command has executed.
    Barrier(mpsc::Sender<()>),
}

/// Owns the worker thread for one session.
///
/// Dropping the worker closes the queue; already-submitted commands are
/// drained before the thread exits and is joined.
pub(crate) struct SessionWorker {
    tx: Option<mpsc::Sender<Command>>,
    thread: Option<JoinHandle<()>>,
}

impl SessionWorker {
    /// Spawns the worker for `session`.
    pub(crate) fn spawn(session: SessionHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let thread = std::thread::spawn(move || run(session, rx));
        Self {
            tx: Some(tx),
            thread: Some(thread),
        }
    }

    /// Queues a start request. Never blocks on hardware.
    pub(crate) fn submit_start(&self) {
        self.submit(Command::Start);
    }

    /// Queues a stop request. Never blocks on hardware.
    pub(crate) fn submit_stop(&self) {
        self.submit(Command::Stop);
    }

    /// Blocks until every previously submitted request has executed.
    pub(crate) fn wait_idle(&self) {
        let (ack_tx, ack_rx) = mpsc::channel();
        self.submit(Command::Barrier(ack_tx));
        let _ = ack_rx.recv();
    }

    fn submit(&self, command: Command) {
        if let Some(tx) = &self.tx {
            // Send only fails after the worker has exited; nothing to do then.
            let _ = tx.send(command);
        }
    }
}

impl Drop for SessionWorker {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run(session: SessionHandle, rx: mpsc::Receiver<Command>) {
    while let Ok(command) = rx.recv() {
        match command {
            Command::Start => {
                let mut session = lock(&session);
                if session.is_running() {
                    tracing::trace!("start request ignored, session already running");
                } else {
                    session.start_running();
                    tracing::debug!("session started");
                }
            }
            Command::Stop => {
                let mut session = lock(&session);
                if session.is_running() {
                    session.stop_running();
                    tracing::debug!("session stopped");
                } else {
                    tracing::trace!("stop request ignored, session not running");
                }
            }
            Command::Barrier(ack) => {
                let _ = ack.send(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CaptureSession;

    #[test]
    fn start_request_eventually_runs_session() {
        let handle = CaptureSession::new_handle();
        let worker = SessionWorker::spawn(handle.clone());

        worker.submit_start();
        worker.wait_idle();
        assert!(lock(&handle).is_running());
    }

    #[test]
    fn requests_execute_in_submission_order() {
        let handle = CaptureSession::new_handle();
        let worker = SessionWorker::spawn(handle.clone());

        worker.submit_start();
        worker.submit_stop();
        worker.submit_start();
        worker.wait_idle();
        assert!(lock(&handle).is_running());

        worker.submit_stop();
        worker.wait_idle();
        assert!(!lock(&handle).is_running());
    }

    #[test]
    fn redundant_requests_are_noops() {
        let handle = CaptureSession::new_handle();
        let worker = SessionWorker::spawn(handle.clone());

        worker.submit_stop();
        worker.wait_idle();
        assert!(!lock(&handle).is_running());

        worker.submit_start();
        worker.submit_start();
        worker.wait_idle();
        assert!(lock(&handle).is_running());
    }

    #[test]
    fn queued_requests_drain_on_drop() {
        let handle = CaptureSession::new_handle();
        let worker = SessionWorker::spawn(handle.clone());

        worker.submit_start();
        drop(worker);
        assert!(lock(&handle).is_running());
    }
}
