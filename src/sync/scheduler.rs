use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Runs a task immediately and then on a fixed cadence.
///
/// Every run happens on its own worker thread, so a slow run never delays the
/// next tick. Runs may therefore overlap; whichever finishes last wins. At most
/// [`MAX_IN_FLIGHT`] runs are outstanding; ticks beyond that are skipped.
pub struct PollScheduler;

pub const MAX_IN_FLIGHT: usize = 4;

impl PollScheduler {
    pub fn start<F>(interval: Duration, task: F) -> PollHandle
    where
        F: Fn() + Send + Sync + 'static,
    {
        let task: Arc<dyn Fn() + Send + Sync> = Arc::new(task);
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let in_flight = Arc::new(AtomicUsize::new(0));

        let ticker = thread::spawn(move || {
            spawn_run(&task, &in_flight);

            let mut next_tick = Instant::now() + interval;
            loop {
                let wait = next_tick.saturating_duration_since(Instant::now());
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {
                        spawn_run(&task, &in_flight);
                        next_tick += interval;
                    }
                    // Stop requested or handle dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            log::debug!(target: "session.sync", "Poll ticker stopped");
        });

        PollHandle {
            stop_tx: Some(stop_tx),
            ticker: Some(ticker),
        }
    }
}

// Decrements the in-flight count when a run ends, panics included
struct InFlight(Arc<AtomicUsize>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

fn spawn_run(task: &Arc<dyn Fn() + Send + Sync>, in_flight: &Arc<AtomicUsize>) {
    // Only the ticker increments, so load-then-add cannot overshoot
    let running = in_flight.load(Ordering::SeqCst);
    if running >= MAX_IN_FLIGHT {
        log::warn!(
            target: "session.sync",
            "Skipping poll tick: {} runs still in flight",
            running
        );
        return;
    }
    in_flight.fetch_add(1, Ordering::SeqCst);

    let task = Arc::clone(task);
    let guard = InFlight(Arc::clone(in_flight));
    thread::spawn(move || {
        let _guard = guard;
        (*task)();
    });
}

/// Cancellation handle for a running [`PollScheduler`].
///
/// Stopping joins the ticker, so once `stop` returns no new run will start.
/// Runs already in flight are left to finish.
pub struct PollHandle {
    stop_tx: Option<Sender<()>>,
    ticker: Option<JoinHandle<()>>,
}

impl PollHandle {
    pub fn is_running(&self) -> bool {
        self.ticker
            .as_ref()
            .map(|ticker| !ticker.is_finished())
            .unwrap_or(false)
    }

    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if let Some(ticker) = self.ticker.take() {
            if ticker.join().is_err() {
                log::error!(target: "session.sync", "Poll ticker panicked");
            }
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
