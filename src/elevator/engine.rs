use crossbeam_channel as cbc;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::thread::{self, Builder, JoinHandle};
use std::time::Duration;

pub type TickCallback = Arc<dyn Fn() + Send + Sync>;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/**
 * Periodic trigger driving the elevator.
 *
 * While running, a dedicated thread invokes `on_tick` once per `interval`. Ticks are
 * handled one at a time on that thread, so callbacks never overlap. The engine keeps
 * no elevator state of its own.
 *
 * # Fields
 * - `interval`:        Time between two ticks.
 * - `on_tick`:         Callback run on every tick, if any.
 * - `terminate_tx`:    Dropping it tells the tick thread to exit.
 * - `tick_thread`:     Handle of the running tick thread.
 */
pub struct TickEngine {
    interval: Duration,
    on_tick: Option<TickCallback>,
    terminate_tx: Option<cbc::Sender<()>>,
    tick_thread: Option<JoinHandle<()>>,
}

impl TickEngine {
    pub fn new(interval: Duration, on_tick: Option<TickCallback>) -> TickEngine {
        debug!("TickEngine created with interval {:?}", interval);
        TickEngine {
            interval,
            on_tick,
            terminate_tx: None,
            tick_thread: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.tick_thread.is_some()
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();
        let ticker = cbc::tick(self.interval);
        let on_tick = self.on_tick.clone();

        let spawned = Builder::new()
            .name("tick_engine".into())
            .spawn(move || loop {
                cbc::select! {
                    recv(terminate_rx) -> _ => break,
                    recv(ticker) -> _ => {
                        if let Some(callback) = &on_tick {
                            callback();
                        }
                    }
                }
            });

        match spawned {
            Ok(handle) => {
                info!("TickEngine started with interval {:?}", self.interval);
                self.terminate_tx = Some(terminate_tx);
                self.tick_thread = Some(handle);
            }
            Err(e) => error!("Failed to spawn tick thread: {}", e),
        }
    }

    /// Cancels future ticks. A tick already running is allowed to finish.
    pub fn stop(&mut self) {
        // Disconnecting the channel wakes the select! in the tick thread
        self.terminate_tx.take();

        if let Some(handle) = self.tick_thread.take() {
            info!("TickEngine stopping");
            if handle.thread().id() == thread::current().id() {
                // Stopped from inside a tick; the loop exits once the callback returns
                return;
            }
            if handle.join().is_err() {
                warn!("Tick thread panicked before it was stopped");
            }
        }
    }

    pub fn destroy(&mut self) {
        debug!("TickEngine destroyed");
        self.stop();
    }
}

impl Default for TickEngine {
    fn default() -> Self {
        TickEngine::new(DEFAULT_TICK_INTERVAL, None)
    }
}

impl Drop for TickEngine {
    fn drop(&mut self) {
        self.stop();
    }
}
