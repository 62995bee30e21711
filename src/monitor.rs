use crate::config::MonitorConfig;
use crate::elevator::Elevator;
use crate::shared::ElevatorStatus;
use crossbeam_channel as cbc;
use log::{info, warn};
use std::time::Duration;

/**
 * Read-only observer of an elevator.
 *
 * Polls the elevator status on its own schedule and logs it as JSON whenever it
 * changes. It never issues requests and never touches the queue.
 *
 * # Fields
 * - `poll_interval`:   Time between two status reads.
 * - `run_time`:        How long `run` keeps polling before returning.
 */
pub struct Monitor {
    poll_interval: Duration,
    run_time: Duration,
}

impl Monitor {
    pub fn new(config: &MonitorConfig) -> Monitor {
        Monitor {
            poll_interval: Duration::from_millis(config.poll_interval.max(1)),
            run_time: Duration::from_secs(config.run_time),
        }
    }

    pub fn with_durations(poll_interval: Duration, run_time: Duration) -> Monitor {
        Monitor {
            poll_interval,
            run_time,
        }
    }

    /// Polls until `run_time` has passed. Returns every distinct status observed, in order.
    pub fn run(&self, elevator: &Elevator) -> Vec<ElevatorStatus> {
        let poll = cbc::tick(self.poll_interval);
        let deadline = cbc::after(self.run_time);
        let mut observed: Vec<ElevatorStatus> = Vec::new();

        self.observe(elevator, &mut observed);
        loop {
            cbc::select! {
                recv(poll) -> _ => self.observe(elevator, &mut observed),
                recv(deadline) -> _ => break,
            }
        }

        observed
    }

    fn observe(&self, elevator: &Elevator, observed: &mut Vec<ElevatorStatus>) {
        let status = elevator.status();
        if observed.last() == Some(&status) {
            return;
        }

        match serde_json::to_string(&status) {
            Ok(json) => info!("Status: {}", json),
            Err(e) => warn!("Failed to serialize elevator status: {}", e),
        }
        observed.push(status);
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
