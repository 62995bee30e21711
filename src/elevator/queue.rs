use crate::shared::{Direction, FloorRequest};
use log::debug;

/**
 * Pending floor requests, served with a SCAN ("look") sweep.
 *
 * Entries keep their insertion order, which decides the sweep direction of an
 * elevator waking up from idle. A (floor, direction) pair is stored at most once.
 * Every accessor hands out copies so callers can't reach the internal list.
 */
#[derive(Debug, Clone, Default)]
pub struct RequestQueue {
    requests: Vec<FloorRequest>,
}

impl RequestQueue {
    pub fn new() -> RequestQueue {
        RequestQueue {
            requests: Vec::new(),
        }
    }

    pub fn requests(&self) -> Vec<FloorRequest> {
        self.requests.clone()
    }

    pub fn floors(&self) -> Vec<i32> {
        self.requests.iter().map(|r| r.floor).collect()
    }

    /// Direction of the oldest entry, `Up` when there is none.
    pub fn direction(&self) -> Direction {
        self.requests
            .first()
            .map(|r| r.direction)
            .unwrap_or(Direction::Up)
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn add(&mut self, floor: i32, direction: Direction) {
        let request = FloorRequest::new(floor, direction);
        if self.requests.contains(&request) {
            debug!("RequestQueue::add({}, {}): already queued", floor, direction);
            return;
        }

        self.requests.push(request);
        debug!(
            "RequestQueue::add({}, {}): queue is now {:?}",
            floor,
            direction,
            self.floors()
        );
    }

    /// Removes every entry for `floor`, whichever way it was heading.
    pub fn remove(&mut self, floor: i32) {
        let before = self.requests.len();
        self.requests.retain(|r| r.floor != floor);
        debug!(
            "RequestQueue::remove({}): removed {} entries, queue is now {:?}",
            floor,
            before - self.requests.len(),
            self.floors()
        );
    }

    /**
     * Picks the next floor to serve.
     *
     * Returns `None` only for an empty queue. When nothing matches any branch the
     * current floor is returned, meaning "nothing to do this tick".
     *
     * # Arguments
     * - `current_floor`:   Where the elevator is now.
     * - `direction`:       Current sweep direction.
     * - `sweep_complete`:  Skip the same-direction branches and go straight to reversal.
     */
    pub fn find_next_floor(
        &self,
        current_floor: i32,
        direction: Direction,
        sweep_complete: bool,
    ) -> Option<i32> {
        if self.is_empty() {
            debug!("RequestQueue::find_next_floor: queue is empty");
            return None;
        }

        let next = match direction {
            Direction::Up => {
                let ahead = if sweep_complete {
                    None
                } else {
                    // Nearest UP call above, else sweep to the farthest call above
                    self.floors_where(|r| r.floor > current_floor && r.direction == Direction::Up)
                        .min()
                        .or_else(|| self.floors_where(|r| r.floor > current_floor).max())
                };
                ahead.or_else(|| {
                    self.floors_where(|r| r.floor < current_floor && r.direction == Direction::Down)
                        .max()
                })
            }
            Direction::Down => {
                let ahead = if sweep_complete {
                    None
                } else {
                    self.floors_where(|r| r.floor < current_floor && r.direction == Direction::Down)
                        .max()
                        .or_else(|| self.floors_where(|r| r.floor < current_floor).min())
                };
                ahead.or_else(|| {
                    self.floors_where(|r| r.floor > current_floor && r.direction == Direction::Up)
                        .min()
                })
            }
        };

        match next {
            Some(floor) => {
                debug!(
                    "RequestQueue::find_next_floor({}, {}, {}): selected {}",
                    current_floor, direction, sweep_complete, floor
                );
                Some(floor)
            }
            None => {
                debug!(
                    "RequestQueue::find_next_floor({}, {}, {}): nothing suitable, staying",
                    current_floor, direction, sweep_complete
                );
                Some(current_floor)
            }
        }
    }

    fn floors_where<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = i32> + 'a
    where
        P: Fn(&FloorRequest) -> bool + 'a,
    {
        self.requests
            .iter()
            .filter(move |r| predicate(*r))
            .map(|r| r.floor)
    }
}
