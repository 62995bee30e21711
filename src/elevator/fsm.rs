use crate::config::ElevatorConfig;
use crate::elevator::engine::{TickCallback, TickEngine};
use crate::elevator::queue::RequestQueue;
use crate::shared::{
    ConfigurationError, Direction, ElevatorState, ElevatorStatus, FloorRequest, RequestError,
};
use log::{debug, error, info};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/***************************************/
/*             Validation              */
/***************************************/
pub fn validate_floor(floor: i32, max_floor: i32) -> Result<i32, RequestError> {
    if floor < 1 || floor > max_floor {
        return Err(RequestError::InvalidFloor { floor, max_floor });
    }
    Ok(floor)
}

pub fn validate_speed(speed: f64) -> Result<f64, ConfigurationError> {
    tick_interval(speed).map(|_| speed)
}

/// Seconds per floor as a tick interval. Speeds a `Duration` can't hold are invalid.
fn tick_interval(speed: f64) -> Result<Duration, ConfigurationError> {
    if !speed.is_finite() || speed <= 0.0 {
        return Err(ConfigurationError::InvalidSpeed(speed));
    }
    Duration::try_from_secs_f64(speed).map_err(|_| ConfigurationError::InvalidSpeed(speed))
}

pub fn validate_max_floor(max_floor: i32) -> Result<i32, ConfigurationError> {
    if max_floor <= 1 {
        return Err(ConfigurationError::InvalidMaxFloor(max_floor));
    }
    Ok(max_floor)
}

/***************************************/
/*          Mutable core state         */
/***************************************/

/// Everything a tick may change. Shared between the caller and the tick thread.
struct ElevatorCore {
    state: ElevatorState,
    current_floor: i32,
    direction: Direction,
    sweep_complete: bool,
    queue: RequestQueue,
}

impl ElevatorCore {
    fn step(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        debug!(
            "Elevator tick: floor {}, state {}, direction {}",
            self.current_floor, self.state, self.direction
        );

        // A freshly woken elevator sweeps towards its oldest request
        if self.state == ElevatorState::Idle {
            self.direction = self.queue.direction();
            self.sweep_complete = false;
        }

        let next_floor =
            match self
                .queue
                .find_next_floor(self.current_floor, self.direction, self.sweep_complete)
            {
                Some(floor) => floor,
                None => return,
            };

        if next_floor != self.current_floor {
            self.state = if next_floor > self.current_floor {
                ElevatorState::MovingUp
            } else {
                ElevatorState::MovingDown
            };

            let against_sweep = match self.direction {
                Direction::Up => self.state == ElevatorState::MovingDown,
                Direction::Down => self.state == ElevatorState::MovingUp,
            };
            if against_sweep {
                self.sweep_complete = true;
            }

            self.queue.remove(next_floor);
            self.current_floor = next_floor;
            info!("Elevator arrived at floor {} ({})", self.current_floor, self.state);
        }

        if self.sweep_complete {
            self.direction = self.direction.opposite();
            self.sweep_complete = false;
            info!("Sweep complete, direction is now {}", self.direction);
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * A single simulated elevator.
 *
 * Requests go into a SCAN queue; every tick of the engine serves at most one floor,
 * jumping straight to it. The engine starts on the first request and then keeps
 * ticking, even with an empty queue, until `destroy` is called.
 *
 * # Fields
 * - `core`:        Queue and position, locked by both request entry points and ticks.
 * - `engine`:      Periodic trigger calling `ElevatorCore::step`.
 * - `speed`:       Seconds per tick.
 * - `max_floor`:   Highest valid floor; the lowest is always 1.
 * - `destroyed`:   Set by `destroy`; no tick runs afterwards.
 */
pub struct Elevator {
    core: Arc<Mutex<ElevatorCore>>,
    engine: TickEngine,
    speed: f64,
    max_floor: i32,
    destroyed: bool,
}

impl Elevator {
    pub fn new(config: &ElevatorConfig) -> Result<Elevator, ConfigurationError> {
        let interval = tick_interval(config.speed)?;
        let speed = config.speed;
        let max_floor = validate_max_floor(config.max_floor)?;
        let current_floor = validate_floor(config.current_floor, max_floor).map_err(
            |RequestError::InvalidFloor { floor, max_floor }| ConfigurationError::InvalidFloor {
                floor,
                max_floor,
            },
        )?;

        let core = Arc::new(Mutex::new(ElevatorCore {
            state: ElevatorState::Idle,
            current_floor,
            direction: Direction::Up,
            sweep_complete: false,
            queue: RequestQueue::new(),
        }));

        let tick_core = Arc::clone(&core);
        let on_tick: TickCallback = Arc::new(move || tick_core.lock().step());
        let engine = TickEngine::new(interval, Some(on_tick));

        Ok(Elevator {
            core,
            engine,
            speed,
            max_floor,
            destroyed: false,
        })
    }

    pub fn state(&self) -> ElevatorState {
        self.core.lock().state
    }

    pub fn current_floor(&self) -> i32 {
        self.core.lock().current_floor
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn max_floor(&self) -> i32 {
        self.max_floor
    }

    pub fn direction(&self) -> Direction {
        self.core.lock().direction
    }

    pub fn queue(&self) -> Vec<i32> {
        self.core.lock().queue.floors()
    }

    pub fn requests(&self) -> Vec<FloorRequest> {
        self.core.lock().queue.requests()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn status(&self) -> ElevatorStatus {
        let core = self.core.lock();
        ElevatorStatus {
            state: core.state,
            current_floor: core.current_floor,
            max_floor: self.max_floor,
            speed: self.speed,
            direction: core.direction,
            queue: core.queue.floors(),
        }
    }

    /// Hall call. Out-of-range floors are logged and ignored.
    pub fn call(&mut self, floor: i32, direction: Direction) {
        if let Err(e) = self.try_call(floor, direction) {
            error!("Elevator::call({}, {}): {}", floor, direction, e);
        }
    }

    /// Cab button. Heads up for floors above the elevator, down otherwise.
    pub fn select_floor(&mut self, floor: i32) {
        if let Err(e) = self.try_select_floor(floor) {
            error!("Elevator::select_floor({}): {}", floor, e);
        }
    }

    /// Runs one tick on the calling thread.
    pub fn tick(&self) {
        if self.destroyed {
            return;
        }
        self.core.lock().step();
    }

    /// Stops the engine for good. Requests are still queued afterwards but never served.
    pub fn destroy(&mut self) {
        self.stop();
        self.engine.destroy();
        self.destroyed = true;
    }

    fn try_call(&mut self, floor: i32, direction: Direction) -> Result<(), RequestError> {
        validate_floor(floor, self.max_floor)?;
        self.core.lock().queue.add(floor, direction);
        info!("Called elevator to floor {} going {}", floor, direction);
        self.start_if_idle();
        Ok(())
    }

    fn try_select_floor(&mut self, floor: i32) -> Result<(), RequestError> {
        validate_floor(floor, self.max_floor)?;
        let direction = {
            let mut core = self.core.lock();
            let direction = if floor > core.current_floor {
                Direction::Up
            } else {
                Direction::Down
            };
            core.queue.add(floor, direction);
            direction
        };
        info!("Selected floor {} going {}", floor, direction);
        self.start_if_idle();
        Ok(())
    }

    fn start_if_idle(&mut self) {
        debug!(
            "Elevator::start_if_idle: engine running {}, state {}",
            self.engine.is_running(),
            self.state()
        );
        if !self.destroyed && !self.engine.is_running() {
            self.engine.start();
        }
    }

    fn stop(&mut self) {
        // The engine must be stopped before taking the lock, a tick may be holding it
        self.engine.stop();
        self.core.lock().state = ElevatorState::Idle;
    }
}
