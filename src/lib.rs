/* Modules */
pub mod config;
pub mod elevator;
pub mod monitor;
pub mod shared;

/* Re-exports */
pub use config::ElevatorConfig;
pub use elevator::{Elevator, RequestQueue, TickEngine};
pub use shared::{ConfigurationError, Direction, ElevatorState, ElevatorStatus, RequestError};
