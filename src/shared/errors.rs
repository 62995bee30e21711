/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*            Error types              */
/***************************************/

/// Invalid construction parameters. Fatal: no elevator is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Invalid maxFloor: {0}. Must be greater than 1")]
    InvalidMaxFloor(i32),
    #[error("Invalid speed: {0}. Must be greater than 0")]
    InvalidSpeed(f64),
    #[error("Invalid floor: {floor}. Must be between 1 and {max_floor}")]
    InvalidFloor { floor: i32, max_floor: i32 },
}

/// Rejected runtime request. Logged and dropped by the elevator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Invalid floor: {floor}. Must be between 1 and {max_floor}")]
    InvalidFloor { floor: i32, max_floor: i32 },
}
