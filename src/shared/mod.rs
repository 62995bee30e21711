pub mod errors;
pub mod macros;
pub mod structs;

pub use errors::ConfigurationError;
pub use errors::RequestError;
pub use structs::Direction;
pub use structs::ElevatorState;
pub use structs::ElevatorStatus;
pub use structs::FloorRequest;
