pub mod engine;
pub mod fsm;
pub mod queue;

pub use engine::TickEngine;
pub use fsm::Elevator;
pub use queue::RequestQueue;
