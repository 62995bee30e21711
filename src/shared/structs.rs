/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Up,
    Down,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match *self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(format!("Invalid direction value: {}", s)),
        }
    }
}

/// Elevator behaviour as seen from outside.
///
/// `DoorsOpening` and `DoorsClosing` are part of the state space but no
/// transition currently leads to them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElevatorState {
    Idle,
    MovingUp,
    MovingDown,
    DoorsOpening,
    DoorsClosing,
}

impl fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            ElevatorState::Idle => "IDLE",
            ElevatorState::MovingUp => "MOVING_UP",
            ElevatorState::MovingDown => "MOVING_DOWN",
            ElevatorState::DoorsOpening => "DOORS_OPENING",
            ElevatorState::DoorsClosing => "DOORS_CLOSING",
        };
        write!(f, "{}", name)
    }
}

/// One outstanding call. Two requests for the same floor in opposite
/// directions are distinct.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloorRequest {
    pub floor: i32,
    pub direction: Direction,
}

impl FloorRequest {
    pub fn new(floor: i32, direction: Direction) -> FloorRequest {
        FloorRequest { floor, direction }
    }
}

/// Read-only snapshot of an elevator, handed to whoever renders it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorStatus {
    pub state: ElevatorState,
    #[serde(rename = "currentFloor")]
    pub current_floor: i32,
    #[serde(rename = "maxFloor")]
    pub max_floor: i32,
    pub speed: f64,
    pub direction: Direction,
    pub queue: Vec<i32>,
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_parses_case_insensitive() {
        assert_eq!("UP".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("Down".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
    }

    #[test]
    fn test_direction_rejects_unknown_value() {
        let result = "sideways".parse::<Direction>();

        assert_eq!(result, Err("Invalid direction value: sideways".to_string()));
    }

    #[test]
    fn test_direction_defaults_to_up() {
        assert_eq!(Direction::default(), Direction::Up);
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }
}
