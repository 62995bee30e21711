/* 3rd party libraries */
use clap::{Arg, Command};
use log::{error, info};
use std::time::Duration;

/* Custom libraries */
use elevator_sim::config;
use elevator_sim::monitor::Monitor;
use elevator_sim::unwrap_or_exit;
use elevator_sim::{Direction, Elevator};

/// Parses a hall call written as `floor:direction`, e.g. `3:up`.
fn parse_call(arg: &str) -> Result<(i32, Direction), String> {
    let (floor, direction) = arg
        .split_once(':')
        .ok_or_else(|| format!("Invalid call '{}', expected <floor>:<up|down>", arg))?;
    let floor = floor
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("Invalid floor in call '{}': {}", arg, e))?;
    let direction = direction.trim().parse::<Direction>()?;
    Ok((floor, direction))
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator_sim")
        .about("Simulates a single elevator dispatched with a SCAN sweep")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("call")
                .long("call")
                .takes_value(true)
                .multiple_occurrences(true)
                .help("Hall call as <floor>:<up|down>"),
        )
        .arg(
            Arg::new("select")
                .long("select")
                .takes_value(true)
                .multiple_occurrences(true)
                .help("Cab floor selection"),
        )
        .arg(
            Arg::new("run-time")
                .long("run-time")
                .takes_value(true)
                .help("Seconds to run before shutting down"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let mut config = unwrap_or_exit!(config::load_config_or_default(config_path));
    if let Some(run_time) = matches.value_of("run-time") {
        config.monitor.run_time = unwrap_or_exit!(run_time.parse::<u64>());
    }

    // Create the elevator
    let mut elevator = unwrap_or_exit!(Elevator::new(&config.elevator));
    info!(
        "Elevator ready at floor {} of {}, {} s per floor",
        elevator.current_floor(),
        elevator.max_floor(),
        elevator.speed()
    );

    // Issue the requested calls
    for call in matches.values_of("call").into_iter().flatten() {
        match parse_call(call) {
            Ok((floor, direction)) => elevator.call(floor, direction),
            Err(e) => error!("{}", e),
        }
    }
    for select in matches.values_of("select").into_iter().flatten() {
        match select.parse::<i32>() {
            Ok(floor) => elevator.select_floor(floor),
            Err(e) => error!("Invalid floor '{}': {}", select, e),
        }
    }

    // Watch the elevator until the run time is up
    let monitor = Monitor::new(&config.monitor);
    let observed = monitor.run(&elevator);

    elevator.destroy();
    info!(
        "Simulation finished after {:?}: {} status changes, final floor {}",
        Duration::from_secs(config.monitor.run_time),
        observed.len().saturating_sub(1),
        elevator.current_floor()
    );
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod tests {
    use super::parse_call;
    use elevator_sim::Direction;

    #[test]
    fn test_parse_call() {
        assert_eq!(parse_call("3:up"), Ok((3, Direction::Up)));
        assert_eq!(parse_call(" 7 : DOWN "), Ok((7, Direction::Down)));
    }

    #[test]
    fn test_parse_call_without_direction() {
        let result = parse_call("3");

        assert!(result.unwrap_err().contains("expected <floor>:<up|down>"));
    }

    #[test]
    fn test_parse_call_bad_floor() {
        let result = parse_call("x:up");

        assert!(result.unwrap_err().starts_with("Invalid floor in call 'x:up'"));
    }

    #[test]
    fn test_parse_call_bad_direction() {
        let result = parse_call("3:sideways");

        assert_eq!(result, Err("Invalid direction value: sideways".to_string()));
    }
}
