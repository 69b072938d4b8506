/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;
use std::sync::Arc;
use std::thread::sleep;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::Config;
use crate::elevator::{DispatchError, DispatchExit, Elevator};
use crate::shared::{shutdown_channel, LogSink};

const HALL_CALLS: [i32; 2] = [3, 2];
const FIRST_DESTINATIONS: [i32; 3] = [2, 5, 6];
const SECOND_DESTINATIONS: [i32; 4] = [1, 7, 4, 9];
const INVALID_DESTINATIONS: [i32; 3] = [99999, -256, -512];

/// Pauses of the scripted run, in time units (one unit is one floor of travel).
const SHORT_PAUSE: u32 = 2;
const LONG_PAUSE: u32 = 20;

/**
 * Scripted run: two hall calls, two rounds of destinations, a batch of
 * invalid destinations, then shutdown. All events go to the log.
 */
pub fn run_demo(config: &Config) -> Result<DispatchExit, DispatchError> {
    let elevator = Elevator::with_sink(&config.elevator, &config.timing, Arc::new(LogSink));
    let unit = config.timing.floor_travel();

    let (trigger, signal) = shutdown_channel();
    let handle = elevator.start_dispatch(signal)?;

    for floor in HALL_CALLS {
        elevator.call_from_floor(floor);
        sleep(unit * SHORT_PAUSE);
    }

    for floor in FIRST_DESTINATIONS {
        elevator.select_destination(floor);
    }
    sleep(unit * SHORT_PAUSE);

    for floor in SECOND_DESTINATIONS {
        elevator.select_destination(floor);
    }
    sleep(unit * LONG_PAUSE);

    for floor in INVALID_DESTINATIONS {
        elevator.select_destination(floor);
    }
    sleep(unit * LONG_PAUSE);

    trigger.trigger();
    let exit = handle.join();
    info!("Execution complete! Car at floor {}", elevator.current_floor());
    Ok(exit)
}
