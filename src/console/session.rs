/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::io::{self, BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::console::commands::{Command, HELP};
use crate::elevator::{Elevator, RequestOutcome};

/***************************************/
/*             Public API              */
/***************************************/
/**
 * Reads commands line by line and applies them to `elevator`.
 *
 * Returns on `quit` or end of input. Bad lines are answered with the parse
 * error and otherwise ignored.
 */
pub fn run_session<R: BufRead, W: Write>(
    elevator: &Elevator,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => return Ok(()),
            Ok(command) => apply(elevator, command, output)?,
            Err(e) => writeln!(output, "{}", e)?,
        }

        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(())
}

fn apply<W: Write>(elevator: &Elevator, command: Command, output: &mut W) -> io::Result<()> {
    match command {
        Command::Call(floor) => {
            let outcome = elevator.call_from_floor(floor);
            report(output, "Hall call", floor, outcome)
        }
        Command::Go(floor) => {
            let outcome = elevator.select_destination(floor);
            report(output, "Destination", floor, outcome)
        }
        Command::Cancel(floor) => {
            if elevator.cancel_request(floor) {
                writeln!(output, "Canceled requests for floor {}", floor)
            } else {
                writeln!(output, "No pending request for floor {}", floor)
            }
        }
        Command::Status => {
            serde_json::to_writer(&mut *output, &elevator.status())?;
            writeln!(output)
        }
        Command::Help => writeln!(output, "{}", HELP),
        Command::Quit => Ok(()),
    }
}

fn report<W: Write>(output: &mut W, what: &str, floor: i32, outcome: RequestOutcome) -> io::Result<()> {
    match outcome {
        RequestOutcome::Accepted => writeln!(output, "{} for floor {} accepted", what, floor),
        RequestOutcome::AlreadyPending => {
            writeln!(output, "{} for floor {} is already pending", what, floor)
        }
        RequestOutcome::InvalidFloor => writeln!(output, "Floor {} is out of range", floor),
    }
}
