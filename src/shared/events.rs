/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

/***************************************/
/*       Public data structures        */
/***************************************/
/// Where a rejected floor number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloorOrigin {
    HallCall,
    Destination,
    Cancel,
    Move,
}

impl fmt::Display for FloorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloorOrigin::HallCall => write!(f, "hall call"),
            FloorOrigin::Destination => write!(f, "destination"),
            FloorOrigin::Cancel => write!(f, "cancel"),
            FloorOrigin::Move => write!(f, "move"),
        }
    }
}

/**
 * Everything the elevator core reports about itself.
 *
 * The core never prints. Every observable step is handed to an `EventSink`
 * and the host decides what to do with it.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElevatorEvent {
    HallCallRegistered(i32),
    DestinationRegistered(i32),
    RequestCanceled(i32),
    InvalidFloor { floor: i32, origin: FloorOrigin },
    Departed { from: i32, to: i32, direction: Direction },
    Arrived(i32),
    DoorsClosed(i32),
    MoveAborted { floor: i32, target: i32 },
    RequestServed(i32),
    Quiescent(i32),
    DispatchStarted,
    DispatchStopped,
}

impl fmt::Display for ElevatorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElevatorEvent::HallCallRegistered(floor) => {
                write!(f, "Call received from floor {}", floor)
            }
            ElevatorEvent::DestinationRegistered(floor) => {
                write!(f, "Destination floor {} selected", floor)
            }
            ElevatorEvent::RequestCanceled(floor) => {
                write!(f, "Request for floor {} canceled", floor)
            }
            ElevatorEvent::InvalidFloor { floor, origin } => {
                write!(f, "Invalid {}. Ignored floor {}", origin, floor)
            }
            ElevatorEvent::Departed { from, to, direction } => {
                write!(f, "Leaving floor {} for floor {} going {}", from, to, direction)
            }
            ElevatorEvent::Arrived(floor) => write!(f, "Elevator has reached floor {}", floor),
            ElevatorEvent::DoorsClosed(floor) => write!(f, "Doors closed at floor {}", floor),
            ElevatorEvent::MoveAborted { floor, target } => {
                write!(f, "Move to floor {} aborted, still at floor {}", target, floor)
            }
            ElevatorEvent::RequestServed(floor) => write!(f, "Request for floor {} served", floor),
            ElevatorEvent::Quiescent(floor) => write!(f, "No pending requests, idle at floor {}", floor),
            ElevatorEvent::DispatchStarted => write!(f, "Dispatch started"),
            ElevatorEvent::DispatchStopped => write!(f, "Dispatch stopped"),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub trait EventSink: Send + Sync {
    fn emit(&self, event: ElevatorEvent);
}

/// Writes every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: ElevatorEvent) {
        match &event {
            ElevatorEvent::InvalidFloor { .. } => warn!("{}", event),
            ElevatorEvent::Quiescent(_)
            | ElevatorEvent::DoorsClosed(_)
            | ElevatorEvent::RequestServed(_) => debug!("{}", event),
            _ => info!("{}", event),
        }
    }
}

/// Forwards every event over a crossbeam channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    event_tx: cbc::Sender<ElevatorEvent>,
}

impl ChannelSink {
    pub fn new(event_tx: cbc::Sender<ElevatorEvent>) -> ChannelSink {
        ChannelSink { event_tx }
    }

    pub fn unbounded() -> (ChannelSink, cbc::Receiver<ElevatorEvent>) {
        let (event_tx, event_rx) = cbc::unbounded::<ElevatorEvent>();
        (ChannelSink::new(event_tx), event_rx)
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: ElevatorEvent) {
        // Nobody listening is fine
        let _ = self.event_tx.send(event);
    }
}
