/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::TimingConfig;
use crate::shared::{Behaviour, Direction, ElevatorEvent, EventSink, FloorBounds, FloorOrigin};
use crate::shared::ShutdownSignal;

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    AlreadyThere,
    Arrived,
    InvalidFloor,
    Aborted,
}

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarState {
    pub floor: i32,
    pub direction: Direction,
    pub behaviour: Behaviour,
}

/**
 * The simulated car.
 *
 * Only the dispatch engine moves the car. Anyone may read it; floor, direction
 * and behaviour are read together under one lock, so readers never see a
 * floor from one move paired with the direction of another.
 *
 * # Fields
 * - `state`:           Current floor, direction of travel and door behaviour.
 * - `bounds`:          Floors the car may be sent to.
 * - `floor_travel`:    Travel time per floor.
 * - `door_dwell`:      How long the doors stay open after arriving.
 * - `sink`:            Receives motion events.
 */
pub struct Car {
    state: RwLock<CarState>,
    bounds: FloorBounds,
    floor_travel: Duration,
    door_dwell: Duration,
    sink: Arc<dyn EventSink>,
}

impl Car {
    pub fn new(
        initial_floor: i32,
        bounds: FloorBounds,
        timing: &TimingConfig,
        sink: Arc<dyn EventSink>,
    ) -> Car {
        Car {
            state: RwLock::new(CarState {
                floor: initial_floor,
                direction: Direction::Idle,
                behaviour: Behaviour::Idle,
            }),
            bounds,
            floor_travel: timing.floor_travel(),
            door_dwell: timing.door_dwell(),
            sink,
        }
    }

    pub fn state(&self) -> CarState {
        *self.read()
    }

    pub fn floor(&self) -> i32 {
        self.read().floor
    }

    pub fn direction(&self) -> Direction {
        self.read().direction
    }

    pub(crate) fn set_direction(&self, direction: Direction) {
        self.write().direction = direction;
    }

    /**
     * Moves the car to `target`, blocking for the simulated travel and dwell time.
     *
     * The floor changes only once the whole trip has elapsed. A shutdown during
     * travel aborts the trip and leaves the car where it started; a shutdown
     * during the dwell only shortens the dwell.
     */
    pub fn move_to(&self, target: i32, shutdown: &ShutdownSignal) -> MoveOutcome {
        let from = self.floor();
        if target == from {
            return MoveOutcome::AlreadyThere;
        }
        if !self.bounds.contains(target) {
            self.sink.emit(ElevatorEvent::InvalidFloor {
                floor: target,
                origin: FloorOrigin::Move,
            });
            return MoveOutcome::InvalidFloor;
        }

        let direction = Direction::between(from, target);
        {
            let mut state = self.write();
            state.direction = direction;
            state.behaviour = Behaviour::Moving;
        }
        self.sink.emit(ElevatorEvent::Departed {
            from,
            to: target,
            direction,
        });

        let travel_time = self.floor_travel.saturating_mul(target.abs_diff(from));
        if shutdown.wait(travel_time) {
            self.write().behaviour = Behaviour::Idle;
            self.sink.emit(ElevatorEvent::MoveAborted {
                floor: from,
                target,
            });
            return MoveOutcome::Aborted;
        }

        {
            let mut state = self.write();
            state.floor = target;
            state.behaviour = Behaviour::DoorOpen;
        }
        self.sink.emit(ElevatorEvent::Arrived(target));

        shutdown.wait(self.door_dwell);
        self.write().behaviour = Behaviour::Idle;
        self.sink.emit(ElevatorEvent::DoorsClosed(target));

        MoveOutcome::Arrived
    }

    fn read(&self) -> RwLockReadGuard<'_, CarState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CarState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
