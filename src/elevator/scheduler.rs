/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::registry::PendingFloor;
use crate::shared::Direction;

/***************************************/
/*             Public API              */
/***************************************/
/// Direction to keep for the next leg, and the floor to go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub direction: Direction,
    pub target: Option<i32>,
}

pub fn decide(floor: i32, direction: Direction, pending: &[PendingFloor]) -> Decision {
    let direction = choose_direction(floor, direction, pending);
    Decision {
        direction,
        target: select_target(floor, direction, pending),
    }
}

/**
 * Keeps the current direction while it still has work, otherwise reverses.
 *
 * An idle car never picks a direction here; the target it is sent to does that.
 */
pub fn choose_direction(floor: i32, direction: Direction, pending: &[PendingFloor]) -> Direction {
    match direction {
        Direction::Up if !has_requests_in_direction(floor, Direction::Up, pending) => {
            Direction::Down
        }
        Direction::Down if !has_requests_in_direction(floor, Direction::Down, pending) => {
            Direction::Up
        }
        _ => direction,
    }
}

pub fn has_requests_in_direction(floor: i32, direction: Direction, pending: &[PendingFloor]) -> bool {
    match direction {
        Direction::Up => pending.iter().any(|p| p.floor > floor),
        Direction::Down => pending.iter().any(|p| p.floor < floor),
        Direction::Idle => false,
    }
}

/**
 * Picks the next floor to visit.
 *
 * Going up this is the closest pending floor above, going down the closest one
 * below. When nothing lies ahead (or the car is idle) the car goes to the
 * nearest pending floor. Equal distances go to the floor that was requested
 * first, then to the lower floor.
 */
pub fn select_target(floor: i32, direction: Direction, pending: &[PendingFloor]) -> Option<i32> {
    let ahead = match direction {
        Direction::Up => pending.iter().map(|p| p.floor).filter(|&f| f > floor).min(),
        Direction::Down => pending.iter().map(|p| p.floor).filter(|&f| f < floor).max(),
        Direction::Idle => None,
    };

    ahead.or_else(|| nearest(floor, pending))
}

fn nearest(floor: i32, pending: &[PendingFloor]) -> Option<i32> {
    pending
        .iter()
        .min_by_key(|p| (p.floor.abs_diff(floor), p.arrival, p.floor))
        .map(|p| p.floor)
}
