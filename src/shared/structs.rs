/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "moving")]
    Moving,
    #[serde(rename = "doorOpen")]
    DoorOpen,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Idle,
}

impl Direction {
    /// Direction of travel needed to get from `from` to `to`.
    pub fn between(from: i32, to: i32) -> Direction {
        if to > from {
            Direction::Up
        } else if to < from {
            Direction::Down
        } else {
            Direction::Idle
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Idle => write!(f, "idle"),
        }
    }
}

/**
 * Inclusive range of floors the car is allowed to service.
 *
 * Bounds are fixed when an elevator is created and never change afterwards.
 */
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorBounds {
    pub min: i32,
    pub max: i32,
}

impl FloorBounds {
    pub const DEFAULT: FloorBounds = FloorBounds { min: 1, max: 10 };

    pub fn new(min: i32, max: i32) -> FloorBounds {
        FloorBounds { min, max }
    }

    pub fn contains(&self, floor: i32) -> bool {
        floor >= self.min && floor <= self.max
    }
}

impl Default for FloorBounds {
    fn default() -> Self {
        FloorBounds::DEFAULT
    }
}

/// Point-in-time view of the car and its pending requests.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorStatus {
    pub floor: i32,
    pub direction: Direction,
    pub behaviour: Behaviour,
    pub pending: Vec<i32>,
}
