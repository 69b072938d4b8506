/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ElevatorEvent, EventSink, FloorBounds, FloorOrigin};

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    HallCall,
    Destination,
}

/// Result flag for a submitted request. An invalid floor is reported, never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    Accepted,
    AlreadyPending,
    InvalidFloor,
}

/***************************************/
/*       Public data structures        */
/***************************************/
/// A pending floor together with the order in which it was first requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFloor {
    pub floor: i32,
    pub arrival: u64,
}

#[derive(Debug, Default)]
struct PendingRequests {
    hall_calls: BTreeMap<i32, u64>,
    destinations: BTreeMap<i32, u64>,
    next_arrival: u64,
}

impl PendingRequests {
    fn set_mut(&mut self, kind: RequestKind) -> &mut BTreeMap<i32, u64> {
        match kind {
            RequestKind::HallCall => &mut self.hall_calls,
            RequestKind::Destination => &mut self.destinations,
        }
    }

    fn remove(&mut self, floor: i32) -> bool {
        let hall = self.hall_calls.remove(&floor).is_some();
        let destination = self.destinations.remove(&floor).is_some();
        hall || destination
    }

    fn union(&self) -> BTreeMap<i32, u64> {
        let mut union = self.hall_calls.clone();
        for (&floor, &arrival) in self.destinations.iter() {
            union
                .entry(floor)
                .and_modify(|first| *first = (*first).min(arrival))
                .or_insert(arrival);
        }
        union
    }
}

/**
 * Thread-safe store of pending hall calls and in-car destinations.
 *
 * Both sets sit behind a single mutex. Every operation, including the
 * dispatcher's snapshot and clear, takes that lock once and releases it before
 * returning, so a snapshot always reflects whole submits and cancels. Callers
 * only ever see copies of the pending floors.
 *
 * # Fields
 * - `pending`: Hall calls and destinations, each floor stamped with its arrival order.
 * - `bounds`:  Floors outside these bounds are rejected.
 * - `sink`:    Receives registration, cancel and invalid-floor events.
 */
pub struct RequestRegistry {
    pending: Mutex<PendingRequests>,
    bounds: FloorBounds,
    sink: Arc<dyn EventSink>,
}

impl RequestRegistry {
    pub fn new(bounds: FloorBounds, sink: Arc<dyn EventSink>) -> RequestRegistry {
        RequestRegistry {
            pending: Mutex::new(PendingRequests::default()),
            bounds,
            sink,
        }
    }

    pub fn bounds(&self) -> FloorBounds {
        self.bounds
    }

    pub fn submit_hall_call(&self, floor: i32) -> RequestOutcome {
        self.submit(floor, RequestKind::HallCall)
    }

    pub fn submit_destination(&self, floor: i32) -> RequestOutcome {
        self.submit(floor, RequestKind::Destination)
    }

    pub fn submit(&self, floor: i32, kind: RequestKind) -> RequestOutcome {
        if !self.bounds.contains(floor) {
            let origin = match kind {
                RequestKind::HallCall => FloorOrigin::HallCall,
                RequestKind::Destination => FloorOrigin::Destination,
            };
            self.sink.emit(ElevatorEvent::InvalidFloor { floor, origin });
            return RequestOutcome::InvalidFloor;
        }

        let inserted = {
            let mut pending = self.lock();
            let arrival = pending.next_arrival;
            let set = pending.set_mut(kind);
            if set.contains_key(&floor) {
                false
            } else {
                set.insert(floor, arrival);
                pending.next_arrival += 1;
                true
            }
        };

        if !inserted {
            return RequestOutcome::AlreadyPending;
        }

        self.sink.emit(match kind {
            RequestKind::HallCall => ElevatorEvent::HallCallRegistered(floor),
            RequestKind::Destination => ElevatorEvent::DestinationRegistered(floor),
        });
        RequestOutcome::Accepted
    }

    /// Withdraws any request for `floor`. Returns whether something was removed.
    pub fn cancel(&self, floor: i32) -> bool {
        if !self.bounds.contains(floor) {
            self.sink.emit(ElevatorEvent::InvalidFloor {
                floor,
                origin: FloorOrigin::Cancel,
            });
            return false;
        }

        let removed = self.lock().remove(floor);
        if removed {
            self.sink.emit(ElevatorEvent::RequestCanceled(floor));
        }
        removed
    }

    /// Union of both sets, ordered by floor.
    pub fn snapshot_pending(&self) -> Vec<PendingFloor> {
        self.lock()
            .union()
            .into_iter()
            .map(|(floor, arrival)| PendingFloor { floor, arrival })
            .collect()
    }

    /// Drops `floor` from both sets once the car has been there.
    pub fn clear(&self, floor: i32) -> bool {
        self.lock().remove(floor)
    }

    pub fn pending_floors(&self) -> Vec<i32> {
        self.lock().union().into_keys().collect()
    }

    pub fn is_pending(&self, floor: i32) -> bool {
        let pending = self.lock();
        pending.hall_calls.contains_key(&floor) || pending.destinations.contains_key(&floor)
    }

    pub fn is_empty(&self) -> bool {
        let pending = self.lock();
        pending.hall_calls.is_empty() && pending.destinations.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, PendingRequests> {
        // Critical sections never leave the sets half-updated
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
