/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::Builder;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::{Config, ElevatorConfig, TimingConfig};
use crate::elevator::car::Car;
use crate::elevator::dispatch::{DispatchEngine, DispatchError, DispatchHandle};
use crate::elevator::registry::{RequestOutcome, RequestRegistry};
use crate::shared::{Direction, ElevatorStatus, EventSink, LogSink, ShutdownSignal};

/**
 * A single elevator: the car, its pending requests, and the means to dispatch it.
 *
 * Cloning is cheap and every clone talks to the same car and registry, so hall
 * buttons, cab buttons and status readers can each hold their own handle on
 * their own thread. Requests return as soon as they are recorded; the car only
 * moves while a dispatch loop started with `start_dispatch` is running.
 *
 * Requests made after the dispatch loop has shut down are still recorded but
 * nothing serves them until dispatch is started again.
 */
#[derive(Clone)]
pub struct Elevator {
    car: Arc<Car>,
    registry: Arc<RequestRegistry>,
    sink: Arc<dyn EventSink>,
    timing: TimingConfig,
    dispatching: Arc<AtomicBool>,
}

impl Elevator {
    /// Elevator with the default bounds and timing, logging through `log`.
    pub fn new(initial_floor: i32) -> Elevator {
        let config = Config::default();
        let elevator = ElevatorConfig {
            initial_floor,
            ..config.elevator
        };
        Elevator::with_sink(&elevator, &config.timing, Arc::new(LogSink))
    }

    pub fn with_sink(
        config: &ElevatorConfig,
        timing: &TimingConfig,
        sink: Arc<dyn EventSink>,
    ) -> Elevator {
        let bounds = config.bounds();
        Elevator {
            car: Arc::new(Car::new(config.initial_floor, bounds, timing, sink.clone())),
            registry: Arc::new(RequestRegistry::new(bounds, sink.clone())),
            sink,
            timing: timing.clone(),
            dispatching: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Spawns the dispatch loop on its own thread. Only one loop may run at a time.
    pub fn start_dispatch(&self, shutdown: ShutdownSignal) -> Result<DispatchHandle, DispatchError> {
        if self
            .dispatching
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(DispatchError::AlreadyRunning);
        }

        let engine = DispatchEngine::new(
            self.car.clone(),
            self.registry.clone(),
            self.sink.clone(),
            shutdown,
            self.timing.idle_poll(),
            self.dispatching.clone(),
        );

        let dispatch_thread = Builder::new().name("dispatch_engine".into());
        match dispatch_thread.spawn(move || engine.run()) {
            Ok(thread) => Ok(DispatchHandle::new(thread)),
            Err(e) => {
                self.dispatching.store(false, Ordering::Release);
                Err(DispatchError::Spawn(e))
            }
        }
    }

    pub fn call_from_floor(&self, floor: i32) -> RequestOutcome {
        self.registry.submit_hall_call(floor)
    }

    pub fn select_destination(&self, floor: i32) -> RequestOutcome {
        self.registry.submit_destination(floor)
    }

    pub fn cancel_request(&self, floor: i32) -> bool {
        self.registry.cancel(floor)
    }

    pub fn current_floor(&self) -> i32 {
        self.car.floor()
    }

    pub fn current_direction(&self) -> Direction {
        self.car.direction()
    }

    pub fn pending_floors(&self) -> Vec<i32> {
        self.registry.pending_floors()
    }

    pub fn is_pending(&self, floor: i32) -> bool {
        self.registry.is_pending(floor)
    }

    /**
     * Snapshot of the car and its pending floors.
     *
     * The registry is read before the car. Dispatch moves the car before it
     * clears the floor, so a floor missing from `pending` has always been
     * reached by the `floor` reported alongside it.
     */
    pub fn status(&self) -> ElevatorStatus {
        let pending = self.registry.pending_floors();
        let car = self.car.state();
        ElevatorStatus {
            floor: car.floor,
            direction: car.direction,
            behaviour: car.behaviour,
            pending,
        }
    }
}
