/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::car::{Car, MoveOutcome};
use crate::elevator::registry::RequestRegistry;
use crate::elevator::scheduler;
use crate::shared::{ElevatorEvent, EventSink, ShutdownSignal};

/***************************************/
/*               Enums                 */
/***************************************/
enum Event {
    Serve(i32),
    NothingPending,
    Terminate,
}

/// How the dispatch loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchExit {
    Shutdown,
    Panicked,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch is already running for this elevator")]
    AlreadyRunning,
    #[error("failed to spawn dispatch thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/***************************************/
/*             Public API              */
/***************************************/
/**
 * Runs the car against the request registry until shutdown.
 *
 * Each pass takes a snapshot of the pending floors, lets the scheduler keep or
 * reverse the direction and pick a target, moves the car there and clears the
 * floor. With nothing pending it waits `idle_poll` on the shutdown channel.
 *
 * # Fields
 * - `car`:         The car, written only from here.
 * - `registry`:    Shared pending requests.
 * - `sink`:        Receives dispatch lifecycle events.
 * - `shutdown`:    Ends the loop at the next suspension point.
 * - `idle_poll`:   Wait between polls of an empty registry.
 * - `serving`:     True from the first served request until the registry runs dry.
 * - `running`:     Cleared when the loop exits so dispatch can be started again.
 */
pub struct DispatchEngine {
    car: Arc<Car>,
    registry: Arc<RequestRegistry>,
    sink: Arc<dyn EventSink>,
    shutdown: ShutdownSignal,
    idle_poll: Duration,
    serving: bool,
    running: Arc<AtomicBool>,
}

impl DispatchEngine {
    pub fn new(
        car: Arc<Car>,
        registry: Arc<RequestRegistry>,
        sink: Arc<dyn EventSink>,
        shutdown: ShutdownSignal,
        idle_poll: Duration,
        running: Arc<AtomicBool>,
    ) -> DispatchEngine {
        DispatchEngine {
            car,
            registry,
            sink,
            shutdown,
            idle_poll,
            serving: false,
            running,
        }
    }

    pub fn run(mut self) -> DispatchExit {
        let _running = RunningGuard(self.running.clone());
        self.sink.emit(ElevatorEvent::DispatchStarted);

        loop {
            let event = self.wait_for_event();
            if !self.handle_event(event) {
                break;
            }
        }

        self.sink.emit(ElevatorEvent::DispatchStopped);
        DispatchExit::Shutdown
    }

    fn wait_for_event(&self) -> Event {
        if self.shutdown.is_triggered() {
            return Event::Terminate;
        }

        let pending = self.registry.snapshot_pending();
        if pending.is_empty() {
            return Event::NothingPending;
        }

        let floor = self.car.floor();
        let decision = scheduler::decide(floor, self.car.direction(), &pending);
        self.car.set_direction(decision.direction);

        match decision.target {
            Some(target) if self.registry.bounds().contains(target) => Event::Serve(target),
            _ => Event::NothingPending,
        }
    }

    // Returns false once the loop should stop
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Serve(target) => {
                self.serving = true;
                match self.car.move_to(target, &self.shutdown) {
                    MoveOutcome::Arrived | MoveOutcome::AlreadyThere => {
                        self.registry.clear(target);
                        self.sink.emit(ElevatorEvent::RequestServed(target));
                        true
                    }
                    MoveOutcome::Aborted => false,
                    MoveOutcome::InvalidFloor => true,
                }
            }

            Event::NothingPending => {
                if self.serving {
                    self.serving = false;
                    self.sink.emit(ElevatorEvent::Quiescent(self.car.floor()));
                }
                !self.shutdown.wait(self.idle_poll)
            }

            Event::Terminate => false,
        }
    }
}

/// Join handle for a running dispatch loop.
pub struct DispatchHandle {
    thread: JoinHandle<DispatchExit>,
}

impl DispatchHandle {
    pub(crate) fn new(thread: JoinHandle<DispatchExit>) -> DispatchHandle {
        DispatchHandle { thread }
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    pub fn join(self) -> DispatchExit {
        self.thread.join().unwrap_or(DispatchExit::Panicked)
    }
}

struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
