pub mod car;
pub mod dispatch;
pub mod registry;
pub mod scheduler;
pub mod system;

mod car_tests;
mod scheduler_tests;

pub use car::{Car, CarState, MoveOutcome};
pub use dispatch::{DispatchEngine, DispatchError, DispatchExit, DispatchHandle};
pub use registry::{PendingFloor, RequestKind, RequestOutcome, RequestRegistry};
pub use system::Elevator;
