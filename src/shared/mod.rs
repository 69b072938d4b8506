pub mod events;
pub mod macros;
pub mod shutdown;
pub mod structs;

mod macros_tests;

pub use events::{ChannelSink, ElevatorEvent, EventSink, FloorOrigin, LogSink};
pub use shutdown::{shutdown_channel, ShutdownSignal, ShutdownTrigger};
pub use structs::{Behaviour, Direction, ElevatorStatus, FloorBounds};
