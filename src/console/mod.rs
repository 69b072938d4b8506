pub mod commands;
pub mod session;

mod commands_tests;

pub use commands::{Command, CommandError};
pub use session::run_session;
