/***************************************/
/*               Macros                */
/***************************************/
/// Exit status used when bootstrap fails.
pub const EXIT_BOOTSTRAP_FAILURE: i32 = 1;

/**
 * Unwraps a `Result` during startup, or logs the error and exits.
 *
 * An optional context string is prefixed to the logged error, e.g.
 * `unwrap_or_exit!(load_config(path), "Loading configuration")`.
 */
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $context:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $context, e);
                std::process::exit($crate::shared::macros::EXIT_BOOTSTRAP_FAILURE);
            }
        }
    };
    ($expr:expr) => {
        $crate::unwrap_or_exit!($expr, "Startup failed")
    };
}
