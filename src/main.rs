/* 3rd party libraries */
use clap::{Parser, Subcommand};
use crossbeam_channel as cbc;
use log::info;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::Builder;

/* Custom libraries */
use config::Config;
use elevator::Elevator;
use shared::{shutdown_channel, ChannelSink, ElevatorEvent};

/* Modules */
mod config;
mod console;
mod demo;
mod elevator;
mod shared;

/* Command line */
#[derive(Parser)]
#[clap(author, version, about = "Single-car elevator dispatch simulator")]
struct Cli {
    /// Path to the TOML configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Starting floor, overrides the configuration file
    #[clap(long, allow_hyphen_values = true)]
    initial_floor: Option<i32>,

    #[clap(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy)]
enum Mode {
    /// Replay the scripted demo scenario
    Demo,
    /// Read commands from stdin
    Interactive,
}

/* Main */
fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load the configuration
    let cli = Cli::parse();
    let mut config =
        crate::unwrap_or_exit!(config::load_config(&cli.config), "Loading configuration");
    if let Some(floor) = cli.initial_floor {
        config.elevator.initial_floor = floor;
    }
    crate::unwrap_or_exit!(config.validate(), "Invalid configuration");

    match cli.mode.unwrap_or(Mode::Demo) {
        Mode::Demo => {
            let exit = crate::unwrap_or_exit!(demo::run_demo(&config), "Demo failed");
            info!("Dispatch ended: {:?}", exit);
            Ok(())
        }
        Mode::Interactive => run_interactive(&config),
    }
}

fn run_interactive(config: &Config) -> io::Result<()> {
    // Events are printed by their own thread so the prompt never blocks the car
    let (event_tx, event_rx) = cbc::unbounded::<ElevatorEvent>();
    let elevator = Elevator::with_sink(
        &config.elevator,
        &config.timing,
        Arc::new(ChannelSink::new(event_tx)),
    );

    let event_monitor_thread = Builder::new().name("event_monitor".into());
    let event_monitor = event_monitor_thread.spawn(move || {
        for event in event_rx.iter() {
            println!("{}", event);
        }
    })?;

    let (trigger, signal) = shutdown_channel();
    let dispatch = crate::unwrap_or_exit!(elevator.start_dispatch(signal), "Starting dispatch");

    println!("{}", console::commands::HELP);
    console::run_session(&elevator, io::stdin().lock(), &mut io::stdout())?;

    // Stop dispatch, then drop the last sink so the monitor drains and exits
    trigger.trigger();
    let exit = dispatch.join();
    drop(elevator);
    let _ = event_monitor.join();

    info!("Dispatch ended: {:?}", exit);
    Ok(())
}
