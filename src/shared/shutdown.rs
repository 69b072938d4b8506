/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::time::Duration;

/**
 * Shutdown is signalled by disconnecting a zero-capacity channel.
 *
 * Nothing is ever sent on it. Once the `ShutdownTrigger` is consumed or
 * dropped every receiver sees the disconnect at once, and keeps seeing it,
 * so any number of `ShutdownSignal` clones can wait on the same shutdown.
 */
pub fn shutdown_channel() -> (ShutdownTrigger, ShutdownSignal) {
    let (shutdown_tx, shutdown_rx) = cbc::bounded::<()>(0);
    (
        ShutdownTrigger { shutdown_tx },
        ShutdownSignal { shutdown_rx },
    )
}

#[derive(Debug)]
pub struct ShutdownTrigger {
    shutdown_tx: cbc::Sender<()>,
}

impl ShutdownTrigger {
    pub fn trigger(self) {
        drop(self.shutdown_tx);
    }
}

#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    shutdown_rx: cbc::Receiver<()>,
}

impl ShutdownSignal {
    /// A signal that never fires.
    pub fn never() -> ShutdownSignal {
        ShutdownSignal {
            shutdown_rx: cbc::never(),
        }
    }

    pub fn is_triggered(&self) -> bool {
        !matches!(self.shutdown_rx.try_recv(), Err(cbc::TryRecvError::Empty))
    }

    /// Sleeps for `timeout` unless shutdown arrives first. Returns true on shutdown.
    pub fn wait(&self, timeout: Duration) -> bool {
        cbc::select! {
            recv(self.shutdown_rx) -> _ => true,
            default(timeout) => false,
        }
    }
}
