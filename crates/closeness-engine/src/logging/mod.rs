//! Logger setup for hosts embedding the engine.
//!
//! The engine only emits through the `log` facade. Nothing here runs unless the
//! host calls [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
