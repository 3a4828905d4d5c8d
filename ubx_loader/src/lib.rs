//! Shared plumbing of the `ublox-assistnow-loader` and `ublox-cfg-loader` binaries:
//! argument parsing, serial port setup, logging, the configuration file and the HTTP client.

pub mod assistnow;
pub mod cli;
pub mod config;
pub mod http;
pub mod logging;

pub use ubx_assist;
