//! Process setup shared by the binary and the config loader
//!
//! folio logs to `folio.log` under its data directory, reads user overrides
//! from `config.*` under its config directory, and restores the terminal
//! before a panic report is printed. `FOLIO_DATA` and `FOLIO_CONFIG` replace
//! the platform directories.

pub mod logging;
pub mod panic;
pub mod paths;

pub use logging::initialize_logging;
pub use panic::initialize_panic_handler;
pub use paths::{get_config_dir, get_data_dir, version};
