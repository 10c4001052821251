//! # fibdrv-device
//!
//! Hosts the Fibonacci engine behind a byte-stream style device: one
//! exclusive session at a time, a clamped seek position selecting the index,
//! and fixed-size binary records returned by `read`. Also provides the
//! companion client walk and single-index strategy runs.

pub mod calculator_selection;
pub mod client;
pub mod device;
pub mod error;
pub mod interfaces;
pub mod options;
pub mod orchestrator;
pub mod record;

pub use client::{exercise, Direction, Reading, WalkSummary};
pub use device::{FibDevice, SeekOrigin, Session, DEVICE_PATH};
pub use error::DeviceError;
pub use interfaces::{CalculationResult, ResultPresenter};
pub use options::{DeviceOptions, DEFAULT_MAX_INDEX};
pub use orchestrator::{analyze_comparison_results, execute_calculations};
pub use record::{FibRecord, Timing, RECORD_LEN, TIMED_RECORD_LEN};
