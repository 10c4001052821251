//! # fibdrv-cli
//!
//! Line formatting and the stdout presenter for the fibdrv client.

pub mod output;
pub mod presenter;

pub use presenter::CLIResultPresenter;
