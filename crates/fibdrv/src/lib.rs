//! fibdrv library: configuration, dispatch and exit-code mapping for the
//! `fibdrv` binary.

pub mod app;
pub mod config;
pub mod errors;
