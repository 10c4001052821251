//! Device error type.

use fibdrv_core::FibError;

use crate::device::DEVICE_PATH;

/// Failures surfaced by the device and its client.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// Another session holds the device. Not retried automatically.
    #[error("{} is in use", DEVICE_PATH)]
    Busy,

    /// The caller's buffer cannot hold the record.
    #[error("bad address: record needs {needed} bytes, buffer holds {available}")]
    Fault { needed: usize, available: usize },

    /// A byte slice that is not a plain or timed record.
    #[error("malformed record of {0} bytes")]
    Malformed(usize),

    /// Engine or rendering failure.
    #[error(transparent)]
    Fib(#[from] FibError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(DeviceError::Busy.to_string(), "/dev/fibonacci is in use");
        let err = DeviceError::Fault {
            needed: 16,
            available: 4,
        };
        assert_eq!(
            err.to_string(),
            "bad address: record needs 16 bytes, buffer holds 4"
        );
        let err = DeviceError::from(FibError::Mismatch { index: 3 });
        assert_eq!(err.to_string(), "strategy mismatch at index 3");
    }
}
