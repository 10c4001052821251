//! Error handling and exit codes.

use fibdrv_core::{exit_codes, FibError};
use fibdrv_device::DeviceError;

/// Map an application error to its process exit code.
#[must_use]
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<DeviceError>() {
        return device_error_code(err);
    }
    if let Some(err) = err.downcast_ref::<FibError>() {
        return fib_error_code(err);
    }
    exit_codes::ERROR_GENERIC
}

fn device_error_code(err: &DeviceError) -> i32 {
    match err {
        DeviceError::Busy => exit_codes::ERROR_BUSY,
        DeviceError::Fib(err) => fib_error_code(err),
        DeviceError::Fault { .. } | DeviceError::Malformed(_) => exit_codes::ERROR_GENERIC,
    }
}

fn fib_error_code(err: &FibError) -> i32 {
    match err {
        FibError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        FibError::Config(_) | FibError::Decimal(_) => exit_codes::ERROR_CONFIG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibdrv_core::DecimalError;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&DeviceError::Busy.into()), 16);
        assert_eq!(handle_error(&FibError::Mismatch { index: 7 }.into()), 3);
        assert_eq!(handle_error(&FibError::Config("bad".into()).into()), 4);
        assert_eq!(
            handle_error(&FibError::Decimal(DecimalError::ZeroBudget).into()),
            4
        );
    }

    #[test]
    fn nested_device_errors() {
        let err = DeviceError::Fib(FibError::Mismatch { index: 3 });
        assert_eq!(handle_error(&err.into()), 3);
        let err = DeviceError::Fault {
            needed: 16,
            available: 0,
        };
        assert_eq!(handle_error(&err.into()), 1);
    }

    #[test]
    fn other_errors_are_generic() {
        let err = anyhow::anyhow!("disk full");
        assert_eq!(handle_error(&err), 1);
        let io = std::io::Error::other("nope");
        assert_eq!(handle_error(&io.into()), 1);
    }
}
