//! The Fibonacci device and its exclusive session.
//!
//! `FibDevice::open` is a non-blocking try-acquire: it either hands out the
//! single [`Session`] or fails with [`DeviceError::Busy`]. The session owns
//! the lock guard, so releasing is dropping (or calling
//! [`Session::release`]). The engine itself holds no state and needs no lock.

use parking_lot::{Mutex, MutexGuard};

use fibdrv_core::verify;

use crate::error::DeviceError;
use crate::options::DeviceOptions;
use crate::record::{FibRecord, Timing};

/// Path the device is presented under.
pub const DEVICE_PATH: &str = "/dev/fibonacci";

/// Reference point for [`Session::seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    /// Absolute position.
    Start,
    /// Relative to the current position.
    Current,
    /// Counted back from the maximum index: `max_index - offset`.
    End,
}

/// A Fibonacci device admitting one session at a time.
pub struct FibDevice {
    options: DeviceOptions,
    gate: Mutex<()>,
}

impl FibDevice {
    #[must_use]
    pub fn new(options: DeviceOptions) -> Self {
        Self {
            options,
            gate: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn options(&self) -> &DeviceOptions {
        &self.options
    }

    /// Whether a session currently holds the device.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.gate.is_locked()
    }

    /// Acquire exclusive access without blocking.
    pub fn open(&self) -> Result<Session<'_>, DeviceError> {
        let Some(guard) = self.gate.try_lock() else {
            tracing::warn!("{DEVICE_PATH} is in use");
            return Err(DeviceError::Busy);
        };
        tracing::debug!("session opened on {DEVICE_PATH}");
        Ok(Session {
            device: self,
            position: 0,
            _guard: guard,
        })
    }
}

impl Default for FibDevice {
    fn default() -> Self {
        Self::new(DeviceOptions::default())
    }
}

/// Exclusive handle on a [`FibDevice`]. Its position is the index read next.
pub struct Session<'a> {
    device: &'a FibDevice,
    position: u64,
    _guard: MutexGuard<'a, ()>,
}

impl Session<'_> {
    /// Current index.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Move the position and clamp it to `[0, max_index]`.
    ///
    /// Returns the new position.
    pub fn seek(&mut self, offset: i64, origin: SeekOrigin) -> u64 {
        let max = i64::try_from(self.device.options.max_index).unwrap_or(i64::MAX);
        let current = i64::try_from(self.position).unwrap_or(i64::MAX);
        let target = match origin {
            SeekOrigin::Start => offset,
            SeekOrigin::Current => current.saturating_add(offset),
            SeekOrigin::End => max.saturating_sub(offset),
        };
        // Clamped into [0, max], so the conversion cannot fail.
        self.position = u64::try_from(target.clamp(0, max)).unwrap_or(0);
        tracing::debug!(offset, ?origin, position = self.position, "seek");
        self.position
    }

    /// Compute the record for the current position.
    pub fn record(&self) -> Result<FibRecord, DeviceError> {
        let k = self.position;
        let opts = &self.device.options;
        if !opts.timing {
            return Ok(FibRecord {
                value: opts.strategy.compute(k),
                timing: None,
            });
        }

        let comparison = verify(k)?;
        Ok(FibRecord {
            value: comparison.fast_doubling,
            timing: Some(Timing {
                linear: comparison.linear_elapsed,
                fast_doubling: comparison.fast_doubling_elapsed,
            }),
        })
    }

    /// Compute F(position) and copy its record into `buf`.
    ///
    /// Returns the number of bytes written. The position does not move.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        let record = self.record()?;
        tracing::debug!(
            index = self.position,
            high = record.value.high,
            low = record.value.low,
            "read"
        );
        record.encode_into(buf).inspect_err(|err| {
            tracing::warn!(index = self.position, %err, "copy to caller failed");
        })
    }

    /// Accept and discard `data`, reporting all of it consumed.
    pub fn write(&mut self, data: &[u8]) -> usize {
        tracing::trace!(len = data.len(), "write ignored");
        data.len()
    }

    /// Relinquish exclusive access.
    pub fn release(self) {
        tracing::debug!("session released on {DEVICE_PATH}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RECORD_LEN, TIMED_RECORD_LEN};
    use fibdrv_core::WideUint128;

    #[test]
    fn second_open_is_busy() {
        let device = FibDevice::default();
        let session = device.open().unwrap();
        assert!(device.is_busy());
        assert!(matches!(device.open(), Err(DeviceError::Busy)));
        session.release();
        assert!(!device.is_busy());
        assert!(device.open().is_ok());
    }

    #[test]
    fn drop_releases() {
        let device = FibDevice::default();
        {
            let _session = device.open().unwrap();
            assert!(device.open().is_err());
        }
        assert!(device.open().is_ok());
    }

    #[test]
    fn busy_across_threads() {
        let device = FibDevice::default();
        let session = device.open().unwrap();
        std::thread::scope(|s| {
            let handle = s.spawn(|| device.open().map(|_| ()));
            assert!(matches!(handle.join().unwrap(), Err(DeviceError::Busy)));
        });
        drop(session);
    }

    #[test]
    fn seek_clamps() {
        let device = FibDevice::default();
        let mut session = device.open().unwrap();
        assert_eq!(session.seek(105, SeekOrigin::Start), 100);
        assert_eq!(session.seek(-5, SeekOrigin::Start), 0);
        assert_eq!(session.seek(10, SeekOrigin::End), 90);
        assert_eq!(session.seek(-200, SeekOrigin::End), 100);
        assert_eq!(session.seek(-5, SeekOrigin::Current), 95);
        assert_eq!(session.seek(50, SeekOrigin::Current), 100);
        assert_eq!(session.seek(i64::MIN, SeekOrigin::Current), 0);
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn read_writes_plain_record() {
        let device = FibDevice::default();
        let mut session = device.open().unwrap();
        session.seek(100, SeekOrigin::Start);
        let mut buf = [0u8; RECORD_LEN];
        assert_eq!(session.read(&mut buf).unwrap(), RECORD_LEN);
        let record = FibRecord::decode(&buf).unwrap();
        assert_eq!(record.value.to_string(), "354224848179261915075");
        assert_eq!(session.position(), 100);
    }

    #[test]
    fn read_into_short_buffer_faults() {
        let device = FibDevice::default();
        let mut session = device.open().unwrap();
        let mut buf = [0u8; 4];
        assert!(matches!(
            session.read(&mut buf),
            Err(DeviceError::Fault { .. })
        ));
    }

    #[test]
    fn timed_read_appends_durations() {
        let device = FibDevice::new(DeviceOptions {
            timing: true,
            ..DeviceOptions::default()
        });
        let mut session = device.open().unwrap();
        session.seek(93, SeekOrigin::Start);
        let mut buf = [0u8; TIMED_RECORD_LEN];
        assert_eq!(session.read(&mut buf).unwrap(), TIMED_RECORD_LEN);
        let record = FibRecord::decode(&buf).unwrap();
        assert_eq!(
            record.value,
            WideUint128::from_u64(12_200_160_415_121_876_738)
        );
        assert!(record.timing.is_some());
    }

    #[test]
    fn write_is_a_noop() {
        let device = FibDevice::default();
        let mut session = device.open().unwrap();
        session.seek(7, SeekOrigin::Start);
        assert_eq!(session.write(b"testing writing"), 15);
        assert_eq!(session.write(&[]), 0);
        assert_eq!(session.position(), 7);
    }

    #[test]
    fn options_are_kept() {
        let device = FibDevice::new(DeviceOptions {
            max_index: 42,
            timing: true,
            ..DeviceOptions::default()
        });
        assert_eq!(device.options().max_index, 42);
        assert!(device.options().timing);

        let mut session = device.open().unwrap();
        assert_eq!(session.seek(0, SeekOrigin::End), 42);
    }
}
