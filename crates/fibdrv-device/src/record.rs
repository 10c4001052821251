//! Fixed-size binary records returned by `read`.
//!
//! Layout, all little-endian:
//!
//! | bytes  | field                          |
//! |--------|--------------------------------|
//! | 0..8   | low word of F(k)               |
//! | 8..16  | high word of F(k)              |
//! | 16..24 | linear duration, ns (timed)    |
//! | 24..32 | fast doubling duration, ns (timed) |

use std::time::Duration;

use fibdrv_core::WideUint128;

use crate::error::DeviceError;

/// Size of a plain record.
pub const RECORD_LEN: usize = WideUint128::BYTES;

/// Size of a record carrying both strategy durations.
pub const TIMED_RECORD_LEN: usize = RECORD_LEN + 16;

/// Monotonic durations of both strategies for one read. Observational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub linear: Duration,
    pub fast_doubling: Duration,
}

/// One computed value, optionally with timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibRecord {
    pub value: WideUint128,
    pub timing: Option<Timing>,
}

impl FibRecord {
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        if self.timing.is_some() {
            TIMED_RECORD_LEN
        } else {
            RECORD_LEN
        }
    }

    /// Copy the record into the front of `buf`.
    ///
    /// Fails without writing anything if `buf` is too short.
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<usize, DeviceError> {
        let len = self.encoded_len();
        let available = buf.len();
        let Some(dst) = buf.get_mut(..len) else {
            return Err(DeviceError::Fault {
                needed: len,
                available,
            });
        };

        dst[..RECORD_LEN].copy_from_slice(&self.value.to_le_bytes());
        if let Some(timing) = self.timing {
            dst[16..24].copy_from_slice(&nanos(timing.linear).to_le_bytes());
            dst[24..32].copy_from_slice(&nanos(timing.fast_doubling).to_le_bytes());
        }
        Ok(len)
    }

    /// Parse exactly one plain or timed record.
    pub fn decode(bytes: &[u8]) -> Result<Self, DeviceError> {
        let (value, rest) = match bytes.len() {
            RECORD_LEN | TIMED_RECORD_LEN => bytes.split_at(RECORD_LEN),
            n => return Err(DeviceError::Malformed(n)),
        };

        let mut word = [0u8; RECORD_LEN];
        word.copy_from_slice(value);
        let value = WideUint128::from_le_bytes(word);

        let timing = if rest.is_empty() {
            None
        } else {
            Some(Timing {
                linear: Duration::from_nanos(read_u64(&rest[..8])),
                fast_doubling: Duration::from_nanos(read_u64(&rest[8..])),
            })
        };
        Ok(Self { value, timing })
    }
}

fn nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

fn read_u64(bytes: &[u8]) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(bytes);
    u64::from_le_bytes(raw)
}
