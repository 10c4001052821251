//! Companion client walk over the device.
//!
//! Writes dummy data `offset + 1` times, then reads every index from 0 to
//! `offset` ascending and back down again, rendering each value in decimal.

use fibdrv_core::decimal::check_budget;
use fibdrv_core::{render_decimal, DecimalBigString, FibError, WideUint128};

use crate::device::{FibDevice, SeekOrigin, Session};
use crate::error::DeviceError;
use crate::interfaces::{CalculationResult, ResultPresenter};
use crate::record::{FibRecord, Timing, TIMED_RECORD_LEN};

/// Payload of each dummy write.
pub const WRITE_PAYLOAD: &[u8] = b"testing writing";

/// Which half of the walk a reading belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One read from the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Offset the client asked for.
    pub offset: u64,
    /// Position after the device clamped the seek.
    pub position: u64,
    pub direction: Direction,
    pub value: WideUint128,
    pub decimal: DecimalBigString,
    pub timing: Option<Timing>,
}

/// Totals of a finished walk.
///
/// Lines are handed to the presenter as they happen, so only the turning
/// point of the walk is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub writes: u64,
    pub reads: u64,
    /// The last ascending reading, F(offset) after clamping.
    pub top: Option<Reading>,
}

/// Run the client walk against `device` within one session, presenting each
/// write and read as soon as it completes.
pub fn exercise(
    device: &FibDevice,
    offset: u64,
    digit_budget: usize,
    presenter: &dyn ResultPresenter,
) -> Result<WalkSummary, DeviceError> {
    check_budget(digit_budget).map_err(FibError::from)?;

    let mut session = device.open()?;
    tracing::debug!(
        offset,
        max_index = device.options().max_index,
        "client walk starting"
    );
    let mut summary = WalkSummary::default();

    for _ in 0..=offset {
        presenter.present_write(session.write(WRITE_PAYLOAD));
        summary.writes += 1;
    }
    for i in 0..=offset {
        let reading = read_at(&mut session, i, Direction::Ascending, digit_budget)?;
        presenter.present_reading(&reading);
        summary.reads += 1;
        if i == offset {
            summary.top = Some(reading);
        }
    }
    for i in (0..=offset).rev() {
        let reading = read_at(&mut session, i, Direction::Descending, digit_budget)?;
        presenter.present_reading(&reading);
        summary.reads += 1;
    }

    session.release();
    tracing::debug!(offset, reads = summary.reads, "client walk complete");
    Ok(summary)
}

fn read_at(
    session: &mut Session<'_>,
    offset: u64,
    direction: Direction,
    digit_budget: usize,
) -> Result<Reading, DeviceError> {
    let position = session.seek(i64::try_from(offset).unwrap_or(i64::MAX), SeekOrigin::Start);

    let mut buf = [0u8; TIMED_RECORD_LEN];
    let n = session.read(&mut buf)?;
    let record = FibRecord::decode(&buf[..n])?;
    let decimal = render_decimal(record.value, digit_budget).map_err(FibError::from)?;

    Ok(Reading {
        offset,
        position,
        direction,
        value: record.value,
        decimal,
        timing: record.timing,
    })
}
