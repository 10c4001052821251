//! Device configuration.

use fibdrv_core::{Strategy, MAX_LINEAR_INDEX};

/// Largest index the device seeks to by default.
pub const DEFAULT_MAX_INDEX: u64 = 100;

/// Options for a [`FibDevice`](crate::FibDevice).
#[derive(Debug, Clone)]
pub struct DeviceOptions {
    /// Upper clamp for the seek position.
    pub max_index: u64,
    /// Strategy used by plain reads.
    pub strategy: Strategy,
    /// Run both strategies per read and append their durations to the record.
    pub timing: bool,
}

impl DeviceOptions {
    /// Bring `max_index` into the range a signed seek offset can address.
    ///
    /// When reads run the linear strategy (plain linear or timed), it is
    /// also capped at [`MAX_LINEAR_INDEX`].
    #[must_use]
    pub fn normalize(mut self) -> Self {
        let mut cap = i64::MAX.unsigned_abs();
        if self.timing || self.strategy == Strategy::Linear {
            cap = MAX_LINEAR_INDEX;
        }
        if self.max_index > cap {
            tracing::warn!(
                requested = self.max_index,
                max = cap,
                "max index capped"
            );
            self.max_index = cap;
        }
        self
    }
}

impl Default for DeviceOptions {
    fn default() -> Self {
        Self {
            max_index: DEFAULT_MAX_INDEX,
            strategy: Strategy::FastDoubling,
            timing: false,
        }
    }
}
