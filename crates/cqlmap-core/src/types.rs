use derive_more::{Deref, Display, From};
use std::time::{SystemTime, UNIX_EPOCH};

///
/// Timestamp
/// (in milliseconds since the unix epoch, as the wire `timestamp` type)
///

#[derive(Clone, Copy, Debug, Default, Deref, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    /// Construct from milliseconds.
    #[must_use]
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: i64) -> Self {
        Self(secs.saturating_mul(1_000))
    }

    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Current wall-clock time; clocks before the epoch clamp to it.
    #[must_use]
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX));

        Self(millis)
    }
}
