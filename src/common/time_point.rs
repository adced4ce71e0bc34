use std::cmp::Ordering;
use std::time::Duration;

/// Smallest distinguishable step between two timestamps.
pub const TIME_UNIT: Duration = Duration::from_millis(1);
pub const F64_MARGIN: f64 = 0.000000001;

/// Milliseconds since the Unix epoch, UTC.
pub type Timestamp = u64;
pub type Value = f64;

/// One immutable (timestamp, value) sample.
#[derive(Clone, Copy, Debug)]
pub struct TimePoint {
    timestamp: Timestamp,
    value: Value,
}

impl TimePoint {
    pub fn new(timestamp: Timestamp, value: Value) -> TimePoint {
        TimePoint { timestamp, value }
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn value(&self) -> Value {
        self.value
    }
}

impl Eq for TimePoint {}

impl PartialEq for TimePoint {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp.eq(&other.timestamp) && (self.value - other.value).abs() < F64_MARGIN
    }
}

impl Ord for TimePoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

impl PartialOrd for TimePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
