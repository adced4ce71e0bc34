use crate::common::time_point::TimePoint;

/// True when every adjacent pair is non-decreasing by timestamp.
pub fn is_monotonic(points: &[TimePoint]) -> bool {
    points
        .windows(2)
        .all(|w| w[0].timestamp() <= w[1].timestamp())
}
