use log::debug;

use crate::common::time_point::{TimePoint, Timestamp, Value};
use crate::common::utils::is_monotonic;
use crate::{MagistriErr, Result};

/// An ordered, named collection of time points.
///
/// Points are kept in non-decreasing timestamp order; the constructors and
/// `append` reject anything that would break that, so every read below can
/// rely on it. A `&TimeSeries` is a consistent snapshot: all mutation goes
/// through `&mut self`.
#[derive(Clone, Debug)]
pub struct TimeSeries {
    name: String,
    time_points: Vec<TimePoint>,
}

impl TimeSeries {
    /// Create an empty series. The name must be non-empty.
    pub fn new<S: Into<String>>(name: S) -> Result<TimeSeries> {
        TimeSeries::from_data(name, Vec::new())
    }

    /// Create a series from already ordered points.
    ///
    /// Fails with `OutOfOrder` if the input is not sorted by timestamp;
    /// duplicates at the same instant are accepted.
    pub fn from_data<S: Into<String>>(name: S, time_points: Vec<TimePoint>) -> Result<TimeSeries> {
        let name = name.into();
        if name.is_empty() {
            return Err(MagistriErr::EmptyName);
        }
        if !is_monotonic(&time_points) {
            let (prev, next) = first_inversion(&time_points);
            return Err(MagistriErr::OutOfOrder(next, prev));
        }
        debug!("series {} created with {} points", name, time_points.len());
        Ok(TimeSeries { name, time_points })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> usize {
        self.time_points.len()
    }

    /// Timestamp of the earliest point.
    pub fn start(&self) -> Result<Timestamp> {
        self.time_points
            .first()
            .map(TimePoint::timestamp)
            .ok_or(MagistriErr::EmptySeries)
    }

    /// Timestamp of the latest point.
    pub fn end(&self) -> Result<Timestamp> {
        self.time_points
            .last()
            .map(TimePoint::timestamp)
            .ok_or(MagistriErr::EmptySeries)
    }

    /// Snapshot copy of all points in ascending timestamp order.
    ///
    /// The returned vec is independent of the series; mutating it has no
    /// effect on later reads.
    pub fn sample_data(&self) -> Vec<TimePoint> {
        self.time_points.clone()
    }

    /// Point at zero-based ordinal `index`.
    pub fn point_at_index(&self, index: usize) -> Result<TimePoint> {
        self.time_points
            .get(index)
            .copied()
            .ok_or_else(|| MagistriErr::IndexOutOfRange(index, self.count()))
    }

    /// Point whose timestamp equals `timestamp` exactly.
    ///
    /// Binary search over the ordered points; when several points share the
    /// timestamp, which one comes back is unspecified. No nearest-match
    /// fallback: a miss is `NotFound`.
    pub fn point_at_time(&self, timestamp: Timestamp) -> Result<TimePoint> {
        self.time_points
            .binary_search_by_key(&timestamp, TimePoint::timestamp)
            .map(|idx| self.time_points[idx])
            .map_err(|_| MagistriErr::NotFound(timestamp))
    }

    /// All points with `start <= timestamp <= end`, ascending.
    pub fn range(&self, start: Timestamp, end: Timestamp) -> Vec<TimePoint> {
        if start > end {
            return Vec::new();
        }
        let lo = self
            .time_points
            .partition_point(|tp| tp.timestamp() < start);
        let hi = self.time_points.partition_point(|tp| tp.timestamp() <= end);
        self.time_points[lo..hi].to_vec()
    }

    /// Append one sample. The timestamp must not precede the current end;
    /// equal timestamps are accepted.
    pub fn append(&mut self, timestamp: Timestamp, value: Value) -> Result<()> {
        if let Some(last) = self.time_points.last() {
            if timestamp < last.timestamp() {
                return Err(MagistriErr::OutOfOrder(timestamp, last.timestamp()));
            }
        }
        self.time_points.push(TimePoint::new(timestamp, value));
        Ok(())
    }
}

// Only called on input that failed the monotonic check.
fn first_inversion(points: &[TimePoint]) -> (Timestamp, Timestamp) {
    points
        .windows(2)
        .find(|w| w[0].timestamp() > w[1].timestamp())
        .map(|w| (w[0].timestamp(), w[1].timestamp()))
        .unwrap_or((0, 0))
}

#[cfg(test)]
mod test {
    use crate::common::time_point::TimePoint;
    use crate::common::time_series::TimeSeries;
    use crate::MagistriErr;

    #[test]
    fn create_time_series() {
        let time_series = TimeSeries::new("cpu.load").unwrap();
        assert_eq!(time_series.name(), "cpu.load");
        assert_eq!(time_series.count(), 0);
    }

    #[test]
    fn reject_empty_name() {
        assert_eq!(TimeSeries::new("").unwrap_err(), MagistriErr::EmptyName);
    }

    #[test]
    fn reject_unsorted_data() {
        let points = vec![TimePoint::new(200, 1.0), TimePoint::new(100, 2.0)];
        assert_eq!(
            TimeSeries::from_data("cpu.load", points).unwrap_err(),
            MagistriErr::OutOfOrder(100, 200)
        );
    }

    #[test]
    fn append_keeps_order() {
        let mut time_series = TimeSeries::new("cpu.load").unwrap();
        time_series.append(100, 1.0).unwrap();
        time_series.append(100, 2.0).unwrap();
        time_series.append(150, 3.0).unwrap();
        assert_eq!(time_series.count(), 3);
        assert_eq!(
            time_series.append(120, 4.0).unwrap_err(),
            MagistriErr::OutOfOrder(120, 150)
        );
        assert_eq!(time_series.count(), 3);
    }
}
