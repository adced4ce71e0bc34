use failure::Fail;

use crate::common::time_point::Timestamp;

#[derive(Debug, Fail, PartialEq)]
pub enum MagistriErr {
    /// Asked for a bound (start or end) of a series that holds no points.
    #[fail(display = "series has no points")]
    EmptySeries,
    /// Ordinal lookup outside [0, count).
    #[fail(display = "index {} out of range, series holds {} points", _0, _1)]
    IndexOutOfRange(usize, usize),
    /// No point with exactly this timestamp.
    #[fail(display = "no point at timestamp {}", _0)]
    NotFound(Timestamp),
    /// Append or bulk construction would break the non-decreasing order.
    #[fail(display = "timestamp {} is earlier than series end {}", _0, _1)]
    OutOfOrder(Timestamp, Timestamp),
    #[fail(display = "series name must not be empty")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, MagistriErr>;
