pub mod time_point;
pub mod time_series;
pub mod utils;

pub use time_point::{TimePoint, Timestamp, Value};
pub use time_series::TimeSeries;
