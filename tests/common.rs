use magistri::{TimePoint, TimeSeries, Timestamp};
use rand::Rng;

/// Build a series of `num_points` samples with strictly increasing
/// timestamps (random step) and random values.
pub fn create_series(name: &str, num_points: usize) -> TimeSeries {
    init_logger();
    let mut rng = rand::thread_rng();
    let mut timestamp: Timestamp = 1_500_000_000_000;
    let mut points = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        timestamp += rng.gen_range(1, 1000);
        points.push(TimePoint::new(timestamp, rng.gen_range(0.0, 100.0)));
    }
    TimeSeries::from_data(name, points).unwrap()
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
