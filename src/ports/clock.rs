/// Port for accessing time and performance measurement
pub trait ClockPort {
    /// Returns the current timestamp in milliseconds
    fn now(&self) -> f64;
}
