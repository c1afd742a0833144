/// Port for the millisecond clock behind `Logger::time`/`time_end`.
pub trait ClockPort: Send + Sync {
    /// Current reading in milliseconds. Only differences between readings
    /// are meaningful.
    fn now(&self) -> f64;

    /// False when the platform has no high-resolution timer.
    fn is_available(&self) -> bool;
}
