pub mod platform;
pub mod records;
pub mod thresholds;
