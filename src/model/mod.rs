//! Checkpoint interval models.

pub mod interval;

pub use interval::{daly_interval, estimate, young_interval, IntervalEstimate, Model};
