//! Optimal checkpoint interval models.
//!
//! - Young: "A First Order Approximation to the Optimum Checkpoint
//!   Interval", J. Young, 1976.
//! - Daly: "A Higher Order Estimate of the Optimum Checkpoint Interval for
//!   Restart Dumps", J. Daly, 2004, equation 37.
//!
//! Both are pure functions of checkpoint cost and MTTI. A zero interval
//! yields a NaN or infinite overhead rather than a panic; check
//! [`IntervalEstimate::is_finite`] before using the result.

use crate::utils::error::ModelError;
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Analytical model used to pick the checkpoint interval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// First-order approximation
    Young,

    /// Higher-order estimate
    #[default]
    Daly,
}

impl Model {
    /// Display name used in the stats report
    pub fn title(&self) -> &'static str {
        match self {
            Model::Young => "Young",
            Model::Daly => "Daly",
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Young => write!(f, "young"),
            Model::Daly => write!(f, "daly"),
        }
    }
}

impl FromStr for Model {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "young" => Ok(Model::Young),
            "daly" => Ok(Model::Daly),
            _ => Err(ModelError::Unknown(s.to_string())),
        }
    }
}

/// Optimal interval and the overhead it implies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalEstimate {
    pub model: Model,

    /// Optimal time between checkpoints, in seconds
    #[serde(deserialize_with = "nan_if_null")]
    pub interval: f64,

    /// Checkpoint cost as a percentage of the interval
    #[serde(deserialize_with = "nan_if_null")]
    pub overhead_percent: f64,
}

/// JSON writes non-finite floats as `null`; read them back as NaN
fn nan_if_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

impl IntervalEstimate {
    /// False when the interval degenerated to zero (or the inputs were bad)
    pub fn is_finite(&self) -> bool {
        self.interval.is_finite() && self.overhead_percent.is_finite()
    }
}

/// Estimate the optimal checkpoint interval under `model`
///
/// **Public** - main entry point for interval estimation
///
/// # Arguments
/// * `model` - Young or Daly
/// * `checkpoint_cost` - Seconds per checkpoint, `>= 0`
/// * `mtti` - Mean time to interruption in seconds, `>= 0`
pub fn estimate(model: Model, checkpoint_cost: f64, mtti: f64) -> IntervalEstimate {
    let interval = match model {
        Model::Young => young_interval(checkpoint_cost, mtti),
        Model::Daly => daly_interval(checkpoint_cost, mtti),
    };
    let overhead_percent = checkpoint_cost * 100.0 / interval;

    debug!(
        "{} model: cost={} mtti={} -> interval={} overhead={}%",
        model.title(),
        checkpoint_cost,
        mtti,
        interval,
        overhead_percent
    );

    IntervalEstimate {
        model,
        interval,
        overhead_percent,
    }
}

/// `sqrt(2 * cost * M)`
pub fn young_interval(checkpoint_cost: f64, mtti: f64) -> f64 {
    (2.0 * checkpoint_cost * mtti).sqrt()
}

/// `sqrt(2 * cost * M) * (1 + sqrt(f)/3 + f/9) - cost` with `f = cost / 2M`,
/// or `M` once the cost reaches `2M`
pub fn daly_interval(checkpoint_cost: f64, mtti: f64) -> f64 {
    let m2 = 2.0 * mtti;
    if checkpoint_cost >= m2 {
        return mtti;
    }

    let f = checkpoint_cost / m2;
    (checkpoint_cost * m2).sqrt() * (1.0 + f.sqrt() / 3.0 + f / 9.0) - checkpoint_cost
}
