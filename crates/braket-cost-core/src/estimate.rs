use serde::{Deserialize, Serialize};

use crate::error::{CostError, Result};

/// Unit prices for one device: per task, and per shot where the vendor
/// bills shots at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePair {
    pub task_price: f64,
    pub shot_price: Option<f64>,
}

/// Result of a cost estimate. `total_usd` carries full floating precision;
/// display rounding is up to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEstimate {
    pub task_price: f64,
    pub shot_price: Option<f64>,
    pub total_usd: f64,
}

/// Cost of running `tasks` tasks at `shots_per_task` shots each.
///
/// `total = tasks * task_price + tasks * shots_per_task * shot_price`,
/// with an absent shot price contributing nothing. Zero counts are valid
/// and yield a zero total; negative counts are rejected.
pub fn estimate(prices: &PricePair, tasks: i64, shots_per_task: i64) -> Result<CostEstimate> {
    if tasks < 0 {
        return Err(CostError::InvalidArgument(format!(
            "task count must be non-negative, got {tasks}"
        )));
    }
    if shots_per_task < 0 {
        return Err(CostError::InvalidArgument(format!(
            "shots per task must be non-negative, got {shots_per_task}"
        )));
    }

    let tasks_f = tasks as f64;
    let shot_price = prices.shot_price.unwrap_or(0.0);
    let total_usd = tasks_f * prices.task_price + tasks_f * shots_per_task as f64 * shot_price;

    Ok(CostEstimate {
        task_price: prices.task_price,
        shot_price: prices.shot_price,
        total_usd,
    })
}
