use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::products;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsData {
    pub total_products: usize,
    pub active_sessions: u32,
    pub avg_response_time: f64,
    pub error_rate: f64,
}

/// Produces synthetic storefront metrics. Nothing here is measured.
#[derive(Debug, Default, Clone)]
pub struct MetricsManager;

impl MetricsManager {
    pub fn new() -> Self {
        Self
    }

    pub fn get_metrics(&self) -> MetricsData {
        self.sample(&mut rand::thread_rng())
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> MetricsData {
        MetricsData {
            total_products: products().len(),
            active_sessions: rng.gen_range(10..=100),
            avg_response_time: rng.gen_range(0.1..0.5),
            error_rate: rng.gen_range(0.01..0.05),
        }
    }
}
