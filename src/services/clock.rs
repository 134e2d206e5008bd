// src/services/clock.rs
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Wall-clock timestamps that never repeat or go backwards within a process.
#[derive(Debug, Default)]
pub struct HealthClock {
    last_micros: AtomicI64,
}

impl HealthClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unix time in seconds with microsecond resolution.
    pub fn now(&self) -> f64 {
        let wall = Utc::now().timestamp_micros();
        let prev = self
            .last_micros
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(wall.max(last + 1))
            })
            .unwrap_or(wall);
        wall.max(prev + 1) as f64 / 1_000_000.0
    }
}
