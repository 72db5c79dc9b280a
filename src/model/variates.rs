// src/model/variates.rs

use crate::error::Result;
use crate::model::inputs::PolicyInputs;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

// ChaCha stream ids. Never renumber: changing one changes every seeded result.
const DEMAND_STREAM: u64 = 1;
const LEAD_TIME_STREAM: u64 = 2;

fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// Per-run source of daily demand and per-order lead-time draws.
///
/// Demand and lead time come from two independent streams derived from the
/// same seed. The n-th demand draw depends only on (seed, n), so two runs
/// with the same seed see the same demand path whatever their policy does.
/// Lead-time draws are handed out in order placement order and so diverge
/// once two policies order on different days.
#[derive(Debug, Clone)]
pub struct RandomVariateSource {
    demand_rng: ChaCha8Rng,
    lead_time_rng: ChaCha8Rng,
    demand: Normal<f64>,
    lead_time: Normal<f64>,
}

impl RandomVariateSource {
    pub fn new(inputs: &PolicyInputs, seed: u64) -> Result<Self> {
        Ok(Self {
            demand_rng: stream_rng(seed, DEMAND_STREAM),
            lead_time_rng: stream_rng(seed, LEAD_TIME_STREAM),
            demand: Normal::new(inputs.demand_mean, inputs.demand_std_dev)?,
            lead_time: Normal::new(inputs.lead_time_mean, inputs.lead_time_std_dev)?,
        })
    }

    /// Next day's demand: rounded to the nearest unit, never negative.
    pub fn next_demand(&mut self) -> u32 {
        let val = self.demand.sample(&mut self.demand_rng).round();
        if val < 0.0 {
            0
        } else {
            val as u32
        }
    }

    /// Next order's lead time in whole days, at least one.
    pub fn next_lead_time(&mut self) -> u32 {
        let val = self.lead_time.sample(&mut self.lead_time_rng).round();
        if val < 1.0 {
            1
        } else {
            val as u32
        }
    }
}
