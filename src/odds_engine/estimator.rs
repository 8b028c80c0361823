//! Request-style entry points for callers that do not manage an RNG.
//!
//! A request carries the known cards, the estimator parameters and an
//! optional seed. `Some(seed)` makes the run fully reproducible; `None`
//! seeds from OS entropy.

use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::odds_engine::{
    bluff::{bluff_report, BluffReport},
    config::{BluffConfig, EquityConfig},
    equity::{estimate_equity, EquityResult},
    error::Result,
    models::Card,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquityRequest {
    pub hole: Vec<Card>,
    #[serde(default)]
    pub community: Vec<Card>,
    pub opponents: usize,
    #[serde(default)]
    pub config: EquityConfig,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl EquityRequest {
    /// Request with default parameters and an entropy seed.
    pub fn new(hole: Vec<Card>, community: Vec<Card>, opponents: usize) -> Self {
        EquityRequest {
            hole,
            community,
            opponents,
            config: EquityConfig::default(),
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BluffRequest {
    pub hole: Vec<Card>,
    #[serde(default)]
    pub community: Vec<Card>,
    #[serde(default)]
    pub config: BluffConfig,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl BluffRequest {
    pub fn new(hole: Vec<Card>, community: Vec<Card>) -> Self {
        BluffRequest { hole, community, config: BluffConfig::default(), rng_seed: None }
    }
}

pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Run the equity estimator described by `request`.
pub fn run_equity(request: &EquityRequest) -> Result<EquityResult> {
    let mut rng = make_rng(request.rng_seed);
    estimate_equity(
        &mut rng,
        &request.hole,
        &request.community,
        request.opponents,
        &request.config.budget(),
    )
}

/// Run the bluff estimator described by `request`.
pub fn run_bluff(request: &BluffRequest) -> Result<BluffReport> {
    let mut rng = make_rng(request.rng_seed);
    bluff_report(
        &mut rng,
        &request.hole,
        &request.community,
        &request.config,
        &request.config.budget(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds_engine::models::parse_card_list;

    #[test]
    fn seeded_requests_repeat() {
        let mut req = EquityRequest::new(
            parse_card_list("Jc Jd").unwrap(),
            parse_card_list("2h 8s Kd").unwrap(),
            2,
        );
        req.config.trials = 150;
        req.rng_seed = Some(42);
        assert_eq!(run_equity(&req).unwrap(), run_equity(&req).unwrap());
    }

    #[test]
    fn entropy_request_is_valid() {
        let req = BluffRequest::new(parse_card_list("Ah 2c").unwrap(), vec![]);
        let report = run_bluff(&req).unwrap();
        assert_eq!(report.trials, BluffConfig::DEFAULT_TRIALS);
    }

    #[test]
    fn requests_deserialize_from_json() {
        let req: EquityRequest = serde_json::from_str(
            r#"{ "hole": ["Ah", "Kh"], "community": ["Qh", "Jh", "Th"], "opponents": 2,
                 "config": { "trials": 20 }, "rng_seed": 1 }"#,
        ).unwrap();
        assert_eq!(req.config.trials, 20);
        let result = run_equity(&req).unwrap();
        assert_eq!(result.trials, 20);
        assert_eq!(result.ratio, 1.0);

        let bad = serde_json::from_str::<EquityRequest>(r#"{ "hole": ["Ah", "Zz"], "opponents": 1 }"#);
        assert!(bad.is_err());
    }
}
