//! # Concurrent Estimation Tests
//!
//! `estimate` holds no shared mutable state, so one estimator shared across
//! worker threads must give the same answers as sequential calls.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use qre_01_application_registry::{DomainKind, StaticRegistry};
    use qre_02_resource_estimator::{ParameterSet, ResourceEstimator, ResourceEstimatorApi};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rayon::prelude::*;

    fn random_inputs(count: usize) -> Vec<(DomainKind, ParameterSet)> {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        (0..count)
            .map(|_| {
                let kind = DomainKind::ALL[rng.gen_range(0..DomainKind::ALL.len())];
                let params = ParameterSet::default()
                    .with_system_size(rng.gen_range(100.0..2000.0))
                    .with_precision(rng.gen_range(0.00001..0.01))
                    .with_physical_error_rate(rng.gen_range(0.0001..0.01))
                    .with_hopping_parameter(rng.gen_range(0.1..10.0))
                    .with_interaction_strength(rng.gen_range(1.0..20.0));
                (kind, params)
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let estimator = Arc::new(ResourceEstimator::new(Arc::new(StaticRegistry::new())));
        let inputs = random_inputs(2_000);

        let sequential: Vec<_> = inputs
            .iter()
            .map(|(kind, p)| estimator.estimate_kind(*kind, p).unwrap())
            .collect();

        let parallel: Vec<_> = inputs
            .par_iter()
            .map(|(kind, p)| estimator.estimate(kind.id(), p).unwrap())
            .collect();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_cloned_estimators_agree() {
        let estimator = ResourceEstimator::<StaticRegistry>::default();
        let inputs = random_inputs(200);

        let results: Vec<_> = inputs
            .par_iter()
            .map_with(estimator.clone(), |est, (kind, p)| {
                est.estimate_kind(*kind, p).unwrap()
            })
            .collect();

        for ((kind, p), report) in inputs.iter().zip(results) {
            assert_eq!(estimator.estimate_kind(*kind, p).unwrap(), report);
        }
    }
}
