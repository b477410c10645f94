//! Health classification of structural findings.

use crate::domain::HealthStatus;

/// Issue score at or above which the topology is `FRAGILE`
pub const FRAGILE_THRESHOLD: u8 = 3;

const CYCLE_WEIGHT: u8 = 2;
const SINGLE_POINT_WEIGHT: u8 = 1;
const DEEP_CHAIN_WEIGHT: u8 = 1;

/// Classify the topology.
///
/// Cycles weigh 2, single points of failure 1, and a depth above
/// `max_chain_depth` 1. A score of 3 or more is `FRAGILE`; otherwise the
/// first present issue wins in the order cycles, single points, depth.
pub fn assess_health(
    cycles: &[Vec<String>],
    single_points: &[String],
    depth: usize,
    max_chain_depth: usize,
) -> HealthStatus {
    let has_cycles = !cycles.is_empty();
    let has_single_points = !single_points.is_empty();
    let too_deep = depth > max_chain_depth;

    let score = CYCLE_WEIGHT * u8::from(has_cycles)
        + SINGLE_POINT_WEIGHT * u8::from(has_single_points)
        + DEEP_CHAIN_WEIGHT * u8::from(too_deep);

    if score >= FRAGILE_THRESHOLD {
        HealthStatus::Fragile
    } else if has_cycles {
        HealthStatus::HasCycles
    } else if has_single_points {
        HealthStatus::SinglePoints
    } else if too_deep {
        HealthStatus::DeepChains
    } else {
        HealthStatus::Healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, false, 0, HealthStatus::Healthy)]
    #[case(true, false, 0, HealthStatus::HasCycles)]
    #[case(false, true, 0, HealthStatus::SinglePoints)]
    #[case(false, false, 9, HealthStatus::DeepChains)]
    #[case(true, true, 0, HealthStatus::Fragile)]
    #[case(true, false, 9, HealthStatus::Fragile)]
    #[case(false, true, 9, HealthStatus::SinglePoints)]
    #[case(true, true, 9, HealthStatus::Fragile)]
    fn classification(
        #[case] cycles: bool,
        #[case] single_points: bool,
        #[case] depth: usize,
        #[case] expected: HealthStatus,
    ) {
        let cycles = if cycles {
            vec![vec!["a".to_string(), "a".to_string()]]
        } else {
            Vec::new()
        };
        let single_points = if single_points {
            vec!["db".to_string()]
        } else {
            Vec::new()
        };

        assert_eq!(assess_health(&cycles, &single_points, depth, 5), expected);
    }

    #[test]
    fn depth_equal_to_limit_is_not_deep() {
        assert_eq!(assess_health(&[], &[], 5, 5), HealthStatus::Healthy);
        assert_eq!(assess_health(&[], &[], 6, 5), HealthStatus::DeepChains);
    }
}
