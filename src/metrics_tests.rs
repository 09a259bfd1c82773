#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::confusion::{pair_confusion, PairConfusion, PairCounting};
    use crate::evaluator::{ClusterEvaluator, EvaluatorConfig};
    use crate::{Error, Result};
    use proptest::prelude::*;

    // Manning et al., Introduction to Information Retrieval, fig. 16.4.
    const ASSIGNMENTS: [usize; 17] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2];
    const TRUTH: [usize; 17] = [0, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 2, 0, 0, 2, 2, 2];

    #[test]
    fn test_golden_confusion() -> Result<()> {
        for counting in [PairCounting::Exhaustive, PairCounting::Combinatorial] {
            let config = EvaluatorConfig::default().with_counting(counting);
            let eval = ClusterEvaluator::with_config(&ASSIGNMENTS, &TRUTH, config);
            assert_eq!(
                eval.confusion()?,
                PairConfusion {
                    true_pos: 20,
                    true_neg: 72,
                    false_pos: 24,
                    false_neg: 20,
                }
            );
        }
        Ok(())
    }

    #[test]
    fn test_golden_scores() -> Result<()> {
        let eval = ClusterEvaluator::new(&ASSIGNMENTS, &TRUTH);

        assert!((eval.rand_index()? - 92.0 / 136.0).abs() < 1e-9);
        assert!((eval.purity()? - 12.0 / 17.0).abs() < 1e-9);
        assert!((eval.f_measure(1.0)? - 10.0 / 21.0).abs() < 1e-9);
        assert!((eval.adjusted_rand_index()? - 0.242914979757085).abs() < 1e-9);
        assert!((eval.fowlkes_mallows()? - (5.0f64 / 22.0).sqrt()).abs() < 1e-9);

        let table = eval.contingency()?;
        assert_eq!(table.n_clusters(), 3);
        assert_eq!(table.n_classes(), 3);
        assert_eq!(table.majority_total(), 12);
        Ok(())
    }

    #[test]
    fn test_golden_report() -> Result<()> {
        let report = ClusterEvaluator::new(&ASSIGNMENTS, &TRUTH).report(1.0)?;
        assert_eq!(report.n_points, 17);
        assert_eq!(report.confusion.total(), 136);
        assert!((report.rand_index - 0.6764705882352942).abs() < 1e-9);
        assert!((report.purity - 0.7058823529411765).abs() < 1e-9);
        assert!((report.f_measure - 0.47619047619047616).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_split_everything_one_class() -> Result<()> {
        let eval = ClusterEvaluator::new(&[0, 1, 2, 3, 4], &[0, 0, 0, 0, 0]);
        let c = eval.confusion()?;
        assert_eq!((c.true_pos, c.true_neg), (0, 0));
        assert_eq!(c.total(), 10);
        assert_eq!(eval.rand_index()?, 0.0);
        for beta in [0.5, 1.0, 2.0, 10.0] {
            assert_eq!(eval.f_measure(beta)?, 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_single_point() {
        let eval = ClusterEvaluator::new(&[0], &[0]);
        assert!(matches!(
            eval.rand_index(),
            Err(Error::DivisionByZero { n_points: 1, .. })
        ));
    }

    fn labelings() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        (1usize..60).prop_flat_map(|n| {
            (
                proptest::collection::vec(0usize..6, n),
                proptest::collection::vec(0usize..6, n),
            )
        })
    }

    proptest! {
        #[test]
        fn pair_counts_sum_to_n_choose_2((a, t) in labelings()) {
            let c = pair_confusion(&a, &t, PairCounting::Exhaustive).unwrap();
            let n = a.len() as u64;
            prop_assert_eq!(c.total(), n * (n - 1) / 2);
        }

        #[test]
        fn counting_strategies_agree((a, t) in labelings()) {
            prop_assert_eq!(
                pair_confusion(&a, &t, PairCounting::Exhaustive).unwrap(),
                pair_confusion(&a, &t, PairCounting::Combinatorial).unwrap()
            );
        }

        #[test]
        fn scores_stay_in_unit_interval((a, t) in labelings(), beta in 0.01f64..10.0) {
            let eval = ClusterEvaluator::new(&a, &t);
            let p = eval.purity().unwrap();
            prop_assert!((0.0..=1.0).contains(&p));
            let f = eval.f_measure(beta).unwrap();
            prop_assert!((0.0..=1.0 + 1e-12).contains(&f));
            let fm = eval.fowlkes_mallows().unwrap();
            prop_assert!((0.0..=1.0 + 1e-12).contains(&fm));
            if a.len() >= 2 {
                let ri = eval.rand_index().unwrap();
                prop_assert!((0.0..=1.0).contains(&ri));
            }
        }

        #[test]
        fn identical_labelings_score_one(a in proptest::collection::vec(0usize..6, 2..60)) {
            let eval = ClusterEvaluator::new(&a, &a);
            prop_assert_eq!(eval.rand_index().unwrap(), 1.0);
            prop_assert_eq!(eval.purity().unwrap(), 1.0);
            // all singletons: no true positives, so F is 0 by convention
            if eval.confusion().unwrap().true_pos > 0 {
                prop_assert!((eval.f_measure(1.0).unwrap() - 1.0).abs() < 1e-12);
            }
        }

        #[test]
        fn memoized_matches_fresh((a, t) in labelings()) {
            let cached = ClusterEvaluator::new(&a, &t);
            let fresh = ClusterEvaluator::with_config(
                &a,
                &t,
                EvaluatorConfig::default().with_memoize(false),
            );
            prop_assert_eq!(cached.purity().unwrap(), fresh.purity().unwrap());
            prop_assert_eq!(cached.confusion().unwrap(), fresh.confusion().unwrap());
            prop_assert_eq!(cached.confusion().unwrap(), fresh.confusion().unwrap());
        }
    }
}
