//! Error paths, configuration and engines through the high-level API

mod common;

use common::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use xicor_core::sequential;
use xicor_correlation::{
    xi_correlation, xi_significance, xi_statistic, AsymptoticTest, CancellationToken, Error,
    Method, PermutationTest, SignificanceEstimator, XiConfig, XiCorrelation,
};

#[test]
fn test_size_mismatch_everywhere() {
    let x = [1.0, 2.0, 3.0];
    let y = [5.0, 6.0];
    let expected = Error::SizeMismatch { x_len: 3, y_len: 2 };
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    assert_eq!(XiCorrelation::new(&x, &y, XiConfig::default()).unwrap_err(), expected);
    assert_eq!(xi_correlation(&x, &y, &mut rng).unwrap_err(), expected);
    assert_eq!(
        xi_significance(&x, &y, &XiConfig::default(), &mut rng).unwrap_err(),
        expected
    );
    assert_eq!(expected.to_string(), "Size mismatch: x has 3 values, y has 2");
}

#[test]
fn test_invalid_method_name() {
    let err = XiConfig::default().with_method_name("invalid method").unwrap_err();
    assert_eq!(err, Error::InvalidMethod("invalid method".to_string()));

    let config = XiConfig::default().with_method_name("permutation").unwrap();
    assert_eq!(config.method, Method::Permutation);
}

#[test]
fn test_pvalue_not_requested() {
    let x = [1.0, 2.0, 3.0];
    let config = XiConfig::default().without_pvalue();

    let err = xi_significance(&x, &x, &config, &mut ChaCha8Rng::seed_from_u64(0)).unwrap_err();
    assert_eq!(err, Error::PvalueNotRequested);
}

#[test]
fn test_constant_y_is_degenerate() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [2.0; 4];
    let xi = XiCorrelation::new(&x, &y, XiConfig::default().with_seed(1)).unwrap();

    assert!(matches!(xi.correlation(), Err(Error::DegenerateInput(_))));
    assert!(matches!(xi.significance(), Err(Error::DegenerateInput(_))));
}

#[test]
fn test_asymptotic_reference_values() {
    let (x, y) = linear();
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    let without_ties = xi_significance(&x, &y, &XiConfig::default().without_ties(), &mut rng).unwrap();
    assert_abs_diff_eq!(without_ties.xi, 0.7272727, epsilon = EPSILON);
    assert_abs_diff_eq!(without_ties.p_value, 0.000138257, epsilon = EPSILON);

    let tie_aware = xi_significance(&x, &y, &XiConfig::default(), &mut rng).unwrap();
    assert_abs_diff_eq!(tie_aware.p_value, 0.0001879616, epsilon = EPSILON);
}

#[test]
fn test_config_from_json() {
    let config: XiConfig =
        serde_json::from_str(r#"{"method": "permutation", "n_trials": 1000, "seed": 21}"#).unwrap();
    let (x, y) = linear();

    let result = XiCorrelation::new(&x, &y, config).unwrap().significance().unwrap();
    assert_eq!(result.method, Method::Permutation);
    assert_eq!(result.p_value, 0.0);
}

#[test]
fn test_seed_makes_permutation_reproducible() {
    let config = XiConfig::default().with_permutation_pvalue(500).with_seed(99);
    let xi = XiCorrelation::new(&X3, &Y3, config).unwrap();

    assert_eq!(xi.significance().unwrap(), xi.significance().unwrap());
}

#[test]
fn test_expired_deadline_cancels() {
    let (x, y) = linear();
    let config = XiConfig::default().with_permutation_pvalue(1000);
    let xi = XiCorrelation::new(&x, &y, config).unwrap();

    let token = CancellationToken::new().with_timeout(Duration::ZERO);
    std::thread::sleep(Duration::from_millis(1));

    let err = xi
        .significance_with_cancel(&mut ChaCha8Rng::seed_from_u64(0), token)
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled { requested: 1000, .. }));
}

#[test]
fn test_estimators_compose_with_context() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let context = xi_statistic(&X1, &Y1, &mut rng).unwrap();

    let asymptotic = AsymptoticTest::tie_aware().p_value(&context, &mut rng).unwrap();
    assert_abs_diff_eq!(asymptotic, 0.07841556, epsilon = EPSILON);

    let permutation = PermutationTest::new(sequential())
        .with_trials(200)
        .p_value(&context, &mut rng)
        .unwrap();
    assert!((0.0..=1.0).contains(&permutation));
}

#[cfg(feature = "parallel")]
#[test]
fn test_engines_agree() {
    use xicor_core::parallel;

    let config = XiConfig::default().with_permutation_pvalue(1000);
    let xi = XiCorrelation::new(&X1, &Y1, config).unwrap();

    let a = xi
        .significance_with_engine(sequential(), CancellationToken::new(), &mut ChaCha8Rng::seed_from_u64(8))
        .unwrap();
    let b = xi
        .significance_with_engine(parallel(), CancellationToken::new(), &mut ChaCha8Rng::seed_from_u64(8))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_tracing_events_do_not_disturb_results() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("xicor_correlation=trace"))
        .with_test_writer()
        .try_init();

    let config = XiConfig::default().with_permutation_pvalue(50).with_seed(5);
    let result = XiCorrelation::new(&X1, &Y1, config).unwrap().significance().unwrap();
    assert_abs_diff_eq!(result.xi, 0.275, epsilon = EPSILON);
}
