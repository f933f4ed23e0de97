use scr_overhead::model::{daly_interval, estimate, young_interval, Model};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_young_interval_and_overhead() {
    let est = estimate(Model::Young, 4.0, 50.0);

    assert_eq!(est.model, Model::Young);
    assert_close(est.interval, 20.0);
    assert_close(est.overhead_percent, 20.0);
}

#[test]
fn test_daly_interval_and_overhead() {
    let est = estimate(Model::Daly, 4.0, 50.0);

    assert_eq!(est.model, Model::Daly);
    assert_close(est.interval, 17.422_222_222);
    assert_close(est.overhead_percent, 22.959_183_673);
}

#[test]
fn test_daly_fallback_branch() {
    assert_eq!(daly_interval(120.0, 50.0), 50.0);
    // Boundary: cost exactly 2M also falls back
    assert_eq!(daly_interval(100.0, 50.0), 50.0);
}

#[test]
fn test_daly_below_young() {
    // Daly's correction shortens the interval for small cost / MTTI
    for (cost, mtti) in [(1.0, 3600.0), (30.0, 86_400.0), (4.0, 50.0)] {
        assert!(daly_interval(cost, mtti) < young_interval(cost, mtti));
    }
}

#[test]
fn test_degenerate_inputs_are_flagged() {
    for model in [Model::Young, Model::Daly] {
        let est = estimate(model, 0.0, 0.0);
        assert!(!est.is_finite(), "{model} should flag a zero interval");
    }

    assert!(estimate(Model::Daly, 4.0, 50.0).is_finite());
}
