use braket_cost_core::catalog::PriceCatalog;
use braket_cost_core::device::resolve;
use braket_cost_core::error::CostError;
use braket_cost_core::estimate::estimate;

fn full_catalog() -> PriceCatalog {
    let mut c = PriceCatalog::new();
    c.insert("Global-Simulators-Task", 0.075);
    c.insert("USE1-Task", 0.30);
    c.insert("USE1-Task-Shot", 0.01);
    c.insert("USW1-Task", 0.30);
    c.insert("USW1-Task-Shot", 0.00035);
    c.insert("USW2-Task", 0.30);
    c.insert("USW2-Task-Shot", 0.00019);
    c
}

#[test]
fn resolve_dwave_prices() {
    let pair = resolve("arn:aws:braket:::device/qpu/d-wave/Advantage_system4", &full_catalog())
        .expect("d-wave should resolve");
    assert_eq!(pair.task_price, 0.30);
    assert_eq!(pair.shot_price, Some(0.00019));
}

#[test]
fn resolve_then_estimate_dwave() {
    let pair = resolve("arn:aws:braket:::device/qpu/d-wave/DW_2000Q_6", &full_catalog()).unwrap();
    let est = estimate(&pair, 10, 10_000).unwrap();
    assert_eq!(est.total_usd, 22.0);
}

#[test]
fn resolve_simulator_has_no_shot_price() {
    let pair = resolve(
        "arn:aws:braket:::device/quantum-simulator/amazon/sv1",
        &full_catalog(),
    )
    .expect("simulator should resolve");
    assert_eq!(pair.task_price, 0.075);
    assert!(pair.shot_price.is_none());

    // Shot count must not affect a task-only billing.
    let with_shots = estimate(&pair, 3, 100_000).unwrap();
    let without = estimate(&pair, 3, 0).unwrap();
    assert_eq!(with_shots.total_usd, without.total_usd);
    assert!((with_shots.total_usd - 0.225).abs() < 1e-12);
}

#[test]
fn resolve_unknown_device_fails() {
    let err = resolve("arn:aws:braket:::device/qpu/pasqal/Fresnel", &full_catalog()).unwrap_err();
    assert!(matches!(err, CostError::UnknownDevice(id) if id.contains("pasqal")));
}

#[test]
fn resolve_ambiguous_device_fails() {
    let err = resolve("qpu/rigetti/d-wave-hybrid", &full_catalog()).unwrap_err();
    assert!(matches!(err, CostError::AmbiguousDevice(_)));
}

#[test]
fn missing_task_key_is_an_error_not_zero() {
    let catalog = PriceCatalog::new();
    let err = resolve("arn:aws:braket:::device/qpu/ionq/ionQdevice", &catalog).unwrap_err();
    assert!(matches!(err, CostError::MissingPriceData(key) if key == "USE1-Task"));
}

#[test]
fn missing_shot_key_is_an_error_not_zero() {
    let mut catalog = PriceCatalog::new();
    catalog.insert("USE1-Task", 0.30);
    let err = resolve("arn:aws:braket:::device/qpu/ionq/ionQdevice", &catalog).unwrap_err();
    assert!(matches!(err, CostError::MissingPriceData(key) if key == "USE1-Task-Shot"));
}

#[test]
fn catalog_reuse_across_resolutions() {
    // Fetch-once, resolve-many: the same catalog serves every device.
    let catalog = full_catalog();
    let ionq = resolve("device/qpu/ionq/Aria-1", &catalog).unwrap();
    let rigetti = resolve("device/qpu/rigetti/Aspen-M-3", &catalog).unwrap();
    assert_eq!(ionq.shot_price, Some(0.01));
    assert_eq!(rigetti.shot_price, Some(0.00035));
}
