use pl_phase::{
    CalibrationPoint, CalibrationSet, ModelError, Phase, PhaseDiagram, PhaseError,
    load_calibration_yaml,
};

fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn load_default_calibration_file() {
    let text = CalibrationSet::default().to_yaml_string().unwrap();
    let path = write_temp("pl_phase_calibration_default.yaml", &text);

    let loaded = load_calibration_yaml(&path).unwrap();
    assert_eq!(loaded, PhaseDiagram::default_calibration().unwrap());
}

#[test]
fn load_custom_calibration_file() {
    let set = CalibrationSet {
        liquid: [
            CalibrationPoint::new(0.001, 0.0),
            CalibrationPoint::new(0.002, 1.0),
        ],
        vapor: [
            CalibrationPoint::new(2.0, 0.0),
            CalibrationPoint::new(1.0, 1.0),
        ],
    };
    let path = write_temp(
        "pl_phase_calibration_custom.yaml",
        &set.to_yaml_string().unwrap(),
    );

    let diagram = load_calibration_yaml(&path).unwrap();
    let pair = diagram.volumes_at(0.5).unwrap();
    assert!((pair.specific_volume_liquid - 0.0015).abs() < 1e-12);
    assert!((pair.specific_volume_vapor - 1.5).abs() < 1e-12);
}

#[test]
fn reject_file_with_coincident_x() {
    let yaml = "\
liquid:
  - { x: 0.0035, y: 0.05 }
  - { x: 0.0035, y: 10.0 }
vapor:
  - { x: 30.0, y: 0.05 }
  - { x: 0.0035, y: 10.0 }
";
    let path = write_temp("pl_phase_calibration_coincident.yaml", yaml);

    let err = load_calibration_yaml(&path).unwrap_err();
    let (phase, source) = err.model_error().unwrap();
    assert_eq!(phase, Phase::Liquid);
    assert_eq!(source, &ModelError::CoincidentX { x: 0.0035 });
}

#[test]
fn missing_file_reports_path() {
    let path = std::env::temp_dir().join("pl_phase_calibration_does_not_exist.yaml");
    let err = load_calibration_yaml(&path).unwrap_err();
    match err {
        PhaseError::CalibrationRead { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_yaml_is_rejected() {
    let path = write_temp("pl_phase_calibration_malformed.yaml", "liquid: [1, 2");
    assert!(matches!(
        load_calibration_yaml(&path),
        Err(PhaseError::Yaml(_))
    ));
}
