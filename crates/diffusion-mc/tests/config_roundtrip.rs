use diffusion_core::DiffusionError;
use diffusion_mc::RunConfig;

#[test]
fn empty_mapping_yields_defaults() {
    let config = RunConfig::from_yaml_str("{}").unwrap();
    assert_eq!(config.temperature, 1.0);
    assert_eq!(config.max_iterations, 1000);
    assert_eq!(config.coefficient, 1.0);
    assert_eq!(config.trace.interval, 0);
    assert!(config.output.run_directory.is_none());
    config.validate().unwrap();
}

#[test]
fn partial_yaml_overrides_selected_fields() {
    let text = "temperature: 0.25\nmax_iterations: 32\nseed_policy:\n  master_seed: 99\n";
    let config = RunConfig::from_yaml_str(text).unwrap();
    assert_eq!(config.temperature, 0.25);
    assert_eq!(config.max_iterations, 32);
    assert_eq!(config.seed_policy.master_seed, 99);
    // Untouched sections keep their defaults.
    assert_eq!(config.coefficient, 1.0);
}

#[test]
fn malformed_yaml_is_a_serde_error() {
    let err = RunConfig::from_yaml_str("temperature: [not a number").unwrap_err();
    match err {
        DiffusionError::Serde(info) => assert_eq!(info.code, "config-parse"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_config_file_reports_its_path() {
    let err = RunConfig::from_yaml_file(std::path::Path::new("/nonexistent/run.yaml")).unwrap_err();
    match err {
        DiffusionError::Serde(info) => {
            assert_eq!(info.code, "config-read");
            assert!(info.context.contains_key("path"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validate_applies_the_domain_checks() {
    let mut config = RunConfig::default();

    config.temperature = 0.0;
    assert!(matches!(
        config.validate(),
        Err(DiffusionError::Unsupported(_))
    ));

    config.temperature = -2.0;
    assert!(matches!(config.validate(), Err(DiffusionError::Parameter(_))));

    config.temperature = 1.0;
    config.coefficient = -0.5;
    assert!(matches!(config.validate(), Err(DiffusionError::Parameter(_))));
}

#[test]
fn config_round_trips_through_yaml() {
    let config = RunConfig {
        temperature: 2.5,
        max_iterations: 10,
        ..RunConfig::default()
    };
    let text = serde_yaml::to_string(&config).unwrap();
    let restored = RunConfig::from_yaml_str(&text).unwrap();
    assert_eq!(restored.temperature, 2.5);
    assert_eq!(restored.max_iterations, 10);
}
