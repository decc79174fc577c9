use diffusion_core::errors::{DiffusionError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("len", "1")
        .with_context("reason", "example")
}

#[test]
fn density_error_surface() {
    let err = DiffusionError::Density(sample_info("density-too-short", "too few sites"));
    assert_eq!(err.info().code, "density-too-short");
    assert!(err.info().context.contains_key("len"));
}

#[test]
fn parameter_error_surface() {
    let err = DiffusionError::Parameter(sample_info("negative-temperature", "below zero"));
    assert_eq!(err.info().code, "negative-temperature");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn unsupported_error_surface() {
    let err = DiffusionError::Unsupported(sample_info("zero-temperature", "greedy descent"));
    assert_eq!(err.info().code, "zero-temperature");
}

#[test]
fn serde_error_surface() {
    let err = DiffusionError::Serde(sample_info("config-parse", "bad yaml"));
    assert_eq!(err.info().code, "config-parse");
}

#[test]
fn display_includes_context_and_hint() {
    let err = DiffusionError::Parameter(
        ErrorInfo::new("negative-temperature", "temperature must be positive")
            .with_context("temperature", "-1")
            .with_hint("use a strictly positive value"),
    );
    let rendered = err.to_string();
    assert!(rendered.contains("negative-temperature"));
    assert!(rendered.contains("temperature=-1"));
    assert!(rendered.contains("hint"));
}

#[test]
fn errors_round_trip_through_json() {
    let err = DiffusionError::Density(sample_info("density-empty", "no particles"));
    let json = serde_json::to_string(&err).unwrap();
    let restored: DiffusionError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, restored);
}
