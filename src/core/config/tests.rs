use super::*;
use crate::core::coordinate::Coordinate;
use crate::lexicon::LexiconOverride;

fn expect_validation_error<T: std::fmt::Debug>(result: Result<T>) -> HarmonizerError {
    result.expect_err("expected validation failure")
}

#[test]
fn default_config_validates_successfully() {
    let config = HarmonizerConfig::default();
    config.validate().expect("default config");
    assert_eq!(config.threshold, 0.5);
    assert!(config.analysis.include_docs);
    assert_eq!(config.naming.top_n, 3);
    assert!(config.lexicon.overrides.is_empty());
}

#[test]
fn empty_yaml_is_the_default_config() {
    assert_eq!(
        HarmonizerConfig::from_yaml_str("").unwrap(),
        HarmonizerConfig::default()
    );
    assert_eq!(
        HarmonizerConfig::from_yaml_str("threshold: 0.8\n").unwrap().naming,
        NamingConfig::default()
    );
}

#[test]
fn partial_sections_fill_in_defaults() {
    let yaml = r#"
threshold: 0.7
analysis:
  parallel: false
naming:
  top_n: 5
  extra_verbs:
    - verb: ship
      coordinates: [0.3, 0.0, 0.7, 0.0]
lexicon:
  overrides:
    - token: render
      coordinates: [0.1, 0.0, 0.6, 0.3]
"#;
    let config = HarmonizerConfig::from_yaml_str(yaml).unwrap();
    config.validate().unwrap();
    assert_eq!(config.threshold, 0.7);
    assert!(!config.analysis.parallel);
    assert!(config.analysis.memoize);
    assert_eq!(config.naming.extra_verbs[0].verb, "ship");
    assert_eq!(config.lexicon.overrides.entries()[0].token, "render");
}

#[test]
fn negative_threshold_is_rejected() {
    let config = HarmonizerConfig {
        threshold: -0.1,
        ..HarmonizerConfig::default()
    };
    let err = expect_validation_error(config.validate());
    assert!(matches!(err, HarmonizerError::Validation { .. }));
}

#[test]
fn zero_top_n_is_rejected() {
    let mut config = HarmonizerConfig::default();
    config.naming.top_n = 0;
    expect_validation_error(config.validate());
}

#[test]
fn blank_override_token_is_rejected() {
    let mut config = HarmonizerConfig::default();
    config.lexicon.overrides = OverrideDocument::new(vec![LexiconOverride::new(
        "",
        Coordinate::new(0.0, 0.0, 1.0, 0.0).unwrap(),
    )]);
    expect_validation_error(config.validate());
}

#[test]
fn yaml_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("harmonizer.yml");

    let mut config = HarmonizerConfig::default();
    config.threshold = 0.65;
    config.naming.enabled = false;
    config.to_yaml_file(&path).unwrap();

    let loaded = HarmonizerConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn json_files_are_supported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("harmonizer.json");
    std::fs::write(&path, r#"{"threshold": 0.9, "naming": {"top_n": 1}}"#).unwrap();

    let config = HarmonizerConfig::from_file(&path).unwrap();
    assert_eq!(config.threshold, 0.9);
    assert_eq!(config.naming.top_n, 1);
}

#[test]
fn lexicon_files_resolve_relative_to_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("words.yml"),
        "- token: ship\n  coordinates: [0.3, 0.0, 0.7, 0.0]\n",
    )
    .unwrap();
    let path = dir.path().join("harmonizer.yml");
    std::fs::write(
        &path,
        "lexicon:\n  files: [words.yml]\n  overrides:\n    - token: render\n      coordinates: [0.1, 0.0, 0.6, 0.3]\n",
    )
    .unwrap();

    let config = HarmonizerConfig::from_file(&path).unwrap();
    let document = config.lexicon.document().unwrap();
    let tokens: Vec<_> = document.entries().iter().map(|e| e.token.as_str()).collect();
    assert_eq!(tokens, ["ship", "render"]);
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = HarmonizerConfig::from_file("/definitely/not/here.yml").unwrap_err();
    assert!(matches!(err, HarmonizerError::Io { .. }));
}

#[test]
fn malformed_config_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("harmonizer.yml");
    std::fs::write(&path, "threshold: [not, a, number]\n").unwrap();

    let err = HarmonizerConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, HarmonizerError::Config { .. }));
    assert!(err.to_string().contains("harmonizer.yml"));
}
