use post_optimizer::config::EngineConfig;
use post_optimizer::{analyze, analyze_with_config, AnalyzeOptions};

#[test]
fn default_config_matches_plain_analyze() {
    let text = "Introducing our new 3 step guide. What do you think?";
    let options = AnalyzeOptions::default();
    assert_eq!(
        analyze(text, &options),
        analyze_with_config(text, &options, &EngineConfig::default())
    );
}

#[test]
fn config_round_trips_through_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("engine.toml");

    let mut config = EngineConfig::default();
    config.baselines.favorite = 45;
    config.aggregate.safety = 0.25;
    config.write(&path).unwrap();

    let (loaded, loaded_path) = EngineConfig::load(Some(path.clone())).unwrap();
    assert_eq!(loaded_path, Some(path));
    assert_eq!(loaded.baselines.favorite, 45);
    assert!((loaded.aggregate.safety - 0.25).abs() < 1e-9);
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.toml");
    std::fs::write(&path, "[baselines]\nreply = 10\n").unwrap();

    let (loaded, _) = EngineConfig::load(Some(path)).unwrap();
    assert_eq!(loaded.baselines.reply, 10);
    assert_eq!(loaded.baselines.favorite, 40);
    assert_eq!(loaded.format.ideal_max_chars, 200);
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.toml");
    std::fs::write(&path, "baselines = [").unwrap();

    let err = EngineConfig::load(Some(path)).unwrap_err();
    assert!(err.starts_with("failed to parse config"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let (loaded, _) = EngineConfig::load(Some(dir.path().join("absent.toml"))).unwrap();
    assert_eq!(loaded.baselines.reply, 30);
    assert!((loaded.aggregate.predictions - 0.5).abs() < 1e-9);
}
