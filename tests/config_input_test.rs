use anyhow::Result;
use nested_sum::config::toml_config::TomlConfig;
use nested_sum::config::DepthPolicy;
use nested_sum::utils::validation::Validate;
use nested_sum::{
    cross_check, BoundedFlatten, CrossCheck, InputSource, Number, RecursiveDescent, StrategyKind,
    SumEngine, SumError,
};
use tempfile::TempDir;

/// 從設定檔讀取輸入檔路徑與策略，完整跑一次加總
#[test]
fn test_toml_config_drives_bounded_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input_path = temp_dir.path().join("numbers.json");
    std::fs::write(&input_path, "[1, 2, [3, 4, [5, [6, 8]]]]")?;

    let config_content = format!(
        r#"
[sum]
strategy = "bounded"
max_depth = 4

[input]
file = "{}"
"#,
        input_path.to_string_lossy().replace('\\', "/")
    );
    let config_path = temp_dir.path().join("nested-sum.toml");
    std::fs::write(&config_path, config_content)?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;
    let settings = config.settings();
    assert_eq!(settings.strategy, StrategyKind::Bounded);
    assert_eq!(settings.depth_policy, DepthPolicy::Declared);

    let source = InputSource::select(None, settings.input_file.as_deref());
    let container = source.load()?;

    let engine = SumEngine::new(settings.bounded());
    assert_eq!(engine.run(&container)?, Number::Int(29));
    Ok(())
}

#[test]
fn test_declared_depth_too_small_fails_run() -> Result<()> {
    let config = TomlConfig::from_toml_str("[sum]\nstrategy = \"bounded\"\nmax_depth = 2\n")?;
    let settings = config.settings();

    let container = InputSource::Inline("[1, 2, [3, 4, [5, [6, 8]]]]".to_string()).load()?;
    let err = SumEngine::new(settings.bounded()).run(&container).unwrap_err();
    assert!(matches!(err, SumError::TypeMismatch { .. }));
    assert_eq!(err.exit_code(), 2);

    // 改用自動深度就能成功
    let config = TomlConfig::from_toml_str(
        "[sum]\nstrategy = \"bounded\"\nmax_depth = 2\ndepth_policy = \"auto\"\n",
    )?;
    let settings = config.settings();
    assert_eq!(SumEngine::new(settings.bounded()).run(&container)?, Number::Int(29));
    Ok(())
}

#[test]
fn test_nesting_limit_from_config() -> Result<()> {
    let config = TomlConfig::from_toml_str("[sum]\nnesting_limit = 2\n")?;
    let settings = config.settings();
    let engine = SumEngine::new(settings.recursive());

    let shallow = InputSource::Inline("[1, [2]]".to_string()).load()?;
    assert_eq!(engine.run(&shallow)?, Number::Int(3));

    let deep = InputSource::Inline("[1, [2, [3]]]".to_string()).load()?;
    let err = engine.run(&deep).unwrap_err();
    assert!(matches!(err, SumError::NestingLimitExceeded { limit: 2, .. }));
    Ok(())
}

/// 兩種策略一起跑時也要套用設定檔中的巢狀上限
#[test]
fn test_both_strategies_respect_nesting_limit() -> Result<()> {
    let config = TomlConfig::from_toml_str("[sum]\nstrategy = \"both\"\nnesting_limit = 1\n")?;
    config.validate()?;
    let settings = config.settings();
    assert_eq!(settings.strategy, StrategyKind::Both);

    let container = InputSource::Inline("[1, [2, [3]]]".to_string()).load()?;
    let strategy = CrossCheck::new(settings.bounded(), settings.recursive());
    let err = SumEngine::new(strategy).run(&container).unwrap_err();
    match err {
        SumError::NestingLimitExceeded { limit, ref path } => {
            assert_eq!(limit, 1);
            assert_eq!(path, "$[1]");
        }
        ref other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.exit_code(), 2);

    let shallow = InputSource::Inline("[1, 2, 3]".to_string()).load()?;
    assert_eq!(SumEngine::new(strategy).run(&shallow)?, Number::Int(6));
    Ok(())
}

#[test]
fn test_cross_check_on_loaded_input() -> Result<()> {
    let container = InputSource::Inline("[0.1, [0.2, [0.3]], 4]".to_string()).load()?;
    let sum = cross_check(&container, &BoundedFlatten::auto(), &RecursiveDescent::new())?;
    assert_eq!(sum, Number::Float(0.1 + 0.2 + 0.3 + 4.0));
    Ok(())
}

#[test]
fn test_unbalanced_input_reports_offset() {
    let err = InputSource::Inline("[1, [2, 3]".to_string()).load().unwrap_err();
    match err {
        SumError::UnbalancedInput { offset, .. } => assert_eq!(offset, 0),
        other => panic!("unexpected error: {:?}", other),
    }
}
